use std::path::{Path, PathBuf};

/// One numbered animation: `<root>/<dir>/<prefix><n>.png` for `n` in
/// `1..=frame_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLayout {
    pub name: String,
    pub dir: String,
    pub prefix: String,
}

impl SequenceLayout {
    pub fn new(name: &str, dir: &str, prefix: &str) -> Self {
        Self {
            name: name.to_owned(),
            dir: dir.to_owned(),
            prefix: prefix.to_owned(),
        }
    }
}

/// Where the startup images live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub root: PathBuf,
    pub background: String,
    pub moving: SequenceLayout,
    pub idle: SequenceLayout,
    pub reloading: SequenceLayout,
    pub frame_count: usize,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            background: "grass.png".to_owned(),
            moving: SequenceLayout::new("move", "move", "survivor-move_rifle_"),
            idle: SequenceLayout::new("idle", "idle", "survivor-idle_rifle_"),
            reloading: SequenceLayout::new("reload", "reload", "survivor-reload_rifle_"),
            frame_count: 4,
        }
    }
}

impl AssetManifest {
    /// Default layout under a different root directory.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn background_path(&self) -> PathBuf {
        self.root.join(&self.background)
    }

    /// Frame paths of `seq`, in playback order.
    pub fn sequence_paths(&self, seq: &SequenceLayout) -> Vec<PathBuf> {
        (1..=self.frame_count)
            .map(|n| self.root.join(&seq.dir).join(format!("{}{}.png", seq.prefix, n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let m = AssetManifest::default();
        assert_eq!(m.background_path(), PathBuf::from("assets/grass.png"));
        let idle = m.sequence_paths(&m.idle);
        assert_eq!(idle.len(), 4);
        assert_eq!(idle[0], PathBuf::from("assets/idle/survivor-idle_rifle_1.png"));
        assert_eq!(idle[3], PathBuf::from("assets/idle/survivor-idle_rifle_4.png"));
    }
}
