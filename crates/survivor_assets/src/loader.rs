use std::io::ErrorKind;
use std::path::Path;

use glam::Vec2;
use image::RgbaImage;
use survivor_core::{FrameSet, SpriteFrame};

use crate::error::AssetError;
use crate::manifest::{AssetManifest, SequenceLayout};
use crate::store::ImageStore;

/// Everything the game needs from disk, decoded and registered.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    pub store: ImageStore,
    pub background: SpriteFrame,
    pub moving: FrameSet,
    pub idle: FrameSet,
    pub reloading: FrameSet,
}

/// Read and decode one image as RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AssetError::Missing {
            path: path.to_path_buf(),
        },
        _ => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

fn register(store: &mut ImageStore, path: &Path) -> Result<SpriteFrame, AssetError> {
    let image = load_image(path)?;
    let size = Vec2::new(image.width() as f32, image.height() as f32);
    log::debug!("loaded {} ({}x{})", path.display(), size.x, size.y);
    let id = store.insert(path.display().to_string(), image);
    Ok(SpriteFrame::new(id, size))
}

fn load_sequence(
    store: &mut ImageStore,
    manifest: &AssetManifest,
    seq: &SequenceLayout,
) -> Result<FrameSet, AssetError> {
    let frames = manifest
        .sequence_paths(seq)
        .iter()
        .map(|path| register(store, path))
        .collect::<Result<Vec<_>, _>>()?;
    FrameSet::new(frames).ok_or_else(|| AssetError::EmptySequence {
        name: seq.name.clone(),
    })
}

/// Load the background and the three player animations.  Stops at the first
/// file that is missing or cannot be decoded.
pub fn load_assets(manifest: &AssetManifest) -> Result<LoadedAssets, AssetError> {
    let mut store = ImageStore::new();
    let background = register(&mut store, &manifest.background_path())?;
    let moving = load_sequence(&mut store, manifest, &manifest.moving)?;
    let idle = load_sequence(&mut store, manifest, &manifest.idle)?;
    let reloading = load_sequence(&mut store, manifest, &manifest.reloading)?;

    log::info!(
        "loaded {} images from {}",
        store.len(),
        manifest.root.display()
    );
    Ok(LoadedAssets {
        store,
        background,
        moving,
        idle,
        reloading,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // per-test directory so tests can run in parallel
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "survivor_assets_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, w: u32, h: u32) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::from_pixel(w, h, image::Rgba([10, 200, 30, 255]))
            .save(path)
            .unwrap();
    }

    fn populate(manifest: &AssetManifest) {
        write_png(&manifest.background_path(), 16, 8);
        for (i, seq) in [&manifest.moving, &manifest.idle, &manifest.reloading]
            .into_iter()
            .enumerate()
        {
            for path in manifest.sequence_paths(seq) {
                write_png(&path, 4 + i as u32, 3);
            }
        }
    }

    #[test]
    fn loads_full_layout() {
        let dir = scratch_dir("full");
        let manifest = AssetManifest::with_root(&dir);
        populate(&manifest);

        let assets = load_assets(&manifest).unwrap();
        assert_eq!(assets.store.len(), 13);
        assert_eq!(assets.background.size, Vec2::new(16.0, 8.0));
        assert_eq!(assets.moving.len(), 4);
        assert_eq!(assets.idle.frame(0).size, Vec2::new(5.0, 3.0));
        // ids are handed out in load order
        assert_eq!(assets.background.texture.index(), 0);
        assert_eq!(assets.moving.frame(0).texture.index(), 1);
        assert_eq!(assets.reloading.frame(3).texture.index(), 12);

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_frame_is_reported() {
        let dir = scratch_dir("missing");
        let manifest = AssetManifest::with_root(&dir);
        populate(&manifest);
        let gone = manifest.sequence_paths(&manifest.idle)[2].clone();
        std::fs::remove_file(&gone).unwrap();

        match load_assets(&manifest) {
            Err(AssetError::Missing { path }) => assert_eq!(path, gone),
            other => panic!("expected Missing, got {other:?}"),
        }

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn garbage_file_fails_to_decode() {
        let dir = scratch_dir("garbage");
        let manifest = AssetManifest::with_root(&dir);
        populate(&manifest);
        std::fs::write(manifest.background_path(), b"not a png").unwrap();

        let err = load_assets(&manifest).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }), "{err:?}");
        assert_eq!(err.path(), Some(manifest.background_path().as_path()));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn zero_frames_is_an_error() {
        let dir = scratch_dir("empty");
        let manifest = AssetManifest {
            frame_count: 0,
            ..AssetManifest::with_root(&dir)
        };
        populate(&manifest);

        assert!(matches!(
            load_assets(&manifest),
            Err(AssetError::EmptySequence { .. })
        ));

        std::fs::remove_dir_all(dir).ok();
    }
}
