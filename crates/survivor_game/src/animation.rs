use survivor_core::{FrameSet, SpriteFrame};

/// The animation the player shows in a given update.  Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Idle,
    Moving,
    Reloading,
}

/// The three frame sequences the player sprite cycles through.
#[derive(Debug, Clone)]
pub struct AnimationSet {
    pub moving: FrameSet,
    pub idle: FrameSet,
    pub reloading: FrameSet,
}

impl AnimationSet {
    pub fn new(moving: FrameSet, idle: FrameSet, reloading: FrameSet) -> Self {
        Self {
            moving,
            idle,
            reloading,
        }
    }

    pub fn frames(&self, pose: Pose) -> &FrameSet {
        match pose {
            Pose::Idle => &self.idle,
            Pose::Moving => &self.moving,
            Pose::Reloading => &self.reloading,
        }
    }

    /// Frame shown for `pose` at the shared counter value `index`.
    pub fn frame(&self, pose: Pose, index: usize) -> SpriteFrame {
        self.frames(pose).frame(index)
    }
}
