use glam::Vec2;
use survivor_core::Rect;

use crate::animation::Pose;

/// Directional keys held during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Facing, in degrees; recomputed from the cursor every update.
    pub rotation_deg: f32,
    /// Shared counter for every animation; read cyclically.
    pub current_frame: usize,
    pub speed: f32,
    pub is_moving: bool,
    pub is_reloading: bool,
    pub is_aiming: bool,
    pose: Pose,
}

impl Player {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            rotation_deg: 0.0,
            current_frame: 0,
            speed,
            is_moving: false,
            is_reloading: false,
            is_aiming: false,
            pose: Pose::Idle,
        }
    }

    /// Animation rendered this update.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Translate by `speed` along each held axis and keep the player inside
    /// `bounds`.  Up beats down and left beats right while the preferred key
    /// can still move; once it is blocked at its edge the opposite key takes
    /// over.  An axis only moves while the player is strictly inside the edge
    /// it is heading for.
    ///
    /// Returns `true` if either axis moved.
    pub fn step(&mut self, keys: MoveKeys, bounds: Rect) -> bool {
        let mut moved = false;

        if keys.up && self.position.y > bounds.min.y {
            self.position.y -= self.speed;
            moved = true;
        } else if keys.down && self.position.y < bounds.max.y {
            self.position.y += self.speed;
            moved = true;
        }

        if keys.left && self.position.x > bounds.min.x {
            self.position.x -= self.speed;
            moved = true;
        } else if keys.right && self.position.x < bounds.max.x {
            self.position.x += self.speed;
            moved = true;
        }

        self.position = bounds.clamp(self.position);
        moved
    }

    /// Move the shared frame counter on by one, wrapping at `count`.
    pub fn advance_frame(&mut self, count: usize) {
        if count > 0 {
            self.current_frame = (self.current_frame + 1) % count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(1000.0, 800.0))
    }

    #[test]
    fn opposing_keys_resolve_to_up_and_left() {
        let mut p = Player::new(Vec2::new(500.0, 400.0), 1.0);
        let keys = MoveKeys {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert!(p.step(keys, world()));
        assert_eq!(p.position, Vec2::new(499.0, 399.0));
    }

    #[test]
    fn blocked_key_yields_to_the_opposite_one() {
        // at the top edge with W and S held: W is blocked so S moves
        let mut p = Player::new(Vec2::new(500.0, 0.0), 1.0);
        let keys = MoveKeys {
            up: true,
            down: true,
            ..Default::default()
        };
        assert!(p.step(keys, world()));
        assert_eq!(p.position, Vec2::new(500.0, 1.0));

        // same on the left edge with A and D held
        let mut p = Player::new(Vec2::new(0.0, 400.0), 1.0);
        let keys = MoveKeys {
            left: true,
            right: true,
            ..Default::default()
        };
        assert!(p.step(keys, world()));
        assert_eq!(p.position, Vec2::new(1.0, 400.0));
    }

    #[test]
    fn single_key_at_its_edge_does_not_move() {
        let mut p = Player::new(Vec2::new(500.0, 0.0), 1.0);
        let keys = MoveKeys {
            up: true,
            ..Default::default()
        };
        assert!(!p.step(keys, world()));
        assert_eq!(p.position, Vec2::new(500.0, 0.0));
    }

    #[test]
    fn overshoot_is_clamped() {
        let mut p = Player::new(Vec2::new(995.0, 10.0), 30.0);
        let keys = MoveKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        assert!(p.step(keys, world()));
        assert_eq!(p.position, Vec2::new(1000.0, 0.0));
    }

    #[test]
    fn frame_counter_wraps() {
        let mut p = Player::new(Vec2::ZERO, 1.0);
        for _ in 0..5 {
            p.advance_frame(4);
        }
        assert_eq!(p.current_frame, 1);
        p.advance_frame(0);
        assert_eq!(p.current_frame, 1);
    }
}
