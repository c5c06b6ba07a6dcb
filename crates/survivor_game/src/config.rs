use glam::Vec2;

/// Gameplay tuning.  Speeds are expressed per update, not per second: the
/// runner calls `GameState::update` at a fixed tick rate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Playfield extent; the player is kept inside `[0, w] × [0, h]`.
    pub world_size: Vec2,
    /// Player translation per update along each held axis.
    pub movement_speed: f32,
    /// Bullet translation per update.
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Seconds after which a reload ends on its own.
    pub reload_duration: f32,
    /// Extent multiplier of the aiming view.
    pub zoom_factor: f32,
    /// Uniform scale applied to the player sprite.
    pub player_scale: f32,
    pub aim_dash_length: f32,
    pub aim_dash_gap: f32,
    pub aim_line_thickness: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_size: Vec2::new(1000.0, 800.0),
            movement_speed: 0.05,
            bullet_speed: 1.0,
            bullet_radius: 4.0,
            reload_duration: 0.1,
            zoom_factor: 2.0,
            player_scale: 0.5,
            aim_dash_length: 10.0,
            aim_dash_gap: 10.0,
            aim_line_thickness: 1.5,
        }
    }
}

impl GameConfig {
    /// Where the player spawns.
    pub fn world_center(&self) -> Vec2 {
        self.world_size * 0.5
    }
}
