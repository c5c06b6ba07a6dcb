// survivor_game: window-independent gameplay for the Survivor shooter

pub mod aim;
pub mod animation;
pub mod bullet;
pub mod camera;
pub mod config;
pub mod player;
pub mod reload;
pub mod state;

pub use animation::{AnimationSet, Pose};
pub use bullet::{Bullet, Bullets};
pub use camera::{Camera, CameraMode};
pub use config::GameConfig;
pub use player::{MoveKeys, Player};
pub use reload::ReloadTimer;
pub use state::GameState;
