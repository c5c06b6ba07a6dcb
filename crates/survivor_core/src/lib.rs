// survivor_core: shared types used by the game, the renderer and the runner

pub mod color;
pub mod draw;
pub mod sprite;
pub mod time;
pub mod view;

// GPU context shared by the renderer and the runner
#[cfg(feature = "gpu")]
pub mod context;

// input helper for keyboard / mouse state
#[cfg(feature = "input")]
pub mod input;

pub use color::Color;
pub use draw::{DrawCommand, DrawList, SpriteDraw};
pub use sprite::{FrameSet, SpriteFrame, TextureId};
pub use time::{FixedStep, Time, TimeClock};
pub use view::{Rect, View2D};

// re-export common input types so callers don't need to depend on winit
#[cfg(feature = "input")]
pub use input::{InputEvent, InputState, KeyCode, MouseButton};

pub use glam;
