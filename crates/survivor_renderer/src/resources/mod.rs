/// Low-level GPU allocation helpers shared by the renderer modules.
pub mod buffer;
pub mod texture;
