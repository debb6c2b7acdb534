// iconforge - core/mod.rs
//
// Core layer: colours, data model, size tables and the compositor.
// Dependencies: `image` for pixel buffers, standard library otherwise.
// Must NOT touch the filesystem.

pub mod color;
pub mod compositor;
pub mod model;
pub mod targets;
