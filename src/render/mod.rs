//! WebGPU rendering module
//!
//! Scene shapes are tessellated into one triangle list per frame; text runs
//! go through the glyphon atlas in a second pass over the same render pass.

pub mod pipeline;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene_vertices;
pub use text::TextContext;
pub use vertex::Vertex;
