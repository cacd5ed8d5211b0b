// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports public API for graph state and rendering.

pub mod panel;
pub mod sample;
pub mod bounds;
pub mod transform;
pub mod surface;
pub mod render;
pub mod theme;
pub mod types;

pub use panel::{DisplayConfig, GraphPanel};
pub use sample::{samples_from_xy, Sample};
pub use bounds::Bounds;
pub use transform::Transform;
pub use surface::{Color, DrawCmd, RecordingSurface, Surface};
pub use render::render_graph;
pub use theme::Theme;
