//! scatter-rs: interactive temperature scatter plot engine.
//!
//! Daily minimum/maximum temperatures are projected onto linear scales,
//! summarized by marginal kernel density curves and made hoverable through a
//! Voronoi tessellation. A month legend doubles as a date brush. Hosts drive
//! the engine with pointer events and receive retained-mode render frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PointerEvent, ScatterEngine, ScatterEngineConfig};
pub use error::{ScatterError, ScatterResult};
