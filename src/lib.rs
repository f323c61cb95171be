//! Thai segmentation engine: engine-name dispatch and UniFFI bindings over
//! `thai_core`.

uniffi::setup_scaffolding!();

pub mod api;
pub mod registry;
mod trace_init;

pub use registry::{EngineRegistry, RegistryError};
pub use trace_init::init_tracing;
