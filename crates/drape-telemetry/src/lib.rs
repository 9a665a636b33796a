//! # drape-telemetry
//!
//! Event bus for fitting telemetry. Emits structured events
//! (normalization, deformation, cloth build and step summaries) that are
//! consumed by pluggable sinks (tracing, in-memory capture, ...).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, FitEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
