//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the core logic and the remote
//! fitness platform. Implementations live in the `adapters` module.

mod activity_source;

pub use activity_source::ActivitySource;
