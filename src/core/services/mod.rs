//! Business logic services
//!
//! Orchestration logic that operates on domain models.
//!
//! - [`assigner`] - First-match-wins rule evaluation
//! - [`auto_assign`] - Apply an assigner to recent activities through an
//!   [`ActivitySource`](super::ports::ActivitySource)

pub mod assigner;
pub mod auto_assign;

pub use assigner::GearAssigner;
pub use auto_assign::{AssignmentOutcome, AutoAssignOptions, AutoAssignReport, auto_assign};
