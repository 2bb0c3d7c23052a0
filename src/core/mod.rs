//! Core domain logic for strava-gears
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Activity, Gear, Rule)
//! - `services/` - Rule evaluation and the auto-assign workflow
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
