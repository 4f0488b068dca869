//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `pricing` - Rule table and estimate calculator
//! - `catalog` - Portfolio projects, materials, pricing rows, reviews, services
//! - `consultation` - Consultation bookings and their lifecycle
//! - `assistant` - Design-assistant persona and stored exchanges

pub mod assistant;
pub mod catalog;
pub mod consultation;
pub mod foundation;
pub mod pricing;
