//! Vehicle domain module.
//!
//! This crate contains business rules for engines and cars, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod car;
pub mod engine;

pub use car::{Car, CarStatus};
pub use engine::Engine;
