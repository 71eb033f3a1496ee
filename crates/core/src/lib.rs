//! `autoconcern-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod code;
pub mod describe;
pub mod entity;
pub mod error;
pub mod money;

pub use code::{CodeRegistry, EntityCode, CODE_MAX, CODE_MIN};
pub use describe::Describable;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::Money;
