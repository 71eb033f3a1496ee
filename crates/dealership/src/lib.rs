//! Dealership domain module.
//!
//! Factories own the inventory of available cars; customers request cars by
//! model and take ownership of them on dispatch. All operations are
//! synchronous, single-threaded domain logic.

pub mod customer;
pub mod factory;

pub use customer::{Customer, CustomerDetails};
pub use factory::Factory;
