//! Pony - demo application for the Pony engine libraries
//!
//! Exposes the configuration layer and the headless simulation so both can be exercised
//! by integration tests.

pub mod config;
pub mod systems;
