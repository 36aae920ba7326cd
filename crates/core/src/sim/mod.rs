//! Simulation driver and reference trace loading.
//!
//! Provides the address file loader and the simulator that runs a loaded
//! trace through the MMU.

/// Address file parsing.
pub mod loader;

/// Run driver.
pub mod simulator;

pub use loader::ReferenceTrace;
pub use simulator::Simulator;
