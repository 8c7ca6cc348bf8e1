//! Simulation utilities and program loading.
//!
//! Provides the loader that turns program listings into memory images and
//! places them in a CPU before the run loop starts.

pub mod loader;
