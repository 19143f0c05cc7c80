//! Engine test support utilities
//!
//! Shared by the engine's unit tests and integration tests.

pub mod logging;
