//! Standings test support utilities
//!
//! Unified logging initialization shared by the unit and integration test
//! suites.

pub mod logging;
