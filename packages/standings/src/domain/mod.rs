//! Pure domain logic: aggregate arithmetic over match results.
//!
//! No I/O here. Everything in this module is deterministic and unit-testable
//! without a database.

pub mod tally;
