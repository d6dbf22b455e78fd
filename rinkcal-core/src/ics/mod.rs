//! ICS file generation.
//!
//! This module writes the schedule out as an RFC 5545 calendar.

mod generate;

pub use generate::generate_ics;
