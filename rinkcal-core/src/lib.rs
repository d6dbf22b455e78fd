//! Core types for the rinkcal pipeline.
//!
//! This crate provides the schedule wire model, the derived calendar event
//! type, and ICS generation. Configuration and network IO live in the CLI.

pub mod builder;
pub mod error;
pub mod event;
pub mod ics;
pub mod schedule;

pub use builder::{build_events, BuildOptions};
pub use error::{ScheduleError, ScheduleResult};
pub use event::GameEvent;
pub use ics::generate_ics;
pub use schedule::{GameRecord, GameState, ScheduleResponse, TeamRef, Venue};
