//! Polling pipeline.
//!
//! - `check_response`: validate the payload shape
//! - `parse_status`: render the notification for one entry
//! - `PollingLoop`: fetch → validate → extract → notify → sleep
//! - `startup`: gate the loop on configuration and credentials

pub mod extract;
pub mod poll;
pub mod startup;
pub mod validate;

pub use extract::{StatusChange, parse_status};
pub use poll::{CycleOutcome, PollingLoop};
pub use validate::check_response;
