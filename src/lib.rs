//! Box-pushing puzzle engine with a terminal front end.
//!
//! [`core`] holds the map state machine (grid, level loading, move resolution,
//! win checking and the play session). Everything else is presentation glue
//! that consumes the events the core hands back.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod feedback;
pub mod levels;
pub mod summary;

#[cfg(test)]
mod test;
