//! Utility modules shared by the stores and the command-line front end.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Calendar-day folding, the configurable day zone and the injectable clock

pub mod datetime;
