//! Command implementations for the arzpatch CLI
//!
//! Every command collects diagnostics into the bag it is given; the caller prints
//! them and decides the exit status.

pub mod discover;
pub mod helpers;
pub mod list;
pub mod resolve;
