//! Domain models for arzpatch
//!
//! This module contains the value types shared by discovery and resolution.
//! They hold evidence only; the behavior lives in [`crate::resolver`],
//! [`crate::engine`] and [`crate::module`].

pub mod bundle;
pub mod discovered;
pub mod resource;

pub use bundle::Bundle;
pub use discovered::Discovered;
pub use resource::{Resource, ResourceType};
