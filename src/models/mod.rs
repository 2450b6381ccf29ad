//! Content data shapes for the center website.
//!
//! These models match the JSON documents the admin surface writes, so a
//! stored document round-trips verbatim. Every list and optional field is
//! serde-defaulted: a partially-shaped stored document deserializes with
//! empty fields instead of erroring.

mod about_info;
mod category;
mod community;
mod home_config;
mod program;
mod site_assets;
mod site_info;
mod team;

pub use about_info::*;
pub use category::*;
pub use community::*;
pub use home_config::*;
pub use program::*;
pub use site_assets::*;
pub use site_info::*;
pub use team::*;
