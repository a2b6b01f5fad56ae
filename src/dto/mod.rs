//! Request and response types for the JSON API.

pub mod health;
pub mod shorten;
