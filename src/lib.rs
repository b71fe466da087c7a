//! Event Scripts - named event script bindings for Aurora-style game objects

pub mod core;
pub mod script;
