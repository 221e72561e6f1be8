//! Patterns sub-module: lazily-initialised singletons.

pub mod singleton;
