//! Testing infrastructure for opsdeck integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory plus CLI execution helpers
//! - `directories`: controllable `UserDirectory` implementations
//! - `fixtures`: canned dataset accessors

pub mod directories;
pub mod fixtures;
pub mod world;

pub use directories::{FailingDirectory, Release, ScriptedDirectory};
pub use world::TestWorld;
