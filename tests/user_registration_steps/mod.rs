//! Step definitions for user registration scenarios.

mod given;
mod then;
mod when;
pub mod world;
