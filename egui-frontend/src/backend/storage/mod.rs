//! # Storage Module
//!
//! Storage abstraction for the chore tracker. The only backend is the
//! in-memory store in [`memory`]; nothing survives an app restart.

pub mod memory;
pub mod traits;
