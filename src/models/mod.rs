//! Data models shared across the crate.

pub mod bar;
pub mod indicators;
pub mod summary;
