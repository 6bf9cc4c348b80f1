//! videofix - fix common problems in MKV files
//!
//! This library crate exposes the configuration and per-file workflow for
//! integration testing.

pub mod config;
pub mod processor;
