//! # oa-core
//!
//! Core configuration types for Community Platform RS.
//!
//! This crate provides the foundational building blocks used across the other crates:
//! - Application configuration (deployment target, site URL)
//! - Configuration errors

pub mod config;

pub use config::*;
