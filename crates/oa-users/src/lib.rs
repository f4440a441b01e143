//! # oa-users
//!
//! User identity lookup for Community Platform RS.
//!
//! Wraps the deployment's external identity provider behind a narrow trait
//! and normalizes every lookup failure to an absent result, so digest
//! composition can proceed for the remaining recipients when a single
//! account is missing or the provider is briefly unreachable.

pub mod identity;

pub use identity::{IdentityError, IdentityLookup, IdentityProvider};
