// Upstream API module.
// HTTP client and types for the profile-info and contribution-history sources.

#![allow(dead_code, unused_imports)]

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;
