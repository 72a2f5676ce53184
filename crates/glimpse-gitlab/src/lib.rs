//! GitLab REST API client.
//!
//! `GitlabClient` is the reqwest-backed implementation of the
//! [`GitlabDirectory`](glimpse_core::gitlab::GitlabDirectory) seam.

pub mod client;

pub use client::GitlabClient;
