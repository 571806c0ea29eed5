//! Shared building blocks for `sweepr`: the IPv4 address model, host and
//! port expansion, the validated [`plan::ScanPlan`] and scan configuration.

pub mod config;
pub mod error;
pub mod network;
pub mod plan;
