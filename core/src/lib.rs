//! Connect-scan engine for `sweepr`.
//!
//! [`scanner::PortScanner`] walks a validated
//! [`ScanPlan`](sweepr_common::plan::ScanPlan) host by host and probes each
//! host's ports through a [`scanner::Prober`], with a bounded number of
//! attempts in flight.

pub mod error;
pub mod network;
pub mod scanner;
