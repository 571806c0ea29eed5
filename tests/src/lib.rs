//! End-to-end tests: raw tokens in, per-host reports out, against real
//! loopback listeners.

mod scan;
