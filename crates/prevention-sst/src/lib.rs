//! Core engine for Quebec SST (LMRSST/LSST) prevention program generation.
//!
//! The crate is organized the same way the host service consumes it: static
//! catalogs and the pure generation pipeline live under
//! [`workflows::prevention`], batch intake of establishment rosters under
//! [`workflows::roster`], and the shared application plumbing (config,
//! telemetry, error surface) at the crate root.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
