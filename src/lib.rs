//! hostsnap — one-shot snapshot of Linux host state.
//!
//! Provides:
//! - `collector` — accessors over `/proc` pseudo-files and native syscalls,
//!   plus the orchestrator assembling a full report
//! - `report` — the `HostReport` data model and unit-conversion helpers
//! - `view` — pure text rendering of a report

pub mod collector;
pub mod report;
pub mod view;
