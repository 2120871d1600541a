//! Per-frame systems.
//!
//! Submodules overview
//! - [`fade`] – advance every alpha fader against its canvas group
//! - [`time`] – update simulation time and delta

pub mod fade;
pub mod time;
