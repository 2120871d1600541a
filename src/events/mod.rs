//! Event types and observers.
//!
//! Submodules:
//! - [`fade`] – fade requests addressed to a panel and fade completion notices
pub mod fade;
