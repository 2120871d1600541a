//! ECS resources made available to systems.
//!
//! Overview
//! - `fadeconfig` – INI-backed fade defaults and frame pacing
//! - `panelregistry` – panel names to entities
//! - `worldtime` – simulation time and delta
pub mod fadeconfig;
pub mod panelregistry;
pub mod worldtime;
