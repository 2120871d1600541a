//! canvasfade library.
//!
//! Opacity fades for UI panels hosted in a `bevy_ecs` world. This module
//! exposes the components, events, resources and systems for use in
//! integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod resources;
pub mod scenario;
pub mod systems;
