//! ECS components for fading panels.
//!
//! Submodules overview:
//! - [`alphafader`] – fade controller that moves a panel's alpha toward 0 or 1
//! - [`canvasgroup`] – alpha container read by the renderer

pub mod alphafader;
pub mod canvasgroup;
