//! Opacity container for UI panels.
//!
//! [`CanvasGroup`] owns the alpha of a panel. Renderers read it; the
//! [`alpha_fader_system`](crate::systems::fade::alpha_fader_system) is the
//! only writer by convention.

use bevy_ecs::prelude::Component;

/// Opacity of a panel and everything drawn under it.
///
/// `alpha` is kept in `[0.0, 1.0]`: 0 is fully transparent, 1 fully opaque.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CanvasGroup {
    pub alpha: f32,
}

impl CanvasGroup {
    /// Create a group with the given alpha, clamped to `[0.0, 1.0]`.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Fully opaque group.
    pub fn visible() -> Self {
        Self { alpha: 1.0 }
    }

    /// Fully transparent group.
    pub fn hidden() -> Self {
        Self { alpha: 0.0 }
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn is_visible(&self) -> bool {
        self.alpha == 1.0
    }

    pub fn is_hidden(&self) -> bool {
        self.alpha == 0.0
    }
}

impl Default for CanvasGroup {
    fn default() -> Self {
        Self::visible()
    }
}
