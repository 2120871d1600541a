//! Alpha fade controller component.
//!
//! An [`AlphaFader`] gradually moves the alpha of a
//! [`CanvasGroup`](super::canvasgroup::CanvasGroup) toward 1 (fade in) or
//! 0 (fade out) at `fade_speed` alpha units per second.
//!
//! # How It Works
//!
//! 1. Game logic calls [`AlphaFader::fade_in`] or [`AlphaFader::fade_out`]
//!    (directly, or through a
//!    [`FadeRequestEvent`](crate::events::fade::FadeRequestEvent))
//! 2. The [`alpha_fader_system`](crate::systems::fade::alpha_fader_system)
//!    calls [`AlphaFader::tick`] once per frame with the bound group's alpha
//! 3. Alpha snaps to the target once it is within one step of it, and the
//!    fader reports that it is no longer in transition
//!
//! The last request wins: calling `fade_out` while fading in redirects the
//! fade on the next tick.
//!
//! # Binding
//!
//! By default the fader drives the `CanvasGroup` on its own entity. Use
//! [`AlphaFader::with_target`] to drive the group of another entity.

use bevy_ecs::prelude::{Component, Entity};

const DEFAULT_FADE_SPEED: f32 = 1.0;

/// Move `current` toward `target` by at most `max_delta`.
///
/// Snaps exactly to `target` when it is within `max_delta`, so repeated calls
/// terminate on the target value rather than hovering around it.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        target
    } else {
        current + diff.signum() * max_delta
    }
}

/// Fades the alpha of a bound [`CanvasGroup`](super::canvasgroup::CanvasGroup) in or out.
#[derive(Component, Clone, Copy, Debug)]
pub struct AlphaFader {
    /// Alpha units per second. Higher is faster.
    pub fade_speed: f32,
    /// `true` fades toward 1 (visible), `false` toward 0 (hidden).
    pub fade_direction: bool,
    /// Entity owning the driven `CanvasGroup`. `None` means this entity.
    pub target: Option<Entity>,
    in_transition: bool,
}

impl AlphaFader {
    /// Create a fader with the given speed, fading in.
    pub fn new(fade_speed: f32) -> Self {
        AlphaFader {
            fade_speed,
            fade_direction: true,
            target: None,
            in_transition: false,
        }
    }
    pub fn with_direction(mut self, fade_direction: bool) -> Self {
        self.fade_direction = fade_direction;
        self
    }
    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    /// Entity whose group this fader drives, given the entity it lives on.
    pub fn target_or(&self, owner: Entity) -> Entity {
        self.target.unwrap_or(owner)
    }

    /// Start fading toward fully visible.
    pub fn fade_in(&mut self) {
        self.in_transition = true;
        self.fade_direction = true;
    }

    /// Start fading toward fully hidden.
    pub fn fade_out(&mut self) {
        self.in_transition = true;
        self.fade_direction = false;
    }

    pub fn is_in_transition(&self) -> bool {
        self.in_transition
    }

    /// Alpha value the fader is currently heading to.
    pub fn target_alpha(&self) -> f32 {
        if self.fade_direction { 1.0 } else { 0.0 }
    }

    /// Advance `alpha` by one frame of `delta` seconds.
    ///
    /// Returns whether the fade is still in transition afterwards. Nothing
    /// changes when alpha already rests on the current target, including the
    /// transition flag.
    pub fn tick(&mut self, alpha: &mut f32, delta: f32) -> bool {
        let at_rest = if self.fade_direction {
            *alpha == 1.0
        } else {
            *alpha == 0.0
        };
        if at_rest {
            return self.in_transition;
        }
        let step = self.fade_speed * delta.max(0.0);
        *alpha = move_towards(alpha.clamp(0.0, 1.0), self.target_alpha(), step);
        self.in_transition = *alpha != 0.0 && *alpha != 1.0;
        self.in_transition
    }
}

impl Default for AlphaFader {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_SPEED)
    }
}
