//! Fade request and completion events.
//!
//! Game logic that does not own a mutable query on [`AlphaFader`] can trigger a
//! [`FadeRequestEvent`] instead; the [`fade_request_observer`] forwards it to
//! the entity's fader. When a fade settles on its target, the
//! [`alpha_fader_system`](crate::systems::fade::alpha_fader_system) triggers a
//! [`FadeFinishedEvent`].
//!
//! # Example
//!
//! ```ignore
//! // "show dialog" button handler
//! commands.trigger(FadeRequestEvent::fade_in(dialog));
//!
//! commands.add_observer(|trigger: On<FadeFinishedEvent>| {
//!     if !trigger.visible {
//!         // dialog fully hidden, safe to continue
//!     }
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::alphafader::AlphaFader;

/// Which way a requested fade goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    /// Toward fully visible.
    In,
    /// Toward fully hidden.
    Out,
}

/// Asks the [`AlphaFader`] on `entity` to fade in or out.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeRequestEvent {
    pub entity: Entity,
    pub direction: FadeDirection,
}

impl FadeRequestEvent {
    pub fn fade_in(entity: Entity) -> Self {
        Self {
            entity,
            direction: FadeDirection::In,
        }
    }
    pub fn fade_out(entity: Entity) -> Self {
        Self {
            entity,
            direction: FadeDirection::Out,
        }
    }
}

/// Emitted when a fader stops being in transition.
///
/// `visible` is `true` when the group ended fully opaque.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeFinishedEvent {
    /// The entity carrying the fader.
    pub entity: Entity,
    pub visible: bool,
}

/// Observer that applies [`FadeRequestEvent`]s to the target fader.
pub fn fade_request_observer(trigger: On<FadeRequestEvent>, mut faders: Query<&mut AlphaFader>) {
    let request = *trigger.event();
    let Ok(mut fader) = faders.get_mut(request.entity) else {
        warn!(
            "FadeRequestEvent for {:?} ignored: entity has no AlphaFader",
            request.entity
        );
        return;
    };
    debug!("Fade {:?} requested on {:?}", request.direction, request.entity);
    match request.direction {
        FadeDirection::In => fader.fade_in(),
        FadeDirection::Out => fader.fade_out(),
    }
}
