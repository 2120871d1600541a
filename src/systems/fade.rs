//! Alpha fade system.
//!
//! [`alpha_fader_system`] advances every [`AlphaFader`] once per frame
//! against the [`CanvasGroup`] it is bound to, using the scaled delta from
//! [`WorldTime`](crate::resources::worldtime::WorldTime).
//!
//! # System Flow
//!
//! Each frame, for every fader:
//!
//! 1. Resolve the bound entity (the fader's own entity unless a target is set)
//! 2. Tick the fader against that entity's `CanvasGroup` alpha
//! 3. Write the alpha back only if it changed
//! 4. Trigger [`FadeFinishedEvent`] when the transition settles

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::alphafader::AlphaFader;
use crate::components::canvasgroup::CanvasGroup;
use crate::events::fade::FadeFinishedEvent;
use crate::resources::worldtime::WorldTime;

/// Moves each bound [`CanvasGroup`] alpha toward its fader's target.
///
/// A fader whose bound entity has no `CanvasGroup` is a setup error on the
/// host side; it is skipped, and reported whenever the fader is inserted or
/// receives a new request.
pub fn alpha_fader_system(
    world_time: Res<WorldTime>,
    mut faders: Query<(Entity, &mut AlphaFader)>,
    mut groups: Query<&mut CanvasGroup>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut fader) in faders.iter_mut() {
        let target = fader.target_or(entity);
        let Ok(mut group) = groups.get_mut(target) else {
            if fader.is_changed() {
                warn!(
                    "AlphaFader on {:?} is bound to {:?}, which has no CanvasGroup",
                    entity, target
                );
            }
            continue;
        };

        let was_in_transition = fader.is_in_transition();
        let mut alpha = group.alpha;
        let in_transition = fader.tick(&mut alpha, dt);
        if alpha != group.alpha {
            group.alpha = alpha;
        }

        if was_in_transition && !in_transition {
            commands.trigger(FadeFinishedEvent {
                entity,
                visible: alpha == 1.0,
            });
        }
    }
}
