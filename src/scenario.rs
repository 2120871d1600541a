//! Scripted fade scenarios for headless runs.
//!
//! A scenario is a JSON file describing a set of panels and the frames at
//! which each panel is asked to fade in or out:
//!
//! ```json
//! {
//!   "panels": [
//!     { "name": "dialog", "alpha": 0.0, "speed": 2.0 },
//!     { "name": "toast", "visible": true }
//!   ],
//!   "steps": [
//!     { "frame": 0, "panel": "dialog", "action": "fade_in" },
//!     { "frame": 90, "panel": "dialog", "action": "fade_out" }
//!   ]
//! }
//! ```
//!
//! Panel fields other than `name` fall back to [`FadeConfig`]. `visible` is the
//! initial fade direction and defaults to whether the panel starts opaque.
//!
//! [`ScenarioRunner`] spawns the panels into a [`World`], registers the fade
//! observers and drives the frame schedule one fixed step at a time.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::alphafader::AlphaFader;
use crate::components::canvasgroup::CanvasGroup;
use crate::events::fade::{FadeFinishedEvent, FadeRequestEvent, fade_request_observer};
use crate::resources::fadeconfig::FadeConfig;
use crate::resources::panelregistry::PanelRegistry;
use crate::resources::worldtime::WorldTime;
use crate::systems::fade::alpha_fader_system;
use crate::systems::time::update_world_time;

/// Frame at which the built-in scenario starts fading out again.
const BUILTIN_FADE_OUT_FRAME: u64 = 90;

/// What a scripted step asks a panel to do.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FadeAction {
    FadeIn,
    FadeOut,
}

/// A panel to spawn.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelData {
    pub name: String,
    #[serde(default)]
    pub alpha: Option<f32>,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub visible: Option<bool>,
}

/// A fade request issued before the given frame is simulated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepData {
    pub frame: u64,
    pub panel: String,
    pub action: FadeAction,
}

/// Whole scenario file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioData {
    pub panels: Vec<PanelData>,
    #[serde(default)]
    pub steps: Vec<StepData>,
}

impl ScenarioData {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse scenario: {}", e))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    /// One hidden panel that fades in, then back out.
    pub fn builtin() -> Self {
        ScenarioData {
            panels: vec![PanelData {
                name: "panel".to_string(),
                alpha: Some(0.0),
                speed: None,
                visible: Some(false),
            }],
            steps: vec![
                StepData {
                    frame: 0,
                    panel: "panel".to_string(),
                    action: FadeAction::FadeIn,
                },
                StepData {
                    frame: BUILTIN_FADE_OUT_FRAME,
                    panel: "panel".to_string(),
                    action: FadeAction::FadeOut,
                },
            ],
        }
    }

    /// Check names are unique, speeds positive and steps reference known panels.
    pub fn validate(&self) -> Result<(), String> {
        let mut names = FxHashSet::default();
        for panel in &self.panels {
            if !names.insert(panel.name.as_str()) {
                return Err(format!("Duplicate panel name '{}'", panel.name));
            }
            if let Some(speed) = panel.speed
                && speed <= 0.0
            {
                return Err(format!(
                    "Panel '{}' has non-positive speed {}",
                    panel.name, speed
                ));
            }
        }
        for step in &self.steps {
            if !names.contains(step.panel.as_str()) {
                return Err(format!(
                    "Step at frame {} references unknown panel '{}'",
                    step.frame, step.panel
                ));
            }
        }
        Ok(())
    }
}

/// Snapshot of one panel after a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelReport {
    pub name: String,
    pub alpha: f32,
    pub in_transition: bool,
}

fn log_fade_finished(trigger: On<FadeFinishedEvent>) {
    let event = trigger.event();
    info!(
        "Fade finished on {:?}: {}",
        event.entity,
        if event.visible { "visible" } else { "hidden" }
    );
}

/// Spawns a scenario and steps it frame by frame.
pub struct ScenarioRunner {
    steps: Vec<StepData>,
    next_step: usize,
    frame_delta: f32,
    schedule: Schedule,
}

impl ScenarioRunner {
    /// Validate `data`, spawn its panels into `world` and prepare the schedule.
    ///
    /// Inserts [`WorldTime`] and [`PanelRegistry`] if the world lacks them.
    pub fn new(world: &mut World, data: ScenarioData, config: &FadeConfig) -> Result<Self, String> {
        data.validate()?;

        if !world.contains_resource::<WorldTime>() {
            world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        }
        world.init_resource::<PanelRegistry>();

        for panel in &data.panels {
            let default_alpha = if config.start_visible { 1.0 } else { 0.0 };
            let group = CanvasGroup::new(panel.alpha.unwrap_or(default_alpha));
            let visible = panel.visible.unwrap_or(group.alpha >= 1.0);
            let fader =
                AlphaFader::new(panel.speed.unwrap_or(config.fade_speed)).with_direction(visible);
            let entity = world.spawn((group, fader)).id();
            world
                .resource_mut::<PanelRegistry>()
                .insert(panel.name.clone(), entity);
            debug!(
                "Spawned panel '{}' as {:?} (alpha={}, visible={})",
                panel.name, entity, group.alpha, visible
            );
        }

        world.spawn(Observer::new(fade_request_observer));
        world.spawn(Observer::new(log_fade_finished));
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(alpha_fader_system);

        let mut steps = data.steps;
        steps.sort_by_key(|s| s.frame);

        Ok(ScenarioRunner {
            steps,
            next_step: 0,
            frame_delta: config.frame_delta(),
            schedule,
        })
    }

    /// Issue due steps, advance the clock by one frame and run the schedule.
    pub fn step(&mut self, world: &mut World) {
        let frame = world.resource::<WorldTime>().frame_count;
        while let Some(step) = self.steps.get(self.next_step) {
            if step.frame > frame {
                break;
            }
            let Some(entity) = world.resource::<PanelRegistry>().get(&step.panel) else {
                self.next_step += 1;
                continue;
            };
            let event = match step.action {
                FadeAction::FadeIn => FadeRequestEvent::fade_in(entity),
                FadeAction::FadeOut => FadeRequestEvent::fade_out(entity),
            };
            debug!("Frame {}: {:?} on '{}'", frame, step.action, step.panel);
            world.trigger(event);
            self.next_step += 1;
        }

        update_world_time(world, self.frame_delta);
        self.schedule.run(world);
        world.clear_trackers();
    }

    /// Whether steps remain to be issued.
    pub fn has_pending_steps(&self) -> bool {
        self.next_step < self.steps.len()
    }

    /// `true` when no steps remain and every panel rests on its target.
    pub fn is_settled(&self, world: &mut World) -> bool {
        if self.has_pending_steps() {
            return false;
        }
        let mut faders = world.query::<(Entity, &AlphaFader)>();
        let bound: Vec<(Entity, f32)> = faders
            .iter(world)
            .map(|(entity, fader)| (fader.target_or(entity), fader.target_alpha()))
            .collect();
        bound.into_iter().all(|(target, target_alpha)| {
            world
                .get::<CanvasGroup>(target)
                .is_none_or(|group| group.alpha == target_alpha)
        })
    }

    /// Current state of every registered panel, sorted by name.
    pub fn report(&self, world: &World) -> Vec<PanelReport> {
        let registry = world.resource::<PanelRegistry>();
        registry
            .names()
            .into_iter()
            .filter_map(|name| {
                let entity = registry.get(name)?;
                let fader = world.get::<AlphaFader>(entity)?;
                let group = world.get::<CanvasGroup>(fader.target_or(entity))?;
                Some(PanelReport {
                    name: name.to_string(),
                    alpha: group.alpha,
                    in_transition: fader.is_in_transition(),
                })
            })
            .collect()
    }

    /// Step until the scenario settles or `max_frames` frames have run.
    ///
    /// Returns the number of frames simulated.
    pub fn run(&mut self, world: &mut World, max_frames: u32) -> u32 {
        let mut frames = 0;
        let mut last = self.report(world);
        while frames < max_frames && !self.is_settled(world) {
            self.step(world);
            frames += 1;
            let current = self.report(world);
            for panel in &current {
                if last.iter().any(|p| p.name == panel.name && p.alpha != panel.alpha) {
                    info!(
                        "frame {:>4} {:<12} alpha={:.3}{}",
                        frames,
                        panel.name,
                        panel.alpha,
                        if panel.in_transition { " (fading)" } else { "" }
                    );
                }
            }
            last = current;
        }
        frames
    }
}
