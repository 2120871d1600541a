//! Named panel lookup.
//!
//! [`PanelRegistry`] maps panel names to the entity holding their
//! [`CanvasGroup`](crate::components::canvasgroup::CanvasGroup) and
//! [`AlphaFader`](crate::components::alphafader::AlphaFader), so scripted
//! steps and UI handlers can address panels by name.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default)]
pub struct PanelRegistry {
    panels: FxHashMap<String, Entity>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entity` under `name`, returning the previous entity if any.
    pub fn insert(&mut self, name: impl Into<String>, entity: Entity) -> Option<Entity> {
        self.panels.insert(name.into(), entity)
    }

    pub fn get(&self, name: &str) -> Option<Entity> {
        self.panels.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.panels.contains_key(name)
    }

    /// Registered names, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.panels.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
