//! Simulation clock resource.
//!
//! [`WorldTime`] is the host's per-frame clock. It is advanced by
//! [`update_world_time`](crate::systems::time::update_world_time) before the
//! frame schedule runs, and read by systems such as
//! [`alpha_fader_system`](crate::systems::fade::alpha_fader_system).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
    /// Frames advanced so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
