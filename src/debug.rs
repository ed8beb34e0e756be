/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * shown in the UI and the on-screen overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Time spent in simulation steps during the last frame
 * - Number of steps run during the last frame
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub step_time: Duration,
    pub steps_last_frame: u32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            step_time: Duration::ZERO,
            steps_last_frame: 0,
        }
    }
}

impl DebugInfo {
    // Average wall time of one simulation step during the last frame
    pub fn mean_step_time(&self) -> Duration {
        if self.steps_last_frame == 0 {
            Duration::ZERO
        } else {
            self.step_time / self.steps_last_frame
        }
    }
}
