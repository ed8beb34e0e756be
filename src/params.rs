/*
 * Viewer Parameters Module
 *
 * This module defines the ViewerParams struct holding everything the user
 * can change while the viewer runs. None of it affects the simulation
 * rules; it only controls pacing and presentation. Change detection lets the
 * app skip redrawing a paused scene when nothing was touched.
 */

pub struct ViewerParams {
    pub pause_simulation: bool,
    pub use_density_colors: bool,
    pub light_scheme: bool,
    pub draw_size: f32,
    pub steps_per_frame: u32,
    pub show_debug: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(PartialEq)]
struct ParamSnapshot {
    pause_simulation: bool,
    use_density_colors: bool,
    light_scheme: bool,
    draw_size: f32,
    steps_per_frame: u32,
    show_debug: bool,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            pause_simulation: false,
            use_density_colors: false,
            light_scheme: false,
            draw_size: 2.0,
            steps_per_frame: 1,
            show_debug: false,
            previous_values: None,
        }
    }
}

impl ViewerParams {
    pub fn new(draw_size: f32, light_scheme: bool) -> Self {
        Self {
            draw_size,
            light_scheme,
            ..Self::default()
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            pause_simulation: self.pause_simulation,
            use_density_colors: self.use_density_colors,
            light_scheme: self.light_scheme,
            draw_size: self.draw_size,
            steps_per_frame: self.steps_per_frame,
            show_debug: self.show_debug,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Whether anything changed since the last snapshot
    pub fn changed(&self) -> bool {
        match &self.previous_values {
            Some(prev) => *prev != self.snapshot(),
            None => false,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_draw_size_range() -> std::ops::RangeInclusive<f32> {
        0.25..=10.0
    }

    pub fn get_steps_per_frame_range() -> std::ops::RangeInclusive<u32> {
        1..=20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_changes_since_snapshot() {
        let mut params = ViewerParams::new(3.0, true);
        assert!(!params.changed());

        params.take_snapshot();
        assert!(!params.changed());

        params.use_density_colors = true;
        assert!(params.changed());

        params.take_snapshot();
        params.draw_size = 4.0;
        assert!(params.changed());
    }
}
