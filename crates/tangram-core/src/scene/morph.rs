//! Morph progress between the crab (0.0) and cube (1.0) poses.

/// Per-frame step and starting point for [`MorphState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphConfig {
    pub step: f32,
    pub initial_progress: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            initial_progress: 0.0,
        }
    }
}

/// Progress scalar plus the two direction latches driven by held keys.
///
/// Progress is kept as a whole number of steps away from the last bound or
/// starting point, so a run of `1 / step` frames lands on the bound exactly
/// instead of drifting short of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphState {
    progress: f32,
    origin: f32,
    steps: i64,
    step: f32,
    toward_crab: bool,
    toward_cube: bool,
}

impl MorphState {
    /// A non-finite step or starting point falls back to the default.
    pub fn new(config: MorphConfig) -> Self {
        let defaults = MorphConfig::default();
        let step = if config.step.is_finite() {
            config.step.abs()
        } else {
            log::warn!("morph step {} is not finite, using {}", config.step, defaults.step);
            defaults.step
        };
        let initial = if config.initial_progress.is_finite() {
            config.initial_progress.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "initial morph progress {} is not finite, using {}",
                config.initial_progress,
                defaults.initial_progress
            );
            defaults.initial_progress
        };
        Self {
            progress: initial,
            origin: initial,
            steps: 0,
            step,
            toward_crab: false,
            toward_cube: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn toward_crab(&self) -> bool {
        self.toward_crab
    }

    pub fn toward_cube(&self) -> bool {
        self.toward_cube
    }

    /// Latch set on key press, cleared on release.
    pub fn set_toward_crab(&mut self, held: bool) {
        self.toward_crab = held;
    }

    pub fn set_toward_cube(&mut self, held: bool) {
        self.toward_cube = held;
    }

    /// Advance one frame and return the new progress, clamped to `[0, 1]`.
    /// Holding both directions at once cancels out.
    pub fn advance(&mut self) -> f32 {
        let direction = match (self.toward_crab, self.toward_cube) {
            (false, true) => 1,
            (true, false) => -1,
            _ => return self.progress,
        };
        self.steps += direction;
        let progress = self.origin + self.steps as f32 * self.step;
        if progress <= 0.0 || progress >= 1.0 {
            // Pinned at a bound: restart counting from there.
            self.origin = progress.clamp(0.0, 1.0);
            self.steps = 0;
        }
        self.progress = progress.clamp(0.0, 1.0);
        self.progress
    }
}
