//! Preset-based camera with drag-to-orbit and scroll-to-zoom.
//!
//! Two eye presets and two projection presets are toggled independently.
//! Orbit and zoom edit the eye of whichever view preset is active, in
//! place, so switching away and back recalls the edited eye rather than the
//! configured default.

use core::f32::consts::PI;

use glam::{Mat4, Quat, Vec2, Vec3};
use tangram_hal::Camera;

/// The eye never gets closer to the target than this, clamp or no clamp.
/// A zero-length view direction would make the look-at matrix NaN.
const MIN_EYE_DISTANCE: f32 = 1e-3;

/// Vertical orbit stops once the view direction is within this cosine of
/// the up vector.
const MAX_POLE_COSINE: f32 = 0.999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPreset {
    #[default]
    Primary,
    Secondary,
}

impl ViewPreset {
    pub fn toggled(self) -> Self {
        match self {
            ViewPreset::Primary => ViewPreset::Secondary,
            ViewPreset::Secondary => ViewPreset::Primary,
        }
    }

    fn index(self) -> usize {
        match self {
            ViewPreset::Primary => 0,
            ViewPreset::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Orthographic,
    Perspective,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
        }
    }
}

/// Orthographic view volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    pub fov_y_degrees: f32,
    /// Width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveParams {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

/// Bounds on the eye-to-target distance applied by zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomClamp {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Eye positions for the primary and secondary view presets.
    pub eyes: [Vec3; 2],
    pub target: Vec3,
    pub up: Vec3,
    pub ortho: OrthoBounds,
    pub perspective: PerspectiveParams,
    /// Radians of orbit per pixel of pointer travel.
    pub orbit_sensitivity: f32,
    /// Distance moved per unit of scroll.
    pub zoom_speed: f32,
    /// `None` leaves zoom unclamped (apart from never reaching the target).
    pub zoom_clamp: Option<ZoomClamp>,
    pub initial_view: ViewPreset,
    pub initial_projection: ProjectionMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eyes: [Vec3::splat(5.0), Vec3::splat(-5.0)],
            target: Vec3::ZERO,
            up: Vec3::Y,
            ortho: OrthoBounds {
                left: -2.0,
                right: 2.0,
                bottom: -2.0,
                top: 2.0,
                near: 1.0,
                far: 10.0,
            },
            perspective: PerspectiveParams {
                fov_y_degrees: 30.0,
                aspect: 640.0 / 480.0,
                near: 1.0,
                far: 10.0,
            },
            orbit_sensitivity: 0.005,
            zoom_speed: 1.0,
            zoom_clamp: None,
            initial_view: ViewPreset::Primary,
            initial_projection: ProjectionMode::Orthographic,
        }
    }
}

/// Owns the camera service and all view-state edits made through input.
pub struct CameraController<C> {
    camera: C,
    target: Vec3,
    up: Vec3,
    eyes: [Vec3; 2],
    projections: [Mat4; 2],
    perspective: PerspectiveParams,
    orbit_sensitivity: f32,
    zoom_speed: f32,
    zoom_clamp: Option<ZoomClamp>,
    view_preset: ViewPreset,
    projection_mode: ProjectionMode,
    /// Last sampled pointer position while the primary button is held.
    drag_anchor: Option<Vec2>,
}

impl<C: Camera> CameraController<C> {
    /// Take ownership of `camera` and push the initial view and projection.
    pub fn new(camera: C, config: CameraConfig) -> Self {
        let up = config.up.try_normalize().unwrap_or(Vec3::Y);
        let zoom_clamp = config.zoom_clamp.filter(|clamp| {
            let valid = clamp.min <= clamp.max;
            if !valid {
                log::warn!("ignoring inverted zoom clamp {clamp:?}");
            }
            valid
        });
        let mut controller = Self {
            camera,
            target: config.target,
            up,
            eyes: config.eyes,
            projections: [config.ortho.matrix(), config.perspective.matrix()],
            perspective: config.perspective,
            orbit_sensitivity: config.orbit_sensitivity,
            zoom_speed: config.zoom_speed,
            zoom_clamp,
            view_preset: config.initial_view,
            projection_mode: config.initial_projection,
            drag_anchor: None,
        };
        controller.push_view();
        controller.push_projection();
        controller
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn view_preset(&self) -> ViewPreset {
        self.view_preset
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection_mode
    }

    /// Eye position of the active view preset.
    pub fn eye(&self) -> Vec3 {
        self.eyes[self.view_preset.index()]
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn view_matrix(&self, preset: ViewPreset) -> Mat4 {
        Mat4::look_at_rh(self.eyes[preset.index()], self.target, self.up)
    }

    pub fn projection_matrix(&self, mode: ProjectionMode) -> Mat4 {
        match mode {
            ProjectionMode::Orthographic => self.projections[0],
            ProjectionMode::Perspective => self.projections[1],
        }
    }

    pub fn is_orbiting(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn toggle_view_preset(&mut self) {
        self.view_preset = self.view_preset.toggled();
        log::info!("view preset -> {:?}", self.view_preset);
        self.push_view();
    }

    pub fn toggle_projection(&mut self) {
        self.projection_mode = self.projection_mode.toggled();
        log::info!("projection -> {:?}", self.projection_mode);
        self.push_projection();
    }

    /// Primary button went down at `position`.
    pub fn begin_orbit(&mut self, position: Vec2) {
        self.drag_anchor = Some(position);
    }

    pub fn end_orbit(&mut self) {
        self.drag_anchor = None;
    }

    /// Pointer moved. Orbits by the delta since the last sample when a drag
    /// is in progress, otherwise does nothing.
    pub fn drag_to(&mut self, position: Vec2) {
        if let Some(anchor) = self.drag_anchor.replace(position) {
            let delta = position - anchor;
            self.orbit(delta.x, delta.y);
        }
    }

    /// Rotate the active eye about the target by a pointer delta in pixels.
    ///
    /// Horizontal travel turns about the world up axis; vertical travel
    /// turns about the axis perpendicular to up and the view direction,
    /// stopping short of either pole.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let offset = self.eye() - self.target;
        let radius = offset.length();
        if radius == 0.0 {
            return;
        }

        let yaw = Quat::from_axis_angle(self.up, -dx * self.orbit_sensitivity);
        let pitch = self
            .up
            .cross(offset)
            .try_normalize()
            .map(|right| {
                // A positive turn about `right` moves the eye away from up.
                let polar = (offset.dot(self.up) / radius).clamp(-1.0, 1.0).acos();
                let min_polar = MAX_POLE_COSINE.acos();
                let wanted = polar - dy * self.orbit_sensitivity;
                let clamped = wanted.clamp(min_polar, PI - min_polar);
                Quat::from_axis_angle(right, clamped - polar)
            })
            .unwrap_or(Quat::IDENTITY);

        self.eyes[self.view_preset.index()] = self.target + (yaw * pitch) * offset;
        log::debug!("orbit ({dx}, {dy}) -> eye {}", self.eye());
        self.push_view();
    }

    /// Move the active eye along the target-to-eye direction. Positive
    /// `scroll` moves toward the target.
    pub fn zoom(&mut self, scroll: f32) {
        let offset = self.eye() - self.target;
        let distance = offset.length();
        if distance == 0.0 {
            return;
        }

        let mut new_distance = distance - scroll * self.zoom_speed;
        if let Some(clamp) = self.zoom_clamp {
            new_distance = new_distance.clamp(clamp.min, clamp.max);
        }
        let new_distance = new_distance.max(MIN_EYE_DISTANCE);

        self.eyes[self.view_preset.index()] = self.target + offset / distance * new_distance;
        log::debug!("zoom {scroll} -> distance {new_distance}");
        self.push_view();
    }

    /// Rebuild the perspective preset for a new aspect ratio. The
    /// orthographic preset is left alone.
    pub fn set_aspect(&mut self, aspect: f32) {
        if !aspect.is_finite() || aspect <= 0.0 {
            return;
        }
        self.perspective.aspect = aspect;
        self.projections[1] = self.perspective.matrix();
        if self.projection_mode == ProjectionMode::Perspective {
            self.push_projection();
        }
    }

    /// Re-send the active view and projection to the camera service.
    pub fn sync(&mut self) {
        self.push_view();
        self.push_projection();
    }

    fn push_view(&mut self) {
        let view = self.view_matrix(self.view_preset);
        self.camera.set_view_matrix(view);
    }

    fn push_projection(&mut self) {
        let projection = self.projection_matrix(self.projection_mode);
        self.camera.set_projection_matrix(projection);
    }
}
