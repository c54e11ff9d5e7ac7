//! Windowless engine loop.

use mesh_prep::MeshLibrary;
use tangram_core::app::TangramApp;
use tangram_core::render::MeshRegistry;
use tangram_core::scene::tangram::TangramMeshes;
use tangram_core::scene::{CameraConfig, MorphConfig, SceneError};
use tangram_hal::App;

use crate::backend::{
    HeadlessCamera, HeadlessMesh, HeadlessShaderFactory, SharedCounters,
};
use crate::input::InputScript;

pub type HeadlessApp = TangramApp<HeadlessShaderFactory, HeadlessCamera, HeadlessMesh>;

/// Frame time reported to the app, in seconds.
const DEFAULT_FRAME_TIME: f64 = 1.0 / 60.0;

/// Drives a single [`App`] for a fixed number of frames. The app is chosen
/// when the engine is built and never replaced.
pub struct HeadlessEngine<A: App> {
    app: A,
    frame_time: f64,
}

impl<A: App> HeadlessEngine<A> {
    pub fn new(app: A) -> Self {
        Self {
            app,
            frame_time: DEFAULT_FRAME_TIME,
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// `init`, then per frame: that frame's scripted events followed by
    /// `display_frame`. Finishes with `close`.
    pub fn run(&mut self, frames: u64, script: &InputScript) {
        if script.is_empty() {
            log::info!("headless run: {frames} frames, no scripted input");
        } else {
            log::info!("headless run: {frames} frames, {} scripted events", script.len());
        }
        if script.last_frame().is_some_and(|last| last >= frames) {
            log::warn!("some scripted events fall after the last frame and are dropped");
        }

        self.app.init();
        for frame in 0..frames {
            for event in script.events_for(frame) {
                log::debug!("frame {frame}: {event:?}");
                event.dispatch(&mut self.app);
            }
            self.app.display_frame(self.frame_time);
        }
        self.app.close();
    }

    pub fn into_app(self) -> A {
        self.app
    }
}

/// Wire the tangram app to the recording backends.
pub fn build_tangram_app(
    library: MeshLibrary,
    counters: &SharedCounters,
    camera: CameraConfig,
    morph: MorphConfig,
) -> Result<HeadlessApp, SceneError> {
    let mut registry = MeshRegistry::new();
    let meshes = TangramMeshes {
        triangle: registry.insert(HeadlessMesh::new(library.triangle, counters)),
        square: registry.insert(HeadlessMesh::new(library.square, counters)),
        parallelogram: registry.insert(HeadlessMesh::new(library.parallelogram, counters)),
    };
    TangramApp::new(
        HeadlessShaderFactory::new(counters),
        HeadlessCamera::new(counters),
        registry,
        &meshes,
        camera,
        morph,
    )
}
