//! The tangram morph demo as an [`App`] implementation.
//!
//! Key bindings: `C` switches the eye preset, `P` switches the projection,
//! holding `Left` morphs toward the crab and holding `Right` toward the
//! cube. Dragging with the primary button orbits, scrolling zooms.

use glam::Vec2;
use tangram_hal::{App, ButtonAction, Camera, Key, KeyAction, Mesh, PointerButton, ShaderFactory};

use crate::render::MeshRegistry;
use crate::scene::tangram::{author_frame, build_tangram, TangramMeshes};
use crate::scene::{
    CameraConfig, CameraController, FrameStats, MorphConfig, MorphState, NodeId, SceneError,
    SceneGraph,
};

pub struct TangramApp<F: ShaderFactory, C, M> {
    graph: SceneGraph<F::Program, C>,
    meshes: MeshRegistry<M>,
    factory: F,
    root: NodeId,
    frames: u64,
    last_stats: FrameStats,
}

impl<F, C, M> TangramApp<F, C, M>
where
    F: ShaderFactory,
    C: Camera,
    M: Mesh,
{
    /// Build the tangram tree over `meshes`. Shader programs are built
    /// later, in [`App::init`].
    pub fn new(
        factory: F,
        camera: C,
        meshes: MeshRegistry<M>,
        tangram: &TangramMeshes,
        camera_config: CameraConfig,
        morph_config: MorphConfig,
    ) -> Result<Self, SceneError> {
        let mut graph = SceneGraph::new(
            CameraController::new(camera, camera_config),
            MorphState::new(morph_config),
        );
        let root = build_tangram(&mut graph, tangram)?;
        Ok(Self {
            graph,
            meshes,
            factory,
            root,
            frames: 0,
            last_stats: FrameStats::default(),
        })
    }

    pub fn graph(&self) -> &SceneGraph<F::Program, C> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph<F::Program, C> {
        &mut self.graph
    }

    pub fn meshes(&self) -> &MeshRegistry<M> {
        &self.meshes
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Frames displayed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    fn render_frame(&mut self) -> Result<FrameStats, SceneError> {
        let progress = self.graph.morph_mut().advance();
        author_frame(&mut self.graph, self.root)?;
        self.graph.draw(progress, &self.meshes)
    }
}

impl<F, C, M> App for TangramApp<F, C, M>
where
    F: ShaderFactory,
    C: Camera,
    M: Mesh,
{
    fn init(&mut self) {
        if let Err(err) = self.graph.build_shaders(&mut self.factory, &self.meshes) {
            log::error!("shader setup failed: {err}");
        }
        self.graph.camera_mut().sync();
    }

    fn display_frame(&mut self, elapsed: f64) {
        match self.render_frame() {
            Ok(stats) => {
                log::trace!("frame {} ({elapsed:.4}s): {stats:?}", self.frames);
                self.last_stats = stats;
            }
            Err(err) => log::error!("frame {} aborted: {err}", self.frames),
        }
        self.frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.graph
            .camera_mut()
            .set_aspect(width as f32 / height as f32);
    }

    fn key(&mut self, key: Key, action: KeyAction) {
        log::debug!("key {key:?} {action:?}");
        let held = match action {
            KeyAction::Press => true,
            KeyAction::Release => false,
            KeyAction::Repeat => return,
        };
        match key {
            Key::C if held => self.graph.camera_mut().toggle_view_preset(),
            Key::P if held => self.graph.camera_mut().toggle_projection(),
            Key::Left => self.graph.morph_mut().set_toward_crab(held),
            Key::Right => self.graph.morph_mut().set_toward_cube(held),
            _ => {}
        }
    }

    fn pointer_move(&mut self, x: f64, y: f64) {
        self.graph
            .camera_mut()
            .drag_to(Vec2::new(x as f32, y as f32));
    }

    fn pointer_button(&mut self, button: PointerButton, action: ButtonAction, x: f64, y: f64) {
        if button != PointerButton::Primary {
            return;
        }
        let camera = self.graph.camera_mut();
        match action {
            ButtonAction::Press => camera.begin_orbit(Vec2::new(x as f32, y as f32)),
            ButtonAction::Release => camera.end_orbit(),
        }
    }

    fn scroll(&mut self, _dx: f64, dy: f64) {
        self.graph.camera_mut().zoom(dy as f32);
    }

    fn close(&mut self) {
        log::info!("closing after {} frames", self.frames);
    }
}
