//! Headless host for the tangram morph demo.
//!
//! Runs the demo for a fixed number of frames against recording backends,
//! feeding it a short input script built from the command line, then
//! prints what happened.

mod backend;
mod headless;
mod input;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mesh_prep::MeshLibrary;
use tangram_core::scene::{CameraConfig, MorphConfig, ZoomClamp};
use tangram_hal::Key;

use headless::HeadlessEngine;
use input::{HoldTarget, InputScript};

#[derive(Parser)]
#[command(name = "tangram-pc")]
#[command(about = "Run the tangram crab/cube morph without a window", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of frames to run
    #[arg(long, default_value = "120")]
    frames: u64,

    /// Directory with TriangleFix.obj, Cube.obj and Para.obj (built-in
    /// pieces are used when omitted)
    #[arg(long)]
    models: Option<PathBuf>,

    /// Hold the morph key toward this pose for the whole run
    #[arg(long, value_enum)]
    hold: Option<HoldTarget>,

    /// Switch to the secondary eye preset on the first frame
    #[arg(long)]
    toggle_view: bool,

    /// Switch projection on the first frame
    #[arg(long)]
    toggle_projection: bool,

    /// Drag-orbit by DX DY pixels on the second frame
    #[arg(long, num_args = 2, value_names = ["DX", "DY"], allow_negative_numbers = true)]
    orbit: Option<Vec<f64>>,

    /// Scroll by DY on the second frame (positive zooms in)
    #[arg(long, allow_negative_numbers = true)]
    scroll: Option<f64>,

    /// Lower bound on the eye-to-target distance
    #[arg(long)]
    zoom_min: Option<f32>,

    /// Upper bound on the eye-to-target distance
    #[arg(long)]
    zoom_max: Option<f32>,

    /// Morph progress per frame
    #[arg(long, default_value = "0.01")]
    step: f32,

    /// Window width reported on the first frame
    #[arg(long, default_value = "640")]
    width: u32,

    /// Window height reported on the first frame
    #[arg(long, default_value = "480")]
    height: u32,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn camera_config(&self) -> CameraConfig {
        let zoom_clamp = match (self.zoom_min, self.zoom_max) {
            (None, None) => None,
            (min, max) => Some(ZoomClamp {
                min: min.unwrap_or(0.0),
                max: max.unwrap_or(f32::MAX),
            }),
        };
        CameraConfig {
            zoom_clamp,
            ..CameraConfig::default()
        }
    }

    fn morph_config(&self) -> MorphConfig {
        MorphConfig {
            step: self.step,
            ..MorphConfig::default()
        }
    }

    fn script(&self) -> InputScript {
        let mut script = InputScript::new();
        script.resize(0, self.width, self.height);
        if let Some(target) = self.hold {
            script.hold(0, target);
        }
        if self.toggle_view {
            script.tap(0, Key::C);
        }
        if self.toggle_projection {
            script.tap(0, Key::P);
        }
        if let Some([dx, dy]) = self.orbit.as_deref() {
            script.drag(1, *dx, *dy);
        }
        if let Some(dy) = self.scroll {
            script.scroll(1, dy);
        }
        script
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let library = MeshLibrary::load(cli.models.as_deref()).with_context(|| match &cli.models {
        Some(dir) => format!("loading models from {}", dir.display()),
        None => "building the built-in pieces".to_string(),
    })?;

    let counters = backend::new_counters();
    let app = headless::build_tangram_app(
        library,
        &counters,
        cli.camera_config(),
        cli.morph_config(),
    )
    .context("building the tangram scene")?;

    let mut engine = HeadlessEngine::new(app);
    engine.run(cli.frames, &cli.script());

    let app = engine.into_app();
    let camera = app.graph().camera();
    let totals = *counters.borrow();
    println!("frames:        {}", app.frames());
    println!("progress:      {:.3}", app.graph().morph().progress());
    println!("view preset:   {:?}", camera.view_preset());
    println!("projection:    {:?}", camera.projection_mode());
    println!("eye:           {}", camera.eye());
    println!("last frame:    {:?}", app.last_stats());
    println!("programs:      {}", totals.programs_linked);
    println!("draws:         {} ({} triangles)", totals.draws, totals.triangles);
    println!("uniforms:      {} matrices, {} colors", totals.matrix_uploads, totals.color_uploads);
    println!(
        "camera block:  {} view, {} projection updates",
        totals.view_updates, totals.projection_updates
    );
    Ok(())
}
