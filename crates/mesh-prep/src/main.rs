use clap::{Parser, Subcommand};
use mesh_prep::{MeshData, MeshError, MeshLibrary};
use std::path::{Path, PathBuf};
use std::process;
use tangram_hal::Mesh;

#[derive(Parser)]
#[command(name = "mesh-prep")]
#[command(about = "Inspect tangram model files (debug CLI)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an OBJ file and print what the scene would see
    Info {
        /// Input OBJ file path
        input: PathBuf,

        /// Skip identical-vertex joining
        #[arg(long)]
        no_join: bool,
    },
    /// Check a model directory for the three tangram pieces
    Library {
        /// Directory holding TriangleFix.obj, Cube.obj and Para.obj;
        /// the built-in pieces are shown when omitted
        dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let result = match cli.command {
        Commands::Info { input, no_join } => info(&input, no_join),
        Commands::Library { dir } => MeshLibrary::load(dir.as_deref()).map(|library| {
            for mesh in library.into_array() {
                print_summary(&mesh);
            }
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn info(input: &Path, no_join: bool) -> Result<(), MeshError> {
    let mut mesh = mesh_prep::load_obj(input)?;
    if !no_join {
        let removed = mesh.join_identical_vertices();
        log::info!("joined {removed} identical vertices");
    }
    mesh.generate_tangents();
    print_summary(&mesh);
    Ok(())
}

fn print_summary(mesh: &MeshData) {
    println!("{}", mesh.name);
    println!("  vertices:   {}", mesh.vertex_count());
    println!("  triangles:  {}", mesh.triangle_count());
    println!("  normals:    {}", mesh.has_normals());
    println!("  texcoords:  {}", mesh.has_texcoords());
    println!("  tangents:   {}", mesh.has_tangents());
    if let Some((min, max)) = mesh.bounds() {
        println!("  bounds:     {min} .. {max}");
    }
}
