//! AutoMesh CLI - build reference shapes and export them.
//!
//! Usage: automesh <COMMAND> [OPTIONS] <SHAPE> [OUTPUT]
//!
//! Run `automesh --help` for available commands.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use automesh::algo::Progress;
use automesh::io;
use automesh::mesh::{AutoMesh, AutoMeshOptions};
use automesh::shapes::{self, ShapeInput};

#[derive(Parser)]
#[command(name = "automesh")]
#[command(author, version, about = "Point/edge mesh reconstruction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh information
    Info {
        /// Reference shape
        #[arg(value_enum)]
        shape: Shape,

        /// Invert the winding decision
        #[arg(long)]
        flip: bool,
    },

    /// Build a shape and save it
    Export {
        /// Reference shape
        #[arg(value_enum)]
        shape: Shape,

        /// Output mesh file (.obj, .ply or .stl)
        output: PathBuf,

        /// Invert the winding decision
        #[arg(long)]
        flip: bool,

        /// Displace each point randomly by up to half this amount (0.0 to 1.0)
        #[arg(short, long, default_value = "0.0")]
        jitter: f64,

        /// Seed for the jitter
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Shape {
    /// Hard-edged unit cube
    Cube,
    /// Square pyramid with hard slant edges
    Pyramid,
    /// Square pyramid with soft slant edges
    SoftPyramid,
    /// Irregular rock, open at the bottom
    Rock,
}

impl Shape {
    fn input(self) -> ShapeInput {
        match self {
            Shape::Cube => shapes::cube(),
            Shape::Pyramid => shapes::pyramid(0.0),
            Shape::SoftPyramid => shapes::pyramid(1.0),
            Shape::Rock => shapes::rock(),
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { shape, flip } => {
            cmd_info(shape, flip)?;
        }

        Commands::Export {
            shape,
            output,
            flip,
            jitter,
            seed,
            sequential,
        } => {
            cmd_export(shape, &output, flip, jitter, seed, sequential)?;
        }
    }

    Ok(())
}

/// Create a progress reporter that displays a progress bar on the terminal.
fn create_progress() -> Progress {
    let max_percent = Arc::new(AtomicUsize::new(0)); // Track highest percent seen (monotonic)

    Progress::new(move |current, total, message| {
        if total == 0 {
            return;
        }

        let percent = if current >= total {
            100
        } else {
            (current * 100) / total
        };

        // Only move forward
        if max_percent.fetch_max(percent, Ordering::Relaxed) > percent {
            return;
        }

        let bar_width = 30;
        let filled = (percent * bar_width) / 100;
        let bar = "=".repeat(filled);
        let space = " ".repeat(bar_width - filled);

        eprint!("\r[{}{}] {:3}% {:<24}", bar, space, percent, message);
        let _ = std::io::stderr().flush();

        if current >= total {
            eprintln!();
        }
    })
}

fn build(shape: Shape, flip: bool, parallel: bool, progress: &Progress) -> automesh::error::Result<AutoMesh> {
    let input = shape.input();
    let options = AutoMeshOptions::default()
        .with_flip_winding(input.flip_winding != flip)
        .with_parallel(parallel);
    AutoMesh::build_with_progress(&input.positions, &input.edges, &options, progress)
}

fn cmd_info(shape: Shape, flip: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = build(shape, flip, false, &Progress::none())?;
    let topology = mesh.topology();

    let quads = topology
        .face_ids()
        .filter(|&f| topology.face(f).is_quad())
        .count();

    println!("Points: {}", topology.num_points());
    println!("Edges: {}", topology.num_edges());
    println!(
        "Faces: {} ({} triangles, {} quads)",
        topology.num_faces(),
        topology.num_faces() - quads,
        quads
    );
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.triangle_count());

    let boundary = topology.boundary_edges().count();
    if boundary == 0 {
        println!("Topology: Closed (no boundary)");
    } else {
        println!("Topology: Open ({} boundary edges)", boundary);
    }

    let unresolved = topology.unresolved_faces().count();
    println!(
        "Winding: {}{}",
        if topology.is_winding_consistent() { "consistent" } else { "inconsistent" },
        if unresolved > 0 {
            format!(" ({} unresolved faces)", unresolved)
        } else {
            String::new()
        }
    );

    Ok(())
}

fn cmd_export(
    shape: Shape,
    output: &PathBuf,
    flip: bool,
    jitter: f64,
    seed: u64,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if sequential { "sequential" } else { "parallel" };
    let progress = create_progress();

    let start = Instant::now();
    let mesh = build(shape, flip, !sequential, &progress)?;
    println!(
        "Built: {} vertices, {} triangles ({}, {:.2?})",
        mesh.num_vertices(),
        mesh.triangle_count(),
        mode,
        start.elapsed()
    );

    let jitter = jitter.clamp(0.0, 1.0);
    let render = if jitter > f64::EPSILON {
        println!("Applying jitter {} (seed {})...", jitter, seed);
        let mut rng = StdRng::seed_from_u64(seed);
        mesh.morph(|p, _| p + random_in_unit_sphere(&mut rng) * jitter * 0.5)
    } else {
        mesh.render_mesh()
    };

    io::save(&render, output)?;
    println!("Saved: {}", output.display());

    Ok(())
}

/// Uniform random vector inside the unit sphere, by rejection.
fn random_in_unit_sphere(rng: &mut StdRng) -> Vector3<f64> {
    loop {
        let v = Vector3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        if v.norm_squared() <= 1.0 {
            return v;
        }
    }
}
