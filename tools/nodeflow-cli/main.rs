use clap::{Parser, Subcommand};
use nodeflow::prelude::*;
use std::fs;
use std::process::exit;

/// Headless tooling for nodeflow canvas documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the built-in demo flow, print its summary and run it
    Demo,
    /// Validate a canvas JSON file against the built-in catalog
    Validate {
        /// Path to the canvas JSON file
        canvas_path: String,
    },
    /// Print the normalized canvas as pretty JSON
    Export {
        /// Path to the canvas JSON file
        canvas_path: String,
        /// Optional output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print SVG path data for every edge curve in a canvas
    Curves {
        /// Path to the canvas JSON file
        canvas_path: String,
        /// Zoom factor to lay the cards out at
        #[arg(short, long, default_value_t = 1.0)]
        zoom: f64,
    },
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    exit(1);
}

fn load_canvas(path: &str, catalog: &NodeCatalog) -> Canvas {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
    canvas_from_json(&text, catalog)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid canvas: {}", e)))
}

fn main() {
    let cli = Cli::parse();
    let catalog = NodeCatalog::builtin();

    match cli.command {
        Command::Demo => run_demo(),
        Command::Validate { canvas_path } => {
            let canvas = load_canvas(&canvas_path, &catalog);
            println!(
                "Canvas OK: {} nodes, {} edges",
                canvas.nodes.len(),
                canvas.edges.len()
            );
        }
        Command::Export {
            canvas_path,
            output,
        } => {
            let canvas = load_canvas(&canvas_path, &catalog);
            let json = serde_json::to_string_pretty(&canvas)
                .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
            match output {
                Some(path) => {
                    fs::write(&path, json).unwrap_or_else(|e| {
                        exit_with_error(&format!("Failed to write '{}': {}", path, e))
                    });
                    println!("Exported to {}", path);
                }
                None => println!("{}", json),
            }
        }
        Command::Curves { canvas_path, zoom } => {
            let canvas = load_canvas(&canvas_path, &catalog);
            // Snap the requested factor onto the stepped zoom scale; the
            // clamp keeps the loops terminating at the saturated ends.
            let target = zoom.clamp(Zoom::MIN, Zoom::MAX);
            let mut z = Zoom::default();
            while z.factor() + 0.05 < target {
                z = z.zoom_in();
            }
            while z.factor() - 0.05 > target {
                z = z.zoom_out();
            }
            let resolver = CardLayout::new(&canvas, CardMetrics::default(), z);
            for path in edge_paths(&canvas, &resolver) {
                println!("{}: {}", path.edge_id, path.curve.to_svg_path());
            }
        }
    }
}

fn run_demo() {
    let mut store = MemoryStore::seeded();
    let mut session = EditorSession::new(NodeCatalog::builtin());

    session
        .open_from(&mut store, 1)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open seed workflow: {}", e)));
    let outcome = session.apply(Intent::LoadDemo);
    if let Some(notice) = outcome.notice {
        println!("{}", notice.message);
    }

    let result = session
        .run_on(&mut store)
        .unwrap_or_else(|e| exit_with_error(&format!("Run failed: {}", e)));

    println!(
        "\nRun status: {:?} ({} nodes, {} edges)",
        result.status, result.total_nodes, result.total_edges
    );
    for step in &result.steps {
        println!("  {}. {} - {}", step.step, step.node_label, step.message);
    }
}
