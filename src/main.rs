use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use plateplot::config::FileConfig;
use plateplot::domain::LayoutStats;
use plateplot::parser::parse_file;
use plateplot::render::{OutputFormat, RenderOptions, output_path_for, render_to_file};

/// Plot a nesting plate and its placed pieces to PDF
///
/// The input file lists the plate's vertex count and vertices, then the
/// number of pieces, then each piece's vertex count and vertices, one
/// record per line.
///
/// Examples:
///   # Writes solution.pdf next to the input
///   plateplot solution.txt
///
///   # SVG with layout statistics
///   plateplot solution.txt -f svg -v
///
///   # Use a config file for colors and page size
///   plateplot solution.txt --config my-style.toml
#[derive(Parser, Debug)]
#[command(name = "plateplot")]
#[command(version, about, long_about = None)]
struct Args {
    /// Layout file to plot
    input: PathBuf,

    /// Output file path (defaults to the input path with .txt replaced by .pdf)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: pdf or svg
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Path to config file (optional, auto-searches plateplot.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print settings and layout statistics
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::from_path(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let format = args.format.unwrap_or(file_config.format);
    let verbose = args.verbose || file_config.verbose;
    let render_options = file_config.render_options();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&args.input, format));

    if verbose {
        print_settings(&args.input, &output_path, format, &render_options);
    }

    let spinner = create_spinner("Reading layout...");
    let start = Instant::now();
    let layout = match parse_file(&args.input) {
        Ok(layout) => layout,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e)
                .with_context(|| format!("Failed to read layout from {}", args.input.display()));
        }
    };
    spinner.finish_with_message(format!(
        "Read plate ({} vertices) and {} pieces [{:.1}s]",
        layout.plate.len(),
        layout.pieces.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        print_statistics(&LayoutStats::from_layout(&layout));
    }

    let spinner = create_spinner("Rendering...");
    let start = Instant::now();
    let written = match render_to_file(&layout, &render_options, format, &output_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("Failed to render layout");
        }
    };
    spinner.finish_with_message(format!(
        "Wrote {} polygons, {} vertices ({:.1} KB) [{:.1}s]",
        1 + layout.pieces.len(),
        layout.vertex_count(),
        written as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!("Output: {}", output_path.display());

    Ok(())
}

fn print_settings(
    input: &std::path::Path,
    output: &std::path::Path,
    format: OutputFormat,
    options: &RenderOptions,
) {
    println!("Configuration:");
    println!("  Input: {}", input.display());
    println!("  Output: {} ({:?})", output.display(), format);
    println!("  Long side: {}pt", options.long_side_pt);
    println!("  Padding: {}pt", options.padding_pt);
    println!(
        "  Plate: fill {} @ {}, edge {} {}pt",
        options.plate.fill,
        options.plate.fill_opacity,
        options.plate.edge,
        options.plate.line_width
    );
    println!(
        "  Pieces: fill {} @ {}, edge {} {}pt",
        options.piece.fill,
        options.piece.fill_opacity,
        options.piece.edge,
        options.piece.line_width
    );
    println!();
}

fn print_statistics(stats: &LayoutStats) {
    println!("Layout statistics:");
    println!(
        "  Plate: {} vertices, area {:.4}{}",
        stats.plate_vertices,
        stats.plate_area,
        if stats.plate_is_rectangle {
            " (rectangle)"
        } else {
            ""
        }
    );
    println!("  Pieces: {}", stats.num_pieces);
    if let (Some(avg_vertices), Some(avg_area)) = (stats.avg_vertices(), stats.avg_area()) {
        println!(
            "  Vertices: {} total, {} min, {} max, {:.2} avg",
            stats.total_vertices, stats.min_vertices, stats.max_vertices, avg_vertices
        );
        println!(
            "  Area: {:.4} total, {:.4} min, {:.4} max, {:.4} avg",
            stats.total_area, stats.min_area, stats.max_area, avg_area
        );
    }
    if let Some((length, width)) = stats.extent {
        println!("  Extent: {:.4} x {:.4}", length, width);
    }
    match stats.utilization() {
        Some(u) => println!("  Utilization: {:.2}%", u),
        None => println!("  Utilization: n/a (plate has no area)"),
    }
    println!();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
