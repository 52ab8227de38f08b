//! CLI command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sociogram_core::{EdgeList, EdgeListReader};
use sociogram_graph::{write_matrix, AdjacencyMatrix, MatrixFormat, NetworkAnalysis, RenderData};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Node count above which the graph is not handed to a renderer: the
/// render payload is withheld and the textual report stands alone.
const MAX_RENDER_NODES: usize = 1000;

/// Reads the edge list and builds the matrix behind a spinner.
fn load(file: &Path, directed: bool) -> Result<(EdgeList, AdjacencyMatrix)> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Reading edge list...");

    let edge_list = EdgeListReader::new().read_path(file, directed)?;
    debug!(
        nodes = edge_list.node_count(),
        edges = edge_list.edge_count(),
        "edge list loaded"
    );

    spinner.set_message("Building adjacency matrix...");
    let matrix = AdjacencyMatrix::build(&edge_list)?;

    spinner.finish_and_clear();
    Ok((edge_list, matrix))
}

/// Run the full analysis report.
pub fn analyze(
    file: &Path,
    directed: bool,
    leaders: usize,
    followers: usize,
    json: bool,
    matrix_out: Option<&Path>,
) -> Result<()> {
    let (edge_list, matrix) = load(file, directed)?;
    let analysis = NetworkAnalysis::run(&edge_list, &matrix, leaders, followers)?;

    if json {
        let render = (analysis.node_count <= MAX_RENDER_NODES)
            .then(|| RenderData::new(&edge_list, &analysis));
        let payload = serde_json::json!({
            "analysis": analysis,
            "render": render,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_report(&edge_list, &analysis);
    }

    if let Some(out) = matrix_out {
        write_matrix(&matrix, out, MatrixFormat::for_path(out))?;
        println!("{} Matrix saved to {}", "✓".green(), out.display());
    }

    Ok(())
}

fn print_report(edge_list: &EdgeList, analysis: &NetworkAnalysis) {
    println!("{}", analysis.summary().cyan());

    if edge_list.skipped_rows() > 0 {
        println!(
            "{} {} malformed row(s) skipped",
            "⚠".yellow(),
            edge_list.skipped_rows()
        );
    }

    println!("\n{}", "Leaders:".bold());
    for (i, leader) in analysis.leaders.iter().enumerate() {
        println!(
            "  {}. node {} (score {}) followers: {:?}",
            i + 1,
            leader.node.to_string().cyan(),
            leader.score,
            leader.followers
        );
    }

    println!("\n{}", "Best followers:".bold());
    for (node, score) in analysis.best_followers.entries() {
        println!("  node {} (score {})", node.to_string().cyan(), score);
    }

    println!();
    match &analysis.leader_path {
        Some(leader_path) => match &leader_path.path {
            Some(path) => println!(
                "Shortest path between leaders {} and {}: {:?}",
                leader_path.from, leader_path.to, path
            ),
            None => println!(
                "No path exists between leader {} and {}",
                leader_path.from, leader_path.to
            ),
        },
        None => println!("Not enough leaders to find a path"),
    }

    if analysis.node_count > MAX_RENDER_NODES {
        println!(
            "\n{} Graph too large to draw ({} nodes); showing textual results only",
            "⚠".yellow(),
            analysis.node_count
        );
    }
}

/// Export the adjacency matrix.
pub fn export(file: &Path, output: &Path, directed: bool) -> Result<()> {
    let (_, matrix) = load(file, directed)?;

    write_matrix(&matrix, output, MatrixFormat::for_path(output))?;
    println!(
        "{} Matrix ({}x{}) saved to {}",
        "✓".green(),
        matrix.size(),
        matrix.size(),
        output.display()
    );

    Ok(())
}

/// Show node and edge counts.
pub fn stats(file: &Path, directed: bool) -> Result<()> {
    let (edge_list, matrix) = load(file, directed)?;

    println!("{}", "Graph statistics".bold());
    println!("  Nodes:        {}", edge_list.node_count().to_string().cyan());
    println!("  Edges:        {}", edge_list.edge_count().to_string().cyan());
    println!("  Matrix size:  {}", matrix.size().to_string().cyan());
    println!("  Skipped rows: {}", edge_list.skipped_rows());
    println!("  Symmetric:    {}", matrix.is_symmetric());

    Ok(())
}
