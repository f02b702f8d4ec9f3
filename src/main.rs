//! Backtracking visualizer engine CLI.
//!
//! Runs the two step-tracing search engines (N-Queens placement, graph
//! coloring) from the command line, prints the recorded trace as narration,
//! and optionally writes it to disk for a replaying UI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use backstep::graph::Topology;
use backstep::trace::{format_trace, solution_step, Step};
use backstep::{coloring, export, graph, queens};

/// Traces backtracking searches step by step.
#[derive(Parser)]
#[command(name = "backstep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace a first-solution N-Queens search.
    Queens {
        /// Board dimension.
        size: usize,
        #[command(flatten)]
        output: TraceOutput,
    },
    /// Count all N-Queens solutions without tracing.
    Count {
        /// Board dimension.
        size: usize,
    },
    /// Trace a first-solution coloring of an example graph.
    Color {
        /// Which example topology to color.
        topology: TopologyArg,
        /// Number of available colors.
        colors: usize,
        #[command(flatten)]
        output: TraceOutput,
    },
}

/// Optional trace exports shared by the tracing subcommands.
#[derive(clap::Args)]
struct TraceOutput {
    /// Write the trace as JSON to this path.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,
    /// Write the trace as narration text to this path.
    #[arg(long, value_name = "PATH")]
    save_text: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TopologyArg {
    Complete4,
    Star5,
    Petersen,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Complete4 => Topology::Complete4,
            TopologyArg::Star5 => Topology::Star5,
            TopologyArg::Petersen => Topology::Petersen,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Queens { size, output } => run_queens(size, &output),
        Command::Count { size } => run_count(size),
        Command::Color {
            topology,
            colors,
            output,
        } => run_color(topology.into(), colors, &output),
    }
}

/// Traces the placement search and prints the narration plus the outcome.
fn run_queens(size: usize, output: &TraceOutput) {
    let steps = queens::solve(size);
    print!("{}", format_trace(&steps));

    match solution_step(&steps) {
        Some(solution) => {
            println!("Solved in {} steps:", steps.len());
            print!("{}", queens::format_board(&solution.assignment));
        }
        None => println!(
            "No solution exists for a {size}x{size} board ({} steps traced)",
            steps.len()
        ),
    }

    write_outputs(&steps, output);
}

/// Prints the all-solutions count for a board size.
fn run_count(size: usize) {
    let count = queens::count_solutions(size);
    println!("{count} solutions for a {size}x{size} board");
}

/// Traces the coloring search over an example graph and prints the outcome.
fn run_color(topology: Topology, colors: usize, output: &TraceOutput) {
    let graph = graph::example(topology);
    let steps = coloring::solve(&graph, colors);
    print!("{}", format_trace(&steps));

    match solution_step(&steps) {
        Some(solution) => {
            println!("Colored {} in {} steps:", topology.name(), steps.len());
            print!("{}", coloring::format_assignment(&solution.assignment));
        }
        None => println!(
            "{} is not colorable with {colors} colors ({} steps traced)",
            topology.name(),
            steps.len()
        ),
    }

    write_outputs(&steps, output);
}

/// Writes any requested trace exports, reporting failures without aborting.
fn write_outputs(steps: &[Step], output: &TraceOutput) {
    if let Some(path) = &output.save {
        if let Err(e) = export::save_json(path, steps) {
            eprintln!("Failed to save JSON trace: {}", e);
        } else {
            println!("Wrote {}", path.display());
        }
    }
    if let Some(path) = &output.save_text {
        if let Err(e) = export::save_text(path, steps) {
            eprintln!("Failed to save text trace: {}", e);
        } else {
            println!("Wrote {}", path.display());
        }
    }
}
