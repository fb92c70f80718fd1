use anyhow::Result;
use bitgraph::areas::repository::Repository;
use bitgraph::artifacts::graph::dot::{DotOptions, RankDir};
use bitgraph::artifacts::graph::renderer::RenderOutcome;
use bitgraph::artifacts::log::cutoff::Cutoff;
use bitgraph::commands::porcelain::graph::GraphOptions;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bitgraph",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Draw the commit graph of a git repository up to a date",
    long_about = "Reads commits straight from the loose objects of a git repository, \
    keeps the ones committed before the cutoff date and writes them as a Graphviz DOT graph. \
    The graph can then be rendered to PNG by a dot-compatible tool.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(long, help = "Path to the repository to analyze")]
    repo_path: PathBuf,
    #[arg(long, help = "Cutoff date (YYYY-MM-DD); only commits before it are drawn")]
    date: String,
    #[arg(long, help = "Path of the DOT file to write")]
    output_path: PathBuf,
    #[arg(long, help = "Path to the graph visualization program (e.g. dot)")]
    visualizer_path: Option<PathBuf>,
    #[arg(long, help = "Path of the rendered image (defaults to the output path with .png)")]
    image_path: Option<PathBuf>,
    #[arg(long, help = "Branch to start from (defaults to the branch HEAD points to)")]
    branch: Option<String>,
    #[arg(long, conflicts_with = "branch", help = "Start from every local branch")]
    all: bool,
    #[arg(long, help = "Check the SHA-1 of every object read")]
    verify_objects: bool,
    #[arg(long, help = "Add the commit date to node labels")]
    show_dates: bool,
    #[arg(long, help = "Add the author name to node labels")]
    show_authors: bool,
    #[arg(long, value_enum, default_value_t = RankDir::TopBottom, help = "Graph layout direction")]
    rankdir: RankDir,
    #[arg(short, long, help = "Do not print the DOT text to stdout")]
    quiet: bool,
    #[arg(short, long, help = "Log every visited commit")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cutoff = Cutoff::parse_date(&cli.date)?;
    let repository = Repository::open(&cli.repo_path)?.with_verification(cli.verify_objects);

    let opts = GraphOptions {
        cutoff,
        branch: cli.branch,
        all_branches: cli.all,
        output_path: cli.output_path,
        renderer: cli.visualizer_path,
        image_path: cli.image_path,
        dot: DotOptions::new(cli.show_dates, cli.show_authors, cli.rankdir),
        echo: !cli.quiet,
    };

    let summary = repository.graph(&opts, &mut std::io::stdout())?;

    if summary.commits == 0 {
        eprintln!("{} {}", "No commits before".yellow(), cli.date.trim());
    }
    eprintln!(
        "{} {} ({} commits, {} edges)",
        "Graph written to".green(),
        summary.output_path.display(),
        summary.commits,
        summary.edges
    );

    match summary.render {
        None => {}
        Some(RenderOutcome::Rendered(image)) => {
            eprintln!("{} {}", "Image rendered to".green(), image.display());
        }
        Some(RenderOutcome::ToolMissing(tool)) => {
            eprintln!(
                "{} {}",
                "Visualizer not found, check the visualizer path:".yellow(),
                tool.display()
            );
        }
        Some(RenderOutcome::ToolNotExecutable(tool)) => {
            eprintln!(
                "{} {}",
                "Visualizer is not executable:".yellow(),
                tool.display()
            );
        }
        Some(RenderOutcome::Failed { status, stderr }) => {
            let status = status.map_or_else(|| "signal".to_string(), |code| code.to_string());
            eprintln!(
                "{} {}: {}",
                "Visualizer failed with status".yellow(),
                status,
                stderr
            );
        }
        Some(RenderOutcome::SpawnFailed(reason)) => {
            eprintln!("{} {}", "Unable to run visualizer:".yellow(), reason);
        }
    }

    Ok(())
}
