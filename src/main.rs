use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod export;
mod filter;
mod models;
mod report;
mod selection;
mod session;
mod store;
mod suggest;
mod view;

use filter::FilterParams;
use selection::SkillSelection;
use store::Dataset;
use view::{TerminalRenderer, View};

#[derive(Parser)]
#[command(name = "candidate-browser")]
#[command(about = "Browse, filter and export candidate profiles", long_about = None)]
struct Cli {
    /// Candidate dataset (JSON list of profiles)
    #[arg(long, global = true, env = "CANDIDATES_DATA", default_value = "students.json")]
    data: PathBuf,
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidates matching every given filter
    List {
        /// Required skill; repeat to require several
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long, default_value = filter::ANY_DEGREE)]
        ug_degree: String,
        #[arg(long, default_value = "0")]
        min_ug_cgpa: String,
        #[arg(long, default_value = "0")]
        min_pg_cgpa: String,
        #[arg(long)]
        require_pg: bool,
        #[arg(long, default_value = "0")]
        min_exp: String,
    },
    /// Suggest skills containing the given text
    Suggest {
        query: String,
        /// Skills already selected, left out of the suggestions
        #[arg(long = "selected")]
        selected: Vec<String>,
    },
    /// Show one candidate in full
    Show { id: u64 },
    /// Export the whole dataset as CSV, ignoring filters
    Export {
        #[arg(long, default_value = export::DEFAULT_EXPORT_FILE)]
        out: PathBuf,
    },
    /// Interactive filtering session on stdin
    Browse,
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,candidate_browser=info",
        1 => "info,candidate_browser=debug",
        _ => "debug,candidate_browser=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// A failed load leaves the browser with no candidates rather than aborting.
async fn load_or_empty(path: &Path) -> Dataset {
    match store::load_path(path).await {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!("unable to load candidate data: {err}");
            Dataset::empty()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let dataset = load_or_empty(&cli.data).await;

    match cli.command {
        Commands::List {
            skills,
            ug_degree,
            min_ug_cgpa,
            min_pg_cgpa,
            require_pg,
            min_exp,
        } => {
            let selection: SkillSelection = skills.iter().collect();
            let params = FilterParams {
                ug_degree,
                min_ug_cgpa: filter::parse_cgpa(&min_ug_cgpa),
                min_pg_cgpa: filter::parse_cgpa(&min_pg_cgpa),
                require_pg,
                min_exp: filter::parse_min_exp(&min_exp),
            };
            let mut view = View::with_filters(TerminalRenderer, selection, params);
            view.install(dataset);
        }
        Commands::Suggest { query, selected } => {
            let selection: SkillSelection = selected.iter().collect();
            let suggestions = suggest::suggest(&query, &selection, dataset.all_skills());
            print!("{}", report::format_suggestions(&suggestions));
        }
        Commands::Show { id } => match dataset.find(id) {
            Some(record) => print!("{}", report::format_detail(record)),
            None => println!("No candidate with id {id}."),
        },
        Commands::Export { out } => {
            if dataset.is_empty() {
                println!("No candidates loaded; nothing to export.");
                return Ok(());
            }
            let file = std::fs::File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let rows = export::write_csv(dataset.records(), file)?;
            println!("Exported {rows} candidates to {}.", out.display());
        }
        Commands::Browse => {
            let mut view = View::new(TerminalRenderer);
            view.install(dataset);
            tracing::info!(candidates = view.dataset().len(), "browsing session started");
            println!("{}", session::HELP);
            let stdin = std::io::stdin();
            session::run(&mut view, stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
