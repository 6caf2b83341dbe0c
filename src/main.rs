use crate::analysis::centrality::DegreeCentrality;
use crate::analysis::cooccurrence::build_user_graph;
use crate::analysis::report::generate_report;
use crate::config::Args;
use crate::core::post::Post;
use crate::export::csv::export_csv;
use crate::export::plot::export_plot;
use crate::ingest::csv::ingest_csv;
use crate::ingest::synthetic::generate;
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod analysis;
pub mod config;
pub mod core;
pub mod export;
pub mod ingest;

fn collect_posts(args: &Args) -> anyhow::Result<Vec<Post>> {
    match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let (posts, stats) =
                ingest_csv(file).with_context(|| format!("reading {}", path.display()))?;
            info!(
                path = %path.display(),
                parsed = stats.parsed,
                skipped = stats.skipped,
                "posts loaded"
            );
            Ok(posts)
        }
        None => {
            let posts = generate(&args.synthetic()).collect::<Vec<_>>();
            info!(
                keyword = %args.keyword,
                platform = %args.platform,
                count = posts.len(),
                "synthetic posts generated"
            );
            Ok(posts)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "misinfo_tracker=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let posts = collect_posts(&args)?;

    let user_graph = build_user_graph(&posts);
    let detector = args.communities.detector();
    let report = generate_report(&posts, &user_graph, &DegreeCentrality, detector.as_ref());
    println!("{}", serde_json::to_string_pretty(&report)?);

    export_plot(&args.plot_output, &user_graph, &args.layout())
        .with_context(|| format!("writing {}", args.plot_output.display()))?;
    export_csv(&args.csv_output, &posts)
        .with_context(|| format!("writing {}", args.csv_output.display()))?;

    Ok(())
}
