use std::path::PathBuf;

use admin_sidebar::storage::{self, LoadStatus};
use admin_sidebar::{
    SidebarEffect, SidebarIntent, SidebarLabels, SidebarWidget,
};
use anyhow::Context;
use clap::Parser;
use env_logger::Env;

/// Print the admin sidebar composed for a site configuration.
#[derive(Debug, Parser)]
#[command(bin_name = "admin-sidebar")]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Site configuration JSON (the parsed `_config.yml`).
    #[arg(long, short = 'c')]
    config: PathBuf,

    /// Fetched collections JSON array.
    #[arg(long, short = 'l')]
    collections: Option<PathBuf>,

    /// Translation table for sidebar labels.
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Start with the collections panel expanded.
    #[arg(long)]
    expanded: bool,

    /// Current route, used to mark the active link.
    #[arg(long)]
    location: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = CliArgs::parse();

    let (config, status) = storage::load_site_config(&args.config)
        .with_context(|| {
            format!("failed to read config {}", args.config.display())
        })?
        .into_parts();
    if status == LoadStatus::Missing {
        log::info!(
            "config {} not found, using empty configuration",
            args.config.display()
        );
    }

    let labels = match &args.labels {
        Some(path) => storage::load_labels(path).with_context(|| {
            format!("failed to read labels {}", path.display())
        })?,
        None => SidebarLabels::default(),
    };

    let mut sidebar =
        SidebarWidget::new(config, labels).with_collapsed(!args.expanded);

    for effect in sidebar.reduce(SidebarIntent::Mounted) {
        match effect {
            SidebarEffect::FetchCollections => {
                let intent = fetch_collections(args.collections.as_ref());
                let _ = sidebar.reduce(intent);
            },
        }
    }

    if let Some(location) = args.location {
        let _ = sidebar.reduce(SidebarIntent::LocationChanged(location));
    }

    let vm = sidebar.vm();
    let output = if args.pretty {
        serde_json::to_string_pretty(&vm)?
    } else {
        serde_json::to_string(&vm)?
    };
    println!("{output}");

    Ok(())
}

fn fetch_collections(path: Option<&PathBuf>) -> SidebarIntent {
    let Some(path) = path else {
        return SidebarIntent::CollectionsLoaded(Vec::new());
    };

    match storage::load_collections(path) {
        Ok(collections) => SidebarIntent::CollectionsLoaded(collections),
        Err(err) => SidebarIntent::CollectionsFetchFailed(format!(
            "{}: {err}",
            path.display()
        )),
    }
}
