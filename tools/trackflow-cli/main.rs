use clap::{Parser, Subcommand};
use std::env;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use trackflow::prelude::*;

/// Headless companion to the tracker flow editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Base URL of the tracker API (overrides the config)
    #[arg(long, global = true, env = "TRACKFLOW_API_URL")]
    api_url: Option<String>,

    /// Admin key for mutating calls (falls back to the configured environment variable)
    #[arg(long, global = true)]
    admin_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the builtin actions and their parameters
    Catalog,
    /// Load a draft into the editor graph and print its outline
    Inspect { draft_path: String },
    /// Load a draft and print what the editor would save for it
    Normalize { draft_path: String },
    /// List trackers and their last run status
    List,
    /// Create a tracker from a draft file, or update one with --id
    Push {
        draft_path: String,
        #[arg(long)]
        id: Option<i64>,
    },
    /// Trigger a run of a saved tracker
    Run { id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    init_logging(&config);

    let catalog = Arc::new(ActionCatalog::builtin());
    let base_url = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let store = HttpTrackerStore::new(base_url);

    match cli.command {
        Command::Catalog => print_catalog(&catalog),
        Command::Inspect { ref draft_path } => {
            let session = open_draft(draft_path, &catalog, &config);
            println!("Tracker: {}", session.meta().name);
            print!("{}", GraphOutline::new(session.graph(), &catalog));
        }
        Command::Normalize { ref draft_path } => {
            let session = open_draft(draft_path, &catalog, &config);
            let json = session
                .draft()
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("{}", json);
        }
        Command::List => {
            let trackers = store.list().await.unwrap_or_else(|e| exit_with_store_error(e));
            print_trackers(&trackers);
        }
        Command::Push { ref draft_path, id } => {
            let credential = credential(&cli, &config);
            let draft = TrackerDraft::from_file(draft_path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));

            let mut session = match id {
                Some(id) => {
                    let existing = store.get(id).await.unwrap_or_else(|e| exit_with_store_error(e));
                    EditorSession::for_tracker(catalog.clone(), config.layout, &existing)
                }
                None => EditorSession::new(catalog.clone(), config.layout),
            };
            session.load_initial(&draft);

            let start = Instant::now();
            let tracker = session
                .save(&store, &credential)
                .await
                .unwrap_or_else(|e| exit_with_store_error(e));
            println!(
                "Saved tracker '{}' (id {}) with {} steps in {:?}",
                tracker.name,
                tracker.id,
                tracker.config.len(),
                start.elapsed()
            );
        }
        Command::Run { id } => {
            let credential = credential(&cli, &config);
            store
                .trigger_run(id, &credential)
                .await
                .unwrap_or_else(|e| exit_with_store_error(e));
            println!("Run requested for tracker {}", id);
        }
    }
}

fn init_logging(config: &EditorConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_draft(path: &str, catalog: &Arc<ActionCatalog>, config: &EditorConfig) -> EditorSession {
    let draft = TrackerDraft::from_file(path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let mut session = EditorSession::new(catalog.clone(), config.layout);
    session.load_initial(&draft);
    session
}

fn credential(cli: &Cli, config: &EditorConfig) -> Credential {
    cli.admin_key
        .clone()
        .or_else(|| env::var(&config.api.admin_key_env).ok())
        .map(Credential::new)
        .unwrap_or_else(|| {
            exit_with_error(&format!(
                "An admin key is required. Pass --admin-key or set {}.",
                config.api.admin_key_env
            ))
        })
}

fn print_catalog(catalog: &ActionCatalog) {
    println!("{} actions available:", catalog.len());
    for action in catalog.iter() {
        println!("\n  {} [{}]", action.label, action.id);
        if action.fields.is_empty() {
            println!("    (no parameters)");
        }
        for field in &action.fields {
            println!(
                "    - {:<10} {:<8} {}",
                field.name,
                field.kind.to_string(),
                field.placeholder
            );
        }
    }
}

fn print_trackers(trackers: &[Tracker]) {
    if trackers.is_empty() {
        println!("No trackers found.");
        return;
    }
    println!("{:>5}  {:<9} {:<14} {:<25} NAME", "ID", "STATUS", "SCHEDULE", "LAST RUN");
    for tracker in trackers {
        let last_run = tracker
            .last_run_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:>5}  {:<9} {:<14} {:<25} {}{}",
            tracker.id,
            tracker.status().to_string(),
            tracker.schedule_cron.as_deref().unwrap_or("-"),
            last_run,
            tracker.name,
            if tracker.is_active { "" } else { " (inactive)" }
        );
    }
}

fn exit_with_store_error(error: StoreError) -> ! {
    if error.is_unauthorized() {
        eprintln!("\nError: {}", error);
        eprintln!("The admin key was rejected. Check --admin-key and try again.");
        std::process::exit(2);
    }
    exit_with_error(&error.to_string())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
