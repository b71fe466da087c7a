//! Event Scripts - binding inspector
//!
//! Reads a game data record exported as TOML or JSON, resolves its script
//! fields the way a game object would, and prints the resulting bindings.

use clap::Parser;
use event_scripts::core::config::{set_config, ScriptConfig};
use event_scripts::core::error::{Result, ScriptError};
use event_scripts::script::{aliases_for, ScriptContainer, ScriptEvent};
use std::path::{Path, PathBuf};

/// Show which script each event of a record is bound to
#[derive(Parser, Debug)]
#[command(name = "event-scripts")]
#[command(about = "Resolve event script bindings from a TOML or JSON record")]
struct Args {
    /// Record file to read
    record: PathBuf,

    /// Record format: toml or json (defaults to the file extension)
    #[arg(long)]
    format: Option<String>,

    /// Only show this event (e.g. heartbeat, spell_cast_at)
    #[arg(long)]
    event: Option<ScriptEvent>,

    /// Print the bindings as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Script config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.config {
        let config = ScriptConfig::load(path)?;
        if set_config(config).is_err() {
            tracing::warn!("Script config was already initialized; ignoring {:?}", path);
        }
    }

    let format = match &args.format {
        Some(format) => format.to_ascii_lowercase(),
        None => extension_of(&args.record),
    };

    let content = std::fs::read_to_string(&args.record)?;
    let mut container = ScriptContainer::new();
    match format.as_str() {
        "toml" => {
            let record: toml::Table = toml::from_str(&content)?;
            container.read_scripts(&record);
        }
        "json" => {
            let record: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(&content)?;
            container.read_scripts(&record);
        }
        other => {
            return Err(ScriptError::Config(format!(
                "unsupported record format '{}' (expected toml or json)",
                other
            )));
        }
    }

    tracing::info!(
        "Resolved {} of {} events from {:?}",
        container.bound_count(),
        ScriptEvent::COUNT,
        args.record
    );

    if args.json {
        let mut shown = container.clone();
        if let Some(event) = args.event {
            shown = ScriptContainer::new();
            shown.set_script(event, container.script(event));
        }
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    match args.event {
        Some(event) => print_event(&container, event),
        None => {
            if container.is_empty() {
                println!("No scripts bound.");
            }
            for (event, name) in container.bindings() {
                println!("{:<20} {:<7} {}", event, scope_label(event), name);
            }
        }
    }

    Ok(())
}

fn print_event(container: &ScriptContainer, event: ScriptEvent) {
    let fields: Vec<_> = aliases_for(event).collect();
    if container.has_script(event) {
        println!("{:<20} {:<7} {}", event, scope_label(event), container.script(event));
    } else {
        println!("{:<20} {:<7} (none)", event, scope_label(event));
    }
    println!("  fields: {}", fields.join(", "));
}

/// Whether only a module fires the event, or any object can
fn scope_label(event: ScriptEvent) -> &'static str {
    if event.is_module_event() {
        "module"
    } else {
        "object"
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
