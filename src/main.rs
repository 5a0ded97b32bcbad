//! archigraph CLI: evidence-graph engine for architecture discovery.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use miette::Result;

use archigraph::engine::{Engine, EngineConfig};
use archigraph::export;
use archigraph::graph::analytics;
use archigraph::ingest::connectors::Connector;
use archigraph::telemetry;

#[derive(Parser)]
#[command(name = "archigraph", version, about = "Evidence-graph engine for architecture discovery")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest an evidence artifact and print the extracted graph.
    Ingest {
        /// Path to a text artifact.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Inline artifact text.
        #[arg(long)]
        text: Option<String>,

        /// Source label for inline text.
        #[arg(long, default_value = "inline")]
        source: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },

    /// Work with evidence connectors.
    Connector {
        #[command(subcommand)]
        action: ConnectorAction,
    },

    /// Inspect and optimize the migration roadmap.
    Roadmap {
        #[command(subcommand)]
        action: RoadmapAction,
    },

    /// Show the operations console feed (incidents, health, drift).
    Ops,

    /// Run an end-to-end demo: connector ingest, validation, summary.
    Demo,
}

#[derive(Subcommand)]
enum ConnectorAction {
    /// List available connectors.
    List,
    /// Fetch a connector payload and ingest it.
    Run {
        /// Connector name (confluence, jira, aws).
        name: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(Subcommand)]
enum RoadmapAction {
    /// Print the current roadmap.
    Show,
    /// Re-order the roadmap for quick wins and risk mitigation.
    Optimize,
    /// Run the wave policy over every initiative.
    Audit,
    /// Export the roadmap.
    Export {
        /// Export format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::from_toml_file(path)?,
        None => EngineConfig::default(),
    };
    let engine = Engine::new(config)?;

    match cli.command {
        Commands::Ingest {
            file,
            text,
            source,
            format,
        } => {
            let outcome = match (file, text) {
                (Some(path), _) => engine.ingest_file(&path)?,
                (None, Some(text)) => engine.ingest_text(&text, &source),
                (None, None) => {
                    return Err(miette::miette!(
                        "provide an artifact with --file or --text"
                    ));
                }
            };
            eprintln!("{outcome}");
            print_graph(&engine, format)?;
        }

        Commands::Connector { action } => match action {
            ConnectorAction::List => {
                for connector in Connector::all() {
                    println!("{connector}");
                }
            }
            ConnectorAction::Run { name, format } => {
                let connector: Connector = name.parse().map_err(archigraph::error::ArchiError::from)?;
                let outcome = engine.ingest_connector(connector);
                eprintln!("{outcome}");
                print_graph(&engine, format)?;
            }
        },

        Commands::Roadmap { action } => match action {
            RoadmapAction::Show => print_roadmap(&engine),
            RoadmapAction::Optimize => {
                engine.roadmap().optimize();
                print_roadmap(&engine);
            }
            RoadmapAction::Audit => {
                for verdict in engine.roadmap().audit() {
                    let status = if verdict.compliant { "ok" } else { "FAIL" };
                    let reason = verdict.reason.unwrap_or_default();
                    println!("{:>4}  {}  {}", verdict.initiative_id, status, reason);
                }
            }
            RoadmapAction::Export { format } => {
                let initiatives = engine.roadmap().initiatives();
                let rendered = match format {
                    ExportFormat::Json => export::roadmap_to_json(&initiatives)?,
                    ExportFormat::Csv => export::roadmap_to_csv(&initiatives)?,
                };
                println!("{rendered}");
            }
        },

        Commands::Ops => {
            let health = telemetry::health_metrics();
            let drift = telemetry::drift_summary();
            println!(
                "maturity {}  uptime {}%  compliance {}",
                health.maturity, health.uptime, health.compliance
            );
            println!(
                "drift: {}/{} components ({}%)",
                drift.drifting_components, drift.total_components, drift.drift_pct
            );
            println!();
            for incident in telemetry::mock_incidents() {
                println!(
                    "[{}] {:<8} {:<26} {}",
                    incident.status, incident.severity.to_string(), incident.component, incident.summary
                );
            }
        }

        Commands::Demo => {
            let outcome = engine.ingest_connector(Connector::Confluence);
            println!("{outcome}");
            engine.validate_node("app_sap");
            engine.validate_node("app_sfdc");
            print!("{}", engine.info());
            println!();
            print_graph(&engine, Format::Table)?;
        }
    }

    Ok(())
}

fn print_graph(engine: &Engine, format: Format) -> Result<()> {
    let snapshot = engine.graph().snapshot();
    match format {
        Format::Json => {
            println!("{}", export::graph_to_json(&snapshot)?);
        }
        Format::Table => {
            for node in &snapshot.nodes {
                let mark = if node.validated { "✓" } else { " " };
                println!(
                    "{mark} {:<12} {:<12} {:<16} conf {:.2}  [{}]",
                    node.id, node.kind.to_string(), node.label, node.confidence, node.source
                );
            }
            for edge in &snapshot.edges {
                let label = edge.label.as_deref().unwrap_or("-");
                println!("  {} -> {}  ({label})", edge.source, edge.target);
            }
            let isolated = analytics::isolated_nodes(&snapshot);
            if !isolated.is_empty() {
                println!("isolated: {}", isolated.join(", "));
            }
        }
    }
    Ok(())
}

fn print_roadmap(engine: &Engine) {
    for initiative in engine.roadmap().initiatives() {
        let mark = if initiative.compliant { " " } else { "!" };
        println!(
            "{mark} {:>3}  {:<30} {:<7} {:>5}k  {:<6} deps[{}]",
            initiative.id,
            initiative.name,
            initiative.wave,
            initiative.cost_k,
            initiative.risk.to_string(),
            initiative.dependencies.join(",")
        );
    }
}
