use clap::{Parser, Subcommand};
use consultas_core::{CoreConfig, DataRefresher, MockApiSource, RefreshOutcome};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "consultas")]
#[command(about = "Dental consultations data CLI")]
struct Cli {
    /// Consultations document to operate on
    #[arg(long, env = "CONSULTAS_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch consultations from the external API and overwrite the data file
    Refresh,
    /// List the consultations currently in the data file
    List,
    /// Print the resolved data file path
    Path,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("consultas=info".parse()?)
                .add_directive("consultas_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_env_values(
        cli.data_file.map(|p| p.to_string_lossy().into_owned()),
        None,
    )?;

    match cli.command {
        Some(Commands::Refresh) => {
            let refresher = DataRefresher::new(MockApiSource::latest(), cfg.document_store());
            match refresher.refresh() {
                RefreshOutcome::Refreshed { count } => println!(
                    "Saved {} consultations to {}",
                    count,
                    cfg.data_file().display()
                ),
                RefreshOutcome::FetchFailed => {
                    tracing::error!("refresh failed: could not fetch consultations")
                }
                RefreshOutcome::WriteFailed => {
                    tracing::error!("refresh failed: could not save consultations")
                }
            }
        }
        Some(Commands::List) => match cfg.document_store().read_records() {
            Ok(records) if records.is_empty() => println!("No consultations found."),
            Ok(records) => {
                for record in records {
                    println!(
                        "ID: {}, Patient: {}, Date: {} {}, Status: {}",
                        record.consultation_id,
                        record.patient.name,
                        record.date,
                        record.time,
                        record.treatment.status
                    );
                }
            }
            Err(e) => eprintln!("Error reading consultations: {}", e),
        },
        Some(Commands::Path) => {
            println!("{}", cfg.data_file().display());
        }
        None => {
            println!("Use 'consultas --help' for commands");
        }
    }

    Ok(())
}
