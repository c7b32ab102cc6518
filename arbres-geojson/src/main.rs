//! Point d'entrée CLI pour arbres-geojson

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;
mod config;
mod document;
mod export;
mod report;

use cli::ConvertArgs;

/// Combiner les exports CSV de l'inventaire des arbres en un GeoJSON
#[derive(Parser)]
#[command(name = "arbres-geojson")]
#[command(author, version)]
#[command(about = "Combiner les CSV de l'inventaire des arbres publics en un seul GeoJSON")]
#[command(
    long_about = "Lit les fichiers arbres-part-*.csv, valide chaque ligne (coordonnées, date de plantation) et écrit une FeatureCollection GeoJSON unique avec métadonnées agrégées."
)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Arguments de conversion
    #[command(flatten)]
    convert: ConvertArgs,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    info!(
        pattern = %cli.convert.pattern,
        output = %cli.convert.output.display(),
        "Conversion vers GeoJSON"
    );
    cli::cmd_convert(&cli.convert)?;

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
