//! Définition et implémentation de la commande de conversion
//!
//! Pipeline en une passe, strictement séquentiel : résolution du pattern,
//! parsing fichier par fichier dans l'ordre trié, accumulation des features
//! et des compteurs, puis une seule sérialisation en fin de run.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use arbres_csv::SchemaCache;

use crate::config::Config;
use crate::document::Collector;
use crate::export;
use crate::report::RunReport;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Pattern glob des fichiers CSV d'entrée
    #[arg(short = 'i', long, default_value = "arbres-part-*.csv")]
    pub pattern: String,

    /// Fichier GeoJSON de sortie
    #[arg(short, long, default_value = "trees_combined.json")]
    pub output: PathBuf,

    /// Profil de clés (standard/compact) ou chemin d'un JSON de profil
    #[arg(long, default_value = "standard")]
    pub config: String,

    /// Sortie indentée au lieu du JSON compact
    #[arg(long)]
    pub pretty: bool,

    /// Écrire aussi une copie gzip à côté de la sortie
    #[arg(long)]
    pub gzip: bool,

    /// Sauvegarder le rapport de run en JSON
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Exécute la conversion
pub fn cmd_convert(args: &ConvertArgs) -> Result<()> {
    let started_at = Instant::now();

    let config = Config::resolve(&args.config)?;

    if let Ok(cwd) = std::env::current_dir() {
        println!("Current directory: {}", cwd.display());
    }
    println!("Looking for: {}\n", args.pattern);

    let files = resolve_inputs(&args.pattern)?;

    if files.is_empty() {
        print_directory_listing();
        anyhow::bail!("No CSV files match pattern '{}'", args.pattern);
    }

    println!("Found {} CSV files\n", files.len());

    let mut collector = Collector::new(config);
    let mut report = RunReport::new(&args.pattern);
    let mut cache = SchemaCache::new();

    for (i, file) in files.iter().enumerate() {
        println!("[{}/{}] Processing {}...", i + 1, files.len(), file.display());

        match arbres_csv::parse_file(file, &mut cache) {
            Ok(result) => {
                for tree in &result.records {
                    collector.push(tree);
                }
                println!(
                    "    Rows: {} | Valid: {} | Skipped: {}",
                    result.rows_read, result.rows_valid, result.rows_skipped
                );
                report.record_file(
                    &file.display().to_string(),
                    result.rows_read,
                    result.rows_valid,
                    result.rows_skipped,
                );
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", file.display(), e);
                report.record_file_failure(&file.display().to_string(), &e.to_string());
            }
        }
    }

    report.trees_with_dates = collector.trees_with_dates();
    let (year_min, year_max) = collector.year_range();
    report.year_min = year_min;
    report.year_max = year_max;

    let document = collector.finish();
    report.species_count = document.metadata.tree_types.len();

    println!("\nWriting {}...", args.output.display());
    let bytes = export::geojson::serialize(&document, args.pretty)?;
    export::geojson::write_file(&args.output, &bytes)?;

    if args.gzip {
        let gz_path = export::gzip::write_gzip_copy(&args.output, &bytes)?;
        println!("Wrote gzip copy: {}", gz_path.display());
    }

    let size_mb = bytes.len() as f64 / (1024.0 * 1024.0);
    println!("Output file: {} ({:.2} MB)", args.output.display(), size_mb);

    report.set_duration(started_at.elapsed());
    report.finalize();
    report.display();

    if let Some(ref path) = args.report {
        report
            .save_to_file(path)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;
    }

    info!(
        features = document.metadata.total_trees,
        skipped = report.rows_skipped,
        files_failed = report.files_failed,
        "Conversion complete"
    );

    Ok(())
}

/// Résout le pattern glob en liste triée de fichiers
fn resolve_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: '{}'", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Unreadable glob entry: {}", e),
        }
    }

    files.sort();
    Ok(files)
}

/// Liste le répertoire courant comme aide au diagnostic (20 entrées max)
fn print_directory_listing() {
    println!("Files in directory:");
    let Ok(entries) = std::fs::read_dir(".") else {
        println!("  (cannot read current directory)");
        return;
    };

    for entry in entries.filter_map(|e| e.ok()).take(20) {
        println!("  - {}", entry.file_name().to_string_lossy());
    }
}
