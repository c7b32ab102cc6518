//! # arbres-csv
//!
//! Parser pour les exports CSV de l'inventaire des arbres publics de
//! Montréal (fichiers `arbres-part-*.csv`).
//!
//! ## Features
//!
//! - Détection heuristique de la ligne d'en-tête, fichier par fichier
//! - Schéma canonique partagé entre fichiers hétérogènes d'un même run
//! - Validation des coordonnées et de l'année de plantation par ligne,
//!   avec dégradation silencieuse (skip compté, jamais d'erreur par ligne)
//! - Types `geo` pour l'interopérabilité avec l'écosystème Rust géospatial
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arbres_csv::{parse_file, SchemaCache};
//! use std::path::Path;
//!
//! let mut cache = SchemaCache::new();
//! let result = parse_file(Path::new("arbres-part-1.csv"), &mut cache)?;
//! println!(
//!     "{} lignes, {} valides, {} rejetées",
//!     result.rows_read, result.rows_valid, result.rows_skipped
//! );
//! ```

pub mod error;
pub mod parser;
pub mod schema;
pub mod types;

pub use error::ArbresError;
pub use schema::{Schema, SchemaCache};
pub use types::{FileResult, RowOutcome, TreeRecord};

use std::path::Path;

use tracing::debug;

/// Parse un fichier CSV de l'inventaire et retourne les arbres valides.
///
/// # Arguments
///
/// * `path` - Chemin vers le fichier CSV (UTF-8)
/// * `cache` - Schéma canonique partagé entre les fichiers du run
///
/// # Returns
///
/// Un `FileResult` contenant les arbres valides dans l'ordre du fichier et
/// les compteurs de lignes (lues / valides / rejetées).
///
/// # Errors
///
/// Retourne `ArbresError` si le fichier est illisible, vide, ou si le flux
/// CSV lui-même est corrompu. Les lignes individuellement invalides ne sont
/// jamais des erreurs : elles incrémentent `rows_skipped`.
pub fn parse_file(path: &Path, cache: &mut SchemaCache) -> Result<FileResult, ArbresError> {
    // L'en-tête est décidé ici, pas par le lecteur CSV: certains exports
    // n'en ont pas et reçoivent le schéma canonique ou positionnel.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut records = reader.records();

    let first = match records.next() {
        Some(record) => record?,
        None => return Err(ArbresError::EmptyFile(path.display().to_string())),
    };

    let mut result = FileResult::default();

    let schema = if schema::looks_like_header(&first) {
        let schema = Schema::from_header(&first);
        debug!(
            file = %path.display(),
            columns = schema.names().len(),
            "Header row detected"
        );
        cache.record_header(&schema);
        schema
    } else {
        let schema = cache.headerless_schema();
        debug!(file = %path.display(), "No header row, using canonical schema");
        // La première ligne est une ligne de données
        consume_row(&schema, &first, &mut result);
        schema
    };

    for record in records {
        let record = record?;
        consume_row(&schema, &record, &mut result);
    }

    Ok(result)
}

fn consume_row(schema: &Schema, record: &csv::StringRecord, result: &mut FileResult) {
    result.rows_read += 1;
    match parser::row::transform(schema, record) {
        RowOutcome::Valid(tree) => {
            result.rows_valid += 1;
            result.records.push(*tree);
        }
        RowOutcome::Skipped => {
            result.rows_skipped += 1;
        }
    }
}
