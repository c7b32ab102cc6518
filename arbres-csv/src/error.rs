//! Types d'erreurs pour le crate arbres-csv

use thiserror::Error;

/// Erreurs pouvant survenir lors du parsing d'un export CSV
#[derive(Debug, Error)]
pub enum ArbresError {
    /// Erreur d'I/O lors de la lecture du fichier
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Erreur de lecture CSV (ligne malformée, quoting invalide, etc.)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Fichier vide (pas même une ligne d'en-tête)
    #[error("Empty file: {0}")]
    EmptyFile(String),
}
