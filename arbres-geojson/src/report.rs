//! Rapport de conversion avec graceful degradation
//!
//! Ce module fournit des structures pour collecter et afficher les
//! résultats de la conversion : compteurs par fichier, agrégats du run,
//! warnings non fatals.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

/// Seuil sous lequel un run est suspect (export incomplet probable)
pub const LOW_VALID_THRESHOLD: usize = 100_000;

/// Statut global de la conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// Conversion réussie sans erreur
    Success,
    /// Conversion réussie avec des fichiers en échec
    PartialSuccess,
    /// Conversion échouée (aucune feature produite)
    Failed,
}

/// Compteurs d'un fichier traité
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileStats {
    /// Nom du fichier source
    pub file: String,
    /// Lignes de données lues
    pub rows_read: usize,
    /// Lignes valides
    pub rows_valid: usize,
    /// Lignes rejetées
    pub rows_skipped: usize,
}

/// Rapport complet de conversion
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Pattern d'entrée du run
    pub pattern: String,
    /// Durée de la conversion
    pub duration_secs: f64,
    /// Statut global
    pub status: RunStatus,

    // Compteurs globaux
    /// Nombre de fichiers traités
    pub files_processed: usize,
    /// Nombre de fichiers en erreur
    pub files_failed: usize,
    /// Lignes lues
    pub rows_read: usize,
    /// Lignes valides (features émises)
    pub rows_valid: usize,
    /// Lignes rejetées (coordonnées invalides)
    pub rows_skipped: usize,
    /// Lignes avec une année de plantation résolue
    pub trees_with_dates: usize,
    /// Nombre d'essences distinctes
    pub species_count: usize,
    /// Plage d'années résolues
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,

    /// Statistiques par fichier, dans l'ordre de traitement
    pub by_file: Vec<FileStats>,

    /// Warnings non fatals
    pub warnings: Vec<String>,
}

impl RunReport {
    /// Crée un nouveau rapport pour un pattern d'entrée
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            duration_secs: 0.0,
            status: RunStatus::Success,
            files_processed: 0,
            files_failed: 0,
            rows_read: 0,
            rows_valid: 0,
            rows_skipped: 0,
            trees_with_dates: 0,
            species_count: 0,
            year_min: None,
            year_max: None,
            by_file: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Enregistre un fichier traité avec succès
    pub fn record_file(&mut self, file: &str, rows_read: usize, rows_valid: usize, rows_skipped: usize) {
        self.files_processed += 1;
        self.rows_read += rows_read;
        self.rows_valid += rows_valid;
        self.rows_skipped += rows_skipped;
        self.by_file.push(FileStats {
            file: file.to_string(),
            rows_read,
            rows_valid,
            rows_skipped,
        });
    }

    /// Enregistre un fichier en échec
    pub fn record_file_failure(&mut self, file: &str, message: &str) {
        self.files_processed += 1;
        self.files_failed += 1;
        self.warnings
            .push(format!("{}: {}", file, message));
    }

    /// Enregistre un warning non fatal
    pub fn record_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Définit la durée de la conversion
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final et le warning de faible rendement
    pub fn finalize(&mut self) {
        if self.rows_valid < LOW_VALID_THRESHOLD {
            self.warnings.push(format!(
                "Only {} valid trees (expected {}+). Check that every CSV file was processed.",
                self.rows_valid, LOW_VALID_THRESHOLD
            ));
        }

        self.status = if self.rows_valid == 0 {
            RunStatus::Failed
        } else if self.files_failed > 0 {
            RunStatus::PartialSuccess
        } else {
            RunStatus::Success
        };
    }

    /// Pourcentage de lignes valides
    pub fn valid_percent(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            self.rows_valid as f64 / self.rows_read as f64 * 100.0
        }
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION REPORT - {}", self.pattern);
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.2}s", self.duration_secs);

        println!("\n--- SUMMARY ---");
        println!(
            "Files: {} processed, {} failed",
            self.files_processed, self.files_failed
        );
        println!(
            "Rows: {} read, {} valid ({:.1}%), {} skipped",
            self.rows_read,
            self.rows_valid,
            self.valid_percent(),
            self.rows_skipped
        );
        println!("Trees with dates: {}", self.trees_with_dates);
        match (self.year_min, self.year_max) {
            (Some(min), Some(max)) => println!("Year range: {} - {}", min, max),
            _ => println!("Year range: none"),
        }
        println!("Tree species: {}", self.species_count);

        if !self.by_file.is_empty() {
            println!("\n--- BY FILE ---");
            for stats in &self.by_file {
                println!(
                    "  {}: {} read, {} valid, {} skipped",
                    stats.file, stats.rows_read, stats.rows_valid, stats.rows_skipped
                );
            }
        }

        if !self.warnings.is_empty() {
            println!("\n--- WARNINGS ({}) ---", self.warnings.len());
            for w in self.warnings.iter().take(10) {
                println!("  {}", w);
            }
            if self.warnings.len() > 10 {
                println!("  ... and {} more", self.warnings.len() - 10);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} valid, {} skipped, {} files failed",
            self.pattern, self.rows_valid, self.rows_skipped, self.files_failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_report_new() {
        let report = RunReport::new("arbres-part-*.csv");
        assert_eq!(report.status, RunStatus::Success);
        assert_eq!(report.files_processed, 0);
        assert_eq!(report.rows_valid, 0);
    }

    #[test]
    fn test_record_file() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("arbres-part-1.csv", 100, 90, 10);
        report.record_file("arbres-part-2.csv", 50, 45, 5);

        assert_eq!(report.files_processed, 2);
        assert_eq!(report.rows_read, 150);
        assert_eq!(report.rows_valid, 135);
        assert_eq!(report.rows_skipped, 15);
        assert_eq!(report.by_file.len(), 2);
    }

    #[test]
    fn test_record_file_failure() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file_failure("arbres-part-3.csv", "permission denied");

        assert_eq!(report.files_processed, 1);
        assert_eq!(report.files_failed, 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_finalize_partial_success() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("a.csv", 10, 8, 2);
        report.record_file_failure("b.csv", "unreadable");
        report.finalize();

        assert_eq!(report.status, RunStatus::PartialSuccess);
    }

    #[test]
    fn test_finalize_failed_when_no_valid_rows() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("a.csv", 10, 0, 10);
        report.finalize();

        assert_eq!(report.status, RunStatus::Failed);
    }

    #[test]
    fn test_finalize_low_yield_warning() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("a.csv", 500, 400, 100);
        report.finalize();

        // Non fatal: le statut reste Success
        assert_eq!(report.status, RunStatus::Success);
        assert!(report.warnings.iter().any(|w| w.contains("400 valid trees")));
    }

    #[test]
    fn test_finalize_no_warning_above_threshold() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("a.csv", 400_000, 350_000, 50_000);
        report.finalize();

        assert_eq!(report.status, RunStatus::Success);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_valid_percent() {
        let mut report = RunReport::new("arbres-part-*.csv");
        assert_eq!(report.valid_percent(), 0.0);

        report.record_file("a.csv", 200, 150, 50);
        assert!((report.valid_percent() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary() {
        let mut report = RunReport::new("arbres-part-*.csv");
        report.record_file("a.csv", 100, 90, 10);

        let summary = report.summary();
        assert!(summary.contains("arbres-part-*.csv"));
        assert!(summary.contains("90 valid"));
    }
}
