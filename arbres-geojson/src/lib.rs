//! # arbres-geojson
//!
//! Combine les exports CSV de l'inventaire des arbres publics de Montréal
//! en une seule FeatureCollection GeoJSON avec métadonnées agrégées.
//!
//! ## Features
//!
//! - Résolution des fichiers d'entrée par pattern glob (ordre trié)
//! - Validation par ligne avec dégradation silencieuse (compteurs)
//! - Métadonnées agrégées : plage d'années, essences distinctes, compteurs
//! - Sortie compacte ou indentée, copie gzip optionnelle
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Conversion avec les défauts (arbres-part-*.csv → trees_combined.json)
//! arbres-geojson
//!
//! # Sortie indentée + copie gzip
//! arbres-geojson --pattern 'data/arbres-part-*.csv' --output trees.json --pretty --gzip
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod export;
pub mod report;

pub use config::Config;
pub use document::{Collector, FeatureCollection};
pub use report::{RunReport, RunStatus};
