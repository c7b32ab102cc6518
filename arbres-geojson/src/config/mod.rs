//! Configuration du profil de sortie
//!
//! Les variantes historiques du convertisseur divergeaient sur les noms des
//! clés de propriétés (noms complets vs abrégés). Le profil rend ce choix
//! explicite : preset embarqué `standard` ou `compact`, ou fichier JSON
//! fourni par l'utilisateur.

use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};

/// Profil de sortie
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Noms des clés de propriétés dans les features émises
    pub keys: PropertyKeys,
}

/// Noms des clés du sac de propriétés
#[derive(Debug, Deserialize, Serialize)]
pub struct PropertyKeys {
    pub borough: String,
    pub street: String,
    pub location: String,
    pub species_latin: String,
    pub species_french: String,
    pub species_english: String,
    pub diameter: String,
    pub plantation_year: String,
}

impl Config {
    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse config JSON")
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self> {
        match preset {
            "standard" => Self::load_embedded(include_str!("presets/standard.json")),
            "compact" => Self::load_embedded(include_str!("presets/compact.json")),
            _ => anyhow::bail!("Unknown preset: {}. Use: standard, compact", preset),
        }
    }

    /// Résout une spec CLI : nom de preset ou chemin de fichier
    pub fn resolve(spec: &str) -> Result<Self> {
        match spec {
            "standard" | "compact" => Self::from_preset(spec),
            _ => Self::load(Path::new(spec)),
        }
    }

    fn load_embedded(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse embedded config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_preset() {
        let config = Config::from_preset("standard").unwrap();
        assert_eq!(config.keys.borough, "arrondissement");
        assert_eq!(config.keys.species_english, "tree_type_english");
        assert_eq!(config.keys.plantation_year, "plantation_year");
    }

    #[test]
    fn test_compact_preset() {
        let config = Config::from_preset("compact").unwrap();
        assert_eq!(config.keys.borough, "arr");
        assert_eq!(config.keys.plantation_year, "an");
    }

    #[test]
    fn test_unknown_preset() {
        assert!(Config::from_preset("verbose").is_err());
    }

    #[test]
    fn test_resolve_missing_file() {
        assert!(Config::resolve("/nonexistent/profile.json").is_err());
    }
}
