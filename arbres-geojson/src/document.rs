//! Modèle du document GeoJSON et accumulation des features
//!
//! Le document est construit une seule fois en mémoire pendant l'unique
//! passe sur les fichiers, puis sérialisé une seule fois. Les métadonnées
//! sont un pur repli sur les compteurs accumulés, calculé à la fin.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{json, Map, Value};

use arbres_csv::TreeRecord;

use crate::config::Config;

/// Valeur sentinelle pour une année de plantation inconnue
pub const UNKNOWN_YEAR: i32 = 0;

/// Le document de sortie : FeatureCollection + métadonnées agrégées
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
    pub metadata: Metadata,
}

/// Une feature ponctuelle
#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointGeometry,
    pub properties: Map<String, Value>,
}

/// Géométrie Point GeoJSON, coordonnées [longitude, latitude]
#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

/// Métadonnées agrégées du run
#[derive(Debug, Serialize)]
pub struct Metadata {
    pub total_trees: usize,
    pub trees_with_dates: usize,
    pub year_range: YearRange,
    pub tree_types: Vec<String>,
    pub generated_at: String,
}

/// Plage d'années résolues, `null` si aucune ligne n'a fourni d'année
#[derive(Debug, Default, Serialize)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

/// Accumulateur de la passe unique : features + compteurs + essences
#[derive(Debug)]
pub struct Collector {
    features: Vec<Feature>,
    species: BTreeSet<String>,
    year_range: YearRange,
    trees_with_dates: usize,
    keys: crate::config::PropertyKeys,
}

impl Collector {
    pub fn new(config: Config) -> Self {
        Self {
            features: Vec::new(),
            species: BTreeSet::new(),
            year_range: YearRange::default(),
            trees_with_dates: 0,
            keys: config.keys,
        }
    }

    /// Ajoute un arbre validé et met à jour les agrégats
    pub fn push(&mut self, tree: &TreeRecord) {
        if let Some(year) = tree.plantation_year {
            self.trees_with_dates += 1;
            self.year_range.min = Some(self.year_range.min.map_or(year, |m| m.min(year)));
            self.year_range.max = Some(self.year_range.max.map_or(year, |m| m.max(year)));
        }

        self.species.insert(tree.essence_en.clone());

        let keys = &self.keys;
        let mut properties = Map::new();
        properties.insert(keys.borough.clone(), json!(tree.arrondissement));
        properties.insert(keys.street.clone(), json!(tree.rue));
        properties.insert(keys.location.clone(), json!(tree.emplacement));
        properties.insert(keys.species_latin.clone(), json!(tree.essence_latin));
        properties.insert(keys.species_french.clone(), json!(tree.essence_fr));
        properties.insert(keys.species_english.clone(), json!(tree.essence_en));
        properties.insert(keys.diameter.clone(), json!(tree.dhp));
        properties.insert(
            keys.plantation_year.clone(),
            json!(tree.plantation_year.unwrap_or(UNKNOWN_YEAR)),
        );

        self.features.push(Feature {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates: [tree.position.x(), tree.position.y()],
            },
            properties,
        });
    }

    /// Nombre de features accumulées
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Nombre de lignes avec une année résolue
    pub fn trees_with_dates(&self) -> usize {
        self.trees_with_dates
    }

    /// Plage d'années courante (min, max)
    pub fn year_range(&self) -> (Option<i32>, Option<i32>) {
        (self.year_range.min, self.year_range.max)
    }

    /// Scelle le document : métadonnées dérivées des agrégats
    pub fn finish(self) -> FeatureCollection {
        let total_trees = self.features.len();
        FeatureCollection {
            kind: "FeatureCollection",
            features: self.features,
            metadata: Metadata {
                total_trees,
                trees_with_dates: self.trees_with_dates,
                year_range: self.year_range,
                tree_types: self.species.into_iter().collect(),
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }
}
