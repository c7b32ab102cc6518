//! Résolution du schéma de colonnes
//!
//! Les exports de l'inventaire des arbres publics ne sont pas homogènes :
//! certains fichiers portent une ligne d'en-tête, d'autres non. Le schéma
//! est donc résolu par fichier : une première ligne contenant un des jetons
//! connus (`Arrond`, `Longitude`, ...) est traitée comme en-tête, et ses noms
//! de colonnes deviennent le schéma canonique réutilisé pour les fichiers
//! suivants sans en-tête. Sans en-tête ni schéma canonique, une liste
//! positionnelle fixe s'applique.

use std::collections::HashMap;

use csv::StringRecord;

/// Jetons de colonnes dont la présence en première ligne signale un en-tête
pub const HEADER_MARKERS: &[&str] = &[
    "Arrond",
    "Longitude",
    "Latitude",
    "Essence_latin",
    "Essence_en",
];

/// Liste positionnelle appliquée aux fichiers sans en-tête
pub const POSITIONAL_COLUMNS: &[&str] = &[
    "Arrond",
    "Rue",
    "Emplacement",
    "Essence_latin",
    "Essence_fr",
    "Essence_en",
    "DHP",
    "Date_Plantation",
    "Date_Releve",
    "Longitude",
    "Latitude",
];

/// Alias acceptés pour la colonne de rue
pub const STREET_COLUMNS: &[&str] = &["Rue", "Rue_Nom"];

/// Schéma résolu : noms de colonnes dans l'ordre + index insensible à la casse
#[derive(Debug, Clone)]
pub struct Schema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Construit le schéma depuis une ligne d'en-tête réelle
    pub fn from_header(header: &StringRecord) -> Self {
        let names: Vec<String> = header.iter().map(|f| f.trim().to_string()).collect();
        Self::from_names(names)
    }

    /// Schéma positionnel fixe pour les fichiers sans en-tête
    pub fn positional() -> Self {
        Self::from_names(POSITIONAL_COLUMNS.iter().map(|s| s.to_string()).collect())
    }

    fn from_names(names: Vec<String>) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_ascii_lowercase(), i))
            .collect();
        Self { names, index }
    }

    /// Noms de colonnes dans l'ordre du fichier
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Valeur d'une colonne par nom (insensible à la casse)
    pub fn get<'a>(&self, record: &'a StringRecord, column: &str) -> Option<&'a str> {
        self.index
            .get(&column.to_ascii_lowercase())
            .and_then(|&i| record.get(i))
    }

    /// Première colonne présente parmi des alias (ex: `Rue` / `Rue_Nom`)
    pub fn get_any<'a>(&self, record: &'a StringRecord, columns: &[&str]) -> Option<&'a str> {
        columns.iter().find_map(|c| self.get(record, c))
    }
}

/// Détecte si une première ligne est un en-tête (présence d'un jeton connu)
pub fn looks_like_header(record: &StringRecord) -> bool {
    record.iter().any(|field| {
        let field = field.trim();
        HEADER_MARKERS
            .iter()
            .any(|marker| field.eq_ignore_ascii_case(marker))
    })
}

/// Schéma canonique partagé entre les fichiers d'un même run
///
/// Le premier fichier avec en-tête fixe les noms de colonnes ; les fichiers
/// suivants sans en-tête les réutilisent au lieu de la liste positionnelle.
#[derive(Debug, Default)]
pub struct SchemaCache {
    canonical: Option<Schema>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre le schéma du premier fichier avec en-tête
    pub fn record_header(&mut self, schema: &Schema) {
        if self.canonical.is_none() {
            self.canonical = Some(schema.clone());
        }
    }

    /// Schéma pour un fichier sans en-tête
    pub fn headerless_schema(&self) -> Schema {
        self.canonical.clone().unwrap_or_else(Schema::positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_looks_like_header_with_markers() {
        assert!(looks_like_header(&record(&["Arrond", "Rue", "Longitude"])));
        assert!(looks_like_header(&record(&["longitude", "latitude"])));
        assert!(looks_like_header(&record(&[" Essence_latin "])));
    }

    #[test]
    fn test_looks_like_header_data_row() {
        assert!(!looks_like_header(&record(&[
            "VM",
            "Rachel",
            "-73.57",
            "45.52"
        ])));
        assert!(!looks_like_header(&record(&[])));
    }

    #[test]
    fn test_schema_from_header_lookup() {
        let schema = Schema::from_header(&record(&["Arrond", "Rue", "Longitude", "Latitude"]));
        let row = record(&["VM", "Rachel", "-73.57", "45.52"]);

        assert_eq!(schema.get(&row, "Arrond"), Some("VM"));
        assert_eq!(schema.get(&row, "longitude"), Some("-73.57"));
        assert_eq!(schema.get(&row, "DHP"), None);
    }

    #[test]
    fn test_schema_street_alias() {
        let schema = Schema::from_header(&record(&["Arrond", "Rue_Nom", "Longitude"]));
        let row = record(&["VM", "Ontario", "-73.56"]);

        assert_eq!(schema.get_any(&row, STREET_COLUMNS), Some("Ontario"));
    }

    #[test]
    fn test_positional_schema() {
        let schema = Schema::positional();
        assert_eq!(schema.names().len(), POSITIONAL_COLUMNS.len());

        let row = record(&[
            "RDP",
            "Gouin",
            "Parc",
            "Acer saccharinum",
            "Érable argenté",
            "Silver maple",
            "32",
            "1995-06-01T00:00:00",
            "2021-09-14",
            "-73.58",
            "45.55",
        ]);
        assert_eq!(schema.get(&row, "Essence_en"), Some("Silver maple"));
        assert_eq!(schema.get(&row, "Latitude"), Some("45.55"));
    }

    #[test]
    fn test_schema_cache_prefers_first_header() {
        let mut cache = SchemaCache::new();
        // Sans en-tête vu: liste positionnelle
        assert_eq!(
            cache.headerless_schema().names().len(),
            POSITIONAL_COLUMNS.len()
        );

        let schema = Schema::from_header(&record(&["Arrond", "Rue", "Longitude", "Latitude"]));
        cache.record_header(&schema);
        assert_eq!(cache.headerless_schema().names().len(), 4);

        // Un deuxième en-tête ne remplace pas le canonique
        let other = Schema::from_header(&record(&["Longitude", "Latitude"]));
        cache.record_header(&other);
        assert_eq!(cache.headerless_schema().names().len(), 4);
    }
}
