//! Types de données pour le crate arbres-csv

use geo::Point;

/// Un arbre validé, prêt à devenir une feature GeoJSON
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRecord {
    /// Position en degrés WGS84 (longitude, latitude)
    pub position: Point<f64>,

    /// Code d'arrondissement
    pub arrondissement: String,

    /// Nom de rue (colonnes source `Rue` ou `Rue_Nom`)
    pub rue: String,

    /// Description de l'emplacement
    pub emplacement: String,

    /// Essence, nom latin
    pub essence_latin: String,

    /// Essence, nom français
    pub essence_fr: String,

    /// Essence, nom anglais
    pub essence_en: String,

    /// Diamètre du tronc (DHP), tel quel depuis la source
    pub dhp: String,

    /// Année de plantation dans [1850, 2025], `None` si inconnue
    pub plantation_year: Option<i32>,
}

/// Résultat du parsing d'un fichier CSV
#[derive(Debug, Default)]
pub struct FileResult {
    /// Arbres valides, dans l'ordre du fichier
    pub records: Vec<TreeRecord>,

    /// Nombre total de lignes de données lues
    pub rows_read: usize,

    /// Lignes valides (une feature émise par ligne)
    pub rows_valid: usize,

    /// Lignes rejetées (coordonnées absentes ou invraisemblables)
    pub rows_skipped: usize,
}

/// Issue de la transformation d'une ligne
#[derive(Debug)]
pub enum RowOutcome {
    /// Ligne valide, un arbre produit
    Valid(Box<TreeRecord>),

    /// Ligne rejetée silencieusement (compteur de skip uniquement)
    Skipped,
}
