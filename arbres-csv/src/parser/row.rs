//! Transformation d'une ligne CSV en arbre validé
//!
//! Une ligne produit soit un `TreeRecord`, soit un skip silencieux comptés
//! par l'appelant. Les champs optionnels dégradent vers des valeurs par
//! défaut, jamais vers une clé absente.

use csv::StringRecord;

use crate::parser::{coords, date};
use crate::schema::{Schema, STREET_COLUMNS};
use crate::types::{RowOutcome, TreeRecord};

/// Valeurs de repli pour les noms d'essence absents
const UNKNOWN_LATIN: &str = "Unknown";
const UNKNOWN_FR: &str = "Inconnu";
const UNKNOWN_EN: &str = "Unknown";

/// Transforme une ligne parsée en `RowOutcome`
pub fn transform(schema: &Schema, record: &StringRecord) -> RowOutcome {
    let longitude = schema.get(record, "Longitude").unwrap_or("");
    let latitude = schema.get(record, "Latitude").unwrap_or("");

    let Some(position) = coords::parse_position(longitude, latitude) else {
        return RowOutcome::Skipped;
    };

    let plantation_year =
        date::plantation_year(schema.get(record, "Date_Plantation").unwrap_or(""));

    let tree = TreeRecord {
        position,
        arrondissement: schema.get(record, "Arrond").unwrap_or("").trim().to_string(),
        rue: trimmed(schema.get_any(record, STREET_COLUMNS)),
        emplacement: trimmed(schema.get(record, "Emplacement")),
        essence_latin: species_or(schema.get(record, "Essence_latin"), UNKNOWN_LATIN),
        essence_fr: species_or(schema.get(record, "Essence_fr"), UNKNOWN_FR),
        essence_en: species_or(schema.get(record, "Essence_en"), UNKNOWN_EN),
        dhp: trimmed(schema.get(record, "DHP")),
        plantation_year,
    };

    RowOutcome::Valid(Box::new(tree))
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or("").trim().to_string()
}

fn species_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn schema() -> Schema {
        Schema::from_header(&StringRecord::from(vec![
            "Arrond",
            "Rue",
            "Emplacement",
            "Essence_latin",
            "Essence_fr",
            "Essence_en",
            "DHP",
            "Date_Plantation",
            "Longitude",
            "Latitude",
        ]))
    }

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_transform_valid_row() {
        let record = row(&[
            "VM",
            "  Rachel  ",
            "Parc Lafontaine",
            "Acer saccharum",
            "Érable à sucre",
            "Maple",
            "45",
            "2010-05-01T00:00:00",
            "-73.6",
            "45.5",
        ]);

        let RowOutcome::Valid(tree) = transform(&schema(), &record) else {
            panic!("expected valid row");
        };

        assert_eq!(tree.position.x(), -73.6);
        assert_eq!(tree.position.y(), 45.5);
        assert_eq!(tree.rue, "Rachel");
        assert_eq!(tree.essence_en, "Maple");
        assert_eq!(tree.plantation_year, Some(2010));
    }

    #[test]
    fn test_transform_zero_coordinates_skipped() {
        let record = row(&["VM", "", "", "", "", "", "", "", "0", "0"]);
        assert!(matches!(transform(&schema(), &record), RowOutcome::Skipped));
    }

    #[test]
    fn test_transform_projected_coordinates_skipped() {
        // Valeur absolue < 10 degrés: coordonnée projetée suspecte
        let record = row(&["VM", "", "", "", "", "", "", "", "2.35", "45.5"]);
        assert!(matches!(transform(&schema(), &record), RowOutcome::Skipped));
    }

    #[test]
    fn test_transform_species_fallbacks() {
        let record = row(&["VM", "", "", "", "", "", "", "", "-73.6", "45.5"]);

        let RowOutcome::Valid(tree) = transform(&schema(), &record) else {
            panic!("expected valid row");
        };

        assert_eq!(tree.essence_latin, "Unknown");
        assert_eq!(tree.essence_fr, "Inconnu");
        assert_eq!(tree.essence_en, "Unknown");
    }

    #[test]
    fn test_transform_out_of_range_year_degrades() {
        let record = row(&[
            "VM",
            "",
            "",
            "",
            "",
            "",
            "",
            "1700-01-01T00:00:00",
            "-73.6",
            "45.5",
        ]);

        let RowOutcome::Valid(tree) = transform(&schema(), &record) else {
            panic!("expected valid row");
        };
        assert_eq!(tree.plantation_year, None);
    }

    #[test]
    fn test_transform_short_row_defaults() {
        // Ligne plus courte que le schéma: champs manquants → défauts
        let schema = Schema::from_header(&StringRecord::from(vec![
            "Longitude",
            "Latitude",
            "Rue",
        ]));
        let record = row(&["-73.6", "45.5"]);

        let RowOutcome::Valid(tree) = transform(&schema, &record) else {
            panic!("expected valid row");
        };
        assert_eq!(tree.rue, "");
        assert_eq!(tree.arrondissement, "");
    }
}
