//! Parsing de la date de plantation
//!
//! La source encode la date en ISO-8601, souvent suffixée d'un minuit
//! explicite (`T00:00:00`). Toute valeur vide, malformée ou hors de la plage
//! plausible dégrade en « année inconnue » ; aucune erreur n'est levée.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Plage plausible pour une année de plantation (garde-fou contre les
/// données corrompues, pas une limite métier)
pub const YEAR_MIN: i32 = 1850;
pub const YEAR_MAX: i32 = 2025;

/// Extrait l'année de plantation d'un champ date, bornée à [1850, 2025]
pub fn plantation_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let date_part = trimmed.strip_suffix("T00:00:00").unwrap_or(trimmed);

    let year = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.year())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(date_part, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.year())
        })
        .ok()?;

    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Some(year)
    } else {
        None
    }
}
