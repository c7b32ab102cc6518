//! Validation des coordonnées géographiques
//!
//! Filtre de vraisemblance : une coordonnée nulle signale une position
//! absente, et une valeur absolue inférieure à 10 degrés trahit une
//! coordonnée projetée (mètres) glissée dans un champ longitude/latitude.

use geo::Point;

/// Valeur absolue minimale pour une coordonnée plausible de Montréal
const MIN_ABS_DEGREES: f64 = 10.0;

/// Parse et valide un couple (longitude, latitude)
///
/// Retourne `None` si l'un des champs est non numérique, exactement zéro,
/// ou sous le seuil de vraisemblance.
pub fn parse_position(longitude: &str, latitude: &str) -> Option<Point<f64>> {
    let lon = parse_coordinate(longitude)?;
    let lat = parse_coordinate(latitude)?;
    Some(Point::new(lon, lat))
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value == 0.0 || value.abs() < MIN_ABS_DEGREES {
        return None;
    }
    Some(value)
}
