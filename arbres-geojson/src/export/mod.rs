//! Sérialisation du document de sortie

pub mod geojson;
pub mod gzip;
