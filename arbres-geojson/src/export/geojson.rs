//! Écriture du document GeoJSON (compact ou indenté)

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::document::FeatureCollection;

/// Sérialise le document en une seule valeur JSON
///
/// Compact par défaut (aucun espace inter-jetons, pour minimiser la taille
/// du fichier), indenté avec `pretty`.
pub fn serialize(document: &FeatureCollection, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(document)
    } else {
        serde_json::to_vec(document)
    }
    .context("Failed to serialize FeatureCollection")?;

    Ok(bytes)
}

/// Écrit les octets sérialisés dans le fichier de sortie
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = std::fs::File::create(path)
        .context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}
