//! Copie gzip du document sérialisé
//!
//! Commodité de distribution pour un hébergement contraint en taille : le
//! `.gz` contient exactement les mêmes octets que le fichier principal.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

/// Chemin du duplicata compressé (`trees_combined.json` → `trees_combined.json.gz`)
pub fn gzip_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".gz");
    PathBuf::from(name)
}

/// Écrit la copie gzip à côté du fichier principal
pub fn write_gzip_copy(output: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let path = gzip_path(output);
    let file = std::fs::File::create(&path)
        .context(format!("Failed to create file: {}", path.display()))?;

    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(bytes)?;
    encoder
        .finish()
        .context("Failed to finish gzip stream")?;

    Ok(path)
}
