//! Fixture loading: reads and validates the two catalog files at startup.
//!
//! Both files are read concurrently and must both succeed; a missing or
//! malformed fixture stops the server before it binds, so the browser never
//! sees a half-populated map.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use std::path::{Path, PathBuf};

use atlas::catalog::{Catalog, CatalogError};

pub const PLANETS_FILE: &str = "planets.json";
pub const MARKERS_FILE: &str = "markers.json";

/// Errors produced while loading fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// A fixture file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file was read but does not decode.
    #[error(transparent)]
    Decode(#[from] CatalogError),
}

async fn read_fixture(path: PathBuf) -> Result<String, FixtureError> {
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| FixtureError::Read { path, source })
}

/// Load `planets.json` and `markers.json` from `data_dir`.
///
/// # Errors
///
/// Fails if either file is unreadable or does not decode.
pub async fn load_catalog(data_dir: &Path) -> Result<Catalog, FixtureError> {
    let (planets, markers) = tokio::try_join!(
        read_fixture(data_dir.join(PLANETS_FILE)),
        read_fixture(data_dir.join(MARKERS_FILE)),
    )?;
    let catalog = Catalog::from_json(&planets, &markers)?;

    let hidden = catalog.planets.len() + catalog.markers.len() - catalog.rendered_count();
    tracing::info!(
        planets = catalog.planets.len(),
        markers = catalog.markers.len(),
        hidden,
        dir = %data_dir.display(),
        "fixtures loaded"
    );
    Ok(catalog)
}
