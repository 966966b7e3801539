//! Saving and loading portable simulation documents.

use std::path::{Path, PathBuf};

use futures_util::future::try_join_all;

use crate::{model::simulation::SavedSimulation, prelude::*};

/// An imported document that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("`{path}` is not a valid simulation document: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[instrument(skip_all, fields(path = %path.display()))]
pub async fn save(path: &Path, simulation: &SavedSimulation) -> Result {
    let json = serde_json::to_vec_pretty(simulation)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    info!("saved");
    Ok(())
}

pub async fn load(path: &Path) -> Result<SavedSimulation> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    parse(path, &bytes)
}

/// Loads many documents at once: all reads are dispatched in parallel and
/// joined before anything is returned, so the caller either observes the
/// complete set or the first failure, never a partially loaded list.
#[instrument(skip_all, fields(n_paths = paths.len()))]
pub async fn load_many(paths: &[PathBuf]) -> Result<Vec<SavedSimulation>> {
    let simulations = try_join_all(paths.iter().map(|path| load(path))).await?;
    info!(n_loaded = simulations.len(), "loaded");
    Ok(simulations)
}

fn parse(path: &Path, bytes: &[u8]) -> Result<SavedSimulation> {
    serde_json::from_slice(bytes).map_err(|source| {
        DocumentError::Malformed { path: path.to_path_buf(), source }.into()
    })
}

#[cfg(test)]
mod tests {
    use crate::model::{bill::BillData, offer::OfferData};

    use super::*;

    #[test]
    fn test_parse_rejects_missing_fields() {
        let error = parse(Path::new("broken.json"), br#"{"version": "1.0"}"#)
            .expect_err("the document is incomplete");
        assert!(matches!(
            error.downcast_ref::<DocumentError>(),
            Some(DocumentError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn test_save_load_round_trip() -> Result {
        let simulation = SavedSimulation::new(BillData::default(), OfferData::default());
        let path = std::env::temp_dir().join("tarifa-store-round-trip.json");

        save(&path, &simulation).await?;
        let loaded = load(&path).await?;
        tokio::fs::remove_file(&path).await?;

        assert_eq!(loaded, simulation);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_many_converges_on_the_complete_set() -> Result {
        let directory = std::env::temp_dir();
        let paths: Vec<PathBuf> = (0..3)
            .map(|index| directory.join(format!("tarifa-store-batch-{index}.json")))
            .collect();
        for path in &paths {
            save(path, &SavedSimulation::new(BillData::default(), OfferData::default())).await?;
        }

        let loaded = load_many(&paths).await?;
        for path in &paths {
            tokio::fs::remove_file(path).await?;
        }

        assert_eq!(loaded.len(), paths.len());
        Ok(())
    }
}
