use crate::data::Dataset;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Dataset file named by `APP_DATA_PATH`, if any.
pub fn resolve_data_path() -> Option<PathBuf> {
    env::var("APP_DATA_PATH")
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

/// Reads the dataset once; anything unreadable falls back to the built-in records.
pub async fn load_dataset(path: Option<&Path>) -> Dataset {
    let Some(path) = path else {
        info!("using built-in dataset");
        return Dataset::builtin();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Dataset>(&bytes) {
            Ok(data) => {
                info!(
                    path = %path.display(),
                    promises = data.promises.len(),
                    stats = data.stats.len(),
                    "loaded dataset"
                );
                data
            }
            Err(err) => {
                error!("failed to parse dataset file {}: {err}", path.display());
                Dataset::builtin()
            }
        },
        Err(err) => {
            error!("failed to read dataset file {}: {err}", path.display());
            Dataset::builtin()
        }
    }
}
