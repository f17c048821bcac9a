use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use uuid::Uuid;

use crate::errors::AppResult;

/// Periodically deletes generated images older than a fixed age.
pub struct ImageRetention {
    dir: PathBuf,
    max_age: Duration,
    interval: Duration,
}

impl ImageRetention {
    pub fn new(dir: PathBuf, max_age: Duration, interval: Duration) -> Self {
        Self {
            dir,
            max_age,
            interval,
        }
    }

    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        log::info!(
            "Evicting generated images in {} after {}s",
            self.dir.display(),
            self.max_age.as_secs()
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                match sweep_expired(&self.dir, self.max_age, SystemTime::now()).await {
                    Ok(0) => {}
                    Ok(removed) => log::info!("Removed {} expired generated images", removed),
                    Err(e) => log::error!("Image retention sweep failed: {}", e),
                }
            }
        })
    }
}

/// Only `<uuid>.png` files are ours; anything else in the directory is left alone.
fn is_generated_image(path: &Path) -> bool {
    let is_png = path.extension().map(|ext| ext == "png").unwrap_or(false);
    let has_uuid_stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| Uuid::parse_str(stem).is_ok())
        .unwrap_or(false);
    is_png && has_uuid_stem
}

/// Removes generated images last modified more than `max_age` before `now`.
pub async fn sweep_expired(dir: &Path, max_age: Duration, now: SystemTime) -> AppResult<usize> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut removed = 0;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_generated_image(&path) {
            continue;
        }

        let modified = entry.metadata().await?.modified()?;
        let age = now.duration_since(modified).unwrap_or_default();
        if age > max_age {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
            }
        }
    }

    Ok(removed)
}
