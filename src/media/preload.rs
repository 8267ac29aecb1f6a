// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image preloader.
//!
//! [`Preloader::preload`] starts fetching as soon as the returned future is
//! polled and always resolves: broken sources settle as
//! [`LoadOutcome::Failed`] so the viewer can carry on without dimensions.
//! Successful loads are kept in a shared [`PrefetchCache`], which is what
//! makes the look-ahead preload pay off on forward navigation.

use crate::error::LoadError;
use crate::media::{decode_bytes, ImageSource, LoadOutcome, LoadedImage, PrefetchCache};
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Cheaply clonable image loader sharing one cache and one HTTP client.
#[derive(Clone)]
pub struct Preloader {
    cache: Arc<Mutex<PrefetchCache>>,
    client: reqwest::Client,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new(PrefetchCache::default())
    }
}

impl std::fmt::Debug for Preloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preloader")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Preloader {
    #[must_use]
    pub fn new(cache: PrefetchCache) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            client: reqwest::Client::new(),
        }
    }

    /// Whether `src` has already been decoded and cached.
    #[must_use]
    pub fn is_cached(&self, src: &str) -> bool {
        self.cache
            .lock()
            .map(|cache| cache.contains(src))
            .unwrap_or(false)
    }

    /// Loads `src`, serving it from the cache when possible.
    pub fn preload(&self, src: String) -> impl Future<Output = LoadOutcome> + Send + 'static {
        let cache = Arc::clone(&self.cache);
        let client = self.client.clone();

        async move {
            let cached = cache.lock().ok().and_then(|mut cache| cache.get(&src));
            if let Some(image) = cached {
                log::debug!("preload cache hit for {src}");
                return LoadOutcome::Loaded(image);
            }

            let result = match ImageSource::parse(&src) {
                ImageSource::Local(path) => load_local(path).await,
                ImageSource::Remote(url) => load_remote(&client, &url).await,
            };

            match result {
                Ok(image) => {
                    if let Ok(mut cache) = cache.lock() {
                        cache.insert(src, image.clone());
                    }
                    LoadOutcome::Loaded(image)
                }
                Err(err) => {
                    log::warn!("failed to load {src}: {err}");
                    LoadOutcome::Failed(err)
                }
            }
        }
    }
}

async fn load_local(path: PathBuf) -> Result<LoadedImage, LoadError> {
    tokio::task::spawn_blocking(move || {
        let bytes = std::fs::read(&path)?;
        decode_bytes(&bytes)
    })
    .await
    .unwrap_or_else(|e| Err(LoadError::Io(format!("Load task failed: {e}"))))
}

async fn load_remote(client: &reqwest::Client, url: &str) -> Result<LoadedImage, LoadError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;

    tokio::task::spawn_blocking(move || decode_bytes(&bytes))
        .await
        .unwrap_or_else(|e| Err(LoadError::Decode(format!("Decode task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Dimensions;
    use tempfile::tempdir;

    fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> String {
        let path = dir.join(name);
        image_rs::RgbaImage::new(width, height)
            .save(&path)
            .expect("write png");
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn preload_reports_natural_dimensions() {
        let dir = tempdir().expect("temp dir");
        let src = write_png(dir.path(), "wide.png", 12, 5);
        let preloader = Preloader::default();

        let outcome = preloader.preload(src).await;
        assert_eq!(outcome.dimensions(), Some(Dimensions::new(12, 5)));
    }

    #[tokio::test]
    async fn missing_file_resolves_as_failure() {
        let dir = tempdir().expect("temp dir");
        let src = dir.path().join("absent.png").to_string_lossy().into_owned();

        let outcome = Preloader::default().preload(src).await;
        assert!(matches!(outcome, LoadOutcome::Failed(LoadError::Io(_))));
    }

    #[tokio::test]
    async fn corrupt_file_resolves_as_decode_failure() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG not really").expect("write file");

        let outcome = Preloader::default()
            .preload(path.to_string_lossy().into_owned())
            .await;
        assert!(matches!(outcome, LoadOutcome::Failed(LoadError::Decode(_))));
    }

    #[tokio::test]
    async fn successful_load_is_cached() {
        let dir = tempdir().expect("temp dir");
        let src = write_png(dir.path(), "a.png", 4, 4);
        let preloader = Preloader::default();

        assert!(!preloader.is_cached(&src));
        let _ = preloader.preload(src.clone()).await;
        assert!(preloader.is_cached(&src));

        // Deleting the file proves the second load comes from the cache
        std::fs::remove_file(&src).expect("remove file");
        let outcome = preloader.preload(src).await;
        assert_eq!(outcome.dimensions(), Some(Dimensions::new(4, 4)));
    }

    #[tokio::test]
    async fn tight_budget_still_serves_the_image() {
        let dir = tempdir().expect("temp dir");
        let src = write_png(dir.path(), "a.png", 4, 4);
        let preloader = Preloader::new(PrefetchCache::new(crate::media::Budget::new(16, 2)));

        let outcome = preloader.preload(src.clone()).await;
        assert_eq!(outcome.dimensions(), Some(Dimensions::new(4, 4)));
        assert!(!preloader.is_cached(&src));
    }
}
