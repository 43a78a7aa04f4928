//! In-memory caches for breed and image data
//!
//! The breed list lives in a single slot that is replaced wholesale by a
//! background refresh once it goes stale; image metadata is cached per
//! reference image id in an unbounded map. Both use a fixed 24-hour
//! freshness window. Fetch failures never surface to callers: the read path
//! hands back stale data, an empty list, or a placeholder image, and the
//! next access retries.

use crate::dogapi::{Breed, BreedImage, DogApi};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Freshness window shared by both caches
const CACHE_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Single-slot store for the breed list
#[derive(Default)]
struct BreedSlot {
    breeds: Option<Vec<Breed>>,
    fetched_at: Option<Instant>,
}

impl BreedSlot {
    /// True when the slot has never been filled or its data aged out
    fn is_stale(&self, ttl: Duration) -> bool {
        match self.fetched_at {
            Some(at) => at.elapsed() >= ttl,
            None => true,
        }
    }

    /// Replace the snapshot wholesale
    fn store(&mut self, breeds: Vec<Breed>) {
        self.breeds = Some(breeds);
        self.fetched_at = Some(Instant::now());
    }
}

struct ImageEntry {
    data: BreedImage,
    fetched_at: Instant,
}

impl ImageEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() < ttl
    }
}

struct CacheInner {
    api: DogApi,
    ttl: Duration,
    breeds: Mutex<BreedSlot>,
    images: Mutex<HashMap<String, ImageEntry>>,
    /// Gate upholding the at-most-one-background-refresh invariant
    refreshing: AtomicBool,
}

/// Shared cache over the dog API.
///
/// Cloning is cheap and all clones share state; construct one at startup and
/// hand clones to the web layer. Locks are never held across awaits.
#[derive(Clone)]
pub struct BreedCache {
    inner: Arc<CacheInner>,
}

impl BreedCache {
    pub fn new(api: DogApi) -> Self {
        Self::with_ttl(api, CACHE_TTL)
    }

    fn with_ttl(api: DogApi, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                api,
                ttl,
                breeds: Mutex::new(BreedSlot::default()),
                images: Mutex::new(HashMap::new()),
                refreshing: AtomicBool::new(false),
            }),
        }
    }

    /// Current breed list.
    ///
    /// Stale or missing data kicks off a background refresh without waiting
    /// for it. A true cold start (never fetched) additionally performs one
    /// synchronous fetch so the first caller does not see an empty catalog.
    /// Never fails: fetch errors leave the cache as-is and the caller gets
    /// whatever is cached, or an empty list.
    pub async fn breeds(&self) -> Vec<Breed> {
        let (has_data, stale) = {
            let slot = self.inner.breeds.lock().unwrap();
            (slot.breeds.is_some(), slot.is_stale(self.inner.ttl))
        };

        if stale {
            self.spawn_refresh();
        }

        if !has_data {
            // Cold start: one blocking fetch so the first page is not empty.
            // May race the refresh spawned above; both write the same
            // wholesale snapshot, so last write wins.
            match self.inner.api.fetch_breeds().await {
                Ok(breeds) => {
                    log::info!("Cold-start fetch returned {} breeds", breeds.len());
                    self.inner.breeds.lock().unwrap().store(breeds);
                }
                Err(e) => log::warn!("Cold-start breed fetch failed: {}", e),
            }
        }

        let slot = self.inner.breeds.lock().unwrap();
        slot.breeds.clone().unwrap_or_default()
    }

    /// Image metadata for a reference image id.
    ///
    /// `None` is a no-op. A fresh cache entry is returned without network
    /// access; anything else is fetched and stored. On fetch failure the
    /// caller gets the placeholder record and nothing is stored, so the next
    /// access retries instead of being stuck with the placeholder.
    pub async fn image(&self, image_id: Option<&str>) -> Option<BreedImage> {
        let image_id = image_id?;

        {
            let images = self.inner.images.lock().unwrap();
            if let Some(entry) = images.get(image_id) {
                if entry.is_fresh(self.inner.ttl) {
                    log::debug!("Image cache hit for {}", image_id);
                    return Some(entry.data.clone());
                }
            }
        }

        match self.inner.api.fetch_image(image_id).await {
            Ok(data) => {
                log::debug!("Cached image metadata for {}", image_id);
                self.inner.images.lock().unwrap().insert(
                    image_id.to_string(),
                    ImageEntry {
                        data: data.clone(),
                        fetched_at: Instant::now(),
                    },
                );
                Some(data)
            }
            Err(e) => {
                log::warn!("Image fetch failed for {}: {}", image_id, e);
                Some(BreedImage::placeholder())
            }
        }
    }

    /// True while a background refresh is in flight
    pub fn refresh_in_flight(&self) -> bool {
        self.inner.refreshing.load(Ordering::Acquire)
    }

    /// Spawn the background refresh unless one is already running.
    ///
    /// The gate is claimed with a compare-and-swap so concurrent callers can
    /// never start two refreshes, and released by the spawned task whether
    /// the refresh succeeds or fails.
    fn spawn_refresh(&self) {
        if self
            .inner
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let cache = self.clone();
        tokio::spawn(async move {
            cache.refresh().await;
            cache.inner.refreshing.store(false, Ordering::Release);
        });
    }

    /// Fetch the breed list, replace the slot wholesale, and warm the image
    /// cache for every breed whose reference image is not cached yet. On
    /// failure the slot keeps its previous (possibly stale) contents.
    async fn refresh(&self) {
        match self.inner.api.fetch_breeds().await {
            Ok(breeds) => {
                log::info!("Refreshed breed list: {} breeds", breeds.len());

                let missing: Vec<String> = {
                    let images = self.inner.images.lock().unwrap();
                    breeds
                        .iter()
                        .filter_map(|b| b.reference_image_id.as_deref())
                        .filter(|id| !images.contains_key(*id))
                        .map(str::to_string)
                        .collect()
                };

                self.inner.breeds.lock().unwrap().store(breeds);

                // Prefetch through the normal read path so failures fall
                // back to the placeholder and get retried on the next access.
                for id in missing {
                    let _ = self.image(Some(&id)).await;
                }
            }
            Err(e) => log::warn!("Breed list refresh failed, keeping cached data: {}", e),
        }
    }
}

#[cfg(test)]
impl BreedCache {
    /// Cache whose entries expire immediately, for exercising staleness paths
    pub(crate) fn with_zero_ttl(api: DogApi) -> Self {
        Self::with_ttl(api, Duration::ZERO)
    }

    /// Whether an image entry exists for the id, fresh or not
    pub(crate) fn image_cached(&self, image_id: &str) -> bool {
        self.inner.images.lock().unwrap().contains_key(image_id)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
