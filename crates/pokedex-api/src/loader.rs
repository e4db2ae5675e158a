//! Catalog loading: index request, bounded detail fan-out, ordered join

use crate::client::PokeClient;
use crate::error::ApiError;
use crate::model::{Catalog, Record};
use crate::transport::Transport;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Detail fetches completed so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub completed: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn pct(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        Some((self.completed * 100 / self.total) as u8)
    }
}

pub struct CatalogLoader<'c, T: Transport> {
    client: &'c PokeClient<T>,
    pool: ThreadPool,
}

impl<'c, T: Transport> CatalogLoader<'c, T> {
    /// At most `concurrency` detail requests are in flight at once.
    pub fn new(client: &'c PokeClient<T>, concurrency: usize) -> Result<Self, ApiError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(concurrency.max(1))
            .thread_name(|idx| format!("pokedex-fetch-{idx}"))
            .build()?;
        Ok(Self { client, pool })
    }

    pub fn load(&self, page_limit: usize) -> Result<Catalog, ApiError> {
        self.load_with_progress(page_limit, |_| {})
    }

    /// Load the index, then every record it names.
    ///
    /// The catalog keeps index order regardless of response order. Any failed
    /// fetch fails the whole load.
    pub fn load_with_progress<F>(
        &self,
        page_limit: usize,
        on_progress: F,
    ) -> Result<Catalog, ApiError>
    where
        F: Fn(LoadProgress) + Sync,
    {
        let start = Instant::now();
        let refs = self.client.fetch_index(page_limit).inspect_err(|e| {
            log::warn!("Failed to fetch resource index: {}", e);
        })?;
        let total = refs.len();
        log::info!("Index returned {} entries", total);
        on_progress(LoadProgress {
            completed: 0,
            total,
        });

        let completed = AtomicUsize::new(0);
        let records: Vec<Record> = self
            .pool
            .install(|| {
                refs.par_iter()
                    .map(|r| {
                        let record = self.client.fetch_record(&r.endpoint)?;
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        on_progress(LoadProgress {
                            completed: done,
                            total,
                        });
                        Ok(record)
                    })
                    .collect::<Result<Vec<_>, ApiError>>()
            })
            .inspect_err(|e| log::warn!("Catalog load aborted: {}", e))?;

        let catalog = Catalog::new(records)?;
        log::info!("Loaded {} records in {:?}", catalog.len(), start.elapsed());
        Ok(catalog)
    }
}
