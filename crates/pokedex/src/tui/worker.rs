//! Background load and search worker threads

use pokedex_api::{
    ApiError, Catalog, CatalogLoader, LoadProgress, NameSearcher, PokeClient, Record, RequestId,
    Transport,
};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Catalog load sent to the load worker
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub request: RequestId,
    pub page_limit: usize,
}

/// Name lookup sent to the search worker
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub request: RequestId,
    pub name: String,
}

/// Everything the workers report back to the UI thread
#[derive(Debug)]
pub enum WorkerMessage {
    Progress {
        request: RequestId,
        progress: LoadProgress,
    },
    CatalogLoaded {
        request: RequestId,
        result: Result<Catalog, ApiError>,
    },
    SearchDone {
        request: RequestId,
        result: Result<Record, ApiError>,
    },
}

pub fn spawn_load_worker(
    client: Arc<PokeClient>,
    concurrency: usize,
    load_rx: Receiver<LoadRequest>,
    message_tx: Sender<WorkerMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let client: &PokeClient = &client;

        while let Ok(req) = load_rx.recv() {
            let result = CatalogLoader::new(client, concurrency).and_then(|loader| {
                loader.load_with_progress(req.page_limit, |progress| {
                    let _ = message_tx.send(WorkerMessage::Progress {
                        request: req.request,
                        progress,
                    });
                })
            });

            if message_tx
                .send(WorkerMessage::CatalogLoaded {
                    request: req.request,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    })
}

pub fn spawn_search_worker<T: Transport + 'static>(
    client: Arc<PokeClient<T>>,
    search_rx: Receiver<SearchRequest>,
    message_tx: Sender<WorkerMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let client: &PokeClient<T> = &client;
        let searcher = NameSearcher::new(client);

        while let Ok(req) = search_rx.recv() {
            let result = searcher.search(&req.name);
            if message_tx
                .send(WorkerMessage::SearchDone {
                    request: req.request,
                    result,
                })
                .is_err()
            {
                break;
            }
        }
    })
}
