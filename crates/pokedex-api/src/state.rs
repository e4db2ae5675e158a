//! Search/detail view state machine
//!
//! All state changes go through [`ViewState::update`], which returns the side
//! effect (network work) the caller should start, if any. Results come back as
//! events tagged with the request id that produced them; results for anything
//! but the latest request are dropped.

use crate::error::{ApiError, ErrorKind};
use crate::filter;
use crate::model::{Catalog, Record};
use crate::search::normalize_name;

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight; initial state, or the last load failed
    Idle,
    /// Index and details being fetched
    Loading,
    Loaded,
    /// Name lookup in flight
    Searching,
    Found,
    NotFound,
}

#[derive(Debug)]
pub enum Event {
    /// Initial load at startup
    Start,
    /// Explicit reload; the current catalog stays usable until replaced
    Reload,
    CatalogLoaded {
        request: RequestId,
        catalog: Catalog,
    },
    CatalogFailed {
        request: RequestId,
        error: ApiError,
    },
    QueryChanged(String),
    /// User committed the current query as a name lookup
    SearchCommitted,
    SearchSucceeded {
        request: RequestId,
        record: Record,
    },
    SearchFailed {
        request: RequestId,
        error: ApiError,
    },
    /// User picked an entry from the catalog
    Select {
        id: u32,
    },
}

/// Work the caller must start in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog { request: RequestId },
    Search { request: RequestId, name: String },
}

#[derive(Debug, Clone)]
pub struct ViewState {
    phase: Phase,
    catalog: Catalog,
    query: String,
    focused: Option<Record>,
    last_error: Option<ErrorKind>,
    last_request: RequestId,
    pending_load: Option<RequestId>,
    pending_search: Option<RequestId>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            catalog: Catalog::default(),
            query: String::new(),
            focused: None,
            last_error: None,
            last_request: 0,
            pending_load: None,
            pending_search: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focused(&self) -> Option<&Record> {
        self.focused.as_ref()
    }

    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// Catalog entries matching the current query
    pub fn visible(&self) -> Vec<&Record> {
        filter::filter(&self.catalog, &self.query)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        filter::matching_indices(self.catalog.records(), &self.query)
    }

    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Start => {
                if self.phase != Phase::Idle {
                    return None;
                }
                Some(self.begin_load())
            }
            Event::Reload => match self.phase {
                Phase::Idle | Phase::Loaded | Phase::Found | Phase::NotFound => {
                    Some(self.begin_load())
                }
                Phase::Loading | Phase::Searching => None,
            },
            Event::CatalogLoaded { request, catalog } => {
                if !self.take_pending_load(request) {
                    return None;
                }
                self.catalog = catalog;
                self.focused = None;
                self.last_error = None;
                self.phase = Phase::Loaded;
                None
            }
            Event::CatalogFailed { request, error } => {
                if !self.take_pending_load(request) {
                    return None;
                }
                log::warn!("Catalog load failed: {}", error);
                self.last_error = Some(error.kind());
                self.phase = Phase::Idle;
                None
            }
            Event::QueryChanged(text) => {
                self.query = text;
                None
            }
            Event::SearchCommitted => {
                if !matches!(
                    self.phase,
                    Phase::Idle | Phase::Loaded | Phase::Found | Phase::NotFound
                ) {
                    return None;
                }
                let name = normalize_name(&self.query)?;
                let request = self.next_request();
                self.pending_search = Some(request);
                self.phase = Phase::Searching;
                Some(Effect::Search { request, name })
            }
            Event::SearchSucceeded { request, record } => {
                if !self.take_pending_search(request) {
                    return None;
                }
                self.focused = Some(record);
                self.last_error = None;
                self.phase = Phase::Found;
                None
            }
            Event::SearchFailed { request, error } => {
                if !self.take_pending_search(request) {
                    return None;
                }
                log::debug!("Search failed: {}", error);
                self.focused = None;
                self.last_error = Some(error.kind());
                self.phase = Phase::NotFound;
                None
            }
            Event::Select { id } => {
                // Idle still has a catalog after a failed reload
                if !matches!(
                    self.phase,
                    Phase::Idle | Phase::Loaded | Phase::Found | Phase::NotFound
                ) {
                    return None;
                }
                let record = self.catalog.by_id(id)?.clone();
                self.focused = Some(record);
                self.phase = Phase::Found;
                None
            }
        }
    }

    fn next_request(&mut self) -> RequestId {
        self.last_request += 1;
        self.last_request
    }

    fn begin_load(&mut self) -> Effect {
        let request = self.next_request();
        self.pending_load = Some(request);
        self.phase = Phase::Loading;
        Effect::LoadCatalog { request }
    }

    fn take_pending_load(&mut self, request: RequestId) -> bool {
        if self.phase != Phase::Loading || self.pending_load != Some(request) {
            log::debug!("Dropping stale catalog result {}", request);
            return false;
        }
        self.pending_load = None;
        true
    }

    fn take_pending_search(&mut self, request: RequestId) -> bool {
        if self.phase != Phase::Searching || self.pending_search != Some(request) {
            log::debug!("Dropping stale search result {}", request);
            return false;
        }
        self.pending_search = None;
        true
    }
}
