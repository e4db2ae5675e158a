//! # pokedex-api
//!
//! Client for the PokéAPI REST service plus the state behind the Pokédex UI.
//!
//! - [`CatalogLoader`] fetches the resource index and every record it lists,
//!   through a bounded worker pool, joined in index order.
//! - [`NameSearcher`] looks a single record up by name.
//! - [`filter`] narrows an in-memory catalog by name.
//! - [`ViewState`] is the search/detail state machine driven by [`Event`]s.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod search;
pub mod state;
pub mod transport;

pub use client::PokeClient;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind};
pub use filter::{filter, matching_indices};
pub use loader::{CatalogLoader, LoadProgress};
pub use model::{Catalog, Record, ResourceRef, Sprites};
pub use search::NameSearcher;
pub use state::{Effect, Event, Phase, RequestId, ViewState};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
