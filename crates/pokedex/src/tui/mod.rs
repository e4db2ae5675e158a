//! Interactive Pokédex TUI
//!
//! Architecture:
//! - Main thread: UI rendering, input events, and the `ViewState` machine
//! - Load worker: fetches the catalog (index + bounded detail fan-out)
//! - Search worker: name lookups, coalescing queued requests
//! - Communication via mpsc channels (requests -> workers, messages <- workers)
//!
//! Layout:
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Search: [pika______]                                         │
//! ├─────────────────────────────────────┬────────────────────────┤
//! │ Pokédex [3/1000]                    │ PIKACHU                │
//! │ pikachu   raichu    pichu           │ ID: 25                 │
//! │                                     │ Height: 4 dm           │
//! │                                     │ Types: electric        │
//! ├─────────────────────────────────────┴────────────────────────┤
//! │ 1000 Pokémon │ Enter: search │ Tab: show │ Esc: quit          │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod input;
mod ui;
mod worker;

pub use app::run;
