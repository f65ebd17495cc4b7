//! Beacon core - the render-then-filter pipeline behind the dashboard
//!
//! A [`Catalog`] of services is rendered once into a [`Container`] as
//! cards; the search filter then only toggles card visibility and the
//! "no results" placeholder. Nothing here depends on a browser or a
//! server, so the same pipeline backs server rendering, the WASM app and
//! the tests.

pub mod card;
pub mod catalog;
pub mod container;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod grid;
pub mod input;


pub use card::{render, RenderedCard};
pub use catalog::{Catalog, CatalogIssue, ServiceRecord};
pub use container::{Container, MemoryContainer};
pub use dashboard::Dashboard;
pub use error::{CatalogError, Result};
pub use filter::{apply_filter, normalize, FilterOutcome, NO_RESULTS_TEXT};
pub use grid::build_grid;
pub use input::{EventSource, Handled, InputController, InputEvent, Key, SearchHost};
