//! Core library surface for the Shibadoption TUI.
//!
//! The catalog, router and mail request types are plain library code so they
//! can be exercised without a terminal; `ui` wires them to ratatui.
pub mod catalog;
pub mod logging;
pub mod mail;
pub mod models;
pub mod router;
pub mod ui;

pub use catalog::{Catalog, CatalogError};
pub use mail::{MailComposer, MailRequest, SystemMailComposer};
pub use models::{CatalogEntry, ImageRef};
pub use router::{Route, Router};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
