//! Event upsert engine for gistsched.
//!
//! This crate has no network or terminal code:
//! - `locator` finds (or creates) the events array inside a JSON document
//! - `matcher` and `upsert` merge one record per date into that array
//! - `form` turns raw field values into a record and back
//! - `session` and `editor` drive the load / select / clear / save lifecycle
//!   against any [`RemoteStore`] and [`Surface`]

pub mod editor;
pub mod error;
pub mod event;
pub mod form;
pub mod locator;
pub mod matcher;
pub mod session;
pub mod store;
pub mod surface;
pub mod upsert;

pub use editor::Editor;
pub use error::{CoreError, CoreResult};
pub use event::{EventRecord, PracticeLocation};
pub use form::FormFields;
pub use locator::EventsPath;
pub use session::Session;
pub use store::{RemoteStore, Target};
pub use surface::Surface;
pub use upsert::UpsertOutcome;
