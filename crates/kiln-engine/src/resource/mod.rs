//! Startup resource bundles.
//!
//! A [`ResourceBundle`] names the files an application needs before `setup`.
//! [`load_bundle`] fetches and decodes them through a [`Fetch`] collaborator
//! into a keyed [`Resources`] store that the application owns afterwards.

mod error;
mod fetch;
mod kind;
mod loader;
mod store;

pub use error::{LoadFailure, ResourceLoadError};
pub use fetch::{normalize_src, Fetch, FileFetcher};
pub use kind::{ResourceBundle, ResourceKind, ResourceRequest};
pub use loader::{load_bundle, LoadProgress};
pub use store::{Resource, Resources, VideoSource};
