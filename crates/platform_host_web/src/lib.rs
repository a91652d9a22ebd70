//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles natively too, with inert fallbacks, so crates that depend on this one
//! still build and test off the web target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host service bundle factory for runtime wiring.
pub mod adapters;
pub mod environment;
pub mod navigation;
pub mod storage;

pub use adapters::build_host_services;
pub use environment::WebEnvironmentProbe;
pub use navigation::WebNavigationService;
pub use storage::local_storage::WebKeyValueStore;
