//! Typed host-domain contracts and shared models used across the runtime and browser adapters.
//!
//! This crate is the API boundary for platform services. It exposes the key-value store
//! contract and everything persisted through it (notepad buffer, files, installed web apps,
//! session flag), plus the credential check, environment probes, and navigation. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod environment;
pub mod files;
pub mod host;
pub mod navigation;
pub mod notes;
pub mod session;
pub mod storage;
pub mod web_apps;

pub use environment::{
    format_cores, format_mb, format_memory_gb, EnvironmentProbe, HeapUsage, PerformanceSnapshot,
    StaticEnvironment, UNKNOWN,
};
pub use files::{
    create_file, delete_file, find_file, insert_file, load_files, remove_file_at, FileError,
    FileRecord,
};
pub use host::HostServices;
pub use notes::{load_note, save_note};
pub use navigation::{
    NavigationRequest, NavigationService, NoopNavigationService, RecordingNavigationService,
};
pub use session::{
    check_credentials, clear_session, load_session, save_session, verify_credentials,
    CredentialError, SessionState, ACCOUNT_USERNAME,
};
pub use storage::kv::{
    load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore, StoreFuture,
};
pub use storage::{FILES_KEY, INSTALLED_WEB_APPS_KEY, LOGGED_IN_KEY, NOTEPAD_KEY, USERNAME_KEY};
pub use web_apps::{
    embed_policy, favicon_url, install_web_app, load_web_apps, uninstall_web_app,
    validate_install, EmbedPolicy, InstallError, InstalledWebApp, NON_EMBEDDABLE_HOSTS,
};
