//! Leptos shell for the Aquadesk browser desktop.
//!
//! Composes the menu bar, dock, and window layer on top of the
//! [`aqua_session`] window-manager core, translates pointer and keyboard
//! input into session commands, and mirrors every committed mutation into
//! local storage through the [`persistence::SessionStore`] adapter.

mod apps;
pub mod components;
pub mod persistence;
mod runtime_context;

pub use components::DesktopShell;
pub use persistence::{
    LocalStorageSessionStore, MemorySessionStore, SessionStore, SessionStoreError,
    SESSION_STORAGE_KEY,
};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
