//! Window-manager core for the Aquadesk browser desktop shell.
//!
//! This crate is the pure half of the desktop: the window map and its
//! lifecycle/stacking rules ([`DesktopSession`]), the drag/resize gesture
//! machine ([`InteractionState`]), the static app registry, and the command
//! reducer that ties them together. It performs no I/O and touches no
//! browser APIs, so every rule is unit-testable on any target; the shell
//! crate owns rendering and persistence.

pub mod command;
pub mod gesture;
pub mod model;
pub mod registry;
pub mod store;

pub use command::{apply_command, DesktopCommand, SessionEffect};
pub use gesture::{
    DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession,
};
pub use model::{
    DecodedSnapshot, DesktopSession, OpenOverrides, SessionSnapshot, SnapshotError, WindowId,
    WindowRect, WindowState, DOCK_RESERVED_PX, MENU_BAR_HEIGHT_PX, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, SESSION_SCHEMA_VERSION,
};
pub use registry::{dock_apps, registry_entry, AppDescriptor, AppId};
