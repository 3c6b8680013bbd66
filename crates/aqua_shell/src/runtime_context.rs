//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the session/interaction signals and the dispatch callback. Every
//! dispatch runs the pure command layer, diffs state before touching the
//! signals, and executes emitted effects (today: mirroring the session into
//! the injected [`SessionStore`]).

use std::rc::Rc;

use leptos::*;

use aqua_session::{
    apply_command, DesktopCommand, DesktopSession, InteractionState, SessionEffect,
};

use crate::persistence::{LocalStorageSessionStore, SessionStore, SessionStoreError};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop session state and dispatching
/// [`DesktopCommand`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop session (the window map).
    pub session: RwSignal<DesktopSession>,
    /// Reactive transient drag/resize state.
    pub interaction: RwSignal<InteractionState>,
    /// Injected durable session mirror.
    pub store: StoredValue<Rc<dyn SessionStore>>,
    /// Command dispatch callback.
    pub dispatch: Callback<DesktopCommand>,
}

impl DesktopRuntimeContext {
    /// Dispatches a command through the runtime callback.
    pub fn dispatch_command(&self, command: DesktopCommand) {
        self.dispatch.call(command);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendants and hydrates the
/// persisted session at boot.
pub fn DesktopProvider(
    /// Session mirror override; defaults to browser localStorage. Tests
    /// inject a [`crate::persistence::MemorySessionStore`] here.
    #[prop(optional)]
    session_store: Option<Rc<dyn SessionStore>>,
    children: Children,
) -> impl IntoView {
    let store_impl =
        session_store.unwrap_or_else(|| Rc::new(LocalStorageSessionStore) as Rc<dyn SessionStore>);
    provide_context(create_desktop_runtime(store_impl));

    children().into_view()
}

/// Builds the runtime: signals, dispatch callback, and boot hydration.
fn create_desktop_runtime(store_impl: Rc<dyn SessionStore>) -> DesktopRuntimeContext {
    let store = store_value(store_impl);
    let session = create_rw_signal(DesktopSession::default());
    let interaction = create_rw_signal(InteractionState::default());

    let dispatch = Callback::new(move |command: DesktopCommand| {
        let mut next_session = session.get_untracked();
        let mut next_interaction = interaction.get_untracked();
        let previous_session = next_session.clone();
        let previous_interaction = next_interaction;

        let effects = apply_command(&mut next_session, &mut next_interaction, command);

        if next_session != previous_session {
            session.set(next_session.clone());
        }
        if next_interaction != previous_interaction {
            interaction.set(next_interaction);
        }
        for effect in effects {
            match effect {
                SessionEffect::PersistSession => {
                    if let Err(err) = store.get_value().save(&next_session.snapshot()) {
                        logging::warn!("session persistence failed: {err}");
                    }
                }
            }
        }
    });

    let runtime = DesktopRuntimeContext {
        session,
        interaction,
        store,
        dispatch,
    };
    hydrate_boot_session(runtime);
    runtime
}

/// Loads the persisted session and replays it into the store. Unreadable
/// storage degrades to an empty desktop.
fn hydrate_boot_session(runtime: DesktopRuntimeContext) {
    match runtime.store.get_value().load() {
        Ok(Some(decoded)) => {
            let lossy = decoded.dropped_entries > 0;
            if lossy {
                logging::warn!(
                    "dropped {} unreadable window record(s) from the persisted session",
                    decoded.dropped_entries
                );
            }
            if !decoded.snapshot.windows.is_empty() {
                runtime.dispatch_command(DesktopCommand::Hydrate {
                    snapshot: decoded.snapshot,
                });
            }
            if lossy {
                // Rewrite the surviving records so the corrupt ones are not
                // re-decoded and re-reported on every boot.
                let snapshot = runtime.session.get_untracked().snapshot();
                if let Err(err) = runtime.store.get_value().save(&snapshot) {
                    logging::warn!("failed to rewrite sanitized session: {err}");
                }
            }
        }
        Ok(None) | Err(SessionStoreError::StorageUnavailable) => {}
        Err(err) => {
            logging::warn!("persisted session unreadable, starting empty: {err}");
        }
    }
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
