//! Command layer: the single entry point the shell dispatches through.
//!
//! [`apply_command`] applies one user intent to the session plus the
//! transient gesture state and reports the side effects the shell must run.
//! Persistence is decoupled this way on purpose: the store never touches
//! storage, it just announces that a committed mutation happened.

use crate::gesture::{
    self, InteractionState, PointerPosition, ResizeEdge,
};
use crate::model::{DesktopSession, OpenOverrides, SessionSnapshot, WindowId};
use crate::registry::AppId;

/// User intents accepted by [`apply_command`].
#[derive(Debug, Clone, PartialEq)]
pub enum DesktopCommand {
    /// Launch an app: focus/restore its existing window or create one.
    Launch {
        app_id: AppId,
        overrides: OpenOverrides,
    },
    Close { window_id: WindowId },
    CloseAll,
    Minimize { window_id: WindowId },
    ToggleMaximize { window_id: WindowId },
    Restore { window_id: WindowId },
    Focus { window_id: WindowId },
    /// Escape: hand focus to the next-most-recent visible window.
    FocusNext { from: WindowId },
    BeginMove {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    UpdateMove { pointer: PointerPosition },
    EndMove,
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    UpdateResize { pointer: PointerPosition },
    EndResize,
    /// Replace the session with a persisted snapshot at boot.
    Hydrate { snapshot: SessionSnapshot },
}

/// Side effects for the shell to execute after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Mirror the session to durable storage.
    PersistSession,
}

/// Applies a command. Commands referencing missing windows are silent
/// no-ops and emit no effects.
///
/// In-flight gesture updates emit nothing; their net result is persisted
/// once by the gesture-ending command, which keeps transient drag state out
/// of storage entirely.
pub fn apply_command(
    session: &mut DesktopSession,
    interaction: &mut InteractionState,
    command: DesktopCommand,
) -> Vec<SessionEffect> {
    let changed = match command {
        DesktopCommand::Launch { app_id, overrides } => {
            session.open_window(app_id, overrides);
            true
        }
        DesktopCommand::Close { window_id } => session.close_window(window_id),
        DesktopCommand::CloseAll => session.close_all(),
        DesktopCommand::Minimize { window_id } => session.minimize_window(window_id),
        DesktopCommand::ToggleMaximize { window_id } => session.toggle_maximize(window_id),
        DesktopCommand::Restore { window_id } => session.restore_window(window_id),
        DesktopCommand::Focus { window_id } => session.focus_window(window_id),
        DesktopCommand::FocusNext { from } => match session.next_focus_candidate(from) {
            Some(next) => session.focus_window(next),
            None => false,
        },
        DesktopCommand::BeginMove { window_id, pointer } => {
            gesture::begin_move(session, interaction, window_id, pointer);
            false
        }
        DesktopCommand::UpdateMove { pointer } => {
            gesture::update_move(session, interaction, pointer);
            false
        }
        DesktopCommand::EndMove => gesture::end_move(interaction),
        DesktopCommand::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            gesture::begin_resize(session, interaction, window_id, edge, pointer);
            false
        }
        DesktopCommand::UpdateResize { pointer } => {
            gesture::update_resize(session, interaction, pointer);
            false
        }
        DesktopCommand::EndResize => gesture::end_resize(interaction),
        DesktopCommand::Hydrate { snapshot } => {
            *session = DesktopSession::from_snapshot(snapshot);
            *interaction = InteractionState::default();
            false
        }
    };

    if changed {
        vec![SessionEffect::PersistSession]
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn launch(session: &mut DesktopSession, interaction: &mut InteractionState, app: AppId) -> WindowId {
        apply_command(
            session,
            interaction,
            DesktopCommand::Launch {
                app_id: app,
                overrides: OpenOverrides::default(),
            },
        );
        session.focused_window().expect("launched window").id
    }

    #[test]
    fn committed_mutations_request_persistence() {
        let mut session = DesktopSession::default();
        let mut interaction = InteractionState::default();

        let effects = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::Launch {
                app_id: AppId::Notes,
                overrides: OpenOverrides::default(),
            },
        );
        assert_eq!(effects, vec![SessionEffect::PersistSession]);

        let id = session.focused_window().unwrap().id;
        let effects = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::Minimize { window_id: id },
        );
        assert_eq!(effects, vec![SessionEffect::PersistSession]);
    }

    #[test]
    fn missing_window_commands_are_silent_and_effect_free() {
        let mut session = DesktopSession::default();
        let mut interaction = InteractionState::default();
        let ghost = WindowId::new(AppId::Mail, 99);

        for command in [
            DesktopCommand::Close { window_id: ghost },
            DesktopCommand::Minimize { window_id: ghost },
            DesktopCommand::ToggleMaximize { window_id: ghost },
            DesktopCommand::Restore { window_id: ghost },
            DesktopCommand::Focus { window_id: ghost },
            DesktopCommand::FocusNext { from: ghost },
        ] {
            assert_eq!(apply_command(&mut session, &mut interaction, command), vec![]);
        }
        assert_eq!(session, DesktopSession::default());
    }

    #[test]
    fn gesture_updates_defer_persistence_to_the_end_command() {
        let mut session = DesktopSession::default();
        let mut interaction = InteractionState::default();
        let id = launch(&mut session, &mut interaction, AppId::Finder);

        let begin = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert!(begin.is_empty());

        let update = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::UpdateMove {
                pointer: PointerPosition { x: 60, y: 90 },
            },
        );
        assert!(update.is_empty());

        let end = apply_command(&mut session, &mut interaction, DesktopCommand::EndMove);
        assert_eq!(end, vec![SessionEffect::PersistSession]);

        // Release without an active gesture stays effect-free.
        let stray = apply_command(&mut session, &mut interaction, DesktopCommand::EndMove);
        assert!(stray.is_empty());
    }

    #[test]
    fn focus_next_moves_focus_to_the_window_below() {
        let mut session = DesktopSession::default();
        let mut interaction = InteractionState::default();
        let a = launch(&mut session, &mut interaction, AppId::Finder);
        let b = launch(&mut session, &mut interaction, AppId::Safari);

        let effects = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::FocusNext { from: b },
        );
        assert_eq!(effects, vec![SessionEffect::PersistSession]);
        assert_eq!(session.focused_window().unwrap().id, a);
    }

    #[test]
    fn hydrate_replaces_session_and_clears_gestures() {
        let mut source = DesktopSession::default();
        let mut scratch = InteractionState::default();
        let id = launch(&mut source, &mut scratch, AppId::Calculator);
        let snapshot = source.snapshot();

        let mut session = DesktopSession::default();
        let mut interaction = InteractionState::default();
        launch(&mut session, &mut interaction, AppId::Weather);
        let live = session.focused_window().unwrap().id;
        apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::BeginMove {
                window_id: live,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        let effects = apply_command(
            &mut session,
            &mut interaction,
            DesktopCommand::Hydrate { snapshot },
        );
        assert!(effects.is_empty());
        assert_eq!(interaction, InteractionState::default());
        assert!(session.window(id).is_some());
        assert_eq!(session.windows.len(), 1);
    }
}
