//! Window Entity Store operations on [`DesktopSession`].
//!
//! Every mutation referencing a window id that is no longer in the map is a
//! silent no-op, not an error: a close racing an in-flight gesture callback
//! is expected traffic, so the loser of the race simply does nothing. Each
//! operation returns whether state actually changed so callers can decide
//! whether to re-render or persist.

use crate::model::{
    DesktopSession, OpenOverrides, WindowId, WindowRect, WindowState, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::registry::{self, AppId};

/// First cascade position for a freshly created window.
const CASCADE_BASE_X: i32 = 100;
const CASCADE_BASE_Y: i32 = 150;
/// Each successive window opens this much further right and down so
/// cascading windows never fully overlap.
const CASCADE_STEP_PX: i32 = 30;

impl DesktopSession {
    /// Launches `app_id`, enforcing the per-app singleton-or-focus rule.
    ///
    /// If an open, non-minimized window for the app exists it is focused
    /// and its id returned. A minimized window is restored and focused
    /// instead. Only when neither exists is a new window created, from
    /// registry defaults merged with `overrides`, cascaded from the last
    /// open position, and stacked on top.
    pub fn open_window(&mut self, app_id: AppId, overrides: OpenOverrides) -> WindowId {
        if let Some(id) = self.find_app_window(app_id, false) {
            self.focus_window(id);
            return id;
        }
        if let Some(id) = self.find_app_window(app_id, true) {
            if let Some(window) = self.windows.get_mut(&id) {
                window.minimized = false;
                window.maximized = false;
            }
            self.focus_window(id);
            return id;
        }

        let entry = registry::registry_entry(app_id);
        let cascade = self.windows.len() as i32 * CASCADE_STEP_PX;
        let rect = WindowRect {
            x: overrides.x.unwrap_or(CASCADE_BASE_X + cascade).max(0),
            y: overrides.y.unwrap_or(CASCADE_BASE_Y + cascade).max(0),
            w: overrides.w.unwrap_or(entry.default_width),
            h: overrides.h.unwrap_or(entry.default_height),
        }
        .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);

        let id = WindowId::new(app_id, self.next_window_serial);
        self.next_window_serial = self.next_window_serial.saturating_add(1);
        self.highest_z_index += 1;
        self.windows.insert(
            id,
            WindowState {
                id,
                app_id,
                title: overrides
                    .title
                    .unwrap_or_else(|| entry.display_name.to_string()),
                rect,
                z_index: self.highest_z_index,
                minimized: false,
                maximized: false,
            },
        );
        id
    }

    /// Removes the window from the map. Returns false if it was absent.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        self.windows.remove(&id).is_some()
    }

    /// Clears the entire window map in one operation.
    pub fn close_all(&mut self) -> bool {
        if self.windows.is_empty() {
            return false;
        }
        self.windows.clear();
        true
    }

    /// Minimizes the window, leaving geometry and z-index untouched.
    pub fn minimize_window(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) if !window.minimized => {
                window.minimized = true;
                true
            }
            _ => false,
        }
    }

    /// Toggles maximized state. Entering maximized also clears minimized.
    ///
    /// The stored rect is never touched: maximized rendering is a paint-time
    /// override, so toggling back restores the exact prior geometry.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.maximized = !window.maximized;
                window.minimized = false;
                true
            }
            None => false,
        }
    }

    /// Clears both minimized and maximized unconditionally.
    pub fn restore_window(&mut self, id: WindowId) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) if window.minimized || window.maximized => {
                window.minimized = false;
                window.maximized = false;
                true
            }
            _ => false,
        }
    }

    /// Raises the window above every window that currently exists by
    /// assigning the next z-index. This is the only path that changes
    /// stacking order outside of window creation.
    pub fn focus_window(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            return false;
        }
        self.highest_z_index += 1;
        let z = self.highest_z_index;
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z;
        }
        true
    }

    /// Moves the window's top-left corner, clamped to non-negative
    /// coordinates. Windows may still hang off the right/bottom edges.
    pub fn move_window(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.rect.x = x.max(0);
                window.rect.y = y.max(0);
                true
            }
            None => false,
        }
    }

    /// Resizes the window, floored at the minimum size regardless of the
    /// requested values.
    pub fn resize_window(&mut self, id: WindowId, w: i32, h: i32) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                window.rect.w = w.max(MIN_WINDOW_WIDTH);
                window.rect.h = h.max(MIN_WINDOW_HEIGHT);
                true
            }
            None => false,
        }
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(&id)
    }

    /// Open, non-minimized windows in ascending z-order, so rendering in
    /// sequence paints the topmost window last.
    pub fn visible_windows(&self) -> Vec<&WindowState> {
        let mut visible: Vec<&WindowState> =
            self.windows.values().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| (w.z_index, w.id));
        visible
    }

    /// True iff some window for the app is open and not minimized.
    pub fn is_app_open(&self, app_id: AppId) -> bool {
        self.windows
            .values()
            .any(|w| w.app_id == app_id && !w.minimized)
    }

    /// The topmost visible window, the one keyboard shortcuts target.
    pub fn focused_window(&self) -> Option<&WindowState> {
        self.visible_windows().into_iter().last()
    }

    /// The window that should receive focus when `from` is defocused: the
    /// next-most-recent window in the visible set, if any.
    pub fn next_focus_candidate(&self, from: WindowId) -> Option<WindowId> {
        self.visible_windows()
            .into_iter()
            .filter(|w| w.id != from)
            .last()
            .map(|w| w.id)
    }

    fn find_app_window(&self, app_id: AppId, minimized: bool) -> Option<WindowId> {
        self.windows
            .values()
            .find(|w| w.app_id == app_id && w.minimized == minimized)
            .map(|w| w.id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::DesktopSession;

    fn open(session: &mut DesktopSession, app_id: AppId) -> WindowId {
        session.open_window(app_id, OpenOverrides::default())
    }

    #[test]
    fn repeated_open_reuses_the_existing_window() {
        let mut session = DesktopSession::default();
        let first = open(&mut session, AppId::Calculator);
        let second = open(&mut session, AppId::Calculator);

        assert_eq!(first, second);
        assert_eq!(session.windows.len(), 1);
    }

    #[test]
    fn open_restores_and_focuses_a_minimized_window() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Notes);
        session.minimize_window(id);

        let reopened = open(&mut session, AppId::Notes);
        assert_eq!(reopened, id);
        assert!(!session.window(id).unwrap().minimized);
        assert_eq!(session.windows.len(), 1);
    }

    #[test]
    fn open_clamps_negative_override_positions_to_the_origin() {
        let mut session = DesktopSession::default();
        let id = session.open_window(
            AppId::Calculator,
            OpenOverrides {
                x: Some(-50),
                y: Some(-10),
                w: Some(300),
                ..OpenOverrides::default()
            },
        );

        let rect = session.window(id).unwrap().rect;
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn open_merges_overrides_with_registry_defaults() {
        let mut session = DesktopSession::default();
        let id = session.open_window(
            AppId::Mail,
            OpenOverrides {
                title: Some("Inbox".to_string()),
                x: Some(10),
                h: Some(720),
                ..OpenOverrides::default()
            },
        );

        let window = session.window(id).unwrap();
        assert_eq!(window.title, "Inbox");
        assert_eq!(window.rect.x, 10);
        assert_eq!(window.rect.y, CASCADE_BASE_Y);
        assert_eq!(window.rect.w, 900);
        assert_eq!(window.rect.h, 720);
    }

    #[test]
    fn successive_windows_cascade_by_thirty_pixels() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Safari);
        let c = open(&mut session, AppId::Mail);

        let (a, b, c) = (
            session.window(a).unwrap().rect,
            session.window(b).unwrap().rect,
            session.window(c).unwrap().rect,
        );
        assert_eq!((a.x, a.y), (CASCADE_BASE_X, CASCADE_BASE_Y));
        assert_eq!((b.x - a.x, b.y - a.y), (CASCADE_STEP_PX, CASCADE_STEP_PX));
        assert_eq!((c.x - b.x, c.y - b.y), (CASCADE_STEP_PX, CASCADE_STEP_PX));
    }

    #[test]
    fn focus_outranks_every_preexisting_window() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Safari);
        let c = open(&mut session, AppId::Mail);

        session.focus_window(a);
        let focused_z = session.window(a).unwrap().z_index;
        assert!(focused_z > session.window(b).unwrap().z_index);
        assert!(focused_z > session.window(c).unwrap().z_index);
    }

    #[test]
    fn focus_history_defines_visible_order() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Safari);
        let c = open(&mut session, AppId::Mail);

        session.focus_window(a);
        let order: Vec<WindowId> = session.visible_windows().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);
        assert_eq!(session.focused_window().unwrap().id, a);
    }

    #[test]
    fn highest_z_never_decreases_across_closures() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Safari);
        let high_water = session.highest_z_index;

        session.close_window(b);
        assert_eq!(session.highest_z_index, high_water);

        session.focus_window(a);
        assert!(session.window(a).unwrap().z_index > high_water);
    }

    #[test]
    fn resize_floors_at_minimum_size() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Notes);

        session.resize_window(id, -50, 10);
        let rect = session.window(id).unwrap().rect;
        assert_eq!((rect.w, rect.h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn move_clamps_negative_coordinates_to_zero() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Notes);

        session.move_window(id, -15, 40);
        let rect = session.window(id).unwrap().rect;
        assert_eq!((rect.x, rect.y), (0, 40));
    }

    #[test]
    fn maximize_toggle_round_trips_geometry_exactly() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Photos);
        session.move_window(id, 64, 128);
        let before = session.window(id).unwrap().rect;

        session.toggle_maximize(id);
        assert!(session.window(id).unwrap().maximized);
        assert_eq!(session.window(id).unwrap().rect, before);

        session.toggle_maximize(id);
        assert!(!session.window(id).unwrap().maximized);
        assert_eq!(session.window(id).unwrap().rect, before);
    }

    #[test]
    fn maximize_clears_minimized() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Music);
        session.minimize_window(id);

        session.toggle_maximize(id);
        let window = session.window(id).unwrap();
        assert!(window.maximized);
        assert!(!window.minimized);
    }

    #[test]
    fn minimized_windows_leave_the_visible_set_but_stay_in_the_store() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Terminal);
        let rect = session.window(id).unwrap().rect;

        session.minimize_window(id);
        assert!(session.visible_windows().is_empty());
        assert!(!session.is_app_open(AppId::Terminal));
        assert_eq!(session.window(id).unwrap().rect, rect);

        session.restore_window(id);
        assert!(session.is_app_open(AppId::Terminal));
    }

    #[test]
    fn close_removes_the_window_and_later_mutations_are_noops() {
        let mut session = DesktopSession::default();
        let id = open(&mut session, AppId::Weather);

        assert!(session.close_window(id));
        assert!(session.visible_windows().is_empty());
        assert!(!session.focus_window(id));
        assert!(!session.minimize_window(id));
        assert!(!session.move_window(id, 5, 5));
        assert!(!session.resize_window(id, 400, 400));
        assert!(!session.close_window(id));
    }

    #[test]
    fn close_all_empties_the_map() {
        let mut session = DesktopSession::default();
        open(&mut session, AppId::Finder);
        open(&mut session, AppId::Mail);

        assert!(session.close_all());
        assert!(session.windows.is_empty());
        assert!(!session.close_all());
    }

    #[test]
    fn next_focus_candidate_is_the_next_most_recent_visible_window() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Safari);
        let c = open(&mut session, AppId::Mail);

        assert_eq!(session.next_focus_candidate(c), Some(b));
        session.minimize_window(b);
        assert_eq!(session.next_focus_candidate(c), Some(a));
        session.close_window(a);
        assert_eq!(session.next_focus_candidate(c), None);
    }

    #[test]
    fn snapshot_round_trip_preserves_window_state() {
        let mut session = DesktopSession::default();
        let a = open(&mut session, AppId::Finder);
        let b = open(&mut session, AppId::Calculator);
        session.minimize_window(a);
        session.toggle_maximize(b);

        let restored = DesktopSession::from_snapshot(session.snapshot());
        assert_eq!(restored.windows, session.windows);
        assert_eq!(restored.highest_z_index, session.highest_z_index);
        assert_eq!(restored.next_window_serial, session.next_window_serial);
    }
}
