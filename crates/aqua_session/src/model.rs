use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::registry::AppId;

/// Schema version stamped into persisted session snapshots.
pub const SESSION_SCHEMA_VERSION: u32 = 1;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Height of the menu bar band reserved at the top of the viewport.
pub const MENU_BAR_HEIGHT_PX: i32 = 28;
/// Height of the dock band reserved at the bottom of the viewport.
pub const DOCK_RESERVED_PX: i32 = 80;

/// Stable identifier for one window instance: the owning app plus a
/// per-session serial, rendered as `"{app}-{serial}"` everywhere it is
/// displayed or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId {
    /// App that owns the window.
    pub app_id: AppId,
    /// Monotonic distinguishing token assigned at open time.
    pub serial: u64,
}

impl WindowId {
    pub fn new(app_id: AppId, serial: u64) -> Self {
        Self { app_id, serial }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.app_id.as_str(), self.serial)
    }
}

impl FromStr for WindowId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (app, serial) = raw
            .rsplit_once('-')
            .ok_or_else(|| format!("window id `{raw}` missing serial separator"))?;
        let app_id = AppId::from_str(app)?;
        let serial = serial
            .parse::<u64>()
            .map_err(|_| format!("window id `{raw}` has non-numeric serial"))?;
        Ok(Self { app_id, serial })
    }
}

impl Serialize for WindowId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WindowId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Window geometry in layout pixels, relative to the desktop viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

/// One open window instance.
///
/// Presence in [`DesktopSession::windows`] is the open flag: a closed window
/// is removed from the map outright, never retained in a closed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    /// Stacking order; higher paints on top. Not necessarily contiguous.
    pub z_index: u32,
    /// Minimized windows keep their geometry but leave the visible set.
    pub minimized: bool,
    /// Maximized rendering overrides the rect at paint time only; the
    /// stored rect is untouched so un-maximizing restores it exactly.
    pub maximized: bool,
}

/// Caller-supplied overrides for [`crate::store`] window creation; any field
/// left `None` falls back to the registry defaults and cascade position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenOverrides {
    pub title: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

/// Authoritative desktop session state: the window map plus the z-order
/// high-water mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSession {
    pub windows: BTreeMap<WindowId, WindowState>,
    /// Greatest z-index ever assigned. Monotonic, never decremented, even
    /// across closures, so a freshly focused window always outranks every
    /// window that existed before the focus.
    pub highest_z_index: u32,
    /// Next window serial to hand out.
    pub next_window_serial: u64,
}

impl Default for DesktopSession {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
            highest_z_index: 0,
            next_window_serial: 1,
        }
    }
}

impl DesktopSession {
    /// Builds the persistable snapshot. Transient gesture state lives in
    /// [`crate::gesture::InteractionState`] and is never part of this.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            schema_version: SESSION_SCHEMA_VERSION,
            windows: self.windows.clone(),
        }
    }

    /// Rebuilds a session from a persisted snapshot.
    ///
    /// Counters are recomputed from the window set rather than trusted from
    /// storage, and every rect is clamped back to the minimum size and a
    /// non-negative position.
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        let mut session = Self::default();
        for (id, mut window) in snapshot.windows {
            window.rect = WindowRect {
                x: window.rect.x.max(0),
                y: window.rect.y.max(0),
                ..window.rect
            }
            .clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
            session.windows.insert(id, window);
        }
        session.highest_z_index = session
            .windows
            .values()
            .map(|w| w.z_index)
            .max()
            .unwrap_or(0);
        session.next_window_serial = session
            .windows
            .keys()
            .map(|id| id.serial)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        session
    }
}

/// Persisted session layout: the window map keyed by window id under a
/// single storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub schema_version: u32,
    pub windows: BTreeMap<WindowId, WindowState>,
}

/// Snapshot decode result with the count of entries dropped by the lenient
/// pass, so the caller can log how much of the persisted session survived.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSnapshot {
    pub snapshot: SessionSnapshot,
    pub dropped_entries: usize,
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("session payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("session payload is not a JSON object")]
    NotAnObject,
}

impl SessionSnapshot {
    /// Decodes a persisted payload entry by entry.
    ///
    /// A record that fails to parse, names an app no longer in the
    /// registry, or disagrees with its map key drops only itself; the rest
    /// of the session survives.
    pub fn decode_lenient(raw: &str) -> Result<DecodedSnapshot, SnapshotError> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or(SnapshotError::NotAnObject)?;
        let schema_version = object
            .get("schema_version")
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .unwrap_or(SESSION_SCHEMA_VERSION);

        let mut windows = BTreeMap::new();
        let mut dropped_entries = 0usize;
        let entries = object
            .get("windows")
            .and_then(Value::as_object)
            .ok_or(SnapshotError::NotAnObject)?;
        for (key, entry) in entries {
            let parsed_id = key.parse::<WindowId>().ok();
            let state = serde_json::from_value::<WindowState>(entry.clone()).ok();
            match (parsed_id, state) {
                (Some(id), Some(state)) if state.id == id => {
                    windows.insert(id, state);
                }
                _ => dropped_entries += 1,
            }
        }

        Ok(DecodedSnapshot {
            snapshot: SessionSnapshot {
                schema_version,
                windows,
            },
            dropped_entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::registry::AppId;

    fn window(id: WindowId, z: u32, rect: WindowRect) -> WindowState {
        WindowState {
            id,
            app_id: id.app_id,
            title: id.app_id.as_str().to_string(),
            rect,
            z_index: z,
            minimized: false,
            maximized: false,
        }
    }

    #[test]
    fn window_id_round_trips_through_string_form() {
        let id = WindowId::new(AppId::Calculator, 7);
        assert_eq!(id.to_string(), "calculator-7");
        assert_eq!("calculator-7".parse::<WindowId>().unwrap(), id);
    }

    #[test]
    fn window_id_rejects_unknown_app_and_bad_serial() {
        assert!("minesweeper-3".parse::<WindowId>().is_err());
        assert!("notes-abc".parse::<WindowId>().is_err());
        assert!("notes".parse::<WindowId>().is_err());
    }

    #[test]
    fn from_snapshot_recomputes_counters_and_clamps_geometry() {
        let id = WindowId::new(AppId::Notes, 9);
        let mut windows = BTreeMap::new();
        windows.insert(
            id,
            window(
                id,
                14,
                WindowRect {
                    x: -40,
                    y: -5,
                    w: 10,
                    h: 0,
                },
            ),
        );
        let session = DesktopSession::from_snapshot(SessionSnapshot {
            schema_version: SESSION_SCHEMA_VERSION,
            windows,
        });

        assert_eq!(session.highest_z_index, 14);
        assert_eq!(session.next_window_serial, 10);
        let restored = &session.windows[&id];
        assert_eq!(restored.rect.x, 0);
        assert_eq!(restored.rect.y, 0);
        assert_eq!(restored.rect.w, MIN_WINDOW_WIDTH);
        assert_eq!(restored.rect.h, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn lenient_decode_drops_corrupt_entries_and_keeps_the_rest() {
        let good = WindowId::new(AppId::Mail, 2);
        let session = {
            let mut session = DesktopSession::default();
            session.windows.insert(
                good,
                window(
                    good,
                    3,
                    WindowRect {
                        x: 10,
                        y: 20,
                        w: 900,
                        h: 650,
                    },
                ),
            );
            session
        };
        let mut value = serde_json::to_value(session.snapshot()).unwrap();
        let entries = value
            .get_mut("windows")
            .and_then(Value::as_object_mut)
            .unwrap();
        entries.insert("minesweeper-1".to_string(), serde_json::json!({}));
        entries.insert("notes-4".to_string(), serde_json::json!("garbage"));
        let raw = value.to_string();

        let decoded = SessionSnapshot::decode_lenient(&raw).unwrap();
        assert_eq!(decoded.dropped_entries, 2);
        assert_eq!(decoded.snapshot.windows.len(), 1);
        assert!(decoded.snapshot.windows.contains_key(&good));
    }

    #[test]
    fn lenient_decode_rejects_non_object_payloads() {
        assert!(SessionSnapshot::decode_lenient("[1,2,3]").is_err());
        assert!(SessionSnapshot::decode_lenient("not json").is_err());
    }

    #[test]
    fn snapshot_serializes_windows_keyed_by_id() {
        let id = WindowId::new(AppId::Finder, 1);
        let mut session = DesktopSession::default();
        session.windows.insert(
            id,
            window(
                id,
                1,
                WindowRect {
                    x: 100,
                    y: 150,
                    w: 800,
                    h: 600,
                },
            ),
        );

        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert!(value["windows"]["finder-1"].is_object());
        assert_eq!(value["windows"]["finder-1"]["app_id"], "finder");
    }
}
