//! Static app registry: the read-only catalog mapping an application id to
//! its display metadata and default window geometry. Initialized once at
//! compile time; the store reads defaults from here when creating a brand
//! new window and the shell reads it to build the dock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a registered application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    Finder,
    Safari,
    Mail,
    Notes,
    Photos,
    Music,
    Calendar,
    Calculator,
    Terminal,
    Weather,
}

impl AppId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Safari => "safari",
            Self::Mail => "mail",
            Self::Notes => "notes",
            Self::Photos => "photos",
            Self::Music => "music",
            Self::Calendar => "calendar",
            Self::Calculator => "calculator",
            Self::Terminal => "terminal",
            Self::Weather => "weather",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        APP_REGISTRY
            .iter()
            .map(|entry| entry.app_id)
            .find(|app_id| app_id.as_str() == raw)
            .ok_or_else(|| format!("unknown app id `{raw}`"))
    }
}

/// One registry row: everything the shell and store need to launch an app,
/// minus the renderable unit itself (the shell maps `app_id` to a view).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub display_name: &'static str,
    /// Dock/titlebar glyph.
    pub icon: &'static str,
    pub default_width: i32,
    pub default_height: i32,
}

const APP_REGISTRY: [AppDescriptor; 10] = [
    AppDescriptor {
        app_id: AppId::Finder,
        display_name: "Finder",
        icon: "🗂️",
        default_width: 800,
        default_height: 600,
    },
    AppDescriptor {
        app_id: AppId::Safari,
        display_name: "Safari",
        icon: "🧭",
        default_width: 1000,
        default_height: 700,
    },
    AppDescriptor {
        app_id: AppId::Mail,
        display_name: "Mail",
        icon: "✉️",
        default_width: 900,
        default_height: 650,
    },
    AppDescriptor {
        app_id: AppId::Notes,
        display_name: "Notes",
        icon: "📝",
        default_width: 600,
        default_height: 500,
    },
    AppDescriptor {
        app_id: AppId::Photos,
        display_name: "Photos",
        icon: "🖼️",
        default_width: 1000,
        default_height: 700,
    },
    AppDescriptor {
        app_id: AppId::Music,
        display_name: "Music",
        icon: "🎵",
        default_width: 900,
        default_height: 700,
    },
    AppDescriptor {
        app_id: AppId::Calendar,
        display_name: "Calendar",
        icon: "📅",
        default_width: 800,
        default_height: 600,
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        display_name: "Calculator",
        icon: "🧮",
        default_width: 300,
        default_height: 400,
    },
    AppDescriptor {
        app_id: AppId::Terminal,
        display_name: "Terminal",
        icon: "⌨️",
        default_width: 700,
        default_height: 500,
    },
    AppDescriptor {
        app_id: AppId::Weather,
        display_name: "Weather",
        icon: "⛅",
        default_width: 800,
        default_height: 600,
    },
];

/// Returns the registry row for `app_id`.
pub fn registry_entry(app_id: AppId) -> &'static AppDescriptor {
    APP_REGISTRY
        .iter()
        .find(|entry| entry.app_id == app_id)
        .expect("every AppId has a registry row")
}

/// Apps shown in the dock, in display order.
pub fn dock_apps() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_app_id_round_trips_through_its_string_form() {
        for entry in dock_apps() {
            assert_eq!(AppId::from_str(entry.app_id.as_str()), Ok(entry.app_id));
        }
    }

    #[test]
    fn registry_entry_exposes_launch_defaults() {
        let calculator = registry_entry(AppId::Calculator);
        assert_eq!(calculator.display_name, "Calculator");
        assert_eq!(
            (calculator.default_width, calculator.default_height),
            (300, 400)
        );
    }

    #[test]
    fn app_id_serializes_as_lowercase_string() {
        let encoded = serde_json::to_string(&AppId::Safari).unwrap();
        assert_eq!(encoded, "\"safari\"");
        let decoded: AppId = serde_json::from_str("\"weather\"").unwrap();
        assert_eq!(decoded, AppId::Weather);
    }
}
