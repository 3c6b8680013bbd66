//! Built-in application surfaces mounted inside window bodies.

mod calculator;
mod notes;
mod placeholders;

use aqua_session::AppId;
use leptos::View;

/// Mounts the content surface for one application.
pub(crate) fn mount_app(app_id: AppId) -> View {
    match app_id {
        AppId::Finder => placeholders::mount_finder_app(),
        AppId::Safari => placeholders::mount_safari_app(),
        AppId::Mail => placeholders::mount_mail_app(),
        AppId::Notes => notes::mount_notes_app(),
        AppId::Photos => placeholders::mount_photos_app(),
        AppId::Music => placeholders::mount_music_app(),
        AppId::Calendar => placeholders::mount_calendar_app(),
        AppId::Calculator => calculator::mount_calculator_app(),
        AppId::Terminal => placeholders::mount_terminal_app(),
        AppId::Weather => placeholders::mount_weather_app(),
    }
}
