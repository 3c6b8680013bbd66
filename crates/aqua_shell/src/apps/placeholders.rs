//! Placeholder surfaces for apps whose full implementations are still planned.

use leptos::*;

pub(super) fn mount_finder_app() -> View {
    let folders = [
        ("Desktop", 4),
        ("Documents", 12),
        ("Downloads", 27),
        ("Pictures", 64),
        ("Music", 118),
    ];
    view! {
        <div class="app-surface app-finder">
            <aside class="finder-sidebar" aria-label="Favorites">
                <p class="finder-heading">"Favorites"</p>
                <ul>
                    {folders
                        .iter()
                        .map(|(name, _)| view! { <li><button>{*name}</button></li> })
                        .collect_view()}
                </ul>
            </aside>
            <div class="finder-listing">
                <ul>
                    {folders
                        .iter()
                        .map(|(name, count)| {
                            view! {
                                <li class="finder-row">
                                    <span>{*name}</span>
                                    <span class="finder-count">{format!("{count} items")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_safari_app() -> View {
    view! {
        <div class="app-surface app-safari">
            <div class="app-toolbar" role="group" aria-label="Navigation">
                <button type="button" class="app-action">"Back"</button>
                <button type="button" class="app-action">"Forward"</button>
                <input class="safari-address" type="text" readonly value="https://start.aquadesk.local"/>
            </div>
            <div class="safari-start-page">
                <p><strong>"Start Page"</strong></p>
                <p>"Browsing is simulated in this build."</p>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_mail_app() -> View {
    let messages = [
        ("Aquadesk Team", "Welcome to your new desktop"),
        ("Build Bot", "Nightly build finished"),
        ("Calendar", "You have 2 events tomorrow"),
    ];
    view! {
        <div class="app-surface app-mail">
            <p class="mail-heading">"Inbox"</p>
            <ul class="mail-list">
                {messages
                    .iter()
                    .map(|(from, subject)| {
                        view! {
                            <li class="mail-row">
                                <span class="mail-from">{*from}</span>
                                <span class="mail-subject">{*subject}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

pub(super) fn mount_photos_app() -> View {
    view! {
        <div class="app-surface app-photos">
            <div class="photos-grid" role="list" aria-label="Library">
                {(1..=12)
                    .map(|n| view! { <div class="photos-tile" role="listitem">{format!("IMG_{n:03}")}</div> })
                    .collect_view()}
            </div>
            <div class="app-statusbar">
                <span>"12 photos"</span>
                <span>"Library placeholder"</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_music_app() -> View {
    view! {
        <div class="app-surface app-music">
            <div class="music-now-playing">
                <p><strong>"Not Playing"</strong></p>
                <p>"Pick a song to start listening."</p>
            </div>
            <div class="app-toolbar" role="group" aria-label="Playback">
                <button type="button" class="app-action">"Previous"</button>
                <button type="button" class="app-action">"Play"</button>
                <button type="button" class="app-action">"Next"</button>
            </div>
        </div>
    }
    .into_view()
}

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub(super) fn mount_calendar_app() -> View {
    view! {
        <div class="app-surface app-calendar">
            <p class="calendar-heading">"This Month"</p>
            <div class="calendar-grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <span class="calendar-weekday">{*label}</span> })
                    .collect_view()}
                {(1..=30)
                    .map(|day| view! { <span class="calendar-day">{day}</span> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_terminal_app() -> View {
    view! {
        <div class="app-surface app-terminal">
            <pre class="terminal-scrollback">
"Aquadesk Terminal (simulated)\nType of shell: none attached\n"
            </pre>
            <div class="terminal-prompt-line">
                <span class="terminal-prompt">"user@aquadesk ~ %"</span>
                <input class="terminal-input" type="text" autocomplete="off" spellcheck="false"/>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_weather_app() -> View {
    let forecast = [
        ("Today", "Sunny", "24°"),
        ("Tomorrow", "Partly cloudy", "21°"),
        ("Saturday", "Rain", "17°"),
    ];
    view! {
        <div class="app-surface app-weather">
            <div class="weather-current">
                <p class="weather-temp">"24°"</p>
                <p>"Sunny in Cupertino (sample data)"</p>
            </div>
            <div class="weather-forecast">
                {forecast
                    .iter()
                    .map(|(day, sky, temp)| {
                        view! {
                            <div class="weather-card">
                                <p><strong>{*day}</strong></p>
                                <p>{*sky}</p>
                                <p>{*temp}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}
