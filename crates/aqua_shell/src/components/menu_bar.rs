use super::*;
use std::time::Duration;

use aqua_session::registry_entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MenuBarClock {
    hour: u32,
    minute: u32,
}

impl MenuBarClock {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

fn format_menu_bar_clock(clock: MenuBarClock) -> String {
    format!("{:02}:{:02}", clock.hour, clock.minute)
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = runtime.session;
    let system_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(MenuBarClock::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock.set(MenuBarClock::now()),
        Duration::from_secs(30),
    ) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if system_menu_open.get_untracked() {
            system_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let focused_app_name = move || {
        session.with(|s| {
            s.focused_window()
                .map(|w| registry_entry(w.app_id).display_name)
                .unwrap_or("Finder")
        })
    };
    let close_all = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        system_menu_open.set(false);
        runtime.dispatch_command(DesktopCommand::CloseAll);
    };

    view! {
        <header class="menu-bar" style=format!("height:{}px;", MENU_BAR_HEIGHT_PX)>
            <div class="menu-bar-left">
                <button
                    class="menu-bar-brand"
                    aria-haspopup="menu"
                    aria-expanded=move || system_menu_open.get().to_string()
                    on:mousedown=move |ev| ev.stop_propagation()
                    on:click=move |ev: web_sys::MouseEvent| {
                        stop_mouse_event(&ev);
                        system_menu_open.update(|open| *open = !*open);
                    }
                >
                    "Aquadesk"
                </button>
                <Show when=move || system_menu_open.get() fallback=|| ()>
                    <ul class="menu-bar-menu" role="menu">
                        <li role="none">
                            <button
                                role="menuitem"
                                on:mousedown=move |ev| ev.stop_propagation()
                                on:click=close_all
                            >
                                "Close All Windows"
                            </button>
                        </li>
                    </ul>
                </Show>
                <span class="menu-bar-app">{focused_app_name}</span>
            </div>
            <div class="menu-bar-right">
                <time class="menu-bar-clock">
                    {move || format_menu_bar_clock(clock.get())}
                </time>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_renders_zero_padded_hours_and_minutes() {
        assert_eq!(
            format_menu_bar_clock(MenuBarClock { hour: 9, minute: 5 }),
            "09:05"
        );
        assert_eq!(
            format_menu_bar_clock(MenuBarClock {
                hour: 23,
                minute: 59
            }),
            "23:59"
        );
    }
}
