use super::*;

use aqua_session::{dock_apps, AppDescriptor, OpenOverrides};

#[component]
pub(super) fn Dock() -> impl IntoView {
    view! {
        <footer class="dock" style=format!("height:{}px;", DOCK_RESERVED_PX)>
            <div class="dock-tray" role="toolbar" aria-label="Dock">
                <For
                    each=|| dock_apps()
                    key=|descriptor| descriptor.app_id
                    children=|descriptor: &'static AppDescriptor| {
                        view! { <DockTile descriptor/> }
                    }
                />
            </div>
        </footer>
    }
}

#[component]
fn DockTile(descriptor: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = runtime.session;
    let app_id = descriptor.app_id;

    let running = move || session.with(|s| s.is_app_open(app_id));
    let launch = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_command(DesktopCommand::Launch {
            app_id,
            overrides: OpenOverrides::default(),
        });
    };

    view! {
        <button
            class=move || {
                if running() {
                    "dock-tile dock-tile-running"
                } else {
                    "dock-tile"
                }
            }
            aria-label=descriptor.display_name
            title=descriptor.display_name
            on:click=launch
        >
            <span class="dock-tile-icon" aria-hidden="true">{descriptor.icon}</span>
            <Show when=running fallback=|| ()>
                <span class="dock-tile-indicator"></span>
            </Show>
        </button>
    }
}
