//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menu_bar;
mod window;

use leptos::*;

use self::{dock::Dock, menu_bar::MenuBar, window::DesktopWindow};
use crate::runtime_context::use_desktop_runtime;
use aqua_session::{
    DesktopCommand, PointerPosition, ResizeEdge, WindowId, DOCK_RESERVED_PX, MENU_BAR_HEIGHT_PX,
};

#[component]
/// Renders the full desktop shell: menu bar, window layer, and dock, plus
/// the document-level pointer and keyboard routing for window gestures.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = runtime.session;

    // Shortcuts target the focused (topmost visible) window only.
    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let focused = session.with_untracked(|s| s.focused_window().map(|w| w.id));
        let Some(focused) = focused else {
            return;
        };
        if ev.meta_key() || ev.ctrl_key() {
            match ev.key().as_str() {
                "w" => {
                    ev.prevent_default();
                    runtime.dispatch_command(DesktopCommand::Close { window_id: focused });
                }
                "m" => {
                    ev.prevent_default();
                    runtime.dispatch_command(DesktopCommand::Minimize { window_id: focused });
                }
                "ArrowUp" => {
                    ev.prevent_default();
                    runtime.dispatch_command(DesktopCommand::ToggleMaximize {
                        window_id: focused,
                    });
                }
                _ => {}
            }
        } else if ev.key() == "Escape" {
            runtime.dispatch_command(DesktopCommand::FocusNext { from: focused });
        }
    });
    on_cleanup(move || key_listener.remove());

    // Gesture motion and release are observed at the shell root so a drag
    // keeps tracking even when the pointer leaves the window frame, and a
    // release anywhere in the document ends the gesture. The handlers stay
    // mounted while idle and no-op until a gesture begins, instead of being
    // attached and detached around each gesture.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        let pointer = pointer_from_pointer_event(&ev);
        if interaction.dragging.is_some() {
            runtime.dispatch_command(DesktopCommand::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_command(DesktopCommand::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_command(DesktopCommand::EndMove);
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_command(DesktopCommand::EndResize);
        }
    };

    view! {
        <div
            class="desktop-shell"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-wallpaper" aria-hidden="true"></div>
            <MenuBar />
            <main
                class="desktop-window-layer"
                style=format!("top:{}px;bottom:{}px;", MENU_BAR_HEIGHT_PX, DOCK_RESERVED_PX)
            >
                <For
                    each=move || session.with(|s| {
                        s.visible_windows().iter().map(|w| w.id).collect::<Vec<_>>()
                    })
                    key=|id| *id
                    let:id
                >
                    <DesktopWindow window_id=id />
                </For>
            </main>
            <Dock />
        </div>
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
