use super::*;
use crate::apps;

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .session
            .get()
            .windows
            .get(&window_id)
            .cloned()
    });

    let focus = move |_: web_sys::PointerEvent| {
        let already_top = runtime
            .session
            .with_untracked(|s| s.focused_window().map(|w| w.id) == Some(window_id));
        if !already_top {
            runtime.dispatch_command(DesktopCommand::Focus { window_id });
        }
    };
    let close = move |_| runtime.dispatch_command(DesktopCommand::Close { window_id });
    let minimize = move |_| runtime.dispatch_command(DesktopCommand::Minimize { window_id });
    let toggle_maximize =
        move |_| runtime.dispatch_command(DesktopCommand::ToggleMaximize { window_id });

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        // Drag-to-front: BeginMove raises the window itself; a maximized
        // window refuses the gesture, and the event then bubbles to the
        // frame's focus handler so the click still raises the window.
        runtime.dispatch_command(DesktopCommand::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_command(DesktopCommand::ToggleMaximize { window_id });
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                // The frame closure re-runs on its own subscription, so it
                // can observe the close before the outer Show does.
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let style = if win.maximized {
                    // Paint-time override: fill the viewport between the
                    // menu bar and dock bands; the stored rect is untouched.
                    format!(
                        "left:0;top:{}px;width:100vw;height:calc(100vh - {}px);z-index:{};",
                        MENU_BAR_HEIGHT_PX,
                        MENU_BAR_HEIGHT_PX + DOCK_RESERVED_PX,
                        win.z_index
                    )
                } else {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                    )
                };
                let maximized_class = if win.maximized { " maximized" } else { "" };

                view! {
                    <section
                        class=format!("desktop-window{maximized_class}")
                        style=style
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=win.title.clone()
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <div class="traffic-lights">
                                <TrafficLight
                                    kind="close"
                                    label="Close window (Cmd+W)"
                                    on_activate=close
                                />
                                <TrafficLight
                                    kind="minimize"
                                    label="Minimize window (Cmd+M)"
                                    on_activate=minimize
                                />
                                <TrafficLight
                                    kind="zoom"
                                    label="Maximize window (Cmd+ArrowUp)"
                                    on_activate=toggle_maximize
                                />
                            </div>
                            <span class="titlebar-title">{win.title.clone()}</span>
                            <span class="titlebar-spacer" aria-hidden="true"></span>
                        </header>
                        <div class="window-body">{apps::mount_app(win.app_id)}</div>
                        <Show
                            when=move || window.get().map(|w| !w.maximized).unwrap_or(false)
                            fallback=|| ()
                        >
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::North />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::South />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::East />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::West />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                            <WindowResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn TrafficLight<F>(
    kind: &'static str,
    label: &'static str,
    on_activate: F,
) -> impl IntoView
where
    F: Fn(web_sys::MouseEvent) + Copy + 'static,
{
    view! {
        <button
            class=format!("traffic-light traffic-light-{kind}")
            aria-label=label
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev| stop_mouse_event(&ev)
            on:click=move |ev| {
                stop_mouse_event(&ev);
                on_activate(ev);
            }
        ></button>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_command(DesktopCommand::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
