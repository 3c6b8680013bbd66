//! Drag/resize gesture machine for the window frame.
//!
//! One gesture at a time: `Idle -> Dragging -> Idle` or
//! `Idle -> Resizing(edge) -> Idle`, never both. Begin transitions capture
//! the pointer position and the window's starting rect; update transitions
//! recompute the rect from the accumulated pointer delta and commit it
//! through the store ops; release anywhere ends the gesture and keeps the
//! last committed rect (there is no cancel path).

use serde::{Deserialize, Serialize};

use crate::model::{
    DesktopSession, WindowId, WindowRect, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Which edge or corner a resize gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    fn moves_left_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    fn moves_right_edge(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }
}

/// An in-progress title-bar drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// An in-progress edge/corner resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

/// Transient per-gesture state. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    fn idle(&self) -> bool {
        self.dragging.is_none() && self.resizing.is_none()
    }
}

/// Starts a title-bar drag, raising the window. Ignored while another
/// gesture is active, while the window is maximized, or for a missing id.
pub fn begin_move(
    session: &mut DesktopSession,
    interaction: &mut InteractionState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> bool {
    if !interaction.idle() {
        return false;
    }
    let Some(window) = session.window(window_id) else {
        return false;
    };
    if window.maximized {
        return false;
    }
    let rect_start = window.rect;
    session.focus_window(window_id);
    interaction.dragging = Some(DragSession {
        window_id,
        pointer_start: pointer,
        rect_start,
    });
    true
}

/// Applies pointer motion to the active drag. The top-left corner is
/// clamped to (0, 0); the right/bottom edges are free to leave the
/// viewport.
pub fn update_move(
    session: &mut DesktopSession,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(drag) = interaction.dragging else {
        return false;
    };
    let moved = drag.rect_start.offset(
        pointer.x - drag.pointer_start.x,
        pointer.y - drag.pointer_start.y,
    );
    session.move_window(drag.window_id, moved.x, moved.y)
}

/// Ends the active drag, committing the last applied position.
pub fn end_move(interaction: &mut InteractionState) -> bool {
    interaction.dragging.take().is_some()
}

/// Starts an edge/corner resize under the same gating as [`begin_move`].
pub fn begin_resize(
    session: &mut DesktopSession,
    interaction: &mut InteractionState,
    window_id: WindowId,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> bool {
    if !interaction.idle() {
        return false;
    }
    let Some(window) = session.window(window_id) else {
        return false;
    };
    if window.maximized {
        return false;
    }
    let rect_start = window.rect;
    session.focus_window(window_id);
    interaction.resizing = Some(ResizeSession {
        window_id,
        edge,
        pointer_start: pointer,
        rect_start,
    });
    true
}

/// Applies pointer motion to the active resize.
pub fn update_resize(
    session: &mut DesktopSession,
    interaction: &InteractionState,
    pointer: PointerPosition,
) -> bool {
    let Some(resize) = interaction.resizing else {
        return false;
    };
    let rect = resize_rect(
        resize.rect_start,
        resize.edge,
        pointer.x - resize.pointer_start.x,
        pointer.y - resize.pointer_start.y,
    );
    let moved = session.move_window(resize.window_id, rect.x, rect.y);
    let resized = session.resize_window(resize.window_id, rect.w, rect.h);
    moved || resized
}

/// Ends the active resize, committing the last applied rect.
pub fn end_resize(interaction: &mut InteractionState) -> bool {
    interaction.resizing.take().is_some()
}

/// Computes the resized rect for a pointer delta, anchored at the edges
/// opposite the grabbed ones.
///
/// Works in edge coordinates so the anchored edges stay fixed even when the
/// minimum size or the viewport origin clamps the moving edge: delta past
/// the floor has no further effect anywhere in the rect. The floor clamp is
/// applied before the origin clamp, so a degenerate start rect whose far
/// edge sits inside the minimum span still resolves to a valid rect.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let mut left = start.x;
    let mut top = start.y;
    let mut right = start.x + start.w;
    let mut bottom = start.y + start.h;

    if edge.moves_left_edge() {
        left = (left + dx).min(right - MIN_WINDOW_WIDTH).max(0);
    } else if edge.moves_right_edge() {
        right = (right + dx).max(left + MIN_WINDOW_WIDTH);
    }
    if edge.moves_top_edge() {
        top = (top + dy).min(bottom - MIN_WINDOW_HEIGHT).max(0);
    } else if edge.moves_bottom_edge() {
        bottom = (bottom + dy).max(top + MIN_WINDOW_HEIGHT);
    }

    WindowRect {
        x: left,
        y: top,
        w: right - left,
        h: bottom - top,
    }
}
