//! Title-bar drag gesture for floating windows.
//!
//! A gesture only tracks a transient offset from the window's committed origin. Nothing is
//! written to the registry until [`DragGesture::finish`] hands back the final origin, which the
//! window frame then commits with a single `UpdatePosition` action.

use crate::model::{PointerPosition, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Size of the surface a dragged window must stay inside.
pub struct DragBounds {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        pointer_start: PointerPosition,
        origin: WindowRect,
        dx: i32,
        dy: i32,
    },
}

impl DragGesture {
    pub fn begin(origin: WindowRect, pointer: PointerPosition) -> Self {
        Self::Dragging {
            pointer_start: pointer,
            origin,
            dx: 0,
            dy: 0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Current visual offset from the committed origin.
    pub fn offset(&self) -> (i32, i32) {
        match *self {
            Self::Idle => (0, 0),
            Self::Dragging { dx, dy, .. } => (dx, dy),
        }
    }

    /// Moves the gesture to `pointer`, keeping the window rectangle inside `bounds` when given.
    pub fn update(&mut self, pointer: PointerPosition, bounds: Option<DragBounds>) {
        let Self::Dragging {
            pointer_start,
            origin,
            dx,
            dy,
        } = self
        else {
            return;
        };

        let moved = origin.offset(pointer.x - pointer_start.x, pointer.y - pointer_start.y);
        let contained = match bounds {
            Some(bounds) => contain(moved, bounds),
            None => moved,
        };
        *dx = contained.x - origin.x;
        *dy = contained.y - origin.y;
    }

    /// Ends the gesture and returns the origin to commit, or `None` when no drag was active.
    pub fn finish(&mut self) -> Option<(i32, i32)> {
        let committed = match *self {
            Self::Idle => None,
            Self::Dragging { origin, dx, dy, .. } => Some((origin.x + dx, origin.y + dy)),
        };
        *self = Self::Idle;
        committed
    }
}

fn contain(rect: WindowRect, bounds: DragBounds) -> WindowRect {
    let max_x = (bounds.w - rect.w).max(0);
    let max_y = (bounds.h - rect.h).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ORIGIN: WindowRect = WindowRect {
        x: 100,
        y: 80,
        w: 400,
        h: 300,
    };

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn idle_gesture_has_no_offset_and_commits_nothing() {
        let mut gesture = DragGesture::default();
        gesture.update(at(50, 50), None);
        assert!(!gesture.is_dragging());
        assert_eq!(gesture.offset(), (0, 0));
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn offset_follows_pointer_relative_to_gesture_start() {
        let mut gesture = DragGesture::begin(ORIGIN, at(120, 90));
        gesture.update(at(145, 130), None);
        assert_eq!(gesture.offset(), (25, 40));
        gesture.update(at(110, 85), None);
        assert_eq!(gesture.offset(), (-10, -5));
    }

    #[test]
    fn finish_commits_final_origin_once_and_returns_to_idle() {
        let mut gesture = DragGesture::begin(ORIGIN, at(0, 0));
        gesture.update(at(30, -20), None);
        assert_eq!(gesture.finish(), Some((130, 60)));
        assert_eq!(gesture, DragGesture::Idle);
        assert_eq!(gesture.finish(), None);
    }

    #[test]
    fn bounds_keep_window_inside_surface() {
        let bounds = DragBounds { w: 1000, h: 700 };
        let mut gesture = DragGesture::begin(ORIGIN, at(0, 0));

        gesture.update(at(-500, -500), Some(bounds));
        assert_eq!(gesture.offset(), (-100, -80));

        gesture.update(at(2000, 2000), Some(bounds));
        assert_eq!(gesture.finish(), Some((600, 400)));
    }

    #[test]
    fn oversized_window_is_pinned_to_surface_origin() {
        let bounds = DragBounds { w: 300, h: 200 };
        let mut gesture = DragGesture::begin(ORIGIN, at(0, 0));
        gesture.update(at(40, 40), Some(bounds));
        assert_eq!(gesture.finish(), Some((0, 0)));
    }

    #[test]
    fn zero_movement_commits_unchanged_origin() {
        let mut gesture = DragGesture::begin(ORIGIN, at(5, 5));
        assert_eq!(gesture.finish(), Some((ORIGIN.x, ORIGIN.y)));
    }
}
