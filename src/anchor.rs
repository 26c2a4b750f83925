use std::collections::HashMap;

use egui::{Id, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Geometry of the anchor widget measured once when the sheet is presented.
///
/// Coordinates are relative to the viewport the sheet is laid out in. The
/// snapshot is not re-measured while the sheet stays open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorSnapshot {
    position: Pos2,
    size: Option<Vec2>,
}

impl AnchorSnapshot {
    pub fn new(position: Pos2, size: Option<Vec2>) -> Self {
        Self { position, size }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min, Some(rect.size()))
    }

    /// Anchor with a known reference point but unknown extent.
    pub fn at(position: Pos2) -> Self {
        Self::new(position, None)
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Measured size, [`Vec2::ZERO`] if unknown.
    pub fn size(&self) -> Vec2 {
        self.size.unwrap_or(Vec2::ZERO)
    }

    pub fn has_size(&self) -> bool {
        self.size.is_some()
    }

    /// Checks only the reference point against the viewport, not the whole rect.
    ///
    /// Edges are inclusive: a point exactly on the right or bottom border is
    /// still on screen.
    pub fn is_on_screen(&self, viewport: Vec2) -> bool {
        let p = self.position;
        !(p.x < 0. || p.x > viewport.x || p.y < 0. || p.y > viewport.y)
    }

    /// Converts a screen space rect into coordinates relative to `origin`.
    pub fn relative_to(rect: Rect, origin: Pos2) -> Self {
        Self::from_rect(rect.translate(-origin.to_vec2()))
    }
}

/// Source of anchor rectangles in screen coordinates.
///
/// Returns `None` when the anchor is not laid out, e.g. it was not shown on
/// the previous frame.
pub trait AnchorLookup {
    fn anchor_rect(&self, id: Id) -> Option<Rect>;
}

impl AnchorLookup for egui::Context {
    fn anchor_rect(&self, id: Id) -> Option<Rect> {
        self.read_response(id).map(|r| r.rect)
    }
}

impl AnchorLookup for HashMap<Id, Rect> {
    fn anchor_rect(&self, id: Id) -> Option<Rect> {
        self.get(&id).copied()
    }
}

/// Measures the anchor once and converts it into viewport coordinates.
pub fn capture<L: AnchorLookup + ?Sized>(
    lookup: &L,
    id: Id,
    origin: Pos2,
) -> Option<AnchorSnapshot> {
    let snapshot = lookup
        .anchor_rect(id)
        .map(|rect| AnchorSnapshot::relative_to(rect, origin));
    if snapshot.is_none() {
        log::debug!("anchor {id:?} is not mounted, sheet will be centered");
    }
    snapshot
}
