use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{AnchorSnapshot, SettingsSheet, SheetAlignment};

/// Size bounds for the sheet content.
///
/// Width is fixed (`min.x == max.x`), height ranges from zero to `max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetConstraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl SheetConstraints {
    pub fn width(&self) -> f32 {
        self.max.x
    }

    pub fn max_height(&self) -> f32 {
        self.max.y
    }

    /// Clamps a measured content size into the bounds.
    pub fn clamp(&self, size: Vec2) -> Vec2 {
        size.clamp(self.min, self.max)
    }
}

/// Computes sheet size bounds and placement relative to an anchor.
///
/// Stateless: the same inputs always give the same outputs.
#[derive(Debug, Clone, Default)]
pub struct Positioner {
    settings: SettingsSheet,
}

impl Positioner {
    pub fn new(settings: SettingsSheet) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SettingsSheet {
        &self.settings
    }

    /// Size bounds for the sheet inside `viewport`.
    ///
    /// Without an anchor the whole viewport is available. With an anchor its
    /// point splits every axis in two: an edge alignment takes the side the
    /// sheet grows into, anything in between takes the smaller side.
    pub fn constraints(
        &self,
        viewport: Vec2,
        anchor: Option<&AnchorSnapshot>,
        alignment: SheetAlignment,
    ) -> SheetConstraints {
        debug_assert!(viewport.x >= 0. && viewport.y >= 0.);

        let available = match anchor {
            None => viewport,
            Some(a) => {
                let p = a.position();
                Vec2::new(
                    available_along(
                        p.x,
                        viewport.x,
                        alignment.is_leading_x(),
                        alignment.is_trailing_x(),
                    ),
                    available_along(
                        p.y,
                        viewport.y,
                        alignment.is_leading_y(),
                        alignment.is_trailing_y(),
                    ),
                )
            }
        };

        let width = self
            .settings
            .resolve_width(available.x)
            .clamp(0., viewport.x);
        let max_height = available
            .y
            .min(viewport.y * self.settings.max_height_factor)
            .max(0.);

        let res = SheetConstraints {
            min: Vec2::new(width, 0.),
            max: Vec2::new(width, max_height),
        };
        log::trace!("sheet constraints: available {available:?}, result {res:?}");
        res
    }

    /// Top-left corner of the sheet given its measured `content` size.
    ///
    /// Falls back to centering in the viewport when the anchor is missing or its
    /// point is off screen.
    pub fn position(
        &self,
        viewport: Vec2,
        content: Vec2,
        anchor: Option<&AnchorSnapshot>,
        alignment: SheetAlignment,
    ) -> Pos2 {
        debug_assert!(content.x >= 0. && content.y >= 0.);

        let Some(a) = anchor.filter(|a| a.is_on_screen(viewport)) else {
            log::debug!("anchor missing or off screen, centering sheet");
            return (viewport / 2. - content / 2.).to_pos2();
        };

        let fraction = alignment.fraction();
        let modal_offset = fraction * content;
        let anchor_offset = fraction * a.size();

        let res = a.position() + anchor_offset - modal_offset;
        log::trace!("sheet position: {res:?}");
        res
    }
}

/// Space available along one axis when the anchor point sits at `at` in `0..=extent`.
fn available_along(at: f32, extent: f32, leading: bool, trailing: bool) -> f32 {
    let before = at.clamp(0., extent);
    let after = (extent - at).clamp(0., extent);

    if leading {
        after
    } else if trailing {
        before
    } else {
        before.min(after)
    }
}

/// [`Positioner::constraints`] with default [`SettingsSheet`].
pub fn compute_constraints(
    viewport: Vec2,
    anchor: Option<&AnchorSnapshot>,
    alignment: SheetAlignment,
) -> SheetConstraints {
    Positioner::default().constraints(viewport, anchor, alignment)
}

/// [`Positioner::position`] with default [`SettingsSheet`].
pub fn compute_position(
    viewport: Vec2,
    content: Vec2,
    anchor: Option<&AnchorSnapshot>,
    alignment: SheetAlignment,
) -> Pos2 {
    Positioner::default().position(viewport, content, anchor, alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_available_along() {
        assert_eq!(available_along(100., 400., true, false), 300.);
        assert_eq!(available_along(100., 400., false, true), 100.);
        assert_eq!(available_along(100., 400., false, false), 100.);
        assert_eq!(available_along(350., 400., false, false), 50.);
        assert_eq!(available_along(-20., 400., false, true), 0.);
        assert_eq!(available_along(500., 400., true, false), 0.);
    }

    #[test]
    fn test_no_anchor_uses_whole_viewport() {
        let c = compute_constraints(vec2(1000., 800.), None, SheetAlignment::CENTER);
        assert_eq!(c.min, vec2(312., 0.));
        assert_eq!(c.max, vec2(312., 640.));
    }

    #[test]
    fn test_edge_alignment_takes_one_side() {
        let viewport = vec2(1000., 800.);
        let anchor = AnchorSnapshot::at(pos2(900., 100.));

        // grows right and down: 100 px right of anchor, 700 px below
        let c = compute_constraints(viewport, Some(&anchor), SheetAlignment::TOP_LEFT);
        assert!((c.width() - 70.).abs() < 1e-4);
        assert_eq!(c.max_height(), 640.);

        // grows left and up: 900 px left of anchor, 100 px above
        let c = compute_constraints(viewport, Some(&anchor), SheetAlignment::BOTTOM_RIGHT);
        assert_eq!(c.width(), 312.);
        assert_eq!(c.max_height(), 100.);
    }

    #[test]
    fn test_non_edge_alignment_takes_smaller_side() {
        let viewport = vec2(1000., 800.);
        let anchor = AnchorSnapshot::at(pos2(280., 700.));
        let c = compute_constraints(viewport, Some(&anchor), SheetAlignment::new(-0.5, 0.5));
        assert_eq!(c.width(), 240.);
        assert_eq!(c.max_height(), 100.);
    }

    #[test]
    fn test_position_center_zero_sized_anchor() {
        let p = compute_position(
            vec2(400., 800.),
            vec2(200., 100.),
            Some(&AnchorSnapshot::at(pos2(200., 300.))),
            SheetAlignment::CENTER,
        );
        assert_eq!(p, pos2(100., 250.));
    }

    #[test]
    fn test_position_edges() {
        let viewport = vec2(1000., 800.);
        let anchor = AnchorSnapshot::from_rect(egui::Rect::from_min_size(
            pos2(100., 100.),
            vec2(50., 20.),
        ));
        let content = vec2(200., 60.);

        let p = compute_position(viewport, content, Some(&anchor), SheetAlignment::TOP_LEFT);
        assert_eq!(p, pos2(100., 100.));

        let p = compute_position(viewport, content, Some(&anchor), SheetAlignment::BOTTOM_RIGHT);
        assert_eq!(p, pos2(100. + 50. - 200., 100. + 20. - 60.));
    }

    #[test]
    fn test_clamp() {
        let c = SheetConstraints {
            min: vec2(240., 0.),
            max: vec2(240., 300.),
        };
        assert_eq!(c.clamp(vec2(100., 500.)), vec2(240., 300.));
        assert_eq!(c.clamp(vec2(400., 120.)), vec2(240., 120.));
    }
}
