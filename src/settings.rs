use serde::{Deserialize, Serialize};

/// Sizing rules of the sheet.
///
/// Width is not scaled with the available space. It snaps to one of two fixed
/// widths and only falls back to a fraction of the available space when even
/// the narrow width does not fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSheet {
    /// Threshold and resulting width of the wide step. Available width
    /// strictly greater than this value gives a sheet exactly this wide.
    pub wide_width: f32,

    /// Threshold and resulting width of the narrow step. Available width
    /// strictly greater than this value, and not above `wide_width`, gives a
    /// sheet exactly this wide.
    pub narrow_width: f32,

    /// Part of the available width taken when neither fixed width fits
    pub compact_width_factor: f32,

    /// Max height as a part of the whole viewport height
    pub max_height_factor: f32,
}

impl Default for SettingsSheet {
    fn default() -> Self {
        Self {
            wide_width: 312.,
            narrow_width: 240.,
            compact_width_factor: 0.7,
            max_height_factor: 0.8,
        }
    }
}

impl SettingsSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wide_width(mut self, width: f32) -> Self {
        self.wide_width = width;
        self
    }

    pub fn with_narrow_width(mut self, width: f32) -> Self {
        self.narrow_width = width;
        self
    }

    pub fn with_compact_width_factor(mut self, factor: f32) -> Self {
        self.compact_width_factor = factor;
        self
    }

    pub fn with_max_height_factor(mut self, factor: f32) -> Self {
        self.max_height_factor = factor;
        self
    }

    /// Resolves sheet width for the given available width.
    ///
    /// Comparisons are strict: exactly `wide_width` of space gives `narrow_width`.
    pub fn resolve_width(&self, available: f32) -> f32 {
        if available > self.wide_width {
            self.wide_width
        } else if available > self.narrow_width {
            self.narrow_width
        } else {
            available * self.compact_width_factor
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsInteraction {
    /// Dismisses the sheet when escape is pressed
    pub dismiss_on_escape: bool,

    /// Dismisses the sheet on a click outside of it
    pub dismiss_on_click_outside: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            dismiss_on_escape: true,
            dismiss_on_click_outside: true,
        }
    }
}

impl SettingsInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dismiss_on_escape(mut self, enable: bool) -> Self {
        self.dismiss_on_escape = enable;
        self
    }

    pub fn with_dismiss_on_click_outside(mut self, enable: bool) -> Self {
        self.dismiss_on_click_outside = enable;
        self
    }
}
