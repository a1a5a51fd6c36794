//! Visual state of an element
//!
//! The animatable subset of an element's style. Offsets are translations
//! relative to the element's laid-out position, `blur` is a filter radius in
//! pixels.

/// Animatable style of a single element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub blur: f32,
}

impl VisualState {
    /// Fully visible, untransformed
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        blur: 0.0,
    };

    /// Transparent but otherwise untransformed
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    /// Whether a viewer can see the element at all
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.scale > 0.0
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::VISIBLE
    }
}
