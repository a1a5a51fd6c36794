//! Animatable value types
//!
//! Linear interpolation for the values tweens move between.

use folio_core::VisualState;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// VisualState Implementation
// ============================================================================

impl Interpolate for VisualState {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        VisualState {
            opacity: self.opacity.lerp(&other.opacity, t),
            x: self.x.lerp(&other.x, t),
            y: self.y.lerp(&other.y, t),
            scale: self.scale.lerp(&other.scale, t),
            blur: self.blur.lerp(&other.blur, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.opacity.approx_eq(&other.opacity, epsilon)
            && self.x.approx_eq(&other.x, epsilon)
            && self.y.approx_eq(&other.y, epsilon)
            && self.scale.approx_eq(&other.scale, epsilon)
            && self.blur.approx_eq(&other.blur, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_state_lerp() {
        let from = VisualState::hidden().with_y(40.0).with_blur(10.0);
        let to = VisualState::VISIBLE;

        let mid = from.lerp(&to, 0.5);
        assert!(mid.approx_eq(
            &VisualState {
                opacity: 0.5,
                x: 0.0,
                y: 20.0,
                scale: 1.0,
                blur: 5.0,
            },
            1e-6
        ));

        assert!(from.lerp(&to, 1.0).approx_eq(&to, 1e-6));
    }
}
