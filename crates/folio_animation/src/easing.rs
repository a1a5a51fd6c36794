//! Easing curves
//!
//! The power family: `power1` is quadratic, `power2` cubic, `power3` quartic
//! and `power4` quintic, each in `in`, `out` and `in_out` flavours.

/// An easing curve mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerate from zero velocity
    PowerIn(u8),
    /// Decelerate to zero velocity
    PowerOut(u8),
    /// Accelerate then decelerate
    PowerInOut(u8),
}

impl Easing {
    pub const POWER1_IN_OUT: Easing = Easing::PowerInOut(1);
    pub const POWER2_OUT: Easing = Easing::PowerOut(2);
    pub const POWER3_OUT: Easing = Easing::PowerOut(3);
    pub const POWER3_IN_OUT: Easing = Easing::PowerInOut(3);

    /// Evaluate the curve at `t` (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::PowerIn(power) => t.powi(exponent(power)),
            Easing::PowerOut(power) => 1.0 - (1.0 - t).powi(exponent(power)),
            Easing::PowerInOut(power) => {
                let p = exponent(power);
                if t < 0.5 {
                    2f32.powi(p - 1) * t.powi(p)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(p) / 2.0
                }
            }
        }
    }
}

fn exponent(power: u8) -> i32 {
    i32::from(power.clamp(1, 4)) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::PowerIn(2),
            Easing::POWER3_OUT,
            Easing::POWER1_IN_OUT,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_out_leads_in() {
        assert!(Easing::POWER3_OUT.apply(0.3) > 0.3);
        assert!(Easing::PowerIn(3).apply(0.3) < 0.3);
        assert!((Easing::POWER3_IN_OUT.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
