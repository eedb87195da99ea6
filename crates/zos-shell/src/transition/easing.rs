//! Easing curves for the lifecycle animations
//!
//! All curves map `[0, 1]` onto `[0, 1]`.

/// Symmetric cubic curve, drives the genie minimize
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Decelerating cubic, drives the open animation
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Accelerating cubic, drives the close animation
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for curve in [ease_in_out, ease_out_cubic, ease_in_cubic] {
            assert!(curve(0.0).abs() < 0.001);
            assert!((curve(1.0) - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_ease_out_leads_ease_in() {
        assert!(ease_out_cubic(0.3) > 0.3);
        assert!(ease_in_cubic(0.3) < 0.3);
    }
}
