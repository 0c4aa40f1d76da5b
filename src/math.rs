//! HSV and HSL-lightness conversions shared by the selector laws.
//!
//! `hsv_to_rgb`/`rgb_to_hsv` use normalized f64 in 0.0–1.0. The lightness
//! helpers work on the percent scale the selectors use (saturation and value
//! in 0–100).

/// HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0).rem_euclid(6.0);
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Linearized lightness ("lit") of an HSV pair, percent scale.
pub(crate) fn lit(sat: f64, val: f64) -> f64 {
    (200.0 - sat) * val / 200.0
}

/// HSL saturation of an HSV pair, percent scale.
///
/// Undefined at the lightness extremes, where `None` is returned.
pub(crate) fn hsl_saturation(sat: f64, val: f64) -> Option<f64> {
    let l = lit(sat, val);
    if l <= 0.0 || l >= 100.0 {
        None
    } else {
        Some((val - l) / l.min(100.0 - l) * 100.0)
    }
}

/// Lightness + HSL saturation → `(sat, val)` in HSV, percent scale.
pub(crate) fn from_lit(lit: f64, satl: f64) -> (f64, f64) {
    let val = lit + satl * lit.min(100.0 - lit) / 100.0;
    let sat = if val == 0.0 {
        0.0
    } else {
        200.0 * (1.0 - lit / val)
    };
    (sat, val)
}

/// Pixel span used as a divisor: `n - 1`, never below 1.
pub(crate) fn span(n: i32) -> f64 {
    (n - 1).max(1) as f64
}

/// Clamp a ratio into 0.0–1.0.
pub(crate) fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_round_trip_through_hsv() {
        let (h, s, v) = rgb_to_hsv(0.0, 1.0, 0.0);
        assert!((h - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!((s, v), (1.0, 1.0));
        let (r, g, b) = hsv_to_rgb(h, s, v);
        assert!(r.abs() < 1e-9 && (g - 1.0).abs() < 1e-9 && b.abs() < 1e-9);
    }

    #[test]
    fn full_turn_hue_is_red() {
        let (r, g, b) = hsv_to_rgb(1.0, 1.0, 1.0);
        assert_eq!((r, g, b), (1.0, 0.0, 0.0));
    }

    #[test]
    fn lit_matches_hsl_lightness() {
        assert_eq!(lit(0.0, 100.0), 100.0);
        assert_eq!(lit(100.0, 100.0), 50.0);
        assert_eq!(lit(50.0, 80.0), 60.0);
    }

    #[test]
    fn hsl_saturation_is_none_at_extremes() {
        assert_eq!(hsl_saturation(0.0, 0.0), None);
        assert_eq!(hsl_saturation(0.0, 100.0), None);
        let satl = hsl_saturation(50.0, 80.0).unwrap();
        assert!((satl - 50.0).abs() < 1e-9);
    }

    #[test]
    fn from_lit_inverts_hsl_saturation() {
        let (s, v) = from_lit(60.0, 50.0);
        assert!((s - 50.0).abs() < 1e-9);
        assert!((v - 80.0).abs() < 1e-9);
        assert_eq!(from_lit(0.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn span_never_drops_below_one() {
        assert_eq!(span(0), 1.0);
        assert_eq!(span(1), 1.0);
        assert_eq!(span(200), 199.0);
    }
}
