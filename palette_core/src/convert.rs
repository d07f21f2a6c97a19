use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels. The channel width is the range
/// check: out-of-range values are unrepresentable, and every derivation
/// clamps and rounds before constructing one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical hex form: `#RRGGBB`, uppercase. Each channel is
    /// formatted independently, so there is no bit-packing involved.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Hue in whole degrees (0..360), saturation and lightness in whole
/// percent (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h: h % 360, s, l }
    }
}

/// Parse a 6-digit hex color, with or without the leading `#`,
/// case-insensitive. Anything else (shorthand, alpha, garbage) is None.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Standard min/max HSL derivation. Ties on the maximal channel resolve
/// in R > G > B order. Achromatic input yields h = 0, s = 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        // rounding can land exactly on 360; keep hue in [0,360)
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsl_to_rgb_f(hsl.h as f64, hsl.s as f64, hsl.l as f64)
}

/// Piecewise hue-to-RGB conversion on fractional degrees/percent.
/// Shade and tint steps are fractional, so the integer `Hsl` entry
/// point above is just a wrapper over this.
pub(crate) fn hsl_to_rgb_f(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l) // achromatic
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(channel(r), channel(g), channel(b))
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(hex_to_rgb("#FF8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(hex_to_rgb("ff8000"), Some(Rgb::new(255, 128, 0)));
        assert_eq!(hex_to_rgb("#6366F1"), Some(Rgb::new(99, 102, 241)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(hex_to_rgb("notacolor"), None);
        assert_eq!(hex_to_rgb("#FFF"), None);
        assert_eq!(hex_to_rgb("#GGGGGG"), None);
        assert_eq!(hex_to_rgb("#1234567"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#12345é"), None);
    }

    #[test]
    fn hex_is_uppercase_and_zero_padded() {
        assert_eq!(Rgb::new(0, 10, 255).hex(), "#000AFF");
        assert_eq!(Rgb::new(255, 255, 255).hex(), "#FFFFFF");
    }

    #[test]
    fn hex_round_trips_exactly() {
        // sampled grid over the full channel range, endpoints included
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(17) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    assert_eq!(hex_to_rgb(&rgb.hex()), Some(rgb));
                }
            }
        }
    }

    #[test]
    fn hsl_round_trip_drift_is_bounded() {
        // Whole-degree hue quantization can move a channel by a few
        // units near segment boundaries; away from them the drift is
        // at most one unit (checked separately below).
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(15) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let back = hsl_to_rgb(rgb_to_hsl(rgb));
                    assert!(
                        (back.r as i16 - rgb.r as i16).abs() <= 5
                            && (back.g as i16 - rgb.g as i16).abs() <= 5
                            && (back.b as i16 - rgb.b as i16).abs() <= 5,
                        "{rgb:?} -> {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn hsl_round_trip_is_tight_for_common_colors() {
        let colors = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(128, 128, 128),
            Rgb::new(99, 102, 241),
            Rgb::new(38, 70, 83),
        ];
        for rgb in colors {
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!(
                (back.r as i16 - rgb.r as i16).abs() <= 1
                    && (back.g as i16 - rgb.g as i16).abs() <= 1
                    && (back.b as i16 - rgb.b as i16).abs() <= 1,
                "{rgb:?} -> {back:?}"
            );
        }
    }

    #[test]
    fn primary_hues() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn achromatic_is_hue_zero() {
        let grey = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(grey.h, 0);
        assert_eq!(grey.s, 0);
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 100)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(0, 0, 0)), Rgb::new(0, 0, 0));
    }
}
