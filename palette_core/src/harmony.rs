use crate::Color;
use crate::convert::{self, hex_to_rgb, rgb_to_hsl};

/// Hue rotated 180 degrees, same saturation/lightness. None for
/// malformed hex.
pub fn complementary(hex: &str) -> Option<Color> {
    let hsl = rgb_to_hsl(hex_to_rgb(hex)?);
    Some(color_at(wrap(hsl.h as i32 + 180), &hsl))
}

/// Hue −30 / base / +30. The middle entry is the input color in its
/// canonical form.
pub fn analogous(hex: &str) -> Option<[Color; 3]> {
    let rgb = hex_to_rgb(hex)?;
    let hsl = rgb_to_hsl(rgb);
    Some([
        color_at(wrap(hsl.h as i32 - 30), &hsl),
        Color::from_rgb(rgb),
        color_at(wrap(hsl.h as i32 + 30), &hsl),
    ])
}

/// Base / +120 / +240. The first entry is the input color in its
/// canonical form.
pub fn triadic(hex: &str) -> Option<[Color; 3]> {
    let rgb = hex_to_rgb(hex)?;
    let hsl = rgb_to_hsl(rgb);
    Some([
        Color::from_rgb(rgb),
        color_at(wrap(hsl.h as i32 + 120), &hsl),
        color_at(wrap(hsl.h as i32 + 240), &hsl),
    ])
}

/// `count` darker variants, lightness stepped down by `l/(count+1)` per
/// index with a floor at 0. Empty for malformed hex.
pub fn shades(hex: &str, count: usize) -> Vec<Color> {
    let Some(rgb) = hex_to_rgb(hex) else {
        return Vec::new();
    };
    let hsl = rgb_to_hsl(rgb);
    let step = hsl.l as f64 / (count as f64 + 1.0);

    (1..=count)
        .map(|i| {
            let l = (hsl.l as f64 - step * i as f64).max(0.0);
            Color::from_rgb(convert::hsl_to_rgb_f(hsl.h as f64, hsl.s as f64, l))
        })
        .collect()
}

/// The mirror of [`shades`]: lightness stepped up by `(100-l)/(count+1)`
/// with a ceiling at 100.
pub fn tints(hex: &str, count: usize) -> Vec<Color> {
    let Some(rgb) = hex_to_rgb(hex) else {
        return Vec::new();
    };
    let hsl = rgb_to_hsl(rgb);
    let step = (100.0 - hsl.l as f64) / (count as f64 + 1.0);

    (1..=count)
        .map(|i| {
            let l = (hsl.l as f64 + step * i as f64).min(100.0);
            Color::from_rgb(convert::hsl_to_rgb_f(hsl.h as f64, hsl.s as f64, l))
        })
        .collect()
}

fn color_at(h: u16, base: &convert::Hsl) -> Color {
    Color::from_rgb(convert::hsl_to_rgb(convert::Hsl::new(h, base.s, base.l)))
}

fn wrap(h: i32) -> u16 {
    h.rem_euclid(360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complementary_of_red_is_cyan() {
        let c = complementary("#FF0000").unwrap();
        assert_eq!(c.hex, "#00FFFF");
        let hsl = rgb_to_hsl(c.rgb);
        assert_eq!((hsl.h, hsl.s, hsl.l), (180, 100, 50));
    }

    #[test]
    fn analogous_keeps_base_in_the_middle() {
        let set = analogous("ff0000").unwrap();
        assert_eq!(set[1].hex, "#FF0000");
        assert_eq!(rgb_to_hsl(set[0].rgb).h, 330);
        assert_eq!(rgb_to_hsl(set[2].rgb).h, 30);
    }

    #[test]
    fn triadic_starts_at_base() {
        let set = triadic("#00FF00").unwrap();
        assert_eq!(set[0].hex, "#00FF00");
        assert_eq!(rgb_to_hsl(set[1].rgb).h, 240);
        assert_eq!(rgb_to_hsl(set[2].rgb).h, 0);
    }

    #[test]
    fn shades_darken_monotonically() {
        let out = shades("#6366F1", 5);
        assert_eq!(out.len(), 5);
        let mut prev = rgb_to_hsl(hex_to_rgb("#6366F1").unwrap()).l;
        for c in &out {
            let l = rgb_to_hsl(c.rgb).l;
            assert!(l < prev, "expected {l} < {prev}");
            prev = l;
        }
    }

    #[test]
    fn tints_lighten_monotonically() {
        let out = tints("#6366F1", 5);
        assert_eq!(out.len(), 5);
        let mut prev = rgb_to_hsl(hex_to_rgb("#6366F1").unwrap()).l;
        for c in &out {
            let l = rgb_to_hsl(c.rgb).l;
            assert!(l > prev, "expected {l} > {prev}");
            assert!(l <= 100);
            prev = l;
        }
    }

    #[test]
    fn malformed_hex_short_circuits() {
        assert!(complementary("notacolor").is_none());
        assert!(analogous("notacolor").is_none());
        assert!(triadic("notacolor").is_none());
        assert!(shades("notacolor", 5).is_empty());
        assert!(tints("notacolor", 5).is_empty());
    }
}
