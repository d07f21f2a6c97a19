use crate::convert::Rgb;
use serde::{Deserialize, Serialize};
use std::fmt;

/// WCAG contrast thresholds. Boundaries are inclusive: a ratio of
/// exactly 4.5 rates AA.
pub const AAA_NORMAL: f64 = 7.0;
pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;

/// WCAG relative luminance: per-channel sRGB linearization followed by
/// the perceptual weighted sum.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

fn linearize(v: u8) -> f64 {
    let v = v as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// `(lighter + 0.05) / (darker + 0.05)`. Symmetric, always >= 1.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastRating {
    Aaa,
    Aa,
    AaLarge,
    Fail,
}

impl ContrastRating {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            ContrastRating::Aaa
        } else if ratio >= AA_NORMAL {
            ContrastRating::Aa
        } else if ratio >= AA_LARGE {
            ContrastRating::AaLarge
        } else {
            ContrastRating::Fail
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContrastRating::Aaa => "AAA",
            ContrastRating::Aa => "AA",
            ContrastRating::AaLarge => "AA Large",
            ContrastRating::Fail => "Fail",
        }
    }
}

impl fmt::Display for ContrastRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn black_on_white_is_max_contrast() {
        let ratio = contrast_ratio(BLACK, WHITE);
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn self_contrast_is_one() {
        for rgb in [BLACK, WHITE, Rgb::new(99, 102, 241), Rgb::new(17, 0, 200)] {
            let ratio = contrast_ratio(rgb, rgb);
            assert!((ratio - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn ratio_is_symmetric() {
        let pairs = [
            (Rgb::new(99, 102, 241), WHITE),
            (Rgb::new(231, 111, 81), Rgb::new(38, 70, 83)),
            (BLACK, Rgb::new(128, 128, 128)),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }

    #[test]
    fn rating_boundaries_are_inclusive() {
        assert_eq!(ContrastRating::from_ratio(7.0), ContrastRating::Aaa);
        assert_eq!(ContrastRating::from_ratio(6.99), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(4.5), ContrastRating::Aa);
        assert_eq!(ContrastRating::from_ratio(4.49), ContrastRating::AaLarge);
        assert_eq!(ContrastRating::from_ratio(3.0), ContrastRating::AaLarge);
        assert_eq!(ContrastRating::from_ratio(2.99), ContrastRating::Fail);
        assert_eq!(ContrastRating::from_ratio(1.0), ContrastRating::Fail);
    }

    #[test]
    fn rating_labels() {
        assert_eq!(ContrastRating::Aaa.label(), "AAA");
        assert_eq!(ContrastRating::AaLarge.to_string(), "AA Large");
    }

    #[test]
    fn luminance_endpoints() {
        assert!(relative_luminance(BLACK).abs() < 1e-12);
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }
}
