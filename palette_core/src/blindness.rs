use crate::convert::{Rgb, hex_to_rgb};
use serde::{Deserialize, Serialize};

/// Simplified dichromacy transforms. These are illustrative channel
/// mixes, not clinically validated LMS cone-space models.
const PROTANOPIA: [[f64; 3]; 3] = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];

const TRITANOPIA: [[f64; 3]; 3] = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionDeficiency {
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl VisionDeficiency {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "protanopia" => Some(VisionDeficiency::Protanopia),
            "deuteranopia" => Some(VisionDeficiency::Deuteranopia),
            "tritanopia" => Some(VisionDeficiency::Tritanopia),
            "achromatopsia" => Some(VisionDeficiency::Achromatopsia),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisionDeficiency::Protanopia => "protanopia",
            VisionDeficiency::Deuteranopia => "deuteranopia",
            VisionDeficiency::Tritanopia => "tritanopia",
            VisionDeficiency::Achromatopsia => "achromatopsia",
        }
    }
}

/// Simulate how `hex` appears under a color-vision deficiency.
/// Dichromacies apply the matrices above; achromatopsia collapses all
/// channels to their mean. None for malformed hex.
pub fn simulate(hex: &str, kind: VisionDeficiency) -> Option<String> {
    let rgb = hex_to_rgb(hex)?;
    Some(simulate_rgb(rgb, kind).hex())
}

pub fn simulate_rgb(rgb: Rgb, kind: VisionDeficiency) -> Rgb {
    match kind {
        VisionDeficiency::Protanopia => apply(PROTANOPIA, rgb),
        VisionDeficiency::Deuteranopia => apply(DEUTERANOPIA, rgb),
        VisionDeficiency::Tritanopia => apply(TRITANOPIA, rgb),
        VisionDeficiency::Achromatopsia => {
            let avg = (rgb.r as f64 + rgb.g as f64 + rgb.b as f64) / 3.0;
            let v = channel(avg);
            Rgb::new(v, v, v)
        }
    }
}

fn apply(m: [[f64; 3]; 3], rgb: Rgb) -> Rgb {
    let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);
    Rgb::new(
        channel(m[0][0] * r + m[0][1] * g + m[0][2] * b),
        channel(m[1][0] * r + m[1][1] * g + m[1][2] * b),
        channel(m[2][0] * r + m[2][1] * g + m[2][2] * b),
    )
}

fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatopsia_averages_channels() {
        assert_eq!(simulate("#FF0000", VisionDeficiency::Achromatopsia), Some("#555555".into()));
        assert_eq!(simulate("#FFFFFF", VisionDeficiency::Achromatopsia), Some("#FFFFFF".into()));
    }

    #[test]
    fn protanopia_flattens_pure_red() {
        // 0.567*255 = 144.585 -> 145, 0.558*255 = 142.29 -> 142
        assert_eq!(simulate("#FF0000", VisionDeficiency::Protanopia), Some("#918E00".into()));
    }

    #[test]
    fn deuteranopia_mixes_green_into_red() {
        // pure green: 0.375*255 = 95.625 -> 96, 0.3*255 = 76.5 -> 77
        assert_eq!(simulate("#00FF00", VisionDeficiency::Deuteranopia), Some("#604D4D".into()));
    }

    #[test]
    fn grey_is_stable_under_every_simulation() {
        for kind in [
            VisionDeficiency::Protanopia,
            VisionDeficiency::Deuteranopia,
            VisionDeficiency::Tritanopia,
            VisionDeficiency::Achromatopsia,
        ] {
            assert_eq!(simulate("#808080", kind), Some("#808080".into()), "{kind:?}");
        }
    }

    #[test]
    fn malformed_hex_is_none() {
        assert_eq!(simulate("notacolor", VisionDeficiency::Protanopia), None);
    }

    #[test]
    fn parse_known_kinds() {
        assert_eq!(VisionDeficiency::parse("tritanopia"), Some(VisionDeficiency::Tritanopia));
        assert_eq!(VisionDeficiency::parse("xray"), None);
    }
}
