use crate::Color;
use crate::convert::hsl_to_rgb_f;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Curated keyword themes: each maps to five explicit hues. Read-only
/// reference data; anything not listed here falls back to hues derived
/// from the keyword hash.
const THEME_HUES: &[(&str, [u16; 5])] = &[
    ("ocean", [210, 200, 190, 220, 230]),
    ("sunset", [0, 20, 40, 350, 330]),
    ("forest", [120, 140, 90, 160, 70]),
    ("desert", [30, 40, 50, 20, 10]),
    ("berry", [320, 340, 350, 300, 280]),
    ("citrus", [40, 60, 80, 20, 10]),
    ("autumn", [30, 20, 10, 40, 50]),
    ("spring", [120, 140, 160, 100, 80]),
    ("winter", [210, 220, 200, 230, 190]),
    ("summer", [60, 40, 80, 20, 100]),
];

/// Polynomial rolling hash (`hash*31 + code`) over UTF-16 code units
/// with 32-bit wraparound, absolute value at the end. Deterministic:
/// the same keyword always reproduces the same palette.
pub fn hash_keyword(keyword: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in keyword.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Theme,
    Complementary,
    Analogous,
    Triadic,
    Monochromatic,
    Random,
}

impl PaletteKind {
    /// Request-style parsing: any unknown value means random.
    pub fn parse(s: &str) -> Self {
        match s {
            "theme" => PaletteKind::Theme,
            "complementary" => PaletteKind::Complementary,
            "analogous" => PaletteKind::Analogous,
            "triadic" => PaletteKind::Triadic,
            "monochromatic" => PaletteKind::Monochromatic,
            _ => PaletteKind::Random,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaletteKind::Theme => "theme",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Monochromatic => "monochromatic",
            PaletteKind::Random => "random",
        }
    }
}

/// Generate the five-color palette for a keyword. All kinds except
/// `Random` are deterministic in the keyword; `Random` draws from the
/// caller's generator so tests can seed it.
pub fn keyword_palette(keyword: &str, kind: PaletteKind, rng: &mut impl Rng) -> Vec<Color> {
    let base_hue = (hash_keyword(keyword) % 360) as u16;
    match kind {
        PaletteKind::Theme => thematic_palette(keyword, base_hue),
        PaletteKind::Complementary => complementary_palette(base_hue),
        PaletteKind::Analogous => analogous_palette(base_hue),
        PaletteKind::Triadic => triadic_palette(base_hue),
        PaletteKind::Monochromatic => monochromatic_palette(base_hue),
        PaletteKind::Random => random_palette(rng),
    }
}

/// Curated hues for known keywords, hash-spaced hues otherwise.
/// Saturation falls and lightness rises across the five entries.
pub fn thematic_palette(keyword: &str, base_hue: u16) -> Vec<Color> {
    let lower = keyword.to_lowercase();
    let hues = THEME_HUES
        .iter()
        .find(|(k, _)| *k == lower)
        .map(|(_, hues)| *hues)
        .unwrap_or_else(|| {
            [
                base_hue % 360,
                (base_hue + 30) % 360,
                (base_hue + 60) % 360,
                (base_hue + 90) % 360,
                (base_hue + 120) % 360,
            ]
        });

    hues.iter()
        .enumerate()
        .map(|(i, &h)| color(h, 70 - 5 * i as u16, 45 + 5 * i as u16))
        .collect()
}

pub fn complementary_palette(base_hue: u16) -> Vec<Color> {
    let complement = (base_hue + 180) % 360;
    vec![
        color(base_hue, 70, 40),
        color(base_hue, 60, 60),
        color(base_hue, 50, 80),
        color(complement, 70, 40),
        color(complement, 60, 60),
    ]
}

pub fn analogous_palette(base_hue: u16) -> Vec<Color> {
    vec![
        color((base_hue + 320) % 360, 70, 40),
        color((base_hue + 340) % 360, 70, 50),
        color(base_hue, 70, 60),
        color((base_hue + 20) % 360, 70, 50),
        color((base_hue + 40) % 360, 70, 40),
    ]
}

pub fn triadic_palette(base_hue: u16) -> Vec<Color> {
    let triad1 = (base_hue + 120) % 360;
    let triad2 = (base_hue + 240) % 360;
    vec![
        color(base_hue, 70, 50),
        color(base_hue, 60, 70),
        color(triad1, 70, 50),
        color(triad1, 60, 70),
        color(triad2, 70, 50),
    ]
}

pub fn monochromatic_palette(base_hue: u16) -> Vec<Color> {
    vec![
        color(base_hue, 70, 30),
        color(base_hue, 70, 45),
        color(base_hue, 70, 60),
        color(base_hue, 70, 75),
        color(base_hue, 70, 90),
    ]
}

/// The only non-reproducible generator: hue 0..360, saturation 60..90,
/// lightness 30..70.
pub fn random_palette(rng: &mut impl Rng) -> Vec<Color> {
    (0..5)
        .map(|_| {
            let h = rng.gen_range(0..360u16);
            let s = rng.gen_range(60..90u16);
            let l = rng.gen_range(30..70u16);
            color(h, s, l)
        })
        .collect()
}

fn color(h: u16, s: u16, l: u16) -> Color {
    Color::from_rgb(hsl_to_rgb_f(h as f64, s as f64, l as f64))
}
