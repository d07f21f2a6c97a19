use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub mod blindness;
pub mod contrast;
pub mod convert;
pub mod generate;
pub mod gradient;
pub mod harmony;

pub use blindness::{VisionDeficiency, simulate};
pub use contrast::{ContrastRating, contrast_ratio, relative_luminance};
pub use convert::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hsl};
pub use generate::{PaletteKind, hash_keyword, keyword_palette};
pub use gradient::{Gradient, GradientKind, GradientStop};
pub use harmony::{analogous, complementary, shades, tints, triadic};

pub fn version() -> &'static str {
    "0.1.0"
}

/// A palette entry: the canonical hex form paired with its RGB value.
/// The two are always constructed together so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub rgb: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Color {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb.hex(),
            rgb,
            name: None,
        }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    /// Parse a hex string into its canonical form. None when the
    /// string is not a 6-digit hex color.
    pub fn parse(hex: &str) -> Option<Self> {
        hex_to_rgb(hex).map(Self::from_rgb)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A stored palette: its colors, who owns it, and whether it is shared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRecord {
    pub colors: Vec<Color>,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub public: bool,
}

impl PaletteRecord {
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            owner: None,
            public: false,
        }
    }
}

/// A stored gradient together with its rendered CSS declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientRecord {
    pub gradient: Gradient,
    pub css: String,
}

impl GradientRecord {
    pub fn new(gradient: Gradient) -> Self {
        let css = gradient.css();
        Self { gradient, css }
    }
}

/// A library is the top-level document we save/load: named palettes
/// and gradients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Library {
    pub name: String,

    #[serde(default)]
    pub palettes: BTreeMap<String, PaletteRecord>,

    #[serde(default)]
    pub gradients: BTreeMap<String, GradientRecord>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            palettes: BTreeMap::new(),
            gradients: BTreeMap::new(),
        }
    }

    pub fn add_palette(&mut self, name: impl Into<String>, record: PaletteRecord) -> anyhow::Result<()> {
        let name = name.into();
        if self.palettes.contains_key(&name) {
            anyhow::bail!("palette '{}' already exists", name);
        }
        self.palettes.insert(name, record);
        Ok(())
    }

    pub fn add_gradient(&mut self, name: impl Into<String>, record: GradientRecord) -> anyhow::Result<()> {
        let name = name.into();
        if self.gradients.contains_key(&name) {
            anyhow::bail!("gradient '{}' already exists", name);
        }
        self.gradients.insert(name, record);
        Ok(())
    }

    /// Save the library to JSON.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize library to json")?;
        fs::write(path.as_ref(), json).context("write library json file")?;
        Ok(())
    }

    /// Load the library from JSON.
    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read library json file")?;
        let library = serde_json::from_str::<Library>(&text).context("parse library json")?;
        Ok(library)
    }
}

/// A starter library with one palette and one gradient, handy for
/// seeding a fresh file.
pub fn default_library() -> Library {
    let mut library = Library::new("Default Library");

    let colors = vec![
        Color::from_rgb(Rgb::new(38, 70, 83)),
        Color::from_rgb(Rgb::new(42, 157, 143)),
        Color::from_rgb(Rgb::new(233, 196, 106)),
        Color::from_rgb(Rgb::new(244, 162, 97)),
        Color::from_rgb(Rgb::new(231, 111, 81)),
    ];
    library
        .palettes
        .insert("earth".to_string(), PaletteRecord::new(colors));
    library
        .gradients
        .insert("indigo".to_string(), GradientRecord::new(Gradient::new()));

    library
}
