use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MIN_STOPS: usize = 2;
pub const MAX_STOPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(GradientKind::Linear),
            "radial" => Some(GradientKind::Radial),
            "conic" => Some(GradientKind::Conic),
            _ => None,
        }
    }
}

/// A color at a position along the gradient axis (percent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: u8,
}

impl GradientStop {
    pub fn new(color: impl Into<String>, position: u8) -> Self {
        Self {
            color: color.into(),
            position: position.min(100),
        }
    }
}

/// 2 to 5 stops, a kind tag and an angle (degrees, meaningful for
/// linear and conic). Stops keep their entry order; they are only
/// sorted by position when rendered to CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub angle: u16,
    pub stops: Vec<GradientStop>,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: 90,
            stops: vec![
                GradientStop::new("#6366F1", 0),
                GradientStop::new("#8B5CF6", 100),
            ],
        }
    }
}

impl Gradient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the `background:` declaration. Stops are sorted by
    /// position in the output; the stored order is untouched.
    pub fn css(&self) -> String {
        let mut sorted = self.stops.clone();
        sorted.sort_by_key(|stop| stop.position);

        let stops = sorted
            .iter()
            .map(|stop| format!("{} {}%", stop.color, stop.position))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            GradientKind::Linear => {
                format!("background: linear-gradient({}deg, {});", self.angle, stops)
            }
            GradientKind::Radial => format!("background: radial-gradient(circle, {});", stops),
            GradientKind::Conic => {
                format!("background: conic-gradient(from {}deg, {});", self.angle, stops)
            }
        }
    }

    /// Insert a randomly colored stop halfway through the current
    /// position range. At most 5 stops.
    pub fn add_stop(&mut self, rng: &mut impl Rng) -> anyhow::Result<()> {
        if self.stops.len() >= MAX_STOPS {
            anyhow::bail!("a gradient can have at most {MAX_STOPS} color stops");
        }

        let min = self.stops.iter().map(|s| s.position).min().unwrap_or(0);
        let max = self.stops.iter().map(|s| s.position).max().unwrap_or(100);
        let middle = (min as u16 + max as u16).div_ceil(2) as u8;

        self.stops.push(GradientStop::new(random_hex(rng), middle));
        Ok(())
    }

    /// Remove the stop at `index`. At least 2 stops must remain.
    pub fn remove_stop(&mut self, index: usize) -> anyhow::Result<()> {
        if self.stops.len() <= MIN_STOPS {
            anyhow::bail!("a gradient needs at least {MIN_STOPS} color stops");
        }
        if index >= self.stops.len() {
            anyhow::bail!("no stop at index {index}");
        }
        self.stops.remove(index);
        Ok(())
    }

    /// 2 to 4 random stops (endpoints pinned to 0 and 100), random kind
    /// and angle.
    pub fn random(rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(2..=4usize);
        let mut stops = Vec::with_capacity(count);
        for i in 0..count {
            let position = if i == 0 {
                0
            } else if i == count - 1 {
                100
            } else {
                rng.gen_range(10..90u8)
            };
            stops.push(GradientStop::new(random_hex(rng), position));
        }
        stops.sort_by_key(|stop| stop.position);

        let kind = match rng.gen_range(0..3u8) {
            0 => GradientKind::Linear,
            1 => GradientKind::Radial,
            _ => GradientKind::Conic,
        };

        Self {
            kind,
            angle: rng.gen_range(0..360u16),
            stops,
        }
    }
}

fn random_hex(rng: &mut impl Rng) -> String {
    format!("#{:06X}", rng.gen_range(0..0x1000000u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn default_linear_css() {
        assert_eq!(
            Gradient::new().css(),
            "background: linear-gradient(90deg, #6366F1 0%, #8B5CF6 100%);"
        );
    }

    #[test]
    fn css_sorts_stops_without_reordering_storage() {
        let g = Gradient {
            kind: GradientKind::Radial,
            angle: 0,
            stops: vec![
                GradientStop::new("#FF0000", 80),
                GradientStop::new("#00FF00", 20),
            ],
        };
        assert_eq!(
            g.css(),
            "background: radial-gradient(circle, #00FF00 20%, #FF0000 80%);"
        );
        // entry order survives rendering
        assert_eq!(g.stops[0].position, 80);
    }

    #[test]
    fn conic_css_includes_from_angle() {
        let g = Gradient {
            kind: GradientKind::Conic,
            angle: 45,
            stops: vec![
                GradientStop::new("#000000", 0),
                GradientStop::new("#FFFFFF", 100),
            ],
        };
        assert_eq!(
            g.css(),
            "background: conic-gradient(from 45deg, #000000 0%, #FFFFFF 100%);"
        );
    }

    #[test]
    fn stop_count_is_bounded() -> anyhow::Result<()> {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut g = Gradient::new();

        g.add_stop(&mut rng)?;
        g.add_stop(&mut rng)?;
        g.add_stop(&mut rng)?;
        assert_eq!(g.stops.len(), 5);
        assert!(g.add_stop(&mut rng).is_err());

        g.remove_stop(4)?;
        g.remove_stop(3)?;
        g.remove_stop(2)?;
        assert_eq!(g.stops.len(), 2);
        assert!(g.remove_stop(0).is_err());
        Ok(())
    }

    #[test]
    fn added_stop_lands_midway() -> anyhow::Result<()> {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut g = Gradient::new();
        g.add_stop(&mut rng)?;
        assert_eq!(g.stops[2].position, 50);
        Ok(())
    }

    #[test]
    fn random_gradient_is_well_formed() {
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let g = Gradient::random(&mut rng);
            assert!((MIN_STOPS..=4).contains(&g.stops.len()));
            assert_eq!(g.stops.first().map(|s| s.position), Some(0));
            assert_eq!(g.stops.last().map(|s| s.position), Some(100));
            assert!(g.angle < 360);
            assert!(g.css().starts_with("background: "));
        }
    }

    #[test]
    fn serde_round_trip() -> anyhow::Result<()> {
        let g = Gradient::new();
        let json = serde_json::to_string(&g)?;
        assert!(json.contains("\"linear\""));
        let back: Gradient = serde_json::from_str(&json)?;
        assert_eq!(back, g);
        Ok(())
    }
}
