use crate::graph::Race;

use super::EmphasisTier;

pub const DIMMED_OPACITY: f32 = 0.3;
pub const DIMMED_EDGE_OPACITY: f32 = 0.1;
pub const DIMMED_DARKEN: f32 = 0.52;

const NEUTRAL_EDGE_OPACITY_FLOOR: f32 = 0.2;
const NEUTRAL_EDGE_OPACITY_CEILING: f32 = 0.8;

const EDGE_BASE: Rgb = Rgb {
    r: 220,
    g: 224,
    b: 232,
};
const FALLBACK: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        // `from_str_radix` tolerates a leading sign; only bare digits are a color.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        Some(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn darken(self, factor: f32) -> Rgb {
        let factor = factor.clamp(0.0, 1.0);
        Rgb {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    pub color: Rgb,
    pub opacity: f32,
}

// Hover-only dimming fades opacity alone; an active selection darkens the
// dimmed remainder as well.
pub fn node_style(tier: EmphasisTier, race: Race, selection_active: bool) -> NodeStyle {
    let base = Rgb::from_hex(race.base_color()).unwrap_or(FALLBACK);

    match tier {
        EmphasisTier::Selected
        | EmphasisTier::Hovered
        | EmphasisTier::ConnectedToBoth
        | EmphasisTier::ConnectedToSelected
        | EmphasisTier::ConnectedToHovered
        | EmphasisTier::Neutral => NodeStyle {
            color: base,
            opacity: 1.0,
        },
        EmphasisTier::Dimmed => NodeStyle {
            color: if selection_active {
                base.darken(DIMMED_DARKEN)
            } else {
                base
            },
            opacity: DIMMED_OPACITY,
        },
    }
}

pub fn edge_style(tier: EmphasisTier, weight: u64, max_weight: u64) -> EdgeStyle {
    match tier {
        EmphasisTier::Selected
        | EmphasisTier::Hovered
        | EmphasisTier::ConnectedToBoth
        | EmphasisTier::ConnectedToSelected
        | EmphasisTier::ConnectedToHovered => EdgeStyle {
            color: EDGE_BASE,
            opacity: 1.0,
        },
        EmphasisTier::Neutral => EdgeStyle {
            color: EDGE_BASE,
            opacity: neutral_edge_opacity(weight, max_weight),
        },
        EmphasisTier::Dimmed => EdgeStyle {
            color: EDGE_BASE.darken(DIMMED_DARKEN),
            opacity: DIMMED_EDGE_OPACITY,
        },
    }
}

pub fn neutral_edge_opacity(weight: u64, max_weight: u64) -> f32 {
    let ratio = (weight as f32 / max_weight.max(1) as f32).clamp(0.0, 1.0);
    ((NEUTRAL_EDGE_OPACITY_FLOOR * (1.0 - ratio)) + (NEUTRAL_EDGE_OPACITY_CEILING * ratio))
        .clamp(NEUTRAL_EDGE_OPACITY_FLOOR, NEUTRAL_EDGE_OPACITY_CEILING)
}
