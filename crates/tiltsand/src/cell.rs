//! Cell, Kind and Color types for the simulation grid.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

/// Palette index. 0 is the background; every element color is non-zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Color(pub u8);

/// RGB values indexed by palette index.
const RGB: [u32; 12] = [
    0x00_0000, // background
    0xff_ae00, 0xff_b619, 0xff_bc2b, 0xff_c240, // sand
    0x7d_7d7d, 0x4d_4d4d, 0x33_3333, // stone
    0x00_aaff, 0x00_99ff, 0x00_88ff, 0x00_77ff, // water
];

pub const SAND_COLORS: [Color; 4] = [Color(1), Color(2), Color(3), Color(4)];
pub const STONE_COLORS: [Color; 3] = [Color(5), Color(6), Color(7)];
pub const WATER_COLORS: [Color; 4] = [Color(8), Color(9), Color(10), Color(11)];

impl Color {
    pub const BACKGROUND: Color = Color(0);

    /// 24-bit RGB for this palette index, black when the index is unknown.
    #[must_use]
    pub fn rgb(self) -> u32 {
        RGB.get(usize::from(self.0)).copied().unwrap_or(0)
    }
}

/// Kind of element a spawn request asks for.
///
/// Discriminants cross the WASM boundary as `u8` — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Sand = 0,
    Water = 1,
    Stone = 2,
}

impl Kind {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Sand),
            1 => Some(Self::Water),
            2 => Some(Self::Stone),
            _ => None,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static [Color] {
        match self {
            Self::Sand => &SAND_COLORS,
            Self::Water => &WATER_COLORS,
            Self::Stone => &STONE_COLORS,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sand => write!(f, "sand"),
            Self::Water => write!(f, "water"),
            Self::Stone => write!(f, "stone"),
        }
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sand" => Ok(Self::Sand),
            "water" => Ok(Self::Water),
            "stone" => Ok(Self::Stone),
            other => Err(ParseKindError(other.to_owned())),
        }
    }
}

pub const DEFAULT_DISPERSION_RATE: u8 = 2;

/// Content of one grid slot.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Stone {
        color: Color,
    },
    Sand {
        color: Color,
        /// Carried along with the particle; movement is always one cell.
        velocity: f32,
    },
    Water {
        color: Color,
        /// Carried along with the particle; movement is always one cell.
        dispersion_rate: u8,
    },
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "empty"),
        }
    }
}

impl Cell {
    /// A fresh element of `kind` in `color`.
    #[must_use]
    pub fn new(kind: Kind, color: Color) -> Self {
        match kind {
            Kind::Sand => Self::Sand { color, velocity: 0.0 },
            Kind::Water => Self::Water {
                color,
                dispersion_rate: DEFAULT_DISPERSION_RATE,
            },
            Kind::Stone => Self::Stone { color },
        }
    }

    /// A fresh element of `kind` with a color drawn uniformly from its palette.
    pub fn spawn<R: Rng + ?Sized>(kind: Kind, rng: &mut R) -> Self {
        let palette = kind.palette();
        let color = palette[rng.gen_range(0..palette.len())];
        Self::new(kind, color)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        match self {
            Self::Empty => None,
            Self::Stone { .. } => Some(Kind::Stone),
            Self::Sand { .. } => Some(Kind::Sand),
            Self::Water { .. } => Some(Kind::Water),
        }
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match *self {
            Self::Empty => None,
            Self::Stone { color } | Self::Sand { color, .. } | Self::Water { color, .. } => {
                Some(color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kind_discriminant_values() {
        assert_eq!(Kind::Sand as u8, 0);
        assert_eq!(Kind::Water as u8, 1);
        assert_eq!(Kind::Stone as u8, 2);
        assert_eq!(Kind::from_u8(1), Some(Kind::Water));
        assert_eq!(Kind::from_u8(3), None);
    }

    #[test]
    fn kind_parses_lowercase_names() {
        assert_eq!("sand".parse::<Kind>().unwrap(), Kind::Sand);
        assert_eq!("stone".parse::<Kind>().unwrap(), Kind::Stone);
        assert_eq!(
            "lava".parse::<Kind>().unwrap_err(),
            ParseKindError("lava".to_owned())
        );
        assert_eq!(Kind::Water.to_string(), "water");
    }

    #[test]
    fn cell_constructors() {
        let sand = Cell::new(Kind::Sand, Color(2));
        assert_eq!(sand, Cell::Sand { color: Color(2), velocity: 0.0 });
        assert_eq!(sand.kind(), Some(Kind::Sand));

        let water = Cell::new(Kind::Water, Color(8));
        assert_eq!(
            water,
            Cell::Water { color: Color(8), dispersion_rate: DEFAULT_DISPERSION_RATE }
        );

        assert_eq!(Cell::new(Kind::Stone, Color(5)).color(), Some(Color(5)));
    }

    #[test]
    fn cell_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().kind(), None);
        assert_eq!(Cell::default().color(), None);
    }

    #[test]
    fn palette_rgb_lookup() {
        assert_eq!(Color::BACKGROUND.rgb(), 0);
        assert_eq!(SAND_COLORS[0].rgb(), 0xff_ae00);
        assert_eq!(STONE_COLORS[2].rgb(), 0x33_3333);
        assert_eq!(WATER_COLORS[3].rgb(), 0x00_77ff);
        assert_eq!(Color(200).rgb(), 0);
    }

    proptest! {
        #[test]
        fn prop_spawned_color_comes_from_kind_palette(seed in any::<u64>(), raw in 0u8..3) {
            let kind = Kind::from_u8(raw).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let cell = Cell::spawn(kind, &mut rng);
            prop_assert_eq!(cell.kind(), Some(kind));
            prop_assert!(kind.palette().contains(&cell.color().unwrap()));
        }
    }
}
