use serde::{Deserialize, Serialize};

/// A colour on the board, as an RGB triple.
///
/// Colours are only ever compared for equality; there is no ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const PACIFIC_POINT: Colour = Colour::new(1, 128, 181);
pub const OLD_OLIVE: Colour = Colour::new(138, 151, 71);
pub const REAL_RED: Colour = Colour::new(199, 44, 58);
pub const DAFFODIL_DELIGHT: Colour = Colour::new(255, 211, 92);

/// The palette that boards are generated from.
pub const COLOUR_LIST: [Colour; 4] = [PACIFIC_POINT, OLD_OLIVE, REAL_RED, DAFFODIL_DELIGHT];

const NAMES: [(Colour, &str); 4] = [
    (PACIFIC_POINT, "Pacific Point"),
    (OLD_OLIVE, "Old Olive"),
    (REAL_RED, "Real Red"),
    (DAFFODIL_DELIGHT, "Daffodil Delight"),
];

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The display name of this colour, if it is one of the palette colours.
    pub fn name(self) -> Option<&'static str> {
        NAMES.iter().find(|(c, _)| *c == self).map(|&(_, name)| name)
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}
