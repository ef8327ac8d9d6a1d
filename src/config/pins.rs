//! Output line assignment and polarity.

use serde::Deserialize;

/// Pin identifiers of the output lines.
///
/// Identifiers are physical header pin numbers (Raspberry Pi `BOARD`
/// numbering); they name lines in logs and let a platform layer look up its
/// pins. The defaults 8/10/12 are BCM GPIO 14/15/18. The driver itself owns
/// pin objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinAssignment {
    /// STEP line pin.
    pub step: u8,

    /// DIR line pin.
    pub dir: u8,

    /// Optional enable line pin.
    ///
    /// Left out of a `[pins]` table it means "no enable line".
    #[serde(default)]
    pub enable: Option<u8>,
}

impl PinAssignment {
    /// Iterate over the assigned pin ids.
    pub fn ids(&self) -> impl Iterator<Item = u8> {
        [Some(self.step), Some(self.dir), self.enable]
            .into_iter()
            .flatten()
    }
}

/// BCM GPIO number of a 40-pin header pin, `None` for power, ground and
/// out-of-range pins.
pub fn board_to_bcm(board: u8) -> Option<u8> {
    let bcm = match board {
        3 => 2,
        5 => 3,
        7 => 4,
        8 => 14,
        10 => 15,
        11 => 17,
        12 => 18,
        13 => 27,
        15 => 22,
        16 => 23,
        18 => 24,
        19 => 10,
        21 => 9,
        22 => 25,
        23 => 11,
        24 => 8,
        26 => 7,
        27 => 0,
        28 => 1,
        29 => 5,
        31 => 6,
        32 => 12,
        33 => 13,
        35 => 19,
        36 => 16,
        37 => 26,
        38 => 20,
        40 => 21,
        _ => return None,
    };
    Some(bcm)
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            step: 8,
            dir: 10,
            enable: Some(12),
        }
    }
}

/// Electrical level that means "driver enabled" on the enable line.
///
/// Must match the wiring of the actual driver board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnablePolarity {
    /// LOW enables the power stage (TB6600 style).
    #[default]
    ActiveLow,
    /// HIGH enables the power stage.
    ActiveHigh,
}

impl EnablePolarity {
    /// Pin level for the given logical enable state.
    #[inline]
    pub fn level(self, enabled: bool) -> bool {
        match self {
            EnablePolarity::ActiveLow => !enabled,
            EnablePolarity::ActiveHigh => enabled,
        }
    }
}
