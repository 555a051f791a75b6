//! Deterministic vehicle display colours.
//!
//! A vehicle's colour is a pure function of its id string: a 32-bit
//! polynomial hash (`h = c + (h << 5) - h`, i.e. `h * 31 + c`, wrapping)
//! folded into a hue in `0..360`.  Saturation and lightness are fixed, so the
//! same id always renders in the same colour across runs and processes.

use std::fmt;

const SATURATION: f32 = 0.70;
const LIGHTNESS:  f32 = 0.50;

/// An HSL colour with fixed saturation (70 %) and lightness (50 %).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VehicleColor {
    /// Hue in degrees, `0..360`.
    pub hue: u16,
}

impl VehicleColor {
    /// Hash `key` into a colour.
    pub fn from_key(key: &str) -> Self {
        let hash = key
            .chars()
            .fold(0i32, |h, c| (c as i32).wrapping_add((h << 5).wrapping_sub(h)));
        VehicleColor { hue: (hash.unsigned_abs() % 360) as u16 }
    }

    /// Convert to 8-bit sRGB components.
    pub fn to_rgb(self) -> [u8; 3] {
        let h = self.hue as f32 / 60.0;
        let c = (1.0 - (2.0 * LIGHTNESS - 1.0).abs()) * SATURATION;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = LIGHTNESS - c / 2.0;
        let to_byte = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

impl fmt::Display for VehicleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            (SATURATION * 100.0).round() as u32,
            (LIGHTNESS * 100.0).round() as u32
        )
    }
}

impl From<VehicleColor> for String {
    fn from(c: VehicleColor) -> String {
        c.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for VehicleColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
