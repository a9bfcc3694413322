//! Simple color struct, created from an unsigned 32 representing RRGGBBAA
//! or from a CSS hex string like "#fff".

use crate::error::ParticleError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 0xff };
    pub const WHITE: Color = Color { r: 0xff, g: 0xff, b: 0xff, a: 0xff };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Color, ParticleError> {
        let invalid = || ParticleError::InvalidColor(hex.to_owned());
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let packed = match digits.len() {
            3 => {
                // each nibble doubles, so "f80" becomes "ff8800"
                let short = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let r = (short >> 8) & 0xf;
                let g = (short >> 4) & 0xf;
                let b = short & 0xf;
                (r * 0x11) << 24 | (g * 0x11) << 16 | (b * 0x11) << 8 | 0xff
            }
            6 => u32::from_str_radix(digits, 16).map_err(|_| invalid())? << 8 | 0xff,
            8 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        Ok(Color::from_u32(packed))
    }

    // The draw alpha is scaled by the color's own alpha channel
    pub fn to_css_rgba(&self, alpha: f64) -> String {
        let alpha = (alpha * self.a as f64 / 255.0).max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
