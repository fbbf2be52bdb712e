//! RGB color storage, hex conversion, and perceptual distance.

/// Luminance weight for the red channel.
pub const LUMA_R: f32 = 0.30;

/// Luminance weight for the green channel.
pub const LUMA_G: f32 = 0.59;

/// Luminance weight for the blue channel.
pub const LUMA_B: f32 = 0.11;

/// Normalized RGB color, components in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
  pub r: f32,
  pub g: f32,
  pub b: f32,
}

/// Fallback color for cells with missing or unparsable color data.
pub const DEFAULT_GRAY: Rgb = Rgb {
  r: 128.0 / 255.0,
  g: 128.0 / 255.0,
  b: 128.0 / 255.0,
};

impl Rgb {
  pub fn new(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b }
  }

  /// Build from a packed 0xRRGGBB integer.
  pub fn from_hex(hex: u32) -> Self {
    Self {
      r: ((hex >> 16) & 0xFF) as f32 / 255.0,
      g: ((hex >> 8) & 0xFF) as f32 / 255.0,
      b: (hex & 0xFF) as f32 / 255.0,
    }
  }

  /// Pack into a 0xRRGGBB integer (channels rounded to the nearest byte).
  pub fn to_hex(self) -> u32 {
    let r = (self.r.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (self.g.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (self.b.clamp(0.0, 1.0) * 255.0).round() as u32;
    (r << 16) | (g << 8) | b
  }

  /// Format as `#RRGGBB`.
  pub fn hex_string(self) -> String {
    format!("#{:06X}", self.to_hex())
  }

  /// Parse `#RRGGBB` or `RRGGBB`. Returns `None` for anything else.
  pub fn parse_hex(text: &str) -> Option<Self> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.len() != 6 {
      return None;
    }
    u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
  }

  /// Luminance-biased Euclidean distance.
  ///
  /// Channel deltas are weighted 0.30/0.59/0.11 so that differences the eye
  /// notices most (green, then red) dominate the metric. Identical colors
  /// yield exactly 0.
  pub fn distance(self, other: Rgb) -> f32 {
    let dr = (self.r - other.r) * LUMA_R;
    let dg = (self.g - other.g) * LUMA_G;
    let db = (self.b - other.b) * LUMA_B;
    (dr * dr + dg * dg + db * db).sqrt()
  }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
