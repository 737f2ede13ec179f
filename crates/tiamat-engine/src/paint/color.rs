/// Straight-alpha sRGB color, one byte per channel.
///
/// Invariant:
/// - channels are NOT premultiplied; compositing surfaces premultiply as
///   required by their blend configuration.
///
/// Rationale:
/// - wave colors enter the engine as user-facing hex strings and leave as
///   gradient stops; byte channels round-trip hex exactly.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    /// Returns the same color with the given alpha byte.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RRGGBBAA`, or `RRGGBBAA`.
    ///
    /// Six-digit input is opaque. Returns `None` for any other shape;
    /// callers that must stay total use [`from_hex_lossy`](Self::from_hex_lossy).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if !digits.is_ascii() {
            return None;
        }

        let byte_at = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();

        match digits.len() {
            6 => Some(Self::opaque(byte_at(0)?, byte_at(2)?, byte_at(4)?)),
            8 => Some(Self::new(byte_at(0)?, byte_at(2)?, byte_at(4)?, byte_at(6)?)),
            _ => None,
        }
    }

    /// Like [`from_hex`](Self::from_hex), degrading to opaque black on
    /// malformed input instead of failing. Keeps color resolution total.
    #[inline]
    pub fn from_hex_lossy(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(Self::black)
    }

    /// Formats as lowercase `#rrggbb` (alpha dropped).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats as lowercase `#rrggbbaa`.
    pub fn to_hex8(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// HSL triple: hue in degrees `[0, 360)`, saturation/lightness in percent
/// `[0, 100]`, each rounded to the nearest whole value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts a 6-digit hex color to HSL.
    ///
    /// Malformed input degrades to `{h: 0, s: 0, l: 0}` rather than failing;
    /// gradient derivation must never abort the frame.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        let Some(rgb) = parse_rgb6(digits) else {
            return Self::default();
        };

        let r = rgb.0 as f64 / 255.0;
        let g = rgb.1 as f64 / 255.0;
        let b = rgb.2 as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue and saturation are undefined, report zero.
            return Self::new(0.0, 0.0, (l * 100.0).round());
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;

        Self::new((h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round())
    }

    /// Converts back to an opaque [`Rgba8`].
    pub fn to_rgba8(self) -> Rgba8 {
        let l = self.l / 100.0;
        let a = (self.s * l.min(1.0 - l)) / 100.0;

        let channel = |n: f64| -> u8 {
            let k = (n + self.h / 30.0) % 12.0;
            let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * c).round().clamp(0.0, 255.0) as u8
        };

        Rgba8::opaque(channel(0.0), channel(8.0), channel(4.0))
    }
}

fn parse_rgb6(digits: &str) -> Option<(u8, u8, u8)> {
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let byte_at = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((byte_at(0)?, byte_at(2)?, byte_at(4)?))
}

/// Derives the distal gradient stop for a wave fill: hue rotated by −20°
/// (wrapped into `[0, 360)`), lightness raised by +20 (clamped to 100),
/// fully transparent.
///
/// The wave fades from its solid base color at the crest to this color at
/// the layout's gradient stop.
pub fn gradient_end_color(base_hex: &str) -> Rgba8 {
    let hsl = Hsl::from_hex(base_hex.trim());
    let shifted = Hsl::new(
        (hsl.h - 20.0).rem_euclid(360.0),
        hsl.s,
        (hsl.l + 20.0).min(100.0),
    );
    shifted.to_rgba8().with_alpha(0)
}
