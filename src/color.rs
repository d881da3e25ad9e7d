//! Color value types
//!
//! This module provides the toolkit's color abstraction: plain RGBA
//! channels ([`Rgba`]), the nullable color value ([`Color`]) that widgets
//! pass around, and the textual forms they parse from and format to.
//!
//! # Textual forms
//!
//! - `rgb(R, G, B)` — decimal channels 0-255
//! - `rgba(R, G, B, A)` — decimal channels plus an alpha in 0.0-1.0
//! - `#RRGGBB` — six hex digits, case-insensitive on input
//!
//! Named forms (`"red"`, `"cornflowerblue"`, ...) belong to
//! [`ColorDatabase`](crate::ColorDatabase), which resolves them against its
//! table and falls back to the grammars above.
//!
//! # Examples
//!
//! ```
//! use swatch::Color;
//!
//! let color = Color::parse("#ff8000")?;
//! assert_eq!(color.to_hex_string(), "#FF8000");
//! # Ok::<(), swatch::ParseColorError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseColorError, Result};

/// RGBA channels, a byte each
///
/// Always a valid color. Alpha runs from 0 (fully transparent) to 255
/// (fully opaque) and defaults to opaque in constructors that omit it.
///
/// # Examples
///
/// ```
/// use swatch::Rgba;
///
/// let orange = Rgba::opaque(255, 128, 0);
/// let half_blue = Rgba::new(0, 0, 255, 128);
/// assert!(orange.is_opaque());
/// assert!(half_blue.is_translucent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0 transparent - 255 opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Opaque white
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque red
    pub const RED: Self = Self::opaque(255, 0, 0);

    /// Opaque green
    pub const GREEN: Self = Self::opaque(0, 255, 0);

    /// Opaque blue
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// Creates a new RGBA color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque RGB color (alpha = 255)
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Rgba;
    ///
    /// let purple = Rgba::opaque(128, 0, 128);
    /// assert_eq!(purple.a, 255);
    /// ```
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpacks a `0x00RRGGBB` integer; the high byte is ignored and
    /// alpha is forced to opaque
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Rgba;
    ///
    /// let c = Rgba::from_packed_rgb(0x123456);
    /// assert_eq!((c.r, c.g, c.b, c.a), (0x12, 0x34, 0x56, 255));
    /// ```
    pub const fn from_packed_rgb(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
            a: 255,
        }
    }

    /// Unpacks a `0xAARRGGBB` integer, alpha included
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Rgba;
    ///
    /// let c = Rgba::from_packed_rgba(0xAABBCCDD);
    /// assert_eq!((c.r, c.g, c.b, c.a), (0xBB, 0xCC, 0xDD, 0xAA));
    /// ```
    pub const fn from_packed_rgba(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
            a: ((packed >> 24) & 0xff) as u8,
        }
    }

    /// Packs the RGB channels as `0x00RRGGBB`, discarding alpha
    pub const fn packed_rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Packs all four channels as `0xAARRGGBB`
    pub const fn packed_rgba(self) -> u32 {
        ((self.a as u32) << 24) | self.packed_rgb()
    }

    /// Returns the same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Returns true if the color is fully transparent (alpha 0)
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Returns true if the color is fully opaque (alpha 255)
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Returns true if the alpha is strictly between transparent and opaque
    pub const fn is_translucent(self) -> bool {
        self.a > 0 && self.a < 255
    }

    /// Relative brightness in [0.0, 1.0], Rec. 601 weighting
    ///
    /// Computed with integer weights (299/587/114) and a single division,
    /// so black is exactly 0.0 and white exactly 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Rgba;
    ///
    /// assert_eq!(Rgba::BLACK.luminance(), 0.0);
    /// assert_eq!(Rgba::WHITE.luminance(), 1.0);
    /// ```
    pub fn luminance(self) -> f64 {
        let weighted = 299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b);
        f64::from(weighted) / 255_000.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

/// A color value, either unset or a valid [`Rgba`]
///
/// The default-constructed `Color` is *unset*: distinguishable from every
/// valid channel combination, and formatting it yields the empty string in
/// every mode. Lookups that miss ([`ColorDatabase::find`]) return the unset
/// value rather than an error; check with [`is_valid`](Color::is_valid) or
/// match on [`channels`](Color::channels).
///
/// `Color` has value semantics: it is `Copy`, and assignment replaces the
/// represented color.
///
/// [`ColorDatabase::find`]: crate::ColorDatabase::find
///
/// # Examples
///
/// ```
/// use swatch::Color;
///
/// let unset = Color::default();
/// assert!(!unset.is_valid());
/// assert_eq!(unset.to_css_string(), "");
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.to_css_string(), "rgb(255, 0, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    channels: Option<Rgba>,
}

impl Color {
    /// The unset color, same as `Color::default()`
    pub const UNSET: Self = Self { channels: None };

    /// Creates an opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            channels: Some(Rgba::opaque(r, g, b)),
        }
    }

    /// Creates a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            channels: Some(Rgba::new(r, g, b, a)),
        }
    }

    /// Creates an opaque color from a packed `0x00RRGGBB` integer
    pub const fn from_packed_rgb(packed: u32) -> Self {
        Self {
            channels: Some(Rgba::from_packed_rgb(packed)),
        }
    }

    /// Creates a color from a packed `0xAARRGGBB` integer, alpha included
    pub const fn from_packed_rgba(packed: u32) -> Self {
        Self {
            channels: Some(Rgba::from_packed_rgba(packed)),
        }
    }

    /// Returns true unless this color is unset
    pub const fn is_valid(self) -> bool {
        self.channels.is_some()
    }

    /// The underlying channels, or `None` when unset
    pub const fn channels(self) -> Option<Rgba> {
        self.channels
    }

    /// Red channel; 0 when unset
    pub fn red(self) -> u8 {
        self.channels.map_or(0, |c| c.r)
    }

    /// Green channel; 0 when unset
    pub fn green(self) -> u8 {
        self.channels.map_or(0, |c| c.g)
    }

    /// Blue channel; 0 when unset
    pub fn blue(self) -> u8 {
        self.channels.map_or(0, |c| c.b)
    }

    /// Alpha channel; 0 when unset
    pub fn alpha(self) -> u8 {
        self.channels.map_or(0, |c| c.a)
    }

    /// Packed `0x00RRGGBB`; 0 when unset
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Color;
    ///
    /// let mut c = Color::default();
    /// c.set_packed_rgb(0x123456);
    /// assert_eq!(c.packed_rgb(), 0x123456);
    /// assert_eq!(c.alpha(), 255);
    /// ```
    pub fn packed_rgb(self) -> u32 {
        self.channels.map_or(0, Rgba::packed_rgb)
    }

    /// Packed `0xAARRGGBB`; 0 when unset
    pub fn packed_rgba(self) -> u32 {
        self.channels.map_or(0, Rgba::packed_rgba)
    }

    /// Replaces this color with a packed `0x00RRGGBB` value, alpha opaque
    pub fn set_packed_rgb(&mut self, packed: u32) {
        self.channels = Some(Rgba::from_packed_rgb(packed));
    }

    /// Replaces this color with a packed `0xAARRGGBB` value, alpha included
    pub fn set_packed_rgba(&mut self, packed: u32) {
        self.channels = Some(Rgba::from_packed_rgba(packed));
    }

    /// Returns the same color with a different alpha; unset stays unset
    pub fn with_alpha(self, a: u8) -> Self {
        Self {
            channels: self.channels.map(|c| c.with_alpha(a)),
        }
    }

    /// Relative brightness in [0.0, 1.0]; 0.0 when unset
    ///
    /// See [`Rgba::luminance`].
    pub fn luminance(self) -> f64 {
        self.channels.map_or(0.0, Rgba::luminance)
    }

    /// Returns true if valid and fully transparent
    pub fn is_transparent(self) -> bool {
        self.channels.is_some_and(Rgba::is_transparent)
    }

    /// Returns true if valid and fully opaque
    pub fn is_opaque(self) -> bool {
        self.channels.is_some_and(Rgba::is_opaque)
    }

    /// Returns true if valid and strictly between transparent and opaque
    pub fn is_translucent(self) -> bool {
        self.channels.is_some_and(Rgba::is_translucent)
    }

    /// Parses a color from one of the non-named textual forms
    ///
    /// Recognizes, in this order:
    /// - `rgb(R, G, B)` — exactly three decimal integers 0-255
    /// - `rgba(R, G, B, A)` — three integers plus an alpha in 0.0-1.0,
    ///   converted via round(A × 255)
    /// - `#RRGGBB` — exactly six hex digits, case-insensitive
    ///
    /// Surrounding whitespace is tolerated around the input and around
    /// each component. Parsing is all-or-nothing: failure returns an error
    /// and produces no value. Named colors are resolved by
    /// [`ColorDatabase::parse`](crate::ColorDatabase::parse).
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Color;
    ///
    /// assert_eq!(Color::parse("rgb(11, 22, 33)")?, Color::rgb(11, 22, 33));
    /// assert_eq!(Color::parse("rgba(11, 22, 33, 0.5)")?, Color::rgba(11, 22, 33, 128));
    /// assert_eq!(Color::parse("#aabbcc")?, Color::rgb(0xAA, 0xBB, 0xCC));
    /// assert!(Color::parse("rgb(1, 2)").is_err());
    /// # Ok::<(), swatch::ParseColorError>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(body) = function_body(s, "rgb") {
            return parse_rgb_function(s, body);
        }
        if let Some(body) = function_body(s, "rgba") {
            return parse_rgba_function(s, body);
        }
        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(s, digits);
        }

        Err(ParseColorError::InvalidFormat(s.to_string()))
    }

    /// CSS textual form: `rgb(R, G, B)`, or `rgba(R, G, B, A)` with the
    /// alpha printed as a 0-1 decimal when the color is not fully opaque
    ///
    /// Returns the empty string for an unset color.
    pub fn to_css_string(self) -> String {
        match self.channels {
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    /// HTML hex form: uppercase `#RRGGBB`, alpha discarded
    ///
    /// Returns the empty string for an unset color.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::Color;
    ///
    /// assert_eq!(Color::rgb(255, 0, 0).to_hex_string(), "#FF0000");
    /// assert_eq!(Color::default().to_hex_string(), "");
    /// ```
    pub fn to_hex_string(self) -> String {
        match self.channels {
            Some(c) => format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b),
            None => String::new(),
        }
    }
}

impl From<Rgba> for Color {
    fn from(channels: Rgba) -> Self {
        Self {
            channels: Some(channels),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channels {
            Some(c) => write!(f, "{}", c),
            None => Ok(()),
        }
    }
}

/// How a color is rendered back to text
///
/// All modes format the unset color as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFormat {
    /// The color's table name when reverse lookup matches exactly,
    /// falling back to the CSS form
    #[default]
    Name,
    /// `rgb(R, G, B)` / `rgba(R, G, B, A)`
    Css,
    /// Uppercase `#RRGGBB`
    Hex,
}

/// Strips `name(` and the closing `)`; None if the shape doesn't match
fn function_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_function(source: &str, body: &str) -> Result<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseColorError::InvalidFormat(source.to_string()));
    }

    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    Ok(Color::rgb(r, g, b))
}

fn parse_rgba_function(source: &str, body: &str) -> Result<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(ParseColorError::InvalidFormat(source.to_string()));
    }

    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = parse_alpha(parts[3])?;
    Ok(Color::rgba(r, g, b, a))
}

/// Parses a decimal channel value (0-255)
fn parse_channel(s: &str) -> Result<u8> {
    s.parse::<u8>()
        .map_err(|_| ParseColorError::InvalidComponent(s.to_string()))
}

/// Parses an alpha in 0.0-1.0 and rounds it onto the 0-255 channel scale
fn parse_alpha(s: &str) -> Result<u8> {
    let alpha = s
        .parse::<f64>()
        .map_err(|_| ParseColorError::InvalidComponent(s.to_string()))?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ParseColorError::OutOfRange(s.to_string()));
    }
    Ok((alpha * 255.0).round() as u8)
}

fn parse_hex(source: &str, digits: &str) -> Result<Color> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(source.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ParseColorError::InvalidHex(source.to_string()))
    };
    Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
