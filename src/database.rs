//! The named-color database
//!
//! A [`ColorDatabase`] maps case-insensitive names to color values. It is
//! pre-populated with the standard palette, accepts custom entries, and
//! supports reverse (value → name) lookup. A handful of names carry
//! different values under the CSS and Legacy naming schemes; the active
//! [`Scheme`] selects which value lookups return.
//!
//! The database is an explicitly constructed instance, not process-wide
//! state: build one with [`ColorDatabase::new`] and pass it where it is
//! needed. It is plain data — callers sharing one across threads put it
//! behind their own lock.
//!
//! # Examples
//!
//! ```
//! use swatch::{Color, ColorDatabase, Scheme};
//!
//! let mut db = ColorDatabase::new();
//! assert_eq!(db.find("Green"), Color::rgb(0, 128, 0));
//!
//! db.use_scheme(Scheme::Legacy);
//! assert_eq!(db.find("Green"), Color::rgb(0, 255, 0));
//! ```

use rustc_hash::FxHashMap;

use crate::color::{Color, ColorFormat, Rgba};
use crate::error::{ParseColorError, Result};
use crate::palette;

/// Naming convention determining the value of contested color names
///
/// Most names resolve identically under both schemes; the exceptions are
/// the historical clashes (`green`, `gray`/`grey`, `maroon`, `purple`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// CSS values: `green` is `(0, 128, 0)`
    #[default]
    Css,
    /// Historical X11-derived values: `green` is `(0, 255, 0)`
    Legacy,
}

#[derive(Debug, Clone)]
struct Entry {
    /// Display form of the name, as first registered
    name: String,
    css: Rgba,
    /// Set only for names whose Legacy value differs from the CSS one
    legacy: Option<Rgba>,
}

impl Entry {
    fn resolve(&self, scheme: Scheme) -> Rgba {
        match scheme {
            Scheme::Css => self.css,
            Scheme::Legacy => self.legacy.unwrap_or(self.css),
        }
    }
}

/// Case-insensitive name → color table with scheme-aware lookup
///
/// # Examples
///
/// ```
/// use swatch::{Color, ColorDatabase, Rgba};
///
/// let mut db = ColorDatabase::new();
/// db.add_color("NQB", Rgba::from_packed_rgb(0x010203)); // not quite black
/// assert_eq!(db.find("nqb"), Color::rgb(1, 2, 3));
/// assert_eq!(db.find_name(Color::rgb(1, 2, 3)).as_deref(), Some("NQB"));
/// ```
#[derive(Debug, Clone)]
pub struct ColorDatabase {
    /// Keyed by the lowercased name
    entries: FxHashMap<String, Entry>,
    scheme: Scheme,
}

impl Default for ColorDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorDatabase {
    /// Creates a database pre-populated with the standard palette
    ///
    /// The CSS scheme is active initially.
    pub fn new() -> Self {
        let mut entries = FxHashMap::default();
        for &(name, value) in palette::CSS_PALETTE {
            entries.insert(
                name.to_string(),
                Entry {
                    name: name.to_string(),
                    css: value,
                    legacy: None,
                },
            );
        }
        for &(name, value) in palette::LEGACY_OVERRIDES {
            if let Some(entry) = entries.get_mut(name) {
                entry.legacy = Some(value);
            }
        }
        Self {
            entries,
            scheme: Scheme::default(),
        }
    }

    /// Inserts or overwrites an entry under the given name
    ///
    /// The key is case-insensitive; the spelling passed here is what
    /// [`all_names`](Self::all_names) and reverse lookup report back.
    /// Custom entries resolve identically under both schemes. Other
    /// entries aliasing the same value are not disturbed.
    pub fn add_color(&mut self, name: &str, color: Rgba) {
        self.entries.insert(
            name.to_lowercase(),
            Entry {
                name: name.to_string(),
                css: color,
                legacy: None,
            },
        );
    }

    /// Looks up a name under the active scheme
    ///
    /// Returns the unset [`Color`] when the name is unknown; callers check
    /// with [`Color::is_valid`].
    pub fn find(&self, name: &str) -> Color {
        self.find_in_scheme(name, self.scheme)
    }

    /// Looks up a name under an explicitly chosen scheme
    ///
    /// Same contract as [`find`](Self::find), with the scheme passed as a
    /// parameter instead of read from database state.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::{Color, ColorDatabase, Scheme};
    ///
    /// let db = ColorDatabase::new();
    /// assert_eq!(db.find_in_scheme("green", Scheme::Legacy), Color::rgb(0, 255, 0));
    /// assert_eq!(db.find_in_scheme("green", Scheme::Css), Color::rgb(0, 128, 0));
    /// ```
    pub fn find_in_scheme(&self, name: &str, scheme: Scheme) -> Color {
        match self.entries.get(&name.to_lowercase()) {
            Some(entry) => Color::from(entry.resolve(scheme)),
            None => Color::default(),
        }
    }

    /// Reverse lookup: some name whose value exactly equals `color`
    ///
    /// The match is channel-wise, alpha included, under the active scheme.
    /// When several names alias the value, the alphabetically first display
    /// name is returned, so the choice is stable for a given table state.
    pub fn find_name(&self, color: Color) -> Option<String> {
        let rgba = color.channels()?;
        self.entries
            .values()
            .filter(|entry| entry.resolve(self.scheme) == rgba)
            .map(|entry| entry.name.as_str())
            .min()
            .map(str::to_string)
    }

    /// Every known display name, sorted
    ///
    /// The order is stable across calls absent mutation, and each returned
    /// name resolves through [`find`](Self::find).
    pub fn all_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.values().map(|e| e.name.clone()).collect();
        names.sort_unstable();
        names
    }

    /// Switches the active scheme
    ///
    /// Affects subsequent lookups only; values already retrieved keep the
    /// channels they were retrieved with.
    pub fn use_scheme(&mut self, scheme: Scheme) {
        self.scheme = scheme;
    }

    /// The currently active scheme
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Parses any recognized textual form, named colors included
    ///
    /// Tries the grammars of [`Color::parse`] first, then a name lookup
    /// under the active scheme. All-or-nothing like `Color::parse`: an
    /// unknown name reports [`ParseColorError::InvalidFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::{Color, ColorDatabase};
    ///
    /// let db = ColorDatabase::new();
    /// assert_eq!(db.parse("red")?, Color::rgb(255, 0, 0));
    /// assert_eq!(db.parse("#FF0000")?, Color::rgb(255, 0, 0));
    /// assert!(db.parse("no such color").is_err());
    /// # Ok::<(), swatch::ParseColorError>(())
    /// ```
    pub fn parse(&self, s: &str) -> Result<Color> {
        let s = s.trim();
        match Color::parse(s) {
            Err(ParseColorError::InvalidFormat(_)) => {
                let found = self.find(s);
                if found.is_valid() {
                    Ok(found)
                } else {
                    Err(ParseColorError::InvalidFormat(s.to_string()))
                }
            }
            other => other,
        }
    }

    /// Formats a color in the requested mode
    ///
    /// Name mode prefers the table name when reverse lookup matches the
    /// exact value, falling back to the CSS form. Every mode formats the
    /// unset color as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch::{ColorFormat, ColorDatabase};
    ///
    /// let db = ColorDatabase::new();
    /// let red = db.find("red");
    /// assert_eq!(db.format(red, ColorFormat::Name), "red");
    /// assert_eq!(db.format(red, ColorFormat::Css), "rgb(255, 0, 0)");
    /// assert_eq!(db.format(red, ColorFormat::Hex), "#FF0000");
    /// ```
    pub fn format(&self, color: Color, format: ColorFormat) -> String {
        match format {
            ColorFormat::Name => match self.find_name(color) {
                Some(name) => name,
                None => color.to_css_string(),
            },
            ColorFormat::Css => color.to_css_string(),
            ColorFormat::Hex => color.to_hex_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_before_any_setup() {
        let db = ColorDatabase::new();
        assert!(db.find("black").is_valid());
        assert!(db.all_names().len() > 100);
    }

    #[test]
    fn find_is_case_insensitive() {
        let db = ColorDatabase::new();
        let lower = db.find("cornflowerblue");
        assert_eq!(db.find("CornflowerBlue"), lower);
        assert_eq!(db.find("CORNFLOWERBLUE"), lower);
    }

    #[test]
    fn unknown_name_yields_unset() {
        let db = ColorDatabase::new();
        let c = db.find("definitely not a color");
        assert!(!c.is_valid());
    }

    #[test]
    fn add_color_overwrites_without_touching_aliases() {
        let mut db = ColorDatabase::new();
        db.add_color("aqua", Rgba::opaque(1, 1, 1));
        assert_eq!(db.find("aqua"), Color::rgb(1, 1, 1));
        // "cyan" aliased the old value and must keep it.
        assert_eq!(db.find("cyan"), Color::rgb(0, 255, 255));
    }

    #[test]
    fn custom_entries_ignore_scheme() {
        let mut db = ColorDatabase::new();
        db.add_color("hull", Rgba::opaque(10, 20, 30));
        db.use_scheme(Scheme::Legacy);
        assert_eq!(db.find("hull"), Color::rgb(10, 20, 30));
    }

    #[test]
    fn find_name_prefers_stable_alias() {
        let db = ColorDatabase::new();
        // aqua and cyan share a value; the alphabetically first name wins.
        let name = db.find_name(Color::rgb(0, 255, 255));
        assert_eq!(name.as_deref(), Some("aqua"));
        // Repeat lookups agree.
        assert_eq!(db.find_name(Color::rgb(0, 255, 255)), name);
    }

    #[test]
    fn find_name_requires_exact_channels() {
        let db = ColorDatabase::new();
        assert!(db.find_name(Color::rgb(255, 0, 0)).is_some());
        assert_eq!(db.find_name(Color::rgba(255, 0, 0, 254)), None);
        assert_eq!(db.find_name(Color::default()), None);
    }

    #[test]
    fn scheme_switch_changes_contested_names_only() {
        let mut db = ColorDatabase::new();
        let css_navy = db.find("navy");
        assert_eq!(db.find("green"), Color::rgb(0, 128, 0));

        db.use_scheme(Scheme::Legacy);
        assert_eq!(db.scheme(), Scheme::Legacy);
        assert_eq!(db.find("green"), Color::rgb(0, 255, 0));
        assert_eq!(db.find("navy"), css_navy);

        db.use_scheme(Scheme::Css);
        assert_eq!(db.find("green"), Color::rgb(0, 128, 0));
    }

    #[test]
    fn scheme_explicit_lookup_matches_active_scheme_lookup() {
        let mut db = ColorDatabase::new();
        for name in ["green", "maroon", "snow"] {
            let css = db.find_in_scheme(name, Scheme::Css);
            let legacy = db.find_in_scheme(name, Scheme::Legacy);

            assert_eq!(db.find(name), css);
            db.use_scheme(Scheme::Legacy);
            assert_eq!(db.find(name), legacy);
            db.use_scheme(Scheme::Css);
        }
    }

    #[test]
    fn parse_resolves_names_through_active_scheme() {
        let mut db = ColorDatabase::new();
        assert_eq!(db.parse("green").unwrap(), Color::rgb(0, 128, 0));
        db.use_scheme(Scheme::Legacy);
        assert_eq!(db.parse("green").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn parse_keeps_grammar_errors_intact() {
        let db = ColorDatabase::new();
        // A malformed rgba() must not fall through to name lookup.
        assert_eq!(
            db.parse("rgba(1, 2, 3, foo)").unwrap_err(),
            ParseColorError::InvalidComponent("foo".to_string())
        );
        assert_eq!(
            db.parse("no such color").unwrap_err(),
            ParseColorError::InvalidFormat("no such color".to_string())
        );
    }

    #[test]
    fn format_name_mode_falls_back_to_css() {
        let db = ColorDatabase::new();
        let unnamed = Color::rgb(1, 2, 3);
        assert_eq!(db.format(unnamed, ColorFormat::Name), "rgb(1, 2, 3)");
        assert_eq!(db.format(Color::default(), ColorFormat::Name), "");
    }
}
