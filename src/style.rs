//! Text styles and their markup tags
//!
//! | tag                  | style                           |
//! |----------------------|---------------------------------|
//! | `<b>`                | `font-weight: bold`             |
//! | `<i>`                | `font-style: italic`            |
//! | `<u>`                | `text-decoration: underline`    |
//! | `<s>`                | `text-decoration: line-through` |
//! | `<font color="..">`  | `font-color: ..`                |
//! | `<font size="..">`   | `font-size: ..`                 |
//!
//! When styles are written back as markup they are nested in [`StyleKey`]
//! order, outermost first.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Color(String),
    Size(u32),
}

/// The property a [`Style`] sets, ordered the way nested tags are written
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKey {
    FontWeight,
    FontStyle,
    TextDecoration,
    FontSize,
    FontColor,
}

impl StyleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FontWeight => "font-weight",
            Self::FontStyle => "font-style",
            Self::TextDecoration => "text-decoration",
            Self::FontSize => "font-size",
            Self::FontColor => "font-color",
        }
    }
}

impl Style {
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Bold => StyleKey::FontWeight,
            Self::Italic => StyleKey::FontStyle,
            Self::Underline | Self::Strikethrough => StyleKey::TextDecoration,
            Self::Size(_) => StyleKey::FontSize,
            Self::Color(_) => StyleKey::FontColor,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Bold => "bold".to_owned(),
            Self::Italic => "italic".to_owned(),
            Self::Underline => "underline".to_owned(),
            Self::Strikethrough => "line-through".to_owned(),
            Self::Color(color) => color.clone(),
            Self::Size(size) => size.to_string(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key().as_str(), self.value())
    }
}

/// A set of styles holding at most one style per [`StyleKey`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(BTreeMap<StyleKey, Style>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a markup tag to the styles it sets
    ///
    /// A tag which sets no style at all, being either unknown or a `font`
    /// tag without `color` and `size`, is an error.
    pub fn from_tag<S: AsRef<str>>(
        name: S,
        attrs: &HashMap<String, String>,
    ) -> Result<Self> {
        let name = name.as_ref();
        let mut styles = Styles::new();
        match name {
            "b" => styles.insert(Style::Bold),
            "i" => styles.insert(Style::Italic),
            "u" => styles.insert(Style::Underline),
            "s" => styles.insert(Style::Strikethrough),
            "font" => {
                if let Some(color) = attrs.get("color") {
                    styles.insert(Style::Color(color.to_owned()));
                }
                if let Some(size) = attrs.get("size") {
                    styles.insert(Style::Size(parse_font_size(size)?));
                }
            }
            _ => {}
        }
        if styles.is_empty() {
            return Err(Error::UnknownMarkup {
                tag: name.to_owned(),
            });
        }
        Ok(styles)
    }

    /// Add `style`, replacing any style with the same key
    pub fn insert(&mut self, style: Style) {
        self.0.insert(style.key(), style);
    }

    pub fn with(mut self, style: Style) -> Self {
        self.insert(style);
        self
    }

    pub fn get(&self, key: StyleKey) -> Option<&Style> {
        self.0.get(&key)
    }

    pub fn contains(&self, style: &Style) -> bool {
        self.get(style.key()) == Some(style)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Styles in [`StyleKey`] order
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.0.values()
    }

    /// Opening and closing tags for these styles, outermost first
    ///
    /// `size` and `color` share a single `font` tag.
    pub fn tags(&self) -> Vec<(String, &'static str)> {
        let mut tags = vec![];
        let mut font = String::new();
        for style in self.iter() {
            match style {
                Style::Bold => tags.push(("<b>".to_owned(), "</b>")),
                Style::Italic => tags.push(("<i>".to_owned(), "</i>")),
                Style::Underline => tags.push(("<u>".to_owned(), "</u>")),
                Style::Strikethrough => tags.push(("<s>".to_owned(), "</s>")),
                Style::Size(size) => {
                    font.push_str(&format!(r#" size="{size}""#));
                }
                Style::Color(color) => {
                    let color = color.replace('&', "&amp;").replace('"', "&quot;");
                    font.push_str(&format!(r#" color="{color}""#));
                }
            }
        }
        if !font.is_empty() {
            tags.push((format!("<font{font}>"), "</font>"));
        }
        tags
    }
}

impl FromIterator<Style> for Styles {
    fn from_iter<T: IntoIterator<Item = Style>>(iter: T) -> Self {
        let mut styles = Styles::new();
        for style in iter {
            styles.insert(style);
        }
        styles
    }
}

impl<'a> IntoIterator for &'a Styles {
    type Item = &'a Style;
    type IntoIter = std::collections::btree_map::Values<'a, StyleKey, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

/// Absolute font sizes only: relative ones such as `+1` or `-2` are rejected
/// rather than being read as another size
fn parse_font_size(value: &str) -> Result<u32> {
    let digits = value.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::FontSize {
            value: value.to_owned(),
        });
    }
    digits.parse().map_err(|_| Error::FontSize {
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_tag() {
        let tcases = [
            ("b", Style::Bold),
            ("i", Style::Italic),
            ("u", Style::Underline),
            ("s", Style::Strikethrough),
        ];
        for (name, style) in tcases {
            let styles = Styles::from_tag(name, &HashMap::new()).unwrap();
            assert_eq!(styles.len(), 1);
            assert!(styles.contains(&style));
        }
    }

    #[test]
    fn test_font_tag_combines_attributes() {
        let styles =
            Styles::from_tag("font", &attrs(&[("color", "#ff0000"), ("size", "12")]))
                .unwrap();
        assert_eq!(
            styles.iter().cloned().collect::<Vec<_>>(),
            vec![Style::Size(12), Style::Color("#ff0000".into())]
        );
        let styles = Styles::from_tag("font", &attrs(&[("color", "red")])).unwrap();
        assert_eq!(styles.get(StyleKey::FontColor), Some(&Style::Color("red".into())));
        assert_eq!(styles.get(StyleKey::FontSize), None);
    }

    #[test]
    fn test_tag_without_style() {
        for (name, pairs) in [("blink", vec![]), ("font", vec![("face", "Arial")]), ("br", vec![])] {
            let err = Styles::from_tag(name, &attrs(&pairs)).unwrap_err();
            assert!(matches!(err, Error::UnknownMarkup { tag } if tag == name));
        }
        for size in ["+1", "-2", "", "1.5", "99999999999"] {
            let err = Styles::from_tag("font", &attrs(&[("size", size)])).unwrap_err();
            assert!(matches!(err, Error::FontSize { value } if value == size));
        }
        let styles = Styles::from_tag("font", &attrs(&[("size", " 3 ")])).unwrap();
        assert_eq!(styles.get(StyleKey::FontSize), Some(&Style::Size(3)));
    }

    #[test]
    fn test_insert_replaces_same_key() {
        let styles = Styles::new()
            .with(Style::Underline)
            .with(Style::Strikethrough);
        assert_eq!(styles.len(), 1);
        assert_eq!(
            styles.get(StyleKey::TextDecoration).map(|s| s.to_string()),
            Some("text-decoration: line-through".to_owned())
        );
    }

    #[test]
    fn test_tags_in_canonical_order() {
        let styles: Styles = [
            Style::Color("#00ff00".into()),
            Style::Italic,
            Style::Size(3),
            Style::Underline,
            Style::Bold,
        ]
        .into_iter()
        .collect();
        let opening = styles
            .tags()
            .into_iter()
            .map(|(open, _)| open)
            .collect::<String>();
        assert_eq!(opening, r##"<b><i><u><font size="3" color="#00ff00">"##);
        let closing = styles
            .tags()
            .iter()
            .rev()
            .map(|(_, close)| *close)
            .collect::<String>();
        assert_eq!(closing, "</font></u></i></b>");
    }
}
