//! Styled cue text tree
//!
//! The text of a cue is a tree: every [`CueText`] carries a set of
//! [`Styles`] and an ordered list of children, each child being either plain
//! text or another styled node. `<b><i>Hello</i> world</b>` becomes
//!
//! ```text
//! CueText (no style)
//! └── CueText (font-weight: bold)
//!     ├── CueText (font-style: italic)
//!     │   └── "Hello"
//!     └── " world"
//! ```
//!
//! The root of a cue never has styles of its own.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::markup::{MarkupNode, MarkupParser};
use crate::style::{Style, Styles};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueNode {
    Text(String),
    Styled(CueText),
}

impl CueNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Styled(_) => None,
        }
    }

    pub fn as_styled(&self) -> Option<&CueText> {
        match self {
            Self::Styled(node) => Some(node),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for CueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Styled(node) => node.fmt(f),
        }
    }
}

impl From<&str> for CueNode {
    fn from(text: &str) -> Self {
        CueNode::Text(text.to_owned())
    }
}

impl From<String> for CueNode {
    fn from(text: String) -> Self {
        CueNode::Text(text)
    }
}

impl From<CueText> for CueNode {
    fn from(node: CueText) -> Self {
        CueNode::Styled(node)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueText {
    children: Vec<CueNode>,
    styles: Styles,
}

impl CueText {
    pub fn new(children: Vec<CueNode>, styles: Styles) -> Self {
        Self { children, styles }
    }

    /// An unstyled root holding a single text child
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self::new(vec![CueNode::Text(text.into())], Styles::new())
    }

    pub fn styled(style: Style) -> Self {
        Self::new(vec![], Styles::new().with(style))
    }

    pub fn with_child<N: Into<CueNode>>(mut self, child: N) -> Self {
        self.children.push(child.into());
        self
    }

    /// Map markup nodes onto cue nodes, recursing into tagged elements
    pub fn from_markup(nodes: Vec<MarkupNode>) -> Result<Vec<CueNode>> {
        nodes
            .into_iter()
            .map(|node| match node {
                MarkupNode::Text(text) => Ok(CueNode::Text(text)),
                MarkupNode::Element(tag) => {
                    let styles = Styles::from_tag(&tag.name, &tag.attrs)?;
                    let children = Self::from_markup(tag.children)?;
                    Ok(CueNode::Styled(CueText::new(children, styles)))
                }
            })
            .collect()
    }

    /// Parse `fragment` with `parser` into an unstyled root
    pub fn parse<P: MarkupParser>(fragment: &str, parser: &P) -> Result<Self> {
        let children = Self::from_markup(parser.parse(fragment))?;
        Ok(Self::new(children, Styles::new()))
    }

    pub fn children(&self) -> &[CueNode] {
        &self.children
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CueNode> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CueNode> {
        self.children.get(index)
    }

    /// Depth-first walk over every styled node below this one, self included
    pub fn walk<F>(&self, hook: &mut F)
    where
        F: FnMut(&CueText),
    {
        hook(self);
        for child in self.children.iter() {
            if let CueNode::Styled(node) = child {
                node.walk(hook);
            }
        }
    }
}

/// Flattened text without any style
impl fmt::Display for CueText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.children.iter() {
            child.fmt(f)?;
        }
        Ok(())
    }
}

impl Index<usize> for CueText {
    type Output = CueNode;

    fn index(&self, index: usize) -> &Self::Output {
        &self.children[index]
    }
}

impl<'a> IntoIterator for &'a CueText {
    type Item = &'a CueNode;
    type IntoIter = std::slice::Iter<'a, CueNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl From<&str> for CueText {
    fn from(text: &str) -> Self {
        CueText::plain(text)
    }
}

impl From<String> for CueText {
    fn from(text: String) -> Self {
        CueText::plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::markup::{HtmlMarkup, MarkupTag};

    // <b><i>Hello</i> world</b>
    fn hello_world() -> Vec<MarkupNode> {
        vec![
            MarkupTag::new("b")
                .with_child(MarkupTag::new("i").with_child("Hello".into()).into())
                .with_child(" world".into())
                .into(),
            "!".into(),
        ]
    }

    #[test]
    fn test_from_markup() {
        let texts = CueText::from_markup(hello_world()).unwrap();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1].as_text(), Some("!"));

        let bold = texts[0].as_styled().unwrap();
        assert_eq!(bold.styles(), &Styles::new().with(Style::Bold));
        assert_eq!(bold.len(), 2);
        let italic = bold[0].as_styled().unwrap();
        assert_eq!(italic.styles(), &Styles::new().with(Style::Italic));
        assert_eq!(italic[0].as_text(), Some("Hello"));
        assert_eq!(bold[1].as_text(), Some(" world"));
    }

    #[test]
    fn test_flatten() {
        let root = CueText::new(CueText::from_markup(hello_world()).unwrap(), Styles::new());
        assert_eq!(root.to_string(), "Hello world!");
        assert_eq!(CueText::plain("a\nb").to_string(), "a\nb");
        assert_eq!(CueText::default().to_string(), "");
    }

    #[test]
    fn test_unknown_tag_in_depth() {
        let nodes = vec![MarkupTag::new("i")
            .with_child(MarkupTag::new("blink").with_child("text".into()).into())
            .into()];
        let err = CueText::from_markup(nodes).unwrap_err();
        assert!(matches!(err, Error::UnknownMarkup { tag } if tag == "blink"));
    }

    #[test]
    fn test_parse_with_html_markup() {
        let root = CueText::parse(r#"<font color="red" size="2">Don't</font> panic"#, &HtmlMarkup)
            .unwrap();
        assert!(root.styles().is_empty());
        let font = root[0].as_styled().unwrap();
        assert!(font.styles().contains(&Style::Color("red".into())));
        assert!(font.styles().contains(&Style::Size(2)));
        assert_eq!(root.to_string(), "Don't panic");
    }

    #[test]
    fn test_walk() {
        let root = CueText::parse("<b><i>a</i><u>b</u></b>c", &HtmlMarkup).unwrap();
        let mut count = 0;
        root.walk(&mut |node: &CueText| count += node.styles().len());
        assert_eq!(count, 3);
    }
}
