//! Tag trees handed over by a markup parser
//!
//! Cue text may carry HTML-like tags such as `<b>` or `<font color="red">`.
//! Turning that text into a tree is left to a [`MarkupParser`]; this crate
//! only consumes the resulting [`MarkupNode`]s. [`HtmlMarkup`] is the default
//! parser.
mod html;

use std::collections::HashMap;

pub use html::HtmlMarkup;

/// A node of a parsed markup fragment
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Element(MarkupTag),
    Text(String),
}

/// A tagged element with its attributes and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkupTag {
    pub name: String,
    pub attrs: HashMap<String, String>,
    pub children: Vec<MarkupNode>,
}

impl MarkupTag {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: name.as_ref().to_owned(),
            ..Default::default()
        }
    }

    pub fn with_attr<S1: AsRef<str>, S2: AsRef<str>>(
        mut self,
        key: S1,
        val: S2,
    ) -> Self {
        self.attrs
            .insert(key.as_ref().to_owned(), val.as_ref().to_owned());
        self
    }

    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }
}

impl From<MarkupTag> for MarkupNode {
    fn from(tag: MarkupTag) -> Self {
        MarkupNode::Element(tag)
    }
}

impl From<&str> for MarkupNode {
    fn from(text: &str) -> Self {
        MarkupNode::Text(text.to_owned())
    }
}

/// Turns a markup fragment into an ordered list of nodes
pub trait MarkupParser {
    fn parse(&self, fragment: &str) -> Vec<MarkupNode>;
}

impl<P: MarkupParser + ?Sized> MarkupParser for &P {
    fn parse(&self, fragment: &str) -> Vec<MarkupNode> {
        (**self).parse(fragment)
    }
}
