use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{MarkupNode, MarkupParser, MarkupTag};

/// [`MarkupParser`] backed by the html5ever tree builder
///
/// The fragment is parsed as the content of a `<body>` element, so tag and
/// attribute names come back lower-cased, character references are decoded
/// and mis-nested tags are repaired the way a browser would. Comments are
/// dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlMarkup;

impl MarkupParser for HtmlMarkup {
    fn parse(&self, fragment: &str) -> Vec<MarkupNode> {
        if fragment.is_empty() {
            return vec![];
        }
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let dom = parse_fragment(RcDom::default(), ParseOpts::default(), context, vec![])
            .one(fragment);

        // html5ever puts the fragment under a synthetic <html> root
        let document = dom.document.children.borrow();
        match document.first() {
            Some(root) => convert_children(root),
            None => vec![],
        }
    }
}

fn convert_children(handle: &Handle) -> Vec<MarkupNode> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert)
        .collect()
}

fn convert(handle: &Handle) -> Option<MarkupNode> {
    match &handle.data {
        NodeData::Text { contents } => {
            Some(MarkupNode::Text(contents.borrow().to_string()))
        }
        NodeData::Element { name, attrs, .. } => {
            let mut tag = MarkupTag::new(&*name.local);
            for attr in attrs.borrow().iter() {
                tag = tag.with_attr(&*attr.name.local, &*attr.value);
            }
            tag.children = convert_children(handle);
            Some(MarkupNode::Element(tag))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tags() {
        let nodes = HtmlMarkup.parse("<b><i>Hello</i> world</b>!");
        let expected: Vec<MarkupNode> = vec![
            MarkupTag::new("b")
                .with_child(MarkupTag::new("i").with_child("Hello".into()).into())
                .with_child(" world".into())
                .into(),
            "!".into(),
        ];
        assert_eq!(nodes, expected);
    }

    #[test]
    fn test_attributes_and_case() {
        let nodes = HtmlMarkup.parse(r##"<FONT Color="#ff0000" size=3>red</FONT>"##);
        let expected: Vec<MarkupNode> = vec![MarkupTag::new("font")
            .with_attr("color", "#ff0000")
            .with_attr("size", "3")
            .with_child("red".into())
            .into()];
        assert_eq!(nodes, expected);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            HtmlMarkup.parse("Something is coming.\nSomething hungry"),
            vec![MarkupNode::Text("Something is coming.\nSomething hungry".into())]
        );
        assert_eq!(
            HtmlMarkup.parse("Tom &amp; Jerry"),
            vec![MarkupNode::Text("Tom & Jerry".into())]
        );
        assert!(HtmlMarkup.parse("").is_empty());
        assert_eq!(
            HtmlMarkup.parse("a<!-- note -->b"),
            vec![MarkupNode::from("a"), MarkupNode::from("b")]
        );
    }
}
