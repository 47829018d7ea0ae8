use crate::node::{CueNode, CueText};
use crate::token;

/// Serialize a styled text tree back into markup
///
/// Every styled node is wrapped in the tags of its styles, nested in
/// [`crate::style::StyleKey`] order. Text is escaped when `escape` is set so
/// that a markup parser reads it back unchanged.
pub fn generate(node: &CueText, escape: bool) -> String {
    let mut markup = String::new();
    push_node(&mut markup, node, escape);
    markup
}

/// Markup for the text lines of a cue block
///
/// A blank line ends a cue block, so blank lines coming from decoded line
/// breaks (`a&#10;&#10;b`) are dropped.
pub fn text_block(node: &CueText, escape: bool) -> String {
    generate(node, escape)
        .lines()
        .filter(|line| !token::is_blank(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_node(markup: &mut String, node: &CueText, escape: bool) {
    let tags = node.styles().tags();
    for (open, _) in tags.iter() {
        markup.push_str(open);
    }
    for child in node.iter() {
        match child {
            CueNode::Text(text) if escape => push_escaped(markup, text),
            CueNode::Text(text) => markup.push_str(text),
            CueNode::Styled(child) => push_node(markup, child, escape),
        }
    }
    for (_, close) in tags.iter().rev() {
        markup.push_str(close);
    }
}

/// Only `&`, `<` and `>` start markup in cue text, quotes are left alone
fn push_escaped(markup: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => markup.push_str("&amp;"),
            '<' => markup.push_str("&lt;"),
            '>' => markup.push_str("&gt;"),
            _ => markup.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlMarkup;
    use crate::style::{Style, Styles};

    fn roundtrip(markup: &str) -> String {
        generate(&CueText::parse(markup, &HtmlMarkup).unwrap(), true)
    }

    #[test]
    fn test_nested() {
        let text = CueText::parse("<b><i>Hello</i> world</b>", &HtmlMarkup).unwrap();
        assert_eq!(text.to_string(), "Hello world");
        assert_eq!(generate(&text, true), "<b><i>Hello</i> world</b>");
    }

    #[test]
    fn test_canonical_order() {
        let text = CueText::new(
            vec!["x".into()],
            Styles::new()
                .with(Style::Color("red".into()))
                .with(Style::Italic)
                .with(Style::Bold),
        );
        assert_eq!(generate(&text, true), r#"<b><i><font color="red">x</font></i></b>"#);
    }

    #[test]
    fn test_stable() {
        let tcases = [
            r#"<FONT SIZE=2 color='#fff'>a</FONT>"#,
            "<u><s>a</s></u> b <i>c</i>",
            "plain text",
            "1 &lt; 2 &amp;&amp; 3 &gt; 2",
            "multi\n<i>line</i>",
        ];
        for markup in tcases {
            let once = roundtrip(markup);
            assert_eq!(roundtrip(&once), once, "{markup}");
        }
        assert_eq!(
            roundtrip(r#"<FONT SIZE=2 color='#fff'>a</FONT>"#),
            r##"<font size="2" color="#fff">a</font>"##
        );
        assert_eq!(roundtrip("1 &lt; 2"), "1 &lt; 2");
    }

    #[test]
    fn test_escape_switch() {
        let text = CueText::plain("a <b> & c");
        assert_eq!(generate(&text, true), "a &lt;b&gt; &amp; c");
        assert_eq!(generate(&text, false), "a <b> & c");
    }

    #[test]
    fn test_escape_text() {
        let text = CueText::plain(r#"a < b && c > "d""#);
        assert_eq!(generate(&text, true), r#"a &lt; b &amp;&amp; c &gt; "d""#);
    }

    #[test]
    fn test_text_block_drops_blank_lines() {
        let text = CueText::parse("a&#10;&#10;b", &HtmlMarkup).unwrap();
        assert_eq!(text.to_string(), "a\n\nb");
        assert_eq!(generate(&text, true), "a\n\nb");
        assert_eq!(text_block(&text, true), "a\nb");

        let text = CueText::parse("&#10;<i>x&#10; &#10;y</i>&#10;", &HtmlMarkup).unwrap();
        assert_eq!(text_block(&text, true), "<i>x\ny</i>");
        assert_eq!(text_block(&CueText::plain("one\ntwo"), true), "one\ntwo");
    }

    #[test]
    fn test_quote_in_color() {
        let text = CueText::new(vec!["x".into()], Styles::new().with(Style::Color(r#"a"b"#.into())));
        let markup = generate(&text, true);
        assert_eq!(markup, r#"<font color="a&quot;b">x</font>"#);
        let back = CueText::parse(&markup, &HtmlMarkup).unwrap();
        assert_eq!(back[0].as_styled().unwrap().styles(), text.styles());
    }
}
