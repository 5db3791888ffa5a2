// src/richtext.rs
//! Structured rich-text bodies and their two renderings.
//!
//! Post bodies arrive from the store as ordered node sequences. Two
//! renderings exist: `as_text` (plain text, the reading-time input) and
//! `as_html` (markup for the page body). Plain-text rendering is total;
//! HTML rendering rejects nodes whose span annotations carry impossible
//! offsets with [`AppError::MalformedContent`].

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// The block-level kind of a rich text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "paragraph")]
    Paragraph,
    #[serde(rename = "heading1")]
    Heading1,
    #[serde(rename = "heading2")]
    Heading2,
    #[serde(rename = "heading3")]
    Heading3,
    #[serde(rename = "heading4")]
    Heading4,
    #[serde(rename = "heading5")]
    Heading5,
    #[serde(rename = "heading6")]
    Heading6,
    #[serde(rename = "preformatted")]
    Preformatted,
    #[serde(rename = "list-item")]
    ListItem,
    #[serde(rename = "o-list-item")]
    OrderedListItem,
    #[serde(rename = "image")]
    Image,
}

impl NodeKind {
    fn tag(&self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Heading1 => "h1",
            Self::Heading2 => "h2",
            Self::Heading3 => "h3",
            Self::Heading4 => "h4",
            Self::Heading5 => "h5",
            Self::Heading6 => "h6",
            Self::Preformatted => "pre",
            Self::ListItem | Self::OrderedListItem => "li",
            Self::Image => "img",
        }
    }
}

/// An inline annotation over a character range of a node's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub kind: SpanKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink { url: String },
}

impl SpanKind {
    fn open(&self) -> String {
        match self {
            Self::Strong => "<strong>".to_string(),
            Self::Em => "<em>".to_string(),
            Self::Hyperlink { url } => format!("<a href=\"{}\">", escape_html(url)),
        }
    }

    fn close(&self) -> &'static str {
        match self {
            Self::Strong => "</strong>",
            Self::Em => "</em>",
            Self::Hyperlink { .. } => "</a>",
        }
    }
}

/// One structured content unit of a post body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
    /// Source URL for image nodes; absent otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RichTextNode {
    /// A plain paragraph node with no annotations.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            text: text.into(),
            spans: Vec::new(),
            url: None,
        }
    }
}

/// Renders nodes to plain text, joining node texts with a single space.
///
/// Image nodes carry no text and are skipped. Total over all inputs —
/// span annotations are irrelevant to the plain rendering.
pub fn as_text(nodes: &[RichTextNode]) -> String {
    let mut parts = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.kind == NodeKind::Image {
            continue;
        }
        parts.push(node.text.as_str());
    }
    parts.join(" ")
}

/// Renders nodes to HTML markup.
///
/// Consecutive list items are grouped under one `<ul>`/`<ol>`; span
/// annotations must be in-range and non-overlapping or the whole body is
/// rejected as malformed.
pub fn as_html(nodes: &[RichTextNode]) -> Result<String, AppError> {
    let mut out = String::new();
    let mut open_list: Option<NodeKind> = None;

    for node in nodes {
        let list_kind = match node.kind {
            NodeKind::ListItem | NodeKind::OrderedListItem => Some(node.kind),
            _ => None,
        };
        if open_list != list_kind {
            if let Some(kind) = open_list {
                out.push_str(list_wrapper_close(kind));
            }
            if let Some(kind) = list_kind {
                out.push_str(list_wrapper_open(kind));
            }
            open_list = list_kind;
        }

        match node.kind {
            NodeKind::Image => {
                let url = node.url.as_deref().unwrap_or_default();
                out.push_str(&format!("<img src=\"{}\"/>", escape_html(url)));
            }
            kind => {
                let tag = kind.tag();
                out.push_str(&format!("<{}>", tag));
                out.push_str(&render_spans(&node.text, &node.spans)?);
                out.push_str(&format!("</{}>", tag));
            }
        }
    }

    if let Some(kind) = open_list {
        out.push_str(list_wrapper_close(kind));
    }

    Ok(out)
}

fn list_wrapper_open(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::OrderedListItem => "<ol>",
        _ => "<ul>",
    }
}

fn list_wrapper_close(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::OrderedListItem => "</ol>",
        _ => "</ul>",
    }
}

/// Applies span annotations to a node's text, escaping as it goes.
///
/// Offsets are character indices. Spans are applied in start order and
/// must not overlap; nesting is not part of the store's span model.
fn render_spans(text: &str, spans: &[Span]) -> Result<String, AppError> {
    let chars: Vec<char> = text.chars().collect();

    let mut sorted: Vec<&Span> = spans.iter().collect();
    sorted.sort_by_key(|s| (s.start, s.end));

    let mut out = String::new();
    let mut pos = 0usize;
    for span in sorted {
        if span.start > span.end || span.end > chars.len() {
            return Err(AppError::MalformedContent(format!(
                "span [{}, {}) exceeds text of {} characters",
                span.start,
                span.end,
                chars.len()
            )));
        }
        if span.start < pos {
            return Err(AppError::MalformedContent(format!(
                "overlapping spans at character {}",
                span.start
            )));
        }
        push_escaped(&mut out, &chars[pos..span.start]);
        out.push_str(&span.kind.open());
        push_escaped(&mut out, &chars[span.start..span.end]);
        out.push_str(span.kind.close());
        pos = span.end;
    }
    push_escaped(&mut out, &chars[pos..]);

    Ok(out)
}

fn push_escaped(out: &mut String, chars: &[char]) {
    for &c in chars {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    push_escaped(&mut out, &input.chars().collect::<Vec<_>>());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(kind: NodeKind, text: &str) -> RichTextNode {
        RichTextNode {
            kind,
            text: text.to_string(),
            spans: Vec::new(),
            url: None,
        }
    }

    #[test]
    fn as_text_joins_nodes_with_spaces() {
        let nodes = vec![
            node(NodeKind::Heading2, "Brewing"),
            node(NodeKind::Paragraph, "Grind the beans."),
        ];
        assert_eq!(as_text(&nodes), "Brewing Grind the beans.");
    }

    #[test]
    fn as_text_skips_images() {
        let mut image = node(NodeKind::Image, "");
        image.url = Some("https://img.example/x.png".to_string());
        let nodes = vec![node(NodeKind::Paragraph, "before"), image];
        assert_eq!(as_text(&nodes), "before");
    }

    #[test]
    fn as_html_renders_tags_and_spans() {
        let nodes = vec![RichTextNode {
            kind: NodeKind::Paragraph,
            text: "bold words here".to_string(),
            spans: vec![Span {
                start: 0,
                end: 4,
                kind: SpanKind::Strong,
            }],
            url: None,
        }];
        assert_eq!(
            as_html(&nodes).unwrap(),
            "<p><strong>bold</strong> words here</p>"
        );
    }

    #[test]
    fn as_html_groups_consecutive_list_items() {
        let nodes = vec![
            node(NodeKind::ListItem, "one"),
            node(NodeKind::ListItem, "two"),
            node(NodeKind::Paragraph, "after"),
        ];
        assert_eq!(
            as_html(&nodes).unwrap(),
            "<ul><li>one</li><li>two</li></ul><p>after</p>"
        );
    }

    #[test]
    fn as_html_escapes_markup_characters() {
        let nodes = vec![node(NodeKind::Paragraph, "a < b & c")];
        assert_eq!(as_html(&nodes).unwrap(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn out_of_range_span_is_malformed() {
        let nodes = vec![RichTextNode {
            kind: NodeKind::Paragraph,
            text: "short".to_string(),
            spans: vec![Span {
                start: 2,
                end: 40,
                kind: SpanKind::Em,
            }],
            url: None,
        }];
        assert!(matches!(
            as_html(&nodes),
            Err(AppError::MalformedContent(_))
        ));
    }

    #[test]
    fn overlapping_spans_are_malformed() {
        let nodes = vec![RichTextNode {
            kind: NodeKind::Paragraph,
            text: "overlap".to_string(),
            spans: vec![
                Span {
                    start: 0,
                    end: 4,
                    kind: SpanKind::Strong,
                },
                Span {
                    start: 2,
                    end: 6,
                    kind: SpanKind::Em,
                },
            ],
            url: None,
        }];
        assert!(matches!(
            as_html(&nodes),
            Err(AppError::MalformedContent(_))
        ));
    }

    #[test]
    fn hyperlink_span_carries_href() {
        let nodes = vec![RichTextNode {
            kind: NodeKind::Paragraph,
            text: "see docs".to_string(),
            spans: vec![Span {
                start: 4,
                end: 8,
                kind: SpanKind::Hyperlink {
                    url: "https://example.com".to_string(),
                },
            }],
            url: None,
        }];
        assert_eq!(
            as_html(&nodes).unwrap(),
            "<p>see <a href=\"https://example.com\">docs</a></p>"
        );
    }

    #[test]
    fn node_json_shape_round_trips() {
        let json = r#"{"type":"paragraph","text":"hi there","spans":[{"start":0,"end":2,"type":"strong"}]}"#;
        let parsed: RichTextNode = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, NodeKind::Paragraph);
        assert_eq!(parsed.spans[0].kind, SpanKind::Strong);
    }
}
