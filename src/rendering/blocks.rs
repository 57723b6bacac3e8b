//! Block-based rich text (EditorJS documents) and its render pipeline.
//!
//! Decoding never fails on block content: unknown tags are kept as
//! [`ContentBlock::Unknown`] and missing payload fields decode as empty
//! strings. Rendering drops unknown blocks and signals an absent or empty
//! document with a single placeholder node.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const NO_CONTENT_MESSAGE: &str = "No content available.";

const DEFAULT_HEADING_LEVEL: u8 = 2;

/// An ordered sequence of content blocks, as stored in an article body.
///
/// Anything without a `blocks` array (`null`, a missing key, a non-object
/// body) decodes as an empty document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ContentDocument {
    pub blocks: Vec<ContentBlock>,
}

impl From<Value> for ContentDocument {
    fn from(value: Value) -> Self {
        let blocks = match value.get("blocks") {
            Some(Value::Array(blocks)) => blocks.iter().cloned().map(ContentBlock::from).collect(),
            _ => Vec::new(),
        };
        Self { blocks }
    }
}

impl ContentDocument {
    pub fn new(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One unit of structured content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { level: Option<u8>, text: String },
    List { ordered: bool, items: Vec<String> },
    Quote { text: String },
    Code { text: String },
    /// A block with an unrecognized tag, kept verbatim.
    Unknown { tag: String, raw: Value },
}

impl From<Value> for ContentBlock {
    fn from(value: Value) -> Self {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let data = value.get("data").cloned().unwrap_or(Value::Null);

        match tag.as_str() {
            "paragraph" => ContentBlock::Paragraph {
                text: text_field(&data, "text"),
            },
            "header" | "heading" => ContentBlock::Heading {
                level: heading_level(&data),
                text: text_field(&data, "text"),
            },
            "list" => ContentBlock::List {
                ordered: data.get("style").and_then(Value::as_str) == Some("ordered"),
                items: list_items(&data),
            },
            "quote" => ContentBlock::Quote {
                text: text_field(&data, "text"),
            },
            "code" => ContentBlock::Code {
                text: data
                    .get("code")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| text_field(&data, "text")),
            },
            _ => ContentBlock::Unknown { tag, raw: value },
        }
    }
}

impl From<ContentBlock> for Value {
    fn from(block: ContentBlock) -> Self {
        match block {
            ContentBlock::Paragraph { text } => json!({ "type": "paragraph", "data": { "text": text } }),
            ContentBlock::Heading { level, text } => {
                let mut data = Map::new();
                data.insert("text".to_string(), Value::String(text));
                if let Some(level) = level {
                    data.insert("level".to_string(), Value::from(level));
                }
                json!({ "type": "header", "data": data })
            }
            ContentBlock::List { ordered, items } => json!({
                "type": "list",
                "data": {
                    "style": if ordered { "ordered" } else { "unordered" },
                    "items": items
                        .into_iter()
                        .map(|content| json!({ "content": content }))
                        .collect::<Vec<_>>(),
                }
            }),
            ContentBlock::Quote { text } => json!({ "type": "quote", "data": { "text": text } }),
            ContentBlock::Code { text } => json!({ "type": "code", "data": { "code": text } }),
            ContentBlock::Unknown { raw, .. } => raw,
        }
    }
}

/// Integral or float levels are accepted; `0` and negatives count as absent.
fn heading_level(data: &Value) -> Option<u8> {
    let level = data.get("level")?.as_f64()?;
    (level >= 1.0).then(|| level.min(u8::MAX as f64) as u8)
}

fn text_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// List items are either plain strings or `{ "content": .. }` objects
/// (`text` is accepted as an alias).
fn list_items(data: &Value) -> Vec<String> {
    let Some(items) = data.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other
                .get("content")
                .or_else(|| other.get("text"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

/// Visual weight of a heading. Higher levels map to smaller emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingTier {
    Title,
    Section,
    Subsection,
}

impl HeadingTier {
    pub fn for_level(level: u8) -> Self {
        match level {
            1 => HeadingTier::Title,
            2 => HeadingTier::Section,
            _ => HeadingTier::Subsection,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HeadingTier::Title => "text-4xl",
            HeadingTier::Section => "text-3xl",
            HeadingTier::Subsection => "text-2xl",
        }
    }
}

/// A renderable node produced from one content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    Paragraph { text: String },
    Heading { level: u8, tier: HeadingTier, text: String },
    List { ordered: bool, items: Vec<String> },
    Quote { text: String },
    Code { text: String },
    Placeholder { message: String },
}

impl RenderNode {
    /// Map a single block to its node. Unknown blocks yield `None`.
    pub fn from_block(block: &ContentBlock) -> Option<Self> {
        match block {
            ContentBlock::Paragraph { text } => Some(RenderNode::Paragraph { text: text.clone() }),
            ContentBlock::Heading { level, text } => {
                let level = level.unwrap_or(DEFAULT_HEADING_LEVEL).clamp(1, 6);
                Some(RenderNode::Heading {
                    level,
                    tier: HeadingTier::for_level(level),
                    text: text.clone(),
                })
            }
            ContentBlock::List { ordered, items } => Some(RenderNode::List {
                ordered: *ordered,
                items: items.clone(),
            }),
            ContentBlock::Quote { text } => Some(RenderNode::Quote { text: text.clone() }),
            ContentBlock::Code { text } => Some(RenderNode::Code { text: text.clone() }),
            ContentBlock::Unknown { .. } => None,
        }
    }

    pub fn placeholder() -> Self {
        RenderNode::Placeholder {
            message: NO_CONTENT_MESSAGE.to_string(),
        }
    }

    /// Render this node to an HTML fragment.
    ///
    /// Inline text keeps the safe subset of HTML that the authoring tool
    /// emits (`<b>`, `<i>`, `<a>`, ...); code text is escaped entirely.
    pub fn to_html(&self) -> String {
        match self {
            RenderNode::Paragraph { text } => format!(
                "<p class=\"text-lg text-gray-700 leading-relaxed mb-4\">{}</p>",
                ammonia::clean(text)
            ),
            RenderNode::Heading { level, tier, text } => format!(
                "<h{level} class=\"font-bold text-gray-900 mb-4 mt-8 {}\">{}</h{level}>",
                tier.css_class(),
                ammonia::clean(text)
            ),
            RenderNode::List { ordered, items } => {
                let (tag, class) = if *ordered {
                    ("ol", "mb-4 list-decimal list-inside")
                } else {
                    ("ul", "mb-4 list-disc list-inside")
                };
                let items: String = items
                    .iter()
                    .map(|item| {
                        format!("<li class=\"text-lg text-gray-700 mb-2\">{}</li>", ammonia::clean(item))
                    })
                    .collect();
                format!("<{tag} class=\"{class}\">{items}</{tag}>")
            }
            RenderNode::Quote { text } => format!(
                "<blockquote class=\"border-l-4 border-gray-300 pl-4 italic text-gray-600 mb-4\">{}</blockquote>",
                ammonia::clean(text)
            ),
            RenderNode::Code { text } => format!(
                "<pre class=\"bg-gray-100 p-4 rounded-lg overflow-x-auto mb-4\"><code class=\"text-sm\">{}</code></pre>",
                ammonia::clean_text(text)
            ),
            RenderNode::Placeholder { message } => format!(
                "<p class=\"placeholder text-gray-600\">{}</p>",
                ammonia::clean(message)
            ),
        }
    }
}

/// Lazily produced render nodes for a document.
pub struct RenderNodes<'a> {
    state: RenderState<'a>,
}

enum RenderState<'a> {
    Placeholder,
    Blocks(std::slice::Iter<'a, ContentBlock>),
    Done,
}

impl Iterator for RenderNodes<'_> {
    type Item = RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            RenderState::Placeholder => {
                self.state = RenderState::Done;
                Some(RenderNode::placeholder())
            }
            RenderState::Blocks(blocks) => blocks.find_map(RenderNode::from_block),
            RenderState::Done => None,
        }
    }
}

/// Render a document into nodes, one per known block, in input order.
///
/// An absent document, or one without blocks, yields exactly one
/// placeholder node.
pub fn render(document: Option<&ContentDocument>) -> RenderNodes<'_> {
    let state = match document {
        Some(doc) if !doc.is_empty() => RenderState::Blocks(doc.blocks.iter()),
        _ => RenderState::Placeholder,
    };
    RenderNodes { state }
}
