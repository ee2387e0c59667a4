use serde::Serialize;

/// One classified, renderable unit of scanner output.
///
/// `Comment` text is already unindented and markdown-escaped, one newline per
/// source line. `Code` text is raw source with boundary whitespace trimmed.
/// Segments appear in input order; the scanner never emits an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Comment(String),
    Code(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Comment(text) | Segment::Code(text) => text,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code(_))
    }
}
