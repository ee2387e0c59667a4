//! Markdown rendering of scanned segments.
//!
//! Segments carry cleaned text; this module adds the document-level dressing:
//! fixed fence markers around code, one blank line between neighboring
//! segments, and heading-level adjustment for text files spliced in verbatim.

pub mod headings;

pub use headings::increment_headings;

use crate::scanning::{self, Segment};

/// The fixed code-fence marker.
pub const FENCE: &str = "```";

/// Language tag the opening fence carries unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "cpp";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Language tag for the opening fence of every code block.
    pub language: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Concatenates segments into one markdown blob.
///
/// Every segment after the first is preceded by exactly one blank line.
/// Comment text is appended raw (each line already newline-terminated by the
/// scanner); code is wrapped in fences.
pub fn render(segments: &[Segment], options: &RenderOptions) -> String {
    let mut out = String::new();
    for segment in segments {
        if !out.is_empty() {
            out.push('\n');
        }
        match segment {
            Segment::Comment(text) => out.push_str(text),
            Segment::Code(code) => {
                out.push_str(FENCE);
                out.push_str(&options.language);
                out.push('\n');
                out.push_str(code);
                out.push('\n');
                out.push_str(FENCE);
                out.push('\n');
            }
        }
    }
    out
}

/// Scans `source` and renders the result in one step.
pub fn source_to_markdown(source: &str, options: &RenderOptions) -> String {
    render(&scanning::scan_source(source), options)
}
