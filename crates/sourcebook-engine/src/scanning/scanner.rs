use super::escape::escape_markdown;
use super::kinds::{BlockComment, DelimiterKind};
use super::segment::Segment;

/// Line-oriented scanner that splits source text into comment and code
/// segments.
///
/// State lives for exactly one file: feed every line through [`push_line`]
/// and collect the segments with [`finish`]. A line may switch category
/// several times when it carries more than one delimiter; the scanner walks
/// delimiter occurrences iteratively, so pathological lines cannot grow the
/// stack.
///
/// [`push_line`]: SegmentScanner::push_line
/// [`finish`]: SegmentScanner::finish
#[derive(Debug, Default)]
pub struct SegmentScanner {
    /// Count of currently-open block comments.
    depth: u32,
    /// Continuation-line decoration captured at the outermost comment open.
    prefix: Option<String>,
    /// Code text not yet flushed into a segment.
    pending_code: String,
    /// Escaped comment text not yet flushed into a segment.
    pending_markdown: String,
    line_no: usize,
    out: Vec<Segment>,
}

impl SegmentScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block-comment nesting depth.
    pub fn nesting_depth(&self) -> u32 {
        self.depth
    }

    /// Consumes one input line. Trailing whitespace is stripped before
    /// processing.
    pub fn push_line(&mut self, raw: &str) {
        self.line_no += 1;
        let line = raw.trim_end();
        // Byte offset of `rest` within `line`; the continuation prefix is
        // only recognized on the first pass over a physical line.
        let mut column = 0usize;
        let mut rest = line;
        loop {
            if self.depth > 0 {
                let hit = BlockComment::first_delimiter(rest);
                let begin = self.comment_text_start(rest, column);
                let end = hit.map_or(rest.len(), |h| h.at);
                let kept = if begin < end { &rest[begin..end] } else { "" };
                // Unconditional: blank lines inside comments survive.
                self.pending_markdown.push_str(&escape_markdown(kept));
                self.pending_markdown.push('\n');
                let Some(hit) = hit else { break };
                match hit.kind {
                    DelimiterKind::Close => self.depth -= 1,
                    DelimiterKind::Open => self.depth += 1,
                }
                log::trace!(
                    "line {}: {:?} delimiter at column {}, depth now {}",
                    self.line_no,
                    hit.kind,
                    column + hit.at,
                    self.depth
                );
                column += hit.end();
                rest = &rest[hit.end()..];
            } else {
                let Some(at) = BlockComment::find_open(rest) else {
                    self.pending_code.push_str(rest);
                    self.pending_code.push('\n');
                    break;
                };
                let before = rest[..at].trim_end();
                if !before.is_empty() {
                    self.pending_code.push_str(before);
                }
                self.depth = 1;
                self.prefix = Some(BlockComment::continuation_prefix(column + at));
                log::trace!(
                    "line {}: comment opened at column {}",
                    self.line_no,
                    column + at
                );
                self.flush_code();
                let after = at + BlockComment::OPEN.len();
                column += after;
                rest = &rest[after..];
            }
        }
    }

    /// Emits any remaining accumulation and returns the segments.
    pub fn finish(mut self) -> Vec<Segment> {
        self.flush_code();
        self.flush_comment();
        if self.depth > 0 {
            log::debug!(
                "input ended inside an unterminated block comment (depth {})",
                self.depth
            );
        }
        self.out
    }

    /// Where the kept comment text begins in `rest`.
    ///
    /// On the first pass over a line that carries exactly the stored
    /// continuation prefix, the prefix is stripped; otherwise only leading
    /// whitespace is (the unindent fallback, which also covers comments whose
    /// continuation lines are not aligned with the opening marker).
    fn comment_text_start(&self, rest: &str, column: usize) -> usize {
        if column == 0
            && let Some(prefix) = self.prefix.as_deref()
            && rest.starts_with(prefix)
        {
            return prefix.len();
        }
        rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
    }

    fn flush_code(&mut self) {
        let trimmed = self.pending_code.trim_start_matches('\n').trim_end();
        if trimmed.is_empty() {
            self.pending_code.clear();
            return;
        }
        let code = trimmed.to_string();
        self.pending_code.clear();
        // Comment text accumulated before this code must land first.
        self.flush_comment();
        log::trace!("line {}: flushed code block ({} bytes)", self.line_no, code.len());
        self.out.push(Segment::Code(code));
    }

    fn flush_comment(&mut self) {
        if self.pending_markdown.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.pending_markdown);
        self.out.push(Segment::Comment(text));
    }
}
