//! # Segment scanning
//!
//! Line-oriented classification of source text into comment and code
//! segments.
//!
//! 1. **Delimiter tracking** (`kinds`): the block-comment tokens and the
//!    continuation-prefix convention live in [`kinds::BlockComment`].
//! 2. **Scanning** (`scanner`): [`SegmentScanner`] carries nesting depth and
//!    the pending accumulators across lines, emitting a [`Segment`] whenever
//!    content switches category.
//! 3. **Escaping** (`escape`): comment text has markup-significant characters
//!    backslashed before it ever reaches a segment; code text is left raw.
//!
//! Scan state never crosses file boundaries, so independent files can be
//! scanned from independent threads without locking.

pub mod escape;
pub mod kinds;
pub mod scanner;
pub mod segment;

pub use escape::escape_markdown;
pub use scanner::SegmentScanner;
pub use segment::Segment;

/// Scans a sequence of already-split lines.
pub fn scan_lines<I, S>(lines: I) -> Vec<Segment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = SegmentScanner::new();
    for line in lines {
        scanner.push_line(line.as_ref());
    }
    scanner.finish()
}

/// Scans a whole source text.
pub fn scan_source(source: &str) -> Vec<Segment> {
    scan_lines(source.lines())
}
