/// Which delimiter token was found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Open,
    Close,
}

/// A delimiter occurrence: token kind plus its byte offset in the searched slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterHit {
    pub kind: DelimiterKind,
    pub at: usize,
}

impl DelimiterHit {
    /// Byte offset just past the delimiter token.
    pub fn end(&self) -> usize {
        self.at + BlockComment::OPEN.len()
    }
}

/// Block comment type with owned delimiter constants.
///
/// All block-comment syntax knowledge lives here, not scattered in scanner
/// code. Only the two fixed tokens matter; string literals and line comments
/// in the scanned source are not recognized.
pub struct BlockComment;

impl BlockComment {
    /// Token that opens a block comment.
    pub const OPEN: &'static str = "/*";
    /// Token that closes a block comment.
    pub const CLOSE: &'static str = "*/";
    /// The per-line decoration character continuation lines are expected to carry.
    pub const MARKER: char = '*';

    /// Finds the first opening delimiter in `s`.
    pub fn find_open(s: &str) -> Option<usize> {
        s.find(Self::OPEN)
    }

    /// Finds the earliest delimiter of either kind in `s`.
    ///
    /// When both tokens occur, the lower byte offset wins; overlapping
    /// occurrences (`/*/`) resolve to the leftmost token.
    pub fn first_delimiter(s: &str) -> Option<DelimiterHit> {
        let open = s.find(Self::OPEN);
        let close = s.find(Self::CLOSE);
        match (open, close) {
            (Some(o), Some(c)) if o < c => Some(DelimiterHit {
                kind: DelimiterKind::Open,
                at: o,
            }),
            (_, Some(c)) => Some(DelimiterHit {
                kind: DelimiterKind::Close,
                at: c,
            }),
            (Some(o), None) => Some(DelimiterHit {
                kind: DelimiterKind::Open,
                at: o,
            }),
            (None, None) => None,
        }
    }

    /// Builds the continuation prefix for a comment opened at byte column
    /// `column`: the whitespace run up to the delimiter, then a space and the
    /// decoration marker, so the marker sits under the delimiter's second
    /// character.
    ///
    /// ```
    /// use sourcebook_engine::scanning::kinds::BlockComment;
    /// assert_eq!(BlockComment::continuation_prefix(0), " *");
    /// assert_eq!(BlockComment::continuation_prefix(4), "     *");
    /// ```
    pub fn continuation_prefix(column: usize) -> String {
        let mut prefix = " ".repeat(column + 1);
        prefix.push(Self::MARKER);
        prefix
    }
}
