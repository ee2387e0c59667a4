/// Characters that are markup-significant at low indentation.
const ESCAPED: [char; 4] = ['#', '_', '<', '>'];

/// Indentation width at which a line counts as preformatted and is left alone.
const PREFORMATTED_INDENT: usize = 4;

/// Escapes markdown-significant characters in one line of comment text.
///
/// Lines indented by four or more whitespace characters are rendered as
/// preformatted blocks downstream and are returned unchanged; below that,
/// every `#`, `_`, `<` and `>` is prefixed with a backslash.
pub fn escape_markdown(line: &str) -> String {
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    if indent >= PREFORMATTED_INDENT {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        if ESCAPED.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
