/// Pushes every ATX heading in `text` down by `by` levels.
///
/// Text files are spliced into the book near-verbatim under a synthesized
/// chapter heading; their own headings must sink below it. Closed ATX
/// headings (`# Title #`) grow the same number of `#`s on both ends.
pub fn increment_headings(text: &str, by: usize) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for line in text.lines() {
        if line.starts_with('#') {
            for _ in 0..by {
                out.push('#');
            }
            let trimmed = line.trim_end();
            if trimmed.ends_with('#') {
                out.push_str(trimmed);
                for _ in 0..by {
                    out.push('#');
                }
            } else {
                out.push_str(line);
            }
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "## Title")]
    #[case("## Sub", 1, "### Sub")]
    #[case("# Title", 3, "#### Title")]
    #[case("# Closed #", 1, "## Closed ##")]
    #[case("body text", 2, "body text")]
    fn single_line_cases(#[case] input: &str, #[case] by: usize, #[case] expected: &str) {
        assert_eq!(increment_headings(input, by), format!("{expected}\n"));
    }

    #[test]
    fn only_heading_lines_change() {
        let text = "# Intro\n\nSome prose with # in the middle.\n## Next\n";
        assert_eq!(
            increment_headings(text, 1),
            "## Intro\n\nSome prose with # in the middle.\n### Next\n"
        );
    }

    #[test]
    fn hash_elsewhere_on_the_line_is_untouched() {
        assert_eq!(increment_headings("  # indented", 1), "  # indented\n");
    }
}
