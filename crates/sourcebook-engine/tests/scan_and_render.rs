use pretty_assertions::assert_eq;
use sourcebook_engine::rendering::{RenderOptions, source_to_markdown};

/// Whole-pipeline check over a small tutorial-style file: decorated comment
/// block, preprocessor line left raw inside a fence, and an inline aside
/// splitting one line into three segments.
#[test]
fn tutorial_file_renders_as_interleaved_markdown() {
    let source = r#"/* Welcome to the tutorial!
 *
 * Everything outside comments is shown as code.
 */

#include <iostream>

/* The classic entry point: */
int main() {
    std::cout << "hi";   /* inline aside */
    return 0;
}
"#;

    let expected = "\
Welcome to the tutorial!

 Everything outside comments is shown as code.

\n```cpp
#include <iostream>
```

The classic entry point: \n
```cpp
int main() {
    std::cout << \"hi\";
```

inline aside \n
```cpp
    return 0;
}
```
";

    assert_eq!(source_to_markdown(source, &RenderOptions::default()), expected);
}

#[test]
fn unterminated_comment_still_renders_its_text() {
    let source = "int a;\n/* dangling\nnote\n";
    assert_eq!(
        source_to_markdown(source, &RenderOptions::default()),
        "```cpp\nint a;\n```\n\ndangling\nnote\n"
    );
}
