use std::path::Path;

/// How a file participates in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Spliced in near-verbatim with heading-level adjustment.
    Text,
    /// Run through the segment scanner.
    Code,
    /// Contributes its chapter heading only.
    Other,
}

/// Decides a file's [`FileKind`] from its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileClassifier {
    text_extensions: Vec<String>,
    code_extensions: Vec<String>,
}

impl FileClassifier {
    /// Extensions treated as prose, without the leading dot.
    pub const TEXT_EXTENSIONS: [&'static str; 3] = ["md", "txt", "mkd"];
    /// Extensions treated as scannable source, without the leading dot.
    pub const CODE_EXTENSIONS: [&'static str; 4] = ["cpp", "cc", "h", "hpp"];

    pub fn new(
        text_extensions: impl IntoIterator<Item = String>,
        code_extensions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            text_extensions: text_extensions.into_iter().collect(),
            code_extensions: code_extensions.into_iter().collect(),
        }
    }

    pub fn classify(&self, path: &Path) -> FileKind {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Other;
        };
        if self.text_extensions.iter().any(|e| e == ext) {
            FileKind::Text
        } else if self.code_extensions.iter().any(|e| e == ext) {
            FileKind::Code
        } else {
            FileKind::Other
        }
    }
}

impl Default for FileClassifier {
    fn default() -> Self {
        Self::new(
            Self::TEXT_EXTENSIONS.map(String::from),
            Self::CODE_EXTENSIONS.map(String::from),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case("README.md", FileKind::Text)]
    #[case("notes.txt", FileKind::Text)]
    #[case("book.mkd", FileKind::Text)]
    #[case("main.cpp", FileKind::Code)]
    #[case("util.cc", FileKind::Code)]
    #[case("header.h", FileKind::Code)]
    #[case("header.hpp", FileKind::Code)]
    #[case("image.png", FileKind::Other)]
    #[case("Makefile", FileKind::Other)]
    #[case("archive.tar.h", FileKind::Code)]
    fn default_classification(#[case] name: &str, #[case] expected: FileKind) {
        let classifier = FileClassifier::default();
        assert_eq!(classifier.classify(&PathBuf::from(name)), expected);
    }

    #[test]
    fn custom_extension_sets() {
        let classifier = FileClassifier::new(["rst".to_string()], ["rs".to_string()]);
        assert_eq!(classifier.classify(Path::new("doc.rst")), FileKind::Text);
        assert_eq!(classifier.classify(Path::new("main.rs")), FileKind::Code);
        assert_eq!(classifier.classify(Path::new("main.cpp")), FileKind::Other);
    }
}
