//! Book assembly: the hierarchy of directories becomes a hierarchy of
//! chapters.
//!
//! Only the top-level invocation can fail (an invalid root). Everything
//! below that boundary is best-effort: unreadable files, vanished
//! directories and non-regular entries are reported through `log::warn!`
//! and the walk continues.

use std::path::Path;

use crate::io::{self, IoError};
use crate::models::{FileClassifier, FileKind};
use crate::rendering::{self, RenderOptions, increment_headings};

/// Directories nested deeper than this are inventoried, not recursed into.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// File promoted to the front of every directory listing.
pub const DEFAULT_LEAD_FILE: &str = "README.md";

#[derive(Debug, Clone)]
pub struct BookOptions {
    pub classifier: FileClassifier,
    pub render: RenderOptions,
    pub max_depth: usize,
    pub lead_file: String,
}

impl Default for BookOptions {
    fn default() -> Self {
        Self {
            classifier: FileClassifier::default(),
            render: RenderOptions::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            lead_file: DEFAULT_LEAD_FILE.to_string(),
        }
    }
}

/// Walks `root` and assembles the whole book as one markdown document.
pub fn build_book(root: &Path, options: &BookOptions) -> Result<String, IoError> {
    io::validate_root(root)?;

    let mut out = String::new();
    // Pandoc title block.
    out.push_str("% ");
    out.push_str(&root.display().to_string());
    out.push_str("\n%\n%\n\n");

    walk(root, 1, &mut out, options);
    Ok(out)
}

fn walk(dir: &Path, level: usize, out: &mut String, options: &BookOptions) {
    let names = match io::list_directory(dir, &options.lead_file) {
        Ok(names) => names,
        Err(e) => {
            log::warn!("skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for name in names {
        let path = dir.join(&name);
        if path.is_file() {
            push_heading(out, level, &name);
            match options.classifier.classify(&path) {
                FileKind::Text => {
                    if let Some(content) = read_or_warn(&path) {
                        out.push_str(&increment_headings(&content, level));
                    }
                }
                FileKind::Code => {
                    if let Some(content) = read_or_warn(&path) {
                        log::trace!("scanning {}", path.display());
                        out.push_str(&rendering::source_to_markdown(&content, &options.render));
                    }
                }
                FileKind::Other => {}
            }
        } else if path.is_dir() {
            push_heading(out, level, &name);
            if level + 1 > options.max_depth {
                log::warn!(
                    "directories deeper than {} levels are not explored: {}",
                    options.max_depth,
                    path.display()
                );
                push_inventory(out, &path, &options.lead_file);
            } else {
                walk(&path, level + 1, out, options);
            }
        } else {
            log::warn!("ignored: not a regular file or directory: {}", path.display());
        }
    }
}

fn read_or_warn(path: &Path) -> Option<String> {
    match io::read_file(path) {
        Ok(content) => Some(content),
        Err(e) => {
            log::warn!("skipping unreadable file {}: {}", path.display(), e);
            None
        }
    }
}

fn push_heading(out: &mut String, level: usize, name: &str) {
    out.push('\n');
    for _ in 0..level {
        out.push('#');
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("\n\n");
}

/// Flat inventory of a directory that sits beyond the depth cutoff.
fn push_inventory(out: &mut String, dir: &Path, lead_file: &str) {
    match io::list_directory(dir, lead_file) {
        Ok(names) => {
            for name in names {
                out.push_str("- `");
                out.push_str(&name);
                out.push_str("`\n");
            }
        }
        Err(e) => {
            log::warn!("skipping unreadable directory {}: {}", dir.display(), e);
        }
    }
}
