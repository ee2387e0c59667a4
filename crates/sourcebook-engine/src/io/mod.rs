use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid project directory: {0}")]
    InvalidRoot(String),
}

/// Read a source file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// List the visible entries of one directory, sorted by name, with the lead
/// file promoted to the front when present. Dotfiles are skipped.
pub fn list_directory(dir: &Path, lead_file: &str) -> Result<Vec<String>, IoError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();

    if let Some(pos) = names.iter().position(|n| n == lead_file)
        && pos > 0
    {
        let lead = names.remove(pos);
        names.insert(0, lead);
    }

    Ok(names)
}

pub fn validate_root(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidRoot(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
