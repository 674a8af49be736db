//! Writing rendered exports to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ExportFormat;

/// Write rendered export `contents` under `dir` as `<file_stem><extension>`,
/// creating the directory if needed. Returns the path written.
pub fn write_export(
    dir: impl AsRef<Path>,
    file_stem: &str,
    format: ExportFormat,
    contents: &str,
) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{file_stem}{}", format.extension()));
    fs::write(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn writes_contents_under_the_format_extension() {
        let dir = env::temp_dir().join(format!("palette-studio-io-{}", uuid::Uuid::new_v4()));
        let path = write_export(&dir, "sunset", ExportFormat::Css, "--c-1: #FF0000;\n").unwrap();
        assert!(path.ends_with("sunset.css"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "--c-1: #FF0000;\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
