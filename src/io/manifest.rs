use std::fs;
use std::path::Path;

use crate::error::Result;

/// One regular file found in the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub bytes: u64,
}

impl ManifestEntry {
    pub fn mebibytes(&self) -> f64 {
        self.bytes as f64 / 1024.0 / 1024.0
    }
}

/// List the regular files of `dir` with their sizes, sorted by file name.
pub fn read_manifest(dir: &Path) -> Result<Vec<ManifestEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }
        entries.push(ManifestEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            bytes: meta.len(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_files_sorted_with_sizes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.png"), vec![0u8; 10]).unwrap();
        fs::write(dir.path().join("a.png"), vec![0u8; 2 * 1024 * 1024]).unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let manifest = read_manifest(dir.path()).unwrap();
        let names: Vec<_> = manifest.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.png"]);
        assert_eq!(manifest[1].bytes, 10);
        assert!((manifest[0].mebibytes() - 2.0).abs() < f64::EPSILON);
    }
}
