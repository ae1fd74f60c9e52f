//! Zip codec for save folders.

use crate::errors::{archive_write, extract_error, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Write every file and directory under `source_dir` into a deflated zip.
///
/// Entry names are relative to the parent of `source_dir`, so the folder
/// name itself is the top-level entry. Returns the file handle and the number
/// of files stored. `archive_path` only labels errors.
pub fn write_zip(source_dir: &Path, out: File, archive_path: &Path) -> Result<(File, usize)> {
    let base = source_dir.parent().unwrap_or(source_dir);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let fail = |e: &dyn std::fmt::Display| archive_write(archive_path, e);

    let mut paths = Vec::new();
    collect(source_dir, &mut paths).map_err(|e| fail(&e))?;

    let mut writer = ZipWriter::new(out);
    writer
        .add_directory(entry_name(base, source_dir), options)
        .map_err(|e| fail(&e))?;

    let mut files = 0;
    for path in paths {
        let name = entry_name(base, &path);
        if path.is_dir() {
            writer.add_directory(name, options).map_err(|e| fail(&e))?;
        } else {
            writer.start_file(name, options).map_err(|e| fail(&e))?;
            let mut input = File::open(&path).map_err(|e| fail(&e))?;
            io::copy(&mut input, &mut writer).map_err(|e| fail(&e))?;
            files += 1;
        }
    }

    let file = writer.finish().map_err(|e| fail(&e))?;
    Ok((file, files))
}

/// Sorted recursive listing, directories before their contents
fn collect(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|e| e.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();
    for path in entries {
        out.push(path.clone());
        if path.is_dir() {
            collect(&path, out)?;
        }
    }
    Ok(())
}

fn entry_name(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Extract `archive` under `target_dir`, creating it if needed
pub fn extract_zip(archive: &Path, target_dir: &Path) -> Result<usize> {
    let file = File::open(archive).map_err(|e| extract_error(archive, e))?;
    let mut zip = ZipArchive::new(file).map_err(|e| extract_error(archive, e))?;
    let entries = zip.len();
    fs::create_dir_all(target_dir).map_err(|e| extract_error(archive, e))?;
    zip.extract(target_dir)
        .map_err(|e| extract_error(archive, e))?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_names_keep_folder_name() {
        let base = Path::new("/saves");
        assert_eq!(
            entry_name(base, Path::new("/saves/slot1/save/game")),
            "slot1/save/game"
        );
    }
}
