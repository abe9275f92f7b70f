// File: src/persistence.rs
use crate::core::engine::apply;
use crate::core::types::{Key, Mode};
use crate::error::CipherError;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes `path` through a temp file in the same directory, so a failed run
/// never leaves a half-written output behind.
fn write_atomically<F>(path: &Path, fill: F) -> Result<(), CipherError>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> std::io::Result<()>,
{
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        fill(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Encrypts or decrypts `input` line by line into `output`. Every output
/// line ends with `\n`, including the last.
pub fn process_file(input: &Path, output: &Path, key: Key, mode: Mode) -> Result<(), CipherError> {
    let reader = BufReader::new(File::open(input)?);
    let mut lines = 0usize;

    write_atomically(output, |writer| {
        for line in reader.lines() {
            writeln!(writer, "{}", apply(&line?, key, mode))?;
            lines += 1;
        }
        Ok(())
    })?;

    info!(input = %input.display(), output = %output.display(), ?mode, lines, "processed file");
    Ok(())
}

/// Reads `path` as lines, appending `separator` after each one. Line endings
/// (`\n` or `\r\n`) are not kept.
pub fn read_joined(path: &Path, separator: &str) -> Result<String, CipherError> {
    let reader = BufReader::new(File::open(path)?);
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
        text.push_str(separator);
    }
    Ok(text)
}

/// Writes a brute force report: one `Key N:` block per candidate, numbered
/// from 1.
pub fn write_candidates(path: &Path, candidates: &[String]) -> Result<(), CipherError> {
    write_atomically(path, |writer| {
        for (i, candidate) in candidates.iter().enumerate() {
            write!(writer, "Key {}:\n{}\n\n", i + 1, candidate)?;
        }
        Ok(())
    })?;

    info!(output = %path.display(), candidates = candidates.len(), "wrote brute force report");
    Ok(())
}
