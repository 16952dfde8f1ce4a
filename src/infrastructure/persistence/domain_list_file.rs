//! Newline-delimited domain list files.

use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::UnifyError;

/// Reads non-blank, trimmed lines from `path`.
///
/// # Errors
///
/// Returns [`UnifyError::MissingInput`] if the file does not exist and
/// [`UnifyError::Io`] if it cannot be read.
pub fn read_domain_list(path: &Path) -> Result<Vec<String>, UnifyError> {
    if !path.is_file() {
        return Err(UnifyError::missing_input(
            "domain list",
            format!("file not found: {}", path.display()),
        ));
    }

    let file = fs::File::open(path).map_err(|e| UnifyError::io(path, e))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| UnifyError::io(path, e))?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}

/// Writes one entry per line, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`UnifyError::Output`] if the file cannot be written.
pub fn write_domain_list<I, S>(path: &Path, domains: I) -> Result<usize, UnifyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| UnifyError::output(parent, e))?;
    }

    let file = fs::File::create(path).map_err(|e| UnifyError::output(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for domain in domains {
        writeln!(writer, "{}", domain.as_ref()).map_err(|e| UnifyError::output(path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| UnifyError::output(path, e))?;

    Ok(written)
}

/// File name of part `index` (zero-based): `domains_01.txt`, `domains_02.txt`, ...
pub fn split_file_name(index: usize) -> String {
    format!("domains_{:02}.txt", index + 1)
}

/// Writes every part to `dir`, including empty ones.
///
/// Returns the path and line count of each file in part order.
///
/// # Errors
///
/// Returns [`UnifyError::Output`] on the first file that cannot be written.
pub fn write_split_files<S: AsRef<str>>(
    dir: &Path,
    parts: &[Vec<S>],
) -> Result<Vec<(PathBuf, usize)>, UnifyError> {
    fs::create_dir_all(dir).map_err(|e| UnifyError::output(dir, e))?;

    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let path = dir.join(split_file_name(i));
            let count = write_domain_list(&path, part)?;
            Ok((path, count))
        })
        .collect()
}
