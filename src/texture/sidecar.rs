use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use super::template::{IMAGE_EXTENSION, MARKER_LINE, SIDECAR_EXTENSION, STRIPPED_SUFFIX_LEN, TEXTURE_XML};
use crate::error::{Error, Result};

/// Check whether a file name marks a texture image.
///
/// The extension is whatever follows the final `.`, compared case-sensitively
/// on the raw name, so names that are not valid UTF-8 still qualify.
/// Names without a `.` have no extension.
pub fn is_candidate(file_name: &OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    bytes
        .iter()
        .rposition(|&b| b == b'.')
        .is_some_and(|dot| &bytes[dot + 1..] == IMAGE_EXTENSION.as_bytes())
}

/// Build the sidecar path for an image living in `dir`.
///
/// The last `STRIPPED_SUFFIX_LEN` characters of the file name are dropped
/// regardless of the actual extension length.
pub fn sidecar_path(dir: &Path, file_name: &OsStr) -> PathBuf {
    let mut sidecar = strip_suffix(file_name);
    sidecar.push(".");
    sidecar.push(SIDECAR_EXTENSION);
    dir.join(sidecar)
}

fn strip_suffix(file_name: &OsStr) -> OsString {
    if let Some(name) = file_name.to_str() {
        let keep = name.chars().count().saturating_sub(STRIPPED_SUFFIX_LEN);
        return name.chars().take(keep).collect::<String>().into();
    }
    strip_raw_suffix(file_name)
}

// Candidates end in ASCII `.png`, so the last 4 bytes are the last 4 characters
#[cfg(unix)]
fn strip_raw_suffix(file_name: &OsStr) -> OsString {
    use std::os::unix::ffi::OsStrExt;

    let bytes = file_name.as_bytes();
    let keep = bytes.len().saturating_sub(STRIPPED_SUFFIX_LEN);
    OsStr::from_bytes(&bytes[..keep]).to_os_string()
}

#[cfg(not(unix))]
fn strip_raw_suffix(file_name: &OsStr) -> OsString {
    let name = file_name.to_string_lossy();
    let keep = name.chars().count().saturating_sub(STRIPPED_SUFFIX_LEN);
    name.chars().take(keep).collect::<String>().into()
}

/// Decide whether the sidecar at `path` has to be (re)written.
///
/// Only the first line is inspected. A missing file needs writing, and so does
/// any file whose first line is not exactly the marker. A first line that is
/// not valid UTF-8 is a read error.
pub fn needs_write(path: &Path) -> Result<bool> {
    let read_error = |source| Error::ReadSidecar {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(true),
        Err(source) => return Err(read_error(source)),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).map_err(read_error)?;

    // A lone '\r' also terminates the line
    let first = line.split(['\r', '\n']).next().unwrap_or_default();

    Ok(first != MARKER_LINE)
}

/// Create or truncate the sidecar and write the texture template into it
pub fn write_template(path: &Path) -> Result<()> {
    fs::write(path, TEXTURE_XML).map_err(|source| Error::WriteSidecar {
        path: path.to_path_buf(),
        source,
    })
}
