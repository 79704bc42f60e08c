use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use super::scan;
use super::sidecar;
use crate::error::{Error, Result};

/// Make sure every PNG under `root` has a texture sidecar next to it.
///
/// Notices for written sidecars go to stdout. The first I/O failure stops the run.
pub fn generate(root: &Path, recursive: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    generate_into(root, recursive, &mut out)
}

/// Same as [`generate`], writing notices into `out`
pub fn generate_into<W: Write>(root: &Path, recursive: bool, out: &mut W) -> Result<()> {
    info!(root = %root.display(), recursive, "scanning for textures");

    let mut written = 0usize;
    let mut skipped = 0usize;

    for candidate in scan::candidates(root, recursive) {
        let candidate = candidate?;
        let sidecar_path = candidate.sidecar_path();

        if !sidecar::needs_write(&sidecar_path)? {
            debug!(image = %candidate.path().display(), "sidecar already present");
            skipped += 1;
            continue;
        }

        writeln!(
            out,
            "Add xml file to texture : {}/{}",
            candidate.dir.display(),
            Path::new(&candidate.file_name).display()
        )
        .map_err(Error::Output)?;

        sidecar::write_template(&sidecar_path)?;
        info!(sidecar = %sidecar_path.display(), "wrote texture sidecar");
        written += 1;
    }

    info!(written, skipped, "texture scan complete");
    Ok(())
}
