//! Writing assignments as one tile identifier per line in row-major order

use crate::algorithm::assignment::Assignment;
use crate::io::error::{MosaicError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write each cell's tile path on its own line, row by row
///
/// # Errors
///
/// Returns an error if writing fails
pub fn write_assignment<W, T>(writer: &mut W, assignment: &Assignment<T>) -> std::io::Result<()>
where
    W: Write,
    T: AsRef<Path>,
{
    for tile in assignment.cells() {
        writeln!(writer, "{}", tile.as_ref().display())?;
    }
    writer.flush()
}

/// Save an assignment to a file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn save_assignment<T: AsRef<Path>>(assignment: &Assignment<T>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    write_assignment(&mut BufWriter::new(file), assignment).map_err(|e| MosaicError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write assignment",
        source: e,
    })
}
