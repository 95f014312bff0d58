//! Tile directory scanning and average color pool construction

use crate::algorithm::assignment::Tile;
use crate::color::average::average_color_of_file;
use crate::io::configuration::TILE_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Whether the path has one of the accepted tile image extensions
pub fn is_tile_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TILE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// List tile images in a directory, sorted by path
///
/// Sorting keeps pool order, and therefore tie-breaking, stable across runs.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn collect_tile_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e: std::io::Error| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_tile_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Largest square grid side the given number of tiles can fill
pub const fn default_grid_size(tile_count: usize) -> usize {
    tile_count.isqrt()
}

/// Compute the average color of each tile image, preserving input order
///
/// # Errors
///
/// Returns an error if any tile image cannot be loaded or is empty
pub fn load_tile_pool(paths: &[PathBuf]) -> Result<Vec<Tile<PathBuf>>> {
    let pool = paths
        .par_iter()
        .map(|path| average_color_of_file(path).map(|color| Tile::new(path.clone(), color)))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(tiles = pool.len(), "Computed tile average colors");
    Ok(pool)
}
