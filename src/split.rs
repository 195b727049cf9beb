//! Tiling of CSV grids.
//!
//! A grid is a text file where every non-empty line is one row of comma-separated
//! cells. [`split_file`] cuts it into `tile_width x tile_height` blocks and writes each
//! block to its own CSV file named `{stem}_{row}_{col}.csv`.

use crate::config::SplitConfig;
use crate::error::{CrleError, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
    pub width: usize,
}

impl Grid {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Tile row index (not the cell row)
    pub row: usize,
    pub col: usize,
    pub cells: Vec<Vec<String>>,
}

impl Tile {
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.push_str(&row.join(","));
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct SplitStats {
    pub rows: usize,
    pub columns: usize,
    pub tiles_written: usize,
    pub files: Vec<PathBuf>,
}

/// Parse `text` into a rectangular grid. A single trailing comma on a line is allowed.
pub fn read_grid(text: &str) -> Result<Grid> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width = 0;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line = line.strip_suffix(',').unwrap_or(line);
        let cells: Vec<String> = line.split(',').map(|cell| cell.trim().to_string()).collect();

        if rows.is_empty() {
            width = cells.len();
        } else if cells.len() != width {
            return Err(CrleError::RaggedGrid { line: line_no + 1, expected: width, found: cells.len() });
        }
        rows.push(cells);
    }

    Ok(Grid { rows, width })
}

/// Cut `grid` into tiles in row-major order. Tiles on the right and bottom edges are
/// smaller when the grid size is not a multiple of the tile size.
pub fn tiles(grid: &Grid, config: &SplitConfig) -> Vec<Tile> {
    let tile_width = config.tile_width.max(1);
    let tile_height = config.tile_height.max(1);
    let mut tiles = Vec::new();

    for (row, top) in (0..grid.height()).step_by(tile_height).enumerate() {
        let bottom = (top + tile_height).min(grid.height());
        for (col, left) in (0..grid.width).step_by(tile_width).enumerate() {
            let right = (left + tile_width).min(grid.width);
            let cells = grid.rows[top..bottom]
                .iter()
                .map(|cells| cells[left..right].to_vec())
                .collect();
            tiles.push(Tile { row, col, cells });
        }
    }

    tiles
}

fn tile_path(dir: &Path, stem: &str, tile: &Tile) -> PathBuf {
    dir.join(format!("{}_{}_{}.csv", stem, tile.row, tile.col))
}

/// Split the grid stored in `input` into tile files under `out_dir` (defaults to the
/// directory containing `input`).
pub fn split_file(input: &Path, out_dir: Option<&Path>, config: &SplitConfig) -> Result<SplitStats> {
    if config.tile_width == 0 || config.tile_height == 0 {
        return Err(CrleError::ConfigError("Tile size must be at least 1x1".to_string()));
    }

    let text = fs::read_to_string(input)?;
    let grid = read_grid(&text)?;
    let tiles = tiles(&grid, config);

    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(&dir)?;
    }
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("grid");

    info!(
        "Splitting {}x{} grid into {} tiles of {}x{}",
        grid.width,
        grid.height(),
        tiles.len(),
        config.tile_width,
        config.tile_height
    );

    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global();

    let pb = ProgressBar::new(tiles.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Tiles {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let files = tiles
        .par_iter()
        .progress_with(pb.clone())
        .map(|tile| {
            let path = tile_path(&dir, stem, tile);
            fs::write(&path, tile.to_csv())?;
            debug!("Wrote tile ({}, {}) to {}", tile.row, tile.col, path.display());
            Ok::<PathBuf, CrleError>(path)
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Split finished");

    Ok(SplitStats {
        rows: grid.height(),
        columns: grid.width,
        tiles_written: files.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_5x3() -> Grid {
        read_grid("1,2,3,4,5\n6,7,8,9,10\n11,12,13,14,15\n").unwrap()
    }

    #[test]
    fn test_read_grid() {
        let grid = grid_5x3();
        assert_eq!(grid.width, 5);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows[1][4], "10");
    }

    #[test]
    fn test_read_grid_trailing_comma_and_blank_lines() {
        let grid = read_grid("\n a, b ,\nc,d,\n\n").unwrap();
        assert_eq!(grid.rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_read_grid_ragged() {
        match read_grid("1,2,3\n4,5\n") {
            Err(CrleError::RaggedGrid { line, expected, found }) => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_tiles_with_partial_edges() {
        let config = SplitConfig::new(2, 2).unwrap();
        let tiles = tiles(&grid_5x3(), &config);
        assert_eq!(tiles.len(), 6);

        assert_eq!((tiles[0].row, tiles[0].col), (0, 0));
        assert_eq!(tiles[0].to_csv(), "1,2\n6,7\n");

        assert_eq!((tiles[2].row, tiles[2].col), (0, 2));
        assert_eq!(tiles[2].to_csv(), "5\n10\n");

        assert_eq!((tiles[5].row, tiles[5].col), (1, 2));
        assert_eq!(tiles[5].to_csv(), "15\n");
    }

    #[test]
    fn test_tiles_exact_fit() {
        let config = SplitConfig::new(5, 3).unwrap();
        let tiles = tiles(&grid_5x3(), &config);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].cells.len(), 3);
    }

    #[test]
    fn test_tiles_empty_grid() {
        let grid = read_grid("").unwrap();
        assert!(tiles(&grid, &SplitConfig::default()).is_empty());
    }
}
