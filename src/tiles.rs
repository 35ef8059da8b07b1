//! # Tiled in-memory framebuffer
//!
//! The screen is cut into a fixed grid of tiles, row-major, without gaps or overlap. A pixel
//! belongs to tile `(x / tile_width, y / tile_height)`. When the screen size is not a multiple of
//! the tile size the last column/row of tiles is narrower.
//!
//! Every tile owns the RGB565 bytes of its rectangle (row-major, big-endian, exactly what the
//! controller expects after a set window) and a dirty flag. Each tile sits behind its own lock,
//! so the drawing thread and the flush worker only contend when they touch the same tile.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{color::Rgb565, BYTES_PER_PIXEL};

/// Absolute pixel rectangle covered by a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TileArea {
    /// last column, inclusive
    pub fn x_end(&self) -> u16 {
        self.x + self.width - 1
    }

    /// last row, inclusive
    pub fn y_end(&self) -> u16 {
        self.y + self.height - 1
    }
}

#[derive(Debug)]
struct Tile {
    bytes: Vec<u8>,
    dirty: bool,
}

#[derive(Debug)]
pub struct TileGrid {
    width: u16,
    height: u16,
    tile_width: u16,
    tile_height: u16,
    columns: usize,
    tiles: Vec<Mutex<Tile>>,
}

impl TileGrid {
    /// Allocate the tiles for a `width` x `height` screen.
    ///
    /// All tiles start dirty: the controller memory is undefined after power on, so the first
    /// `present()` sends the whole screen.
    pub fn new(width: u16, height: u16, tile_width: u16, tile_height: u16) -> TileGrid {
        let tile_width = tile_width.clamp(1, width.max(1));
        let tile_height = tile_height.clamp(1, height.max(1));
        let columns = (width as usize + tile_width as usize - 1) / tile_width as usize;
        let rows = (height as usize + tile_height as usize - 1) / tile_height as usize;

        let mut grid = TileGrid {
            width,
            height,
            tile_width,
            tile_height,
            columns,
            tiles: Vec::with_capacity(columns * rows),
        };
        for index in 0..columns * rows {
            let area = grid.area(index);
            grid.tiles.push(Mutex::new(Tile {
                bytes: vec![0; area.width as usize * area.height as usize * BYTES_PER_PIXEL],
                dirty: true,
            }));
        }
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// tiles per row
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Index of the tile holding pixel (x, y). The pixel must be on screen.
    pub fn index_of(&self, x: u16, y: u16) -> usize {
        (y / self.tile_height) as usize * self.columns + (x / self.tile_width) as usize
    }

    /// Absolute rectangle of tile `index`.
    pub fn area(&self, index: usize) -> TileArea {
        let x = (index % self.columns) as u16 * self.tile_width;
        let y = (index / self.columns) as u16 * self.tile_height;
        TileArea {
            x,
            y,
            width: self.tile_width.min(self.width - x),
            height: self.tile_height.min(self.height - y),
        }
    }

    fn lock(&self, index: usize) -> MutexGuard<'_, Tile> {
        // a panic while holding the lock can only leave half a pixel written, keep going
        self.tiles[index].lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn offset(&self, x: u16, y: u16) -> (usize, usize) {
        let index = self.index_of(x, y);
        let area = self.area(index);
        let local = (y - area.y) as usize * area.width as usize + (x - area.x) as usize;
        (index, local * BYTES_PER_PIXEL)
    }

    /// Store one pixel; returns `true` if the tile content changed.
    ///
    /// Pixels outside the screen are dropped, shapes rely on this for clipping.
    pub fn write_pixel(&self, x: i32, y: i32, color: Rgb565) -> bool {
        if !(0..self.width as i32).contains(&x) || !(0..self.height as i32).contains(&y) {
            return false;
        }
        let (index, offset) = self.offset(x as u16, y as u16);
        let bytes = color.to_be_bytes();

        let mut tile = self.lock(index);
        if tile.bytes[offset..offset + BYTES_PER_PIXEL] == bytes {
            return false;
        }
        tile.bytes[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&bytes);
        tile.dirty = true;
        true
    }

    /// Read back a pixel, `None` outside the screen.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        if !(0..self.width as i32).contains(&x) || !(0..self.height as i32).contains(&y) {
            return None;
        }
        let (index, offset) = self.offset(x as u16, y as u16);
        let tile = self.lock(index);
        let packed = u16::from_be_bytes([tile.bytes[offset], tile.bytes[offset + 1]]);
        Some(Rgb565::from_rgb(
            (packed >> 8) as u8 & 0xf8,
            (packed >> 3) as u8 & 0xfc,
            (packed << 3) as u8,
        ))
    }

    /// Set every pixel of every tile to `color`, marking changed tiles dirty.
    pub fn fill(&self, color: Rgb565) {
        let bytes = color.to_be_bytes();
        for index in 0..self.len() {
            let mut tile = self.lock(index);
            let changed = tile.bytes.chunks_exact(BYTES_PER_PIXEL).any(|px| px != bytes);
            if changed {
                for px in tile.bytes.chunks_exact_mut(BYTES_PER_PIXEL) {
                    px.copy_from_slice(&bytes);
                }
                tile.dirty = true;
            }
        }
    }

    pub fn is_dirty(&self, index: usize) -> bool {
        self.lock(index).dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&self, index: usize) -> bool {
        let mut tile = self.lock(index);
        let dirty = tile.dirty;
        tile.dirty = false;
        dirty
    }

    pub fn mark_dirty(&self, index: usize) {
        self.lock(index).dirty = true;
    }

    /// Copy the bytes of tile `index` into `out`, replacing its content.
    pub fn snapshot(&self, index: usize, out: &mut Vec<u8>) {
        let tile = self.lock(index);
        out.clear();
        out.extend_from_slice(&tile.bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::named::*;

    fn clean(grid: &TileGrid) {
        for i in 0..grid.len() {
            grid.take_dirty(i);
        }
    }

    #[test]
    fn every_pixel_maps_to_exactly_one_tile() {
        let grid = TileGrid::new(100, 50, 32, 24);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.len(), 12);

        let mut covered = vec![0u8; 100 * 50];
        for i in 0..grid.len() {
            let a = grid.area(i);
            for y in a.y..=a.y_end() {
                for x in a.x..=a.x_end() {
                    covered[y as usize * 100 + x as usize] += 1;
                    assert_eq!(grid.index_of(x, y), i);
                }
            }
        }
        assert!(covered.iter().all(|&c| c == 1));
        assert_eq!(grid.area(11), TileArea { x: 96, y: 48, width: 4, height: 2 });
    }

    #[test]
    fn write_marks_only_its_tile_dirty() {
        let grid = TileGrid::new(64, 48, 32, 24);
        clean(&grid);

        assert!(grid.write_pixel(40, 30, RED));
        assert!(grid.is_dirty(grid.index_of(40, 30)));
        assert_eq!((0..4).filter(|&i| grid.is_dirty(i)).count(), 1);
        assert_eq!(grid.pixel(40, 30), Some(RED));
    }

    #[test]
    fn rewriting_the_same_color_is_not_a_change() {
        let grid = TileGrid::new(64, 48, 32, 24);
        grid.write_pixel(1, 1, BLUE);
        clean(&grid);

        assert!(!grid.write_pixel(1, 1, BLUE));
        assert!(!grid.is_dirty(0));
    }

    #[test]
    fn off_screen_writes_are_dropped() {
        let grid = TileGrid::new(64, 48, 32, 24);
        clean(&grid);
        for (x, y) in [(-1, 0), (0, -1), (64, 0), (0, 48), (i32::MAX, i32::MIN)] {
            assert!(!grid.write_pixel(x, y, WHITE));
            assert_eq!(grid.pixel(x, y), None);
        }
        assert!((0..grid.len()).all(|i| !grid.is_dirty(i)));
    }

    #[test]
    fn snapshot_holds_big_endian_pixels_at_local_offsets() {
        let grid = TileGrid::new(64, 48, 32, 24);
        grid.write_pixel(33, 25, RED);

        let mut bytes = Vec::new();
        grid.snapshot(3, &mut bytes);
        assert_eq!(bytes.len(), 32 * 24 * 2);
        let offset = (1 * 32 + 1) * 2;
        assert_eq!(&bytes[offset..offset + 2], &[0xf8, 0x00]);
    }

    #[test]
    fn fill_dirties_changed_tiles() {
        let grid = TileGrid::new(64, 48, 32, 24);
        clean(&grid);
        grid.fill(BLACK);
        assert!((0..grid.len()).all(|i| !grid.is_dirty(i)));
        grid.fill(YELLOW);
        assert!((0..grid.len()).all(|i| grid.is_dirty(i)));
        assert_eq!(grid.pixel(63, 47), Some(YELLOW));
    }
}
