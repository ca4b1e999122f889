//! Room sizing and shelf packing
//!
//! Rooms are turned into rectangles from their target area and aspect
//! factor, then laid out left to right in rows. When a room does not fit
//! the remaining row width a new row starts below the tallest room of the
//! previous one.

/// Plan dimensions of a room rectangle, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomSize {
    pub width: f64,
    pub length: f64,
}

/// Rectangle for a room of `target_area` skewed by `aspect_factor`.
///
/// `width = sqrt(area * factor)` and `length = area / width`, so the area is
/// preserved and a factor of 1 gives a square.
pub fn room_size(target_area: f64, aspect_factor: f64) -> RoomSize {
    let width = (target_area * aspect_factor).sqrt();
    RoomSize {
        width,
        length: target_area / width,
    }
}

/// Row-by-row placement cursor
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    usable_width: f64,
    cursor_x: f64,
    cursor_y: f64,
    row_height: f64,
    max_row_width: f64,
    rows: usize,
}

impl ShelfPacker {
    pub fn new(usable_width: f64) -> Self {
        Self {
            usable_width,
            cursor_x: 0.0,
            cursor_y: 0.0,
            row_height: 0.0,
            max_row_width: 0.0,
            rows: 0,
        }
    }

    /// Place a rectangle and return its top-left corner.
    ///
    /// A rectangle wider than the whole row still gets a row of its own;
    /// nothing is clamped.
    pub fn place(&mut self, size: RoomSize) -> (f64, f64) {
        let position = if self.cursor_x + size.width <= self.usable_width {
            self.rows = self.rows.max(1);
            let position = (self.cursor_x, self.cursor_y);
            self.cursor_x += size.width;
            self.row_height = self.row_height.max(size.length);
            position
        } else {
            self.cursor_y += self.row_height;
            self.row_height = size.length;
            self.cursor_x = size.width;
            self.rows += 1;
            (0.0, self.cursor_y)
        };

        self.max_row_width = self.max_row_width.max(self.cursor_x);
        position
    }

    /// Height of the row currently being filled
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Top edge of the row currently being filled
    pub fn row_y(&self) -> f64 {
        self.cursor_y
    }

    /// Widest extent reached by any row
    pub fn max_row_width(&self) -> f64 {
        self.max_row_width
    }

    /// Number of rows opened so far
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_size_square_by_default() {
        let size = room_size(16.0, 1.0);
        assert_eq!(size.width, 4.0);
        assert_eq!(size.length, 4.0);
    }

    #[test]
    fn test_room_size_aspect_factor() {
        let size = room_size(20.0, 2.0);
        assert!((size.width - 40f64.sqrt()).abs() < 1e-12);
        assert!((size.length - 20.0 / 40f64.sqrt()).abs() < 1e-12);
        assert!((size.width - 6.3246).abs() < 1e-4);
        assert!((size.length - 3.1623).abs() < 1e-4);
    }

    #[test]
    fn test_larger_factor_is_wider() {
        let narrow = room_size(12.0, 1.5);
        let wide = room_size(12.0, 3.0);
        assert!(wide.width > narrow.width);
        assert!(wide.length < narrow.length);
    }

    #[test]
    fn test_fills_row_then_wraps() {
        let mut packer = ShelfPacker::new(10.0);
        assert_eq!(packer.place(RoomSize { width: 4.0, length: 3.0 }), (0.0, 0.0));
        assert_eq!(packer.place(RoomSize { width: 6.0, length: 2.0 }), (4.0, 0.0));
        assert_eq!(packer.row_height(), 3.0);
        assert_eq!(packer.place(RoomSize { width: 1.0, length: 1.5 }), (0.0, 3.0));
        assert_eq!(packer.row_height(), 1.5);
        assert_eq!(packer.row_y(), 3.0);
        assert_eq!(packer.rows(), 2);
        assert_eq!(packer.max_row_width(), 10.0);
    }

    #[test]
    fn test_exact_fit_stays_in_row() {
        let mut packer = ShelfPacker::new(8.0);
        packer.place(RoomSize { width: 4.0, length: 2.0 });
        assert_eq!(packer.place(RoomSize { width: 4.0, length: 2.0 }), (4.0, 0.0));
        assert_eq!(packer.rows(), 1);
    }

    #[test]
    fn test_oversized_first_room_starts_new_row_at_origin() {
        let mut packer = ShelfPacker::new(3.0);
        assert_eq!(packer.place(RoomSize { width: 5.0, length: 2.0 }), (0.0, 0.0));
        assert_eq!(packer.row_height(), 2.0);
        assert_eq!(packer.place(RoomSize { width: 1.0, length: 1.0 }), (0.0, 2.0));
    }
}
