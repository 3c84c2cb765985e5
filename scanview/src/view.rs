/// Fixed mapping from a physical rectangle (in mm) onto a pixel canvas.
///
/// `y_max` maps to pixel row zero, so physical "up" stays up on screen.
/// The window is operator-calibrated configuration; it is never derived
/// from the data. Points mapping outside the canvas are rejected, not
/// clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewWindow {
    /// Pixel column of a physical x position, or `None` outside
    /// `[0, width)`. Fractional columns truncate toward zero.
    pub fn col_of(&self, x: f64, width: usize) -> Option<usize> {
        let col = (x - self.x_min) / (self.x_max - self.x_min) * (width as f64);
        let col = col as i64;
        if 0 <= col && col < width as i64 {
            Some(col as usize)
        } else {
            None
        }
    }

    /// Pixel row of a physical y position, or `None` outside
    /// `[0, height)`. Fractional rows truncate toward zero.
    pub fn row_of(&self, y: f64, height: usize) -> Option<usize> {
        let row = (self.y_max - y) / (self.y_max - self.y_min) * (height as f64);
        let row = row as i64;
        if 0 <= row && row < height as i64 {
            Some(row as usize)
        } else {
            None
        }
    }

    /// Pixel position of a physical point, or `None` when either axis
    /// falls outside the canvas.
    pub fn to_pixel(&self, x: f64, y: f64, width: usize, height: usize) -> Option<(usize, usize)> {
        Some((self.col_of(x, width)?, self.row_of(y, height)?))
    }
}
