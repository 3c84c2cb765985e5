/// Fixed-size pixel buffer. Each pixel is `0x00RRGGBB`, the layout the
/// presentation window consumes directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn filled(width: usize, height: usize, color: u32) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Filled disc centered on `(cx, cy)`, clipped at the canvas edges.
    pub fn draw_disc(&mut self, cx: usize, cy: usize, radius: u32, color: u32) {
        let r = radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let x = cx as i64 + dx;
                let y = cy as i64 + dy;
                if x >= 0 && y >= 0 {
                    self.set(x as usize, y as usize, color);
                }
            }
        }
    }

    /// Full-width horizontal line at row `y`.
    pub fn draw_hline(&mut self, y: usize, color: u32) {
        for x in 0..self.width {
            self.set(x, y, color);
        }
    }

    /// Full-height vertical line at column `x`.
    pub fn draw_vline(&mut self, x: usize, color: u32) {
        for y in 0..self.height {
            self.set(x, y, color);
        }
    }
}
