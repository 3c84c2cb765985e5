use minifb::{Key, Window, WindowOptions};

use crate::canvas::Canvas;
use crate::error::ScanViewError;

/// Display surface the acquisition loop pushes frames to.
pub trait Presenter {
    /// Show one frame. Presentation paces the loop; the call returns
    /// within one display refresh. Returns `false` once the operator has
    /// closed the display.
    fn present(&mut self, canvas: &Canvas) -> Result<bool, ScanViewError>;
}

/// Presenter backed by a native window.
pub struct MinifbPresenter {
    window: Window,
}

impl MinifbPresenter {
    pub fn new(
        title: &str,
        width: usize,
        height: usize,
        fps: usize,
    ) -> Result<MinifbPresenter, ScanViewError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.set_target_fps(fps);
        Ok(MinifbPresenter { window })
    }
}

impl Presenter for MinifbPresenter {
    fn present(&mut self, canvas: &Canvas) -> Result<bool, ScanViewError> {
        self.window
            .update_with_buffer(canvas.pixels(), canvas.width(), canvas.height())?;
        Ok(self.window.is_open() && !self.window.is_key_down(Key::Escape))
    }
}
