use scanview_data::ObstaclePoint;

use crate::canvas::Canvas;
use crate::error::ScanViewError;
use crate::presenter::Presenter;
use crate::projector::project_scan;
use crate::shutdown::ShutdownLatch;
use crate::source::ScanSource;
use crate::view::ViewWindow;

/// Colors of one rendered frame, as `0x00RRGGBB`.
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle {
    pub background: u32,
    pub x_axis: u32,
    pub y_axis: u32,
    pub obstacle: u32,
}

/// Composes frames for a fixed view window: a cached background with the
/// reference axes, onto which each scan's obstacle points are stamped.
pub struct Viewer {
    window: ViewWindow,
    style: FrameStyle,
    background: Canvas,
}

impl Viewer {
    pub fn new(window: ViewWindow, width: usize, height: usize, style: FrameStyle) -> Viewer {
        let mut background = Canvas::filled(width, height, style.background);
        if let Some(row) = window.row_of(0., height) {
            background.draw_hline(row, style.x_axis);
        }
        if let Some(col) = window.col_of(0., width) {
            background.draw_vline(col, style.y_axis);
        }
        Viewer {
            window,
            style,
            background,
        }
    }

    pub fn background(&self) -> &Canvas {
        &self.background
    }

    /// Fresh frame from the cached background with all in-window points
    /// stamped. Points mapping outside the canvas are dropped silently.
    pub fn compose(&self, points: &[ObstaclePoint]) -> Canvas {
        let mut canvas = self.background.clone();
        for point in points {
            if let Some((x, y)) =
                self.window
                    .to_pixel(point.x, point.y, canvas.width(), canvas.height())
            {
                canvas.draw_disc(x, y, 1, self.style.obstacle);
            }
        }
        canvas
    }
}

/// Poll scans and present them until a stop is requested or the display
/// is closed. The latch is checked before each acquisition, never during
/// one, so an in-flight scan always finishes its frame first.
///
/// A single acquisition or presentation failure terminates the loop with
/// an error; there is no retry.
pub fn run_acquisition_loop<S, P>(
    source: &mut S,
    viewer: &Viewer,
    presenter: &mut P,
    latch: &ShutdownLatch,
) -> Result<(), ScanViewError>
where
    S: ScanSource,
    P: Presenter,
{
    let range = source.valid_range();
    loop {
        if latch.is_stop_requested() {
            log::info!("Stop requested, leaving the acquisition loop");
            return Ok(());
        }

        let scan = source.next_scan()?;
        let points = project_scan(&scan, range, |index| source.index_to_radian(index));
        log::debug!(
            "Scan at {}: {} samples, {} in range",
            scan.timestamp,
            scan.distances.len(),
            points.len()
        );

        let frame = viewer.compose(&points);
        if !presenter.present(&frame)? {
            log::info!("Display closed, leaving the acquisition loop");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AcquisitionMode;
    use scanview_data::{Scan, ValidRange};
    use std::collections::VecDeque;

    const WINDOW: ViewWindow = ViewWindow {
        x_min: -1000.,
        x_max: 6000.,
        y_min: -6000.,
        y_max: 6000.,
    };

    const STYLE: FrameStyle = FrameStyle {
        background: 0xB6B6B6,
        x_axis: 0x0000C8,
        y_axis: 0x00C800,
        obstacle: 0xC80000,
    };

    /// Yields queued results; optionally trips the latch while the last
    /// queued scan is being acquired, like a SIGINT arriving mid-call.
    struct FakeSource {
        scans: VecDeque<Result<Scan, ScanViewError>>,
        stop_on_last: Option<ShutdownLatch>,
    }

    impl ScanSource for FakeSource {
        fn configure(&mut self, _: i32, _: i32, _: u32) -> Result<(), ScanViewError> {
            Ok(())
        }

        fn start(
            &mut self,
            _: AcquisitionMode,
            _: Option<u32>,
            _: u32,
        ) -> Result<(), ScanViewError> {
            Ok(())
        }

        fn next_scan(&mut self) -> Result<Scan, ScanViewError> {
            let scan = self.scans.pop_front().expect("source exhausted");
            if self.scans.is_empty() {
                if let Some(latch) = &self.stop_on_last {
                    latch.request_stop();
                }
            }
            scan
        }

        fn valid_range(&self) -> ValidRange {
            ValidRange { min: 20, max: 5000 }
        }

        fn index_to_radian(&self, index: usize) -> f64 {
            (index as f64) * std::f64::consts::FRAC_PI_2
        }
    }

    struct RecordingPresenter {
        frames: Vec<Canvas>,
        stay_open_for: usize,
    }

    impl RecordingPresenter {
        fn new() -> RecordingPresenter {
            RecordingPresenter {
                frames: Vec::new(),
                stay_open_for: usize::MAX,
            }
        }
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, canvas: &Canvas) -> Result<bool, ScanViewError> {
            self.frames.push(canvas.clone());
            Ok(self.frames.len() < self.stay_open_for)
        }
    }

    #[test]
    fn test_stop_during_acquisition_finishes_the_frame() {
        let latch = ShutdownLatch::new();
        let mut source = FakeSource {
            scans: VecDeque::from([Ok(Scan::new(vec![500, 3000], 1))]),
            stop_on_last: Some(latch.clone()),
        };
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let mut presenter = RecordingPresenter::new();

        let result = run_acquisition_loop(&mut source, &viewer, &mut presenter, &latch);

        assert!(result.is_ok());
        // The in-flight scan was still rendered before the stop took effect.
        assert_eq!(presenter.frames.len(), 1);
    }

    #[test]
    fn test_latch_already_set_skips_acquisition() {
        let latch = ShutdownLatch::new();
        latch.request_stop();
        let mut source = FakeSource {
            scans: VecDeque::new(),
            stop_on_last: None,
        };
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let mut presenter = RecordingPresenter::new();

        let result = run_acquisition_loop(&mut source, &viewer, &mut presenter, &latch);

        assert!(result.is_ok());
        assert!(presenter.frames.is_empty());
    }

    #[test]
    fn test_acquisition_failure_is_fatal() {
        let latch = ShutdownLatch::new();
        let mut source = FakeSource {
            scans: VecDeque::from([
                Err(ScanViewError::DeviceError("motor stalled".to_string())),
                Ok(Scan::new(vec![500], 2)),
            ]),
            stop_on_last: None,
        };
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let mut presenter = RecordingPresenter::new();

        let result = run_acquisition_loop(&mut source, &viewer, &mut presenter, &latch);

        assert!(matches!(result, Err(ScanViewError::DeviceError(_))));
        // No partial frame was rendered for the failed acquisition.
        assert!(presenter.frames.is_empty());
    }

    #[test]
    fn test_closed_display_stops_cleanly() {
        let latch = ShutdownLatch::new();
        let mut source = FakeSource {
            scans: VecDeque::from([
                Ok(Scan::new(vec![500], 1)),
                Ok(Scan::new(vec![500], 2)),
                Ok(Scan::new(vec![500], 3)),
            ]),
            stop_on_last: Some(latch.clone()),
        };
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let mut presenter = RecordingPresenter::new();
        presenter.stay_open_for = 1;

        let result = run_acquisition_loop(&mut source, &viewer, &mut presenter, &latch);

        assert!(result.is_ok());
        assert_eq!(presenter.frames.len(), 1);
    }

    #[test]
    fn test_background_carries_axes() {
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let background = viewer.background();
        // y = 0 -> row 400, x = 0 -> column 114.
        assert_eq!(background.pixel(700, 400), STYLE.x_axis);
        assert_eq!(background.pixel(114, 100), STYLE.y_axis);
        assert_eq!(background.pixel(700, 100), STYLE.background);
    }

    #[test]
    fn test_compose_stamps_only_in_window_points() {
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let inside = ObstaclePoint { x: 0., y: 3000. };
        let outside = ObstaclePoint { x: -3000., y: 0. };

        let frame = viewer.compose(&[inside, outside]);

        // (0, 3000) -> column 114, row 200.
        assert_eq!(frame.pixel(114, 200), STYLE.obstacle);
        // The out-of-window point left the background untouched.
        let changed = frame
            .pixels()
            .iter()
            .zip(viewer.background().pixels())
            .filter(|(a, b)| a != b)
            .count();
        // One radius-1 disc covers five pixels.
        assert_eq!(changed, 5);
    }

    #[test]
    fn test_compose_empty_scan_renders_background_only() {
        let viewer = Viewer::new(WINDOW, 800, 800, STYLE);
        let frame = viewer.compose(&[]);
        assert_eq!(&frame, viewer.background());
    }
}
