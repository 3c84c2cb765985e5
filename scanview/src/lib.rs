pub mod canvas;
pub mod connection;
pub mod error;
pub mod presenter;
pub mod projector;
pub mod shutdown;
pub mod source;
pub mod view;
pub mod viewer;

pub use crate::canvas::Canvas;
pub use crate::connection::{Connection, Transport};
pub use crate::error::ScanViewError;
pub use crate::presenter::{MinifbPresenter, Presenter};
pub use crate::projector::project_scan;
pub use crate::shutdown::ShutdownLatch;
pub use crate::source::{AcquisitionMode, JsonStreamSource, ScanSource};
pub use crate::view::ViewWindow;
pub use crate::viewer::{run_acquisition_loop, FrameStyle, Viewer};
