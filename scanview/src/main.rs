use clap::{Arg, Command};
use scanview::{
    run_acquisition_loop, AcquisitionMode, Connection, FrameStyle, JsonStreamSource,
    MinifbPresenter, ScanSource, ScanViewError, ShutdownLatch, ViewWindow, Viewer,
};

const IMG_WIDTH: usize = 800;
const IMG_HEIGHT: usize = 800;
const FPS: usize = 60;
const WINDOW_TITLE: &str = "scanview";

/// Operator-calibrated view: x = -1000..6000 mm, y = -6000..6000 mm.
const VIEW_WINDOW: ViewWindow = ViewWindow {
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

/// Scanning window of the head, in degrees around the front direction.
const SCAN_MIN_DEGREE: f64 = -120.;
const SCAN_MAX_DEGREE: f64 = 120.;

fn get_connection() -> Connection {
    let matches = Command::new("scanview")
        .about("Polls a rotating range finder and draws each scan as 2D obstacle points.")
        .disable_version_flag(true)
        .arg(
            Arg::new("device")
                .long("device")
                .help("The device path to a serial port")
                .default_value("/dev/ttyACM0"),
        )
        .arg(
            Arg::new("baud")
                .long("baud")
                .help("Serial baud rate")
                .value_parser(clap::value_parser!(u32))
                .default_value("115200"),
        )
        .arg(
            Arg::new("tcp")
                .long("tcp")
                .help("Connect to HOST:PORT over TCP instead of a serial port"),
        )
        .get_matches();

    if let Some(addr) = matches.get_one::<String>("tcp") {
        return Connection::Tcp {
            addr: addr.to_string(),
        };
    }
    let path: &String = matches.get_one("device").unwrap();
    let baud: u32 = *matches.get_one("baud").unwrap();
    Connection::Serial {
        path: path.to_string(),
        baud,
    }
}

fn run(connection: &Connection, latch: &ShutdownLatch) -> Result<(), ScanViewError> {
    let mut source = JsonStreamSource::open(connection).map_err(|e| {
        log::error!("Failed to open {}: {}", connection, e);
        e
    })?;
    let calibration = source.calibration().clone();
    log::info!(
        "Connected to {}: distances {}..{} mm, steps {}..{}, front step {}",
        connection,
        calibration.min_distance,
        calibration.max_distance,
        calibration.min_step,
        calibration.max_step,
        calibration.front_step
    );

    let first = calibration.deg_to_step(SCAN_MIN_DEGREE);
    let last = calibration.deg_to_step(SCAN_MAX_DEGREE);
    source.configure(first, last, 0).map_err(|e| {
        log::error!("Failed to set the scan window to steps {}..{}: {}", first, last, e);
        e
    })?;
    source
        .start(AcquisitionMode::Distance, None, 0)
        .map_err(|e| {
            log::error!("Failed to start acquisition: {}", e);
            e
        })?;
    log::info!("Acquiring steps {}..{} continuously", first, last);

    let viewer = Viewer::new(VIEW_WINDOW, IMG_WIDTH, IMG_HEIGHT, STYLE);
    let mut presenter = MinifbPresenter::new(WINDOW_TITLE, IMG_WIDTH, IMG_HEIGHT, FPS)
        .map_err(|e| {
            log::error!("Failed to open the display window: {}", e);
            e
        })?;

    run_acquisition_loop(&mut source, &viewer, &mut presenter, latch).map_err(|e| {
        log::error!("Acquisition failed: {}", e);
        e
    })
}

fn main() {
    env_logger::init();

    let latch = ShutdownLatch::new();
    if let Err(e) = latch.hook_interrupt() {
        log::error!("Failed to install the interrupt handler: {}", e);
        std::process::exit(1);
    }

    let connection = get_connection();
    if run(&connection, &latch).is_err() {
        std::process::exit(1);
    }
}
