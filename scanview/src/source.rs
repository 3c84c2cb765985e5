use std::io::{BufRead, BufReader, ErrorKind, Write};

use scanview_data::{Calibration, Scan, ValidRange};
use serde::{Deserialize, Serialize};

use crate::connection::{Connection, Transport};
use crate::error::ScanViewError;

/// What the sensor should measure while scanning continuously.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcquisitionMode {
    Distance,
    DistanceIntensity,
}

/// Supplier of range scans.
///
/// One full sweep is returned per [`ScanSource::next_scan`] call. The
/// calibration-derived accessors are constant once the source is open.
pub trait ScanSource {
    /// Restrict acquisition to the head steps `first_step..=last_step`,
    /// grouping `skip + 1` adjacent steps into one sample.
    fn configure(&mut self, first_step: i32, last_step: i32, skip: u32)
        -> Result<(), ScanViewError>;

    /// Begin continuous acquisition. A `times` of `None` repeats forever.
    fn start(
        &mut self,
        mode: AcquisitionMode,
        times: Option<u32>,
        skip: u32,
    ) -> Result<(), ScanViewError>;

    /// Block until the next full sweep arrives.
    fn next_scan(&mut self) -> Result<Scan, ScanViewError>;

    /// Measurement band from the sensor calibration.
    fn valid_range(&self) -> ValidRange;

    /// Angle of the sample at `index` within the configured scan window,
    /// in radian.
    fn index_to_radian(&self, index: usize) -> f64;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DeviceFrame {
    Hello(Calibration),
    Ack,
    Nak { message: String },
    Scan(Scan),
}

#[derive(Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum HostCommand {
    SetScanWindow { first: i32, last: i32, skip: u32 },
    Start {
        mode: AcquisitionMode,
        times: Option<u32>,
        skip: u32,
    },
}

/// Scan source speaking line-delimited JSON frames over a byte transport.
///
/// The first frame from the device must be its calibration (`hello`).
/// Commands are answered with `ack` or `nak`; scans arrive as `scan`
/// frames once acquisition has been started.
pub struct JsonStreamSource {
    reader: BufReader<Box<dyn Transport>>,
    line: String,
    calibration: Calibration,
    first_step: i32,
    skip: u32,
}

impl JsonStreamSource {
    pub fn open(connection: &Connection) -> Result<JsonStreamSource, ScanViewError> {
        JsonStreamSource::from_transport(connection.open()?)
    }

    pub fn from_transport(transport: Box<dyn Transport>) -> Result<JsonStreamSource, ScanViewError> {
        let mut reader = BufReader::new(transport);
        let mut line = String::new();
        let calibration = match read_frame(&mut reader, &mut line)? {
            DeviceFrame::Hello(calibration) => calibration,
            DeviceFrame::Nak { message } => return Err(ScanViewError::DeviceError(message)),
            other => {
                return Err(ScanViewError::ProtocolError(format!(
                    "expected hello, got {:?}",
                    other
                )))
            }
        };
        Ok(JsonStreamSource {
            reader,
            line,
            first_step: calibration.min_step,
            skip: 0,
            calibration,
        })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    pub fn deg_to_step(&self, degree: f64) -> i32 {
        self.calibration.deg_to_step(degree)
    }

    fn send(&mut self, command: &HostCommand) -> Result<(), ScanViewError> {
        let mut payload = serde_json::to_string(command)?;
        payload.push('\n');
        let transport = self.reader.get_mut();
        transport.write_all(payload.as_bytes())?;
        transport.flush()?;
        Ok(())
    }

    fn expect_ack(&mut self, command: &str) -> Result<(), ScanViewError> {
        match read_frame(&mut self.reader, &mut self.line)? {
            DeviceFrame::Ack => Ok(()),
            DeviceFrame::Nak { message } => Err(ScanViewError::DeviceError(message)),
            other => Err(ScanViewError::ProtocolError(format!(
                "expected ack to {}, got {:?}",
                command, other
            ))),
        }
    }
}

impl ScanSource for JsonStreamSource {
    fn configure(
        &mut self,
        first_step: i32,
        last_step: i32,
        skip: u32,
    ) -> Result<(), ScanViewError> {
        self.send(&HostCommand::SetScanWindow {
            first: first_step,
            last: last_step,
            skip,
        })?;
        self.expect_ack("set_scan_window")?;
        self.first_step = first_step;
        self.skip = skip;
        Ok(())
    }

    fn start(
        &mut self,
        mode: AcquisitionMode,
        times: Option<u32>,
        skip: u32,
    ) -> Result<(), ScanViewError> {
        self.send(&HostCommand::Start { mode, times, skip })?;
        self.expect_ack("start")?;
        self.skip = skip;
        Ok(())
    }

    fn next_scan(&mut self) -> Result<Scan, ScanViewError> {
        match read_frame(&mut self.reader, &mut self.line)? {
            DeviceFrame::Scan(scan) => Ok(scan),
            DeviceFrame::Nak { message } => Err(ScanViewError::DeviceError(message)),
            other => Err(ScanViewError::ProtocolError(format!(
                "expected scan, got {:?}",
                other
            ))),
        }
    }

    fn valid_range(&self) -> ValidRange {
        self.calibration.valid_range()
    }

    fn index_to_radian(&self, index: usize) -> f64 {
        let step = self.first_step + (index as i32) * (self.skip as i32 + 1);
        self.calibration.step_to_radian(step)
    }
}

fn read_frame(
    reader: &mut BufReader<Box<dyn Transport>>,
    line: &mut String,
) -> Result<DeviceFrame, ScanViewError> {
    loop {
        match reader.read_line(line) {
            Ok(0) => return Err(ScanViewError::Disconnected),
            Ok(_) => {
                if line.trim().is_empty() {
                    line.clear();
                    continue;
                }
                let parsed = serde_json::from_str(line.trim());
                line.clear();
                return parsed.map_err(ScanViewError::from);
            }
            // Transport timeouts pace the poll. A partial line stays in
            // the buffer until the rest arrives.
            Err(e) if is_retryable(e.kind()) => continue,
            Err(e) => return Err(ScanViewError::IoError(e)),
        }
    }
}

fn is_retryable(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}
