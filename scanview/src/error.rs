use std::error::Error;
use std::fmt::{Debug, Display};
use std::{fmt, io};

#[derive(Debug)]
pub enum ScanViewError {
    DeviceError(String),
    ProtocolError(String),
    Disconnected,
    SignalError(ctrlc::Error),
    WindowError(minifb::Error),
    EncodingError(serde_json::Error),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for ScanViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanViewError::DeviceError(message) => {
                write!(f, "The sensor reported an error: {}", message)
            }
            ScanViewError::ProtocolError(detail) => {
                write!(f, "Unexpected data on the sensor stream: {}", detail)
            }
            ScanViewError::Disconnected => write!(f, "The sensor stream was closed by the peer"),
            ScanViewError::SignalError(err) => Display::fmt(&err, f),
            ScanViewError::WindowError(err) => Display::fmt(&err, f),
            ScanViewError::EncodingError(err) => Display::fmt(&err, f),
            ScanViewError::SerialError(err) => Display::fmt(&err, f),
            ScanViewError::IoError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for ScanViewError {}

impl From<io::Error> for ScanViewError {
    fn from(err: io::Error) -> Self {
        ScanViewError::IoError(err)
    }
}

impl From<serialport::Error> for ScanViewError {
    fn from(err: serialport::Error) -> Self {
        ScanViewError::SerialError(err)
    }
}

impl From<serde_json::Error> for ScanViewError {
    fn from(err: serde_json::Error) -> Self {
        ScanViewError::EncodingError(err)
    }
}

impl From<minifb::Error> for ScanViewError {
    fn from(err: minifb::Error) -> Self {
        ScanViewError::WindowError(err)
    }
}

impl From<ctrlc::Error> for ScanViewError {
    fn from(err: ctrlc::Error) -> Self {
        ScanViewError::SignalError(err)
    }
}
