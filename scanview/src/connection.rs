use std::fmt;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::ScanViewError;

const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Byte stream to the sensor, independent of the underlying transport.
pub trait Transport: Read + Write + Send {}

impl<T: Read + Write + Send> Transport for T {}

/// Where the sensor lives, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Connection {
    /// Local serial device such as `/dev/ttyACM0`.
    Serial { path: String, baud: u32 },
    /// Network endpoint given as `host:port`.
    Tcp { addr: String },
}

impl Connection {
    pub fn open(&self) -> Result<Box<dyn Transport>, ScanViewError> {
        match self {
            Connection::Serial { path, baud } => {
                let port = serialport::new(path, *baud).timeout(READ_TIMEOUT).open()?;
                Ok(Box::new(port))
            }
            Connection::Tcp { addr } => {
                let stream = TcpStream::connect(addr)?;
                stream.set_read_timeout(Some(READ_TIMEOUT))?;
                Ok(Box::new(stream))
            }
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Connection::Serial { path, baud } => write!(f, "{} ({} baud)", path, baud),
            Connection::Tcp { addr } => write!(f, "tcp://{}", addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let serial = Connection::Serial {
            path: "/dev/ttyACM0".to_string(),
            baud: 115200,
        };
        assert_eq!(format!("{}", serial), "/dev/ttyACM0 (115200 baud)");

        let tcp = Connection::Tcp {
            addr: "192.168.0.10:10940".to_string(),
        };
        assert_eq!(format!("{}", tcp), "tcp://192.168.0.10:10940");
    }
}
