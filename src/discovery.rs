//! Controller discovery
//!
//! Picks the first serial port whose name or description mentions
//! "arduino" (case-insensitive), opens it and waits for the board to come
//! out of reset.

use std::{io, thread, time};

use log::{info, warn};

use crate::{config::SETTLE_DELAY, error::ConnectError};

const DEVICE_MARKER: &str = "arduino";

/// Backend-neutral description of a serial port
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortDescriptor {
    /// System path used to open the port, e.g. `/dev/ttyACM0` or `COM3`
    pub path: String,
    /// Human-readable port name
    pub name: String,
    /// Free-form description reported by the driver (USB product etc.)
    pub description: String,
}

impl PortDescriptor {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Whether the name or description mentions "arduino" in any case
    pub fn looks_like_arduino(&self) -> bool {
        contains_marker(&self.name) || contains_marker(&self.description)
    }
}

fn contains_marker(text: &str) -> bool {
    text.to_lowercase().contains(DEVICE_MARKER)
}

/// Source of serial ports
///
/// Implemented by [`SystemSerial`] for real hardware; tests provide their own.
pub trait SerialBackend {
    /// Open connection type
    type Connection: io::Write;

    /// List the ports currently present on the system
    fn list_ports(&self) -> io::Result<Vec<PortDescriptor>>;

    /// Open `port` at `baud_rate`
    fn open(&self, port: &PortDescriptor, baud_rate: u32) -> io::Result<Self::Connection>;
}

/// Select the first port that looks like the controller
pub fn select_port(ports: &[PortDescriptor]) -> Option<&PortDescriptor> {
    ports.iter().find(|port| port.looks_like_arduino())
}

/// Find the controller, open it and wait for it to boot
///
/// Blocks the calling thread for [`SETTLE_DELAY`] after opening. The wait
/// cannot be skipped: packets sent before the board has finished its reset
/// are lost.
pub fn discover_and_connect<B: SerialBackend>(
    backend: &B,
    baud_rate: u32,
) -> Result<B::Connection, ConnectError> {
    let connection = open_first_match(backend, baud_rate)?;
    thread::sleep(time::Duration::from_micros(SETTLE_DELAY.as_micros()));
    Ok(connection)
}

fn open_first_match<B: SerialBackend>(
    backend: &B,
    baud_rate: u32,
) -> Result<B::Connection, ConnectError> {
    let ports = backend.list_ports().map_err(ConnectError::Enumerate)?;
    if ports.is_empty() {
        warn!("No serial ports found");
        return Err(ConnectError::NoDeviceFound);
    }

    let Some(port) = select_port(&ports) else {
        warn!("No Arduino-like device among {} serial ports", ports.len());
        return Err(ConnectError::NoDeviceFound);
    };

    let connection = backend
        .open(port, baud_rate)
        .map_err(|source| ConnectError::OpenFailed {
            port: port.path.clone(),
            source,
        })?;
    info!("Connected to {} at {} baud", port.path, baud_rate);
    Ok(connection)
}

#[cfg(feature = "serial")]
pub use system::{SystemConnection, SystemSerial, connect};

#[cfg(feature = "serial")]
mod system {
    use std::{io, time::Duration};

    use serialport::{SerialPortInfo, SerialPortType};

    use super::{PortDescriptor, SerialBackend, discover_and_connect};
    use crate::{config::StripConfig, error::Error, transport::Transport};

    /// Write timeout of the opened port
    const WRITE_TIMEOUT: Duration = Duration::from_millis(500);

    pub type SystemConnection = Box<dyn serialport::SerialPort>;

    /// Serial ports of the host, provided by the `serialport` crate
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemSerial;

    impl SerialBackend for SystemSerial {
        type Connection = SystemConnection;

        fn list_ports(&self) -> io::Result<Vec<PortDescriptor>> {
            let ports = serialport::available_ports()?;
            Ok(ports.into_iter().map(PortDescriptor::from).collect())
        }

        fn open(&self, port: &PortDescriptor, baud_rate: u32) -> io::Result<Self::Connection> {
            let connection = serialport::new(&port.path, baud_rate)
                .timeout(WRITE_TIMEOUT)
                .open()?;
            Ok(connection)
        }
    }

    impl From<SerialPortInfo> for PortDescriptor {
        fn from(info: SerialPortInfo) -> Self {
            let short_name = info
                .port_name
                .rsplit('/')
                .next()
                .unwrap_or(&info.port_name)
                .to_owned();

            let (name, description) = match info.port_type {
                SerialPortType::UsbPort(usb) => {
                    let description = [usb.manufacturer.as_deref(), usb.product.as_deref()]
                        .into_iter()
                        .flatten()
                        .collect::<Vec<_>>()
                        .join(" ");
                    (usb.product.unwrap_or(short_name), description)
                }
                SerialPortType::BluetoothPort => (short_name, "Bluetooth".to_owned()),
                SerialPortType::PciPort => (short_name, "PCI".to_owned()),
                SerialPortType::Unknown => (short_name, String::new()),
            };

            Self {
                path: info.port_name,
                name,
                description,
            }
        }
    }

    /// Discover the controller and wrap it in a transport for `config`
    pub fn connect(config: &StripConfig) -> Result<Transport<SystemConnection>, Error> {
        config.validate()?;
        let connection = discover_and_connect(&SystemSerial, config.baud_rate)?;
        Ok(Transport::new(connection, config.led_count))
    }
}
