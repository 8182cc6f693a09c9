mod tests {
    use std::{cell::RefCell, io, time::Instant};

    use serial_strip_composer::{
        ConnectError, PortDescriptor, SETTLE_DELAY, SerialBackend, discover_and_connect,
        select_port,
    };

    #[derive(Default)]
    struct FakeBackend {
        ports: Vec<PortDescriptor>,
        fail_list: bool,
        fail_open: bool,
        opened: RefCell<Vec<(String, u32)>>,
    }

    impl SerialBackend for FakeBackend {
        type Connection = Vec<u8>;

        fn list_ports(&self) -> io::Result<Vec<PortDescriptor>> {
            if self.fail_list {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(self.ports.clone())
        }

        fn open(&self, port: &PortDescriptor, baud_rate: u32) -> io::Result<Vec<u8>> {
            if self.fail_open {
                return Err(io::Error::new(io::ErrorKind::ResourceBusy, "busy"));
            }
            self.opened.borrow_mut().push((port.path.clone(), baud_rate));
            Ok(Vec::new())
        }
    }

    fn ports() -> Vec<PortDescriptor> {
        vec![
            PortDescriptor::new("/dev/ttyS0", "ttyS0", ""),
            PortDescriptor::new("/dev/ttyUSB0", "FT232R", "FTDI USB Serial"),
            PortDescriptor::new("/dev/ttyACM0", "ttyACM0", "USB-Arduino-Nano"),
            PortDescriptor::new("/dev/ttyACM1", "Arduino Uno", ""),
        ]
    }

    #[test]
    fn test_looks_like_arduino() {
        let by_name = PortDescriptor::new("COM3", "Arduino Nano Every (COM3)", "");
        let by_description = PortDescriptor::new("COM4", "COM4", "ARDUINO LLC");
        let other = PortDescriptor::new("COM5", "COM5", "CP2102 USB to UART");

        assert!(by_name.looks_like_arduino());
        assert!(by_description.looks_like_arduino());
        assert!(!other.looks_like_arduino());
    }

    #[test]
    fn test_select_port_by_description() {
        let ports = vec![
            PortDescriptor::new("/dev/ttyS0", "ttyS0", ""),
            PortDescriptor::new("/dev/ttyACM0", "ttyACM0", "USB-Arduino-Nano"),
        ];
        assert_eq!(select_port(&ports).unwrap().path, "/dev/ttyACM0");
    }

    #[test]
    fn test_select_port_first_match_wins() {
        let ports = ports();
        assert_eq!(select_port(&ports).unwrap().path, "/dev/ttyACM0");
    }

    #[test]
    fn test_select_port_none() {
        let ports = vec![PortDescriptor::new("/dev/ttyS0", "ttyS0", "16550A")];
        assert!(select_port(&ports).is_none());
        assert!(select_port(&[]).is_none());
    }

    #[test]
    fn test_discover_opens_and_always_settles() {
        let backend = FakeBackend {
            ports: ports(),
            ..Default::default()
        };

        let started = Instant::now();
        let connection = discover_and_connect(&backend, 9600).unwrap();
        let elapsed = started.elapsed();

        assert!(connection.is_empty());
        assert_eq!(
            backend.opened.borrow().as_slice(),
            &[("/dev/ttyACM0".to_owned(), 9600)]
        );
        assert_eq!(SETTLE_DELAY.as_millis(), 1000);
        assert!(elapsed.as_millis() >= 1000, "returned after {elapsed:?}");
    }

    #[test]
    fn test_discover_no_device() {
        let backend = FakeBackend {
            ports: vec![PortDescriptor::new("/dev/ttyS0", "ttyS0", "")],
            ..Default::default()
        };

        let result = discover_and_connect(&backend, 9600);
        assert!(matches!(result, Err(ConnectError::NoDeviceFound)));
        assert!(backend.opened.borrow().is_empty());
    }

    #[test]
    fn test_discover_no_ports() {
        let result = discover_and_connect(&FakeBackend::default(), 9600);
        assert!(matches!(result, Err(ConnectError::NoDeviceFound)));
    }

    #[test]
    fn test_discover_open_failed() {
        let backend = FakeBackend {
            ports: ports(),
            fail_open: true,
            ..Default::default()
        };

        match discover_and_connect(&backend, 9600) {
            Err(ConnectError::OpenFailed { port, source }) => {
                assert_eq!(port, "/dev/ttyACM0");
                assert_eq!(source.kind(), io::ErrorKind::ResourceBusy);
            }
            other => panic!("Expected OpenFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_enumerate_failed() {
        let backend = FakeBackend {
            fail_list: true,
            ..Default::default()
        };
        let result = discover_and_connect(&backend, 9600);
        assert!(matches!(result, Err(ConnectError::Enumerate(_))));
    }

    #[cfg(feature = "serial")]
    mod system_ports {
        use serial_strip_composer::{PortDescriptor, select_port};
        use serialport::{SerialPortInfo, SerialPortType, UsbPortInfo};

        fn usb_port(
            path: &str,
            manufacturer: Option<&str>,
            product: Option<&str>,
        ) -> SerialPortInfo {
            SerialPortInfo {
                port_name: path.to_owned(),
                port_type: SerialPortType::UsbPort(UsbPortInfo {
                    vid: 0x2341,
                    pid: 0x0058,
                    serial_number: None,
                    manufacturer: manufacturer.map(str::to_owned),
                    product: product.map(str::to_owned),
                }),
            }
        }

        fn other_port(path: &str, port_type: SerialPortType) -> SerialPortInfo {
            SerialPortInfo {
                port_name: path.to_owned(),
                port_type,
            }
        }

        #[test]
        fn test_usb_port_maps_product_and_manufacturer() {
            let info = usb_port(
                "/dev/ttyACM0",
                Some("Arduino LLC"),
                Some("Arduino Nano Every"),
            );
            let port = PortDescriptor::from(info);

            assert_eq!(port.path, "/dev/ttyACM0");
            assert_eq!(port.name, "Arduino Nano Every");
            assert_eq!(port.description, "Arduino LLC Arduino Nano Every");
            assert!(port.looks_like_arduino());
        }

        #[test]
        fn test_usb_port_matched_by_manufacturer_only() {
            let port = PortDescriptor::from(usb_port("COM3", Some("Arduino LLC"), None));

            assert_eq!(port.path, "COM3");
            assert_eq!(port.name, "COM3");
            assert_eq!(port.description, "Arduino LLC");
            assert!(port.looks_like_arduino());
        }

        #[test]
        fn test_usb_port_without_strings_falls_back_to_short_name() {
            let port = PortDescriptor::from(usb_port("/dev/ttyUSB0", None, None));

            assert_eq!(port.name, "ttyUSB0");
            assert_eq!(port.description, "");
            assert!(!port.looks_like_arduino());
        }

        #[test]
        fn test_unknown_and_pci_ports_do_not_match() {
            let unknown = PortDescriptor::from(other_port("/dev/ttyS0", SerialPortType::Unknown));
            assert_eq!(unknown.path, "/dev/ttyS0");
            assert_eq!(unknown.name, "ttyS0");
            assert_eq!(unknown.description, "");
            assert!(!unknown.looks_like_arduino());

            let pci = PortDescriptor::from(other_port("/dev/ttyS4", SerialPortType::PciPort));
            assert_eq!(pci.name, "ttyS4");
            assert_eq!(pci.description, "PCI");
            assert!(!pci.looks_like_arduino());
        }

        #[test]
        fn test_enumerated_arduino_is_selected() {
            let ports: Vec<PortDescriptor> = vec![
                other_port("/dev/ttyS0", SerialPortType::PciPort),
                usb_port("/dev/ttyUSB0", Some("FTDI"), Some("FT232R USB UART")),
                usb_port("/dev/ttyACM0", Some("Arduino LLC"), Some("Arduino Uno")),
            ]
            .into_iter()
            .map(PortDescriptor::from)
            .collect();

            assert_eq!(select_port(&ports).unwrap().path, "/dev/ttyACM0");
        }
    }
}
