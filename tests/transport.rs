mod tests {
    use std::io::{self, Write};

    use serial_strip_composer::{Rgb, SharedTransport, Transport, TransportError};

    /// Accepts at most `limit` bytes per write
    struct ShortWriter {
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len().min(self.limit))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Counts write calls
    #[derive(Default)]
    struct CountingWriter {
        calls: usize,
        bytes: Vec<u8>,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.calls += 1;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_send_color_writes_packet() {
        let mut transport = Transport::new(Vec::<u8>::new(), 8);
        transport.send_color(3, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(
            transport.connection().unwrap().as_slice(),
            &[0xAA, 3, 1, 2, 3, 9, 0x55]
        );
    }

    #[test]
    fn test_send_color_single_write_call() {
        let mut transport = Transport::new(CountingWriter::default(), 4);
        transport.send_color(0, Rgb::new(128, 0, 0)).unwrap();
        transport.send_color(1, Rgb::new(128, 0, 0)).unwrap();
        let writer = transport.connection().unwrap();
        assert_eq!(writer.calls, 2);
        assert_eq!(writer.bytes.len(), 14);
    }

    #[test]
    fn test_send_rgb_truncates() {
        let mut transport = Transport::new(Vec::<u8>::new(), 1);
        transport.send_rgb(0, 300, -1, 256).unwrap();
        let bytes = transport.connection().unwrap();
        assert_eq!(bytes[2..5], [44, 255, 0]);
        assert_eq!(bytes[5], 43);
    }

    #[test]
    fn test_send_color_not_connected() {
        let mut transport = Transport::<Vec<u8>>::disconnected(4);
        assert!(!transport.is_connected());
        let result = transport.send_color(0, Rgb::new(1, 1, 1));
        assert!(matches!(result, Err(TransportError::NotConnected)));
    }

    #[test]
    fn test_send_color_index_out_of_range() {
        let mut transport = Transport::new(Vec::<u8>::new(), 4);
        let result = transport.send_color(4, Rgb::new(1, 1, 1));
        assert!(matches!(
            result,
            Err(TransportError::IndexOutOfRange {
                index: 4,
                led_count: 4,
            })
        ));
        assert!(transport.connection().unwrap().is_empty());
    }

    #[test]
    fn test_send_color_short_write() {
        let mut transport = Transport::new(ShortWriter { limit: 3 }, 4);
        let result = transport.send_color(0, Rgb::new(1, 1, 1));
        assert!(matches!(result, Err(TransportError::ShortWrite { written: 3 })));
    }

    #[test]
    fn test_send_color_write_error() {
        let mut transport = Transport::new(BrokenWriter, 4);
        let result = transport.send_color(0, Rgb::new(1, 1, 1));
        match result {
            Err(TransportError::Write(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected write error, got {other:?}"),
        }
    }

    #[test]
    fn test_attach_and_detach() {
        let mut transport = Transport::disconnected(2);
        assert!(transport.attach(Vec::<u8>::new()).is_none());
        transport.send_color(1, Rgb::new(0, 0, 0)).unwrap();

        let detached = transport.detach().unwrap();
        assert_eq!(detached.len(), 7);
        assert!(matches!(
            transport.send_color(1, Rgb::new(0, 0, 0)),
            Err(TransportError::NotConnected)
        ));
    }

    #[test]
    fn test_shared_transport_serializes_threads() {
        let shared = SharedTransport::new(Transport::new(Vec::<u8>::new(), 4));

        std::thread::scope(|scope| {
            for index in 0..4 {
                let shared = &shared;
                scope.spawn(move || {
                    for _ in 0..25 {
                        shared.send_color(index, Rgb::new(10, 20, 30)).unwrap();
                    }
                });
            }
        });

        let transport = shared.into_inner();
        let bytes = transport.connection().unwrap();
        assert_eq!(bytes.len(), 4 * 25 * 7);
        for packet in bytes.chunks(7) {
            assert_eq!(packet[0], 0xAA);
            assert_eq!(packet[6], 0x55);
        }
    }

    #[test]
    fn test_shared_transport_reattach() {
        let shared = SharedTransport::new(Transport::disconnected(1));
        assert!(!shared.is_connected());
        assert!(matches!(
            shared.send_color(0, Rgb::new(1, 2, 3)),
            Err(TransportError::NotConnected)
        ));

        shared.attach(Vec::<u8>::new());
        shared.send_color(0, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(shared.detach().unwrap().len(), 7);
    }
}
