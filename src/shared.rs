//! Transport shared between callers
//!
//! A [`Transport`] is written through `&mut self`, which already rules out
//! concurrent writers. When several callers need the strip, wrap it in a
//! [`SharedTransport`]: every send and every connection change runs inside a
//! critical section, so packets from different callers never interleave.

use core::cell::RefCell;
use std::io::Write;

use critical_section::Mutex;

use crate::{ColorSink, color::Rgb, error::TransportError, transport::Transport};

/// [`Transport`] guarded by a critical section
///
/// On a host the `critical-section` std implementation is a single
/// process-wide lock. A blocking serial write (up to the port's write
/// timeout) therefore holds up every other critical section in the
/// process, including those of unrelated `SharedTransport`s.
pub struct SharedTransport<W: Write> {
    inner: Mutex<RefCell<Transport<W>>>,
}

impl<W: Write> SharedTransport<W> {
    pub const fn new(transport: Transport<W>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(transport)),
        }
    }

    /// Run `f` with exclusive access to the transport
    ///
    /// `f` runs under the global lock, so keep it short and do not call
    /// back into the same `SharedTransport` from it.
    pub fn with<R>(&self, f: impl FnOnce(&mut Transport<W>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    pub fn send_color(&self, index: usize, color: Rgb) -> Result<(), TransportError> {
        self.with(|transport| transport.send_color(index, color))
    }

    /// Swap in a new connection, e.g. after rediscovery
    pub fn attach(&self, connection: W) -> Option<W> {
        self.with(|transport| transport.attach(connection))
    }

    pub fn detach(&self) -> Option<W> {
        self.with(Transport::detach)
    }

    pub fn is_connected(&self) -> bool {
        self.with(|transport| transport.is_connected())
    }

    pub fn into_inner(self) -> Transport<W> {
        self.inner.into_inner().into_inner()
    }
}

impl<W: Write> ColorSink for &SharedTransport<W> {
    fn send_color(&mut self, index: usize, color: Rgb) -> Result<(), TransportError> {
        SharedTransport::send_color(*self, index, color)
    }
}
