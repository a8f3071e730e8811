use std::io::{ErrorKind, Read};

use crate::error::SourceError;

/// Blocking supplier of bytes, one at a time.
pub trait ByteSource {
    /// Blocks until a byte is available. Returns [`SourceError::Closed`] once
    /// the source has no more data.
    fn read_byte(&mut self) -> Result<u8, SourceError>;

    fn is_open(&self) -> bool;

    /// Reads exactly `n` bytes.
    fn read(&mut self, n: usize) -> Result<Vec<u8>, SourceError> {
        let mut bytes = Vec::with_capacity(n);
        for _ in 0..n {
            bytes.push(self.read_byte()?);
        }
        Ok(bytes)
    }
}

/// Adapts any [`Read`] into a [`ByteSource`].
///
/// End of input closes the source. A timed-out read is reported but leaves
/// the source open; any other I/O error closes it.
#[derive(Debug)]
pub struct IoSource<R> {
    inner: R,
    open: bool,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, open: true }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    fn read_byte(&mut self) -> Result<u8, SourceError> {
        if !self.open {
            return Err(SourceError::Closed);
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => {
                    self.open = false;
                    return Err(SourceError::Closed);
                }
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) if e.kind() == ErrorKind::TimedOut => return Err(SourceError::Timeout),
                Err(e) => {
                    self.open = false;
                    return Err(SourceError::Io(e));
                }
            }
        }
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
