use mindwave_decode::layout::{MAX_PAYLOAD_LEN, SYNC};

use crate::error::{FrameError, SourceError};
use crate::source::ByteSource;

/// Finds packet boundaries in the byte stream.
///
/// Owns the source; the synchronization cursor is simply the source's
/// read position.
#[derive(Debug)]
pub struct Framer<S> {
    source: S,
}

impl<S: ByteSource> Framer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Consumes bytes until two consecutive [`SYNC`] bytes have been read.
    ///
    /// The window slides one byte at a time, so `00 AA AA` syncs after the
    /// third byte.
    pub fn wait_for_sync(&mut self) -> Result<(), SourceError> {
        let mut previous = self.source.read_byte()?;
        loop {
            let current = self.source.read_byte()?;
            if previous == SYNC && current == SYNC {
                return Ok(());
            }
            previous = current;
        }
    }

    /// Reads the length byte that follows the sync marker.
    pub fn read_length(&mut self) -> Result<u8, SourceError> {
        self.source.read_byte()
    }

    /// Syncs and reads a length, rejecting lengths over the protocol maximum
    /// without reading anything further.
    pub fn next_length(&mut self) -> Result<usize, FrameError> {
        self.wait_for_sync()?;
        let length = self.read_length()?;
        if usize::from(length) > MAX_PAYLOAD_LEN {
            return Err(FrameError::OversizedLength { length });
        }
        Ok(usize::from(length))
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
