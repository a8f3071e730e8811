use log::warn;
use mindwave_decode::checksum;

use crate::error::FrameError;
use crate::source::ByteSource;

/// Reads a payload of known length and the checksum byte that trails it.
pub struct ChecksumReader<'a, S: ?Sized> {
    source: &'a mut S,
}

impl<'a, S: ByteSource + ?Sized> ChecksumReader<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }

    /// On a checksum mismatch the packet's bytes are already consumed; the
    /// caller should go back to waiting for sync.
    pub fn read_packet(&mut self, length: usize) -> Result<Vec<u8>, FrameError> {
        let payload = self.source.read(length)?;
        let computed = checksum(&payload);
        let expected = self.source.read_byte()?;

        if computed != expected {
            warn!("wrong checksum {computed:#04x} != {expected:#04x}, skipping packet");
            return Err(FrameError::Checksum { computed, expected });
        }
        Ok(payload)
    }
}
