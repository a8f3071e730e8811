use log::{debug, warn};
use mindwave_decode::{PayloadDecoder, ReadingSet};

use crate::config::{DecodeErrorPolicy, MindwaveConfig};
use crate::error::{FrameError, SourceError, StreamError};
use crate::framer::Framer;
use crate::packet::ChecksumReader;
use crate::source::ByteSource;

/// Pulls packets off a [`ByteSource`] and yields one [`ReadingSet`] per
/// valid packet.
///
/// Bad lengths and checksum mismatches are skipped. The iterator ends when
/// the source closes; a source failure or (by default) an undecodable
/// payload is yielded once as an error, after which the iterator is done.
pub struct ReadingStream<S> {
    framer: Framer<S>,
    decoder: PayloadDecoder,
    skip_raw_wave: bool,
    on_decode_error: DecodeErrorPolicy,
    finished: bool,
}

impl<S: ByteSource> ReadingStream<S> {
    pub fn new(source: S, cfg: &MindwaveConfig) -> Self {
        Self {
            framer: Framer::new(source),
            decoder: PayloadDecoder::new(cfg.waves.clone()),
            skip_raw_wave: cfg.skip_raw_wave,
            on_decode_error: cfg.on_decode_error,
            finished: false,
        }
    }

    /// Blocks until the next reading is available. `Ok(None)` means the
    /// source closed.
    pub fn next_reading(&mut self) -> Result<Option<ReadingSet>, StreamError> {
        while self.framer.source().is_open() {
            let payload = match self.read_frame() {
                Ok(payload) => payload,
                Err(FrameError::Source(SourceError::Closed)) => return Ok(None),
                Err(FrameError::Source(e)) => return Err(e.into()),
                Err(e @ FrameError::OversizedLength { .. }) => {
                    warn!("{e}, skipping packet");
                    continue;
                }
                Err(FrameError::Checksum { .. }) => continue,
            };

            let readings = match self.decoder.decode(&payload) {
                Ok(readings) => readings,
                Err(e) => match self.on_decode_error {
                    DecodeErrorPolicy::Terminate => return Err(e.into()),
                    DecodeErrorPolicy::SkipPacket => {
                        warn!("{e}, skipping packet");
                        continue;
                    }
                },
            };

            if self.skip_raw_wave && readings.is_raw_wave_only() {
                debug!("skipping raw wave only packet");
                continue;
            }
            return Ok(Some(readings));
        }
        Ok(None)
    }

    fn read_frame(&mut self) -> Result<Vec<u8>, FrameError> {
        let length = self.framer.next_length()?;
        ChecksumReader::new(self.framer.source_mut()).read_packet(length)
    }

    pub fn into_inner(self) -> S {
        self.framer.into_inner()
    }
}

impl<S: ByteSource> Iterator for ReadingStream<S> {
    type Item = Result<ReadingSet, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_reading() {
            Ok(Some(readings)) => Some(Ok(readings)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
