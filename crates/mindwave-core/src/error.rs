use mindwave_decode::{DecodeError, WaveNamesError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("byte source closed")]
    Closed,
    #[error("timed out waiting for data")]
    Timeout,
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

/// Failure to obtain one verified packet. Everything except `Source` is
/// recovered by resynchronizing.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid packet length {length} (max 169)")]
    OversizedLength { length: u8 },
    #[error("wrong checksum {computed:#04x} != {expected:#04x}")]
    Checksum { computed: u8, expected: u8 },
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("payload decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    WaveNames(#[from] WaveNamesError),
    #[error("baud rate must be non-zero")]
    InvalidBaudRate,
}
