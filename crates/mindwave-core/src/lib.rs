//! Core functionalities: byte sources, packet framing, the reading stream, serial I/O.

pub mod config;
pub mod error;
pub mod framer;
pub mod packet;
pub mod serial_service;
pub mod source;
pub mod stream;

pub use config::{DecodeErrorPolicy, MindwaveConfig};
pub use error::{ConfigError, FrameError, SourceError, StreamError};
pub use framer::Framer;
pub use packet::ChecksumReader;
pub use serial_service::{open_serial, MindwaveEvent, MindwaveService, PortInfo, SerialSource};
pub use source::{ByteSource, IoSource};
pub use stream::ReadingStream;

pub use mindwave_decode::{BandPowers, DecodeError, FieldCode, PayloadDecoder, ReadingSet, Value, WaveNames};
