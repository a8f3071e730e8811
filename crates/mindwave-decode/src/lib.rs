//! ThinkGear payload decoding: field codes, checksums and reading sets.

pub mod checksum;
pub mod code;
pub mod error;
pub mod layout;
pub mod payload;
pub mod reading;
pub mod waves;

pub use checksum::checksum;
pub use code::{FieldCode, FieldKind};
pub use error::{DecodeError, WaveNamesError};
pub use payload::PayloadDecoder;
pub use reading::{BandPowers, ReadingSet, Value};
pub use waves::WaveNames;
