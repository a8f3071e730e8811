use thiserror::Error;

use crate::code::FieldCode;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown field code 0x{code:02X} at offset {offset}")]
    UnknownFieldCode { code: u8, offset: usize },
    #[error("raw wave length must be 2, got {length} at offset {offset}")]
    RawWaveLength { length: u8, offset: usize },
    #[error("{code:?} field truncated: need {needed} bytes, got {actual}")]
    Truncated {
        code: FieldCode,
        needed: usize,
        actual: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaveNamesError {
    #[error("expected 8 wave names, got {count}")]
    Count { count: usize },
    #[error("wave name {name:?} is used more than once")]
    Duplicate { name: String },
}
