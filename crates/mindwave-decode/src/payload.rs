use crate::code::{FieldCode, FieldKind};
use crate::error::DecodeError;
use crate::layout::{ASIC_EEG_LEN, BAND_COUNT, BAND_WIDTH, RAW_WAVE_LEN};
use crate::reading::{BandPowers, ReadingSet, Value};
use crate::waves::WaveNames;

/// Bounds-checked view of a payload while one field is being read.
struct FieldReader<'a> {
    payload: &'a [u8],
    code: FieldCode,
}

impl<'a> FieldReader<'a> {
    fn new(payload: &'a [u8], code: FieldCode) -> Self {
        Self { payload, code }
    }

    fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::Truncated {
                code: self.code,
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(range.clone())
            .ok_or(DecodeError::Truncated {
                code: self.code,
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

/// Turns a checksum-verified payload into a [`ReadingSet`].
///
/// Each field starts with a [`FieldCode`] byte; the code decides how many of
/// the following bytes belong to it. Decoding walks the payload once, front
/// to back, and keeps no state between calls.
#[derive(Debug, Clone, Default)]
pub struct PayloadDecoder {
    waves: WaveNames,
}

impl PayloadDecoder {
    pub fn new(waves: WaveNames) -> Self {
        Self { waves }
    }

    pub fn waves(&self) -> &WaveNames {
        &self.waves
    }

    pub fn decode(&self, payload: &[u8]) -> Result<ReadingSet, DecodeError> {
        let mut readings = ReadingSet::new();
        let mut offset = 0;

        while offset < payload.len() {
            let byte = payload[offset];
            let code = FieldCode::from_byte(byte)
                .ok_or(DecodeError::UnknownFieldCode { code: byte, offset })?;
            let reader = FieldReader::new(payload, code);

            let (value, next) = match code.kind() {
                FieldKind::Scalar => read_scalar(&reader, offset)?,
                FieldKind::RawWave => read_raw_wave(&reader, offset)?,
                FieldKind::Composite => self.read_asic_eeg(&reader, offset)?,
            };

            readings.insert(code, value);
            offset = next;
        }

        Ok(readings)
    }

    fn read_asic_eeg(
        &self,
        reader: &FieldReader<'_>,
        tag: usize,
    ) -> Result<(Value, usize), DecodeError> {
        // Declared length is read but not trusted: devices report 18 while
        // sending the full 24 bytes.
        let _declared = reader.read_u8(tag + 1)?;
        let start = tag + 2;
        let end = start + ASIC_EEG_LEN;
        let block = reader.read_slice(start..end)?;

        let mut bands = BandPowers::with_capacity(BAND_COUNT);
        for (name, chunk) in self.waves.iter().zip(block.chunks_exact(BAND_WIDTH)) {
            bands.push(name, u32::from_be_bytes([0, chunk[0], chunk[1], chunk[2]]));
        }

        Ok((Value::Bands(bands), end))
    }
}

fn read_scalar(reader: &FieldReader<'_>, tag: usize) -> Result<(Value, usize), DecodeError> {
    let value = reader.read_u8(tag + 1)?;
    Ok((Value::Scalar(value), tag + 2))
}

fn read_raw_wave(reader: &FieldReader<'_>, tag: usize) -> Result<(Value, usize), DecodeError> {
    let length = reader.read_u8(tag + 1)?;
    if length != RAW_WAVE_LEN {
        return Err(DecodeError::RawWaveLength {
            length,
            offset: tag + 1,
        });
    }

    let start = tag + 2;
    let end = start + usize::from(RAW_WAVE_LEN);
    let bytes = reader.read_slice(start..end)?;
    let sample = i16::from_be_bytes([bytes[0], bytes[1]]);

    Ok((Value::Sample(sample), end))
}
