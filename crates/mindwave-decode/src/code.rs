/// Tag byte that introduces each field inside a payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FieldCode {
    /// Signal quality, 0 is best and 200 means no skin contact
    PoorSignal = 0x02,
    /// eSense attention meter, 0..=100
    Attention = 0x04,
    /// eSense meditation meter, 0..=100
    Meditation = 0x05,
    /// Strength of a detected eye blink
    BlinkStrength = 0x10,
    /// Single raw EEG sample, signed 16-bit
    RawWave = 0x50,
    /// Eight band powers computed on the headset
    AsicEeg = 0x53,
}

/// How the bytes following a tag are laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// One value byte.
    Scalar,
    /// Length byte (always 2) then a big-endian `i16`.
    RawWave,
    /// Length byte (ignored) then eight 24-bit band powers.
    Composite,
}

impl FieldCode {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(Self::PoorSignal),
            0x04 => Some(Self::Attention),
            0x05 => Some(Self::Meditation),
            0x10 => Some(Self::BlinkStrength),
            0x50 => Some(Self::RawWave),
            0x53 => Some(Self::AsicEeg),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Key under which the decoded value is stored.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PoorSignal => "poor_signal",
            Self::Attention => "attention",
            Self::Meditation => "meditation",
            Self::BlinkStrength => "blink_strength",
            Self::RawWave => "raw_wave",
            Self::AsicEeg => "asic_eeg",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::PoorSignal | Self::Attention | Self::Meditation | Self::BlinkStrength => {
                FieldKind::Scalar
            }
            Self::RawWave => FieldKind::RawWave,
            Self::AsicEeg => FieldKind::Composite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldCode, FieldKind};

    #[test]
    fn known_codes_round_trip_through_bytes() {
        for byte in [2u8, 4, 5, 16, 80, 83] {
            let code = FieldCode::from_byte(byte).unwrap();
            assert_eq!(code.as_byte(), byte);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(FieldCode::from_byte(0x03), None);
        assert_eq!(FieldCode::from_byte(0xAA), None);
    }

    #[test]
    fn names_and_kinds() {
        assert_eq!(FieldCode::BlinkStrength.name(), "blink_strength");
        assert_eq!(FieldCode::Attention.kind(), FieldKind::Scalar);
        assert_eq!(FieldCode::RawWave.kind(), FieldKind::RawWave);
        assert_eq!(FieldCode::AsicEeg.kind(), FieldKind::Composite);
    }
}
