/// Value of each of the two bytes that open a packet.
pub const SYNC: u8 = 0xAA;

/// Largest payload length a packet may declare.
pub const MAX_PAYLOAD_LEN: usize = 169;

/// Inline length every raw wave field must carry.
pub const RAW_WAVE_LEN: u8 = 2;

/// Number of band power values in an ASIC EEG block.
pub const BAND_COUNT: usize = 8;

/// Bytes per band power value (unsigned, big-endian).
pub const BAND_WIDTH: usize = 3;

/// Size of the ASIC EEG block. The length byte the headset sends for this
/// field does not match what it actually transmits, so this is used instead.
pub const ASIC_EEG_LEN: usize = BAND_COUNT * BAND_WIDTH;
