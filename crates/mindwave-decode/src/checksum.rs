/// Computes the packet checksum: the low byte of the payload sum, inverted.
pub fn checksum(payload: &[u8]) -> u8 {
    !payload.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn checksum_of_poor_signal_payload() {
        // 0x02 + 0x64 = 0x66
        assert_eq!(checksum(&[0x02, 0x64]), 0x99);
    }

    #[test]
    fn checksum_of_empty_payload() {
        assert_eq!(checksum(&[]), 0xFF);
    }

    #[test]
    fn checksum_keeps_only_low_byte_of_sum() {
        let payload = [0xFF; 169];
        let sum: u32 = payload.iter().map(|&b| u32::from(b)).sum();
        let expected = (!(sum & 0xFF) & 0xFF) as u8;
        assert_eq!(checksum(&payload), expected);
    }

    #[test]
    fn single_bit_flip_changes_checksum() {
        let payload = [0x02, 0x1A, 0x04, 0x35, 0x05, 0x40, 0x50, 0x02, 0x81, 0x7F];
        let original = checksum(&payload);
        for index in 0..payload.len() {
            for bit in 0..8 {
                let mut mutated = payload;
                mutated[index] ^= 1 << bit;
                assert_ne!(checksum(&mutated), original, "byte {index} bit {bit}");
            }
        }
    }
}
