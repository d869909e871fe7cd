//! Byte-order primitives shared by the GTP information-element codecs in
//! [`crate::gtp_ie`] and the GTP-U message builders in [`crate::gtpu`].
//!
//! Everything on the wire in this crate is big-endian; these helpers exist
//! so each IE module does not hand-roll its own shift-and-mask sequence for
//! the 40-bit integers 3GPP likes to use for bit rates.

use crate::error::PfcpError;

/// Writes `value` into `out[..n_bytes]`, big-endian, zero-padded on the left.
///
/// `n_bytes` must be in `1..=8` and `out` must be at least `n_bytes` long.
pub fn u64_to_buffer(value: u64, n_bytes: usize, out: &mut [u8]) -> Result<(), PfcpError> {
    if !(1..=8).contains(&n_bytes) {
        return Err(PfcpError::invalid_value(
            "wire::u64_to_buffer",
            "n_bytes",
            "must be in 1..=8",
        ));
    }
    if out.len() < n_bytes {
        return Err(PfcpError::invalid_length(
            "wire::u64_to_buffer",
            crate::ie::IeType::Unknown,
            n_bytes,
            out.len(),
        ));
    }
    let full = value.to_be_bytes();
    out[..n_bytes].copy_from_slice(&full[8 - n_bytes..]);
    Ok(())
}

/// Inverse of [`u64_to_buffer`]: reads `n_bytes` big-endian bytes from `input`.
pub fn buffer_to_u64(input: &[u8], n_bytes: usize) -> Result<u64, PfcpError> {
    if !(1..=8).contains(&n_bytes) {
        return Err(PfcpError::invalid_value(
            "wire::buffer_to_u64",
            "n_bytes",
            "must be in 1..=8",
        ));
    }
    if input.len() < n_bytes {
        return Err(PfcpError::invalid_length(
            "wire::buffer_to_u64",
            crate::ie::IeType::Unknown,
            n_bytes,
            input.len(),
        ));
    }
    let mut full = [0u8; 8];
    full[8 - n_bytes..].copy_from_slice(&input[..n_bytes]);
    Ok(u64::from_be_bytes(full))
}

/// Reads a big-endian `u16` from the first two bytes of `input`.
pub fn read_u16(input: &[u8]) -> Result<u16, PfcpError> {
    if input.len() < 2 {
        return Err(PfcpError::invalid_length(
            "wire::read_u16",
            crate::ie::IeType::Unknown,
            2,
            input.len(),
        ));
    }
    Ok(u16::from_be_bytes([input[0], input[1]]))
}

/// Reads a big-endian `u32` from the first four bytes of `input`.
pub fn read_u32(input: &[u8]) -> Result<u32, PfcpError> {
    if input.len() < 4 {
        return Err(PfcpError::invalid_length(
            "wire::read_u32",
            crate::ie::IeType::Unknown,
            4,
            input.len(),
        ));
    }
    Ok(u32::from_be_bytes([input[0], input[1], input[2], input[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_to_buffer_and_back_round_trips() {
        let mut buf = [0u8; 5];
        u64_to_buffer(1_000_000, 5, &mut buf).unwrap();
        assert_eq!(buffer_to_u64(&buf, 5).unwrap(), 1_000_000);
    }

    #[test]
    fn u64_to_buffer_zero_pads_left() {
        let mut buf = [0u8; 4];
        u64_to_buffer(0xAB, 4, &mut buf).unwrap();
        assert_eq!(buf, [0x00, 0x00, 0x00, 0xAB]);
    }

    #[test]
    fn u64_to_buffer_rejects_n_bytes_out_of_range() {
        let mut buf = [0u8; 8];
        assert!(u64_to_buffer(1, 0, &mut buf).is_err());
        assert!(u64_to_buffer(1, 9, &mut buf).is_err());
    }

    #[test]
    fn buffer_to_u64_rejects_short_input() {
        assert!(buffer_to_u64(&[0x01, 0x02], 5).is_err());
    }

    #[test]
    fn read_u16_and_u32_read_big_endian() {
        assert_eq!(read_u16(&[0x01, 0x02]).unwrap(), 0x0102);
        assert_eq!(read_u32(&[0x01, 0x02, 0x03, 0x04]).unwrap(), 0x01020304);
    }
}
