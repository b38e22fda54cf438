//! Bit-level payload packing and unpacking.
//!
//! Codes are concatenated in input order into one logical bit sequence,
//! packed eight bits per byte, most significant bit first, with the final
//! byte zero-padded. The exact significant-bit count travels alongside
//! the buffer so the unpacker knows where the padding begins; nothing in
//! the stream is ever located by scanning for a marker value.

use bitvec::prelude::*;

use crate::compression::Result;
use crate::error::Error;

/// Accumulates per-symbol codes into a byte-aligned buffer.
#[derive(Debug, Clone, Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    /// Creates an empty packer.
    pub fn new() -> Self {
        BitPacker {
            bits: BitVec::new(),
        }
    }

    /// Creates a packer with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        BitPacker {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Appends one code to the stream.
    pub fn push(&mut self, code: &BitSlice<u8, Msb0>) {
        self.bits.extend_from_bitslice(code);
    }

    /// Number of bits accumulated so far.
    pub fn bit_count(&self) -> u64 {
        self.bits.len() as u64
    }

    /// Finishes packing, returning the zero-padded byte buffer and the
    /// exact count of significant bits.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        let bit_count = self.bits.len() as u64;
        self.bits.set_uninitialized(false);
        (self.bits.into_vec(), bit_count)
    }
}

/// Returns the first `bit_count` bits of `bytes`, discarding the padding
/// in the final byte.
///
/// # Errors
///
/// Returns `Error::Decode` if `bit_count` claims more bits than the
/// buffer holds.
pub fn unpack(bytes: &[u8], bit_count: u64) -> Result<&BitSlice<u8, Msb0>> {
    let available = bytes.len() as u64 * 8;
    if bit_count > available {
        return Err(Error::decode(format!(
            "bit count {bit_count} exceeds the {available} bits of payload"
        )));
    }
    Ok(&bytes.view_bits::<Msb0>()[..bit_count as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_is_msb_first_and_zero_padded() {
        let mut packer = BitPacker::new();
        packer.push(bits![u8, Msb0; 0]);
        packer.push(bits![u8, Msb0; 1, 0]);
        packer.push(bits![u8, Msb0; 1, 1]);
        packer.push(bits![u8, Msb0; 0]);
        let (bytes, bit_count) = packer.finish();
        // 0 10 11 0 -> 010110 -> 0101_1000 once padded.
        assert_eq!(bytes, vec![0b0101_1000]);
        assert_eq!(bit_count, 6);
    }

    #[test]
    fn test_empty_packer_yields_no_bytes() {
        let (bytes, bit_count) = BitPacker::new().finish();
        assert!(bytes.is_empty());
        assert_eq!(bit_count, 0);
    }

    #[test]
    fn test_byte_count_matches_bit_count() {
        let mut packer = BitPacker::new();
        packer.push(bits![u8, Msb0; 1, 0, 1, 1, 0, 1, 0, 0, 1]);
        let (bytes, bit_count) = packer.finish();
        assert_eq!(bit_count, 9);
        assert_eq!(bytes.len(), 2);
        assert_eq!(bytes, vec![0b1011_0100, 0b1000_0000]);
    }

    #[test]
    fn test_unpack_inverts_pack() {
        let mut packer = BitPacker::new();
        let code = bits![u8, Msb0; 1, 1, 0, 1, 0];
        packer.push(code);
        packer.push(code);
        let (bytes, bit_count) = packer.finish();

        let bits = unpack(&bytes, bit_count).unwrap();
        assert_eq!(bits.len(), 10);
        assert_eq!(&bits[..5], code);
        assert_eq!(&bits[5..], code);
    }

    #[test]
    fn test_unpack_discards_padding() {
        let bits = unpack(&[0xFF], 3).unwrap();
        assert_eq!(bits, bits![u8, Msb0; 1, 1, 1]);
    }

    #[test]
    fn test_unpack_rejects_overlong_bit_count() {
        assert!(matches!(unpack(&[0xFF], 9), Err(Error::Decode(_))));
        assert!(matches!(unpack(&[], 1), Err(Error::Decode(_))));
    }
}
