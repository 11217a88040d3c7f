// Copyright 2015-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! Big-endian packing of bytes into words and back.

use super::word::Word;
use alloc::vec::Vec;

/// Packs `bytes` into big-endian words.
///
/// A short final group is completed with zero bytes on the right, so
/// `[0x80]` becomes `0x80000000` for a 32-bit word.
pub(super) fn bytes_to_words<W: Word>(bytes: &[u8]) -> Vec<W> {
    let mut words = Vec::with_capacity(bytes.len().div_ceil(W::BYTES));
    words.extend(bytes.chunks(W::BYTES).map(|group| {
        let mut input = W::InputBytes::default();
        input.as_mut()[..group.len()].copy_from_slice(group);
        W::from_be_bytes(input)
    }));
    words
}

/// Serializes `words` most-significant byte first.
pub(super) fn words_to_bytes<W: Word>(words: &[W]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(words.len() * W::BYTES);
    for w in words {
        bytes.extend_from_slice(w.to_be_bytes().as_ref());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::super::{w32::W32, w64::W64};
    use super::*;
    use core::num::Wrapping;

    #[test]
    fn packs_big_endian() {
        let words: Vec<W32> = bytes_to_words(&[0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(words, [Wrapping(0x01020304), Wrapping(0xaabbccdd)]);

        let words: Vec<W64> = bytes_to_words(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(words, [Wrapping(0x0102030405060708)]);
    }

    #[test]
    fn short_final_group_is_zero_filled_on_the_right() {
        let words: Vec<W32> = bytes_to_words(&[0xde, 0xad, 0xbe, 0xef, 0x80]);
        assert_eq!(words, [Wrapping(0xdeadbeef), Wrapping(0x80000000)]);

        let words: Vec<W64> = bytes_to_words(&[0x61, 0x62, 0x63, 0x80]);
        assert_eq!(words, [Wrapping(0x6162638000000000)]);
    }

    #[test]
    fn empty_input() {
        assert!(bytes_to_words::<W32>(&[]).is_empty());
        assert!(words_to_bytes::<W64>(&[]).is_empty());
    }

    #[test]
    fn serializes_most_significant_byte_first() {
        let bytes = words_to_bytes(&[Wrapping(0x67452301u32), Wrapping(0xefcdab89u32)]);
        assert_eq!(bytes, [0x67, 0x45, 0x23, 0x01, 0xef, 0xcd, 0xab, 0x89]);

        let bytes = words_to_bytes(&[Wrapping(0x6a09e667f3bcc908u64)]);
        assert_eq!(bytes, [0x6a, 0x09, 0xe6, 0x67, 0xf3, 0xbc, 0xc9, 0x08]);
    }

    #[test]
    fn whole_words_survive_a_round_trip() {
        let input: Vec<u8> = (0u8..64).collect();
        let words: Vec<W64> = bytes_to_words(&input);
        assert_eq!(words_to_bytes(&words), input);
    }
}
