// Copyright 2019-2025 Brian Smith.
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

use super::word::Word;
use core::num::Wrapping;

pub type W32 = Wrapping<u32>;

impl Word for W32 {
    const ZERO: Self = Self(0);
    const BYTES: usize = 4;
    type InputBytes = [u8; 4];

    #[inline(always)]
    fn from_be_bytes(input: Self::InputBytes) -> Self {
        Self(u32::from_be_bytes(input))
    }

    #[inline(always)]
    fn to_be_bytes(self) -> Self::InputBytes {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    fn rotr(self, count: u32) -> Self {
        Self(self.0.rotate_right(count))
    }

    #[inline(always)]
    fn rotl(self, count: u32) -> Self {
        Self(self.0.rotate_left(count))
    }

    // FIPS 180-4 5.1.1: a 64-bit length field. The length is taken modulo
    // 2^64, which only matters for inputs no machine can hold.
    #[inline]
    fn length_suffix(byte_len: usize) -> [Self; 2] {
        let bits = (byte_len as u64).wrapping_mul(8);
        [Self((bits >> 32) as u32), Self(bits as u32)]
    }
}
