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

use core::ops::{Add, AddAssign, BitAnd, BitOr, BitXor, Not, Shr};

/// A fixed-width unsigned word that the engine computes over.
///
/// Implementations are `core::num::Wrapping` integers so that `+` is always
/// modular; the compression function depends on that.
pub(crate) trait Word:
    'static
    + Sized
    + Copy
    + Add<Output = Self>
    + AddAssign
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shr<usize, Output = Self>
{
    const ZERO: Self;

    /// The width of the word in bytes.
    const BYTES: usize;

    type InputBytes: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    fn from_be_bytes(input: Self::InputBytes) -> Self;

    fn to_be_bytes(self) -> Self::InputBytes;

    /// Circular right rotation over the full word width.
    fn rotr(self, count: u32) -> Self;

    /// Circular left rotation over the full word width.
    fn rotl(self, count: u32) -> Self;

    /// Encodes the bit length of a `byte_len`-byte message as the two words
    /// that end the padded stream, most significant word first.
    fn length_suffix(byte_len: usize) -> [Self; 2];
}
