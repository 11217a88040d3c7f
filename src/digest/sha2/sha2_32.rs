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

use super::{super::w32::W32, CHAINING_WORDS};
use core::num::Wrapping;

pub(in super::super) const SHA256_BLOCK_LEN: usize = 512 / 8;

pub(in super::super) type State32 = [W32; CHAINING_WORDS];

// FIPS 180-4 5.3.2
pub(in super::super) const SHA224_INITIAL_STATE: State32 = [
    Wrapping(0xc1059ed8),
    Wrapping(0x367cd507),
    Wrapping(0x3070dd17),
    Wrapping(0xf70e5939),
    Wrapping(0xffc00b31),
    Wrapping(0x68581511),
    Wrapping(0x64f98fa7),
    Wrapping(0xbefa4fa4),
];

// FIPS 180-4 5.3.3
pub(in super::super) const SHA256_INITIAL_STATE: State32 = [
    Wrapping(0x6a09e667),
    Wrapping(0xbb67ae85),
    Wrapping(0x3c6ef372),
    Wrapping(0xa54ff53a),
    Wrapping(0x510e527f),
    Wrapping(0x9b05688c),
    Wrapping(0x1f83d9ab),
    Wrapping(0x5be0cd19),
];

// FIPS 180-4 4.2.2
pub(super) static K_32: [W32; 64] = k_table![
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];
