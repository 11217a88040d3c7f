// Copyright 2016-2024 Brian Smith.
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

/// The reason a SHA-512/t truncation length was rejected.
///
/// `t` is in bits. A valid `t` is a positive multiple of 8 below 512 other
/// than 384; see [`crate::digest::Algorithm::sha512_t`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidTruncation {
    /// `t` was zero.
    #[error("SHA-512/t: t must be positive")]
    Zero,

    /// `t` was not a whole number of bytes.
    #[error("SHA-512/t: t = {t} is not a multiple of 8")]
    NotByteAligned {
        /// The rejected length.
        t: usize,
    },

    /// `t` was 512 or more.
    #[error("SHA-512/t: t = {t} is not less than 512")]
    TooLong {
        /// The rejected length.
        t: usize,
    },

    /// `t` was 384, which FIPS 180-4 reserves for SHA-384.
    #[error("SHA-512/t: t = 384 is not allowed; use SHA-384")]
    CollidesWithSha384,
}

#[cfg(test)]
mod tests {
    use super::InvalidTruncation;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_rejected_length() {
        assert_eq!(
            InvalidTruncation::NotByteAligned { t: 12 }.to_string(),
            "SHA-512/t: t = 12 is not a multiple of 8"
        );
        assert_eq!(
            InvalidTruncation::TooLong { t: 520 }.to_string(),
            "SHA-512/t: t = 520 is not less than 512"
        );
        assert_eq!(
            InvalidTruncation::Zero.to_string(),
            "SHA-512/t: t must be positive"
        );
    }
}
