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

/// An error with absolutely no details.
///
/// This is the error type of HMAC verification. A failed verification says
/// only that the tag did not match; it does not say where, or by how much.
///
/// `Result<T, shadigest::error::Unspecified>` is mostly equivalent to
/// `Result<T, ()>`. However, `Unspecified` implements [`core::error::Error`]
/// so callers can implement `From<shadigest::error::Unspecified>` to map it
/// to their own error types:
///
/// ```
/// use shadigest::{digest, hmac};
///
/// #[derive(Debug)]
/// enum Error {
///     BadSignature,
/// }
///
/// impl From<shadigest::error::Unspecified> for Error {
///     fn from(_: shadigest::error::Unspecified) -> Self { Error::BadSignature }
/// }
///
/// fn check(key: &hmac::Key, msg: &[u8], tag: &[u8]) -> Result<(), Error> {
///     hmac::verify(key, msg, tag)?;
///     Ok(())
/// }
///
/// let key = hmac::Key::new(&digest::SHA256, b"key");
/// let tag = hmac::sign(&key, b"message");
/// assert!(check(&key, b"message", tag.as_ref()).is_ok());
/// assert!(check(&key, b"massage", tag.as_ref()).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("shadigest::error::Unspecified")]
pub struct Unspecified;
