// Copyright 2015-2016 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! SHA-1, the SHA-2 family, and HMAC, in safe Rust.
//!
//! Supported digests are SHA-1 (for legacy use only), SHA-224, SHA-256,
//! SHA-384, SHA-512, SHA-512/224, SHA-512/256, and SHA-512/t for any valid
//! `t`. HMAC works over every one of them. Hashing is one-shot: the whole
//! message is passed in a single slice.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>std</code>
//!     <td>Enable the <code>std</code> features of the dependencies. The
//!         crate itself is <code>no_std</code> and always uses
//!         <code>alloc</code>.
//! </table>

#![allow(missing_copy_implementations, missing_debug_implementations)]
#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unsafe_code,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![no_std]

extern crate alloc;

pub mod digest;
pub mod error;
pub mod hmac;

#[doc(hidden)]
pub mod test;
