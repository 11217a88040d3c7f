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

//! Testing framework.
//!
//! Unlike the rest of this crate, this testing framework uses panics pretty
//! liberally. It was originally designed for internal use--it drives most of
//! the crate's own tests--but it is made available as a public API so that
//! callers can check their own digest and HMAC test vectors.
//!
//! # Examples:
//!
//! ## Writing Tests
//!
//! Input files look like this:
//!
//! ```text
//! # This is a comment.
//!
//! HMAC = SHA1
//! Input = "abc"
//! Output = 0123456789abcdef0123456789abcdef01234567
//!
//! HMAC = SHA256
//! Input = "abc"
//! Output = 0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef
//! ```
//!
//! Test cases are separated with blank lines. Note how the bytes of the
//! `Input` attribute are specified as a quoted string in these examples, but
//! the bytes of the `Output` attribute are specified in hex. Quoted strings
//! can also appear as an attribute value; a value that is not quoted is
//! decoded as hex.
//!
//! This is how one might write a test using the input data above:
//!
//! ```ignore
//! use shadigest::{test, test_file};
//!
//! #[test]
//! pub fn hmac_sha1_test() {
//!     test::run(test_file!("hmac_tests.txt"), |section, case| {
//!         assert_eq!(section, "");
//!         let digest_alg = case.consume_digest_alg("HMAC");
//!         let input = case.consume_bytes("Input");
//!         let output = case.consume_bytes("Output");
//!         // ...
//!         Ok(())
//!     });
//! }
//! ```
//!
//! Note that `consume_bytes()` and the other `consume_*` functions panic when
//! the attribute is missing or malformed, and `run()` panics when a test
//! case leaves any attribute unconsumed.

use crate::{digest, error};
use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

/// A test case. A test case consists of a set of named attributes. Every
/// attribute in the test case must be consumed exactly once; this helps catch
/// typos and omissions.
#[derive(Debug)]
pub struct TestCase {
    attributes: BTreeMap<String, String>,
}

impl TestCase {
    /// Maps the names "SHA1", "SHA224", "SHA256", "SHA384", "SHA512",
    /// "SHA512_224", "SHA512_256", and "SHA512_{t}" to digest algorithms.
    /// Panics on other (erroneous) inputs, including a `t` that
    /// [`digest::Algorithm::sha512_t`] rejects.
    pub fn consume_digest_alg(&mut self, key: &str) -> digest::Algorithm {
        let name = self.consume_string(key);
        match name.as_str() {
            "SHA1" => digest::SHA1_FOR_LEGACY_USE_ONLY,
            "SHA224" => digest::SHA224,
            "SHA256" => digest::SHA256,
            "SHA384" => digest::SHA384,
            "SHA512" => digest::SHA512,
            "SHA512_224" => digest::SHA512_224,
            "SHA512_256" => digest::SHA512_256,
            name => {
                let t = name
                    .strip_prefix("SHA512_")
                    .and_then(|t| t.parse::<usize>().ok())
                    .unwrap_or_else(|| panic!("Unsupported digest algorithm: {}", name));
                digest::Algorithm::sha512_t(t)
                    .unwrap_or_else(|e| panic!("Unsupported digest algorithm {}: {}", name, e))
            }
        }
    }

    /// Returns the value of an attribute that is encoded as a sequence of an
    /// even number of hex digits, or as a double-quoted UTF-8 string. The
    /// empty (zero-length) value is represented as "".
    pub fn consume_bytes(&mut self, key: &str) -> Vec<u8> {
        let s = self.consume_string(key);
        if let Some(quoted) = s.strip_prefix('\"') {
            // The value is a quoted string. Inner quotes are not supported.
            let unquoted = quoted
                .strip_suffix('\"')
                .unwrap_or_else(|| panic!("expected quoted string, found {}", s));
            Vec::from(unquoted.as_bytes())
        } else {
            hex::decode(&s).unwrap_or_else(|err| panic!("{} in {}", err, s))
        }
    }

    /// Returns the value of an attribute that is an integer, in decimal
    /// notation.
    pub fn consume_usize(&mut self, key: &str) -> usize {
        let s = self.consume_string(key);
        s.parse::<usize>()
            .unwrap_or_else(|err| panic!("{} in {}", err, s))
    }

    /// Returns the raw value of an attribute, without any unquoting or
    /// other interpretation.
    pub fn consume_string(&mut self, key: &str) -> String {
        self.consume_optional_string(key)
            .unwrap_or_else(|| panic!("No attribute named \"{}\"", key))
    }

    /// Like `consume_string()` except it returns `None` if the test case
    /// doesn't have the attribute.
    pub fn consume_optional_string(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }
}

/// References a test input file.
#[macro_export]
macro_rules! test_file {
    ($file_name:expr) => {
        $crate::test::File {
            file_name: $file_name,
            contents: include_str!($file_name),
        }
    };
}

/// A test input file.
#[derive(Clone, Copy)]
pub struct File<'a> {
    /// The name (path) of the file.
    pub file_name: &'a str,

    /// The contents of the file.
    pub contents: &'a str,
}

/// Parses test cases out of the given file, calling `f` on each vector until
/// `f` fails or until all the test vectors have been read. `f` can indicate
/// failure either by returning `Err()` or by panicking.
pub fn run<F>(test_file: File, mut f: F)
where
    F: FnMut(&str, &mut TestCase) -> Result<(), error::Unspecified>,
{
    let lines = &mut test_file.contents.lines();

    let mut current_section = String::new();
    let mut failed = false;

    while let Some(mut test_case) = parse_test_case(&mut current_section, lines) {
        let result = f(&current_section, &mut test_case);
        if result.is_err() {
            tracing::error!(
                file = test_file.file_name,
                section = %current_section,
                ?test_case,
                "test case failed"
            );
            failed = true;
        }

        // Make sure all the attributes in the test case were consumed.
        assert!(
            test_case.attributes.is_empty(),
            "{}: unconsumed attributes: {:?}",
            test_file.file_name,
            test_case.attributes
        );
    }

    if failed {
        panic!("{}: test failed", test_file.file_name);
    }
}

fn parse_test_case(
    current_section: &mut String,
    lines: &mut dyn Iterator<Item = &str>,
) -> Option<TestCase> {
    let mut attributes = BTreeMap::new();

    let mut is_first_line = true;
    loop {
        let line = lines.next();

        match line {
            // If we get to EOF when we're not in the middle of a test case,
            // then we're done.
            None if is_first_line => {
                return None;
            }

            // End of the file on a non-empty test cases ends the test case.
            None => {
                return Some(TestCase { attributes });
            }

            // A blank line ends a test case if the test case isn't empty.
            Some(line) if line.trim().is_empty() => {
                if !is_first_line {
                    return Some(TestCase { attributes });
                }
                // Ignore leading blank lines.
            }

            // Comments start with '#'; ignore them.
            Some(line) if line.starts_with('#') => (),

            Some(line) if line.starts_with('[') => {
                assert!(is_first_line);
                let section = line
                    .strip_prefix('[')
                    .and_then(|l| l.strip_suffix(']'))
                    .unwrap_or_else(|| panic!("malformed section header: {}", line));
                *current_section = section.to_string();
            }

            Some(line) => {
                is_first_line = false;

                let (key, value) = line
                    .split_once(" = ")
                    .unwrap_or_else(|| panic!("expected `key = value`, found {}", line));
                let key = key.trim();
                let value = value.trim();

                // Don't allow the value to be omitted. An empty value can be
                // represented as an empty quoted string.
                assert_ne!(value.len(), 0);

                // Checking is_none() ensures we don't accept duplicate keys.
                assert!(
                    attributes
                        .insert(key.to_string(), value.to_string())
                        .is_none(),
                    "duplicate attribute {:?}",
                    key
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ok() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            Ok(())
        });
    }

    #[test]
    fn consume_digest_alg_accepts_sha512_t() {
        run(test_file!("test/test_2_tests.txt"), |_, test_case| {
            let alg = test_case.consume_digest_alg("Hash");
            let output_len = test_case.consume_usize("OutputLen");
            assert_eq!(alg.output_len(), output_len);
            Ok(())
        });
    }

    #[test]
    #[should_panic(expected = "unconsumed attributes")]
    fn unconsumed_attribute_fails() {
        run(test_file!("test/test_2_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Hash");
            Ok(())
        });
    }

    #[test]
    #[should_panic(expected = "test failed")]
    fn one_err() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            Err(error::Unspecified)
        });
    }
}
