//! Byte-to-text decoding.
//!
//! Resolution order:
//! 1. a forced encoding from config (its BOM is still stripped),
//! 2. a UTF-8 / UTF-16LE / UTF-16BE byte order mark,
//! 3. strict UTF-8,
//! 4. a `chardetng` guess decoded through `encoding_rs`.
//!
//! A decode that needs replacement characters is a failure; callers never see
//! silently mangled text.
use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Successful decode result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub had_bom: bool,
}

/// Decode `bytes`, returning the encoding that failed on error.
pub fn decode_bytes(
    bytes: &[u8],
    forced: Option<&'static Encoding>,
) -> Result<Decoded, &'static Encoding> {
    if let Some(encoding) = forced {
        let (body, had_bom) = match Encoding::for_bom(bytes) {
            Some((bom_encoding, len)) if bom_encoding == encoding => (&bytes[len..], true),
            _ => (bytes, false),
        };
        return finish(encoding.decode_without_bom_handling(body), encoding, had_bom);
    }

    if let Some((encoding, len)) = Encoding::for_bom(bytes) {
        return finish(
            encoding.decode_without_bom_handling(&bytes[len..]),
            encoding,
            true,
        );
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(Decoded {
            text: text.to_owned(),
            encoding: UTF_8,
            had_bom: false,
        });
    }

    let encoding = detect(bytes);
    finish(encoding.decode_without_bom_handling(bytes), encoding, false)
}

/// Best guess for non-UTF-8 bytes.
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, false)
}

fn finish(
    (text, had_errors): (Cow<'_, str>, bool),
    encoding: &'static Encoding,
    had_bom: bool,
) -> Result<Decoded, &'static Encoding> {
    if had_errors {
        return Err(encoding);
    }
    Ok(Decoded {
        text: text.into_owned(),
        encoding,
        had_bom,
    })
}
