//! Input decoding: accept any text encoding and hand UTF-8 to the parser.
//!
//! Uses chardetng for detection and `encoding_rs` for transcoding, with
//! SIMD-accelerated UTF-8 validation via simdutf8.

use chardetng::EncodingDetector;
use simdutf8::basic::from_utf8;
use std::borrow::Cow;

/// Check if the given bytes are valid UTF-8.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Skip the UTF-8 BOM (EF BB BF) if present.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if data.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &data[3..]
    } else {
        data
    }
}

/// Decode raw input bytes to UTF-8.
///
/// UTF-8 input (with or without BOM) is passed through zero-copy. UTF-16
/// input is recognized by its BOM (chardetng does not handle those well);
/// anything else goes through chardetng detection and `encoding_rs`
/// transcoding. Undecodable byte sequences become replacement characters
/// rather than failing, matching lenient spreadsheet-tool behavior.
pub fn decode_to_utf8(data: &[u8]) -> Cow<'_, [u8]> {
    // UTF-16 LE BOM: FF FE, UTF-16 BE BOM: FE FF
    if data.len() >= 2 {
        if data[0] == 0xFF && data[1] == 0xFE {
            let (decoded, _, _) = encoding_rs::UTF_16LE.decode(data);
            return Cow::Owned(decoded.into_owned().into_bytes());
        }
        if data[0] == 0xFE && data[1] == 0xFF {
            let (decoded, _, _) = encoding_rs::UTF_16BE.decode(data);
            return Cow::Owned(decoded.into_owned().into_bytes());
        }
    }

    let data = skip_bom(data);
    if is_utf8(data) {
        return Cow::Borrowed(data);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    let encoding = detector.guess(None, true);

    let (decoded, _, _) = encoding.decode(data);
    Cow::Owned(decoded.into_owned().into_bytes())
}
