use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
    pub confidence: f32,
}

/// Decodes CSV bytes to UTF-8 text. A BOM wins; otherwise the encoding is
/// guessed (Korean exports are often EUC-KR / windows-949).
pub fn decode(bytes: &[u8]) -> Result<DecodedText, String> {
    let (encoding, confidence) = match Encoding::for_bom(bytes) {
        Some((enc, _)) => (enc, 0.99),
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);

            let guess = detector.guess(None, true);
            (guess, estimate_confidence(bytes, guess))
        }
    };

    // decode() strips a matching BOM itself.
    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(format!("input is not valid {}", used.name()));
    }

    Ok(DecodedText {
        text: text.into_owned(),
        encoding: used.name(),
        confidence,
    })
}

fn estimate_confidence(bytes: &[u8], encoding: &'static Encoding) -> f32 {
    if encoding == UTF_8 && std::str::from_utf8(bytes).is_ok() {
        return 0.95;
    }

    let len = bytes.len();
    if len < 64 {
        0.55
    } else if len < 512 {
        0.70
    } else if len < 4096 {
        0.82
    } else {
        0.90
    }
}
