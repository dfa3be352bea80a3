use super::DEFAULT_PROMPT;
use crate::{Error, Result};
use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

pub const INVALID_IMAGE_MESSAGE: &str = "Invalid base64 image data";

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Checks that `data` decodes as standard base64, leniently.
///
/// Bytes outside the alphabet are skipped, stray `=` before a quantum has two
/// data characters is ignored, and decoding stops at the first padded
/// quantum. A trailing partial quantum without padding is an error, as is a
/// single dangling data character. The decoded bytes are thrown away.
pub fn validate_image_base64(data: &str) -> Result<()> {
    let invalid = || Error::validation(INVALID_IMAGE_MESSAGE);

    let mut symbols = Vec::with_capacity(data.len());
    let mut pads = 0;
    let mut padded = false;

    for byte in data.bytes() {
        let quad_pos = symbols.len() % 4;
        if byte == b'=' {
            if quad_pos >= 2 {
                pads += 1;
                if quad_pos + pads >= 4 {
                    padded = true;
                    break;
                }
            }
            continue;
        }
        if byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/' {
            symbols.push(byte);
            pads = 0;
        }
    }

    match symbols.len() % 4 {
        0 => {}
        1 => return Err(invalid()),
        _ if !padded => return Err(invalid()),
        _ => {}
    }

    LENIENT.decode(&symbols).map(|_| ()).map_err(|_| invalid())
}

/// Trims the prompt, falling back to the default instruction when blank.
pub fn normalize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        DEFAULT_PROMPT.to_string()
    } else {
        trimmed.to_string()
    }
}
