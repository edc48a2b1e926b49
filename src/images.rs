use crate::error::SiteError;
use base64::{
    Engine as _, alphabet,
    engine::{GeneralPurpose, GeneralPurposeConfig},
};
use std::fs;
use std::path::Path;

/// Creates `dir` and any missing parents
///
/// Returns `true` when the directory did not exist before.
pub fn ensure_dir(dir: &Path) -> Result<bool, SiteError> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| SiteError::io(dir, e))?;
    ::log::info!("Created directory: {}", dir.display());
    Ok(true)
}

/// Standard alphabet, canonical padding, non-zero trailing bits accepted
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decodes a padded standard base64 payload
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, SiteError> {
    Ok(PAYLOAD_ENGINE.decode(payload)?)
}

/// Decodes `payload` and writes the bytes to `dest`, returning the byte count
///
/// Nothing is written when decoding fails.
pub fn materialize(payload: &str, dest: &Path) -> Result<usize, SiteError> {
    let bytes = decode_payload(payload)?;
    fs::write(dest, &bytes).map_err(|e| SiteError::io(dest, e))?;
    ::log::debug!("Wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(bytes.len())
}
