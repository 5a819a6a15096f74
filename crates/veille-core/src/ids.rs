//! ID prefix constants and generation.
//!
//! IDs are `{prefix}-{8 lowercase hex}`, e.g. `prj-a3f8b2c1`.

use crate::errors::CoreError;

pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_FINDING: &str = "fnd";

/// Generate a fresh random ID with the given prefix.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if the OS entropy source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0_u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|error| CoreError::Other(anyhow::anyhow!("failed to read entropy: {error}")))?;
    let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}
