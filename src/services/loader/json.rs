use serde_json::Value;

use crate::types::errors::ScanError;

/// Parse descriptor JSON, tolerating the stray control characters some mod
/// toolchains leave inside string literals (classic `mcmod.info` offenders).
///
/// Strict parse first; on failure, retry once with ASCII control characters
/// stripped. Still-unparseable text is a [`ScanError::MalformedDescriptor`],
/// which callers recover as "no signal".
pub(crate) fn parse_json_lenient(entry: &str, text: &str) -> Result<Value, ScanError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(strict_error) => {
            let cleaned: String = text
                .chars()
                .filter(|c| !matches!(c, '\u{0000}'..='\u{001f}' | '\u{007f}'))
                .collect();
            serde_json::from_str(&cleaned).map_err(|_| ScanError::MalformedDescriptor {
                entry: entry.to_string(),
                reason: strict_error.to_string(),
            })
        }
    }
}
