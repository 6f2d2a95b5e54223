//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode a `data:<mime>;base64,<payload>` string into raw bytes.
/// Returns None when the string is not a base64 data URI.
pub(crate) fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_mime, payload) = rest.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_a_data_uri() {
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(b"png bytes"));
        assert_eq!(decode_data_uri(&uri).as_deref(), Some(b"png bytes".as_ref()));
    }

    #[test]
    fn rejects_non_data_uris() {
        assert_eq!(decode_data_uri("http://example.com/bg.png"), None);
        assert_eq!(decode_data_uri("data:image/png,rawpayload"), None);
    }
}
