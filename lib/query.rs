//! Query string parsing.
//!
//! Pairs whose key or value is not well-formed percent-encoding are dropped rather than
//! passed through literally, so a malformed parameter reads as absent.

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Parse a raw query string into decoded key/value pairs, in order.
///
/// Empty segments, keys containing `;` and pairs that fail to decode are skipped. A segment
/// without `=` yields an empty value.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|segment| !segment.is_empty() && !segment.contains(';'))
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            Some((query_unescape(key)?, query_unescape(value)?))
        })
        .collect()
}

/// Decode one form-encoded component, or `None` if a `%` is not followed by two hex digits.
///
/// `+` decodes to a space. Invalid UTF-8 is replaced rather than rejected.
pub fn query_unescape(component: &str) -> Option<String> {
    let well_formed = component.split('%').skip(1).all(|chunk| {
        chunk
            .as_bytes()
            .get(..2)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }

    let spaced = component.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
