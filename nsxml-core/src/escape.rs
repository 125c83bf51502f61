//! Optional escaping of attribute values and text.
//!
//! Only used when [`WriterConfig::escape`](crate::WriterConfig) is set;
//! otherwise values are written exactly as received.

/// Append `s` to `out`, replacing each byte in `needle` with the matching
/// entry of `replacement`.
fn push_escaped_memchr3(out: &mut String, s: &str, needle: [u8; 3], replacement: [&str; 3]) {
    let bytes = s.as_bytes();
    let mut start = 0;
    while let Some(offset) = memchr::memchr3(needle[0], needle[1], needle[2], &bytes[start..]) {
        let pos = start + offset;
        // Needles are ASCII, so `pos` is always a char boundary.
        out.push_str(&s[start..pos]);
        let byte = bytes[pos];
        let idx = if byte == needle[0] {
            0
        } else if byte == needle[1] {
            1
        } else {
            2
        };
        out.push_str(replacement[idx]);
        start = pos + 1;
    }
    out.push_str(&s[start..]);
}

/// Text content: `& < >`.
pub fn push_escaped_text(out: &mut String, s: &str) {
    push_escaped_memchr3(out, s, [b'&', b'<', b'>'], ["&amp;", "&lt;", "&gt;"]);
}

/// Double-quoted attribute values: `& < "`.
pub fn push_escaped_attr(out: &mut String, s: &str) {
    push_escaped_memchr3(out, s, [b'&', b'<', b'"'], ["&amp;", "&lt;", "&quot;"]);
}
