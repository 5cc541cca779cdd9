/// The marker that starts a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "//";

/// Strips a trailing `//` comment and trailing whitespace from a raw line.
///
/// The scan is quote-aware: a marker inside a `"..."` or `'...'` literal
/// (for instance a `[default = "http://x"]` option) does not start a
/// comment. Backslash escapes inside literals are honoured. An unterminated
/// literal swallows the rest of the line, so nothing after it is a comment.
///
/// Normalizing an already-normalized line returns it unchanged.
pub fn normalize_line(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    let mut end = bytes.len();

    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if b == b'\\' {
                    escaped = true;
                } else if b == q {
                    quote = None;
                }
            }
            None => {
                if b == b'"' || b == b'\'' {
                    quote = Some(b);
                } else if bytes[i..].starts_with(COMMENT_MARKER.as_bytes()) {
                    end = i;
                    break;
                }
            }
        }
    }

    raw[..end].trim_end()
}
