/// Span enclosed by a pair of matching braces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceSpan<'a> {
    /// Text between the braces, exclusive of both
    pub body: &'a str,
    /// Byte index just past the closing brace
    pub end: usize,
}

/// Finds the brace matching one that was already opened.
///
/// `start` is the byte index immediately after an opening `{`, which counts
/// as depth 1. If the text ends before the depth returns to zero, the rest of
/// the buffer is returned and `end` is the buffer length.
pub fn match_braces(text: &str, start: usize) -> BraceSpan<'_> {
    let start = start.min(text.len());
    let mut depth = 1usize;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let close = start + offset;
                    return BraceSpan {
                        body: &text[start..close],
                        end: close + 1,
                    };
                }
            }
            _ => {}
        }
    }

    BraceSpan {
        body: &text[start..],
        end: text.len(),
    }
}
