//! Minimal tokenizer for the declaration subset we understand.
//!
//! Produces identifiers, numbers, string literals and single-character
//! punctuation. Whitespace, comments, preprocessor directives and character
//! literals are dropped so that declarations hidden inside them are never
//! recognized.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Number,
    Str,
    Punct(char),
}

/// A token with its byte span in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Tokenize source text
pub fn tokenize(src: &str) -> Vec<Token> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = src[pos..].chars().next() {
        let len = c.len_utf8();

        if c.is_whitespace() {
            pos += len;
            continue;
        }

        if c == '/' && bytes.get(pos + 1) == Some(&b'/') {
            pos = src[pos..].find('\n').map(|i| pos + i + 1).unwrap_or(src.len());
            continue;
        }

        if c == '/' && bytes.get(pos + 1) == Some(&b'*') {
            pos = src[pos + 2..]
                .find("*/")
                .map(|i| pos + 2 + i + 2)
                .unwrap_or(src.len());
            continue;
        }

        if c == '#' && at_line_start(src, pos) {
            pos = src[pos..].find('\n').map(|i| pos + i + 1).unwrap_or(src.len());
            continue;
        }

        if let Some(prefix) = string_prefix_len(bytes, pos) {
            let verbatim = bytes[pos..pos + prefix].contains(&b'@');
            let end = scan_string(bytes, pos + prefix + 1, verbatim);
            tokens.push(Token {
                kind: TokenKind::Str,
                start: pos,
                end,
            });
            pos = end;
            continue;
        }

        if c == '\'' {
            pos = scan_char_literal(bytes, pos + 1);
            continue;
        }

        if c == '@' && src[pos + 1..].chars().next().is_some_and(is_ident_start) {
            // Verbatim identifier: the token excludes the '@'
            let start = pos + 1;
            let end = scan_ident(src, start);
            tokens.push(Token {
                kind: TokenKind::Ident,
                start,
                end,
            });
            pos = end;
            continue;
        }

        if is_ident_start(c) {
            let end = scan_ident(src, pos);
            tokens.push(Token {
                kind: TokenKind::Ident,
                start: pos,
                end,
            });
            pos = end;
            continue;
        }

        if c.is_ascii_digit() {
            let end = src[pos..]
                .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_'))
                .map(|i| pos + i)
                .unwrap_or(src.len());
            tokens.push(Token {
                kind: TokenKind::Number,
                start: pos,
                end,
            });
            pos = end;
            continue;
        }

        tokens.push(Token {
            kind: TokenKind::Punct(c),
            start: pos,
            end: pos + len,
        });
        pos += len;
    }

    tokens
}

/// True when only whitespace precedes `pos` on its line
fn at_line_start(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .rev()
        .take_while(|&ch| ch != '\n')
        .all(char::is_whitespace)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn scan_ident(src: &str, start: usize) -> usize {
    src[start..]
        .find(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .map(|i| start + i)
        .unwrap_or(src.len())
}

/// Length of `"`, `@"`, `$"`, `$@"` or `@$"` prefixes (excluding the quote)
fn string_prefix_len(bytes: &[u8], pos: usize) -> Option<usize> {
    let mut len = 0;
    while len < 2 && matches!(bytes.get(pos + len), Some(b'@') | Some(b'$')) {
        len += 1;
    }
    (bytes.get(pos + len) == Some(&b'"')).then_some(len)
}

/// Scans past the closing quote. Unterminated strings run to end of input.
fn scan_string(bytes: &[u8], mut pos: usize, verbatim: bool) -> usize {
    while pos < bytes.len() {
        match bytes[pos] {
            b'"' if verbatim && bytes.get(pos + 1) == Some(&b'"') => pos += 2,
            b'"' => return pos + 1,
            b'\\' if !verbatim => pos += 2,
            _ => pos += 1,
        }
    }
    bytes.len()
}

fn scan_char_literal(bytes: &[u8], mut pos: usize) -> usize {
    if bytes.get(pos) == Some(&b'\\') {
        pos += 2;
    }
    while pos < bytes.len() {
        match bytes[pos] {
            b'\'' => return pos + 1,
            b'\n' => return pos,
            _ => pos += 1,
        }
    }
    bytes.len()
}

/// Token sequence paired with its source text
pub struct Tokens<'a> {
    src: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: tokenize(src),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    /// Source text of token `i`, empty when out of range
    pub fn text(&self, i: usize) -> &'a str {
        self.tokens
            .get(i)
            .map(|t| &self.src[t.start..t.end])
            .unwrap_or("")
    }

    pub fn is_ident(&self, i: usize) -> bool {
        matches!(self.tokens.get(i), Some(t) if t.kind == TokenKind::Ident)
    }

    pub fn is_keyword(&self, i: usize, keyword: &str) -> bool {
        self.is_ident(i) && self.text(i) == keyword
    }

    pub fn is_punct(&self, i: usize, c: char) -> bool {
        matches!(self.tokens.get(i), Some(t) if t.kind == TokenKind::Punct(c))
    }

    /// Contents of a string literal token without prefix or quotes
    pub fn string_value(&self, i: usize) -> Option<&'a str> {
        let token = self.tokens.get(i)?;
        if token.kind != TokenKind::Str {
            return None;
        }
        let raw = &self.src[token.start..token.end];
        let body = raw.trim_start_matches(['@', '$']).strip_prefix('"')?;
        Some(body.strip_suffix('"').unwrap_or(body))
    }

    /// Given `i` on an `open` token, returns the index just past its matching `close`
    pub fn skip_balanced(&self, i: usize, open: char, close: char) -> Option<usize> {
        if !self.is_punct(i, open) {
            return None;
        }
        let mut depth = 0usize;
        for j in i..self.tokens.len() {
            if self.is_punct(j, open) {
                depth += 1;
            } else if self.is_punct(j, close) {
                depth -= 1;
                if depth == 0 {
                    return Some(j + 1);
                }
            }
        }
        None
    }

    /// Source text spanning tokens `first..=last`
    pub fn span_text(&self, first: usize, last: usize) -> &'a str {
        match (self.tokens.get(first), self.tokens.get(last)) {
            (Some(a), Some(b)) if a.start <= b.end => &self.src[a.start..b.end],
            _ => "",
        }
    }

    /// Byte offset just past token `i`
    pub fn end_offset(&self, i: usize) -> Option<usize> {
        self.tokens.get(i).map(|t| t.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<String> {
        let tokens = Tokens::new(src);
        (0..tokens.len()).map(|i| tokens.text(i).to_string()).collect()
    }

    #[test]
    fn test_tokenize_declaration() {
        assert_eq!(
            texts("public List<int> Ids { get; set; }"),
            vec!["public", "List", "<", "int", ">", "Ids", "{", "get", ";", "set", ";", "}"]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let src = "// class Hidden {}\n/* class Also { } */ class Shown {}";
        assert_eq!(texts(src), vec!["class", "Shown", "{", "}"]);
    }

    #[test]
    fn test_preprocessor_lines_are_skipped() {
        let src = "#if SERIES4\nusing X;\n  #region Settings\nint a;\n#endregion\n";
        assert_eq!(texts(src), vec!["using", "X", ";", "int", "a", ";"]);
    }

    #[test]
    fn test_hash_inside_line_is_punctuation() {
        assert_eq!(texts("a # b"), vec!["a", "#", "b"]);
    }

    #[test]
    fn test_string_literals() {
        let tokens = Tokens::new(r#"Name("a \" b") @"c "" d" $"{x}""#);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens.string_value(2), Some(r#"a \" b"#));
        assert_eq!(tokens.string_value(4), Some(r#"c "" d"#));
        assert_eq!(tokens.string_value(5), Some("{x}"));
    }

    #[test]
    fn test_char_literals_dropped() {
        assert_eq!(texts("a = '{'; b = '\\''"), vec!["a", "=", ";", "b", "="]);
    }

    #[test]
    fn test_verbatim_identifier() {
        assert_eq!(texts("int @class;"), vec!["int", "class", ";"]);
    }

    #[test]
    fn test_skip_balanced() {
        let tokens = Tokens::new("< Dictionary < string , List < int > > > x");
        assert_eq!(tokens.skip_balanced(0, '<', '>'), Some(11));
        assert_eq!(tokens.text(11), "x");
        assert_eq!(tokens.skip_balanced(1, '<', '>'), None);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = Tokens::new("x = \"open");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.string_value(2), Some("open"));
    }
}
