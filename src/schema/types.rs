//! Recursive-descent parser for declared type expressions.
//!
//! Grammar:
//!
//! ```text
//! type  := name args? '?'? rank* '?'?
//! name  := IDENT ('.' IDENT)*
//! args  := '<' type (',' type)* '>'
//! rank  := '[' ','* ']'
//! ```

use super::lexer::Tokens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Possibly qualified name, e.g. `System.String`
    pub name: String,
    /// Generic arguments
    pub args: Vec<TypeExpr>,
    /// Number of array suffixes
    pub array_rank: usize,
    /// Trailing nullable marker
    pub nullable: bool,
}

impl TypeExpr {
    /// Parses a complete type expression. Returns `None` if any input is left over.
    pub fn parse(text: &str) -> Option<TypeExpr> {
        let tokens = Tokens::new(text);
        let (expr, next) = parse_at(&tokens, 0)?;
        (next == tokens.len()).then_some(expr)
    }

    /// Last segment of the name
    pub fn base_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Element type of an array, or `None` for non-array types
    pub fn element(&self) -> Option<TypeExpr> {
        (self.array_rank > 0).then(|| TypeExpr {
            name: self.name.clone(),
            args: self.args.clone(),
            array_rank: self.array_rank - 1,
            nullable: false,
        })
    }
}

fn parse_at(tokens: &Tokens<'_>, mut j: usize) -> Option<(TypeExpr, usize)> {
    if !tokens.is_ident(j) {
        return None;
    }
    let mut name = tokens.text(j).to_string();
    j += 1;
    while tokens.is_punct(j, '.') && tokens.is_ident(j + 1) {
        name.push('.');
        name.push_str(tokens.text(j + 1));
        j += 2;
    }

    let mut args = Vec::new();
    if tokens.is_punct(j, '<') {
        j += 1;
        loop {
            let (arg, next) = parse_at(tokens, j)?;
            args.push(arg);
            j = next;
            if tokens.is_punct(j, ',') {
                j += 1;
            } else if tokens.is_punct(j, '>') {
                j += 1;
                break;
            } else {
                return None;
            }
        }
    }

    // Nullability of the element does not affect the sample shape
    if tokens.is_punct(j, '?') {
        j += 1;
    }

    let mut array_rank = 0;
    while tokens.is_punct(j, '[') {
        let mut k = j + 1;
        while tokens.is_punct(k, ',') {
            k += 1;
        }
        if !tokens.is_punct(k, ']') {
            return None;
        }
        array_rank += 1;
        j = k + 1;
    }

    let nullable = tokens.is_punct(j, '?');
    if nullable {
        j += 1;
    }

    Some((
        TypeExpr {
            name,
            args,
            array_rank,
            nullable,
        },
        j,
    ))
}
