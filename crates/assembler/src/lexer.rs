//! Line classification for Hack assembly text.
//!
//! Every source line becomes exactly one [`Statement`] before any table
//! lookup happens. Both assembler passes go through [`classify`].

use crate::error::{AsmError, Field};

/// One classified source line. Fragments borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Statement<'a> {
    /// Empty, whitespace-only or comment-only.
    Blank,
    /// `(NAME)`: binds NAME to the next instruction address.
    Label(&'a str),
    /// `@token`: a decimal literal or a symbol, not yet resolved.
    Address(&'a str),
    /// `dest=comp;jump`. `None` means the separator was absent.
    Command {
        dest: Option<&'a str>,
        comp: &'a str,
        jump: Option<&'a str>,
    },
}

/// Strip the `//` comment and surrounding whitespace.
pub(crate) fn strip(line: &str) -> &str {
    let code = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    };
    code.trim()
}

/// Classify a single line of assembly text.
pub(crate) fn classify(line: &str, line_num: usize) -> Result<Statement<'_>, AsmError> {
    let text = strip(line);

    if text.is_empty() {
        return Ok(Statement::Blank);
    }

    if let Some(rest) = text.strip_prefix('(') {
        let name = rest
            .strip_suffix(')')
            .filter(|name| is_symbol(name))
            .ok_or_else(|| AsmError::InvalidMnemonic {
                line: line_num,
                field: Field::Label,
                token: text.to_string(),
            })?;
        return Ok(Statement::Label(name));
    }

    if let Some(token) = text.strip_prefix('@') {
        return Ok(Statement::Address(token));
    }

    let (head, jump) = match text.split_once(';') {
        Some((head, jump)) => (head, Some(jump)),
        None => (text, None),
    };
    let (dest, comp) = match head.split_once('=') {
        Some((dest, comp)) => (Some(dest), comp),
        None => (None, head),
    };

    Ok(Statement::Command { dest, comp, jump })
}

/// A symbol is a run of letters, digits, `_`, `.`, `$` and `:` that does
/// not start with a digit.
pub(crate) fn is_symbol(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if !first.is_ascii_digit() && is_symbol_char(first) => {}
        _ => return false,
    }
    chars.all(is_symbol_char)
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}
