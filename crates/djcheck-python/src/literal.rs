//! Decoding of Python string literals.
//!
//! Tree-sitter keeps string literals as raw source text. This module strips
//! the prefix and quotes and resolves escape sequences, producing the value
//! Python would see at runtime.

use djcheck_core::Literal;

/// Decodes the source text of a single string literal.
///
/// Returns `None` for f-strings and t-strings (they are not constants), for
/// unsupported escapes such as `\N{...}`, and for text Python itself would
/// reject (unknown prefix, non-ASCII byte strings, bad hex escapes).
pub(crate) fn parse_string(text: &str) -> Option<Literal> {
    let prefix_len = text.find(['\'', '"'])?;
    let prefix = text[..prefix_len].to_ascii_lowercase();
    if !prefix.chars().all(|c| matches!(c, 'r' | 'b' | 'u' | 'f' | 't')) {
        return None;
    }
    if prefix.contains(['f', 't']) {
        return None;
    }

    let rest = &text[prefix_len..];
    let quote = if rest.starts_with("\"\"\"") || rest.starts_with("'''") {
        &rest[..3]
    } else {
        &rest[..1]
    };
    let body = rest.strip_prefix(quote)?.strip_suffix(quote)?;

    let raw = prefix.contains('r');
    if prefix.contains('b') {
        decode(body, raw, true)?
            .into_iter()
            .map(|unit| u8::try_from(unit).ok())
            .collect::<Option<Vec<u8>>>()
            .map(Literal::Bytes)
    } else {
        decode(body, raw, false)?
            .into_iter()
            .map(char::from_u32)
            .collect::<Option<String>>()
            .map(Literal::Str)
    }
}

/// Resolves escapes in `body` into code units (chars for text, bytes for
/// byte strings).
fn decode(body: &str, raw: bool, bytes: bool) -> Option<Vec<u32>> {
    if bytes && !body.is_ascii() {
        return None;
    }
    if raw {
        return Some(body.chars().map(u32::from).collect());
    }

    let mut out = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(u32::from(c));
            continue;
        }
        let Some(escape) = chars.next() else {
            out.push(u32::from('\\'));
            break;
        };
        match escape {
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            '\\' | '\'' | '"' => out.push(u32::from(escape)),
            'a' => out.push(0x07),
            'b' => out.push(0x08),
            'f' => out.push(0x0c),
            'n' => out.push(u32::from('\n')),
            'r' => out.push(u32::from('\r')),
            't' => out.push(u32::from('\t')),
            'v' => out.push(0x0b),
            '0'..='7' => {
                let mut value = escape.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(value);
            }
            'x' => out.push(hex(&mut chars, 2)?),
            'u' if !bytes => out.push(hex(&mut chars, 4)?),
            'U' if !bytes => out.push(hex(&mut chars, 8)?),
            'N' if !bytes => return None,
            other => {
                out.push(u32::from('\\'));
                out.push(u32::from(other));
            }
        }
    }

    Some(out)
}

/// Reads exactly `digits` hex digits.
fn hex(chars: &mut impl Iterator<Item = char>, digits: usize) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        value = value.checked_mul(16)? + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
