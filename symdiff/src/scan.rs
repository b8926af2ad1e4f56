#![deny(warnings)]

/*
 * Character level helpers for the recursive descent parser. They work on
 * the raw bytes of an already whitespace-stripped expression, there's no
 * tokenizer in between.
 */

// Find the bracket matching the one at `pos`. From '(' scan forward, from
// ')' scan backward. None if the brackets are unbalanced or `pos` doesn't
// hold a bracket at all.
pub fn matching_bracket(expr: &str, pos: usize) -> Option<usize> {
    let bytes = expr.as_bytes();
    let mut depth = 0usize;
    match bytes.get(pos)? {
        b'(' => {
            for (i, &c) in bytes.iter().enumerate().skip(pos) {
                match c {
                    b'(' => depth += 1,
                    b')' => depth -= 1,
                    _ => (),
                }
                if depth == 0 {
                    return Some(i);
                }
            }
            None
        }
        b')' => {
            for i in (0..=pos).rev() {
                match bytes[i] {
                    b')' => depth += 1,
                    b'(' => depth -= 1,
                    _ => (),
                }
                if depth == 0 {
                    return Some(i);
                }
            }
            None
        }
        _ => None,
    }
}

pub fn is_additive(c: u8) -> bool {
    c == b'+' || c == b'-'
}

pub fn is_multiplicative(c: u8) -> bool {
    c == b'*' || c == b'/'
}

pub fn is_power(c: u8) -> bool {
    c == b'^'
}

pub fn is_operator(c: u8) -> bool {
    is_additive(c) || is_multiplicative(c) || is_power(c)
}

pub fn has_operators(s: &str) -> bool {
    s.bytes().any(is_operator)
}

pub fn has_brackets(s: &str) -> bool {
    s.bytes().any(|c| c == b'(' || c == b')')
}

// [0-9.]* including the empty string, the caller decides what that means
pub fn is_number(s: &str) -> bool {
    s.bytes().all(|c| c.is_ascii_digit() || c == b'.')
}

// Read a float the way C's atof does on the [0-9.] alphabet: take the
// longest digits[.digits] prefix and default to 0 when there's nothing.
pub fn leading_float(s: &str) -> f64 {
    let end = match s.find('.') {
        Some(dot) => s[dot + 1..].find('.').map_or(s.len(), |p| dot + 1 + p),
        None => s.len(),
    };
    s[..end].parse::<f64>().unwrap_or(0.0)
}

///////////////////////////////////////////////////////////////////////////////
