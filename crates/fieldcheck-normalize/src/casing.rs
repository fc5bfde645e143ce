//! Proper-casing of personal names.
//!
//! Names are lower-cased and then title-cased per word under the given
//! [`Locale`]. Surnames additionally get the inner capital restored after a
//! recognised prefix (`Mcdonald` becomes `McDonald`).

use fieldcheck_model::Locale;

/// Surname prefixes, checked in order. The first match wins.
pub const SURNAME_PREFIXES: [&str; 3] = ["Mc", "Mac", "O'"];

/// Title-case `value`, restoring surname prefix capitals when `is_surname`.
pub fn to_proper_case(value: &str, is_surname: bool, locale: &Locale) -> String {
    let titled = title_case(&lower_case(value, locale), locale);
    if !is_surname {
        return titled;
    }
    apply_surname_prefix(&titled, locale).unwrap_or(titled)
}

fn lower_case(value: &str, locale: &Locale) -> String {
    if !locale.is_turkic() {
        return value.to_lowercase();
    }
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

fn push_upper(out: &mut String, c: char, locale: &Locale) {
    if locale.is_turkic() {
        match c {
            'i' => return out.push('İ'),
            'ı' => return out.push('I'),
            _ => {}
        }
    }
    out.extend(c.to_uppercase());
}

/// Upper-case the first letter of every word.
///
/// A word starts at a letter not preceded by a letter, digit, or apostrophe.
fn title_case(value: &str, locale: &Locale) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev: Option<char> = None;
    for c in value.chars() {
        let starts_word = c.is_alphabetic()
            && prev.is_none_or(|p| !(p.is_alphanumeric() || is_apostrophe(p)));
        if starts_word {
            push_upper(&mut out, c, locale);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

fn apply_surname_prefix(titled: &str, locale: &Locale) -> Option<String> {
    let chars: Vec<char> = titled.chars().collect();
    for prefix in SURNAME_PREFIXES {
        let prefix_len = prefix.chars().count();
        if chars.len() <= prefix_len {
            continue;
        }
        let matches = chars
            .iter()
            .zip(prefix.chars())
            .all(|(&a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if !matches {
            continue;
        }
        let mut out: String = chars[..prefix_len].iter().collect();
        push_upper(&mut out, chars[prefix_len], locale);
        out.extend(&chars[prefix_len + 1..]);
        return Some(out);
    }
    None
}
