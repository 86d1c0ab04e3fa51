use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;

/// Parse the raw `TRNAMT` value into a two-decimal amount.
///
/// Accepted shapes: optional leading sign, a whole-number digit run, an
/// optional fractional part of exactly two digits behind `separator`, or a
/// fraction-only form (separator plus two digits). Any other shape is no
/// match and the amount stays absent. In particular a fraction that is not
/// exactly two digits wide does not fall back to the whole part.
pub(crate) fn parse_amount(raw: &str, separator: char) -> Option<Decimal> {
    let value = raw.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() {
        return None;
    }

    let (whole, frac) = match digits.split_once(separator) {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (digits, None),
    };

    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match frac {
        Some(frac) => {
            if frac.len() != 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
        }
        None => {
            if whole.is_empty() {
                return None;
            }
        }
    }

    let normalized = format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        frac.unwrap_or("00"),
    );
    Decimal::from_str(&normalized).ok()
}

/// Resolve the decimal separator for one extraction call.
///
/// Priority: explicit override, monetary locale (`LC_ALL`/`LC_MONETARY`),
/// generic locale (`LC_NUMERIC`/`LANG`), then a literal `.`.
pub(crate) fn resolve_separator(explicit: Option<char>) -> char {
    explicit
        .or_else(|| locale_separator(&["LC_ALL", "LC_MONETARY"]))
        .or_else(|| locale_separator(&["LC_NUMERIC", "LANG"]))
        .unwrap_or('.')
}

fn locale_separator(vars: &[&str]) -> Option<char> {
    let locale = vars
        .iter()
        .find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()))?;
    separator_for_locale(&locale)
}

/// Conventional decimal mark for a locale name such as `de_DE.UTF-8`.
///
/// Unknown languages return `None` so the resolution chain can fall through.
fn separator_for_locale(locale: &str) -> Option<char> {
    const COMMA_DECIMAL: &[&str] = &[
        "bg", "ca", "cs", "da", "de", "el", "es", "et", "fi", "fr", "hr", "hu", "id", "it", "lt",
        "lv", "nb", "nl", "nn", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv", "tr", "uk", "vi",
    ];
    const POINT_DECIMAL: &[&str] = &["c", "posix", "en", "ga", "he", "hi", "ja", "ko", "th", "zh"];

    let lang = locale
        .split(['_', '.', '@'])
        .next()
        .map(str::to_ascii_lowercase)?;
    if COMMA_DECIMAL.contains(&lang.as_str()) {
        Some(',')
    } else if POINT_DECIMAL.contains(&lang.as_str()) {
        Some('.')
    } else {
        None
    }
}
