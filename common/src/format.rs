//! Display formatting shared by the views: Brazilian currency and dates,
//! the phone mask, avatar initials and decimal input parsing.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use num_format::{Locale, ToFormattedString};

/// Palette for generated avatars.
const AVATAR_COLORS: [&str; 12] = [
    "#F87171", "#FB923C", "#F59E0B", "#FACC15", "#84CC16", "#10B981", "#14B8A6", "#06B6D4",
    "#60A5FA", "#6366F1", "#A78BFA", "#F472B6",
];

/// Brasília time, used for every date shown.
fn brasilia() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap_or_else(|| Utc.fix())
}

/// `R$ 1.234,56`.
pub fn brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::pt);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {whole},{:02}", cents % 100)
}

/// `R$ 20.00`, the compact form used on cart and order lines.
pub fn brl_plain(value: f64) -> String {
    format!("R$ {value:.2}")
}

pub fn date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&brasilia()).format("%d/%m/%Y").to_string()
}

pub fn date_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&brasilia()).format("%d/%m/%Y %H:%M").to_string()
}

/// Date of an optional timestamp, `-` when missing.
pub fn date_or_dash(at: Option<&DateTime<Utc>>) -> String {
    at.map(date).unwrap_or_else(|| "-".to_string())
}

pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Brazilian phone mask applied progressively while typing:
/// `(DD`, `(DD) NNNN`, `(DD) NNNN-NNNN` or `(DD) NNNNN-NNNN`.
pub fn phone_mask(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.is_empty() {
        return String::new();
    }
    if digits.len() <= 2 {
        return format!("({digits}");
    }
    let (ddd, rest) = digits.split_at(2);
    if rest.len() <= 4 {
        return format!("({ddd}) {rest}");
    }
    let split = if rest.len() <= 8 { 4 } else { 5 };
    let (first, second) = rest.split_at(split.min(rest.len()));
    if second.is_empty() {
        format!("({ddd}) {first}")
    } else {
        format!("({ddd}) {first}-{second}")
    }
}

/// Two-letter initials: first and last word, or the first two letters of a
/// single word.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut out = String::new();
            out.extend(first.chars().next());
            out.extend(last.chars().next());
            out.to_uppercase()
        }
    }
}

/// Stable avatar colour for a name or email.
pub fn avatar_color(seed: &str) -> &'static str {
    let hash = seed
        .encode_utf16()
        .fold(0i32, |hash, unit| i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash)));
    let index = hash.unsigned_abs() as usize % AVATAR_COLORS.len();
    AVATAR_COLORS[index]
}

/// Parses a decimal typed by a person: `1.234,56`, `12,5` or `12.5`.
/// Blank or unreadable text is zero.
pub fn parse_decimal(text: &str) -> f64 {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return 0.0;
    }
    let normalized = if compact.contains(',') && compact.contains('.') {
        compact.replace('.', "").replacen(',', ".", 1)
    } else {
        compact.replacen(',', ".", 1)
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Prints a decimal back into a form input: comma separator, at most four
/// decimals, no trailing zeros.
pub fn decimal_input(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let fixed = format!("{value:.4}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    trimmed.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_brazilian_grouping() {
        assert_eq!(brl(1234.56), "R$ 1.234,56");
        assert_eq!(brl(0.0), "R$ 0,00");
        assert_eq!(brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(brl(-5.5), "-R$ 5,50");
        assert_eq!(brl_plain(20.0), "R$ 20.00");
    }

    #[test]
    fn dates_are_shown_in_brasilia_time() {
        let at: DateTime<Utc> = "2024-03-01T02:30:00Z".parse().unwrap();
        assert_eq!(date(&at), "29/02/2024");
        assert_eq!(date_time(&at), "29/02/2024 23:30");
        assert_eq!(date_or_dash(None), "-");
    }

    #[test]
    fn phone_mask_grows_with_input() {
        assert_eq!(phone_mask(""), "");
        assert_eq!(phone_mask("1"), "(1");
        assert_eq!(phone_mask("1199"), "(11) 99");
        assert_eq!(phone_mask("113456789"), "(11) 3456-789");
        assert_eq!(phone_mask("1134567890"), "(11) 3456-7890");
        assert_eq!(phone_mask("11987654321"), "(11) 98765-4321");
        assert_eq!(phone_mask("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn initials_from_first_and_last_word() {
        assert_eq!(initials("maria da silva"), "MS");
        assert_eq!(initials("joão"), "JO");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn avatar_color_is_stable() {
        assert_eq!(avatar_color("ana@ebenezer.com"), avatar_color("ana@ebenezer.com"));
        assert!(AVATAR_COLORS.contains(&avatar_color("")));
    }

    #[test]
    fn decimal_parsing_accepts_both_separators() {
        assert_eq!(parse_decimal("1.234,56"), 1234.56);
        assert_eq!(parse_decimal("12,5"), 12.5);
        assert_eq!(parse_decimal(" 12.5 "), 12.5);
        assert_eq!(parse_decimal(""), 0.0);
        assert_eq!(parse_decimal("abc"), 0.0);
    }

    #[test]
    fn decimal_input_trims_zeros() {
        assert_eq!(decimal_input(12.5), "12,5");
        assert_eq!(decimal_input(3.0), "3");
        assert_eq!(decimal_input(0.12346), "0,1235");
        assert_eq!(decimal_input(f64::NAN), "");
    }
}
