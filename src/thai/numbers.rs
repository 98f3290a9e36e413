//! Romanization of numerals.
//!
//! Digit tokens surface in subtitle and chat text all the time, so the
//! pipeline reads them out in Thai instead of passing them through. Values
//! up to two digits are read natively, including the irregular "èt" unit
//! for 21, 31 and so on; longer sequences are read digit by digit, which
//! matches how phone numbers and years are usually spoken.

const UNITS: [&str; 10] = [
    "sǔun", "nʉ\u{0300}ng", "sɔ\u{030C}ɔng", "sǎam", "sìi", "hâa", "hòk", "jèt",
    "bpɛ\u{0300}ɛt", "gâao",
];

const TENS: [&str; 10] = [
    "", "sìp", "yîi-sìp", "sǎam-sìp", "sìi-sìp", "hâa-sìp", "hòk-sìp", "jèt-sìp",
    "bpɛ\u{0300}ɛt-sìp", "gâao-sìp",
];

/// Fold Thai digits ๐–๙ onto their ASCII counterparts, leaving every other
/// character alone.
pub fn fold_thai_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '๐'..='๙' => char::from_u32('0' as u32 + (c as u32 - '๐' as u32)).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Whether a token consists entirely of digits (ASCII or Thai).
pub fn is_number_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || ('๐'..='๙').contains(&c))
}

/// Read a digit sequence out in Paiboon, parts joined by "-".
pub fn romanize_number(token: &str) -> String {
    let digits = fold_thai_digits(token);
    let ds: Vec<u8> = digits.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();

    match ds.len() {
        0 => String::new(),
        1 => UNITS[ds[0] as usize].to_string(),
        2 => {
            let (t, u) = (ds[0] as usize, ds[1] as usize);
            if t == 0 {
                // leading zero: read digit by digit
                return format!("{}-{}", UNITS[0], UNITS[u]);
            }
            let mut out = TENS[t].to_string();
            if u == 1 {
                out.push_str("-èt");
            } else if u > 0 {
                out.push('-');
                out.push_str(UNITS[u]);
            }
            out
        }
        _ => {
            let parts: Vec<&str> = ds.iter().map(|&d| UNITS[d as usize]).collect();
            parts.join("-")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    fn nfc(s: &str) -> String {
        s.nfc().collect()
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(romanize_number("0"), nfc("sǔun"));
        assert_eq!(romanize_number("1"), "nʉ\u{0300}ng");
        assert_eq!(romanize_number("5"), nfc("hâa"));
    }

    #[test]
    fn test_tens() {
        assert_eq!(romanize_number("10"), nfc("sìp"));
        assert_eq!(romanize_number("20"), nfc("yîi-sìp"));
        assert_eq!(romanize_number("21"), nfc("yîi-sìp-èt"));
        assert_eq!(romanize_number("35"), nfc("sǎam-sìp-hâa"));
        assert_eq!(romanize_number("11"), nfc("sìp-èt"));
    }

    #[test]
    fn test_long_sequences_read_digit_by_digit() {
        assert_eq!(romanize_number("101"), nfc("nʉ̀ng-sǔun-nʉ̀ng"));
    }

    #[test]
    fn test_thai_digits() {
        assert_eq!(fold_thai_digits("๒๕๖๗"), "2567");
        assert_eq!(romanize_number("๕๕"), nfc("hâa-sìp-hâa"));
        assert!(is_number_token("๑๒"));
        assert!(is_number_token("42"));
        assert!(!is_number_token("4a"));
        assert!(!is_number_token(""));
    }
}
