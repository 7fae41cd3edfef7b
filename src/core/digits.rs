/// First code point (the zero) of every run of ten Unicode decimal digits
/// (general category Nd), sorted.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of `c` as a decimal digit in any script, e.g. `'٣'` and `'３'` are 3.
///
/// Superscripts, fractions and roman numerals are not decimal digits.
pub fn decimal_digit(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }

    let code = u32::from(c);
    let run = match DECIMAL_ZEROS.binary_search(&code) {
        Ok(i) => i,
        Err(0) => return None,
        Err(i) => i - 1,
    };
    let offset = code - DECIMAL_ZEROS[run];
    (offset < 10).then_some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(decimal_digit(c), Some(i as u32));
        }
        assert_eq!(decimal_digit('a'), None);
        assert_eq!(decimal_digit('/'), None);
        assert_eq!(decimal_digit(':'), None);
    }

    #[test]
    fn test_other_scripts() {
        assert_eq!(decimal_digit('\u{0660}'), Some(0)); // Arabic-Indic zero
        assert_eq!(decimal_digit('\u{0669}'), Some(9));
        assert_eq!(decimal_digit('\u{06F4}'), Some(4)); // Extended Arabic-Indic
        assert_eq!(decimal_digit('\u{0967}'), Some(1)); // Devanagari
        assert_eq!(decimal_digit('\u{FF15}'), Some(5)); // fullwidth
        assert_eq!(decimal_digit('\u{1D7CE}'), Some(0)); // mathematical bold
        assert_eq!(decimal_digit('\u{1D7FF}'), Some(9));
    }

    #[test]
    fn test_non_decimal_numerics() {
        assert_eq!(decimal_digit('\u{00B2}'), None); // superscript two
        assert_eq!(decimal_digit('\u{00BD}'), None); // one half
        assert_eq!(decimal_digit('\u{216B}'), None); // roman numeral twelve
        assert_eq!(decimal_digit('\u{066A}'), None); // just past the Arabic-Indic run
        assert_eq!(decimal_digit('\u{FF1A}'), None); // fullwidth colon
        assert_eq!(decimal_digit('\u{00A0}'), None);
    }

    #[test]
    fn test_table_is_sorted() {
        assert!(DECIMAL_ZEROS.windows(2).all(|w| w[0] + 10 <= w[1]));
    }
}
