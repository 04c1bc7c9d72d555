//! English cardinal rendering for numerals found in dialogue lines.
//!
//! Numerals are always parsed as floats before rendering, so whole numbers
//! still carry a fractional phrase: `"5"` becomes `"five point zero"`.

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

const POINT: &str = "point";

/// Every word the renderer can emit, after hyphens are split into spaces.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    ONES.into_iter()
        .chain(TENS)
        .chain(SCALES)
        .filter(|word| !word.is_empty())
        .chain(["hundred", "and", POINT])
}

/// Renders a numeral matched in the input text.
///
/// The numeral is made of ASCII digits and dots. When it does not parse as a
/// finite float it is spelled symbol by symbol instead.
pub fn numeral_to_words(numeral: &str) -> String {
    match numeral.parse::<f64>() {
        Ok(value) if value.is_finite() => float_to_words(value),
        _ => spell_symbols(numeral),
    }
}

/// Renders a finite, non-negative float as English words.
pub fn float_to_words(value: f64) -> String {
    // `Display` for f64 never uses exponent notation and yields the shortest
    // round-trip digits.
    let rendered = format!("{}", value.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "0"));

    let mut words = integer_to_words(whole);
    words.push(' ');
    words.push_str(POINT);
    for digit in fraction.bytes().filter(u8::is_ascii_digit) {
        words.push(' ');
        words.push_str(ONES[usize::from(digit - b'0')]);
    }
    words
}

/// Renders a run of ASCII digits as an English cardinal.
pub fn integer_to_words(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return ONES[0].to_string();
    }

    let groups = digit_groups(significant);
    if groups.len() > SCALES.len() {
        return spell_symbols(significant);
    }

    let mut words = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !words.is_empty() {
            // Only the last group can leave a remainder below one hundred.
            let separator = if scale == 0 && group < 100 { " and " } else { ", " };
            words.push_str(separator);
        }
        words.push_str(&group_to_words(group));
        if scale > 0 {
            words.push(' ');
            words.push_str(SCALES[scale]);
        }
    }
    words
}

/// Splits digits into three-digit groups, least significant first.
fn digit_groups(digits: &str) -> Vec<u16> {
    let bytes = digits.as_bytes();
    bytes
        .rchunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u16, |acc, byte| acc * 10 + u16::from(byte - b'0'))
        })
        .collect()
}

fn group_to_words(group: u16) -> String {
    let hundreds = usize::from(group / 100);
    let remainder = group % 100;
    match (hundreds, remainder) {
        (0, rest) => tens_to_words(rest),
        (h, 0) => format!("{} hundred", ONES[h]),
        (h, rest) => format!("{} hundred and {}", ONES[h], tens_to_words(rest)),
    }
}

fn tens_to_words(value: u16) -> String {
    let value = usize::from(value);
    if value < ONES.len() {
        return ONES[value].to_string();
    }
    let (tens, units) = (value / 10, value % 10);
    if units == 0 {
        TENS[tens].to_string()
    } else {
        format!("{}-{}", TENS[tens], ONES[units])
    }
}

fn spell_symbols(numeral: &str) -> String {
    numeral
        .chars()
        .filter_map(|ch| match ch {
            '.' => Some(POINT),
            _ => ch.to_digit(10).map(|digit| ONES[digit as usize]),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
