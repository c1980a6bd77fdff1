//! Number-to-word spelling for the matching exercise
//!
//! Covers 0 through 99 with hyphenated compounds ("Twenty-Three").
//! Anything larger falls back to decimal digits.

const ONES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out a number as an English word.
///
/// # Examples
///
/// ```
/// use tui_playroom_core::number_word;
///
/// assert_eq!(number_word(0), "Zero");
/// assert_eq!(number_word(14), "Fourteen");
/// assert_eq!(number_word(40), "Forty");
/// assert_eq!(number_word(23), "Twenty-Three");
/// assert_eq!(number_word(123), "123");
/// ```
pub fn number_word(n: u32) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{}-{}", tens, ONES[ones as usize]),
            }
        }
        _ => n.to_string(),
    }
}
