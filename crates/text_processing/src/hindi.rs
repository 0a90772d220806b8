//! Hindi script utilities
//!
//! Shared helpers for Devanagari text used by the extractors.

use std::borrow::Cow;

/// Map Devanagari digits (०-९) to ASCII digits, leaving everything else as is
///
/// # Examples
/// ```
/// use echobiz_text_processing::hindi::devanagari_digits_to_ascii;
/// assert_eq!(devanagari_digits_to_ascii("५०० दिया"), "500 दिया");
/// assert_eq!(devanagari_digits_to_ascii("500 diya"), "500 diya");
/// ```
pub fn devanagari_digits_to_ascii(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_devanagari_digit) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match c {
                '०' => '0',
                '१' => '1',
                '२' => '2',
                '३' => '3',
                '४' => '4',
                '५' => '5',
                '६' => '6',
                '७' => '7',
                '८' => '8',
                '९' => '9',
                other => other,
            })
            .collect(),
    )
}

/// Devanagari digit (U+0966 - U+096F)
pub fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

/// Any character from the Devanagari block (U+0900 - U+097F)
pub fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}
