///Reduces a raw token to its canonical form.
///Drops every character that is not an ASCII letter, lower-cases the rest and keeps at most `max_len` letters.
/// # Example
/// ```
/// use toxic_text_analysis::normalize;
/// assert_eq!(normalize("Don't!", 79), "dont");
/// assert_eq!(normalize("R2-D2", 79), "rd");
/// assert_eq!(normalize("Hello", 3), "hel");
/// ```
pub fn normalize(raw: &str, max_len: usize) -> String {
    raw.bytes()
        .filter(u8::is_ascii_alphabetic)
        .take(max_len)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect()
}
