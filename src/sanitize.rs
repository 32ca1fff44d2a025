//! Filename sanitisation for topic names coming from the API.

/// Characters that are invalid in filenames on common filesystems.
const ILLEGAL: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Make an arbitrary string safe to use as a filename.
///
/// Illegal filesystem characters become `_`; control characters
/// (U+0000–U+001F and U+007F–U+009F) are dropped entirely. Anything else,
/// including length, is left untouched.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter_map(|c| {
            if ILLEGAL.contains(&c) {
                Some('_')
            } else if c.is_control() {
                // char::is_control covers exactly the C0 and C1 ranges.
                None
            } else {
                Some(c)
            }
        })
        .collect()
}
