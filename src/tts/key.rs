//! Cache key derivation.

/// Derive the cache key for a `(text, language, speed)` triple.
///
/// The key is the MD5 hex digest of `text|language|speed`. Whole-number
/// speeds render with a trailing `.0` so keys stay stable across existing
/// cache directories.
pub fn cache_key(text: &str, language: &str, speed: f32) -> String {
    let content = format!("{text}|{language}|{speed:?}");
    format!("{:x}", md5::compute(content.as_bytes()))
}
