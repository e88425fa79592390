use once_cell::sync::Lazy;
use regex::Regex;

static NOT_FILENAME_SAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_.-]").unwrap());

/// Cleans text for use as a URL path segment / asset file stem.
///
/// Lowercases, turns spaces into `_`, drops `'`, turns `"` into `_`, then
/// removes anything outside `[a-z0-9_.-]`. The last step alone guarantees the
/// output alphabet, whatever the earlier replacements let through.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_lowercase();

    s = s.replace(' ', "_");
    s = s.replace('\'', "");
    s = s.replace('"', "_");

    NOT_FILENAME_SAFE.replace_all(&s, "").into_owned()
}
