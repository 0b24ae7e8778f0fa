/// Whether `needle` occurs in `haystack`. An empty needle finds nothing.
pub fn search(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Replaces every occurrence of `needle`. An empty needle leaves the text as is.
pub fn replace(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    haystack.replace(needle, replacement)
}
