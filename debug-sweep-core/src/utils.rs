use std::path::Path;

/// check if a file name ends with the configured suffix.
/// this is a plain suffix test on the name, not `Path::extension`,
/// so a file literally named `.dart` still counts.
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

/// "1 file", "2 files"
pub fn pluralise(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}
