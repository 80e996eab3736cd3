// statement stripper - removes marker calls from file text

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_MARKER;

lazy_static! {
    static ref DEFAULT_PATTERN: Regex = build_pattern(DEFAULT_MARKER).unwrap();
}

/// marker, `(`, shortest run without a `;` (newlines included), then `);`
fn build_pattern(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?s){}\([^;]*?\);", regex::escape(marker)))
}

/// result of stripping a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub path: PathBuf,
    pub removed: usize,
}

/// removes every `<marker>(...);` call from text
#[derive(Debug, Clone)]
pub struct Stripper {
    pattern: Regex,
}

impl Default for Stripper {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl Stripper {
    /// build a stripper for the given marker, e.g. `EVLogger.debug`.
    /// the marker is matched literally.
    pub fn new(marker: &str) -> Result<Self> {
        if marker == DEFAULT_MARKER {
            return Ok(Self::default());
        }
        let pattern = build_pattern(marker)
            .with_context(|| format!("failed to build pattern for marker '{marker}'"))?;
        Ok(Self { pattern })
    }

    /// delete every non-overlapping match, leftmost first.
    /// returns the new text and how many spans were removed; text without a
    /// match comes back borrowed.
    pub fn strip<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut removed = 0;
        let stripped = self.pattern.replace_all(text, |_: &Captures| {
            removed += 1;
            ""
        });
        (stripped, removed)
    }

    /// read `path`, strip it, and write the result back.
    /// the file is rewritten even when nothing matched.
    pub fn strip_file(&self, path: &Path) -> Result<StripOutcome> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let (stripped, removed) = self.strip(&content);

        fs::write(path, stripped.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(StripOutcome {
            path: path.to_path_buf(),
            removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strip(text: &str) -> (String, usize) {
        let (out, removed) = Stripper::default().strip(text);
        (out.into_owned(), removed)
    }

    #[test]
    fn test_single_line_call_removed() {
        let (out, removed) = strip(r#"before EVLogger.debug("x", 1); after"#);
        assert_eq!(out, "before  after");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_text_without_marker_is_untouched() {
        let text = "void main() {\n  print('hello');\n  EVLogger.info('kept');\n}\n";
        let (out, removed) = Stripper::default().strip(text);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_multi_line_call_removed_as_one_match() {
        let text = "  foo();\n  EVLogger.debug(\n    'loading ${id}',\n    extra: data\n  );\n  bar();\n";
        let (out, removed) = strip(text);
        assert_eq!(out, "  foo();\n  \n  bar();\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_every_call_removed() {
        let text = "a(); EVLogger.debug('one'); b(); EVLogger.debug('two'); c();";
        let (out, removed) = strip(text);
        assert_eq!(out, "a();  b();  c();");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_nested_parens_in_arguments() {
        let (out, removed) = strip("x EVLogger.debug('n=${list.length}', fmt(a, b)); y");
        assert_eq!(out, "x  y");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_match_stops_at_first_close_paren_semicolon() {
        // lexical matching: the span ends at the first `);` even inside a string
        let text = r#"EVLogger.debug("done); next;"); tail"#;
        let (out, removed) = strip(text);
        assert_eq!(out, r#" next;"); tail"#);
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_semicolon_in_arguments_prevents_match() {
        // no `);` before the embedded `;`, so this call can't match at all
        let text = "EVLogger.debug('a;b');\nEVLogger.debug('ok');\n";
        let (out, removed) = strip(text);
        assert_eq!(out, "EVLogger.debug('a;b');\n\n");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_marker_dot_is_literal() {
        let text = "EVLoggerXdebug('x'); EVLogger.debugger('x');";
        let (out, removed) = strip(text);
        assert_eq!(out, text);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_marker_without_call_syntax_is_kept() {
        let text = "final f = EVLogger.debug;\n// EVLogger.debug is noisy\n";
        assert_eq!(strip(text).0, text);
    }

    #[test]
    fn test_strip_is_idempotent() {
        let text = "a();\nEVLogger.debug(\n 'x'\n);\nEVLogger.debug('y'); b();\n";
        let (once, _) = strip(text);
        let (twice, removed) = strip(&once);
        assert_eq!(once, twice);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_custom_marker() {
        let stripper = Stripper::new("Log.v").unwrap();
        let (out, removed) = stripper.strip("Log.v(TAG, \"x\"); Log.e(TAG, \"y\"); EVLogger.debug('z');");
        assert_eq!(out, " Log.e(TAG, \"y\"); EVLogger.debug('z');");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_strip_file_rewrites_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("service.dart");
        fs::write(&path, "load();\nEVLogger.debug('loaded');\nreturn;\n").unwrap();

        let outcome = Stripper::default().strip_file(&path).unwrap();

        assert_eq!(outcome.removed, 1);
        assert_eq!(outcome.path, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "load();\n\nreturn;\n");
    }

    #[test]
    fn test_strip_file_without_match_keeps_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.dart");
        let content = "void main() {\r\n  print('hi');\r\n}\r\n";
        fs::write(&path, content).unwrap();

        let outcome = Stripper::default().strip_file(&path).unwrap();

        assert_eq!(outcome.removed, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_strip_file_writes_back_even_without_match() {
        use std::time::{Duration, SystemTime};

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("untouched.dart");
        fs::write(&path, "const answer = 42;\n").unwrap();

        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(past)
            .unwrap();
        assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), past);

        let outcome = Stripper::default().strip_file(&path).unwrap();

        assert_eq!(outcome.removed, 0);
        assert!(fs::metadata(&path).unwrap().modified().unwrap() > past);
        assert_eq!(fs::read_to_string(&path).unwrap(), "const answer = 42;\n");
    }

    #[test]
    fn test_strip_file_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.dart");

        let err = Stripper::default().strip_file(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        assert!(err.to_string().contains("gone.dart"));
    }

    #[test]
    fn test_strip_file_invalid_utf8_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.dart");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(Stripper::default().strip_file(&path).is_err());
        // untouched on failure
        assert_eq!(fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, 0x41]);
    }
}
