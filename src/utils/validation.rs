// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{IndexError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(IndexError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(IndexError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn has_extension(path: &Path, extension: &str) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
    }

    /// A route is `/`-prefixed, uses forward slashes and never climbs out of the root.
    pub fn validate_route(route: &str) -> Result<()> {
        if !route.starts_with('/') {
            return Err(IndexError::Validation(format!(
                "Route must start with '/': {}",
                route
            )));
        }

        if route.contains('\\') || route.split('/').any(|segment| segment == "..") {
            return Err(IndexError::Validation(format!(
                "Route is not a plain forward path: {}",
                route
            )));
        }

        Ok(())
    }

    pub fn is_remote_location(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    /// Hard cut after `max_chars` characters. Never splits a UTF-8 sequence.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_directory() {
        let temp = TempDir::new().unwrap();
        assert!(Validator::validate_directory(temp.path()).is_ok());
        assert!(Validator::validate_directory(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_has_extension() {
        assert!(Validator::has_extension(Path::new("guide.md"), "md"));
        assert!(!Validator::has_extension(Path::new("guide.markdown"), "md"));
        assert!(!Validator::has_extension(Path::new("md"), "md"));
    }

    #[test]
    fn test_validate_route() {
        assert!(Validator::validate_route("/guides/setup").is_ok());
        assert!(Validator::validate_route("guides/setup").is_err());
        assert!(Validator::validate_route("/guides/../secret").is_err());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(Validator::truncate_chars("hello", 10), "hello");
        assert_eq!(Validator::truncate_chars("hello", 3), "hel");
        assert_eq!(Validator::truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(Validator::truncate_chars("abc", 0), "");
    }
}
