//! File listing API handler
//!
//! Parses the query string and hands the traversal to the file service on the
//! blocking pool.

use crate::config::parse_bool;
use crate::error::AppError;
use crate::services::files::{FileService, ListRequest};
use axum::{extract::Query, response::Json};

/// Build a [`ListRequest`] from raw query pairs
///
/// `file_types` may repeat; for every other key the last occurrence wins.
/// Unknown keys are ignored.
pub fn parse_list_request(pairs: Vec<(String, String)>) -> Result<ListRequest, AppError> {
    let mut directory = None;
    let mut request = ListRequest::default();

    for (key, value) in pairs {
        match key.as_str() {
            "directory" => directory = Some(value),
            "recursive" => request.recursive = parse_flag(&key, &value)?,
            "include_dirs" => request.include_dirs = parse_flag(&key, &value)?,
            "file_types" => request.file_types.push(value),
            _ => {}
        }
    }

    request.directory = directory
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::InvalidQuery("directory is required".to_string()))?;

    Ok(request)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    parse_bool(value).ok_or_else(|| {
        AppError::InvalidQuery(format!("{} must be a boolean, got '{}'", key, value))
    })
}

/// GET /list-files - List file paths under a directory
pub async fn list_files(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<String>>, AppError> {
    let request = parse_list_request(pairs)?;

    let paths = tokio::task::spawn_blocking(move || FileService::list_files(&request)).await?;

    Ok(Json(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let request = parse_list_request(pairs(&[("directory", "/tmp")])).unwrap();
        assert_eq!(request, ListRequest::new("/tmp"));
    }

    #[test]
    fn test_parse_all_parameters() {
        let request = parse_list_request(pairs(&[
            ("directory", "~/src"),
            ("recursive", "true"),
            ("include_dirs", "1"),
            ("file_types", ".rs"),
            ("file_types", ".toml"),
            ("unrelated", "ignored"),
        ]))
        .unwrap();

        assert_eq!(request.directory, "~/src");
        assert!(request.recursive);
        assert!(request.include_dirs);
        assert_eq!(request.file_types, vec![".rs".to_string(), ".toml".to_string()]);
    }

    #[test]
    fn test_parse_short_booleans() {
        let request = parse_list_request(pairs(&[
            ("directory", "/tmp"),
            ("recursive", "t"),
            ("include_dirs", "n"),
        ]))
        .unwrap();
        assert!(request.recursive);
        assert!(!request.include_dirs);
    }

    #[test]
    fn test_parse_last_scalar_wins() {
        let request = parse_list_request(pairs(&[
            ("directory", "/a"),
            ("recursive", "true"),
            ("directory", "/b"),
            ("recursive", "false"),
        ]))
        .unwrap();
        assert_eq!(request.directory, "/b");
        assert!(!request.recursive);
    }

    #[test]
    fn test_parse_missing_directory() {
        for query in [pairs(&[]), pairs(&[("directory", "")])] {
            match parse_list_request(query) {
                Err(AppError::InvalidQuery(msg)) => assert!(msg.contains("directory")),
                other => panic!("Expected InvalidQuery error, got: {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_bad_boolean() {
        let result = parse_list_request(pairs(&[("directory", "/tmp"), ("recursive", "maybe")]));
        match result {
            Err(AppError::InvalidQuery(msg)) => {
                assert!(msg.contains("recursive"));
                assert!(msg.contains("maybe"));
            }
            other => panic!("Expected InvalidQuery error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_files_handler() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("test1.txt"), "content1")
            .expect("Failed to create test file");
        std::fs::write(temp_dir.path().join("test2.rs"), "content2")
            .expect("Failed to create test file");
        std::fs::create_dir(temp_dir.path().join("subdir")).expect("Failed to create subdir");

        let directory = temp_dir.path().to_string_lossy().into_owned();
        let result = list_files(Query(pairs(&[
            ("directory", directory.as_str()),
            ("file_types", ".txt"),
        ])))
        .await;

        let Json(paths) = result.expect("Should list directory");
        let paths: HashSet<String> = paths.into_iter().collect();
        let expected: HashSet<String> = [temp_dir.path().join("test1.txt")]
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, expected);
    }

    #[tokio::test]
    async fn test_list_files_nonexistent_is_empty() {
        let result = list_files(Query(pairs(&[("directory", "/nonexistent/path/12345")]))).await;
        let Json(paths) = result.expect("Missing directory is not an error");
        assert!(paths.is_empty());
    }
}
