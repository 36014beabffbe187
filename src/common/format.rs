/// Format a path for display, replacing home directory with ~
pub fn format_path(path: &std::path::Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Format file count with appropriate plural
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

/// Format directory count with appropriate plural
pub fn format_dir_count(count: usize) -> String {
    if count == 1 {
        "1 directory".to_string()
    } else {
        format!("{} directories", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0 files");
        assert_eq!(format_count(1), "1 file");
        assert_eq!(format_count(42), "42 files");
    }

    #[test]
    fn test_format_dir_count() {
        assert_eq!(format_dir_count(0), "0 directories");
        assert_eq!(format_dir_count(1), "1 directory");
    }

    #[test]
    fn test_format_path_outside_home() {
        let p = std::path::Path::new("/var/tmp/cache");
        assert_eq!(format_path(p), "/var/tmp/cache");
    }
}
