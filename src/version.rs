//! Version information for termdialog

/// The version of termdialog, set at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the application
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Get the full version string
pub fn full_version() -> String {
    format!("{} v{}", APP_NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "termdialog");
    }

    #[test]
    fn test_full_version() {
        let full = full_version();
        assert!(full.starts_with(APP_NAME));
        assert!(full.ends_with(VERSION));
    }
}
