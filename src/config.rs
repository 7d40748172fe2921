use std::path::PathBuf;

pub const REVIEWS_FILE_ENV: &str = "REVIEWS_FILE";
pub const DEFAULT_REVIEWS_FILE: &str = "reviews.csv";

/// Application settings not covered by the Leptos configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// CSV file backing the review store.
    pub reviews_file: PathBuf,
}

impl AppConfig {
    pub fn new(reviews_file: impl Into<PathBuf>) -> Self {
        AppConfig {
            reviews_file: reviews_file.into(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(REVIEWS_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEWS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The environment is process-wide; tests touching it take turns
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn from_env_with(value: Option<&str>) -> AppConfig {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(value) => std::env::set_var(REVIEWS_FILE_ENV, value),
            None => std::env::remove_var(REVIEWS_FILE_ENV),
        }
        let config = AppConfig::from_env();
        std::env::remove_var(REVIEWS_FILE_ENV);
        config
    }

    #[test]
    fn test_from_env_uses_override() {
        let config = from_env_with(Some("/var/lib/shop/reviews.csv"));
        assert_eq!(config.reviews_file, PathBuf::from("/var/lib/shop/reviews.csv"));
    }

    #[test]
    fn test_from_env_ignores_blank_value() {
        assert_eq!(from_env_with(Some("   ")), AppConfig::default());
    }

    #[test]
    fn test_from_env_falls_back_when_unset() {
        assert_eq!(from_env_with(None), AppConfig::default());
    }

    #[test]
    fn test_default_points_at_reviews_csv() {
        assert_eq!(AppConfig::default().reviews_file, PathBuf::from("reviews.csv"));
    }

    #[test]
    fn test_new_uses_given_path() {
        let config = AppConfig::new("/tmp/shop/reviews.csv");
        assert_eq!(config.reviews_file, PathBuf::from("/tmp/shop/reviews.csv"));
    }
}
