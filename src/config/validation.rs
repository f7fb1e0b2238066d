use anyhow::Result;
pub const SORT_KEYS: [&str; 2] = ["name", "size"];
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    /// Fields `validate_and_fix_config` reset to their defaults.
    pub fixed: Vec<String>,
}
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
pub struct ConfigValidator;
impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }
    pub fn validate_config(&self, config: &crate::BoardnavConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        self.validate_listing_config(&config.listing, &mut errors);
        self.validate_browser_config(&config.browser, &mut errors, &mut warnings);
        self.validate_home_directory(&config.home_dir, &mut warnings);
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            fixed: Vec::new(),
        }
    }
    fn validate_listing_config(
        &self,
        config: &crate::ListingConfig,
        errors: &mut Vec<ValidationError>,
    ) {
        if !SORT_KEYS.contains(&config.sort_by.as_str()) {
            errors
                .push(ValidationError {
                    field: "listing.sort_by".to_string(),
                    message: format!("Invalid sort key: {}", config.sort_by),
                    suggestion: Some(format!("Use one of: {:?}", SORT_KEYS)),
                });
        }
    }
    fn validate_browser_config(
        &self,
        config: &crate::BrowserConfig,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if config.page_size == 0 {
            errors
                .push(ValidationError {
                    field: "browser.page_size".to_string(),
                    message: "Page size cannot be zero".to_string(),
                    suggestion: Some("Set page_size to a value greater than 0".to_string()),
                });
        }
        if config.tick_rate_ms == 0 {
            errors
                .push(ValidationError {
                    field: "browser.tick_rate_ms".to_string(),
                    message: "Tick rate cannot be zero".to_string(),
                    suggestion: Some("Set tick_rate_ms to 50-250".to_string()),
                });
        } else if config.tick_rate_ms > 2000 {
            warnings
                .push(ValidationWarning {
                    field: "browser.tick_rate_ms".to_string(),
                    message: "Very slow tick rate makes the browser feel unresponsive"
                        .to_string(),
                    suggestion: Some("Consider a value below 500".to_string()),
                });
        }
    }
    fn validate_home_directory(
        &self,
        home_dir: &std::path::Path,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if !home_dir.exists() {
            warnings
                .push(ValidationWarning {
                    field: "home_dir".to_string(),
                    message: "Home directory does not exist".to_string(),
                    suggestion: Some(
                        "Directory will be created automatically".to_string(),
                    ),
                });
        } else if !home_dir.is_dir() {
            warnings
                .push(ValidationWarning {
                    field: "home_dir".to_string(),
                    message: "Home directory path exists but is not a directory; settings cannot be saved"
                        .to_string(),
                    suggestion: Some(
                        "Pass --home with a different directory".to_string(),
                    ),
                });
        }
    }
    pub fn validate_and_fix_config(
        &self,
        config: &mut crate::BoardnavConfig,
    ) -> Result<ValidationResult> {
        let mut result = self.validate_config(config);
        let defaults = crate::BoardnavConfig::default();
        if !SORT_KEYS.contains(&config.listing.sort_by.as_str()) {
            config.listing.sort_by = defaults.listing.sort_by;
            result.fixed.push("listing.sort_by".to_string());
        }
        if config.browser.page_size == 0 {
            config.browser.page_size = defaults.browser.page_size;
            result.fixed.push("browser.page_size".to_string());
        }
        if config.browser.tick_rate_ms == 0 {
            config.browser.tick_rate_ms = defaults.browser.tick_rate_ms;
            result.fixed.push("browser.tick_rate_ms".to_string());
        }
        Ok(result)
    }
}
impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    fn broken() -> crate::BoardnavConfig {
        crate::BoardnavConfig {
            home_dir: PathBuf::from("/tmp/boardnav-validation"),
            listing: crate::ListingConfig {
                show_hidden: false,
                dirs_first: true,
                sort_by: "mtime".to_string(),
            },
            browser: crate::BrowserConfig {
                tick_rate_ms: 0,
                page_size: 0,
            },
        }
    }
    #[test]
    fn test_config_validation() {
        let validator = ConfigValidator::new();
        let result = validator.validate_config(&broken());
        assert!(! result.is_valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(| e | e.field == "listing.sort_by"));
    }
    #[test]
    fn test_default_config_is_valid() {
        let result = ConfigValidator::new()
            .validate_config(&crate::BoardnavConfig::default());
        assert!(result.is_valid);
    }
    #[test]
    fn test_validate_and_fix() {
        let validator = ConfigValidator::new();
        let mut config = broken();
        let before = validator.validate_and_fix_config(&mut config).unwrap();
        assert!(! before.is_valid);
        assert_eq!(config.listing.sort_by, "name");
        assert_eq!(config.browser.page_size, 10);
        assert_eq!(config.browser.tick_rate_ms, 100);
        assert_eq!(before.fixed.len(), 3);
        assert!(before.fixed.contains(& "browser.page_size".to_string()));
        let after = validator.validate_config(&config);
        assert!(after.is_valid);
        assert!(after.fixed.is_empty());
    }
    #[test]
    fn test_home_file_is_a_warning_not_a_fix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let home = temp_dir.path().join("home");
        std::fs::write(&home, "not a directory").unwrap();
        let mut config = crate::BoardnavConfig {
            home_dir: home,
            ..crate::BoardnavConfig::default()
        };
        let validator = ConfigValidator::new();
        let result = validator.validate_and_fix_config(&mut config).unwrap();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.iter().any(| w | w.field == "home_dir"));
        assert!(result.fixed.is_empty());
    }
}
