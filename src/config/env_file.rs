//! .env file parsing and loading.
//!
//! This module parses environment variable files in the common dotenv
//! `KEY=value` format and applies them to the process environment.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DevkickError, Result};

/// Name of the env file looked up in the project root.
pub const ENV_FILE: &str = ".env";

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Escaped newlines inside double quotes: `KEY="line1\nline2"`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`, or `KEY=value # trailing`
///   (an unquoted value ends at the first `#`)
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Lines with an invalid key are ignored. When a key repeats, the last
/// definition wins.
///
/// # Example
///
/// ```
/// use devkick::config::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// DATABASE_URL=postgres://localhost/db
/// export DEBUG="true"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DATABASE_URL"), Some(&"postgres://localhost/db".to_string()));
/// assert_eq!(vars.get("DEBUG"), Some(&"true".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();

        if !Self::is_valid_key(key) {
            return None;
        }

        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    fn is_valid_key(key: &str) -> bool {
        let mut chars = key.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
    }

    fn parse_value(value: &str) -> String {
        if let Some(inner) = Self::quoted(value, '"') {
            return inner.replace("\\n", "\n");
        }
        if let Some(inner) = Self::quoted(value, '\'') {
            return inner.to_string();
        }

        // Unquoted: `#` starts a trailing comment.
        match value.find('#') {
            Some(pos) => value[..pos].trim_end().to_string(),
            None => value.to_string(),
        }
    }

    /// Text between an opening `quote` and the next one. Anything after the
    /// closing quote is a comment.
    fn quoted(value: &str, quote: char) -> Option<&str> {
        let rest = value.strip_prefix(quote)?;
        let end = rest.find(quote)?;
        Some(&rest[..end])
    }

    /// Load and parse an env file from a path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use devkick::config::EnvFileParser;
    /// use std::path::Path;
    ///
    /// let vars = EnvFileParser::load(Path::new(".env")).unwrap();
    /// for (key, value) in &vars {
    ///     println!("{}={}", key, value);
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = std::fs::read_to_string(path).map_err(|e| DevkickError::EnvFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }
}

/// Set variables in the process environment, keeping any value that is
/// already defined. Values containing a NUL byte cannot be stored in the
/// environment and are skipped. Returns how many variables were set.
pub fn apply_to_process(vars: &HashMap<String, String>) -> usize {
    let mut applied = 0;
    for (key, value) in vars {
        if value.contains('\0') {
            warn!("skipping {}: value contains a NUL byte", key);
            continue;
        }
        if std::env::var_os(key).is_some() {
            debug!("keeping existing value of {}", key);
            continue;
        }
        std::env::set_var(key, value);
        applied += 1;
    }
    applied
}
