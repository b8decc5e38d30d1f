use std::sync::OnceLock;

use regex::Regex;

/// Extracts structured information from PostgreSQL constraint violations.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

fn patterns() -> &'static RegexPatterns {
    REGEX_PATTERNS.get_or_init(|| RegexPatterns {
        // "Key (email)=(a@b.com) already exists."
        key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid regex"),
        column_name: Regex::new(r#"column "([^"]+)""#).expect("valid regex"),
        table_name: Regex::new(r#"relation "([^"]+)""#).expect("valid regex"),
    })
}

impl ConstraintParser {
    /// Parses a unique violation into `(entity, field, value)`.
    ///
    /// The entity is the human label of the table (`users` becomes `User`).
    /// `details` is PostgreSQL's DETAIL line, which is where the offending
    /// key and value live; the primary message is used as a fallback.
    pub fn parse_unique_violation(
        message: &str,
        details: Option<&str>,
        table_name: Option<&str>,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let haystack = details.unwrap_or(message);
        let key_value = Self::extract_key_value(haystack).or_else(|| Self::extract_key_value(message));

        let from_constraint = constraint_name.and_then(Self::parse_constraint_name);
        let table = table_name
            .map(str::to_string)
            .or_else(|| from_constraint.as_ref().map(|(table, _)| table.clone()))?;

        match (key_value, from_constraint) {
            (Some((field, value)), _) => Some((Self::entity_label(&table), field, value)),
            (None, Some((_, field))) => {
                Some((Self::entity_label(&table), field, "duplicate_value".to_string()))
            }
            (None, None) => None,
        }
    }

    /// Parses a not-null violation into `(entity, field)`.
    pub fn parse_not_null_violation(
        message: &str,
        table_name: Option<&str>,
        column_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = column_name
            .map(str::to_string)
            .or_else(|| Self::capture(&patterns().column_name, message))?;
        let table = table_name
            .map(str::to_string)
            .or_else(|| Self::capture(&patterns().table_name, message))
            .unwrap_or_else(|| "resource".to_string());
        Some((Self::entity_label(&table), field))
    }

    /// Splits a PostgreSQL default constraint name (`users_email_key`)
    /// into `(table, column)`.
    pub fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let stem = ["_key", "_fkey", "_check", "_idx"]
            .iter()
            .find_map(|suffix| constraint.strip_suffix(suffix))?;
        let (table, column) = stem.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    /// Human label for a table name used in client-facing messages.
    pub fn entity_label(table: &str) -> String {
        match table {
            "users" => "User".to_string(),
            "organisations" => "Organisation".to_string(),
            other => other.to_string(),
        }
    }

    fn extract_key_value(text: &str) -> Option<(String, String)> {
        let captures = patterns().key_value.captures(text)?;
        Some((captures[1].to_string(), captures[2].to_string()))
    }

    fn capture(regex: &Regex, text: &str) -> Option<String> {
        regex.captures(text).map(|c| c[1].to_string())
    }
}
