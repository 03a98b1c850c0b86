//! SQL literal quoting utilities

/// Quote a value as a single-quoted SQL string literal.
///
/// Backslashes and single quotes are escaped with a backslash, which is
/// how the store's parser reads string literals.
///
/// # Examples
/// ```
/// use mend_db::sql_utils::quote_string_literal;
/// assert_eq!(quote_string_literal("events"), "'events'");
/// assert_eq!(quote_string_literal("it's"), r"'it\'s'");
/// assert_eq!(quote_string_literal(r"a\b"), r"'a\\b'");
/// ```
pub fn quote_string_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

/// SQL counting tables named `table` in the session's current database.
///
/// # Examples
/// ```
/// use mend_db::sql_utils::table_exists_sql;
/// assert_eq!(
///     table_exists_sql("events"),
///     "SELECT count() FROM system.tables WHERE database = currentDatabase() AND name = 'events'"
/// );
/// ```
pub fn table_exists_sql(table: &str) -> String {
    format!(
        "SELECT count() FROM system.tables WHERE database = currentDatabase() AND name = {}",
        quote_string_literal(table)
    )
}
