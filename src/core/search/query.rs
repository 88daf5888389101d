//! Keyword preprocessing for rule search.
//!
//! Queries are free text. They are lowercased and split on whitespace;
//! surrounding quotes and punctuation that users paste along with a
//! term are stripped so `"naming",` matches like `naming`.

/// Split a keyword query into unique lowercase tokens
///
/// # Examples
///
/// ```
/// use rules_mcp::core::search::tokenize_query;
///
/// assert_eq!(tokenize_query("Error  HANDLING"), vec!["error", "handling"]);
/// assert_eq!(tokenize_query("\"naming\", naming"), vec!["naming"]);
/// assert!(tokenize_query("   ").is_empty());
/// ```
pub fn tokenize_query(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for raw in query.split_whitespace() {
        let token = raw
            .trim_matches(|c: char| matches!(c, '"' | '\'' | ',' | ';' | '(' | ')'))
            .to_lowercase();
        if token.is_empty() || tokens.contains(&token) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}
