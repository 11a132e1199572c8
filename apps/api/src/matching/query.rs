use crate::errors::AppError;

/// Lower-cases the query and splits it on whitespace.
///
/// Runs of whitespace never produce empty tokens, so `"rust  go"` and
/// `"rust go"` tokenize identically. Repeated tokens are kept: each one
/// contributes to the score again.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Caller-side precondition for every search: the query must contain at
/// least one non-whitespace character. Returns the trimmed query.
pub fn require_query(query: &str) -> Result<&str, AppError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Please enter a search query".to_string(),
        ));
    }
    Ok(trimmed)
}
