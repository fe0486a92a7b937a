use thiserror::Error;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to engine callers.
///
/// Anything not listed here degrades gracefully instead of failing: a
/// missing profile makes `update_preferences` a no-op and the meal planner
/// fall back to generic selection.
#[derive(Error, Debug)]
pub enum Error {
    /// A text query matched no catalog entry. Recoverable; the caller
    /// decides whether to re-prompt.
    #[error("food item \"{query}\" not found in catalog")]
    FoodNotFound { query: String },

    /// Email rejected by the boundary check.
    #[error("invalid email address: {email}")]
    InvalidEmail { email: String },

    /// Invalid input at a store boundary.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_query() {
        let err = Error::FoodNotFound {
            query: "dragonfruit".into(),
        };
        assert_eq!(
            err.to_string(),
            "food item \"dragonfruit\" not found in catalog"
        );
    }
}
