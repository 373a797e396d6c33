use crate::domain::error::ShortenerError;

/// Name of the primary key constraint on `short_urls.slug`.
pub const SLUG_CONSTRAINT: &str = "short_urls_pkey";

pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_CONSTRAINT))
}

pub fn storage_error(e: sqlx::Error) -> ShortenerError {
    ShortenerError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation_on_slug(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_slug(&sqlx::Error::PoolTimedOut));
    }

    #[test]
    fn test_storage_error_keeps_message() {
        let err = storage_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, ShortenerError::Storage(msg) if msg.contains("timed out")));
    }
}
