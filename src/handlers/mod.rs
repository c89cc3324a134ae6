//! Route handlers, one module per route group.

pub mod auth;
pub mod category;
pub mod product;

use crate::error::AppError;

/// Path ids arrive as strings. A segment that does not parse as an id is
/// treated the same as an id with no row behind it.
fn parse_id(kind: &str, id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("{kind} {id_str}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_parse() {
        assert_eq!(parse_id("category", "42").unwrap(), 42);
    }

    #[test]
    fn garbage_segments_are_not_found() {
        assert!(matches!(
            parse_id("category", "abc"),
            Err(AppError::NotFound(_))
        ));
    }
}
