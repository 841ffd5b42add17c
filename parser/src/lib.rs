mod parser;

pub mod ast;
pub mod tokens;

use chumsky::{
    error::{Simple, SimpleReason},
    Parser,
};
use parser::ordering;

/// Parse a comma-separated ordering list such as `name, created_at desc, random()`.
pub fn parse(input: &str) -> Result<Vec<ast::Directive>, String> {
    ordering()
        .parse(input)
        .map_err(|errors| describe_errors(&errors))
}

fn describe_errors(errors: &[Simple<char>]) -> String {
    match errors.first() {
        Some(error) => {
            if let SimpleReason::Custom(message) = error.reason() {
                return format!(
                    "Invalid ordering: {message} at position {}.",
                    error.span().start
                );
            }
            let found = error
                .found()
                .map(|c| format!("`{c}`"))
                .unwrap_or_else(|| "end of input".to_string());
            format!(
                "Invalid ordering: unexpected {found} at position {}.",
                error.span().start
            )
        }
        None => "Invalid ordering.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_position() {
        let err = parse("name asc desc").unwrap_err();
        assert!(err.starts_with("Invalid ordering"), "{err}");
        assert!(parse("name,, age").is_err());
    }

    #[test]
    fn test_parse_names_bad_direction() {
        assert_eq!(
            parse("name sideways"),
            Err(
                "Invalid ordering: expected `asc` or `desc`, found `sideways` at position 5."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse(""), Ok(vec![]));
        assert_eq!(parse("   "), Ok(vec![]));
    }
}
