//! Structural syntax validation.
//!
//! Runs on top of the parser output and checks the presence and position of
//! mandatory instructions. Grammar errors from the parser are carried over.

use crate::analyzer::parser::{parse_dockerfile, Keyword, ParsedDockerfile};
use crate::analyzer::types::SyntaxResult;

pub const EMPTY_DOCKERFILE: &str = "Dockerfile is empty";
pub const MISSING_FROM: &str = "Missing FROM instruction";
pub const NO_USER_WARNING: &str = "No USER instruction found (consider adding)";
pub const NO_EXPOSE_WARNING: &str = "No EXPOSE instruction found (consider adding)";

/// Parse and validate Dockerfile content.
pub fn validate_syntax(content: &str) -> SyntaxResult {
    validate_parsed(&parse_dockerfile(content))
}

/// Validate an already parsed Dockerfile.
pub fn validate_parsed(parsed: &ParsedDockerfile) -> SyntaxResult {
    let mut errors = parsed.errors.clone();
    let mut warnings = Vec::new();

    let Some(first) = parsed.first() else {
        errors.push(EMPTY_DOCKERFILE.to_string());
        return SyntaxResult::new(errors, warnings);
    };

    if !first.is(Keyword::From) {
        errors.push(format!(
            "First instruction must be FROM, found {}",
            first.keyword
        ));
    }

    // Reported independently of the position check above
    if !parsed.contains(Keyword::From) {
        errors.push(MISSING_FROM.to_string());
    }

    if !parsed.contains(Keyword::User) {
        warnings.push(NO_USER_WARNING.to_string());
    }

    if !parsed.contains(Keyword::Expose) {
        warnings.push(NO_EXPOSE_WARNING.to_string());
    }

    log::debug!(
        "Syntax validation: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    SyntaxResult::new(errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dockerfile() {
        let result = validate_syntax("");
        assert!(!result.valid);
        assert_eq!(result.errors, vec![EMPTY_DOCKERFILE.to_string()]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_only_comments_is_empty() {
        let result = validate_syntax("# just a comment\n\n");
        assert!(!result.valid);
        assert!(result.errors.contains(&EMPTY_DOCKERFILE.to_string()));
    }

    #[test]
    fn test_valid_dockerfile() {
        let dockerfile = r#"
FROM python:3.11-slim
WORKDIR /app
COPY . .
EXPOSE 8000
USER app
CMD ["python", "main.py"]
"#;
        let result = validate_syntax(dockerfile);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_arg_before_from() {
        let result = validate_syntax("ARG VERSION=3.19\nFROM alpine:${VERSION}\nUSER app\nEXPOSE 80");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["First instruction must be FROM, found ARG".to_string()]
        );
    }

    #[test]
    fn test_missing_from_reports_both_errors() {
        let result = validate_syntax("RUN echo hi\nUSER app\nEXPOSE 80");
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "First instruction must be FROM, found RUN".to_string(),
                MISSING_FROM.to_string(),
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_affect_validity() {
        let result = validate_syntax("FROM alpine");
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec![NO_USER_WARNING.to_string(), NO_EXPOSE_WARNING.to_string()]
        );
    }

    #[test]
    fn test_parser_errors_come_first() {
        let result = validate_syntax("BOGUS thing\nFROM alpine");
        assert!(!result.valid);
        assert_eq!(result.errors[0], "Line 1: Invalid instruction 'BOGUS'");
        assert_eq!(result.errors[1], "First instruction must be FROM, found BOGUS");
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_parsed_reuses_parse() {
        let parsed = parse_dockerfile("FROM alpine\nUSER app\nEXPOSE 80");
        assert_eq!(validate_parsed(&parsed), validate_syntax("FROM alpine\nUSER app\nEXPOSE 80"));
    }
}
