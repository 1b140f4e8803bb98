//! non-root-user (SEC-001): the image should switch to a non-root user
//!
//! Passes when some line carries a `USER` instruction that is not exactly
//! `USER root`.

use crate::analyzer::rules::{Check, Rule, RuleId};

const NAME: &str = "Non-root user required";
const DESCRIPTION: &str = "A USER instruction must switch to a non-root user.";
const RATIONALE: &str = "Running as root violates security best practices; a non-root user limits the damage if the container is compromised.";

pub struct NonRootUser;

impl Rule for NonRootUser {
    fn id(&self) -> RuleId {
        RuleId::NonRootUser
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn rationale(&self) -> &'static str {
        RATIONALE
    }

    fn check(&self, content: &str) -> Check {
        let has_user = content.lines().any(|line| {
            let upper = line.to_uppercase();
            let tokens: Vec<&str> = upper.split_whitespace().collect();
            upper.contains("USER ") && tokens != ["USER", "ROOT"]
        });

        Check::from_bool(
            has_user,
            "Non-root user found",
            "No USER instruction or using root",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_root_user_passes() {
        let check = NonRootUser.check("FROM alpine\nUSER appuser\n");
        assert!(check.passed);
        assert_eq!(check.message, "Non-root user found");
    }

    #[test]
    fn test_root_user_fails() {
        let check = NonRootUser.check("FROM alpine\nUSER root\n");
        assert!(!check.passed);
        assert_eq!(check.message, "No USER instruction or using root");
    }

    #[test]
    fn test_missing_user_fails() {
        assert!(!NonRootUser.check("FROM alpine\nRUN apk add --no-cache curl").passed);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(NonRootUser.check("from alpine\nuser nobody").passed);
        assert!(!NonRootUser.check("from alpine\n  user ROOT  ").passed);
    }

    #[test]
    fn test_any_non_root_line_passes() {
        assert!(NonRootUser.check("FROM alpine\nUSER root\nRUN apk add curl\nUSER 1000").passed);
    }
}
