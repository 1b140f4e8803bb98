//! no-hardcoded-secrets (SEC-004): no credentials baked into the image
//!
//! Fails on the first match of a fixed, case-insensitive pattern set.

use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};

use crate::analyzer::rules::{Check, Rule, RuleId};

const NAME: &str = "No hardcoded secrets";
const DESCRIPTION: &str = "Credentials must not be hardcoded in the Dockerfile.";
const RATIONALE: &str = "Anything written into a layer can be read by whoever pulls the image; pass secrets at build or run time instead.";

const SECRET_PATTERNS: &[&str] = &[
    r#"password\s*=\s*["']"#,
    r#"api[_-]?key\s*=\s*["']"#,
    r#"secret\s*=\s*["']"#,
    r#"token\s*=\s*["']"#,
    r"AWS_SECRET",
    r"PRIVATE_KEY",
];

static SECRETS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSetBuilder::new(SECRET_PATTERNS)
        .case_insensitive(true)
        .build()
        .expect("secret patterns are valid regexes")
});

pub struct NoHardcodedSecrets;

impl Rule for NoHardcodedSecrets {
    fn id(&self) -> RuleId {
        RuleId::NoHardcodedSecrets
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
        Check::from_bool(
            !SECRETS.is_match(content),
            "No hardcoded secrets detected",
            "Potential hardcoded secret detected",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_dockerfile() {
        let check = NoHardcodedSecrets.check("FROM alpine\nENV APP_ENV=production\n");
        assert!(check.passed);
        assert_eq!(check.message, "No hardcoded secrets detected");
    }

    #[test]
    fn test_quoted_password() {
        let check = NoHardcodedSecrets.check("ENV DB_PASSWORD = \"hunter2\"");
        assert!(!check.passed);
        assert_eq!(check.message, "Potential hardcoded secret detected");
    }

    #[test]
    fn test_api_key_variants() {
        assert!(!NoHardcodedSecrets.check("ENV API_KEY='abc'").passed);
        assert!(!NoHardcodedSecrets.check("ENV api-key=\"abc\"").passed);
        assert!(!NoHardcodedSecrets.check("ENV APIKEY=\"abc\"").passed);
    }

    #[test]
    fn test_well_known_names() {
        assert!(!NoHardcodedSecrets.check("ARG aws_secret_access_key").passed);
        assert!(!NoHardcodedSecrets.check("COPY private_key.pem /keys/").passed);
    }

    #[test]
    fn test_unquoted_assignment_is_not_flagged() {
        assert!(NoHardcodedSecrets.check("ENV TOKEN=${CI_TOKEN}").passed);
    }
}
