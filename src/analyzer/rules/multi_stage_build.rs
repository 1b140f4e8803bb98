//! multi-stage-build (SEC-005): separate build and runtime stages

use crate::analyzer::rules::{Check, Rule, RuleId};

const NAME: &str = "Multi-stage builds recommended";
const DESCRIPTION: &str = "The Dockerfile should use two or more build stages.";
const RATIONALE: &str = "Separating build dependencies from the runtime stage keeps compilers and sources out of the final image and makes it smaller.";

pub struct MultiStageBuild;

impl Rule for MultiStageBuild {
    fn id(&self) -> RuleId {
        RuleId::MultiStageBuild
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
        let from_count = content.to_uppercase().matches("FROM ").count();
        Check::from_bool(
            from_count >= 2,
            "Multi-stage build used",
            "Consider using multi-stage build",
        )
    }
}
