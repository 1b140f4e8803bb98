//! healthcheck-present (SEC-006): declare a HEALTHCHECK

use crate::analyzer::rules::{Check, Rule, RuleId};

const NAME: &str = "Health check defined";
const DESCRIPTION: &str = "A HEALTHCHECK instruction should be defined.";
const RATIONALE: &str = "Orchestrators use the health check to restart or stop routing to a container that is running but no longer serving.";

pub struct HealthcheckPresent;

impl Rule for HealthcheckPresent {
    fn id(&self) -> RuleId {
        RuleId::HealthcheckPresent
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
            content.to_uppercase().contains("HEALTHCHECK"),
            "Healthcheck defined",
            "Consider adding HEALTHCHECK",
        )
    }
}
