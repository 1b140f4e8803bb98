//! minimal-base-image (SEC-002): build on a minimal base image
//!
//! Passes when any `FROM` line references an alpine, distroless or slim image.

use crate::analyzer::rules::{instruction_tokens, Check, Rule, RuleId};

const NAME: &str = "Minimal base image required";
const DESCRIPTION: &str = "The base image must be an alpine, slim, or distroless variant.";
const RATIONALE: &str = "Minimal images carry a much smaller attack surface (5-10MB instead of 100MB+) and fewer packages to patch.";

const MINIMAL_MARKERS: &[&str] = &["alpine", "distroless", "slim"];

pub struct MinimalBaseImage;

impl Rule for MinimalBaseImage {
    fn id(&self) -> RuleId {
        RuleId::MinimalBaseImage
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
        let images: Vec<Option<String>> = content
            .lines()
            .filter_map(instruction_tokens)
            .filter(|(keyword, _)| keyword == "FROM")
            .map(|(_, args)| image_reference(&args))
            .collect();

        if images.is_empty() {
            return Check::fail("No FROM instruction found");
        }

        let has_minimal = images.iter().flatten().any(|image| is_minimal(image));

        Check::from_bool(
            has_minimal,
            "Minimal base image used",
            "Use alpine, slim, or distroless images",
        )
    }
}

/// The image reference of a FROM line, skipping `--flag` options.
fn image_reference(args: &[&str]) -> Option<String> {
    args.iter()
        .find(|arg| !arg.starts_with("--"))
        .map(|arg| arg.to_lowercase())
}

fn is_minimal(image: &str) -> bool {
    MINIMAL_MARKERS.iter().any(|marker| image.contains(marker))
}
