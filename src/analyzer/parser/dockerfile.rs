//! Line-oriented Dockerfile parser.
//!
//! Folds continuation lines, skips blanks and comments, and splits each
//! logical line into a keyword and its argument text using nom.

use nom::{
    bytes::complete::{take_till, take_while},
    sequence::pair,
    IResult,
};

use super::instruction::{is_valid_instruction, Instruction, ParsedDockerfile};

/// Parse Dockerfile content into an ordered instruction list.
///
/// Never fails: unknown keywords are recorded as errors and still kept.
pub fn parse_dockerfile(input: &str) -> ParsedDockerfile {
    let mut instructions = Vec::new();
    let mut errors = Vec::new();

    let lines: Vec<&str> = input.split('\n').collect();
    let mut i = 0;

    while i < lines.len() {
        let start_line = (i + 1) as u32;
        let mut logical = lines[i].trim().to_string();
        i += 1;

        if logical.is_empty() || logical.starts_with('#') {
            continue;
        }

        // Collect lines with continuations
        while has_continuation(&logical) {
            logical.pop();
            let kept = logical.trim_end().len();
            logical.truncate(kept);

            let Some(next) = lines.get(i) else {
                break;
            };
            i += 1;

            let next = next.trim();
            if !next.is_empty() {
                if !logical.is_empty() {
                    logical.push(' ');
                }
                logical.push_str(next);
            }
        }

        // A lone backslash with nothing after it
        if logical.is_empty() {
            continue;
        }

        let (keyword, arguments) = split_instruction(&logical);
        let keyword = keyword.to_uppercase();

        if !is_valid_instruction(&keyword) {
            errors.push(format!("Line {}: Invalid instruction '{}'", start_line, keyword));
        }

        instructions.push(Instruction::new(start_line, keyword, arguments.to_string()));
    }

    log::debug!(
        "Parsed {} instructions ({} errors)",
        instructions.len(),
        errors.len()
    );

    ParsedDockerfile::new(instructions, errors)
}

/// Parse and return only the instruction list.
pub fn extract_instructions(input: &str) -> Vec<Instruction> {
    parse_dockerfile(input).instructions
}

/// A line continues when it ends in an odd run of backslashes.
fn has_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
    trailing % 2 == 1
}

/// Split a logical line into keyword and argument remainder.
///
/// The line must already be trimmed, so the keyword is its first
/// whitespace-delimited token.
fn split_instruction(input: &str) -> (&str, &str) {
    let parsed: IResult<&str, (&str, &str)> =
        pair(take_till(char::is_whitespace), take_while(char::is_whitespace))(input);
    match parsed {
        Ok((arguments, (keyword, _))) => (keyword, arguments),
        // Complete-input take_till/take_while cannot fail
        Err(_) => (input, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let result = parse_dockerfile("");
        assert!(result.instructions.is_empty());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_parse_simple() {
        let result = parse_dockerfile("FROM ubuntu:22.04\nRUN echo hi");
        assert!(result.valid);
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0], Instruction::new(1, "FROM", "ubuntu:22.04"));
        assert_eq!(result.instructions[1], Instruction::new(2, "RUN", "echo hi"));
    }

    #[test]
    fn test_keyword_uppercased_arguments_untouched() {
        let result = parse_dockerfile("from Node:18-Alpine  AS  Build");
        assert_eq!(result.instructions[0].keyword, "FROM");
        assert_eq!(result.instructions[0].arguments, "Node:18-Alpine  AS  Build");
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let dockerfile = "# syntax=docker/dockerfile:1\n\n   \nFROM alpine\n  # indented comment\nCMD [\"sh\"]";
        let result = parse_dockerfile(dockerfile);
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0].line_number, 4);
        assert_eq!(result.instructions[1].line_number, 6);
    }

    #[test]
    fn test_line_continuation() {
        let dockerfile = "FROM debian\nRUN apt-get update \\\n    && apt-get install -y curl\nUSER app";
        let result = parse_dockerfile(dockerfile);
        assert_eq!(result.instructions.len(), 3);

        let run = &result.instructions[1];
        assert_eq!(run.line_number, 2);
        assert_eq!(run.keyword, "RUN");
        assert_eq!(run.arguments, "apt-get update && apt-get install -y curl");

        assert_eq!(result.instructions[2].line_number, 4);
    }

    #[test]
    fn test_multiple_continuations() {
        let dockerfile = "RUN a \\\n  b \\\n  c\nEXPOSE 80";
        let result = parse_dockerfile(dockerfile);
        assert_eq!(result.instructions[0].arguments, "a b c");
        assert_eq!(result.instructions[1].line_number, 4);
    }

    #[test]
    fn test_bare_backslash_line_keeps_next_instruction() {
        let result = parse_dockerfile("\\\nFROM alpine\nUSER app");
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0], Instruction::new(1, "FROM", "alpine"));
        assert_eq!(result.instructions[1], Instruction::new(3, "USER", "app"));

        let result = parse_dockerfile("FROM alpine\n   \\\nBOGUS x");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Line 2: Invalid instruction 'BOGUS'".to_string()]);
        assert_eq!(result.instructions[1].keyword, "BOGUS");
    }

    #[test]
    fn test_lone_backslash_at_end_of_file() {
        let result = parse_dockerfile("FROM alpine\n\\");
        assert!(result.valid);
        assert_eq!(result.instructions.len(), 1);
    }

    #[test]
    fn test_comment_inside_continuation_is_joined() {
        let result = parse_dockerfile("RUN a \\\n# note\nEXPOSE 80");
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0].arguments, "a # note");
        assert_eq!(result.instructions[1], Instruction::new(3, "EXPOSE", "80"));
    }

    #[test]
    fn test_blank_line_ends_continuation() {
        let result = parse_dockerfile("RUN a \\\n\nEXPOSE 80");
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0], Instruction::new(1, "RUN", "a"));
        assert_eq!(result.instructions[1], Instruction::new(3, "EXPOSE", "80"));
    }

    #[test]
    fn test_split_instruction() {
        assert_eq!(split_instruction("RUN  echo hi"), ("RUN", "echo hi"));
        assert_eq!(split_instruction("HEALTHCHECK"), ("HEALTHCHECK", ""));
    }

    #[test]
    fn test_trailing_backslash_on_last_line() {
        let result = parse_dockerfile("FROM alpine\nRUN echo done \\");
        assert!(result.valid);
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[1].arguments, "echo done");
    }

    #[test]
    fn test_escaped_backslash_does_not_continue() {
        let result = parse_dockerfile("RUN echo \\\\\nEXPOSE 80");
        assert_eq!(result.instructions.len(), 2);
        assert_eq!(result.instructions[0].arguments, "echo \\\\");
    }

    #[test]
    fn test_invalid_instruction_recorded() {
        let result = parse_dockerfile("FROM alpine\nMAINTAINER me@example.com\nRUNN ls");
        assert!(!result.valid);
        assert_eq!(result.instructions.len(), 3);
        assert_eq!(
            result.errors,
            vec![
                "Line 2: Invalid instruction 'MAINTAINER'".to_string(),
                "Line 3: Invalid instruction 'RUNN'".to_string(),
            ]
        );
    }

    #[test]
    fn test_keyword_without_arguments() {
        let result = parse_dockerfile("FROM scratch\nHEALTHCHECK");
        assert_eq!(result.instructions[1], Instruction::new(2, "HEALTHCHECK", ""));
    }

    #[test]
    fn test_crlf_line_endings() {
        let result = parse_dockerfile("FROM alpine\r\nUSER app\r\n");
        assert!(result.valid);
        assert_eq!(result.instructions[1], Instruction::new(2, "USER", "app"));
    }

    #[test]
    fn test_tab_separated_keyword() {
        let result = parse_dockerfile("EXPOSE\t8080");
        assert_eq!(result.instructions[0].keyword, "EXPOSE");
        assert_eq!(result.instructions[0].arguments, "8080");
    }

    #[test]
    fn test_extract_instructions() {
        let instrs = extract_instructions("FROM alpine\nUSER nobody");
        assert_eq!(instrs.len(), 2);
    }

    #[test]
    fn test_has_continuation() {
        assert!(has_continuation("RUN a \\"));
        assert!(!has_continuation("RUN a \\\\"));
        assert!(has_continuation("\\\\\\"));
        assert!(!has_continuation("RUN a"));
    }
}
