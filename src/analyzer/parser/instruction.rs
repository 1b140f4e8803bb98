//! Dockerfile instruction types.
//!
//! Instructions are kept shallow: a normalized keyword plus the raw argument
//! text. Unknown keywords are preserved so later passes can still see them.

use serde::Serialize;
use std::fmt;

/// The fixed Dockerfile instruction vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    From,
    Run,
    Copy,
    Add,
    Workdir,
    User,
    Expose,
    Cmd,
    Entrypoint,
    Env,
    Arg,
    Label,
    Healthcheck,
    Volume,
    Onbuild,
    Stopsignal,
    Shell,
}

impl Keyword {
    /// Every valid keyword, in documentation order.
    pub const ALL: [Keyword; 17] = [
        Self::From,
        Self::Run,
        Self::Copy,
        Self::Add,
        Self::Workdir,
        Self::User,
        Self::Expose,
        Self::Cmd,
        Self::Entrypoint,
        Self::Env,
        Self::Arg,
        Self::Label,
        Self::Healthcheck,
        Self::Volume,
        Self::Onbuild,
        Self::Stopsignal,
        Self::Shell,
    ];

    /// Parse a keyword (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        Self::ALL.into_iter().find(|k| k.as_str() == upper)
    }

    /// Get the canonical uppercase spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From => "FROM",
            Self::Run => "RUN",
            Self::Copy => "COPY",
            Self::Add => "ADD",
            Self::Workdir => "WORKDIR",
            Self::User => "USER",
            Self::Expose => "EXPOSE",
            Self::Cmd => "CMD",
            Self::Entrypoint => "ENTRYPOINT",
            Self::Env => "ENV",
            Self::Arg => "ARG",
            Self::Label => "LABEL",
            Self::Healthcheck => "HEALTHCHECK",
            Self::Volume => "VOLUME",
            Self::Onbuild => "ONBUILD",
            Self::Stopsignal => "STOPSIGNAL",
            Self::Shell => "SHELL",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether an instruction name belongs to the vocabulary (case-insensitive).
pub fn is_valid_instruction(name: &str) -> bool {
    Keyword::parse(name).is_some()
}

/// A single logical Dockerfile instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Line number of the first physical line (1-indexed).
    pub line_number: u32,
    /// Uppercased instruction keyword, valid or not.
    pub keyword: String,
    /// Everything after the keyword, continuation lines folded in.
    pub arguments: String,
}

impl Instruction {
    pub fn new(line_number: u32, keyword: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            line_number,
            keyword: keyword.into(),
            arguments: arguments.into(),
        }
    }

    /// The vocabulary entry for this keyword, if it is valid.
    pub fn kind(&self) -> Option<Keyword> {
        Keyword::parse(&self.keyword)
    }

    pub fn is(&self, keyword: Keyword) -> bool {
        self.keyword == keyword.as_str()
    }
}

/// Parser output: the ordered instructions plus any grammar errors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedDockerfile {
    pub instructions: Vec<Instruction>,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ParsedDockerfile {
    pub fn new(instructions: Vec<Instruction>, errors: Vec<String>) -> Self {
        Self {
            instructions,
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn first(&self) -> Option<&Instruction> {
        self.instructions.first()
    }

    /// Keywords in source order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.instructions.iter().map(|i| i.keyword.as_str())
    }

    pub fn contains(&self, keyword: Keyword) -> bool {
        self.instructions.iter().any(|i| i.is(keyword))
    }

    /// Number of build stages (FROM instructions).
    pub fn stage_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| i.is(Keyword::From))
            .count()
    }
}
