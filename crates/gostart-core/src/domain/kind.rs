//! The component kinds that get an aggregator file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A kind of generated component re-exported through an aggregator package.
///
/// Each kind fixes the Go package name of its aggregator and the identifier
/// suffix shared by its type alias and constructor binding
/// (`UserUsecase`, `NewUserUsecase`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregatorKind {
    Usecase,
    Repository,
    Handler,
}

impl AggregatorKind {
    pub const ALL: [AggregatorKind; 3] = [Self::Usecase, Self::Repository, Self::Handler];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Usecase => "usecase",
            Self::Repository => "repository",
            Self::Handler => "handler",
        }
    }

    /// Go package name of the aggregator.
    pub const fn package(&self) -> &'static str {
        match self {
            Self::Usecase => "usecases",
            Self::Repository => "repositories",
            Self::Handler => "handler",
        }
    }

    /// Identifier suffix, e.g. `Usecase` in `NewUserUsecase`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Usecase => "Usecase",
            Self::Repository => "Repository",
            Self::Handler => "Handler",
        }
    }

    /// File name of the aggregator inside its directory.
    pub fn aggregator_file_name(&self) -> String {
        format!("{}.go", self.package())
    }
}

impl fmt::Display for AggregatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AggregatorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usecase" | "usecases" => Ok(Self::Usecase),
            "repository" | "repositories" | "repo" => Ok(Self::Repository),
            "handler" | "handlers" => Ok(Self::Handler),
            other => Err(DomainError::InvalidLayout {
                reason: format!("unknown component kind: {other}"),
            }),
        }
    }
}
