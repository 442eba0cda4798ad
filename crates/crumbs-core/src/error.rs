use std::fmt;

/// Machine-readable error codes for hosts that branch on failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingCollaborator,
    EmptyFocalNode,
    ConfigParseError,
    SnapshotParseError,
    SnapshotReadError,
    ConfigReadError,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCollaborator => "E1001",
            Self::EmptyFocalNode => "E1002",
            Self::ConfigParseError => "E2001",
            Self::SnapshotParseError => "E2002",
            Self::SnapshotReadError => "E2003",
            Self::ConfigReadError => "E2004",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingCollaborator => "Inference context is missing a collaborator",
            Self::EmptyFocalNode => "Focal node name is empty",
            Self::ConfigParseError => "Config file parse error",
            Self::SnapshotParseError => "Graph snapshot parse error",
            Self::SnapshotReadError => "Graph snapshot could not be read",
            Self::ConfigReadError => "Config file could not be read",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::MissingCollaborator => {
                Some("Supply both the graph set and a resolution lookup before inferring.")
            }
            Self::EmptyFocalNode => Some("Pass the base name of the note to inspect."),
            Self::ConfigParseError => Some("Fix the [panel] table in config.toml and retry."),
            Self::SnapshotParseError => {
                Some("Edges must be [source, target] pairs of note names.")
            }
            Self::SnapshotReadError => {
                Some("Pass the JSON file written by your indexer via --snapshot.")
            }
            Self::ConfigReadError => {
                Some("Check the --config path, or omit it to use the per-user config.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Caller contract violations detected before an inference pass starts.
///
/// Absent nodes and empty neighbour sets are never errors; they produce
/// empty lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// A required collaborator (graph set or resolution lookup) was not supplied.
    #[error("inference context is missing its {0}")]
    MissingCollaborator(&'static str),

    /// The focal node identity was empty.
    #[error("focal node name must not be empty")]
    EmptyFocalNode,
}

impl InferenceError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingCollaborator(_) => ErrorCode::MissingCollaborator,
            Self::EmptyFocalNode => ErrorCode::EmptyFocalNode,
        }
    }
}
