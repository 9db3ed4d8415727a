use std::fmt;

/// Position of the last event in a stream. A stream holding one event is at
/// version 0; "no stream yet" is not a version, see [`ExpectedVersion`].
pub type StreamVersion = u64;

/// Precondition attached to a command dispatch: either the stream must not
/// exist yet, or it must currently sit at an exact version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedVersion {
    NoStream,
    Exact(StreamVersion),
}

impl ExpectedVersion {
    pub fn matches(&self, observed: Option<StreamVersion>) -> bool {
        match self {
            ExpectedVersion::NoStream => observed.is_none(),
            ExpectedVersion::Exact(version) => observed == Some(*version),
        }
    }
}

impl From<Option<StreamVersion>> for ExpectedVersion {
    fn from(observed: Option<StreamVersion>) -> Self {
        match observed {
            None => ExpectedVersion::NoStream,
            Some(version) => ExpectedVersion::Exact(version),
        }
    }
}

impl fmt::Display for ExpectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedVersion::NoStream => write!(f, "no stream"),
            ExpectedVersion::Exact(version) => write!(f, "{version}"),
        }
    }
}
