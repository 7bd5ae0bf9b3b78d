//! Severity scale and named level sets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed severity scale that named levels map onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Trace => write!(f, "TRACE"),
        }
    }
}

/// A single named level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Level name as used in log calls
    pub name: String,
    /// Where the level sits on the fixed scale
    pub severity: Severity,
}

/// Ordered set of named levels; position is priority (0 is most severe)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LevelDef>", into = "Vec<LevelDef>")]
pub struct LevelSet {
    levels: Vec<LevelDef>,
}

impl From<Vec<LevelDef>> for LevelSet {
    fn from(levels: Vec<LevelDef>) -> Self {
        Self::new(levels.into_iter().map(|def| (def.name, def.severity)))
    }
}

impl From<LevelSet> for Vec<LevelDef> {
    fn from(set: LevelSet) -> Self {
        set.levels
    }
}

macro_rules! level_set {
    ($($name:literal => $severity:ident),* $(,)?) => {
        LevelSet::new([$(($name, Severity::$severity)),*])
    };
}

impl LevelSet {
    /// Create a level set from `(name, severity)` pairs in priority order.
    ///
    /// Later duplicates of a name are ignored.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = (S, Severity)>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (name, severity) in levels {
            set.push(name, severity);
        }
        set
    }

    /// npm-style levels: error, warn, info, http, verbose, debug, silly
    #[must_use]
    pub fn npm() -> Self {
        level_set! {
            "error" => Error,
            "warn" => Warn,
            "info" => Info,
            "http" => Info,
            "verbose" => Debug,
            "debug" => Debug,
            "silly" => Trace,
        }
    }

    /// RFC 5424 syslog levels
    #[must_use]
    pub fn syslog() -> Self {
        level_set! {
            "emerg" => Error,
            "alert" => Error,
            "crit" => Error,
            "error" => Error,
            "warning" => Warn,
            "notice" => Info,
            "info" => Info,
            "debug" => Debug,
        }
    }

    /// CLI-style levels
    #[must_use]
    pub fn cli() -> Self {
        level_set! {
            "error" => Error,
            "warn" => Warn,
            "help" => Info,
            "data" => Info,
            "info" => Info,
            "debug" => Debug,
            "prompt" => Debug,
            "verbose" => Debug,
            "input" => Trace,
            "silly" => Trace,
        }
    }

    fn push(&mut self, name: impl Into<String>, severity: Severity) {
        let name = name.into();
        if !self.contains(&name) {
            self.levels.push(LevelDef { name, severity });
        }
    }

    /// Whether a level of this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up a level by name
    pub fn get(&self, name: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|def| def.name == name)
    }

    /// Severity of a level, if declared
    pub fn severity(&self, name: &str) -> Option<Severity> {
        self.get(name).map(|def| def.severity)
    }

    /// Priority of a level (0 is most severe), if declared
    pub fn priority(&self, name: &str) -> Option<usize> {
        self.levels.iter().position(|def| def.name == name)
    }

    /// Level names in priority order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(|def| def.name.as_str())
    }

    /// Number of declared levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no levels are declared
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
