//! Severity levels carried by execution events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered classification of an execution event.
///
/// The declaration order is the severity order, `Debug` being the least
/// severe and `Deadly` the worst.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Also the default, matching the tracker's starting value
    #[default]
    Debug = 0,
    /// Progress reports of long running steps
    Progress = 1,
    Info = 2,
    /// Per-iteration notes inside a step
    Iteration = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
    /// Work was lost, e.g. an item could not be processed at all
    Loss = 7,
    /// The pipeline cannot continue
    Deadly = 8,
}

impl Severity {
    pub const MIN: Severity = Severity::Debug;
    pub const MAX: Severity = Severity::Deadly;

    /// All severities, least severe first
    pub const ALL: [Severity; 9] = [
        Severity::Debug,
        Severity::Progress,
        Severity::Info,
        Severity::Iteration,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
        Severity::Loss,
        Severity::Deadly,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Progress => "PROGRESS",
            Severity::Info => "INFO",
            Severity::Iteration => "ITERATION",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Loss => "LOSS",
            Severity::Deadly => "DEADLY",
        }
    }

    /// Whether this severity belongs to the error class (`Error` and above)
    #[inline]
    pub fn is_error(&self) -> bool {
        *self >= Severity::Error
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Debug => BrightBlack,
            Severity::Progress => Cyan,
            Severity::Info => Green,
            Severity::Iteration => Blue,
            Severity::Warning => Yellow,
            Severity::Error => Red,
            Severity::Fatal | Severity::Loss => BrightRed,
            Severity::Deadly => Magenta,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "PROGRESS" => Ok(Severity::Progress),
            "INFO" => Ok(Severity::Info),
            "ITERATION" => Ok(Severity::Iteration),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            "LOSS" => Ok(Severity::Loss),
            "DEADLY" => Ok(Severity::Deadly),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Severity::ALL.iter().min(), Some(&Severity::MIN));
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::MAX));
        assert_eq!(Severity::default(), Severity::MIN);
        assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_error_class() {
        assert!(!Severity::Warning.is_error());
        assert!(Severity::Error.is_error());
        assert!(Severity::Deadly.is_error());
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("deadly".parse::<Severity>(), Ok(Severity::Deadly));
        assert!("catastrophic".parse::<Severity>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let parsed: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Severity::Error);
    }
}
