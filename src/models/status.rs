//! Review statuses and the verdict text shown for each of them.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Review state of a homework submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    #[default]
    Reviewing,
    Approved,
    Rejected,
}

impl HomeworkStatus {
    /// Every status the review API is known to report.
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as it appears in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::UnknownStatusValue(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_parse() {
        assert_eq!("approved".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Approved);
        assert_eq!("reviewing".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Reviewing);
        assert_eq!("rejected".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Rejected);
    }

    #[test]
    fn test_unknown_code_is_lookup_failure() {
        let err = "Approved".parse::<HomeworkStatus>().unwrap_err();
        assert!(matches!(err, AppError::UnknownStatusValue(ref s) if s == "Approved"));
    }

    #[test]
    fn test_every_status_has_verdict() {
        for status in HomeworkStatus::ALL {
            assert!(!status.verdict().is_empty());
            assert_eq!(status.as_str().parse::<HomeworkStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_default_is_reviewing() {
        assert_eq!(HomeworkStatus::default(), HomeworkStatus::Reviewing);
    }
}
