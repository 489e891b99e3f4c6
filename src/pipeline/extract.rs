// src/pipeline/extract.rs

//! Turns a homework entry into the notification text.

use crate::error::{AppError, Result};
use crate::models::{HomeworkEntry, HomeworkStatus};

/// A status worth reporting, with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub homework_name: String,
    pub status: HomeworkStatus,
    pub message: String,
}

/// Build the notification for `entry`.
///
/// Absent `status` or `homework_name` is [`AppError::UndefinedStatus`];
/// a present but unknown status is [`AppError::UnknownStatusValue`].
pub fn parse_status(entry: &HomeworkEntry) -> Result<StatusChange> {
    let Some(code) = entry.status.as_deref() else {
        return Err(AppError::undefined_status("пустое значение \"status\""));
    };
    let Some(name) = entry.name.as_deref() else {
        return Err(AppError::undefined_status("пустое значение \"homework_name\""));
    };

    let status: HomeworkStatus = code.parse()?;

    Ok(StatusChange {
        homework_name: name.to_string(),
        status,
        message: format!(
            "Изменился статус проверки работы \"{}\". {}",
            name,
            status.verdict()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_for_each_known_status() {
        for status in HomeworkStatus::ALL {
            let change = parse_status(&HomeworkEntry::new("hw05.zip", status.as_str())).unwrap();
            assert_eq!(change.status, status);
            assert_eq!(change.homework_name, "hw05.zip");
            assert_eq!(
                change.message,
                format!(
                    "Изменился статус проверки работы \"hw05.zip\". {}",
                    status.verdict()
                )
            );
        }
    }

    #[test]
    fn test_unknown_status_value() {
        for code in ["", "done", "APPROVED", "reviewing "] {
            let result = parse_status(&HomeworkEntry::new("hw05.zip", code));
            assert!(
                matches!(result, Err(AppError::UnknownStatusValue(ref s)) if s == code),
                "code {code:?}"
            );
        }
    }

    #[test]
    fn test_missing_status_is_undefined() {
        let entry = HomeworkEntry {
            name: Some("hw05.zip".to_string()),
            status: None,
        };
        assert!(matches!(
            parse_status(&entry),
            Err(AppError::UndefinedStatus(_))
        ));
    }

    #[test]
    fn test_missing_name_is_undefined() {
        let entry = HomeworkEntry {
            name: None,
            status: Some("approved".to_string()),
        };
        assert!(matches!(
            parse_status(&entry),
            Err(AppError::UndefinedStatus(_))
        ));
    }
}
