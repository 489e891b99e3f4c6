// src/pipeline/validate.rs

//! Shape check of the status payload.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{HomeworkBatch, HomeworkEntry};

/// Check that `payload` carries a `homeworks` list and return its entries.
///
/// Entries are passed through without per-field checks.
pub fn check_response(payload: &Value) -> Result<HomeworkBatch> {
    let homeworks = match payload.get("homeworks") {
        None | Some(Value::Null) => {
            let error = AppError::malformed(
                "Response имеет некорректное значение или ошибка ключа \"homeworks\"",
            );
            log::error!("{}", error);
            return Err(error);
        }
        Some(value) => value,
    };

    let Some(entries) = homeworks.as_array() else {
        let error = AppError::malformed("Ответ от API не является списком");
        log::error!("{}", error);
        return Err(error);
    };

    if entries.is_empty() {
        return Ok(HomeworkBatch::Empty);
    }

    Ok(HomeworkBatch::Entries(
        entries.iter().map(HomeworkEntry::from_value).collect(),
    ))
}
