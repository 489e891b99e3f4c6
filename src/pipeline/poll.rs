// src/pipeline/poll.rs

//! The polling loop.
//!
//! Each cycle runs fetch → validate → extract → notify strictly in order,
//! then sleeps for the retry interval. Cycle failures never stop the loop:
//! they are logged, and only the first one of the process lifetime is sent
//! to the chat.

use std::time::Duration;

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{HomeworkStatus, PollingConfig};
use crate::pipeline::{StatusChange, check_response, parse_status};
use crate::services::{Notifier, StatusApi};

/// What a single cycle did.
#[derive(Debug)]
pub enum CycleOutcome {
    /// `homeworks` was empty
    NoEntries,
    /// The tracked entry still has the cached status
    Unchanged,
    /// A new status was announced (delivery may still have failed)
    Notified { change: StatusChange, delivered: bool },
    /// The cycle failed; `reported` is true when the failure went to chat
    Failed { error: AppError, reported: bool },
}

/// Polls the review API and announces status changes of one submission.
pub struct PollingLoop {
    api: Box<dyn StatusApi>,
    notifier: Notifier,
    retry: Duration,
    from_date: i64,
    cached_status: HomeworkStatus,
    report_errors: bool,
}

impl PollingLoop {
    /// Create a loop whose query window starts now.
    pub fn new(
        api: Box<dyn StatusApi>,
        notifier: Notifier,
        settings: &PollingConfig,
    ) -> Result<Self> {
        Ok(Self {
            api,
            notifier,
            retry: Duration::from_secs(settings.retry_secs),
            from_date: Utc::now().timestamp(),
            cached_status: settings.initial_status.parse()?,
            report_errors: true,
        })
    }

    /// Override the lower bound of the query window.
    pub fn starting_at(mut self, from_date: i64) -> Self {
        self.from_date = from_date;
        self
    }

    pub fn cached_status(&self) -> HomeworkStatus {
        self.cached_status
    }

    /// Timestamp sent as `from_date`. It is fixed for the loop's lifetime.
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    pub fn retry_interval(&self) -> Duration {
        self.retry
    }

    /// Run cycles forever, sleeping between them.
    pub async fn run(mut self) {
        log::info!(
            "Polling started: from_date={}, interval={}s, status={}",
            self.from_date,
            self.retry.as_secs(),
            self.cached_status
        );
        loop {
            let outcome = self.run_cycle().await;
            log::debug!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(self.retry).await;
        }
    }

    /// Run one cycle without sleeping.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(error) => self.report_failure(error).await,
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome> {
        let payload = self.api.fetch(self.from_date).await?;
        let batch = check_response(&payload)?;

        let Some(entry) = batch.first() else {
            self.log_idle();
            return Ok(CycleOutcome::NoEntries);
        };
        if batch.len() > 1 {
            log::debug!("{} homeworks in response, tracking the first", batch.len());
        }

        if entry.status.as_deref() == Some(self.cached_status.as_str()) {
            self.log_idle();
            return Ok(CycleOutcome::Unchanged);
        }

        let change = parse_status(entry)?;
        let delivered = self.notifier.notify(&change.message).await;
        self.cached_status = change.status;

        Ok(CycleOutcome::Notified { change, delivered })
    }

    async fn report_failure(&mut self, error: AppError) -> CycleOutcome {
        let message = format!("Сбой в работе программы: {}", error);

        let reported = self.report_errors;
        if reported {
            self.report_errors = false;
            self.notifier.notify(&message).await;
        }
        log::error!("{}", message);

        CycleOutcome::Failed { error, reported }
    }

    fn log_idle(&self) {
        log::info!(
            "Изменения статуса отсутствуют, через {} минут проверим API",
            self.retry.as_secs() / 60
        );
    }
}
