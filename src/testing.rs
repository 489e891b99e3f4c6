// src/testing.rs

//! Test doubles shared by unit tests.

use std::collections::VecDeque;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::services::{ChatChannel, StatusApi};

/// Address nothing is listening on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Scripted review API: replies are consumed in order, the last one repeats.
pub struct ScriptedApi {
    replies: Mutex<VecDeque<Reply>>,
    pub calls: Arc<Mutex<Vec<i64>>>,
}

/// One scripted API reply.
#[derive(Clone)]
pub enum Reply {
    Payload(Value),
    Unavailable(u16),
}

impl ScriptedApi {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StatusApi for ScriptedApi {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.calls.lock().unwrap().push(from_date);
        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };
        match reply.expect("scripted api has no replies") {
            Reply::Payload(value) => Ok(value),
            Reply::Unavailable(status) => Err(AppError::endpoint_unavailable("stub", status)),
        }
    }
}

/// Chat channel recording every message; optionally failing every send.
#[derive(Clone, Default)]
pub struct RecordingChannel {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
    pub fail: bool,
}

impl RecordingChannel {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl ChatChannel for RecordingChannel {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((chat_id.to_string(), text.to_string()));
        if self.fail {
            return Err(AppError::delivery("chat not found"));
        }
        Ok(())
    }
}
