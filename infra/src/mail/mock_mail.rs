//! Mock mail service
//!
//! Logs messages instead of sending them. Used in development and tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tc_shared::utils::email::mask_email;
use tracing::info;

use crate::{mail::mail_service::MailService, InfrastructureError};

/// Messages kept by the mock; older ones are dropped first
pub const MOCK_OUTBOX_CAPACITY: usize = 100;

/// A message captured by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mock mail service implementation
pub struct MockMailService {
    message_counter: AtomicUsize,
    console_output: bool,
    simulate_failure: AtomicBool,
    outbox: Mutex<VecDeque<SentMail>>,
}

impl MockMailService {
    /// Create a mock that logs each message
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_counter: AtomicUsize::new(0),
            console_output,
            simulate_failure: AtomicBool::new(simulate_failure),
            outbox: Mutex::new(VecDeque::with_capacity(MOCK_OUTBOX_CAPACITY)),
        }
    }

    pub fn set_simulate_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    pub fn get_message_count(&self) -> usize {
        self.message_counter.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_counter.store(0, Ordering::SeqCst);
        self.outbox().clear();
    }

    /// The most recent messages, oldest first, at most `MOCK_OUTBOX_CAPACITY`
    pub fn sent_messages(&self) -> Vec<SentMail> {
        self.outbox().iter().cloned().collect()
    }

    pub fn last_message_to(&self, to: &str) -> Option<SentMail> {
        self.outbox().iter().rev().find(|m| m.to == to).cloned()
    }

    fn outbox(&self) -> MutexGuard<'_, VecDeque<SentMail>> {
        // A panicking test thread must not hide earlier messages
        self.outbox.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<String, InfrastructureError> {
        if self.simulate_failure.load(Ordering::SeqCst) {
            return Err(InfrastructureError::Mail("Simulated mail failure".to_string()));
        }
        // Same address rules as the SMTP transport
        to.trim().parse::<lettre::Address>()?;

        let count = self.message_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock_{}_{}", count, uuid::Uuid::new_v4());

        if self.console_output {
            info!(
                to = %mask_email(to),
                subject = subject,
                message_id = %message_id,
                "[MOCK MAIL] message accepted"
            );
        }

        let mut outbox = self.outbox();
        if outbox.len() == MOCK_OUTBOX_CAPACITY {
            outbox.pop_front();
        }
        outbox.push_back(SentMail {
            message_id: message_id.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        drop(outbox);

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
