//! Shared application state for the Axum API server.

use std::sync::Arc;

use vocab_common::types::DeliveryChannel;
use vocab_engine::reminder::ReminderService;
use vocab_notifier::NotifyChannel;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub reminders: ReminderService,
    pub notifier: Arc<dyn NotifyChannel>,
    pub channel: DeliveryChannel,
}

impl AppState {
    pub fn new(
        reminders: ReminderService,
        notifier: Arc<dyn NotifyChannel>,
        channel: DeliveryChannel,
    ) -> Self {
        Self {
            reminders,
            notifier,
            channel,
        }
    }
}
