use std::time::Duration;

use crate::view_model::{AppViewModel, ResultView};

/// How long the "copied" acknowledgment stays visible.
pub const COPY_ACK_WINDOW: Duration = Duration::from_millis(2000);

pub type RequestId = u64;
pub type AckId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Everything the page shows, owned by a single controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    input: String,
    phase: Phase,
    result: String,
    error_message: String,
    copy_acknowledged: bool,
    latest_request: RequestId,
    copy_ack: AckId,
    dirty: bool,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn copy_acknowledged(&self) -> bool {
        self.copy_acknowledged
    }

    /// A settled success with something to show. An empty body keeps the
    /// result region hidden.
    pub fn has_result(&self) -> bool {
        self.phase == Phase::Succeeded && !self.result.is_empty()
    }

    /// Id of the most recently issued lengthen request; 0 before the first one.
    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    pub fn view(&self) -> AppViewModel {
        let pending = self.phase == Phase::Pending;
        let error = (self.phase == Phase::Failed).then(|| self.error_message.clone());
        let result = self.has_result().then(|| ResultView {
            url: self.result.clone(),
            char_count: self.result.chars().count(),
            copied: self.copy_acknowledged,
        });
        AppViewModel {
            input: self.input.clone(),
            phase: self.phase,
            input_enabled: !pending,
            submit_enabled: !pending,
            error,
            result,
        }
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    /// Clears the previous outcome and enters `Pending` under a fresh request id.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.clear_outcome();
        self.phase = Phase::Pending;
        self.latest_request += 1;
        self.dirty = true;
        self.latest_request
    }

    pub(crate) fn succeed(&mut self, lengthened: String) {
        self.clear_outcome();
        self.result = lengthened;
        self.phase = Phase::Succeeded;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.clear_outcome();
        self.error_message = message;
        self.phase = Phase::Failed;
        self.dirty = true;
    }

    /// Starts a new acknowledgment window, superseding any earlier one.
    pub(crate) fn acknowledge_copy(&mut self) -> AckId {
        debug_assert_eq!(self.phase, Phase::Succeeded);
        self.copy_ack += 1;
        self.copy_acknowledged = true;
        self.dirty = true;
        self.copy_ack
    }

    /// Ends the window `ack_id` if it is still the current one.
    pub(crate) fn expire_copy_ack(&mut self, ack_id: AckId) -> bool {
        if ack_id != self.copy_ack || !self.copy_acknowledged {
            return false;
        }
        self.copy_acknowledged = false;
        self.dirty = true;
        true
    }

    /// Drops an active acknowledgment; returns whether one was active.
    pub(crate) fn clear_copy_ack(&mut self) -> bool {
        if !self.copy_acknowledged {
            return false;
        }
        self.copy_acknowledged = false;
        self.dirty = true;
        true
    }

    fn clear_outcome(&mut self) {
        self.result.clear();
        self.error_message.clear();
        self.copy_acknowledged = false;
    }
}
