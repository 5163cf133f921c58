use crate::{AckId, RequestId, SubmitFailure};

/// Lengthened URL on success; the body's `lengthened` field, or empty when absent.
pub type LengthenOutcome = Result<String, SubmitFailure>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the form.
    SubmitClicked,
    /// The lengthen request tagged `request_id` settled.
    LengthenFinished {
        request_id: RequestId,
        outcome: LengthenOutcome,
    },
    /// User asked to copy the result.
    CopyClicked,
    /// Clipboard write of the result of `request_id` settled. The error is a
    /// diagnostic string only.
    CopyFinished {
        request_id: RequestId,
        result: Result<(), String>,
    },
    /// The acknowledgment timer `ack_id` fired.
    CopyResetElapsed { ack_id: AckId },
    /// User asked to open the result in a browser.
    VisitClicked,
    /// The view is being torn down.
    ViewClosed,
}
