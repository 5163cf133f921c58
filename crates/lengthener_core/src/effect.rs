use std::time::Duration;

use crate::{AckId, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the trimmed URL to the lengthening endpoint.
    Lengthen { request_id: RequestId, url: String },
    /// Writes the result of request `request_id` to the clipboard.
    CopyToClipboard { request_id: RequestId, text: String },
    /// Replaces any reset that is still pending.
    ScheduleCopyReset { ack_id: AckId, after: Duration },
    CancelCopyReset,
    OpenExternal { url: String },
}
