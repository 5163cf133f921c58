//! Lengthener core: pure submission state machine and view-model helpers.
mod controller;
mod effect;
mod failure;
mod msg;
mod state;
mod update;
mod view_model;

pub use controller::{RequestController, ViewObserver};
pub use effect::Effect;
pub use failure::{SubmitFailure, CONNECT_FALLBACK_MESSAGE, EMPTY_INPUT_MESSAGE};
pub use msg::{LengthenOutcome, Msg};
pub use state::{AckId, Phase, RequestId, SubmissionState, COPY_ACK_WINDOW};
pub use update::update;
pub use view_model::{AppViewModel, ResultView};
