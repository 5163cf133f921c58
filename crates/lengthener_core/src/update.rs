use engine_logging::{engine_debug, engine_warn};

use crate::{Effect, Msg, Phase, SubmissionState, SubmitFailure, COPY_ACK_WINDOW};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SubmissionState, msg: Msg) -> (SubmissionState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::LengthenFinished {
            request_id,
            outcome,
        } => {
            if request_id != state.latest_request() || state.phase() != Phase::Pending {
                engine_debug!(
                    "Dropping response for request {} (latest {}, phase {:?})",
                    request_id,
                    state.latest_request(),
                    state.phase()
                );
                return (state, Vec::new());
            }
            match outcome {
                Ok(lengthened) => state.succeed(lengthened),
                Err(failure) => state.fail(failure.user_message()),
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            if state.has_result() {
                vec![Effect::CopyToClipboard {
                    request_id: state.latest_request(),
                    text: state.result().to_owned(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CopyFinished {
            request_id,
            result: Ok(()),
        } => {
            // The result may have been replaced while the clipboard was busy.
            if request_id != state.latest_request() || !state.has_result() {
                engine_debug!(
                    "Ignoring copy of request {} (latest {})",
                    request_id,
                    state.latest_request()
                );
                return (state, Vec::new());
            }
            let ack_id = state.acknowledge_copy();
            vec![Effect::ScheduleCopyReset {
                ack_id,
                after: COPY_ACK_WINDOW,
            }]
        }
        Msg::CopyFinished {
            result: Err(reason),
            ..
        } => {
            engine_warn!("Failed to copy: {}", reason);
            Vec::new()
        }
        Msg::CopyResetElapsed { ack_id } => {
            if !state.expire_copy_ack(ack_id) {
                engine_debug!("Ignoring stale copy reset {}", ack_id);
            }
            Vec::new()
        }
        Msg::VisitClicked => {
            if state.has_result() {
                vec![Effect::OpenExternal {
                    url: state.result().to_owned(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::ViewClosed => {
            if state.clear_copy_ack() {
                vec![Effect::CancelCopyReset]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

fn submit(state: &mut SubmissionState) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(2);
    if state.copy_acknowledged() {
        effects.push(Effect::CancelCopyReset);
    }

    let url = state.input().trim().to_owned();
    if url.is_empty() {
        state.fail(SubmitFailure::Validation.user_message());
        return effects;
    }

    let request_id = state.begin_request();
    engine_debug!("Submitting request {} (url_len={})", request_id, url.len());
    effects.push(Effect::Lengthen { request_id, url });
    effects
}
