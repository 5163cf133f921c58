use std::sync::Once;

use lengthener_core::{update, Effect, Msg, Phase, SubmissionState, COPY_ACK_WINDOW};

const LONG_URL: &str = "https://long.example/aaaaaaaaaaaaaaaaaaaa";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn succeeded_with(state: SubmissionState, lengthened: &str) -> SubmissionState {
    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = state.latest_request();
    let (mut state, _) = update(
        state,
        Msg::LengthenFinished {
            request_id,
            outcome: Ok(lengthened.to_string()),
        },
    );
    assert_eq!(state.phase(), Phase::Succeeded);
    state.consume_dirty();
    state
}

fn succeeded_state() -> SubmissionState {
    let (state, _) = update(
        SubmissionState::new(),
        Msg::InputChanged("https://example.com".to_string()),
    );
    succeeded_with(state, LONG_URL)
}

fn copied(request_id: u64) -> Msg {
    Msg::CopyFinished {
        request_id,
        result: Ok(()),
    }
}

#[test]
fn copy_click_requests_clipboard_write_of_result() {
    init_logging();
    let (mut state, effects) = update(succeeded_state(), Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            request_id: 1,
            text: LONG_URL.to_string()
        }]
    );
    assert!(!state.copy_acknowledged());
    assert!(!state.consume_dirty());
}

#[test]
fn copy_click_outside_succeeded_is_ignored() {
    init_logging();
    let (state, effects) = update(SubmissionState::new(), Msg::CopyClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::SubmitClicked);
    let (_state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
}

#[test]
fn successful_copy_acknowledges_then_expires() {
    init_logging();
    let (mut state, effects) = update(succeeded_state(), copied(1));

    assert!(state.copy_acknowledged());
    assert!(state.view().result.unwrap().copied);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            ack_id: 1,
            after: COPY_ACK_WINDOW,
        }]
    );
    assert_eq!(COPY_ACK_WINDOW.as_millis(), 2000);

    let (mut state, effects) = update(state, Msg::CopyResetElapsed { ack_id: 1 });
    assert!(effects.is_empty());
    assert!(!state.copy_acknowledged());
    assert!(!state.view().result.unwrap().copied);
    assert!(state.consume_dirty());
    assert_eq!(state.phase(), Phase::Succeeded);
}

#[test]
fn repeated_copy_restarts_the_window() {
    init_logging();
    let (state, _) = update(succeeded_state(), copied(1));
    let (mut state, effects) = update(state, copied(1));
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            ack_id: 2,
            after: COPY_ACK_WINDOW,
        }]
    );
    state.consume_dirty();

    // The first timer's reset is superseded.
    let (mut state, _) = update(state, Msg::CopyResetElapsed { ack_id: 1 });
    assert!(state.copy_acknowledged());
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::CopyResetElapsed { ack_id: 2 });
    assert!(!state.copy_acknowledged());
}

#[test]
fn failed_copy_leaves_state_untouched() {
    init_logging();
    let before = succeeded_state();
    let (mut state, effects) = update(
        before.clone(),
        Msg::CopyFinished {
            request_id: 1,
            result: Err("permission denied".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}

#[test]
fn copy_completing_after_resubmit_does_not_acknowledge() {
    init_logging();
    let (state, _) = update(succeeded_state(), Msg::CopyClicked);
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.phase(), Phase::Pending);

    let (state, effects) = update(state, copied(1));
    assert!(effects.is_empty());
    assert!(!state.copy_acknowledged());
}

#[test]
fn copy_of_replaced_result_does_not_acknowledge_new_result() {
    init_logging();
    let (state, effects) = update(succeeded_state(), Msg::CopyClicked);
    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            request_id: 1,
            text: LONG_URL.to_string()
        }]
    );

    let mut state = succeeded_with(state, "https://long.example/B");
    assert_eq!(state.result(), "https://long.example/B");

    let (mut state, effects) = update(state, copied(1));
    assert!(effects.is_empty());
    assert!(!state.copy_acknowledged());
    assert!(!state.view().result.unwrap().copied);
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, copied(2));
    assert!(state.copy_acknowledged());
    assert_eq!(
        effects,
        vec![Effect::ScheduleCopyReset {
            ack_id: 1,
            after: COPY_ACK_WINDOW,
        }]
    );
}

#[test]
fn resubmit_clears_acknowledgment_and_cancels_timer() {
    init_logging();
    let (state, _) = update(succeeded_state(), copied(1));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert!(!state.copy_acknowledged());
    assert_eq!(state.phase(), Phase::Pending);
    assert_eq!(
        effects,
        vec![
            Effect::CancelCopyReset,
            Effect::Lengthen {
                request_id: 2,
                url: "https://example.com".to_string(),
            },
        ]
    );
}

#[test]
fn visit_opens_result_only_when_succeeded() {
    init_logging();
    let (_state, effects) = update(succeeded_state(), Msg::VisitClicked);
    assert_eq!(
        effects,
        vec![Effect::OpenExternal {
            url: LONG_URL.to_string()
        }]
    );

    let (_state, effects) = update(SubmissionState::new(), Msg::VisitClicked);
    assert!(effects.is_empty());
}

#[test]
fn view_closed_cancels_pending_reset() {
    init_logging();
    let (state, _) = update(succeeded_state(), copied(1));
    let (state, effects) = update(state, Msg::ViewClosed);
    assert_eq!(effects, vec![Effect::CancelCopyReset]);
    assert!(!state.copy_acknowledged());

    let (_state, effects) = update(state, Msg::ViewClosed);
    assert!(effects.is_empty());
}
