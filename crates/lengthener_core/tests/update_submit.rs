use std::sync::Once;

use lengthener_core::{
    update, Effect, Msg, Phase, SubmissionState, SubmitFailure, CONNECT_FALLBACK_MESSAGE,
    EMPTY_INPUT_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit(state: SubmissionState, input: &str) -> (SubmissionState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn settle(
    state: SubmissionState,
    request_id: u64,
    outcome: Result<String, SubmitFailure>,
) -> SubmissionState {
    let (state, effects) = update(
        state,
        Msg::LengthenFinished {
            request_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn blank_input_fails_without_network_call() {
    init_logging();
    for input in ["", " ", "\t", "  \n  "] {
        let (mut next, effects) = submit(SubmissionState::new(), input);

        assert_eq!(next.phase(), Phase::Failed);
        assert_eq!(next.error_message(), EMPTY_INPUT_MESSAGE);
        assert_eq!(next.result(), "");
        assert!(effects.is_empty(), "input {input:?} emitted {effects:?}");
        assert_eq!(next.latest_request(), 0);
        assert!(next.consume_dirty());
    }
}

#[test]
fn non_blank_input_enters_pending_with_trimmed_url() {
    init_logging();
    let (next, effects) = submit(SubmissionState::new(), "  https://example.com  ");

    assert_eq!(next.phase(), Phase::Pending);
    assert_eq!(next.result(), "");
    assert_eq!(next.error_message(), "");
    assert_eq!(next.input(), "  https://example.com  ");
    assert_eq!(
        effects,
        vec![Effect::Lengthen {
            request_id: 1,
            url: "https://example.com".to_string(),
        }]
    );

    let view = next.view();
    assert!(!view.submit_enabled);
    assert!(!view.input_enabled);
    assert!(view.error.is_none());
    assert!(view.result.is_none());
}

#[test]
fn success_response_sets_result_and_length() {
    init_logging();
    let lengthened = format!("https://x.test/{}", "a".repeat(200));
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let state = settle(state, 1, Ok(lengthened.clone()));

    assert_eq!(state.phase(), Phase::Succeeded);
    assert_eq!(state.result(), lengthened);
    assert_eq!(state.error_message(), "");

    let view = state.view();
    let result = view.result.expect("result region visible");
    assert_eq!(result.url, lengthened);
    assert_eq!(result.char_count, lengthened.len());
    assert!(!result.copied);
    assert!(view.error.is_none());
    assert!(view.submit_enabled);
}

#[test]
fn empty_lengthened_field_succeeds_without_result_region() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let state = settle(state, 1, Ok(String::new()));

    assert_eq!(state.phase(), Phase::Succeeded);
    assert!(!state.has_result());
    let view = state.view();
    assert!(view.result.is_none());
    assert!(view.error.is_none());
    assert!(view.submit_enabled);

    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::VisitClicked);
    assert!(effects.is_empty());
}

#[test]
fn server_error_reports_status() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let state = settle(state, 1, Err(SubmitFailure::Service { status: 500 }));

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), "Server error: 500");
    assert_eq!(state.view().error.as_deref(), Some("Server error: 500"));
    assert!(state.view().result.is_none());
}

#[test]
fn transport_failure_uses_underlying_message_or_fallback() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let state = settle(
        state,
        1,
        Err(SubmitFailure::Transport {
            message: Some("connection refused".to_string()),
        }),
    );
    assert_eq!(state.error_message(), "connection refused");

    let (state, _) = submit(state, "https://example.com");
    let state = settle(state, 2, Err(SubmitFailure::Transport { message: None }));
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), CONNECT_FALLBACK_MESSAGE);
}

#[test]
fn resubmit_from_any_phase_matches_idle_entry() {
    init_logging();
    let (from_idle, idle_effects) = submit(SubmissionState::new(), "https://a.example");

    let (succeeded, _) = submit(SubmissionState::new(), "https://first.example");
    let succeeded = settle(succeeded, 1, Ok("https://long.example/1".to_string()));
    let (from_succeeded, effects) = submit(succeeded, "https://a.example");
    assert_eq!(from_succeeded.phase(), from_idle.phase());
    assert_eq!(from_succeeded.result(), "");
    assert_eq!(from_succeeded.view(), from_idle.view());
    assert_eq!(
        effects,
        vec![Effect::Lengthen {
            request_id: 2,
            url: "https://a.example".to_string(),
        }]
    );

    let (failed, _) = submit(SubmissionState::new(), "   ");
    let (from_failed, effects) = submit(failed, "https://a.example");
    assert_eq!(from_failed.view(), from_idle.view());
    assert_eq!(from_failed.error_message(), "");
    assert_eq!(effects, idle_effects);
}

#[test]
fn blank_resubmit_from_succeeded_clears_result() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let state = settle(state, 1, Ok("https://long.example".to_string()));
    let (state, effects) = submit(state, "");

    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.result(), "");
    assert_eq!(state.error_message(), EMPTY_INPUT_MESSAGE);
    assert!(effects.is_empty());
}

#[test]
fn only_latest_request_response_is_applied() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://first.example");
    // Bypassing the disabled control issues an overlapping request.
    let (state, effects) = submit(state, "https://second.example");
    assert_eq!(
        effects,
        vec![Effect::Lengthen {
            request_id: 2,
            url: "https://second.example".to_string(),
        }]
    );

    let state = settle(state, 2, Ok("https://long.example/second".to_string()));
    let mut state = settle(state, 1, Ok("https://long.example/first".to_string()));

    assert_eq!(state.phase(), Phase::Succeeded);
    assert_eq!(state.result(), "https://long.example/second");
    assert!(state.consume_dirty());
}

#[test]
fn stale_response_after_validation_failure_is_ignored() {
    init_logging();
    let (state, _) = submit(SubmissionState::new(), "https://example.com");
    let (mut state, _) = submit(state, "  ");
    assert!(state.consume_dirty());

    let mut state = settle(state, 1, Ok("https://long.example".to_string()));
    assert_eq!(state.phase(), Phase::Failed);
    assert_eq!(state.error_message(), EMPTY_INPUT_MESSAGE);
    assert!(!state.consume_dirty());
}

#[test]
fn typing_marks_state_dirty_only_on_change() {
    init_logging();
    let (mut state, _) = update(SubmissionState::new(), Msg::InputChanged("h".to_string()));
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::InputChanged("h".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view().input, "h");
}
