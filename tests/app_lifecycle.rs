//! App-level tests: the UI thread side of a submission cycle.

mod common;

use common::mock_service::{MockResponse, MockService};
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shortener::ui::form::{FormIntent, FormPhase, InputIssue};
use shortener::ui::input::handle_key;
use std::time::Duration;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut shortener::ui::app::App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

#[test]
fn submit_round_trip_through_event_queue() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt.block_on(MockService::start());
    rt.block_on(service.enqueue_response(MockResponse::short_url(SHORT_URL)));
    let (mut app, rx) = make_app(&service.base_url(), &rt);

    type_text(&mut app, LONG_URL);
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.form().phase(), FormPhase::InFlight);
    assert!(!app.view().trigger.enabled);

    let intent = wait_settled(&rx, SETTLE_TIMEOUT);
    app.on_submission_settled(intent);

    assert_eq!(app.form().phase(), FormPhase::Succeeded);
    assert_eq!(app.view().result, Some(SHORT_URL));
    assert!(app.view().trigger.enabled);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt.block_on(MockService::start());
    rt.block_on(service.enqueue_response(MockResponse::short_url(SHORT_URL).with_delay(200)));
    let (mut app, rx) = make_app(&service.base_url(), &rt);

    app.set_input_url(LONG_URL.to_string());
    assert!(app.submit());
    assert!(!app.submit());

    let intent = wait_settled(&rx, SETTLE_TIMEOUT);
    app.on_submission_settled(intent);

    let requests = rt.block_on(service.captured_requests());
    assert_eq!(requests.len(), 1);
    assert!(!app.form().is_in_flight());
}

#[test]
fn edits_during_flight_apply_immediately() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt.block_on(MockService::start());
    rt.block_on(service.enqueue_response(MockResponse::short_url(SHORT_URL).with_delay(100)));
    let (mut app, rx) = make_app(&service.base_url(), &rt);

    app.set_input_url(LONG_URL.to_string());
    app.submit();
    handle_key(&mut app, ctrl('u'));
    type_text(&mut app, "https://next.example");

    assert_eq!(app.form().input_url(), "https://next.example");
    assert!(app.form().is_in_flight());

    app.on_submission_settled(wait_settled(&rx, SETTLE_TIMEOUT));
    assert_eq!(app.form().input_url(), "https://next.example");
    assert_eq!(app.form().result(), Some(SHORT_URL));

    // The request carried the text as it was at submit time.
    let requests = rt.block_on(service.captured_requests());
    assert_eq!(requests[0].json(), serde_json::json!({ "url": LONG_URL }));
}

#[test]
fn failure_is_shown_and_cleared_by_next_submit() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt.block_on(MockService::start());
    rt.block_on(service.enqueue_response(MockResponse::error(500, "boom")));
    rt.block_on(service.enqueue_response(MockResponse::short_url(SHORT_URL).with_delay(100)));
    let (mut app, rx) = make_app(&service.base_url(), &rt);

    app.set_input_url(LONG_URL.to_string());
    app.submit();
    app.on_submission_settled(wait_settled(&rx, SETTLE_TIMEOUT));
    assert_eq!(app.form().phase(), FormPhase::Failed);
    assert!(app.view().error.is_some());

    app.submit();
    assert!(app.view().error.is_none());
    assert!(app.view().result.is_none());
    app.on_submission_settled(wait_settled(&rx, SETTLE_TIMEOUT));
    assert_eq!(app.form().phase(), FormPhase::Succeeded);
}

#[test]
fn transport_failure_reaches_the_form() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, rx) = make_app(&unreachable_base_url(), &rt);

    app.set_input_url(LONG_URL.to_string());
    app.submit();
    app.on_submission_settled(wait_settled(&rx, SETTLE_TIMEOUT));

    assert_eq!(app.form().phase(), FormPhase::Failed);
    assert!(!app.form().error().unwrap().is_empty());
    assert!(app.form().result().is_none());
}

#[test]
fn empty_input_is_blocked_without_a_cycle() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, rx) = make_app(&unreachable_base_url(), &rt);

    handle_key(&mut app, press(KeyCode::Enter));

    assert_eq!(app.form().phase(), FormPhase::Idle);
    assert_eq!(app.hint(), Some(InputIssue::Empty.hint()));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn relative_input_is_blocked_and_hint_clears_on_edit() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);

    type_text(&mut app, "example.com");
    assert!(!app.submit());
    assert_eq!(app.hint(), Some(InputIssue::NotAbsoluteUrl.hint()));

    handle_key(&mut app, press(KeyCode::Backspace));
    assert!(app.hint().is_none());
    assert_eq!(app.form().input_url(), "example.co");
}

#[test]
fn editing_never_touches_outcome() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);
    app.dispatch_form(FormIntent::CompleteSuccess {
        short_url: SHORT_URL.to_string(),
    });
    let before = (
        app.form().result().map(str::to_string),
        app.form().error().map(str::to_string),
        app.form().is_in_flight(),
    );

    type_text(&mut app, "abc");
    handle_key(&mut app, press(KeyCode::Backspace));
    app.on_paste("https://pasted.example\n");
    handle_key(&mut app, ctrl('u'));

    let after = (
        app.form().result().map(str::to_string),
        app.form().error().map(str::to_string),
        app.form().is_in_flight(),
    );
    assert_eq!(before, after);
}

#[test]
fn paste_strips_line_breaks() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);

    app.on_paste("https://example.com/\r\npath");

    assert_eq!(app.form().input_url(), "https://example.com/path");
}

#[test]
fn late_completion_after_view_closed_is_dropped() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = rt.block_on(MockService::start());
    rt.block_on(service.enqueue_response(MockResponse::short_url(SHORT_URL).with_delay(100)));
    let (mut app, rx) = make_app(&service.base_url(), &rt);

    app.set_input_url(LONG_URL.to_string());
    app.submit();
    drop(rx);
    drop(app);

    // The request still runs to completion; its result has nowhere to go.
    std::thread::sleep(Duration::from_millis(300));
    let requests = rt.block_on(service.captured_requests());
    assert_eq!(requests.len(), 1);
}

#[test]
fn quit_keys_request_quit() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    for key in [press(KeyCode::Esc), ctrl('q'), ctrl('c')] {
        let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }
}

#[test]
fn release_events_are_ignored() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);
    let mut key = press(KeyCode::Char('x'));
    key.kind = KeyEventKind::Release;

    handle_key(&mut app, key);

    assert_eq!(app.form().input_url(), "");
}

#[test]
fn link_actions_without_result_do_nothing() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);

    handle_key(&mut app, ctrl('o'));
    handle_key(&mut app, ctrl('y'));

    assert!(app.hint().is_none());
    assert_eq!(app.form().phase(), FormPhase::Idle);
}

#[test]
fn non_completion_intents_are_not_applied_as_settlement() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (mut app, _rx) = make_app(&unreachable_base_url(), &rt);

    app.on_submission_settled(FormIntent::BeginSubmission);

    assert!(!app.form().is_in_flight());
}
