use crate::session::{compute_now, EvalOutcome, PENDING_PLACEHOLDER};
use crate::{Intent, Session};

fn press(session: &mut Session, keys: &str) {
    for key in keys.chars() {
        let intent = Intent::from_key(key).expect("test key maps to an intent");
        assert_ne!(intent, Intent::Equals, "use begin_evaluation in tests");
        session.handle(intent);
    }
}

#[test]
fn test_initial_state() {
    let session = Session::new();
    assert_eq!(session.expression_line(), "0");
    assert_eq!(session.display(), "0");
    assert!(session.buffer().is_empty());
}

#[test]
fn test_equals_on_empty_buffer_is_noop() {
    let mut session = Session::new();
    assert!(session.begin_evaluation().is_none());
    assert_eq!(session.display(), "0");
}

#[test]
fn test_begin_evaluation_shows_pending_placeholder() {
    let mut session = Session::new();
    press(&mut session, "1+1");
    let request = session.begin_evaluation().unwrap();
    assert_eq!(request.expression(), "1+1");
    assert_eq!(session.display(), PENDING_PLACEHOLDER);
}

#[test]
fn test_resolved_result_replaces_buffer_and_display() {
    let mut session = Session::new();
    press(&mut session, "2+3*4");
    let request = session.begin_evaluation().unwrap();
    let outcome = session.apply_completion(compute_now(&request));
    assert_eq!(outcome, EvalOutcome::Resolved("14".to_string()));
    assert_eq!(session.display(), "14");
    assert_eq!(session.buffer().as_str(), "14");
}

#[test]
fn test_result_feeds_the_next_expression() {
    let mut session = Session::new();
    press(&mut session, "2+3");
    let request = session.begin_evaluation().unwrap();
    session.apply_completion(compute_now(&request));

    press(&mut session, "+2");
    assert_eq!(session.buffer().as_str(), "5+2");
    let request = session.begin_evaluation().unwrap();
    session.apply_completion(compute_now(&request));
    assert_eq!(session.display(), "7");
}

#[test]
fn test_failed_evaluation_shows_error_and_clears_buffer() {
    let mut session = Session::new();
    press(&mut session, "10/0");
    let request = session.begin_evaluation().unwrap();
    let outcome = session.apply_completion(compute_now(&request));
    assert_eq!(outcome, EvalOutcome::Failed);
    assert_eq!(session.display(), "Error");
    assert!(session.buffer().is_empty());
    assert_eq!(session.expression_line(), "0");
}

#[test]
fn test_unbalanced_paren_fails() {
    let mut session = Session::new();
    press(&mut session, "(5");
    let request = session.begin_evaluation().unwrap();
    assert_eq!(
        session.apply_completion(compute_now(&request)),
        EvalOutcome::Failed
    );
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut session = Session::new();
    press(&mut session, "1+1");
    let first = session.begin_evaluation().unwrap();

    // More input arrives and a second equals supersedes the first request
    // before it completes
    press(&mut session, "+1");
    let second = session.begin_evaluation().unwrap();

    let stale = compute_now(&first);
    let fresh = compute_now(&second);

    assert_eq!(session.apply_completion(stale), EvalOutcome::Stale);
    // The stale result did not touch the display
    assert_eq!(session.display(), PENDING_PLACEHOLDER);

    assert_eq!(
        session.apply_completion(fresh),
        EvalOutcome::Resolved("3".to_string())
    );
    assert_eq!(session.display(), "3");
}

#[test]
fn test_clear_resets_buffer_and_display() {
    let mut session = Session::new();
    press(&mut session, "1+2*3");
    session.handle(Intent::Clear);
    assert!(session.buffer().is_empty());
    assert_eq!(session.display(), "0");
    assert_eq!(session.expression_line(), "0");
}

#[test]
fn test_percent_intent_rewrites_buffer() {
    let mut session = Session::new();
    press(&mut session, "2+50");
    session.handle(Intent::Percent);
    assert_eq!(session.buffer().as_str(), "2+(50/100)");
}

#[test]
fn test_handle_routes_equals_to_evaluation() {
    let mut session = Session::new();
    press(&mut session, "1+1");
    let request = session.handle(Intent::Equals).unwrap();
    assert_eq!(request.expression(), "1+1");
    assert_eq!(session.display(), PENDING_PLACEHOLDER);
}

#[tokio::test(start_paused = true)]
async fn test_evaluate_end_to_end() {
    let mut session = Session::new();
    press(&mut session, "2+3*4");
    let outcome = session.evaluate().await;
    assert_eq!(outcome, Some(EvalOutcome::Resolved("14".to_string())));
    assert_eq!(session.display(), "14");
}

#[tokio::test(start_paused = true)]
async fn test_evaluate_on_empty_buffer_is_noop() {
    let mut session = Session::new();
    assert_eq!(session.evaluate().await, None);
    assert_eq!(session.display(), "0");
}
