//! Full keypad flows driven the way a frontend drives them: intents in,
//! display strings out.

use abacus::{compute, EvalOutcome, Intent, Session};

fn press(session: &mut Session, keys: &str) {
    for key in keys.chars() {
        let intent = Intent::from_key(key).expect("test key maps to an intent");
        session.handle(intent);
    }
}

#[tokio::test(start_paused = true)]
async fn typed_expression_evaluates_with_precedence() {
    let mut session = Session::new();
    press(&mut session, "2+3*4");
    assert_eq!(session.expression_line(), "2+3*4");

    session.evaluate().await;
    assert_eq!(session.display(), "14");
    assert_eq!(session.expression_line(), "14");
}

#[tokio::test(start_paused = true)]
async fn percent_key_then_equals() {
    let mut session = Session::new();
    press(&mut session, "50");
    session.handle(Intent::Percent);
    assert_eq!(session.expression_line(), "(50/100)");

    session.evaluate().await;
    assert_eq!(session.display(), "0.5");
}

#[tokio::test(start_paused = true)]
async fn error_state_resets_the_buffer() {
    let mut session = Session::new();
    press(&mut session, "10/0");
    session.evaluate().await;
    assert_eq!(session.display(), "Error");
    assert_eq!(session.expression_line(), "0");

    // The calculator keeps working after an error
    press(&mut session, "1+1");
    session.evaluate().await;
    assert_eq!(session.display(), "2");
}

#[tokio::test(start_paused = true)]
async fn overlapping_evaluations_latest_request_wins() {
    let mut session = Session::new();
    press(&mut session, "2*3");
    let first = session.handle(Intent::Equals).unwrap();

    // The user keeps typing and presses equals again while the first
    // computation is still in flight
    press(&mut session, "+4");
    let second = session.handle(Intent::Equals).unwrap();

    let (first_done, second_done) = tokio::join!(compute(first), compute(second));

    // Completion order does not matter; only the latest generation lands
    assert_eq!(session.apply_completion(first_done), EvalOutcome::Stale);
    assert_eq!(
        session.apply_completion(second_done),
        EvalOutcome::Resolved("10".to_string())
    );
    assert_eq!(session.display(), "10");
    assert_eq!(session.expression_line(), "10");
}

#[tokio::test(start_paused = true)]
async fn chained_calculation_reuses_the_result() {
    let mut session = Session::new();
    press(&mut session, "0.1+0.2");
    session.evaluate().await;
    assert_eq!(session.display(), "0.3");

    press(&mut session, "*10");
    session.evaluate().await;
    assert_eq!(session.display(), "3");
}
