//! Handler chain integration tests

use crate::common::{calls, CountingHandler};
use crate::{assert_accepts, assert_rejects};
use authflow::chain::{ChainBuilder, HandlerChain, LoginHandler, SignUpHandler};
use authflow::shared::{Request, ValidationError};
use pretty_assertions::assert_eq;

#[test]
fn test_first_failing_handler_wins_and_downstream_is_skipped() {
    let (h1, c1) = CountingHandler::with_counter("h1", None);
    let (h2, c2) = CountingHandler::with_counter("h2", None);
    let (h3, c3) = CountingHandler::with_counter("h3", Some(ValidationError::InvalidEmail));
    let (h4, c4) = CountingHandler::with_counter("h4", Some(ValidationError::EmptyPassword));
    let chain = HandlerChain::link(vec![h1, h2, h3, h4]);

    assert_rejects!(chain, Request::default(), ValidationError::InvalidEmail);
    assert_eq!(
        vec![calls(&c1), calls(&c2), calls(&c3), calls(&c4)],
        vec![1, 1, 1, 0]
    );
}

#[test]
fn test_success_path_visits_every_handler() {
    let (h1, c1) = CountingHandler::with_counter("h1", None);
    let (h2, c2) = CountingHandler::with_counter("h2", None);
    let chain = HandlerChain::link(vec![h1, h2]);

    assert_accepts!(chain, Request::default());
    assert_eq!((calls(&c1), calls(&c2)), (1, 1));
}

#[test]
fn test_sub_chain_matches_full_chain_at_failure_point() {
    let (h1, _) = CountingHandler::with_counter("h1", None);
    let (h2, c2) = CountingHandler::with_counter("h2", Some(ValidationError::PasswordMismatch));
    let (h3, c3) = CountingHandler::with_counter("h3", Some(ValidationError::LocationDisabled));
    let chain = HandlerChain::link(vec![h1, h2, h3]);
    let request = Request::default();

    let from_head = chain.handle(&request);
    let from_middle = chain.node(1).unwrap().handle(&request);
    assert_eq!(from_head, from_middle);
    assert_eq!(from_middle, Some(ValidationError::PasswordMismatch));
    assert_eq!(calls(&c2), 2);
    assert_eq!(calls(&c3), 0);

    let from_tail = chain.node(2).unwrap().handle(&request);
    assert_eq!(from_tail, Some(ValidationError::LocationDisabled));
}

#[test]
fn test_empty_chain_always_passes() {
    let chain = HandlerChain::link(Vec::new());
    assert_accepts!(chain, Request::default());
    assert_accepts!(chain, Request::login("", ""));
    assert_accepts!(chain, Request::sign_up("", "", "", "", "x"));
}

#[test]
fn test_login_scenarios() {
    let chain = ChainBuilder::new().then(LoginHandler::new()).build();
    assert_rejects!(chain, Request::login("", "x"), ValidationError::EmptyEmail);
    assert_rejects!(chain, Request::login("a@b.com", ""), ValidationError::EmptyPassword);
    assert_accepts!(chain, Request::login("a@b.com", "x"));
}

#[test]
fn test_signup_scenarios() {
    let chain = ChainBuilder::new().then(SignUpHandler::new()).build();
    let sign_up = |email: &str, password: &str, repeated: &str| {
        Request::builder()
            .email(email)
            .password(password)
            .repeated_password(repeated)
            .build()
    };

    assert_rejects!(
        chain,
        sign_up("no-at-sign", "12345678", "12345678"),
        ValidationError::InvalidEmail
    );
    assert_rejects!(
        chain,
        sign_up("a@b.com", "short", "short"),
        ValidationError::InvalidPassword
    );
    assert_rejects!(
        chain,
        sign_up("a@b.com", "12345678", "different"),
        ValidationError::PasswordMismatch
    );
    assert_accepts!(chain, sign_up("a@b.com", "12345678", "12345678"));
}

#[test]
fn test_login_request_through_signup_rules() {
    // Both request kinds share one shape; the signup rules see no repeated password.
    let chain = ChainBuilder::new()
        .then(LoginHandler::new())
        .then(SignUpHandler::new())
        .build();
    assert_rejects!(
        chain,
        Request::login("a@b.com", "12345678"),
        ValidationError::PasswordMismatch
    );
}

#[test]
fn test_chain_is_shareable_across_threads() {
    let chain = std::sync::Arc::new(ChainBuilder::new().then(LoginHandler::new()).build());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let chain = std::sync::Arc::clone(&chain);
            std::thread::spawn(move || {
                let email = if i % 2 == 0 { "a@b.com" } else { "" };
                chain.handle(&Request::login(email, "x"))
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![None, Some(ValidationError::EmptyEmail), None, Some(ValidationError::EmptyEmail)]
    );
}
