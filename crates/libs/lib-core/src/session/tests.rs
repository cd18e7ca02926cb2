use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use super::*;
use crate::config::{SessionConfig, MOCK_ADDRESS};
use crate::error::AppError;
use crate::notify::NoticeKind;

struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

struct RejectingBackend;

#[async_trait(?Send)]
impl WalletBackend for RejectingBackend {
    async fn request_account(&self) -> crate::error::Result<String> {
        Err(AppError::Backend("user rejected the request".into()))
    }
}

type Store = Rc<RefCell<WalletSession>>;

fn controller_with(backend: Rc<dyn WalletBackend>, config: &SessionConfig) -> WalletController<Store> {
    let store: Store = Rc::new(RefCell::new(WalletSession::new()));
    WalletController::new(store, backend, Rc::new(TokioTimer), config)
}

fn mock_controller() -> WalletController<Store> {
    let config = SessionConfig::default();
    let backend = MockWalletBackend::from_config(Rc::new(TokioTimer), &config);
    controller_with(Rc::new(backend), &config)
}

fn status(controller: &WalletController<Store>) -> WalletStatus {
    controller.status().unwrap()
}

fn assert_invariant(session: &WalletSession) {
    assert_eq!(session.address().is_some(), session.status() == WalletStatus::Connected);
}

#[test]
fn test_new_session_is_disconnected() {
    let session = WalletSession::new();
    assert_eq!(session.status(), WalletStatus::Disconnected);
    assert_eq!(session.address(), None);
}

#[test]
fn test_invariant_holds_after_every_transition() {
    let mut session = WalletSession::new();
    assert_invariant(&session);

    let ticket = session.begin_connect().unwrap();
    assert_invariant(&session);

    session.complete_connect(ticket, MOCK_ADDRESS.into()).unwrap();
    assert_invariant(&session);

    let _ = session.begin_connect();
    assert_invariant(&session);

    session.disconnect().unwrap();
    assert_invariant(&session);

    let ticket = session.begin_connect().unwrap();
    session.fail_connect(ticket).unwrap();
    assert_invariant(&session);

    session.begin_connect().unwrap();
    assert!(session.cancel_connect());
    assert_invariant(&session);
}

#[test]
fn test_connect_is_rejected_unless_disconnected() {
    let mut session = WalletSession::new();
    let ticket = session.begin_connect().unwrap();

    let before = session.clone();
    let err = session.begin_connect().unwrap_err();
    assert_eq!(
        err,
        AppError::InvalidTransition {
            from: WalletStatus::Connecting,
            action: "connect"
        }
    );
    assert_eq!(session, before);

    session.complete_connect(ticket, MOCK_ADDRESS.into()).unwrap();
    let before = session.clone();
    assert!(session.begin_connect().is_err());
    assert_eq!(session, before);
    assert_eq!(session.address(), Some(MOCK_ADDRESS));
}

#[test]
fn test_disconnect_while_disconnected_is_noop() {
    let mut session = WalletSession::new();
    let before = session.clone();
    assert!(session.disconnect().is_err());
    assert_eq!(session, before);
}

#[test]
fn test_disconnect_while_connecting_is_rejected() {
    let mut session = WalletSession::new();
    session.begin_connect().unwrap();
    assert!(session.disconnect().is_err());
    assert!(session.is_connecting());
}

#[test]
fn test_stale_ticket_cannot_complete_newer_attempt() {
    let mut session = WalletSession::new();
    let stale = session.begin_connect().unwrap();
    session.cancel_connect();
    let current = session.begin_connect().unwrap();

    assert!(session.complete_connect(stale, "0xold".into()).is_err());
    assert!(session.fail_connect(stale).is_err());
    assert!(session.is_connecting());

    session.complete_connect(current, MOCK_ADDRESS.into()).unwrap();
    assert_eq!(session.address(), Some(MOCK_ADDRESS));
}

#[test]
fn test_cancel_without_attempt_returns_false() {
    let mut session = WalletSession::new();
    assert!(!session.cancel_connect());
}

#[tokio::test(start_paused = true)]
async fn test_connect_disconnect_scenario() {
    let controller = mock_controller();
    assert_eq!(status(&controller), WalletStatus::Disconnected);

    let pending = controller.connect().unwrap();
    assert_eq!(status(&controller), WalletStatus::Connecting);
    assert_eq!(controller.address().unwrap(), None);

    let started = tokio::time::Instant::now();
    let outcome = pending.finish().await;
    assert_eq!(started.elapsed(), Duration::from_millis(1500));

    assert_eq!(outcome, ConnectOutcome::Connected(MOCK_ADDRESS.to_string()));
    assert_eq!(status(&controller), WalletStatus::Connected);
    assert_eq!(controller.address().unwrap().as_deref(), Some(MOCK_ADDRESS));

    controller.disconnect().unwrap();
    assert_eq!(status(&controller), WalletStatus::Disconnected);
    assert_eq!(controller.address().unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_still_connecting_before_delay_elapses() {
    let controller = mock_controller();
    let finish = controller.connect().unwrap().finish();
    tokio::pin!(finish);

    tokio::select! {
        _ = &mut finish => panic!("connect finished before the simulated delay"),
        _ = tokio::time::sleep(Duration::from_millis(1000)) => {}
    }
    assert_eq!(status(&controller), WalletStatus::Connecting);
    assert!(controller.connect().is_err());

    assert!(matches!(finish.await, ConnectOutcome::Connected(_)));
}

#[tokio::test(start_paused = true)]
async fn test_cancel_aborts_pending_attempt() {
    let controller = mock_controller();
    let finish = controller.connect().unwrap().finish();
    tokio::pin!(finish);

    tokio::select! {
        _ = &mut finish => panic!("connect finished before cancel"),
        _ = tokio::time::sleep(Duration::from_millis(500)) => {}
    }
    assert!(controller.cancel().unwrap());

    assert_eq!(finish.await, ConnectOutcome::Cancelled);
    assert_eq!(status(&controller), WalletStatus::Disconnected);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(status(&controller), WalletStatus::Disconnected);
}

#[tokio::test(start_paused = true)]
async fn test_reconnect_after_cancel_ignores_old_attempt() {
    let controller = mock_controller();
    let first = controller.connect().unwrap();
    controller.cancel().unwrap();

    let second = controller.connect().unwrap();
    assert_ne!(first.ticket(), second.ticket());

    assert_eq!(first.finish().await, ConnectOutcome::Cancelled);
    assert_eq!(status(&controller), WalletStatus::Connecting);

    assert!(matches!(second.finish().await, ConnectOutcome::Connected(_)));
    assert_eq!(status(&controller), WalletStatus::Connected);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_returns_to_disconnected() {
    let config = SessionConfig::default();
    let slow = MockWalletBackend::new(Rc::new(TokioTimer), Duration::from_secs(60), MOCK_ADDRESS);
    let controller = controller_with(Rc::new(slow), &config);

    let outcome = controller.connect().unwrap().finish().await;
    assert_eq!(outcome, ConnectOutcome::Failed(AppError::Timeout(config.connect_timeout)));
    assert_eq!(status(&controller), WalletStatus::Disconnected);
    assert_eq!(controller.address().unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_backend_failure_shows_destructive_notice() {
    let controller = controller_with(Rc::new(RejectingBackend), &SessionConfig::default());

    let outcome = controller.connect().unwrap().finish().await;
    assert!(matches!(outcome, ConnectOutcome::Failed(AppError::Backend(_))));
    assert_eq!(status(&controller), WalletStatus::Disconnected);

    let toast = outcome.notice().unwrap();
    assert_eq!(toast.kind, NoticeKind::Destructive);
    assert_eq!(toast.title, "Connection failed");

    // a failed attempt leaves the session ready for another
    assert!(controller.connect().is_ok());
}

#[test]
fn test_outcome_notices() {
    let toast = ConnectOutcome::Connected(MOCK_ADDRESS.into()).notice().unwrap();
    assert_eq!(toast.kind, NoticeKind::Success);
    assert_eq!(toast.title, "Wallet connected");
    assert!(ConnectOutcome::Cancelled.notice().is_none());
}

#[test]
fn test_dropped_store_is_detached() {
    let owner = Rc::new(RefCell::new(WalletSession::new()));
    let weak = Rc::downgrade(&owner);
    let config = SessionConfig::default();
    let backend = MockWalletBackend::from_config(Rc::new(TokioTimer), &config);
    let controller = WalletController::new(weak, Rc::new(backend), Rc::new(TokioTimer), &config);

    drop(owner);
    assert!(matches!(controller.connect(), Err(AppError::Detached)));
    assert_eq!(controller.disconnect(), Err(AppError::Detached));
    assert_eq!(controller.status(), Err(AppError::Detached));
}

#[tokio::test(start_paused = true)]
async fn test_owner_dropped_mid_attempt_is_cancelled() {
    let owner = Rc::new(RefCell::new(WalletSession::new()));
    let config = SessionConfig::default();
    let backend = MockWalletBackend::from_config(Rc::new(TokioTimer), &config);
    let controller = WalletController::new(Rc::downgrade(&owner), Rc::new(backend), Rc::new(TokioTimer), &config);

    let pending = controller.connect().unwrap();
    assert_eq!(controller.status(), Ok(WalletStatus::Connecting));
    drop(owner);

    let outcome = pending.finish().await;
    assert_eq!(outcome, ConnectOutcome::Cancelled);
    assert!(outcome.notice().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_owner_dropped_before_failure_is_cancelled() {
    let owner = Rc::new(RefCell::new(WalletSession::new()));
    let config = SessionConfig::default();
    let controller = WalletController::new(
        Rc::downgrade(&owner),
        Rc::new(RejectingBackend),
        Rc::new(TokioTimer),
        &config,
    );

    let pending = controller.connect().unwrap();
    drop(owner);

    assert_eq!(pending.finish().await, ConnectOutcome::Cancelled);
}
