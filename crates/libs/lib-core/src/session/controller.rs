//! Drives a connection attempt from `Connecting` to its outcome.
//!
//! [`WalletController::connect`] flips the session to `Connecting` right away and
//! hands back a [`PendingConnect`]. Awaiting [`PendingConnect::finish`] runs the
//! backend call raced against the connect timeout. The call is registered with an
//! abort handle, so [`WalletController::cancel`] (or unmounting the view) stops
//! it and no late transition reaches the session.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use futures::future::{select, AbortHandle, AbortRegistration, Abortable, Either};
use futures::pin_mut;

use super::backend::{Timer, WalletBackend};
use super::{ConnectTicket, WalletSession, WalletStatus};
use crate::config::SessionConfig;
use crate::error::{AppError, Result};
use crate::notify::Toast;

/// Mutable access to a [`WalletSession`] owned elsewhere.
///
/// Fails with [`AppError::Detached`] once the owner is gone.
pub trait SessionStore {
    fn update<R>(&self, f: impl FnOnce(&mut WalletSession) -> R) -> Result<R>;

    fn read<R>(&self, f: impl FnOnce(&WalletSession) -> R) -> Result<R>;
}

impl SessionStore for Rc<RefCell<WalletSession>> {
    fn update<R>(&self, f: impl FnOnce(&mut WalletSession) -> R) -> Result<R> {
        Ok(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&WalletSession) -> R) -> Result<R> {
        Ok(f(&self.borrow()))
    }
}

impl SessionStore for Weak<RefCell<WalletSession>> {
    fn update<R>(&self, f: impl FnOnce(&mut WalletSession) -> R) -> Result<R> {
        let session = self.upgrade().ok_or(AppError::Detached)?;
        let mut session = session.borrow_mut();
        Ok(f(&mut session))
    }

    fn read<R>(&self, f: impl FnOnce(&WalletSession) -> R) -> Result<R> {
        let session = self.upgrade().ok_or(AppError::Detached)?;
        let session = session.borrow();
        Ok(f(&session))
    }
}

/// How a connection attempt ended.
///
/// An attempt whose session owner went away mid-flight ends `Cancelled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected(String),
    Failed(AppError),
    /// Aborted, or superseded before the backend answered.
    Cancelled,
}

impl ConnectOutcome {
    /// Toast to show for this outcome, if any.
    pub fn notice(&self) -> Option<Toast> {
        match self {
            ConnectOutcome::Connected(_) => Some(Toast::success("Wallet connected")),
            ConnectOutcome::Failed(err) => Some(Toast::destructive(err.user_message())),
            ConnectOutcome::Cancelled => None,
        }
    }
}

type InFlight = Rc<RefCell<Option<(ConnectTicket, AbortHandle)>>>;

/// Owns the wallet workflow for one session store.
pub struct WalletController<S> {
    store: S,
    backend: Rc<dyn WalletBackend>,
    timer: Rc<dyn Timer>,
    timeout: Duration,
    in_flight: InFlight,
}

impl<S: Clone> Clone for WalletController<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            backend: Rc::clone(&self.backend),
            timer: Rc::clone(&self.timer),
            timeout: self.timeout,
            in_flight: Rc::clone(&self.in_flight),
        }
    }
}

impl<S> WalletController<S>
where
    S: SessionStore + Clone,
{
    pub fn new(
        store: S,
        backend: Rc<dyn WalletBackend>,
        timer: Rc<dyn Timer>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            store,
            backend,
            timer,
            timeout: config.connect_timeout,
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    pub fn status(&self) -> Result<WalletStatus> {
        self.store.read(WalletSession::status)
    }

    /// Connected address, `None` unless `Connected`.
    pub fn address(&self) -> Result<Option<String>> {
        self.store.read(|session| session.address().map(str::to_string))
    }

    /// Start a connection attempt.
    ///
    /// The session is `Connecting` when this returns. Fails without side effects
    /// unless the session is `Disconnected`.
    pub fn connect(&self) -> Result<PendingConnect<S>> {
        let ticket = self.store.update(WalletSession::begin_connect)??;
        let (handle, registration) = AbortHandle::new_pair();

        if let Some((_, stale)) = self.in_flight.borrow_mut().replace((ticket, handle)) {
            stale.abort();
        }

        Ok(PendingConnect {
            ticket,
            registration,
            store: self.store.clone(),
            backend: Rc::clone(&self.backend),
            timer: Rc::clone(&self.timer),
            timeout: self.timeout,
            in_flight: Rc::clone(&self.in_flight),
        })
    }

    /// Abort the attempt in flight and return to `Disconnected`.
    ///
    /// Returns whether an attempt was cancelled.
    pub fn cancel(&self) -> Result<bool> {
        if let Some((_, handle)) = self.in_flight.borrow_mut().take() {
            handle.abort();
        }
        self.store.update(WalletSession::cancel_connect)
    }

    pub fn disconnect(&self) -> Result<()> {
        self.store.update(WalletSession::disconnect)?
    }
}

/// A started connection attempt awaiting its backend call.
#[must_use = "the session stays Connecting until the attempt is finished or cancelled"]
pub struct PendingConnect<S> {
    ticket: ConnectTicket,
    registration: AbortRegistration,
    store: S,
    backend: Rc<dyn WalletBackend>,
    timer: Rc<dyn Timer>,
    timeout: Duration,
    in_flight: InFlight,
}

impl<S: SessionStore> PendingConnect<S> {
    pub fn ticket(&self) -> ConnectTicket {
        self.ticket
    }

    /// Run the backend call to completion and apply the result to the session.
    pub async fn finish(self) -> ConnectOutcome {
        let PendingConnect {
            ticket,
            registration,
            store,
            backend,
            timer,
            timeout,
            in_flight,
        } = self;

        let call = async {
            let request = backend.request_account();
            let deadline = timer.sleep(timeout);
            pin_mut!(request, deadline);

            match select(request, deadline).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(AppError::Timeout(timeout)),
            }
        };

        let result = Abortable::new(call, registration).await;

        {
            let mut slot = in_flight.borrow_mut();
            if matches!(*slot, Some((current, _)) if current == ticket) {
                *slot = None;
            }
        }

        let Ok(result) = result else {
            return ConnectOutcome::Cancelled;
        };

        match result {
            Ok(address) => {
                match store.update(|session| session.complete_connect(ticket, address.clone())) {
                    Ok(Ok(())) => ConnectOutcome::Connected(address),
                    Ok(Err(_)) | Err(AppError::Detached) => ConnectOutcome::Cancelled,
                    Err(err) => ConnectOutcome::Failed(err),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "wallet connection attempt failed");
                match store.update(|session| session.fail_connect(ticket)) {
                    Ok(Ok(())) => ConnectOutcome::Failed(err),
                    Ok(Err(_)) | Err(AppError::Detached) => ConnectOutcome::Cancelled,
                    Err(other) => ConnectOutcome::Failed(other),
                }
            }
        }
    }
}
