//! Wallet state management
//!
//! The session lives in an `RwSignal` so every view re-renders on transitions.
//! A [`WalletController`] drives connect attempts against that signal.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use lib_core::error::{AppError, Result};
use lib_core::notify::Toast;
use lib_core::session::{
    MockWalletBackend, SessionStore, Timer, WalletController, WalletSession, WalletStatus,
};
use lib_core::SessionConfig;
use wasm_bindgen_futures::JsFuture;

use super::notifications::NotificationContext;

/// Browser timer backed by `setTimeout`.
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// [`SessionStore`] over a reactive signal. Detached once the owning scope is disposed.
#[derive(Clone, Copy)]
pub struct SignalSession(RwSignal<WalletSession>);

impl SessionStore for SignalSession {
    fn update<R>(&self, f: impl FnOnce(&mut WalletSession) -> R) -> Result<R> {
        self.0.try_update(f).ok_or(AppError::Detached)
    }

    fn read<R>(&self, f: impl FnOnce(&WalletSession) -> R) -> Result<R> {
        self.0.try_with_untracked(f).ok_or(AppError::Detached)
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<WalletSession>,
    controller: StoredValue<WalletController<SignalSession>, LocalStorage>,
    notifications: NotificationContext,
}

impl WalletContext {
    pub fn new(config: &SessionConfig, notifications: NotificationContext) -> Self {
        let session = RwSignal::new(WalletSession::new());
        let timer: Rc<dyn Timer> = Rc::new(GlooTimer);
        let backend = MockWalletBackend::from_config(Rc::clone(&timer), config);
        let controller = WalletController::new(SignalSession(session), Rc::new(backend), timer, config);

        Self {
            session,
            controller: StoredValue::new_local(controller),
            notifications,
        }
    }

    pub fn status(&self) -> WalletStatus {
        self.session.with(|s| s.status())
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|s| s.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.session.with(|s| s.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.session.with(|s| s.address().map(str::to_string))
    }

    /// Start connecting. The toast for the outcome is shown when the attempt ends.
    pub fn connect(&self) {
        let Some(started) = self.controller.try_with_value(|c| c.connect()) else {
            return;
        };

        let pending = match started {
            Ok(pending) => pending,
            Err(e) => {
                log::debug!("Connect ignored: {}", e);
                return;
            }
        };

        let notifications = self.notifications;
        leptos::task::spawn_local(async move {
            let outcome = pending.finish().await;
            log::info!("Wallet connect finished: {:?}", outcome);
            if let Some(toast) = outcome.notice() {
                notifications.push(toast);
            }
        });
    }

    pub fn disconnect(&self) {
        match self.controller.try_with_value(|c| c.disconnect()) {
            Some(Ok(())) => self.notifications.push(Toast::wallet_disconnected()),
            Some(Err(e)) => log::debug!("Disconnect ignored: {}", e),
            None => {}
        }
    }

    /// Abandon a pending connect, e.g. when the app unmounts.
    pub fn cancel(&self) {
        if let Some(Ok(true)) = self.controller.try_with_value(|c| c.cancel()) {
            log::info!("Pending wallet connection cancelled");
        }
    }

    /// Copy the connected address to the clipboard.
    pub fn copy_address(&self) {
        let Some(Ok(Some(address))) = self.controller.try_with_value(|c| c.address()) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let promise = window.navigator().clipboard().write_text(&address);
        let notifications = self.notifications;
        leptos::task::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => notifications.push(Toast::address_copied()),
                Err(e) => log::warn!("Clipboard write failed: {:?}", e),
            }
        });
    }
}

pub fn provide_wallet_context(config: &SessionConfig, notifications: NotificationContext) -> WalletContext {
    let context = WalletContext::new(config, notifications);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
