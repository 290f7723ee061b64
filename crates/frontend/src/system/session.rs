use leptos::prelude::*;
use web_sys::window;

const SESSION_KEY: &str = "s-eye.session";

/// Demo authentication: a single boolean persisted in localStorage. There is
/// no backend, so any submitted credentials are accepted after a short delay
/// to feel like a network round trip.
#[derive(Clone, Copy)]
pub struct SessionService {
    pub signed_in: RwSignal<bool>,
}

impl SessionService {
    pub fn new() -> Self {
        let signed_in = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten())
            .map(|value| value == "1")
            .unwrap_or(false);
        Self {
            signed_in: RwSignal::new(signed_in),
        }
    }

    pub fn sign_in(&self) {
        self.signed_in.set(true);
        persist("1");
    }

    pub fn sign_out(&self) {
        self.signed_in.set(false);
        persist("0");
    }
}

fn persist(value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(SESSION_KEY, value).is_err() {
            log::warn!("failed to persist session flag");
        }
    }
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionService not found in context")
}
