//! Client-side route guarding.
//!
//! The guard only checks that a session token exists in the durable
//! store; a token the backend has since rejected falls through to the
//! generic application failure of whatever call is made next.

use crate::{
    store::{AlertPayload, Event, Store},
    token_store::TokenStore,
};

/// Every view the front end can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    MoneyMaps,
    MoneyMap(String),
    AddMoneyMap,
    Account,
}

impl Route {
    /// Everything but the login view requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    /// The originally requested route rides along for an optional
    /// post-login return.
    RedirectToLogin { from: Route },
}

/// Consulted on every navigation attempt.
///
/// Reads the durable token store rather than the in-memory session
/// slice: a restarted process has an empty slice but may still hold a
/// valid persisted session.
pub fn authorize(route: Route, tokens: &dyn TokenStore, store: &mut Store) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Allow;
    }

    let token = match tokens.load() {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("failed to read stored session token: {err}");
            None
        }
    };

    match token {
        Some(token) if !token.is_empty() => RouteDecision::Allow,
        _ => {
            store.dispatch(Event::AddAlert(AlertPayload::danger(
                "Sorry, you must log in to do that.",
            )));
            RouteDecision::RedirectToLogin { from: route }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::AlertStyle,
        token_store::{MemoryTokenStore, TokenStore},
    };

    #[test]
    fn missing_session_redirects_with_exactly_one_danger_alert() {
        let tokens = MemoryTokenStore::new();
        let mut store = Store::new();

        let decision = authorize(Route::MoneyMaps, &tokens, &mut store);

        assert_eq!(
            decision,
            RouteDecision::RedirectToLogin {
                from: Route::MoneyMaps
            }
        );
        let alerts = store.state().alerts.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].style, AlertStyle::Danger);
        assert_eq!(alerts[0].message, "Sorry, you must log in to do that.");
    }

    #[test]
    fn stored_session_allows_protected_routes() {
        let tokens = MemoryTokenStore::with_token("T");
        let mut store = Store::new();

        let decision = authorize(Route::MoneyMap("m1".to_string()), &tokens, &mut store);

        assert_eq!(decision, RouteDecision::Allow);
        assert!(store.state().alerts.alerts().is_empty());
    }

    #[test]
    fn login_is_never_guarded() {
        let tokens = MemoryTokenStore::new();
        let mut store = Store::new();
        assert_eq!(
            authorize(Route::Login, &tokens, &mut store),
            RouteDecision::Allow
        );
        assert!(store.state().alerts.alerts().is_empty());
    }

    #[test]
    fn cleared_session_is_treated_as_absent() {
        let tokens = MemoryTokenStore::with_token("T");
        tokens.clear().unwrap();
        let mut store = Store::new();
        assert!(matches!(
            authorize(Route::Account, &tokens, &mut store),
            RouteDecision::RedirectToLogin { .. }
        ));
    }
}
