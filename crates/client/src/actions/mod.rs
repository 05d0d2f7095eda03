//! Async action creators.
//!
//! Each business action follows the same three-phase protocol: dispatch
//! the request batch (which clears any displayed alerts), await the API
//! call, then dispatch either the success batch (payload + alert, plus
//! optional navigation and token persistence) or the failure batch
//! (error detail + a fixed user-facing alert). Every failure is absorbed
//! here and converted into an alert; nothing propagates past this
//! boundary. The per-phase batches are pure functions so the protocol is
//! testable without a server.

mod accounts;
mod money_maps;
mod users;

pub use accounts::get_accounts;
pub use money_maps::{create_money_map, get_money_maps, missing_money_map, update_money_map};
pub use users::{get_account, login, update_account};

use crate::{auth::Route, store::Store, token_store::TokenStore};

/// Navigation side-effect handle; the front end decides what "pushing a
/// route" means (switching screens, updating a URL, ...).
pub trait Navigator {
    fn push(&mut self, route: Route);
}

/// The effect handles an action creator may touch, passed explicitly
/// instead of living as ambient store middleware.
pub struct Effects<'a> {
    pub store: &'a mut Store,
    pub tokens: &'a dyn TokenStore,
    pub nav: &'a mut dyn Navigator,
}

/// The bearer token attached to authenticated calls, sourced from the
/// durable store. An unreadable or absent token degrades to an empty
/// one; the request then fails application-side and surfaces as the
/// action's failure alert.
fn stored_token(tokens: &dyn TokenStore) -> String {
    match tokens.load() {
        Ok(token) => token.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("failed to read stored session token: {err}");
            String::new()
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records pushed routes for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub routes: Vec<Route>,
    }

    impl Navigator for RecordingNavigator {
        fn push(&mut self, route: Route) {
            self.routes.push(route);
        }
    }
}
