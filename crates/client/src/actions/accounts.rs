use crate::{
    api::{ApiClient, ApiError},
    store::{AlertPayload, Event},
};

use super::{Effects, stored_token};

/// Fetches the accounts for the money map views.
///
/// The backend has no per-map account endpoint; the payload is the full
/// money map listing and the detail view selects its map out of the
/// normalized slice.
pub async fn get_accounts(api: &ApiClient, fx: &mut Effects<'_>) {
    let token = stored_token(fx.tokens);
    match api.money_maps(&token).await {
        Ok(maps) => fx.store.dispatch(Event::GetAccountsSuccess(maps)),
        Err(err) => {
            tracing::error!("get accounts failed: {err}");
            fx.store.dispatch_batch(failure(&err));
        }
    }
}

fn failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::GetAccountsFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Unable to get accounts.")),
    ]
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::store::{AlertStyle, Store};

    #[test]
    fn failure_batch_uses_the_fixed_message() {
        let mut store = Store::new();
        store.dispatch_batch(failure(&ApiError::Status(StatusCode::NOT_FOUND)));

        let alerts = store.state().alerts.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].style, AlertStyle::Danger);
        assert_eq!(alerts[0].message, "Unable to get accounts.");
    }
}
