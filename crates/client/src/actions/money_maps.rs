use api_types::money_map::{MoneyMap, MoneyMapNew, MoneyMapUpdate};

use crate::{
    api::{ApiClient, ApiError},
    auth::Route,
    store::{AlertPayload, Event},
};

use super::{Effects, stored_token};

/// Fetches the user's money maps. No request phase and no success alert:
/// this fires on view mount, not on user submit.
pub async fn get_money_maps(api: &ApiClient, fx: &mut Effects<'_>) {
    let token = stored_token(fx.tokens);
    match api.money_maps(&token).await {
        Ok(maps) => fx.store.dispatch(Event::GetMoneyMapsSuccess(maps)),
        Err(err) => {
            tracing::error!("get money maps failed: {err}");
            fx.store.dispatch_batch(get_failure(&err));
        }
    }
}

/// Creates a money map, then navigates to `redirect` on success.
pub async fn create_money_map(
    api: &ApiClient,
    fx: &mut Effects<'_>,
    money_map: MoneyMapNew,
    redirect: Route,
) {
    fx.store
        .dispatch_batch(vec![Event::CreateMoneyMapRequest, Event::ClearAlerts]);

    let token = stored_token(fx.tokens);
    match api.create_money_map(&token, &money_map).await {
        Ok(created) => {
            fx.store.dispatch_batch(create_success(created));
            fx.nav.push(redirect);
        }
        Err(err) => {
            tracing::error!("create money map failed: {err}");
            fx.store.dispatch_batch(create_failure(&err));
        }
    }
}

/// Renames a money map, then navigates to `redirect` on success.
pub async fn update_money_map(
    api: &ApiClient,
    fx: &mut Effects<'_>,
    money_map: MoneyMapUpdate,
    redirect: Route,
) {
    fx.store
        .dispatch_batch(vec![Event::UpdateMoneyMapRequest, Event::ClearAlerts]);

    let token = stored_token(fx.tokens);
    match api.update_money_map(&token, &money_map).await {
        Ok(updated) => {
            fx.store.dispatch_batch(update_success(updated));
            fx.nav.push(redirect);
        }
        Err(err) => {
            tracing::error!("update money map failed: {err}");
            fx.store.dispatch_batch(update_failure(&err));
        }
    }
}

/// A view referenced a money map id that is not in the slice (stale
/// link, deleted map): alert and send the user somewhere sensible.
pub fn missing_money_map(fx: &mut Effects<'_>, redirect: Route) {
    fx.store.dispatch(Event::AddAlert(AlertPayload::danger(
        "Failed to find Money Map.",
    )));
    fx.nav.push(redirect);
}

fn get_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::GetMoneyMapsFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Unable to get money maps.")),
    ]
}

fn create_success(money_map: MoneyMap) -> Vec<Event> {
    vec![
        Event::CreateMoneyMapSuccess(money_map),
        Event::AddAlert(AlertPayload::success("Money Map created successfully!")),
    ]
}

fn create_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::CreateMoneyMapFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Failed to create Money Map.")),
    ]
}

fn update_success(money_map: MoneyMap) -> Vec<Event> {
    vec![
        Event::UpdateMoneyMapSuccess(money_map),
        Event::AddAlert(AlertPayload::success("Money Map updated successfully!")),
    ]
}

fn update_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::UpdateMoneyMapFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Failed to update Money Map.")),
    ]
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        actions::test_support::RecordingNavigator,
        store::{AlertStyle, Store},
        token_store::MemoryTokenStore,
    };

    fn sample_map() -> MoneyMap {
        MoneyMap {
            id: "m1".to_string(),
            name: "Groceries".to_string(),
            accounts: vec![],
        }
    }

    #[test]
    fn get_failure_batch_uses_the_fixed_message() {
        let mut store = Store::new();
        store.dispatch_batch(get_failure(&ApiError::Status(StatusCode::BAD_GATEWAY)));

        let alerts = store.state().alerts.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].style, AlertStyle::Danger);
        assert_eq!(alerts[0].message, "Unable to get money maps.");
    }

    #[test]
    fn create_success_batch_alerts_but_does_not_touch_the_slice() {
        let mut store = Store::new();
        store.dispatch_batch(create_success(sample_map()));

        // The list view refetches on navigation; the create response
        // does not patch the collection.
        assert!(store.state().money_maps.money_maps().is_empty());
        assert_eq!(
            store.state().alerts.alerts()[0].message,
            "Money Map created successfully!"
        );
    }

    #[test]
    fn update_success_resets_the_edit_flag() {
        let mut store = Store::new();
        store.dispatch(Event::EnableMoneyMapEdit);
        store.dispatch_batch(update_success(sample_map()));

        assert!(!store.state().forms.money_map_edit_enabled);
        assert_eq!(
            store.state().alerts.alerts()[0].message,
            "Money Map updated successfully!"
        );
    }

    #[test]
    fn missing_money_map_alerts_and_redirects() {
        let mut store = Store::new();
        let tokens = MemoryTokenStore::new();
        let mut nav = RecordingNavigator::default();
        let mut fx = Effects {
            store: &mut store,
            tokens: &tokens,
            nav: &mut nav,
        };

        missing_money_map(&mut fx, Route::MoneyMaps);

        assert_eq!(nav.routes, vec![Route::MoneyMaps]);
        assert_eq!(
            store.state().alerts.alerts()[0].message,
            "Failed to find Money Map."
        );
    }

    #[tokio::test]
    async fn transport_failure_funnels_into_the_create_alert() {
        let api = ApiClient::new("http://127.0.0.1:9/").unwrap();
        let mut store = Store::new();
        let tokens = MemoryTokenStore::with_token("T");
        let mut nav = RecordingNavigator::default();
        let mut fx = Effects {
            store: &mut store,
            tokens: &tokens,
            nav: &mut nav,
        };

        create_money_map(
            &api,
            &mut fx,
            MoneyMapNew {
                name: "Groceries".to_string(),
            },
            Route::MoneyMaps,
        )
        .await;

        assert!(nav.routes.is_empty());
        assert_eq!(
            store.state().alerts.alerts()[0].message,
            "Failed to create Money Map."
        );
    }
}
