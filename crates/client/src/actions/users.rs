use api_types::user::{Credentials, UserUpdate, UserView};

use crate::{
    api::{ApiClient, ApiError},
    auth::Route,
    store::{AlertPayload, Event},
};

use super::{Effects, stored_token};

/// Logs in, persists the session token and navigates to `redirect`.
pub async fn login(
    api: &ApiClient,
    fx: &mut Effects<'_>,
    email: &str,
    password: &str,
    redirect: Route,
) {
    fx.store
        .dispatch_batch(vec![Event::LoginRequest, Event::ClearAlerts]);

    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    match api.login(&credentials).await {
        Ok(user) => {
            if let Some(token) = user.token.as_deref().filter(|token| !token.is_empty()) {
                if let Err(err) = fx.tokens.save(token) {
                    tracing::warn!("failed to persist session token: {err}");
                }
            }
            fx.store.dispatch_batch(login_success(user));
            fx.nav.push(redirect);
        }
        Err(err) => {
            tracing::error!("login failed: {err}");
            fx.store.dispatch_batch(login_failure(&err));
        }
    }
}

/// Refreshes the session slice from `GET /account`. No request phase and
/// no success alert: this fires on view mount, not on user submit.
pub async fn get_account(api: &ApiClient, fx: &mut Effects<'_>) {
    let token = stored_token(fx.tokens);
    match api.account(&token).await {
        Ok(user) => fx.store.dispatch(Event::GetAccountSuccess(user)),
        Err(err) => {
            tracing::error!("get account failed: {err}");
            fx.store.dispatch_batch(get_account_failure(&err));
        }
    }
}

pub async fn update_account(api: &ApiClient, fx: &mut Effects<'_>, update: UserUpdate) {
    fx.store
        .dispatch_batch(vec![Event::UpdateAccountRequest, Event::ClearAlerts]);

    let token = stored_token(fx.tokens);
    match api.update_account(&token, &update).await {
        Ok(user) => fx.store.dispatch_batch(update_account_success(user)),
        Err(err) => {
            tracing::error!("update account failed: {err}");
            fx.store.dispatch_batch(update_account_failure(&err));
        }
    }
}

fn login_success(user: UserView) -> Vec<Event> {
    vec![
        Event::LoginSuccess(user),
        Event::AddAlert(AlertPayload::success("Welcome!")),
    ]
}

fn login_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::LoginFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Username or password did not match.")),
    ]
}

fn get_account_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::GetAccountFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Unable to get account.")),
    ]
}

fn update_account_success(user: UserView) -> Vec<Event> {
    vec![
        Event::UpdateAccountSuccess(user),
        Event::AddAlert(AlertPayload::success("Account updated successfully!")),
    ]
}

fn update_account_failure(err: &ApiError) -> Vec<Event> {
    vec![
        Event::UpdateAccountFailure(err.to_string()),
        Event::AddAlert(AlertPayload::danger("Failed to update account.")),
    ]
}
