use api_types::user::UserView;

use super::Event;

/// The authenticated user's identity.
///
/// The bearer token is mirrored into the durable token store by the
/// login action; this slice only holds the in-memory copy for display
/// and is lost on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub token: String,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub(super) fn reduce(&mut self, event: &Event) {
        match event {
            Event::LoginSuccess(user)
            | Event::GetAccountSuccess(user)
            | Event::UpdateAccountSuccess(user) => self.merge(user),
            _ => {}
        }
    }

    /// Display fields survive partial payloads; id and token are
    /// authoritative on every session-establishing response.
    fn merge(&mut self, user: &UserView) {
        self.id = user.id.clone();
        if let Some(email) = user.email.as_deref().filter(|value| !value.is_empty()) {
            self.email = email.to_string();
        }
        if let Some(first_name) = user.first_name.as_deref().filter(|value| !value.is_empty()) {
            self.first_name = first_name.to_string();
        }
        if let Some(last_name) = user.last_name.as_deref().filter(|value| !value.is_empty()) {
            self.last_name = last_name.to_string();
        }
        self.token = user.token.clone().unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_payload() -> UserView {
        UserView {
            id: "1".to_string(),
            email: Some("a@b.com".to_string()),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            token: Some("T".to_string()),
        }
    }

    #[test]
    fn login_success_populates_every_field() {
        let mut state = SessionState::default();
        state.reduce(&Event::LoginSuccess(login_payload()));

        assert_eq!(state.id, "1");
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.first_name, "A");
        assert_eq!(state.last_name, "B");
        assert_eq!(state.token, "T");
        assert!(state.is_authenticated());
    }

    #[test]
    fn partial_update_never_blanks_display_fields() {
        let mut state = SessionState::default();
        state.reduce(&Event::LoginSuccess(login_payload()));

        state.reduce(&Event::UpdateAccountSuccess(UserView {
            id: "1".to_string(),
            email: None,
            first_name: Some("Alice".to_string()),
            last_name: None,
            token: Some("T".to_string()),
        }));

        assert_eq!(state.first_name, "Alice");
        assert_eq!(state.email, "a@b.com");
        assert_eq!(state.last_name, "B");
    }

    #[test]
    fn id_and_token_are_always_overwritten() {
        let mut state = SessionState::default();
        state.reduce(&Event::LoginSuccess(login_payload()));

        state.reduce(&Event::GetAccountSuccess(UserView {
            id: "2".to_string(),
            email: None,
            first_name: None,
            last_name: None,
            token: None,
        }));

        assert_eq!(state.id, "2");
        assert_eq!(state.token, "");
    }

    #[test]
    fn unrecognised_events_leave_the_slice_untouched() {
        let mut state = SessionState::default();
        state.reduce(&Event::LoginSuccess(login_payload()));
        let before = state.clone();
        state.reduce(&Event::ClearAlerts);
        state.reduce(&Event::LoginFailure("nope".to_string()));
        assert_eq!(state, before);
    }
}
