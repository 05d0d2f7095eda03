use super::Event;

/// Per-form "edit enabled" flags.
///
/// A form becomes editable only through its explicit enable event and
/// drops back to read-only when the matching update succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormsState {
    pub account_edit_enabled: bool,
    pub money_map_edit_enabled: bool,
}

impl FormsState {
    pub(super) fn reduce(&mut self, event: &Event) {
        match event {
            Event::EnableAccountEdit => self.account_edit_enabled = true,
            Event::UpdateAccountSuccess(_) => self.account_edit_enabled = false,
            Event::EnableMoneyMapEdit => self.money_map_edit_enabled = true,
            Event::UpdateMoneyMapSuccess(_) => self.money_map_edit_enabled = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use api_types::user::UserView;

    use super::*;

    #[test]
    fn enable_then_update_success_round_trips() {
        let mut state = FormsState::default();
        state.reduce(&Event::EnableAccountEdit);
        assert!(state.account_edit_enabled);

        state.reduce(&Event::UpdateAccountSuccess(UserView {
            id: "1".to_string(),
            email: None,
            first_name: None,
            last_name: None,
            token: None,
        }));
        assert!(!state.account_edit_enabled);
    }

    #[test]
    fn the_two_flags_are_independent() {
        let mut state = FormsState::default();
        state.reduce(&Event::EnableMoneyMapEdit);
        assert!(state.money_map_edit_enabled);
        assert!(!state.account_edit_enabled);
    }

    #[test]
    fn unrecognised_events_leave_the_slice_untouched() {
        let mut state = FormsState::default();
        state.reduce(&Event::EnableAccountEdit);
        let before = state;
        state.reduce(&Event::ClearAlerts);
        state.reduce(&Event::LoginRequest);
        assert_eq!(state, before);
    }
}
