use super::Event;

/// Stable alert identifier, assigned by the reducer at creation time and
/// strictly increasing for the lifetime of the store. Removal and
/// rendering key off this id, never off the alert's position, so
/// dismissing one alert can never invalidate another's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlertId(u64);

/// The fixed set of alert styles the views know how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStyle {
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
    Secondary,
}

impl AlertStyle {
    /// The CSS-style class name carried on the wire by the original web
    /// views; kept as the canonical label for logs and themes.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
            Self::Light => "alert-light",
            Self::Dark => "alert-dark",
            Self::Secondary => "alert-secondary",
        }
    }
}

/// What an action attaches to [`Event::AddAlert`]; the reducer turns it
/// into an [`Alert`] by assigning the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPayload {
    pub style: AlertStyle,
    pub message: String,
}

impl AlertPayload {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            style: AlertStyle::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            style: AlertStyle::Danger,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub style: AlertStyle,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertsState {
    alerts: Vec<Alert>,
    next_id: u64,
}

impl AlertsState {
    /// Alerts in insertion order.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub(super) fn reduce(&mut self, event: &Event) {
        match event {
            Event::AddAlert(payload) => {
                let id = AlertId(self.next_id);
                self.next_id += 1;
                self.alerts.push(Alert {
                    id,
                    style: payload.style,
                    message: payload.message.clone(),
                });
            }
            // Clearing does not reset the counter: ids stay unique for
            // the whole session.
            Event::ClearAlerts => self.alerts.clear(),
            Event::RemoveAlert(id) => self.alerts.retain(|alert| alert.id != *id),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &mut AlertsState, message: &str) {
        state.reduce(&Event::AddAlert(AlertPayload::success(message)));
    }

    #[test]
    fn length_tracks_adds_and_removes_in_event_order() {
        let mut state = AlertsState::default();
        add(&mut state, "a");
        add(&mut state, "b");
        add(&mut state, "c");
        assert_eq!(state.alerts().len(), 3);

        let second = state.alerts()[1].id;
        state.reduce(&Event::RemoveAlert(second));
        assert_eq!(state.alerts().len(), 2);

        state.reduce(&Event::ClearAlerts);
        assert!(state.alerts().is_empty());
    }

    #[test]
    fn removing_a_middle_alert_shifts_only_later_ones() {
        let mut state = AlertsState::default();
        add(&mut state, "first");
        add(&mut state, "second");
        add(&mut state, "third");

        let before: Vec<Alert> = state.alerts().to_vec();
        state.reduce(&Event::RemoveAlert(before[1].id));

        assert_eq!(state.alerts()[0], before[0]);
        assert_eq!(state.alerts()[1], before[2]);
    }

    #[test]
    fn clear_always_empties_regardless_of_contents() {
        let mut state = AlertsState::default();
        state.reduce(&Event::ClearAlerts);
        assert!(state.alerts().is_empty());

        add(&mut state, "a");
        add(&mut state, "b");
        state.reduce(&Event::ClearAlerts);
        assert!(state.alerts().is_empty());
    }

    #[test]
    fn ids_stay_unique_and_increasing_across_clears() {
        let mut state = AlertsState::default();
        add(&mut state, "a");
        let first = state.alerts()[0].id;
        state.reduce(&Event::ClearAlerts);
        add(&mut state, "b");
        let second = state.alerts()[0].id;
        assert!(second > first);
    }

    #[test]
    fn removing_a_stale_id_is_a_no_op() {
        let mut state = AlertsState::default();
        add(&mut state, "a");
        add(&mut state, "b");
        let stale = state.alerts()[0].id;
        state.reduce(&Event::RemoveAlert(stale));
        let survivor = state.alerts().to_vec();

        // A second dismissal of the same alert must not touch anything.
        state.reduce(&Event::RemoveAlert(stale));
        assert_eq!(state.alerts(), survivor.as_slice());
    }

    #[test]
    fn unrecognised_events_leave_the_slice_untouched() {
        let mut state = AlertsState::default();
        add(&mut state, "a");
        let before = state.clone();
        state.reduce(&Event::LoginRequest);
        state.reduce(&Event::EnableAccountEdit);
        assert_eq!(state, before);
    }
}
