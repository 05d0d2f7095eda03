//! The state container and its slices.
//!
//! State is partitioned into four slices, each owned by exactly one
//! reducer. A reducer only reacts to the events it recognises and leaves
//! its slice untouched otherwise. The [`Store`] applies every dispatched
//! event to every reducer synchronously, then notifies subscribers; a
//! batch applies all of its events before the single notification, so
//! subscribers never observe a half-applied update.

mod alerts;
mod forms;
mod money_maps;
mod session;

pub use alerts::{Alert, AlertId, AlertPayload, AlertStyle, AlertsState};
pub use forms::FormsState;
pub use money_maps::{MoneyMapEntry, MoneyMapsState};
pub use session::SessionState;

use api_types::{money_map::MoneyMap, user::UserView};

/// Every event the reducers recognise.
///
/// Request-lifecycle events come in request/success/failure triples;
/// failure events carry the error detail for logging while the
/// user-facing message travels in the batched [`Event::AddAlert`].
#[derive(Debug, Clone)]
pub enum Event {
    LoginRequest,
    LoginSuccess(UserView),
    LoginFailure(String),
    GetAccountSuccess(UserView),
    GetAccountFailure(String),
    UpdateAccountRequest,
    UpdateAccountSuccess(UserView),
    UpdateAccountFailure(String),
    GetMoneyMapsSuccess(Vec<MoneyMap>),
    GetMoneyMapsFailure(String),
    CreateMoneyMapRequest,
    CreateMoneyMapSuccess(MoneyMap),
    CreateMoneyMapFailure(String),
    UpdateMoneyMapRequest,
    UpdateMoneyMapSuccess(MoneyMap),
    UpdateMoneyMapFailure(String),
    GetAccountsSuccess(Vec<MoneyMap>),
    GetAccountsFailure(String),
    AddAlert(AlertPayload),
    ClearAlerts,
    RemoveAlert(AlertId),
    EnableAccountEdit,
    EnableMoneyMapEdit,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    pub money_maps: MoneyMapsState,
    pub alerts: AlertsState,
    pub forms: FormsState,
}

type Subscriber = Box<dyn FnMut(&AppState)>;

/// Single process-wide state container.
///
/// Dispatch is synchronous and runs to completion, subscribers included,
/// before the caller regains control; the UI event loop is the only
/// thread that ever touches it.
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn dispatch(&mut self, event: Event) {
        self.apply(&event);
        self.notify();
    }

    /// Applies a group of events as one update; subscribers see only the
    /// final state.
    pub fn dispatch_batch(&mut self, events: Vec<Event>) {
        for event in &events {
            self.apply(event);
        }
        self.notify();
    }

    fn apply(&mut self, event: &Event) {
        self.state.session.reduce(event);
        self.state.money_maps.reduce(event);
        self.state.alerts.reduce(event);
        self.state.forms.reduce(event);
    }

    fn notify(&mut self) {
        let state = &self.state;
        for subscriber in &mut self.subscribers {
            subscriber(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn batch_notifies_subscribers_once() {
        let mut store = Store::new();
        let observed: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        store.subscribe(move |state| {
            sink.borrow_mut().push(state.alerts.alerts().len());
        });

        store.dispatch_batch(vec![
            Event::AddAlert(AlertPayload::success("one")),
            Event::AddAlert(AlertPayload::success("two")),
        ]);

        // One notification, carrying the fully applied state.
        assert_eq!(*observed.borrow(), vec![2]);
    }

    #[test]
    fn dispatch_notifies_after_every_event() {
        let mut store = Store::new();
        let observed: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        store.subscribe(move |state| {
            sink.borrow_mut().push(state.alerts.alerts().len());
        });

        store.dispatch(Event::AddAlert(AlertPayload::success("one")));
        store.dispatch(Event::ClearAlerts);

        assert_eq!(*observed.borrow(), vec![1, 0]);
    }
}
