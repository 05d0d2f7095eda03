use api_types::money_map::{Account, MoneyMap};
use indexmap::IndexMap;

use super::Event;

/// A money map with its accounts re-keyed by account id.
#[derive(Debug, Clone, PartialEq)]
pub struct MoneyMapEntry {
    pub id: String,
    pub name: String,
    pub accounts: IndexMap<String, Account>,
}

/// Money maps keyed by id.
///
/// The list-fetch success replaces the whole collection with the
/// two-level re-keyed form; iteration order is the insertion order of
/// the normalization pass, not whatever the server sent positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneyMapsState {
    money_maps: IndexMap<String, MoneyMapEntry>,
}

impl MoneyMapsState {
    pub fn money_maps(&self) -> &IndexMap<String, MoneyMapEntry> {
        &self.money_maps
    }

    pub fn get(&self, id: &str) -> Option<&MoneyMapEntry> {
        self.money_maps.get(id)
    }

    pub(super) fn reduce(&mut self, event: &Event) {
        match event {
            // The account fetch hits the same endpoint and carries the
            // same payload, so both replace the collection.
            Event::GetMoneyMapsSuccess(maps) | Event::GetAccountsSuccess(maps) => {
                self.money_maps = normalize(maps);
            }
            _ => {}
        }
    }
}

fn normalize(maps: &[MoneyMap]) -> IndexMap<String, MoneyMapEntry> {
    maps.iter()
        .map(|map| {
            let accounts = map
                .accounts
                .iter()
                .map(|account| (account.id.clone(), account.clone()))
                .collect();
            (
                map.id.clone(),
                MoneyMapEntry {
                    id: map.id.clone(),
                    name: map.name.clone(),
                    accounts,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, name: &str) -> Account {
        Account {
            id: id.to_string(),
            name: name.to_string(),
            account_type: Some("checking".to_string()),
            created: None,
            balance: None,
        }
    }

    fn money_map(id: &str, name: &str, accounts: Vec<Account>) -> MoneyMap {
        MoneyMap {
            id: id.to_string(),
            name: name.to_string(),
            accounts,
        }
    }

    #[test]
    fn fetch_success_re_keys_both_levels() {
        let mut state = MoneyMapsState::default();
        state.reduce(&Event::GetMoneyMapsSuccess(vec![money_map(
            "m1",
            "Groceries",
            vec![account("a1", "Checking")],
        )]));

        let entry = state.get("m1").unwrap();
        assert_eq!(entry.name, "Groceries");
        assert_eq!(entry.accounts.get("a1").unwrap().name, "Checking");
    }

    #[test]
    fn fetch_success_replaces_the_whole_collection() {
        let mut state = MoneyMapsState::default();
        state.reduce(&Event::GetMoneyMapsSuccess(vec![money_map(
            "m1",
            "Old",
            vec![],
        )]));
        state.reduce(&Event::GetAccountsSuccess(vec![money_map(
            "m2",
            "New",
            vec![],
        )]));

        assert!(state.get("m1").is_none());
        assert_eq!(state.get("m2").unwrap().name, "New");
    }

    #[test]
    fn iteration_order_is_normalization_order() {
        let mut state = MoneyMapsState::default();
        state.reduce(&Event::GetMoneyMapsSuccess(vec![
            money_map("m2", "Second", vec![]),
            money_map("m1", "First", vec![]),
        ]));

        let ids: Vec<&str> = state.money_maps().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn duplicate_account_ids_keep_the_last_occurrence() {
        let mut state = MoneyMapsState::default();
        state.reduce(&Event::GetMoneyMapsSuccess(vec![money_map(
            "m1",
            "Groceries",
            vec![account("a1", "Stale"), account("a1", "Fresh")],
        )]));

        let entry = state.get("m1").unwrap();
        assert_eq!(entry.accounts.len(), 1);
        assert_eq!(entry.accounts.get("a1").unwrap().name, "Fresh");
    }

    #[test]
    fn unrecognised_events_leave_the_slice_untouched() {
        let mut state = MoneyMapsState::default();
        state.reduce(&Event::GetMoneyMapsSuccess(vec![money_map(
            "m1",
            "Groceries",
            vec![],
        )]));
        let before = state.clone();
        state.reduce(&Event::CreateMoneyMapRequest);
        state.reduce(&Event::GetMoneyMapsFailure("boom".to_string()));
        assert_eq!(state, before);
    }
}
