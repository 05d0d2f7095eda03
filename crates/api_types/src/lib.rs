use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Business-level status carried by every API response body.
pub const STATUS_SUCCESS: &str = "success";

/// Response envelope used by every Money Map endpoint.
///
/// A response is a business success iff `status` equals
/// [`STATUS_SUCCESS`] and `data` is present; on failure the server still
/// answers HTTP 200 with a non-success `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

pub mod user {
    use super::*;

    /// Request body for `POST /account/login`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Credentials {
        pub email: String,
        pub password: String,
    }

    /// User payload returned by login, get-account and update-account.
    ///
    /// Everything but the id is optional: the server omits fields it did
    /// not touch, and a profile update answers with only the changed ones.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UserView {
        pub id: String,
        pub email: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub token: Option<String>,
    }

    /// Request body for `PATCH /account`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct UserUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
    }
}

pub mod money_map {
    use super::*;

    /// A named grouping of financial accounts, as sent by the server.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct MoneyMap {
        pub id: String,
        pub name: String,
        #[serde(default)]
        pub accounts: Vec<Account>,
    }

    /// A single financial account belonging to one money map.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Account {
        pub id: String,
        pub name: String,
        pub account_type: Option<String>,
        /// Set by the server at creation; RFC2822 on the wire.
        #[serde(default, with = "rfc2822_opt")]
        pub created: Option<DateTime<FixedOffset>>,
        /// Reserved: the API does not populate balances yet.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub balance: Option<i64>,
    }

    mod rfc2822_opt {
        use chrono::{DateTime, FixedOffset};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(
            value: &Option<DateTime<FixedOffset>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(datetime) => serializer.serialize_some(&datetime.to_rfc2822()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(
            deserializer: D,
        ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            raw.map(|value| {
                DateTime::parse_from_rfc2822(&value).map_err(serde::de::Error::custom)
            })
            .transpose()
        }
    }

    /// Request body for `POST /money_maps`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MoneyMapNew {
        pub name: String,
    }

    /// Request body for `PATCH /money_maps`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MoneyMapUpdate {
        pub id: String,
        pub name: String,
    }
}

#[cfg(test)]
mod tests {
    use super::money_map::Account;

    #[test]
    fn account_created_parses_the_server_wire_format() {
        let body = r#"{"id":"a1","name":"Checking","account_type":"savings","created":"Tue, 1 Jul 2003 10:52:37 +0200"}"#;
        let account: Account = serde_json::from_str(body).unwrap();
        let created = account.created.unwrap();
        assert_eq!(created.timestamp(), 1057049557);
    }

    #[test]
    fn account_created_is_optional() {
        let body = r#"{"id":"a1","name":"Checking","account_type":null,"created":null}"#;
        let account: Account = serde_json::from_str(body).unwrap();
        assert_eq!(account.created, None);
    }
}
