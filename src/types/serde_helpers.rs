//! Custom serde helpers for Salt Edge's serialization formats.

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::Date;
use time::macros::format_description;

/// Serialize/deserialize a `time::Date` as a plain `YYYY-MM-DD` string.
///
/// Salt Edge takes consent dates (`from_date`, `to_date`) without a time part.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use time::macros::date;
/// use saltedge_client::types::serde_helpers::date_only;
///
/// #[derive(Serialize, Deserialize, Debug, PartialEq)]
/// struct Consent {
///     #[serde(with = "date_only")]
///     from_date: time::Date,
/// }
///
/// let consent = Consent { from_date: date!(2020 - 01 - 31) };
/// let json = serde_json::to_string(&consent).unwrap();
/// assert_eq!(json, r#"{"from_date":"2020-01-31"}"#);
/// assert_eq!(serde_json::from_str::<Consent>(&json).unwrap(), consent);
/// ```
pub mod date_only {
    use super::*;

    /// Serialize a date as `YYYY-MM-DD`.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(ser::Error::custom)?;
        serializer.serialize_str(&s)
    }

    /// Deserialize a `YYYY-MM-DD` string into a date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, format_description!("[year]-[month]-[day]")).map_err(de::Error::custom)
    }
}
