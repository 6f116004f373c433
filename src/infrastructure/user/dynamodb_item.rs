//! Conversion between users and DynamoDB items

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, NaiveDateTime, Utc};

use crate::domain::user::{User, UserFactory};
use crate::domain::DomainError;

pub type Item = HashMap<String, AttributeValue>;

pub const ATTR_ID: &str = "id";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_NAME: &str = "name";
pub const ATTR_IS_ACTIVE: &str = "is_active";
pub const ATTR_CREATED_AT: &str = "created_at";
pub const ATTR_UPDATED_AT: &str = "updated_at";

/// Encode a user as a full table item
pub fn user_to_item(user: &User) -> Item {
    HashMap::from([
        (ATTR_ID.to_string(), AttributeValue::S(user.id().to_string())),
        (ATTR_EMAIL.to_string(), AttributeValue::S(user.email().to_string())),
        (ATTR_NAME.to_string(), AttributeValue::S(user.name().to_string())),
        (ATTR_IS_ACTIVE.to_string(), AttributeValue::Bool(user.is_active())),
        (
            ATTR_CREATED_AT.to_string(),
            AttributeValue::S(user.created_at().to_rfc3339()),
        ),
        (
            ATTR_UPDATED_AT.to_string(),
            AttributeValue::S(user.updated_at().to_rfc3339()),
        ),
    ])
}

/// Decode a table item back into a user
///
/// Items that fail entity validation are reported as storage corruption.
pub fn item_to_user(item: &Item) -> Result<User, DomainError> {
    let is_active = item
        .get(ATTR_IS_ACTIVE)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| missing(ATTR_IS_ACTIVE))?;

    UserFactory::with_id(
        string_attr(item, ATTR_ID)?,
        string_attr(item, ATTR_EMAIL)?,
        string_attr(item, ATTR_NAME)?,
        is_active,
        Some(parse_timestamp(string_attr(item, ATTR_CREATED_AT)?)?),
        Some(parse_timestamp(string_attr(item, ATTR_UPDATED_AT)?)?),
    )
    .map_err(|e| DomainError::storage(format!("Stored user item is invalid: {}", e)))
}

/// Parse an ISO-8601 timestamp; values without an offset are taken as UTC
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| DomainError::storage(format!("Invalid stored timestamp '{}': {}", value, e)))
}

fn string_attr<'a>(item: &'a Item, name: &str) -> Result<&'a str, DomainError> {
    item.get(name)
        .and_then(|v| v.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| missing(name))
}

fn missing(name: &str) -> DomainError {
    DomainError::storage(format!(
        "Stored user item has a missing or mistyped '{}' attribute",
        name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip() {
        let mut user = User::new("ann@example.com", "Ann");
        user.deactivate();

        let decoded = item_to_user(&user_to_item(&user)).unwrap();

        assert_eq!(decoded, user);
    }

    #[test]
    fn test_item_shape() {
        let user = User::new("ann@example.com", "Ann");
        let item = user_to_item(&user);

        assert_eq!(item.len(), 6);
        assert_eq!(
            item.get(ATTR_ID),
            Some(&AttributeValue::S(user.id().to_string()))
        );
        assert_eq!(item.get(ATTR_IS_ACTIVE), Some(&AttributeValue::Bool(true)));
        assert!(item[ATTR_CREATED_AT].as_s().unwrap().ends_with("+00:00"));
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let parsed = parse_timestamp("2024-01-01T12:30:00.250000").unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_timestamp_with_offset() {
        let parsed = parse_timestamp("2024-01-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_missing_attribute() {
        let mut item = user_to_item(&User::new("ann@example.com", "Ann"));
        item.remove(ATTR_NAME);

        let result = item_to_user(&item);
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[test]
    fn test_mistyped_attribute() {
        let mut item = user_to_item(&User::new("ann@example.com", "Ann"));
        item.insert(
            ATTR_IS_ACTIVE.to_string(),
            AttributeValue::S("true".to_string()),
        );

        assert!(item_to_user(&item).is_err());
    }

    #[test]
    fn test_invalid_stored_id_is_storage_error() {
        let mut item = user_to_item(&User::new("ann@example.com", "Ann"));
        item.insert(ATTR_ID.to_string(), AttributeValue::S("user-1".to_string()));

        let result = item_to_user(&item);
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
