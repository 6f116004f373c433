//! DynamoDB user repository implementation

use std::time::Duration;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, GlobalSecondaryIndex, KeySchemaElement,
    KeyType, Projection, ProjectionType, ReturnValue, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;
use tracing::{debug, error, info};

use super::dynamodb_item::{
    item_to_user, user_to_item, Item, ATTR_EMAIL, ATTR_ID, ATTR_IS_ACTIVE, ATTR_NAME,
    ATTR_UPDATED_AT,
};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Global secondary index keyed on `email`
pub const EMAIL_INDEX: &str = "email-index";

const TABLE_READY_ATTEMPTS: u32 = 30;
const TABLE_READY_INTERVAL: Duration = Duration::from_secs(1);

/// DynamoDB-backed user repository
///
/// Items are keyed by `id`; email lookups go through [`EMAIL_INDEX`]. Email
/// uniqueness is checked by the caller before `save`, so two concurrent
/// creates with the same email can both succeed here.
#[derive(Debug, Clone)]
pub struct DynamoDbUserRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbUserRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn from_sdk_config(config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self::new(Client::new(config), table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the users table and its email index if missing.
    ///
    /// Returns `true` when the table was created by this call.
    pub async fn ensure_table(&self) -> Result<bool, DomainError> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => {
                debug!(table = %self.table_name, "Users table already exists");
                return Ok(false);
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception()) => {}
            Err(err) => return Err(storage_error("describe_table", err)),
        }

        let email_index = GlobalSecondaryIndex::builder()
            .index_name(EMAIL_INDEX)
            .key_schema(hash_key(ATTR_EMAIL)?)
            .projection(
                Projection::builder()
                    .projection_type(ProjectionType::All)
                    .build(),
            )
            .build()
            .map_err(definition_error)?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(hash_key(ATTR_ID)?)
            .attribute_definitions(string_attribute(ATTR_ID)?)
            .attribute_definitions(string_attribute(ATTR_EMAIL)?)
            .global_secondary_indexes(email_index)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| storage_error("create_table", e))?;

        self.wait_until_active().await?;

        info!(table = %self.table_name, "Users table created");
        Ok(true)
    }

    async fn wait_until_active(&self) -> Result<(), DomainError> {
        for _ in 0..TABLE_READY_ATTEMPTS {
            let output = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(|e| storage_error("describe_table", e))?;

            let status = output.table().and_then(|t| t.table_status());
            if status == Some(&TableStatus::Active) {
                return Ok(());
            }

            debug!(table = %self.table_name, status = ?status, "Waiting for table");
            tokio::time::sleep(TABLE_READY_INTERVAL).await;
        }

        Err(DomainError::storage(format!(
            "Table '{}' did not become active in time",
            self.table_name
        )))
    }

    /// Scan every page of the table, optionally keeping only active users
    async fn scan(&self, active_only: bool) -> Result<Vec<User>, DomainError> {
        let mut users = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let mut request = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take());

            if active_only {
                request = request
                    .filter_expression("#is_active = :is_active")
                    .expression_attribute_names("#is_active", ATTR_IS_ACTIVE)
                    .expression_attribute_values(":is_active", AttributeValue::Bool(true));
            }

            let output = request
                .send()
                .await
                .map_err(|e| storage_error("scan", e))?;

            for item in output.items() {
                users.push(item_to_user(item)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        Ok(users)
    }

    fn key(id: &UserId) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl UserRepository for DynamoDbUserRepository {
    async fn save(&self, user: &User) -> Result<User, DomainError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(|e| storage_error("put_item", e))?;

        Ok(user.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .send()
            .await
            .map_err(|e| storage_error("get_item", e))?;

        output.item().map(item_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(EMAIL_INDEX)
            .key_condition_expression("#email = :email")
            .expression_attribute_names("#email", ATTR_EMAIL)
            .expression_attribute_values(":email", AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(|e| storage_error("query", e))?;

        output.items().first().map(item_to_user).transpose()
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.scan(false).await
    }

    async fn find_active_users(&self) -> Result<Vec<User>, DomainError> {
        self.scan(true).await
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| storage_error("delete_item", e))?;

        Ok(output.attributes().is_some_and(|old| !old.is_empty()))
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, Self::key(user.id()))
            .update_expression(
                "SET #name = :name, #is_active = :is_active, #updated_at = :updated_at",
            )
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ATTR_ID)
            .expression_attribute_names("#name", ATTR_NAME)
            .expression_attribute_names("#is_active", ATTR_IS_ACTIVE)
            .expression_attribute_names("#updated_at", ATTR_UPDATED_AT)
            .expression_attribute_values(":name", AttributeValue::S(user.name().to_string()))
            .expression_attribute_values(":is_active", AttributeValue::Bool(user.is_active()))
            .expression_attribute_values(
                ":updated_at",
                AttributeValue::S(user.updated_at().to_rfc3339()),
            )
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output
                .attributes()
                .map(item_to_user)
                .transpose()?
                .unwrap_or_else(|| user.clone())),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                Err(DomainError::not_found(format!(
                    "User '{}' not found",
                    user.id()
                )))
            }
            Err(err) => Err(storage_error("update_item", err)),
        }
    }
}

fn hash_key(attribute: &str) -> Result<KeySchemaElement, DomainError> {
    KeySchemaElement::builder()
        .attribute_name(attribute)
        .key_type(KeyType::Hash)
        .build()
        .map_err(definition_error)
}

fn string_attribute(attribute: &str) -> Result<AttributeDefinition, DomainError> {
    AttributeDefinition::builder()
        .attribute_name(attribute)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(definition_error)
}

fn definition_error(err: aws_sdk_dynamodb::error::BuildError) -> DomainError {
    DomainError::storage(format!("Invalid table definition: {}", err))
}

fn storage_error<E>(operation: &str, err: E) -> DomainError
where
    E: std::error::Error,
{
    let message = DisplayErrorContext(err).to_string();
    error!(operation = operation, error = %message, "DynamoDB request failed");
    DomainError::storage(format!("DynamoDB {} failed: {}", operation, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_key() {
        let key = hash_key(ATTR_ID).unwrap();
        assert_eq!(key.attribute_name(), "id");
        assert_eq!(key.key_type(), &KeyType::Hash);
    }

    #[test]
    fn test_string_attribute() {
        let attribute = string_attribute(ATTR_EMAIL).unwrap();
        assert_eq!(attribute.attribute_name(), "email");
        assert_eq!(attribute.attribute_type(), &ScalarAttributeType::S);
    }

    #[test]
    fn test_storage_error_is_storage() {
        let err = storage_error("scan", std::io::Error::other("connection reset"));
        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(err.message().contains("scan"));
        assert!(err.message().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_table_name() {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(aws_sdk_dynamodb::config::BehaviorVersion::latest())
            .region(aws_sdk_dynamodb::config::Region::new("us-east-1"))
            .build();
        let repo = DynamoDbUserRepository::new(Client::from_conf(config), "users");

        assert_eq!(repo.table_name(), "users");
    }
}
