// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! DynamoDB client wrapper with typed operations.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, DeleteRequest, WriteRequest};
use aws_sdk_dynamodb::Client;

use super::conversions::{
    athlete_to_item, item_to_athlete, item_to_session, session_to_item, ENTITY_TYPE_ATHLETE,
};
use super::error::{map_put_error, map_sdk_error};
use super::keys;
use crate::db::Store;
use crate::error::AppError;
use crate::models::{Athlete, TrainingSession};

// BatchWriteItem accepts at most 25 requests per call.
const BATCH_WRITE_SIZE: usize = 25;

const GSI1_NAME: &str = "GSI1";

/// DynamoDB-backed store.
#[derive(Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    /// Create a store from an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Connect using the default AWS credential chain.
    ///
    /// For local development with dynamodb-local, pass an endpoint override.
    pub async fn connect(table_name: &str, endpoint: Option<&str>) -> Result<Self, AppError> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let client = match endpoint {
            Some(url) => {
                tracing::info!(endpoint = url, "Using DynamoDB endpoint override");
                let config = aws_sdk_dynamodb::config::Builder::from(&sdk_config)
                    .endpoint_url(url)
                    .build();
                Client::from_conf(config)
            }
            None => Client::new(&sdk_config),
        };

        tracing::info!(table = table_name, "Connected to DynamoDB");

        Ok(Self::new(client, table_name))
    }

    /// Delete a batch of session items from one athlete's partition.
    async fn batch_delete_sessions(
        &self,
        athlete_id: &str,
        session_ids: &[String],
    ) -> Result<(), AppError> {
        for chunk in session_ids.chunks(BATCH_WRITE_SIZE) {
            let requests = chunk
                .iter()
                .map(|session_id| {
                    let delete = DeleteRequest::builder()
                        .key("PK", AttributeValue::S(keys::athlete_pk(athlete_id)))
                        .key("SK", AttributeValue::S(keys::session_sk(session_id)))
                        .build()
                        .map_err(|e| {
                            AppError::Database(format!("Failed to build delete request: {}", e))
                        })?;
                    Ok(WriteRequest::builder().delete_request(delete).build())
                })
                .collect::<Result<Vec<_>, AppError>>()?;

            let output = self
                .client
                .batch_write_item()
                .request_items(&self.table_name, requests)
                .send()
                .await
                .map_err(|e| map_sdk_error("BatchWriteItem", e))?;

            if let Some(unprocessed) = output.unprocessed_items() {
                if !unprocessed.is_empty() {
                    // No retry loop; surface the partial failure to the caller.
                    return Err(AppError::Database(format!(
                        "BatchWriteItem left {} unprocessed deletes",
                        unprocessed.values().map(Vec::len).sum::<usize>()
                    )));
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Store for DynamoStore {
    async fn put_athlete(&self, athlete: &Athlete) -> Result<(), AppError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(athlete_to_item(athlete)))
            .send()
            .await
            .map_err(map_put_error)?;
        Ok(())
    }

    async fn get_athlete(&self, id: &str) -> Result<Option<Athlete>, AppError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::athlete_pk(id)))
            .key("SK", AttributeValue::S(keys::athlete_sk(id)))
            .send()
            .await
            .map_err(|e| map_sdk_error("GetItem", e))?;

        match result.item {
            Some(item) => Ok(Some(item_to_athlete(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, AppError> {
        // Athlete records carry no useful index key, so this is a filtered
        // scan. Acceptable at this table's scale.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#t = :athlete")
            .expression_attribute_names("#t", "Type")
            .expression_attribute_values(
                ":athlete",
                AttributeValue::S(ENTITY_TYPE_ATHLETE.to_string()),
            )
            .send()
            .await
            .map_err(|e| map_sdk_error("Scan", e))?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_athlete)
            .collect()
    }

    async fn delete_athlete(&self, id: &str) -> Result<(), AppError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::athlete_pk(id)))
            .key("SK", AttributeValue::S(keys::athlete_sk(id)))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;
        Ok(())
    }

    async fn put_session(&self, session: &TrainingSession) -> Result<(), AppError> {
        // A single put covers both the base table and the GSI1 projection.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(session_to_item(session)))
            .send()
            .await
            .map_err(map_put_error)?;
        Ok(())
    }

    async fn get_session(&self, id: &str) -> Result<Option<TrainingSession>, AppError> {
        // The session id is not part of either key, so this queries the
        // whole GSI1 partition and filters server-side. Intentionally O(n);
        // see DESIGN.md for the improvement path if scale ever matters.
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(GSI1_NAME)
            .key_condition_expression("GSI1PK = :pk")
            .filter_expression("SessionId = :sid")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::SESSION_GSI1_PK.to_string()),
            )
            .expression_attribute_values(":sid", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| map_sdk_error("Query", e))?;

        match result.items.unwrap_or_default().first() {
            Some(item) => Ok(Some(item_to_session(item)?)),
            None => Ok(None),
        }
    }

    async fn list_all_sessions(&self) -> Result<Vec<TrainingSession>, AppError> {
        // GSI1SK starts with the ISO date, so results come back
        // date-ascending with no in-memory sort.
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(GSI1_NAME)
            .key_condition_expression("GSI1PK = :pk")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::SESSION_GSI1_PK.to_string()),
            )
            .send()
            .await
            .map_err(|e| map_sdk_error("Query", e))?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_session)
            .collect()
    }

    async fn list_sessions_by_athlete(
        &self,
        athlete_id: &str,
    ) -> Result<Vec<TrainingSession>, AppError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("PK = :pk AND begins_with(SK, :prefix)")
            .expression_attribute_values(":pk", AttributeValue::S(keys::athlete_pk(athlete_id)))
            .expression_attribute_values(
                ":prefix",
                AttributeValue::S(keys::SESSION_PREFIX.to_string()),
            )
            .send()
            .await
            .map_err(|e| map_sdk_error("Query", e))?;

        result
            .items
            .unwrap_or_default()
            .iter()
            .map(item_to_session)
            .collect()
    }

    async fn delete_session(&self, id: &str) -> Result<(), AppError> {
        // The primary key needs the owning athlete's id, so look the
        // session up first. Absent sessions are a no-op.
        let Some(session) = self.get_session(id).await? else {
            return Ok(());
        };

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                "PK",
                AttributeValue::S(keys::athlete_pk(&session.athlete_id)),
            )
            .key("SK", AttributeValue::S(keys::session_sk(id)))
            .send()
            .await
            .map_err(|e| map_sdk_error("DeleteItem", e))?;
        Ok(())
    }

    async fn delete_sessions_by_athlete(&self, athlete_id: &str) -> Result<usize, AppError> {
        let sessions = self.list_sessions_by_athlete(athlete_id).await?;
        let ids: Vec<String> = sessions.into_iter().map(|s| s.id).collect();

        self.batch_delete_sessions(athlete_id, &ids).await?;

        tracing::debug!(athlete_id, count = ids.len(), "Deleted athlete sessions");

        Ok(ids.len())
    }
}
