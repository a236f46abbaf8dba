//! Airtable Record Store
//!
//! Talks to the Airtable REST API. Fields are stored as `Title`, `Tasks`
//! (JSON string), `CreatedAt` and `EventDateTime`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeiglist_core::{DomainError, DomainResult, StoredRecord};

use super::traits::{RecordStore, SavedRecord};
use crate::config::AirtableConfig;

/// Airtable-backed record store
pub struct AirtableStore {
    client: Client,
    config: AirtableConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RecordFields {
    #[serde(default)]
    title: String,
    #[serde(default)]
    tasks: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    event_date_time: String,
}

impl From<&StoredRecord> for RecordFields {
    fn from(record: &StoredRecord) -> Self {
        Self {
            title: record.title.clone(),
            tasks: record.tasks.clone(),
            created_at: record.created_at.clone(),
            event_date_time: record.event_date_time.clone(),
        }
    }
}

impl From<RecordFields> for StoredRecord {
    fn from(fields: RecordFields) -> Self {
        Self {
            title: fields.title,
            tasks: fields.tasks,
            created_at: fields.created_at,
            event_date_time: fields.event_date_time,
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    fields: &'a RecordFields,
}

#[derive(Debug, Deserialize)]
struct AirtableRecord {
    id: String,
    #[serde(default)]
    fields: RecordFields,
}

#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    records: Vec<AirtableRecord>,
    #[serde(default)]
    offset: Option<String>,
}

fn http_err(e: reqwest::Error) -> DomainError {
    DomainError::Internal(format!("Airtable request failed: {}", e))
}

impl AirtableStore {
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// `{api_url}/{base}/{table}[/{record}]`, each segment escaped
    fn url(&self, record_id: Option<&str>) -> DomainResult<Url> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| DomainError::Internal(format!("Invalid Airtable API URL: {}", e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DomainError::Internal("Airtable API URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.push(&self.config.base_id).push(&self.config.table_name);
            if let Some(id) = record_id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    /// Fail on non-2xx with the status and body Airtable returned
    async fn check(response: reqwest::Response) -> DomainResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(DomainError::Internal(format!("Airtable responded {}: {}", status, body)))
    }

    async fn fetch_page(&self, offset: Option<&str>, max_records: Option<u32>) -> DomainResult<ListPage> {
        let mut query: Vec<(&str, String)> = vec![("view", self.config.view.clone())];
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(max) = max_records {
            query.push(("maxRecords", max.to_string()));
        }

        let response = self
            .client
            .get(self.url(None)?)
            .bearer_auth(&self.config.api_key)
            .query(&query)
            .send()
            .await
            .map_err(http_err)?;
        Self::check(response).await?.json().await.map_err(http_err)
    }
}

#[async_trait]
impl RecordStore for AirtableStore {
    async fn create(&self, record: &StoredRecord) -> DomainResult<String> {
        let fields = RecordFields::from(record);
        let response = self
            .client
            .post(self.url(None)?)
            .bearer_auth(&self.config.api_key)
            .json(&CreateBody { fields: &fields })
            .send()
            .await
            .map_err(http_err)?;

        let created: AirtableRecord = Self::check(response).await?.json().await.map_err(http_err)?;
        debug!(id = %created.id, "airtable record created");
        Ok(created.id)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<StoredRecord>> {
        let response = self
            .client
            .get(self.url(Some(id))?)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(http_err)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let found: AirtableRecord = Self::check(response).await?.json().await.map_err(http_err)?;
        Ok(Some(found.fields.into()))
    }

    async fn list(&self) -> DomainResult<Vec<SavedRecord>> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let page = self.fetch_page(offset.as_deref(), None).await?;
            records.extend(page.records.into_iter().map(|r| SavedRecord {
                id: r.id,
                record: r.fields.into(),
            }));
            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        debug!(count = records.len(), "airtable records listed");
        Ok(records)
    }

    async fn ping(&self) -> DomainResult<()> {
        self.fetch_page(None, Some(1)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(api_url: &str) -> AirtableStore {
        AirtableStore::new(AirtableConfig {
            api_key: "key".to_string(),
            base_id: "appBase".to_string(),
            table_name: "Saved Lists".to_string(),
            api_url: api_url.to_string(),
            view: "Grid view".to_string(),
        })
    }

    #[test]
    fn test_url_escapes_segments() {
        let url = store("https://api.airtable.com/v0").url(Some("rec1")).unwrap();
        assert_eq!(url.as_str(), "https://api.airtable.com/v0/appBase/Saved%20Lists/rec1");

        let url = store("https://api.airtable.com/v0/").url(None).unwrap();
        assert_eq!(url.as_str(), "https://api.airtable.com/v0/appBase/Saved%20Lists");
    }

    #[test]
    fn test_fields_use_airtable_names() {
        let record = StoredRecord {
            title: "T".to_string(),
            tasks: "[]".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            event_date_time: String::new(),
        };
        let json = serde_json::to_value(CreateBody { fields: &RecordFields::from(&record) }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fields": {
                "Title": "T",
                "Tasks": "[]",
                "CreatedAt": "2024-01-01T00:00:00.000Z",
                "EventDateTime": ""
            }})
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let page: ListPage = serde_json::from_str(
            r#"{"records":[{"id":"rec1","createdTime":"2024-01-01T00:00:00.000Z","fields":{"Title":"T"}}],"offset":"itr2"}"#,
        )
        .unwrap();
        assert_eq!(page.offset.as_deref(), Some("itr2"));
        let record: StoredRecord = page.records.into_iter().next().unwrap().fields.into();
        assert_eq!(record.title, "T");
        assert_eq!(record.tasks, "");
        assert_eq!(record.event_date_time, "");
    }
}
