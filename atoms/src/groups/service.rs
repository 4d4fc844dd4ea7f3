use photogroups_shared::{ApiError, Record, RecordStore};

use super::model::GroupRecord;
use crate::payload::{overlay, parse_object, require_key};

/// Key attribute of the groups table.
pub const GROUP_KEY: &str = "id";

/// Create a group from a raw JSON body. No dedup: every call stores a new record.
pub async fn create_group(
    store: &dyn RecordStore,
    table_name: &str,
    body: &[u8],
) -> Result<Record, ApiError> {
    let fields = parse_object(body)?;
    let new_item = overlay(GroupRecord::new().into_record(), fields);
    require_key(&new_item, GROUP_KEY)?;

    store.put_item(table_name, new_item.clone()).await?;

    Ok(new_item)
}

/// Point read on the groups table.
pub async fn group_exists(
    store: &dyn RecordStore,
    table_name: &str,
    group_id: &str,
) -> Result<bool, ApiError> {
    let item = store.get_item(table_name, GROUP_KEY, group_id).await?;
    tracing::debug!("Get group {}: found={}", group_id, item.is_some());
    Ok(item.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, store, FailingStore, GROUPS};
    use serde_json::json;

    #[tokio::test]
    async fn stores_generated_id_with_client_fields() {
        let store = store();

        let item = create_group(&store, GROUPS, br#"{"name":"Trip","tags":["beach"]}"#)
            .await
            .unwrap();

        let id = item["id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
        assert_eq!(item["name"], json!("Trip"));
        assert_eq!(item["tags"], json!(["beach"]));
        assert_eq!(item.len(), 3);
        assert_eq!(store.items(GROUPS), vec![item]);
    }

    #[tokio::test]
    async fn identical_requests_make_distinct_groups() {
        let store = store();
        let body = br#"{"name":"Trip"}"#;

        let first = create_group(&store, GROUPS, body).await.unwrap();
        let second = create_group(&store, GROUPS, body).await.unwrap();

        assert_ne!(first["id"], second["id"]);
        assert_eq!(store.len(GROUPS), 2);
    }

    #[tokio::test]
    async fn client_id_overrides_generated_id() {
        let store = store();

        let item = create_group(&store, GROUPS, br#"{"id":"mine","name":"Trip"}"#)
            .await
            .unwrap();

        assert_eq!(item, record(json!({ "id": "mine", "name": "Trip" })));
        assert!(group_exists(&store, GROUPS, "mine").await.unwrap());
    }

    #[tokio::test]
    async fn unusable_client_id_is_bad_request() {
        let store = store();
        let bodies: [&[u8]; 3] = [
            br#"{"id":5,"name":"Trip"}"#,
            br#"{"id":""}"#,
            br#"{"id":null}"#,
        ];

        for body in bodies {
            let err = create_group(&store, GROUPS, body).await.unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "{}", err);
        }
        assert!(store.is_empty(GROUPS));
    }

    #[tokio::test]
    async fn malformed_body_writes_nothing() {
        let store = store();

        let err = create_group(&store, GROUPS, b"not json").await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(store.is_empty(GROUPS));
    }

    #[tokio::test]
    async fn existence_check_reads_by_id() {
        let store = store();
        store
            .put_item(GROUPS, record(json!({ "id": "g1" })))
            .await
            .unwrap();

        assert!(group_exists(&store, GROUPS, "g1").await.unwrap());
        assert!(!group_exists(&store, GROUPS, "g2").await.unwrap());
        assert!(group_exists(&FailingStore, GROUPS, "g1").await.is_err());
    }
}
