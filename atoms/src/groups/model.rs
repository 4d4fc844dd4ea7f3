use photogroups_shared::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned fields of a group. Client fields are merged on top.
#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub id: String,
}

impl GroupRecord {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("id".to_string(), Value::String(self.id));
        record
    }
}

impl Default for GroupRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupResponse {
    pub new_item: Record,
}
