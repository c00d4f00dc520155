/// JSON-RPC protocol types for the NZBGet control interface.
///
/// NZBGet accepts POST bodies of the form `{"method": ..., "params": ...,
/// "id": ...}` and answers with an envelope whose `result` field carries
/// the payload.
use serde::{Deserialize, Serialize};
use serde_json::json;

// ====== REQUEST (bot -> NZBGet) ======

/// One JSON-RPC request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub method: &'static str,
    /// Omitted entirely for methods that take no parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    pub id: u32,
}

impl RpcRequest {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            params: None,
            id: 1,
        }
    }

    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Queue actions accepted by the `editqueue` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueueAction {
    GroupDelete,
    GroupPause,
    GroupResume,
}

impl QueueAction {
    /// The action name as it appears on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            QueueAction::GroupDelete => "GroupDelete",
            QueueAction::GroupPause => "GroupPause",
            QueueAction::GroupResume => "GroupResume",
        }
    }
}

impl std::fmt::Display for QueueAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ====== RESPONSE (NZBGet -> bot) ======

/// Response envelope; only the `result` field is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

// ====== CONVENIENCE BUILDERS ======

/// Build a `status` request (server state and download rate).
pub fn status_request() -> RpcRequest {
    RpcRequest::new("status")
}

/// Build a `listgroups` request (downloading and queued groups, no log).
pub fn list_groups_request() -> RpcRequest {
    RpcRequest::new("listgroups").with_params(json!({ "NumberOfLogEntries": 0 }))
}

/// Build an `editqueue` request targeting a single group.
///
/// The positional parameters are action, offset, edit text and the list
/// of affected NZB IDs; offset and edit text are unused by these actions.
pub fn edit_queue_request(action: QueueAction, nzb_id: i64) -> RpcRequest {
    RpcRequest::new("editqueue").with_params(json!([action, 0, "", [nzb_id]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_request_has_no_params_key() {
        let value = serde_json::to_value(status_request()).unwrap();
        assert_eq!(value, json!({ "method": "status", "id": 1 }));
    }

    #[test]
    fn test_list_groups_request_shape() {
        let value = serde_json::to_value(list_groups_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "listgroups",
                "params": { "NumberOfLogEntries": 0 },
                "id": 1,
            })
        );
    }

    #[test]
    fn test_edit_queue_request_shape() {
        let value =
            serde_json::to_value(edit_queue_request(QueueAction::GroupDelete, 42)).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "editqueue",
                "params": ["GroupDelete", 0, "", [42]],
                "id": 1,
            })
        );
    }

    #[test]
    fn test_action_names() {
        assert_eq!(QueueAction::GroupPause.as_str(), "GroupPause");
        assert_eq!(QueueAction::GroupResume.to_string(), "GroupResume");
    }

    #[test]
    fn test_response_without_result_field() {
        let resp: RpcResponse = serde_json::from_str(r#"{"version": "1.1"}"#).unwrap();
        assert!(resp.result.is_none());
    }
}
