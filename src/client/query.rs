use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::error::ClientError;
use crate::model::Entity;

/// Attendance of a marathon, with each attendee's profile
pub const ATTENDANCE_QUERY: &str = r#"
query($marathon_id: Int!){
    marathon(id: $marathon_id){
        attendance{
            location
            attendee{
                id
                name
                twitch_login
                rank
                house
                house_color
            }
        }
    }
}"#;

/// Segments of a marathon, with game, runners and recordings
pub const SEGMENTS_QUERY: &str = r#"
query($marathon_id: Int!){
    marathon(id: $marathon_id){
        segments{
            id
            game{
                id
                title
                isZelda
                isEvent
            }
            modifier
            raised
            start_time
            end_time
            vod
            time_offset
            runners{
                attendee{
                    id
                    name
                    twitch_login
                    rank
                }
                runner_rank
            }
            filenames{
                filename
                note
            }
        }
    }
}"#;

/// JSON body posted to the GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Variables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variables {
    pub marathon_id: i64,
}

impl GraphQlRequest {
    pub fn attendance(marathon_id: i64) -> Self {
        Self {
            query: ATTENDANCE_QUERY,
            variables: Variables { marathon_id },
        }
    }

    pub fn segments(marathon_id: i64) -> Self {
        Self {
            query: SEGMENTS_QUERY,
            variables: Variables { marathon_id },
        }
    }
}

/// Find the array at `data.marathon.<key>` in a query response
pub fn extract_collection<'a>(
    response: &'a Value,
    key: &str,
) -> Result<&'a Vec<Value>, ClientError> {
    let marathon = response
        .get("data")
        .and_then(|data| data.get("marathon"))
        .filter(|m| !m.is_null())
        .ok_or_else(|| missing(response, "data.marathon"))?;

    match marathon.get(key) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(missing(response, &format!("data.marathon.{}", key))),
    }
}

/// Decode every element of `data.marathon.<key>` into `E`.
///
/// Either the whole collection decodes or nothing is returned.
pub fn decode_collection<E: Entity>(response: &Value, key: &str) -> Result<Vec<E>, ClientError> {
    extract_collection(response, key)?
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => E::from_map(map).map_err(ClientError::from),
            _ => Err(ClientError::RemoteDecode(format!(
                "data.marathon.{}[{}] is not an object",
                key, index
            ))),
        })
        .collect()
}

fn missing(response: &Value, path: &str) -> ClientError {
    let messages = graphql_errors(response);
    if messages.is_empty() {
        ClientError::RemoteDecode(format!("response has no {}", path))
    } else {
        ClientError::RemoteDecode(format!(
            "response has no {} (server errors: {})",
            path,
            messages.join("; ")
        ))
    }
}

/// Messages from a GraphQL `errors` array, if the server sent one
pub fn graphql_errors(response: &Value) -> Vec<String> {
    response
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Build a `{"data": {"marathon": {<key>: items}}}` response body
pub fn marathon_response(key: &str, items: Vec<Value>) -> Value {
    let mut marathon = Map::new();
    marathon.insert(key.to_string(), Value::Array(items));
    serde_json::json!({ "data": { "marathon": marathon } })
}
