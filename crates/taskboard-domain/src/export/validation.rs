//! Structural checks on snapshot JSON.
//!
//! Runs before deserialization so a rejected import can say where the
//! problem is (`[1].tasks[0].tags`) instead of echoing a serde message.

use serde_json::{Map, Value};
use taskboard_core::{BoardError, BoardResult};

/// Accepts a value iff it is an array of stage-list records, each with string
/// `id` and `name` and an array `tasks`, and every task has string `id`,
/// `name` and `description`, an array of string `tags`, and a `dueDate` that
/// is null or a string.
pub fn validate_shape(value: &Value) -> BoardResult<()> {
    let lists = value
        .as_array()
        .ok_or_else(|| invalid("snapshot", "must be an array of lists"))?;

    for (i, list) in lists.iter().enumerate() {
        let at = format!("[{}]", i);
        let list = record(list, &at)?;
        string_field(list, &at, "id")?;
        string_field(list, &at, "name")?;
        let tasks = array_field(list, &at, "tasks")?;

        for (j, task) in tasks.iter().enumerate() {
            let at = format!("[{}].tasks[{}]", i, j);
            let task = record(task, &at)?;
            string_field(task, &at, "id")?;
            string_field(task, &at, "name")?;
            string_field(task, &at, "description")?;
            for (k, tag) in array_field(task, &at, "tags")?.iter().enumerate() {
                if !tag.is_string() {
                    return Err(invalid(&format!("{}.tags[{}]", at, k), "must be a string"));
                }
            }
            match task.get("dueDate") {
                Some(Value::Null) | Some(Value::String(_)) => {}
                Some(_) => return Err(invalid(&format!("{}.dueDate", at), "must be null or a string")),
                None => return Err(invalid(&format!("{}.dueDate", at), "is missing")),
            }
        }
    }
    Ok(())
}

fn invalid(at: &str, problem: &str) -> BoardError {
    BoardError::Validation(format!("{} {}", at, problem))
}

fn record<'a>(value: &'a Value, at: &str) -> BoardResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid(at, "must be an object"))
}

fn string_field(record: &Map<String, Value>, at: &str, key: &str) -> BoardResult<()> {
    match record.get(key) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(invalid(&format!("{}.{}", at, key), "must be a string")),
        None => Err(invalid(&format!("{}.{}", at, key), "is missing")),
    }
}

fn array_field<'a>(
    record: &'a Map<String, Value>,
    at: &str,
    key: &str,
) -> BoardResult<&'a Vec<Value>> {
    match record.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(invalid(&format!("{}.{}", at, key), "must be an array")),
        None => Err(invalid(&format!("{}.{}", at, key), "is missing")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task() -> Value {
        json!({"id": "t", "name": "n", "description": "", "tags": [], "dueDate": null})
    }

    fn message(value: Value) -> String {
        validate_shape(&value).unwrap_err().to_string()
    }

    #[test]
    fn test_accepts_empty_and_populated_boards() {
        assert!(validate_shape(&json!([])).is_ok());
        assert!(validate_shape(&json!([{"id": "1", "name": "A", "tasks": [task()]}])).is_ok());

        let mut dated = task();
        dated["dueDate"] = json!("2024-01-01");
        assert!(validate_shape(&json!([{"id": "1", "name": "A", "tasks": [dated]}])).is_ok());
    }

    #[test]
    fn test_rejects_non_array_top_level() {
        assert!(message(json!({"lists": []})).contains("snapshot must be an array"));
        assert!(message(json!("[]")).contains("snapshot"));
    }

    #[test]
    fn test_rejects_list_without_tasks_array() {
        assert!(message(json!([{"id": "1", "name": "A"}])).contains("[0].tasks is missing"));
        assert!(message(json!([{"id": "1", "name": "A", "tasks": {}}]))
            .contains("[0].tasks must be an array"));
        assert!(message(json!([42])).contains("[0] must be an object"));
    }

    #[test]
    fn test_rejects_bad_task_fields() {
        let mut no_description = task();
        no_description.as_object_mut().unwrap().remove("description");
        assert!(message(json!([{"id": "1", "name": "A", "tasks": [no_description]}]))
            .contains("[0].tasks[0].description is missing"));

        let mut bad_tags = task();
        bad_tags["tags"] = json!(["ok", 3]);
        assert!(message(json!([{"id": "1", "name": "A", "tasks": [bad_tags]}]))
            .contains("[0].tasks[0].tags[1] must be a string"));

        let mut bad_due = task();
        bad_due["dueDate"] = json!(20240101);
        assert!(message(json!([{"id": "1", "name": "A", "tasks": [bad_due]}]))
            .contains("dueDate must be null or a string"));

        let mut no_due = task();
        no_due.as_object_mut().unwrap().remove("dueDate");
        assert!(message(json!([{"id": "1", "name": "A", "tasks": [no_due]}]))
            .contains("dueDate is missing"));
    }
}
