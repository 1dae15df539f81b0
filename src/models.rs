use serde::{Deserialize, Serialize};

/// The todo entity. `id` is `None` until the repository assigns one on
/// first save; request bodies may omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Option<i64>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_text_only() {
        let todo: Todo = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
        assert_eq!(todo.id, None);
        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let todo: Todo = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(todo.text, "");
    }

    #[test]
    fn saved_todo_serializes_id_as_number() {
        let todo = Todo {
            id: Some(7),
            text: "Walk the dog".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["text"], "Walk the dog");
        assert_eq!(json["completed"], true);
    }
}
