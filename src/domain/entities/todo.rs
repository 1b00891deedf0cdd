use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// Ids arrive as `3`, `3.0` or `"3"` and are kept as integers from here on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TodoId(pub i64);

pub const NEW_TODO_ID: TodoId = TodoId(-1);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct TodoIdVisitor;

impl<'de> Visitor<'de> for TodoIdVisitor {
    type Value = TodoId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer id or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<TodoId, E> {
        Ok(TodoId(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<TodoId, E> {
        i64::try_from(value)
            .map(TodoId)
            .map_err(|_| E::custom(format!("id {value} is out of range")))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<TodoId, E> {
        // 2^63 itself is out of range, hence the strict upper bound.
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Ok(TodoId(value as i64))
        } else {
            Err(E::custom(format!("id {value} is not an integer")))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TodoId, E> {
        value
            .trim()
            .parse::<i64>()
            .map(TodoId)
            .map_err(|_| E::custom(format!("id {value:?} is not an integer")))
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TodoIdVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn draft() -> Self {
        Self {
            id: NEW_TODO_ID,
            title: String::new(),
            completed: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "To do"
        }
    }
}
