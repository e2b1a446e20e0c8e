//! Cart entry: whatever the client put in the cart, stored as given.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartEntry(pub Value);

impl CartEntry {
    /// Entry recorded when a request carries no `item`.
    pub fn absent() -> Self {
        Self(Value::Null)
    }
}

impl From<Value> for CartEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_serializes_transparently() {
        let entry = CartEntry::from(json!({"id": 1, "qty": 2}));
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!({"id": 1, "qty": 2}));
    }

    #[test]
    fn test_absent_entry_is_null() {
        let entry = CartEntry::absent();
        assert_eq!(entry, CartEntry::from(Value::Null));
        assert_eq!(serde_json::to_string(&entry).unwrap(), "null");
    }
}
