// SPDX-License-Identifier: LGPL-3.0-or-later

use std::collections::HashMap;

use crate::Value;

/// Script variables by name. The last assignment to a name wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableTable {
    values: HashMap<String, Value>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for VariableTable {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut table = VariableTable::new();
        assert_eq!(table.set("x", "a"), None);
        assert_eq!(table.set("x", "b"), Some(Value::from("a")));

        assert_eq!(table.get("x"), Some(&Value::from("b")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing() {
        let table = VariableTable::from_iter([("x", "5")]);
        assert!(table.contains("x"));
        assert!(!table.contains("y"));
        assert_eq!(table.get("y"), None);
    }
}
