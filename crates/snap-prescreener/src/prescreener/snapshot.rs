use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field values captured from the form at one point in time.
///
/// Keys are field ids (choice groups use their group name). A key is absent when
/// the choice is unselected or the field sits inside a hidden question. Snapshots
/// are built once per pass and never edited afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
}

impl FormSnapshot {
    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.values.get(field_id).map(String::as_str)
    }

    /// Value as the form would report it for a text input: absent reads as empty.
    pub fn text(&self, field_id: &str) -> &str {
        self.get(field_id).unwrap_or("")
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.values.contains_key(field_id)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Copy of this snapshot with one value replaced.
    pub fn with(&self, field_id: &str, value: &str) -> Self {
        let mut values = self.values.clone();
        values.insert(field_id.to_string(), value.to_string());
        Self { values }
    }

    /// Copy of this snapshot with one value removed.
    pub fn without(&self, field_id: &str) -> Self {
        let mut values = self.values.clone();
        values.remove(field_id);
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for FormSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
