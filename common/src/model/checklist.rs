//! Return checklist: which physical items came back with the asset.
//!
//! On the wire this is a plain JSON object (`{"device": true, "charger": false}`).
//! Entries keep the order they were received in, which is also the order the
//! checklist table is rendered in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReturnChecklist {
    entries: Vec<(String, bool)>,
}

impl ReturnChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag for `item`. A repeated name updates the existing entry in
    /// place, so each name appears once.
    pub fn set(&mut self, item: impl Into<String>, returned: bool) {
        let item = item.into();
        match self.entries.iter_mut().find(|(name, _)| *name == item) {
            Some(entry) => entry.1 = returned,
            None => self.entries.push((item, returned)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(name, returned)| (name.as_str(), *returned))
    }

    /// Names of the items not returned, in checklist order.
    pub fn missing_items(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, returned)| !returned)
            .map(|(name, _)| name)
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ReturnChecklist {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut checklist = ReturnChecklist::new();
        for (item, returned) in iter {
            checklist.set(item, returned);
        }
        checklist
    }
}

impl Serialize for ReturnChecklist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, returned) in &self.entries {
            map.serialize_entry(name, returned)?;
        }
        map.end()
    }
}

struct ChecklistVisitor;

impl<'de> Visitor<'de> for ChecklistVisitor {
    type Value = ReturnChecklist;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of item names to returned flags")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut checklist = ReturnChecklist::new();
        while let Some((name, returned)) = access.next_entry::<String, bool>()? {
            checklist.set(name, returned);
        }
        Ok(checklist)
    }
}

impl<'de> Deserialize<'de> for ReturnChecklist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ChecklistVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_order_is_kept() {
        let json = r#"{"manual": true, "device": false, "charger": true, "case": false}"#;
        let checklist: ReturnChecklist = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = checklist.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["manual", "device", "charger", "case"]);
        assert_eq!(checklist.missing_items(), vec!["device", "case"]);
        assert_eq!(serde_json::to_string(&checklist).unwrap(), json.replace(' ', ""));
    }

    #[test]
    fn repeated_item_updates_in_place() {
        let mut checklist = ReturnChecklist::new();
        checklist.set("device", false);
        checklist.set("sim", true);
        checklist.set("device", true);
        let entries: Vec<(&str, bool)> = checklist.iter().collect();
        assert_eq!(entries, vec![("device", true), ("sim", true)]);
        assert!(checklist.missing_items().is_empty());
    }
}
