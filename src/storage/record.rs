use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One persisted preset, keyed by its slug in [`SelectionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGradient {
    pub name: String,
    pub gradient: String,
    #[serde(default)]
    pub slug: String,
}

/// Preset descriptor handed to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub gradient: String,
}

/// Insertion-ordered mapping slug -> preset.
///
/// Serializes as a JSON object. Re-inserting a slug replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRecord {
    entries: Vec<SavedGradient>,
}

impl SelectionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slug: impl Into<String>, name: impl Into<String>, gradient: impl Into<String>) {
        let entry = SavedGradient {
            slug: slug.into(),
            name: name.into(),
            gradient: gradient.into(),
        };
        match self.entries.iter_mut().find(|e| e.slug == entry.slug) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    pub fn get(&self, slug: &str) -> Option<&SavedGradient> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedGradient> {
        self.entries.iter()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.slug.as_str()).collect()
    }

    /// Values in insertion order, without their keys.
    pub fn presets(&self) -> Vec<Preset> {
        self.entries
            .iter()
            .map(|e| Preset {
                name: e.name.clone(),
                gradient: e.gradient.clone(),
            })
            .collect()
    }
}

impl Serialize for SelectionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for e in &self.entries {
            map.serialize_entry(&e.slug, e)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = SelectionRecord;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of slug to gradient")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = SelectionRecord::new();
                while let Some((slug, entry)) = access.next_entry::<String, SavedGradient>()? {
                    // The key is authoritative for the slug.
                    record.insert(slug, entry.name, entry.gradient);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut r = SelectionRecord::new();
        r.insert("deep-blue", "Deep Blue", "a");
        r.insert("warm-flame", "Warm Flame", "b");
        r.insert("deep-blue", "Deep Blue", "c");

        assert_eq!(r.len(), 2);
        assert_eq!(r.slugs(), vec!["deep-blue", "warm-flame"]);
        assert_eq!(r.get("deep-blue").unwrap().gradient, "c");
        assert_eq!(r.get("warm-flame").unwrap().name, "Warm Flame");
        assert!(r.get("night-fade").is_none());
    }

    #[test]
    fn test_json_layout_keeps_order() {
        let mut r = SelectionRecord::new();
        r.insert("night-fade", "Night Fade", "n");
        r.insert("warm-flame", "Warm Flame", "w");

        let raw = serde_json::to_string(&r).unwrap();
        assert_eq!(
            raw,
            r#"{"night-fade":{"name":"Night Fade","gradient":"n","slug":"night-fade"},"warm-flame":{"name":"Warm Flame","gradient":"w","slug":"warm-flame"}}"#
        );

        let back: SelectionRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.slugs(), vec!["night-fade", "warm-flame"]);
    }

    #[test]
    fn test_key_wins_over_stored_slug() {
        let r: SelectionRecord =
            serde_json::from_str(r#"{"x":{"name":"X","gradient":"g","slug":"other"}}"#).unwrap();
        assert_eq!(r.get("x").unwrap().slug, "x");
        assert!(r.get("other").is_none());
    }

    #[test]
    fn test_presets_drop_keys() {
        let mut r = SelectionRecord::new();
        r.insert("warm-flame", "Warm Flame", "w");
        assert_eq!(
            r.presets(),
            vec![Preset {
                name: "Warm Flame".into(),
                gradient: "w".into()
            }]
        );
    }
}
