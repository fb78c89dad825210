//! Save endpoint: gatekeeping, sanitizing and full-replace persistence

use crate::catalog;
use crate::sanitize;
use crate::storage::{self, OptionStore, SelectionRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `action` value identifying a save request.
pub const SAVE_ACTION: &str = "geg_save_gradients";
/// Scope the save nonce is issued for.
pub const NONCE_ACTION: &str = "save_geg_gradients";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradients: Option<Value>,
    #[serde(default)]
    pub nonce: String,
}

/// Generic response; failures carry no detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
}

impl Envelope {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}

/// Outcomes of the external identity checks.
#[derive(Debug, Clone, Copy)]
pub struct Verdicts {
    pub token_valid: bool,
    pub authorized: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SavePolicy {
    /// Drop entries whose gradient is not a catalog value.
    pub strict_catalog: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Cleared,
    Saved(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("anti-forgery token rejected")]
    InvalidToken,
    #[error("caller may not manage gradients")]
    Unauthorized,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Validate, sanitize and persist a submitted selection.
///
/// Every successful call replaces the stored selection; nothing is merged.
pub fn save_gradients(
    store: &dyn OptionStore,
    verdicts: Verdicts,
    gradients: Option<&Value>,
    policy: SavePolicy,
) -> Result<SaveOutcome, SaveError> {
    if !verdicts.token_valid {
        return Err(SaveError::InvalidToken);
    }
    if !verdicts.authorized {
        return Err(SaveError::Unauthorized);
    }

    let entries = match gradients {
        Some(Value::Object(map)) if !map.is_empty() => map,
        _ => {
            storage::save_selection(store, &SelectionRecord::new())?;
            return Ok(SaveOutcome::Cleared);
        }
    };

    let mut record = SelectionRecord::new();
    for (key, data) in entries {
        let slug = sanitize::text_field(key);
        let name = sanitize::text_field(&field(data, "name"));
        let gradient = sanitize::text_field(&field(data, "gradient"));

        if policy.strict_catalog && catalog::find_by_css(&gradient).is_none() {
            tracing::warn!(slug = %slug, "dropping gradient not in catalog");
            continue;
        }
        record.insert(slug, name, gradient);
    }

    storage::save_selection(store, &record)?;
    Ok(SaveOutcome::Saved(record.len()))
}

fn field(data: &Value, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::gallery;
    use crate::storage::{load_selection, MemoryStore, GRADIENTS_OPTION};
    use serde_json::json;

    const OK: Verdicts = Verdicts {
        token_valid: true,
        authorized: true,
    };

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        let mut r = SelectionRecord::new();
        r.insert("night-fade", "Night Fade", CATALOG[1].css);
        storage::save_selection(&store, &r).unwrap();
        store
    }

    #[test]
    fn test_invalid_token_never_mutates() {
        let store = seeded();
        let before = store.get(GRADIENTS_OPTION).unwrap();
        let payload = json!({"warm-flame": {"name": "Warm Flame", "gradient": CATALOG[0].css}});

        for gradients in [Some(&payload), None] {
            let err = save_gradients(
                &store,
                Verdicts {
                    token_valid: false,
                    authorized: true,
                },
                gradients,
                SavePolicy::default(),
            )
            .unwrap_err();
            assert!(matches!(err, SaveError::InvalidToken));
        }
        assert_eq!(store.get(GRADIENTS_OPTION).unwrap(), before);
    }

    #[test]
    fn test_unauthorized_never_mutates() {
        let store = seeded();
        let before = store.get(GRADIENTS_OPTION).unwrap();
        let err = save_gradients(
            &store,
            Verdicts {
                token_valid: true,
                authorized: false,
            },
            None,
            SavePolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SaveError::Unauthorized));
        assert_eq!(store.get(GRADIENTS_OPTION).unwrap(), before);
    }

    #[test]
    fn test_empty_or_missing_payload_clears() {
        for payload in [None, Some(json!({})), Some(json!("nope")), Some(json!([1, 2]))] {
            let store = seeded();
            let outcome = save_gradients(&store, OK, payload.as_ref(), SavePolicy::default()).unwrap();
            assert_eq!(outcome, SaveOutcome::Cleared);
            assert!(load_selection(&store).unwrap().is_empty());
        }
    }

    #[test]
    fn test_warm_flame_only() {
        let store = seeded();
        let payload = json!({"warm-flame": {"name": "Warm Flame", "gradient": CATALOG[0].css}});
        save_gradients(&store, OK, Some(&payload), SavePolicy::default()).unwrap();

        let raw: Value = serde_json::from_str(&store.get(GRADIENTS_OPTION).unwrap().unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({"warm-flame": {"name": "Warm Flame", "gradient": CATALOG[0].css, "slug": "warm-flame"}})
        );

        let controls = gallery::render(CATALOG, &load_selection(&store).unwrap());
        assert!(controls[0].checked);
        assert!(!controls[1].checked);
    }

    #[test]
    fn test_markup_in_key_is_stripped() {
        let store = MemoryStore::new();
        let payload = json!({"<b>x</b>": {"name": "<i>X</i>", "gradient": "linear-gradient(red, blue)"}});
        save_gradients(&store, OK, Some(&payload), SavePolicy::default()).unwrap();

        let saved = load_selection(&store).unwrap();
        assert_eq!(saved.slugs(), vec!["x"]);
        let entry = saved.get("x").unwrap();
        assert_eq!(entry.slug, "x");
        assert_eq!(entry.name, "X");
    }

    #[test]
    fn test_payload_order_is_kept() {
        let store = MemoryStore::new();
        let payload = json!({
            "night-fade": {"name": "Night Fade", "gradient": CATALOG[1].css},
            "juicy-peach": {"name": "Juicy Peach", "gradient": CATALOG[3].css},
            "amy-crisp": {"name": "Amy Crisp", "gradient": "x"},
        });
        save_gradients(&store, OK, Some(&payload), SavePolicy::default()).unwrap();
        assert_eq!(
            load_selection(&store).unwrap().slugs(),
            vec!["night-fade", "juicy-peach", "amy-crisp"]
        );
    }

    #[test]
    fn test_strict_catalog_drops_unknown_gradients() {
        let store = MemoryStore::new();
        let payload = json!({
            "warm-flame": {"name": "Warm Flame", "gradient": CATALOG[0].css},
            "evil": {"name": "Evil", "gradient": "url(javascript:alert(1))"},
        });
        let outcome = save_gradients(
            &store,
            OK,
            Some(&payload),
            SavePolicy {
                strict_catalog: true,
            },
        )
        .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved(1));
        assert_eq!(load_selection(&store).unwrap().slugs(), vec!["warm-flame"]);
    }

    #[test]
    fn test_out_of_catalog_gradient_persists_by_default() {
        let store = MemoryStore::new();
        let payload = json!({"mine": {"name": "Mine", "gradient": "linear-gradient(red, blue)"}});
        save_gradients(&store, OK, Some(&payload), SavePolicy::default()).unwrap();
        assert_eq!(
            load_selection(&store).unwrap().get("mine").unwrap().gradient,
            "linear-gradient(red, blue)"
        );
    }
}
