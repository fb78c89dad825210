//! Gallery renderer: catalog joined with the saved selection

use crate::catalog::GradientDefinition;
use crate::storage::SelectionRecord;
use serde::{Deserialize, Serialize};

/// One toggle in the gallery, carrying everything needed to submit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleControl {
    pub slug: String,
    pub name: String,
    pub gradient: String,
    pub checked: bool,
}

/// The rendered form: controls plus the token that authorizes saving them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryPage {
    pub nonce: String,
    pub gradients: Vec<ToggleControl>,
}

/// One control per catalog entry, in catalog order.
pub fn render(catalog: &[GradientDefinition], saved: &SelectionRecord) -> Vec<ToggleControl> {
    catalog
        .iter()
        .map(|g| {
            let slug = g.slug();
            let checked = saved.contains(&slug);
            ToggleControl {
                slug,
                name: g.name.to_string(),
                gradient: g.css.to_string(),
                checked,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_nothing_saved_renders_all_unchecked() {
        let controls = render(CATALOG, &SelectionRecord::new());
        assert_eq!(controls.len(), CATALOG.len());
        assert!(controls.iter().all(|c| !c.checked));
    }

    #[test]
    fn test_checked_follows_saved_slugs() {
        let mut saved = SelectionRecord::new();
        saved.insert("warm-flame", "Warm Flame", "whatever");
        saved.insert("not-in-catalog", "Ghost", "g");

        let controls = render(CATALOG, &saved);
        for (c, g) in controls.iter().zip(CATALOG) {
            assert_eq!(c.name, g.name);
            assert_eq!(c.gradient, g.css);
            assert_eq!(c.checked, saved.contains(&c.slug));
        }
        assert!(controls[0].checked);
        assert!(!controls[1].checked);
    }

    #[test]
    fn test_colliding_slugs_check_together() {
        let mut saved = SelectionRecord::new();
        saved.insert("deep-blue", "Deep Blue", "x");

        let checked: Vec<_> = render(CATALOG, &saved)
            .into_iter()
            .filter(|c| c.checked)
            .collect();
        assert_eq!(checked.len(), 2);
        assert!(checked.iter().all(|c| c.slug == "deep-blue"));
    }
}
