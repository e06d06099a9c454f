//! Facet metadata models, loaded once from `/api/filters`.

use serde::{Deserialize, Serialize};

use crate::episode::Episode;


/// A paint color facet option. `hex_code` is "#"-prefixed, six hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetColor {
    pub name: String,
    pub hex_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSubject {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetMonth {
    pub month_num: u8,
    pub month_name: String,
}

impl FacetMonth {
    /// The service pads `month_name` with trailing whitespace (Postgres
    /// `to_char(.., 'Month')`), so trim before display.
    pub fn display_name(&self) -> &str {
        self.month_name.trim()
    }
}

/// The read-only snapshot of all selectable facet values. Loaded exactly once;
/// the not-yet-loaded state is represented as `Option<FacetCatalog>` by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetCatalog {
    pub colors: Vec<FacetColor>,
    pub subjects: Vec<FacetSubject>,
    pub months: Vec<FacetMonth>,
}

impl FacetCatalog {
    /// Resolve a raw color name from an episode to its catalog entry. Unknown
    /// names are not an error, they just have no display color.
    pub fn lookup_color(&self, name: &str) -> Option<&FacetColor> {
        self.colors.iter().find(|c| c.name == name)
    }
}

/// One raw episode color name together with its display hex code, when the
/// catalog knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEpisodeColor {
    pub name: String,
    pub hex_code: Option<String>,
}

/// Map each raw color name on an episode back to its display attributes.
/// An absent catalog (load failed or still in flight) resolves everything to
/// no-display-color rather than failing.
pub fn resolve_display_colors(catalog: Option<&FacetCatalog>, episode: &Episode) -> Vec<ResolvedEpisodeColor> {
    episode
        .colors
        .iter()
        .map(|name| ResolvedEpisodeColor {
            name: name.clone(),
            hex_code: catalog
                .and_then(|c| c.lookup_color(name))
                .map(|c| c.hex_code.clone()),
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> FacetCatalog {
        FacetCatalog {
            colors: vec![
                FacetColor { name: "Bright Red".to_string(), hex_code: "#DB0000".to_string() },
                FacetColor { name: "Phthalo Blue".to_string(), hex_code: "#0C0040".to_string() },
            ],
            subjects: vec![FacetSubject { name: "TREE".to_string() }],
            months: vec![FacetMonth { month_num: 1, month_name: "January  ".to_string() }],
        }
    }

    #[test]
    fn lookup_color_finds_known_names() {
        let catalog = catalog();
        assert_eq!(catalog.lookup_color("Bright Red").map(|c| c.hex_code.as_str()), Some("#DB0000"));
        assert!(catalog.lookup_color("Majestic Mauve").is_none());
    }

    #[test]
    fn month_display_name_is_trimmed() {
        let catalog = catalog();
        assert_eq!(catalog.months[0].display_name(), "January");
    }

    #[test]
    fn unknown_episode_color_resolves_without_hex() {
        let catalog = catalog();
        let episode = Episode {
            colors: vec!["Bright Red".to_string(), "Majestic Mauve".to_string()],
            ..Episode::default()
        };
        let resolved = resolve_display_colors(Some(&catalog), &episode);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].hex_code.as_deref(), Some("#DB0000"));
        assert_eq!(resolved[1].hex_code, None);
    }

    #[test]
    fn absent_catalog_resolves_without_hex() {
        let episode = Episode { colors: vec!["Bright Red".to_string()], ..Episode::default() };
        let resolved = resolve_display_colors(None, &episode);
        assert_eq!(resolved[0].name, "Bright Red");
        assert_eq!(resolved[0].hex_code, None);
    }

    #[test]
    fn filters_endpoint_shape_deserializes() {
        // hex codes contain `"#`, which would end a plain r#".."# literal early
        let body = r##"{
            "colors": [{"name": "Bright Red", "hex_code": "#DB0000"}],
            "subjects": [{"name": "TREE"}, {"name": "MOUNTAIN"}],
            "months": [{"month_num": 1, "month_name": "January  "}]
        }"##;
        let catalog: FacetCatalog = serde_json::from_str(body).unwrap();
        assert_eq!(catalog.colors.len(), 1);
        assert_eq!(catalog.subjects.len(), 2);
        assert_eq!(catalog.months[0].month_num, 1);
    }
}
