//! Menu catalog - the static, read-only product lookup table
//!
//! Loaded once at startup from `data/menu.json` and shared across requests
//! without locking; nothing mutates it after load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One sellable item.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub price_usd: f64,
    pub image_path: String,
}

/// An ordered group of items.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// The whole catalog, in menu order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuCatalog {
    pub categories: Vec<MenuCategory>,
}

impl MenuCatalog {
    /// Load the catalog from a JSON file. Failures here are configuration
    /// errors and fatal at startup, never per-request.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog: MenuCatalog =
            serde_json::from_str(&content).map_err(|source| MenuError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        log::info!(
            "Loaded menu catalog with {} categories, {} items",
            catalog.categories.len(),
            catalog.categories.iter().map(|c| c.items.len()).sum::<usize>()
        );
        Ok(catalog)
    }

    /// Look an item up by id across all categories.
    pub fn find_item(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == id)
    }

    /// Pretty-printed JSON of the catalog, for prompt interpolation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_catalog() -> MenuCatalog {
        MenuCatalog {
            categories: vec![MenuCategory {
                id: "classic_smoothies".to_string(),
                title: "Classic Smoothies".to_string(),
                items: vec![MenuItem {
                    id: "chocolate_supreme".to_string(),
                    name: "Chocolate Supreme".to_string(),
                    item_type: "smoothie".to_string(),
                    price_usd: 12.95,
                    image_path: "/images/ChocolateSupreme.jpg".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_find_item() {
        let catalog = sample_catalog();
        let item = catalog.find_item("chocolate_supreme").unwrap();
        assert_eq!(item.name, "Chocolate Supreme");
        assert_eq!(item.price_usd, 12.95);
        assert!(catalog.find_item("mango_madness").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_catalog()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = MenuCatalog::load(file.path()).unwrap();
        assert_eq!(catalog, sample_catalog());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = MenuCatalog::load("/nonexistent/menu.json").unwrap_err();
        assert!(matches!(err, MenuError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = MenuCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, MenuError::Parse { .. }));
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let catalog = sample_catalog();
        let pretty = catalog.to_json_pretty().unwrap();
        let back: MenuCatalog = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, catalog);
    }
}
