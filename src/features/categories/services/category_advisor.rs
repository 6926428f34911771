use std::sync::Arc;

use crate::core::error::Result;
use crate::features::items::ItemStore;

/// Trimmed lookup key for a suggestion, or `None` when the name is
/// blank and cannot match anything.
fn lookup_name(name: &str) -> Option<&str> {
    let name = name.trim();
    (!name.is_empty()).then_some(name)
}

/// Drop stored categories that are empty or whitespace-only; they carry
/// no information worth suggesting back.
fn usable_suggestion(suggestion: Option<String>) -> Option<String> {
    suggestion.filter(|c| !c.trim().is_empty())
}

/// Read-side convenience over the item store. Categories are learned
/// from user input: whatever was ever entered becomes part of the
/// vocabulary, and adding an item with a known name suggests the
/// category it had last time.
pub struct CategoryAdvisor {
    store: Arc<ItemStore>,
}

impl CategoryAdvisor {
    pub fn new(store: Arc<ItemStore>) -> Self {
        Self { store }
    }

    /// All categories in use, straight from the store on every call.
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        self.store.distinct_categories().await
    }

    /// Category of the most recently purchased item with this name
    /// (case-insensitive), or `None` for a blank name or no match.
    pub async fn suggest_category(&self, name: &str) -> Result<Option<String>> {
        let Some(name) = lookup_name(name) else {
            return Ok(None);
        };

        let suggestion = self.store.find_category_by_name(name).await?;
        Ok(usable_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_never_looked_up() {
        assert_eq!(lookup_name(""), None);
        assert_eq!(lookup_name("   "), None);
        assert_eq!(lookup_name("\t\n"), None);
    }

    #[test]
    fn test_lookup_name_is_trimmed() {
        assert_eq!(lookup_name("  Milk  "), Some("Milk"));
        assert_eq!(lookup_name("Milk"), Some("Milk"));
    }

    #[test]
    fn test_empty_stored_category_is_not_suggested() {
        assert_eq!(usable_suggestion(None), None);
        assert_eq!(usable_suggestion(Some(String::new())), None);
        assert_eq!(usable_suggestion(Some("   ".to_string())), None);
    }

    #[test]
    fn test_stored_category_passes_through() {
        assert_eq!(
            usable_suggestion(Some("Dairy".to_string())),
            Some("Dairy".to_string())
        );
    }
}
