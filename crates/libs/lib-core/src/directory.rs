//! # Creator Directory
//!
//! Search and filter over the directory cards.

use shared::{Category, Creator, Platform};

/// Shown when a query matches nothing.
pub const EMPTY_MESSAGE: &str = "No creators found matching your criteria.";

/// Current search box and dropdown selections. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search: String,
    pub category: Option<Category>,
    pub platform: Option<Platform>,
}

impl DirectoryQuery {
    pub fn matches(&self, creator: &Creator) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = needle.is_empty()
            || [&creator.name, &creator.handle, &creator.bio]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        text_match
            && self.category.map_or(true, |c| creator.category == c)
            && self.platform.map_or(true, |p| creator.platforms.contains(&p))
    }
}

/// Creators matching `query`, in their original order.
pub fn filter_creators<'a>(creators: &'a [Creator], query: &DirectoryQuery) -> Vec<&'a Creator> {
    creators.iter().filter(|c| query.matches(c)).collect()
}

/// Categories offered by the directory dropdown, after "All Categories".
pub fn directory_categories(creators: &[Creator]) -> Vec<Category> {
    Category::ALL
        .into_iter()
        .filter(|c| creators.iter().any(|creator| creator.category == *c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CreatorStore;

    fn names(query: &DirectoryQuery) -> Vec<&'static str> {
        filter_creators(CreatorStore::directory(), query)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(names(&DirectoryQuery::default()).len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let by_name = DirectoryQuery {
            search: "ALEX".into(),
            ..Default::default()
        };
        assert_eq!(names(&by_name), ["Alex Morgan"]);

        let by_handle = DirectoryQuery {
            search: "@elenacooks".into(),
            ..Default::default()
        };
        assert_eq!(names(&by_handle), ["Elena Lopez"]);

        let by_bio = DirectoryQuery {
            search: "web3".into(),
            ..Default::default()
        };
        assert_eq!(names(&by_bio), ["Mike Chen", "David Kim"]);
    }

    #[test]
    fn test_category_and_platform_combine() {
        let query = DirectoryQuery {
            search: String::new(),
            category: Some(Category::Music),
            platform: Some(Platform::YouTube),
        };
        assert_eq!(names(&query), ["David Kim"]);

        let twitter = DirectoryQuery {
            platform: Some(Platform::Twitter),
            ..Default::default()
        };
        assert_eq!(names(&twitter).len(), 4);
    }

    #[test]
    fn test_no_match() {
        let query = DirectoryQuery {
            search: "zzz".into(),
            category: Some(Category::Photography),
            platform: None,
        };
        assert!(names(&query).is_empty());
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let padded = DirectoryQuery {
            search: "morgan ".into(),
            ..Default::default()
        };
        assert!(names(&padded).is_empty());

        let spaces = DirectoryQuery {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(names(&spaces).is_empty());
    }

    #[test]
    fn test_directory_categories() {
        let categories = directory_categories(CreatorStore::directory());
        assert_eq!(
            categories,
            [
                Category::DigitalArt,
                Category::Technology,
                Category::HealthFitness,
                Category::Music,
                Category::FoodCooking,
                Category::Photography,
            ]
        );
    }
}
