use serde::{Deserialize, Serialize};

/// Product attributes scraped from one catalog page.
///
/// Every field holds the text exactly as it appeared on the page. A field the
/// page did not provide is the empty string, so a partially filled record is
/// still a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureRecord {
    /// Display title of the catalog entry.
    pub name: String,
    pub original_name: String,
    pub price: String,
    pub release_date: String,
    pub manufacturer: String,
    pub scale: String,
    pub size: String,
    pub main_image_url: String,
}

impl FigureRecord {
    /// Returns `true` when nothing at all was scraped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_empty() {
        assert!(FigureRecord::default().is_empty());
    }

    #[test]
    fn record_with_one_field_is_not_empty() {
        let record = FigureRecord {
            scale: "1/7".to_string(),
            ..FigureRecord::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let record = FigureRecord {
            original_name: "Foo".to_string(),
            main_image_url: "http://img/1.png".to_string(),
            ..FigureRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["original_name"], "Foo");
        assert_eq!(json["main_image_url"], "http://img/1.png");
        assert_eq!(json["price"], "");
    }
}
