//! Martial soul records and tolerant per-entry parsing

use serde_json::Value;

/// One catalog entry. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MartialSoul {
    pub name: String,
    pub grade: i32,
    pub category: String,
    /// Affinity names in catalog order
    pub affinities: Vec<String>,
    pub description: String,
}

impl MartialSoul {
    /// Parse a single catalog entry.
    ///
    /// Returns `None` for anything that is not an object with a non-empty
    /// `name`. Missing or mistyped fields default to empty/zero; non-string
    /// elements inside `affinities` are skipped.
    pub fn from_value(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        if name.is_empty() {
            return None;
        }

        let grade = object
            .get("grade")
            .and_then(Value::as_i64)
            .unwrap_or_default() as i32;
        let category = object
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        let affinities = object
            .get("affinities")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name,
            grade,
            category,
            affinities,
            description,
        })
    }
}

/// Uppercase key used to count and deduplicate affinities
pub(crate) fn normalize_affinity(affinity: &str) -> String {
    affinity.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_entry() {
        let soul = MartialSoul::from_value(&json!({
            "name": "Azure Lynx",
            "grade": 6,
            "category": "beast",
            "affinities": ["wind", "lightning"],
            "description": "A prowler of moonlit terraces."
        }))
        .unwrap();

        assert_eq!(soul.name, "Azure Lynx");
        assert_eq!(soul.grade, 6);
        assert_eq!(soul.category, "beast");
        assert_eq!(soul.affinities, vec!["wind", "lightning"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let soul = MartialSoul::from_value(&json!({"name": "Bare"})).unwrap();
        assert_eq!(soul.grade, 0);
        assert!(soul.category.is_empty());
        assert!(soul.affinities.is_empty());
        assert!(soul.description.is_empty());
    }

    #[test]
    fn test_empty_name_dropped() {
        assert!(MartialSoul::from_value(&json!({"name": "", "grade": 9})).is_none());
        assert!(MartialSoul::from_value(&json!({"grade": 9})).is_none());
    }

    #[test]
    fn test_non_object_dropped() {
        assert!(MartialSoul::from_value(&json!("just a string")).is_none());
        assert!(MartialSoul::from_value(&json!(42)).is_none());
        assert!(MartialSoul::from_value(&json!(["name"])).is_none());
    }

    #[test]
    fn test_non_string_affinities_skipped() {
        let soul = MartialSoul::from_value(&json!({
            "name": "Patchy",
            "affinities": ["fire", 3, null, "ice"]
        }))
        .unwrap();
        assert_eq!(soul.affinities, vec!["fire", "ice"]);
    }
}
