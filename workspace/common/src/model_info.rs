use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Shown in place of the metadata when `/model-info` cannot be loaded.
pub const MODEL_INFO_UNAVAILABLE: &str = "Model info not available.";

/// Per-feature weight of the trained model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    pub label: String,
    pub score: f64,
}

/// Feature importances in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureImportances(Vec<FeatureImportance>);

impl FeatureImportances {
    pub fn iter(&self) -> impl Iterator<Item = &FeatureImportance> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for FeatureImportances {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, score)| FeatureImportance { label, score })
                .collect(),
        )
    }
}

impl Serialize for FeatureImportances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for item in &self.0 {
            map.serialize_entry(&item.label, &item.score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureImportances {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ImportancesVisitor;

        impl<'de> Visitor<'de> for ImportancesVisitor {
            type Value = FeatureImportances;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of feature name to importance score")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, score)) = access.next_entry::<String, f64>()? {
                    items.push(FeatureImportance { label, score });
                }
                Ok(FeatureImportances(items))
            }
        }

        deserializer.deserialize_map(ImportancesVisitor)
    }
}

/// Response of `GET /model-info`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelMeta {
    #[serde(default)]
    pub trained_on: Option<String>,
    #[serde(default)]
    pub trained_at: Option<String>,
    #[serde(default)]
    pub train_r2: Option<f64>,
    #[serde(default)]
    pub test_r2: Option<f64>,
    #[serde(default)]
    pub importances: Option<FeatureImportances>,
}

impl ModelMeta {
    pub fn trained_on_label(&self) -> &str {
        non_empty(self.trained_on.as_deref()).unwrap_or("unknown")
    }

    pub fn trained_at_label(&self) -> &str {
        non_empty(self.trained_at.as_deref()).unwrap_or("n/a")
    }

    pub fn train_r2_label(&self) -> String {
        format!("{:.3}", self.train_r2.unwrap_or(0.0))
    }

    pub fn test_r2_label(&self) -> String {
        format!("{:.3}", self.test_r2.unwrap_or(0.0))
    }

    pub fn importances(&self) -> FeatureImportances {
        self.importances.clone().unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_metadata_keeps_importance_order() {
        let meta: ModelMeta = serde_json::from_str(
            r#"{
                "trained_on": "/data/50_Startups.csv",
                "train_r2": 0.98765,
                "test_r2": 0.9,
                "trained_at": "2024-05-01T10:00:00Z",
                "importances": {"R&D Spend": 0.8, "Administration": 0.05, "Marketing Spend": 0.14, "State": 0.01}
            }"#,
        )
        .unwrap();

        assert_eq!(meta.trained_on_label(), "/data/50_Startups.csv");
        assert_eq!(meta.trained_at_label(), "2024-05-01T10:00:00Z");
        assert_eq!(meta.train_r2_label(), "0.988");
        assert_eq!(meta.test_r2_label(), "0.900");

        let importances = meta.importances();
        let labels: Vec<&str> = importances.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["R&D Spend", "Administration", "Marketing Spend", "State"]);
    }

    #[test]
    fn missing_fields_fall_back() {
        let meta: ModelMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.trained_on_label(), "unknown");
        assert_eq!(meta.trained_at_label(), "n/a");
        assert_eq!(meta.train_r2_label(), "0.000");
        assert!(meta.importances().is_empty());
    }

    #[test]
    fn non_numeric_importance_is_rejected() {
        let result = serde_json::from_str::<ModelMeta>(r#"{"importances": {"State": "high"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn importances_serialize_back_to_a_map() {
        let importances: FeatureImportances =
            vec![("b".to_string(), 0.25), ("a".to_string(), 0.75)].into_iter().collect();
        assert_eq!(serde_json::to_string(&importances).unwrap(), r#"{"b":0.25,"a":0.75}"#);
    }
}
