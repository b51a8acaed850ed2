//! Edits to the `investor` profile section: criteria replacement and
//! PATCH-style profile field updates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::matching::application::domain::criteria::{
    InvestmentCriteria, InvestmentRange, InvestorStage, LocationPreference,
};

const CRITERIA_KEY: &str = "investmentCriteria";
const MAX_TEXT_LEN: usize = 2000;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - omitted => Unset, keep stored value
// - null => Null, remove stored value
// - value => Value(v), replace
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Accepts either a single value or a list of values. `Many` is tried
/// first so that `[]` stays an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangeInput {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Partial criteria. Supplied fields replace the stored ones, omitted fields
/// are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CriteriaUpdate {
    #[schema(value_type = Option<Vec<String>>)]
    pub industries: Option<OneOrMany<String>>,
    #[schema(value_type = Option<Vec<String>>)]
    pub stage: Option<OneOrMany<String>>,
    #[schema(value_type = Option<Vec<Object>>)]
    pub locations: Option<OneOrMany<LocationPreference>>,
    pub investment_range: Option<RangeInput>,
}

impl CriteriaUpdate {
    /// Every problem found, in field order.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(industries) = &self.industries {
            if industries_of(industries).iter().any(|i| i.trim().is_empty()) {
                problems.push("industries must not contain empty values".to_string());
            }
        }

        if let Some(stage) = &self.stage {
            for raw in stages_of(stage) {
                if InvestorStage::parse(raw).is_none() {
                    problems.push(format!(
                        "Invalid stage '{raw}'. Must be one of: seed, early-stage, growth, late-stage"
                    ));
                }
            }
        }

        if let Some(range) = &self.investment_range {
            let min = range.min.unwrap_or(0.0);
            let max = range.max.unwrap_or(0.0);
            if !min.is_finite() || min < 0.0 {
                problems.push("investmentRange.min must be a non-negative number".to_string());
            }
            if !max.is_finite() || max < 0.0 {
                problems.push("investmentRange.max must be a non-negative number".to_string());
            }
            if max > 0.0 && min > max {
                problems.push(
                    "investmentRange.min must not exceed investmentRange.max".to_string(),
                );
            }
        }

        problems
    }

    pub fn apply_to(self, mut criteria: InvestmentCriteria) -> InvestmentCriteria {
        if let Some(industries) = self.industries {
            criteria.industries = industries
                .into_vec()
                .into_iter()
                .map(|i| i.trim().to_string())
                .collect();
        }
        if let Some(stage) = self.stage {
            criteria.stage = stage.into_vec();
        }
        if let Some(locations) = self.locations {
            criteria.locations = locations.into_vec();
        }
        if let Some(range) = self.investment_range {
            criteria.investment_range = Some(InvestmentRange {
                min: range.min.unwrap_or(0.0),
                max: range.max.unwrap_or(0.0),
            });
        }
        criteria
    }
}

fn industries_of(value: &OneOrMany<String>) -> Vec<&String> {
    match value {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items.iter().collect(),
    }
}

fn stages_of(value: &OneOrMany<String>) -> Vec<&str> {
    match value {
        OneOrMany::One(item) => vec![item.as_str()],
        OneOrMany::Many(items) => items.iter().map(String::as_str).collect(),
    }
}

/// Writes `criteria` into an investor section, keeping every other key.
pub fn with_criteria(
    section: Option<Value>,
    criteria: &InvestmentCriteria,
) -> Result<Value, serde_json::Error> {
    let mut map = into_map(section);
    map.insert(CRITERIA_KEY.to_string(), serde_json::to_value(criteria)?);
    Ok(Value::Object(map))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestorProfilePatch {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub company: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[serde(default, rename = "linkedIn")]
    #[schema(value_type = Option<String>)]
    pub linked_in: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub portfolio_size: PatchField<f64>,
}

impl InvestorProfilePatch {
    fn text_fields(&self) -> [(&'static str, &PatchField<String>); 6] {
        [
            ("title", &self.title),
            ("bio", &self.bio),
            ("description", &self.description),
            ("company", &self.company),
            ("website", &self.website),
            ("linkedIn", &self.linked_in),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.text_fields().iter().all(|(_, f)| f.is_unset()) && self.portfolio_size.is_unset()
    }

    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (key, field) in self.text_fields() {
            if let Some(text) = field.as_value() {
                if text.chars().count() > MAX_TEXT_LEN {
                    problems.push(format!("{key} must be at most {MAX_TEXT_LEN} characters"));
                }
            }
        }

        for (key, field) in [("website", &self.website), ("linkedIn", &self.linked_in)] {
            if let Some(url) = field.as_value() {
                let url = url.trim();
                if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
                    problems.push(format!("{key} must be an http(s) URL"));
                }
            }
        }

        if let Some(size) = self.portfolio_size.as_value() {
            if !size.is_finite() || *size < 0.0 {
                problems.push("portfolioSize must be a non-negative number".to_string());
            }
        }

        problems
    }

    /// Applies the patch over an investor section, keeping untouched keys
    /// (including `investmentCriteria`).
    pub fn apply_to(self, section: Option<Value>) -> Value {
        let mut map = into_map(section);

        let portfolio_size = match self.portfolio_size {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(n) => PatchField::Value(Value::from(n)),
        };

        let text = |field: PatchField<String>| match field {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(s) => PatchField::Value(Value::String(s.trim().to_string())),
        };

        let fields = [
            ("title", text(self.title)),
            ("bio", text(self.bio)),
            ("description", text(self.description)),
            ("company", text(self.company)),
            ("website", text(self.website)),
            ("linkedIn", text(self.linked_in)),
            ("portfolioSize", portfolio_size),
        ];

        for (key, field) in fields {
            match field {
                PatchField::Unset => {}
                PatchField::Null => {
                    map.remove(key);
                }
                PatchField::Value(value) => {
                    map.insert(key.to_string(), value);
                }
            }
        }

        Value::Object(map)
    }
}

fn into_map(section: Option<Value>) -> Map<String, Value> {
    match section {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
