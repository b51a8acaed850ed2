use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{f64_at, lookup, str_at};

/// Relaxed matching widens declared amounts by this share in both directions.
pub const AMOUNT_TOLERANCE: f64 = 0.10;

/// Preference stages an investor may declare.
///
/// Distinct from [`StartupStage`]: stored criteria are compared to startup
/// stages verbatim, so an investor preferring `seed` only meets startups
/// whose stage string is literally `seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestorStage {
    Seed,
    EarlyStage,
    Growth,
    LateStage,
}

impl InvestorStage {
    pub const ALL: [InvestorStage; 4] = [
        InvestorStage::Seed,
        InvestorStage::EarlyStage,
        InvestorStage::Growth,
        InvestorStage::LateStage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestorStage::Seed => "seed",
            InvestorStage::EarlyStage => "early-stage",
            InvestorStage::Growth => "growth",
            InvestorStage::LateStage => "late-stage",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == raw)
    }
}

/// Lifecycle stage of a startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupStage {
    Idea,
    Prototype,
    Mvp,
    Scaling,
}

impl StartupStage {
    pub const ALL: [StartupStage; 4] = [
        StartupStage::Idea,
        StartupStage::Prototype,
        StartupStage::Mvp,
        StartupStage::Scaling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StartupStage::Idea => "idea",
            StartupStage::Prototype => "prototype",
            StartupStage::Mvp => "mvp",
            StartupStage::Scaling => "scaling",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationPreference {
    pub country: Option<String>,
    pub city: Option<String>,
}

impl LocationPreference {
    pub fn country(&self) -> Option<&str> {
        non_blank(self.country.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
    }

    pub fn is_blank(&self) -> bool {
        self.country().is_none() && self.city().is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentRange {
    pub min: f64,
    pub max: f64,
}

/// Upper end of an amount range. A stored `max` of 0 means "not stated".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountBound {
    Finite(f64),
    Unbounded,
}

impl AmountBound {
    /// Upper edge of the tolerance band; `Unbounded` stays unbounded.
    pub fn raised(self) -> AmountBound {
        match self {
            AmountBound::Finite(max) => AmountBound::Finite(raise(max)),
            AmountBound::Unbounded => AmountBound::Unbounded,
        }
    }
}

impl InvestmentRange {
    pub fn is_stated(&self) -> bool {
        self.min > 0.0 || self.max > 0.0
    }

    pub fn upper_bound(&self) -> AmountBound {
        if self.max > 0.0 {
            AmountBound::Finite(self.max)
        } else {
            AmountBound::Unbounded
        }
    }

    pub fn lowered_min(&self) -> f64 {
        lower(self.min)
    }
}

pub fn lower(amount: f64) -> f64 {
    amount * (1.0 - AMOUNT_TOLERANCE)
}

pub fn raise(amount: f64) -> f64 {
    amount * (1.0 + AMOUNT_TOLERANCE)
}

/// An investor's stored preferences (`investor.investmentCriteria`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestmentCriteria {
    pub industries: Vec<String>,
    pub stage: Vec<String>,
    pub locations: Vec<LocationPreference>,
    pub investment_range: Option<InvestmentRange>,
}

impl InvestmentCriteria {
    /// Reads the criteria from an investor section. A section without
    /// criteria yields empty criteria.
    pub fn from_investor_section(section: &Value) -> Result<Self, serde_json::Error> {
        match lookup(section, "investmentCriteria") {
            Some(raw) => serde_json::from_value(raw.clone()),
            None => Ok(Self::default()),
        }
    }

    pub fn industries(&self) -> Vec<&str> {
        self.industries
            .iter()
            .filter_map(|i| non_blank(Some(i.as_str())))
            .collect()
    }

    pub fn stages(&self) -> Vec<&str> {
        self.stage
            .iter()
            .filter_map(|s| non_blank(Some(s.as_str())))
            .collect()
    }

    /// Stored stages that no startup can ever carry.
    pub fn stages_outside_startup_lifecycle(&self) -> Vec<&str> {
        self.stages()
            .into_iter()
            .filter(|s| StartupStage::parse(s).is_none())
            .collect()
    }
}

/// The attributes of a startup profile that drive matching toward investors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupAttributes {
    /// Non-empty values of `industry1` then `industry2`.
    pub industries: Vec<String>,
    pub stage: Option<String>,
    pub location: LocationPreference,
    pub funding_goal: Option<f64>,
}

impl StartupAttributes {
    pub fn from_startup_section(section: &Value) -> Self {
        let industries = ["industry1", "industry2"]
            .iter()
            .filter_map(|slot| str_at(section, slot))
            .map(str::to_string)
            .collect();

        Self {
            industries,
            stage: str_at(section, "stage").map(str::to_string),
            location: LocationPreference {
                country: str_at(section, "location.country").map(str::to_string),
                city: str_at(section, "location.city").map(str::to_string),
            },
            funding_goal: f64_at(section, "fundingGoal.amount").filter(|amount| *amount > 0.0),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
