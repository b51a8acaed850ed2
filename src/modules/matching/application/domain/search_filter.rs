//! Explicit startup search. Unlike relaxed matching, every supplied
//! parameter is mandatory and amounts are compared without tolerance.

use serde::Deserialize;
use utoipa::IntoParams;

use super::criteria::StartupStage;
use super::filter::FilterExpr;
use super::relaxed_match::hard_conditions;
use crate::profile::application::domain::entities::Role;

/// Query parameters exactly as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchStartupsQuery {
    pub industry: Option<String>,
    pub stage: Option<String>,
    pub min_funding: Option<String>,
    pub max_funding: Option<String>,
    pub min_success_score: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchParamsError {
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("minSuccessScore must be between 0 and 100")]
    SuccessScoreOutOfRange,

    #[error("Invalid stage '{0}'. Must be one of: idea, prototype, mvp, scaling")]
    UnknownStage(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub industry: Option<String>,
    pub stage: Option<StartupStage>,
    pub min_funding: Option<f64>,
    pub max_funding: Option<f64>,
    pub min_success_score: Option<f64>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl SearchParams {
    pub fn parse(raw: SearchStartupsQuery) -> Result<Self, SearchParamsError> {
        let stage = match supplied(raw.stage) {
            Some(stage) => Some(
                StartupStage::parse(&stage).ok_or(SearchParamsError::UnknownStage(stage))?,
            ),
            None => None,
        };

        let min_success_score = number("minSuccessScore", raw.min_success_score)?;
        if let Some(score) = min_success_score {
            if !(0.0..=100.0).contains(&score) {
                return Err(SearchParamsError::SuccessScoreOutOfRange);
            }
        }

        Ok(Self {
            industry: supplied(raw.industry),
            stage,
            min_funding: number("minFunding", raw.min_funding)?,
            max_funding: number("maxFunding", raw.max_funding)?,
            min_success_score,
            country: supplied(raw.country),
            city: supplied(raw.city),
        })
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn number(field: &'static str, value: Option<String>) -> Result<Option<f64>, SearchParamsError> {
    match supplied(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or(SearchParamsError::NotANumber { field }),
    }
}

pub fn build_search_filter(params: &SearchParams) -> FilterExpr {
    let mut all = hard_conditions(Role::Startup);

    if let Some(industry) = &params.industry {
        all.push(FilterExpr::or(vec![
            FilterExpr::eq("startup.industry1", industry.as_str()),
            FilterExpr::eq("startup.industry2", industry.as_str()),
        ]));
    }
    if let Some(stage) = params.stage {
        all.push(FilterExpr::eq("startup.stage", stage.as_str()));
    }
    if let Some(min) = params.min_funding {
        all.push(FilterExpr::gte("startup.fundingGoal.amount", min));
    }
    if let Some(max) = params.max_funding {
        all.push(FilterExpr::lte("startup.fundingGoal.amount", max));
    }
    if let Some(score) = params.min_success_score {
        all.push(FilterExpr::gte("startup.successPrediction.score", score));
    }
    if let Some(country) = &params.country {
        all.push(FilterExpr::eq("startup.location.country", country.as_str()));
    }
    if let Some(city) = &params.city {
        all.push(FilterExpr::eq("startup.location.city", city.as_str()));
    }

    FilterExpr::and(all)
}
