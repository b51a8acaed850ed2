//! Relaxed matching: a candidate qualifies when it passes the hard role and
//! profile checks and satisfies at least one optional criteria dimension.

use serde_json::Value;

use super::criteria::{lower, raise, AmountBound, InvestmentCriteria, StartupAttributes};
use super::filter::{Condition, FilterExpr};
use crate::profile::application::domain::entities::Role;

/// What the caller brings to the match: its own stored preferences or
/// attributes, depending on which side it is on.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchSubject {
    Investor(InvestmentCriteria),
    Startup(StartupAttributes),
}

pub fn build_relaxed_match(own: &MatchSubject, target: Role) -> FilterExpr {
    let mut all = hard_conditions(target);

    let optional = match own {
        MatchSubject::Investor(criteria) => startup_clauses(criteria),
        MatchSubject::Startup(attributes) => investor_clauses(attributes),
    };

    if !optional.is_empty() {
        all.push(FilterExpr::or(optional));
    }

    FilterExpr::and(all)
}

pub fn hard_conditions(target: Role) -> Vec<FilterExpr> {
    vec![
        FilterExpr::eq("role", target.as_str()),
        FilterExpr::test(target.section_key(), Condition::NonEmpty),
    ]
}

// investor -> startup
fn startup_clauses(criteria: &InvestmentCriteria) -> Vec<FilterExpr> {
    let mut clauses = Vec::new();

    let industries = criteria.industries();
    if !industries.is_empty() {
        clauses.push(FilterExpr::or(vec![
            FilterExpr::is_in("startup.industry1", industries.clone()),
            FilterExpr::is_in("startup.industry2", industries),
        ]));
    }

    let stages = criteria.stages();
    if !stages.is_empty() {
        clauses.push(FilterExpr::is_in("startup.stage", stages));
    }

    if !criteria.locations.is_empty() {
        let per_entry = criteria
            .locations
            .iter()
            .map(|location| {
                let mut tests = Vec::new();
                if let Some(country) = location.country() {
                    tests.push(FilterExpr::eq("startup.location.country", country));
                }
                if let Some(city) = location.city() {
                    tests.push(FilterExpr::eq("startup.location.city", city));
                }

                // An entry with neither part matches every startup.
                if tests.is_empty() {
                    FilterExpr::Always
                } else {
                    FilterExpr::or(tests)
                }
            })
            .collect();
        clauses.push(FilterExpr::or(per_entry));
    }

    if let Some(range) = criteria.investment_range.filter(|r| r.is_stated()) {
        let mut band = vec![FilterExpr::gte(
            "startup.fundingGoal.amount",
            range.lowered_min(),
        )];
        if let AmountBound::Finite(raised_max) = range.upper_bound().raised() {
            band.push(FilterExpr::lte("startup.fundingGoal.amount", raised_max));
        }
        clauses.push(FilterExpr::and(band));
    }

    clauses
}

// startup -> investor
fn investor_clauses(attributes: &StartupAttributes) -> Vec<FilterExpr> {
    const CRITERIA: &str = "investor.investmentCriteria";
    let mut clauses = Vec::new();

    if !attributes.industries.is_empty() {
        clauses.push(FilterExpr::is_in(
            format!("{CRITERIA}.industries"),
            attributes.industries.iter().map(String::as_str),
        ));
    }

    if let Some(stage) = attributes.stage.as_deref() {
        clauses.push(FilterExpr::is_in(format!("{CRITERIA}.stage"), [stage]));
    }

    if !attributes.location.is_blank() {
        let mut tests = Vec::new();
        if let Some(country) = attributes.location.country() {
            tests.push(FilterExpr::eq("country", country));
        }
        if let Some(city) = attributes.location.city() {
            tests.push(FilterExpr::eq("city", city));
        }
        clauses.push(FilterExpr::test(
            format!("{CRITERIA}.locations"),
            Condition::ElemMatch(Box::new(FilterExpr::or(tests))),
        ));
    }

    if let Some(goal) = attributes.funding_goal {
        let max = format!("{CRITERIA}.investmentRange.max");
        clauses.push(FilterExpr::or(vec![
            FilterExpr::lte(format!("{CRITERIA}.investmentRange.min"), raise(goal)),
            FilterExpr::gte(max.clone(), lower(goal)),
            // A zero or absent max is unbounded and covers any goal.
            FilterExpr::lte(max.clone(), 0.0),
            FilterExpr::test(max, Condition::Missing),
            FilterExpr::test(format!("{CRITERIA}.investmentRange"), Condition::Missing),
        ]));
    }

    clauses
}

/// Builds the subject for a startup from its stored section.
pub fn startup_subject(section: &Value) -> MatchSubject {
    MatchSubject::Startup(StartupAttributes::from_startup_section(section))
}
