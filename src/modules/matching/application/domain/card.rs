//! Projection of loosely-shaped profile documents into fixed-shape cards.
//!
//! Every card key is always present: absent or null source values are
//! replaced with a documented default, never dropped.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::criteria::InvestmentCriteria;
use super::document::{array_at, f64_at, has_section, lookup, str_at};
use super::flags::flag_for;

const UNKNOWN: &str = "Unknown";
const UNTITLED: &str = "Untitled";
const NO_DESCRIPTION: &str = "No description";

/// Which endpoint a card is rendered for. The source role and the casing of
/// unknown location parts both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPerspective {
    MatchingStartups,
    MatchingInvestors,
    SearchStartups,
    StartupDetails,
}

impl CardPerspective {
    fn unknown_location(self) -> &'static str {
        match self {
            CardPerspective::MatchingInvestors => "unknown",
            _ => UNKNOWN,
        }
    }

    fn investor_sourced(self) -> bool {
        matches!(self, CardPerspective::MatchingInvestors)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CardHeadline {
    Startup { executive: String, title: String },
    Investor { name: String, bio: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CardLocation {
    pub country: String,
    pub city: String,
    pub flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum KeyPointValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct KeyPoint {
    pub label: String,
    pub value: KeyPointValue,
}

impl KeyPoint {
    fn number(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value: KeyPointValue::Number(value),
        }
    }

    fn text(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: KeyPointValue::Text(value.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct SuccessPrediction {
    pub score: Option<f64>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub profile_pic: Option<String>,
    pub cover_pic: Option<String>,
    #[serde(flatten)]
    pub headline: CardHeadline,
    pub location: CardLocation,
    pub description: String,
    pub key_points: Vec<KeyPoint>,
    pub total_required: f64,
    pub min_per_investor: f64,
    pub industries: Vec<String>,
    pub success_prediction: SuccessPrediction,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StartupDetails {
    #[serde(flatten)]
    pub card: Card,
    pub website: Option<String>,
    pub mobile_number: Option<String>,
    pub team: Vec<TeamMember>,
    pub pitch_deck: Option<String>,
}

/// `None` when the document lacks the role section the perspective expects.
pub fn project_card(doc: &Value, perspective: CardPerspective) -> Option<Card> {
    if perspective.investor_sourced() {
        investor_card(doc, perspective)
    } else {
        startup_card(doc, perspective)
    }
}

pub fn project_startup_details(doc: &Value) -> Option<StartupDetails> {
    let card = startup_card(doc, CardPerspective::StartupDetails)?;

    let team = array_at(doc, "startup.team")
        .iter()
        .map(|member| TeamMember {
            name: text_or(member, "name", UNKNOWN),
            role: text_or(member, "role", UNKNOWN),
        })
        .collect();

    Some(StartupDetails {
        card,
        website: owned(doc, "startup.website"),
        mobile_number: owned(doc, "startup.mobileNumber"),
        team,
        pitch_deck: owned(doc, "startup.pitchDeck"),
    })
}

fn startup_card(doc: &Value, perspective: CardPerspective) -> Option<Card> {
    if !has_section(doc, "startup") {
        return None;
    }

    let team = array_at(doc, "startup.team");
    let executive = team
        .first()
        .and_then(|lead| str_at(lead, "name"))
        .unwrap_or(UNKNOWN)
        .to_string();

    let industries = ["startup.industry1", "startup.industry2"]
        .iter()
        .filter_map(|slot| owned(doc, slot))
        .collect();

    Some(Card {
        id: id_of(doc),
        profile_pic: owned(doc, "profilePicture"),
        cover_pic: owned(doc, "coverPicture"),
        headline: CardHeadline::Startup {
            executive,
            title: text_or(doc, "startup.pitchTitle", UNTITLED),
        },
        location: location(doc, "startup.location", perspective),
        description: text_or(doc, "startup.description", NO_DESCRIPTION),
        key_points: vec![
            KeyPoint::text("Stage", text_or(doc, "startup.stage", UNKNOWN)),
            KeyPoint::number("Amount Raised", number(doc, "startup.amountRaised")),
            KeyPoint::number("Previous Funding", number(doc, "startup.previousFunding")),
            KeyPoint::number("Team Size", team.len() as f64),
        ],
        total_required: number(doc, "startup.fundingGoal.amount"),
        min_per_investor: number(doc, "startup.minInvestmentPerInvestor"),
        industries,
        success_prediction: SuccessPrediction {
            score: f64_at(doc, "startup.successPrediction.score"),
            details: owned(doc, "startup.successPrediction.details"),
        },
    })
}

fn investor_card(doc: &Value, perspective: CardPerspective) -> Option<Card> {
    let section = lookup(doc, "investor").filter(|_| has_section(doc, "investor"))?;

    // Unreadable criteria still produce a card, just without criteria data.
    let criteria = InvestmentCriteria::from_investor_section(section).unwrap_or_default();
    let range = criteria.investment_range.unwrap_or_default();

    let name = [str_at(doc, "firstName"), str_at(doc, "lastName")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let stages = criteria.stages().join(", ");

    Some(Card {
        id: id_of(doc),
        profile_pic: owned(doc, "profilePicture"),
        cover_pic: owned(doc, "coverPicture"),
        headline: CardHeadline::Investor {
            name: if name.is_empty() {
                UNKNOWN.to_string()
            } else {
                name
            },
            bio: text_or(section, "bio", UNTITLED),
        },
        location: location(doc, "", perspective),
        description: text_or(section, "description", NO_DESCRIPTION),
        key_points: vec![
            KeyPoint::text("Company", text_or(section, "company", UNKNOWN)),
            KeyPoint::text(
                "Preferred Stages",
                if stages.is_empty() {
                    UNKNOWN.to_string()
                } else {
                    stages
                },
            ),
            KeyPoint::number("Portfolio Size", number(section, "portfolioSize")),
        ],
        total_required: range.max,
        min_per_investor: range.min,
        industries: criteria.industries().into_iter().map(str::to_string).collect(),
        success_prediction: SuccessPrediction::default(),
    })
}

/// Location parts come from `prefix` (e.g. `startup.location`) and fall back
/// to the account's own country and city. An empty prefix reads the account
/// fields only.
fn location(doc: &Value, prefix: &str, perspective: CardPerspective) -> CardLocation {
    let part = |key: &str| {
        let nested = if prefix.is_empty() {
            None
        } else {
            str_at(doc, &format!("{prefix}.{key}"))
        };
        nested.or_else(|| str_at(doc, key))
    };

    let country = part("country");
    let city = part("city");
    let unknown = perspective.unknown_location();

    CardLocation {
        flag: country.and_then(flag_for).map(str::to_string),
        country: country.unwrap_or(unknown).to_string(),
        city: city.unwrap_or(unknown).to_string(),
    }
}

fn id_of(doc: &Value) -> String {
    match lookup(doc, "id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn owned(doc: &Value, path: &str) -> Option<String> {
    str_at(doc, path).map(str::to_string)
}

fn text_or(doc: &Value, path: &str, default: &str) -> String {
    str_at(doc, path).unwrap_or(default).to_string()
}

fn number(doc: &Value, path: &str) -> f64 {
    f64_at(doc, path).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_startup() -> Value {
        json!({"id": "a1", "role": "startup", "startup": {"stage": "idea"}})
    }

    fn full_startup() -> Value {
        json!({
            "id": "b2",
            "role": "startup",
            "country": "Ghana",
            "profilePicture": "https://img/p.png",
            "startup": {
                "pitchTitle": "Solar for schools",
                "description": "Rooftop kits",
                "industry1": "Energy",
                "industry2": null,
                "stage": "mvp",
                "location": {"country": "Kenya", "city": "Nairobi"},
                "fundingGoal": {"amount": 48000},
                "amountRaised": 12000,
                "minInvestmentPerInvestor": 1000,
                "team": [{"name": "Ada", "role": "CEO"}, {"name": "Ben"}],
                "successPrediction": {"score": 81.5, "details": "strong team"},
                "website": "https://solar.example",
                "pitchDeck": "https://deck.example"
            }
        })
    }

    #[test]
    fn minimal_startup_gets_every_default() {
        let card = project_card(&minimal_startup(), CardPerspective::MatchingStartups).unwrap();

        assert_eq!(card.profile_pic, None);
        assert_eq!(card.cover_pic, None);
        assert_eq!(
            card.headline,
            CardHeadline::Startup {
                executive: "Unknown".to_string(),
                title: "Untitled".to_string()
            }
        );
        assert_eq!(
            card.location,
            CardLocation {
                country: "Unknown".to_string(),
                city: "Unknown".to_string(),
                flag: None
            }
        );
        assert_eq!(card.description, "No description");
        assert_eq!(card.total_required, 0.0);
        assert_eq!(card.min_per_investor, 0.0);
        assert!(card.industries.is_empty());
        assert_eq!(card.success_prediction, SuccessPrediction::default());
        assert_eq!(card.key_points.len(), 4);
        assert_eq!(card.key_points[3], KeyPoint::number("Team Size", 0.0));
    }

    #[test]
    fn minimal_card_serializes_every_key() {
        let card = project_card(&minimal_startup(), CardPerspective::SearchStartups).unwrap();
        let json = serde_json::to_value(&card).unwrap();

        for key in [
            "id",
            "profilePic",
            "coverPic",
            "executive",
            "title",
            "location",
            "description",
            "keyPoints",
            "totalRequired",
            "minPerInvestor",
            "industries",
            "successPrediction",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["profilePic"], Value::Null);
        assert_eq!(json["successPrediction"], json!({"score": null, "details": null}));
        assert_eq!(json["location"]["flag"], Value::Null);
    }

    #[test]
    fn full_startup_is_projected() {
        let card = project_card(&full_startup(), CardPerspective::MatchingStartups).unwrap();

        assert_eq!(card.id, "b2");
        assert_eq!(card.profile_pic.as_deref(), Some("https://img/p.png"));
        assert_eq!(
            card.headline,
            CardHeadline::Startup {
                executive: "Ada".to_string(),
                title: "Solar for schools".to_string()
            }
        );
        assert_eq!(card.location.country, "Kenya");
        assert_eq!(card.location.flag.as_deref(), Some("🇰🇪"));
        assert_eq!(card.industries, vec!["Energy".to_string()]);
        assert_eq!(card.total_required, 48000.0);
        assert_eq!(card.min_per_investor, 1000.0);
        assert_eq!(card.success_prediction.score, Some(81.5));
        assert_eq!(
            card.key_points,
            vec![
                KeyPoint::text("Stage", "mvp"),
                KeyPoint::number("Amount Raised", 12000.0),
                KeyPoint::number("Previous Funding", 0.0),
                KeyPoint::number("Team Size", 2.0),
            ]
        );
    }

    #[test]
    fn industries_keep_slot_order_and_drop_blanks() {
        let doc = json!({"startup": {"industry1": "", "industry2": "Retail"}});
        let card = project_card(&doc, CardPerspective::SearchStartups).unwrap();
        assert_eq!(card.industries, vec!["Retail".to_string()]);

        let doc = json!({"startup": {"industry1": "Health", "industry2": "Retail"}});
        let card = project_card(&doc, CardPerspective::SearchStartups).unwrap();
        assert_eq!(card.industries, vec!["Health".to_string(), "Retail".to_string()]);
    }

    #[test]
    fn startup_location_falls_back_to_account() {
        let doc = json!({"country": "Ghana", "startup": {"stage": "idea"}});
        let card = project_card(&doc, CardPerspective::SearchStartups).unwrap();
        assert_eq!(card.location.country, "Ghana");
        assert_eq!(card.location.city, "Unknown");
    }

    #[test]
    fn missing_section_is_dropped() {
        assert!(project_card(&json!({"id": "x"}), CardPerspective::MatchingStartups).is_none());
        assert!(project_card(&json!({"startup": {}}), CardPerspective::SearchStartups).is_none());
        assert!(
            project_card(&json!({"startup": {"stage": "idea"}}), CardPerspective::MatchingInvestors)
                .is_none()
        );
    }

    #[test]
    fn investor_card_uses_lowercase_unknown_and_investor_fields() {
        let doc = json!({
            "id": "inv-1",
            "firstName": "Grace",
            "lastName": "Hopper",
            "investor": {
                "bio": "Operator turned angel",
                "company": "Hopper Capital",
                "portfolioSize": 12,
                "investmentCriteria": {
                    "industries": ["Fintech", " "],
                    "stage": ["seed", "growth"],
                    "investmentRange": {"min": 5000, "max": 50000}
                }
            }
        });
        let card = project_card(&doc, CardPerspective::MatchingInvestors).unwrap();

        assert_eq!(
            card.headline,
            CardHeadline::Investor {
                name: "Grace Hopper".to_string(),
                bio: "Operator turned angel".to_string()
            }
        );
        assert_eq!(card.location.country, "unknown");
        assert_eq!(card.location.city, "unknown");
        assert_eq!(card.total_required, 50000.0);
        assert_eq!(card.min_per_investor, 5000.0);
        assert_eq!(card.industries, vec!["Fintech".to_string()]);
        assert_eq!(
            card.key_points,
            vec![
                KeyPoint::text("Company", "Hopper Capital"),
                KeyPoint::text("Preferred Stages", "seed, growth"),
                KeyPoint::number("Portfolio Size", 12.0),
            ]
        );

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["name"], "Grace Hopper");
        assert!(json.get("executive").is_none());
    }

    #[test]
    fn minimal_investor_card() {
        let doc = json!({"id": "inv-2", "country": "Nigeria", "investor": {"bio": ""}});
        let card = project_card(&doc, CardPerspective::MatchingInvestors);
        // an investor section holding only a blank bio still counts as set
        let card = card.unwrap();

        assert_eq!(
            card.headline,
            CardHeadline::Investor {
                name: "Unknown".to_string(),
                bio: "Untitled".to_string()
            }
        );
        assert_eq!(card.location.country, "Nigeria");
        assert_eq!(card.location.flag.as_deref(), Some("🇳🇬"));
        assert_eq!(card.location.city, "unknown");
        assert_eq!(card.total_required, 0.0);
        assert_eq!(card.key_points[1], KeyPoint::text("Preferred Stages", "Unknown"));
    }

    #[test]
    fn details_add_contact_and_team() {
        let details = project_startup_details(&full_startup()).unwrap();

        assert_eq!(details.website.as_deref(), Some("https://solar.example"));
        assert_eq!(details.mobile_number, None);
        assert_eq!(details.pitch_deck.as_deref(), Some("https://deck.example"));
        assert_eq!(
            details.team,
            vec![
                TeamMember {
                    name: "Ada".to_string(),
                    role: "CEO".to_string()
                },
                TeamMember {
                    name: "Ben".to_string(),
                    role: "Unknown".to_string()
                },
            ]
        );

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["title"], "Solar for schools");
        assert_eq!(json["mobileNumber"], Value::Null);
    }
}
