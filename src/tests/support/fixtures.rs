use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::matching::application::domain::card::{
    Card, CardHeadline, CardLocation, KeyPoint, KeyPointValue, SuccessPrediction,
};
use crate::profile::application::domain::entities::{Role, UserView};

pub fn user_view(id: Uuid) -> UserView {
    let now = Utc::now();
    UserView {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        country: Some("Kenya".to_string()),
        city: Some("Nairobi".to_string()),
        profile_picture: None,
        cover_picture: None,
        role: Role::Investor,
        investor: Some(json!({ "bio": "Angel investor" })),
        startup: None,
        created_at: now,
        updated_at: now,
    }
}

fn unknown_location() -> CardLocation {
    CardLocation {
        country: "Unknown".to_string(),
        city: "Unknown".to_string(),
        flag: None,
    }
}

pub fn startup_card(title: &str) -> Card {
    Card {
        id: Uuid::new_v4().to_string(),
        profile_pic: None,
        cover_pic: None,
        headline: CardHeadline::Startup {
            executive: "Unknown".to_string(),
            title: title.to_string(),
        },
        location: unknown_location(),
        description: "No description".to_string(),
        key_points: vec![KeyPoint {
            label: "Stage".to_string(),
            value: KeyPointValue::Text("mvp".to_string()),
        }],
        total_required: 50000.0,
        min_per_investor: 0.0,
        industries: vec!["Technology".to_string()],
        success_prediction: SuccessPrediction::default(),
    }
}

pub fn investor_card(name: &str) -> Card {
    Card {
        id: Uuid::new_v4().to_string(),
        profile_pic: None,
        cover_pic: None,
        headline: CardHeadline::Investor {
            name: name.to_string(),
            bio: "Untitled".to_string(),
        },
        location: CardLocation {
            country: "unknown".to_string(),
            city: "unknown".to_string(),
            flag: None,
        },
        description: "No description".to_string(),
        key_points: vec![KeyPoint {
            label: "Portfolio Size".to_string(),
            value: KeyPointValue::Number(3.0),
        }],
        total_required: 0.0,
        min_per_investor: 0.0,
        industries: vec![],
        success_prediction: SuccessPrediction::default(),
    }
}
