use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::profile::application::domain::entities::{Role, UserView};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_picture: Option<String>,
    pub role: String,
    pub password_hash: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub investor: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub startup: Option<Json>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = ActiveValue::Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}

impl Model {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    /// The record without its password hash.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            profile_picture: self.profile_picture.clone(),
            cover_picture: self.cover_picture.clone(),
            role: self.role(),
            investor: self.investor.clone(),
            startup: self.startup.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }

    /// The record as a camelCase document for filter evaluation and card
    /// projection. Absent optional columns are left out.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("id".into(), json!(self.id.to_string()));
        doc.insert("firstName".into(), json!(self.first_name));
        doc.insert("lastName".into(), json!(self.last_name));
        doc.insert("email".into(), json!(self.email));
        doc.insert("role".into(), json!(self.role));

        let optional = [
            ("phone", &self.phone),
            ("country", &self.country),
            ("city", &self.city),
            ("profilePicture", &self.profile_picture),
            ("coverPicture", &self.cover_picture),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                doc.insert(key.into(), json!(value));
            }
        }

        for (key, section) in [("investor", &self.investor), ("startup", &self.startup)] {
            if let Some(section) = section {
                doc.insert(key.into(), section.clone());
            }
        }

        Value::Object(doc)
    }
}
