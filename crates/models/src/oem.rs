use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Original equipment manufacturer with its local contact details.
///
/// The `oems` table carries no declared key, so the SQLite `rowid` stands in as
/// the entity key. Reads select named columns only and never expose it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "oems")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "rowid")]
    #[serde(skip)]
    pub row_id: i64,
    pub name: String,
    pub contact: Option<String>,
    pub city: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}
