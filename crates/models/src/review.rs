use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer review of a vehicle model. `model` refers to `vehicles.model` by
/// value only; no foreign key is declared on either side.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "rowid")]
    #[serde(skip)]
    pub row_id: i64,
    pub model: String,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}
