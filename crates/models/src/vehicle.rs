use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A dealer listing for a vehicle model. The same model may be listed by
/// several dealers, so `model` groups rows but does not identify one.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "rowid")]
    #[serde(skip)]
    pub row_id: i64,
    pub model: String,
    pub dealer: String,
    #[sea_orm(column_name = "type")]
    pub vehicle_type: String,
    /// Price in lakhs (1 lakh = 100,000).
    #[sea_orm(column_type = "Double")]
    pub price_lakhs: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation { fn def(&self) -> RelationDef { panic!("no relations") } }

impl ActiveModelBehavior for ActiveModel {}
