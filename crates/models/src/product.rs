use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the row, or overwrite every column of the row with the same id.
pub async fn upsert<C: ConnectionTrait>(db: &C, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(model.id.clone()),
        name: Set(model.name.clone()),
        price: Set(model.price),
        quantity: Set(model.quantity),
        category_id: Set(model.category_id),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([Column::Name, Column::Price, Column::Quantity, Column::CategoryId])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(model)
}

pub async fn find_by_category(db: &DatabaseConnection, category_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .all(db)
        .await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(res.rows_affected > 0)
}
