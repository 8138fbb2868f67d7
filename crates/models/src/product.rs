use sea_orm::{
    entity::prelude::*,
    sea_query::Expr,
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a product. The backend assigns `id`; `created_at` is stamped here
/// and `updated_at` stays empty until the first update.
pub async fn create(db: &DatabaseConnection, name: &str, price: f64) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        created_at: Set(Utc::now().into()),
        updated_at: Set(None),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All products in id order.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

/// Overwrite `name` and `price` and stamp `updated_at`. `id` and `created_at`
/// are never touched. Returns `None` when no such product exists.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    price: f64,
) -> Result<Option<Model>, errors::ModelError> {
    let Some(found) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut am: ActiveModel = found.into();
    am.name = Set(name.to_string());
    am.price = Set(price);
    am.updated_at = Set(Some(Utc::now().into()));
    Ok(Some(am.update(db).await?))
}

/// Hard delete. `false` when nothing matched.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Case-insensitive substring match on `name`. `%`, `_` and `!` in the needle
/// match literally. Both sides are folded by the database's `LOWER()`, which
/// is Unicode-aware on Postgres and ASCII-only on SQLite.
pub async fn find_by_name_containing(db: &DatabaseConnection, needle: &str) -> Result<Vec<Model>, errors::ModelError> {
    let pattern = format!("%{}%", escape_like(needle));
    let matches = Expr::cust_with_exprs(
        format!("LOWER($1) LIKE LOWER($2) ESCAPE '{LIKE_ESCAPE}'"),
        [Expr::col(Column::Name).into(), Expr::val(pattern).into()],
    );
    Ok(Entity::find()
        .filter(matches)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Inclusive price range; `min > max` matches nothing.
pub async fn find_by_price_between(db: &DatabaseConnection, min: f64, max: f64) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Price.between(min, max))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

const LIKE_ESCAPE: char = '!';

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod unit {
    use super::escape_like;

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("50%_off!"), "50!%!_off!!");
        assert_eq!(escape_like("widget"), "widget");
    }
}
