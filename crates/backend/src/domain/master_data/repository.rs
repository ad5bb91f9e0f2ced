use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, QueryOrder, Set};

/// One master-data record of any collection; the record itself is the
/// JSON `payload`, `code` and `is_active` are copies kept for querying.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "master_data_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub collection: String,
    pub code: String,
    pub is_active: bool,
    pub payload: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list<C: ConnectionTrait>(db: &C, collection: &str) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Collection.eq(collection))
        .order_by_asc(Column::Code)
        .order_by_asc(Column::Id)
        .all(db)
        .await
}

pub async fn find<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    id: i64,
) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id)
        .filter(Column::Collection.eq(collection))
        .one(db)
        .await
}

/// Whether another row of the collection already uses `code`
pub async fn code_taken<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    code: &str,
    except_id: Option<i64>,
) -> Result<bool, DbErr> {
    let mut query = Entity::find()
        .filter(Column::Collection.eq(collection))
        .filter(Column::Code.eq(code));
    if let Some(id) = except_id {
        query = query.filter(Column::Id.ne(id));
    }
    Ok(query.one(db).await?.is_some())
}

pub async fn codes_with_prefix<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    prefix: &str,
) -> Result<Vec<String>, DbErr> {
    let rows = Entity::find()
        .filter(Column::Collection.eq(collection))
        .filter(Column::Code.starts_with(prefix))
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|m| m.code).collect())
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    collection: &str,
    code: &str,
    is_active: bool,
    payload: String,
) -> Result<Model, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        collection: Set(collection.to_string()),
        code: Set(code.to_string()),
        is_active: Set(is_active),
        payload: Set(payload),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    active.insert(db).await
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i64,
    code: &str,
    is_active: bool,
    payload: String,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(id),
        collection: NotSet,
        code: Set(code.to_string()),
        is_active: Set(is_active),
        payload: Set(payload),
        created_at: NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    active.update(db).await
}
