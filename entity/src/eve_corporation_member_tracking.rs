use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "eve_corporation_member_tracking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub corporation_id: i64,
    pub character_id: i64,
    pub base_id: Option<i64>,
    pub location_id: Option<i64>,
    pub logon_date: Option<DateTime>,
    pub logoff_date: Option<DateTime>,
    pub ship_type_id: Option<i64>,
    pub start_date: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
