//! Entity для таблицы cafes.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cafes")]
pub struct Model {
    /// Автоинкрементный первичный ключ
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Уникальное название кафе
    #[sea_orm(unique)]
    pub name: String,

    /// Ссылка на карту
    pub map_url: String,

    /// Ссылка на фотографию
    pub img_url: String,

    /// Район / локация (точное совпадение при поиске)
    pub location: String,

    /// Количество мест, свободный текст ("20-30")
    pub seats: String,

    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,

    /// Цена кофе, свободный текст ("£2.50")
    pub coffee_price: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
