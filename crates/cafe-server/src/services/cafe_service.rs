//! Сервис кафе: создание, выборки, обновление цены, удаление.

use crate::error::AppError;
use cafe_entities::cafes::{ActiveModel, Column, Entity as CafeEntity, Model};
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub const CAFE_ID_NOT_FOUND: &str = "Sorry, we cannot find a cafe with that id.";
pub const LOCATION_NOT_FOUND: &str = "Sorry, we don't have a cafe at that location.";
pub const NO_CAFES: &str = "Sorry, there are no cafes available.";

/// Данные для создания кафе.
///
/// Обязательные строковые поля приходят как `Option`: отсутствие значения
/// нарушает NOT NULL и отклоняется в [`create`]. Флаги уже приведены к bool.
#[derive(Debug, Default, Clone)]
pub struct NewCafe {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub location: Option<String>,
    pub seats: Option<String>,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Создать кафе. Возвращает присвоенный id.
pub async fn create(db: &DatabaseConnection, data: NewCafe) -> Result<i32, AppError> {
    let name = required(data.name, "name")?;

    let model = ActiveModel {
        name: Set(name.clone()),
        map_url: Set(required(data.map_url, "map_url")?),
        img_url: Set(required(data.img_url, "img_url")?),
        location: Set(required(data.location, "location")?),
        seats: Set(required(data.seats, "seats")?),
        has_toilet: Set(data.has_toilet),
        has_wifi: Set(data.has_wifi),
        has_sockets: Set(data.has_sockets),
        can_take_calls: Set(data.can_take_calls),
        coffee_price: Set(data.coffee_price),
        ..Default::default()
    };

    let inserted = model.insert(db).await.map_err(|e| match AppError::from(e) {
        AppError::ConstraintViolation(_) => {
            AppError::ConstraintViolation(format!("A cafe named '{name}' already exists."))
        }
        other => other,
    })?;

    tracing::info!("Добавлено кафе {} (id: {})", inserted.name, inserted.id);
    Ok(inserted.id)
}

/// Получить все кафе в порядке добавления.
pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Model>, AppError> {
    let cafes = CafeEntity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(cafes)
}

/// Получить кафе по id.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Model, AppError> {
    CafeEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Кафе не найдено: {id}");
            AppError::NotFound(CAFE_ID_NOT_FOUND.into())
        })
}

/// Получить кафе с точным (регистрозависимым) совпадением location.
pub async fn get_by_location(
    db: &DatabaseConnection,
    location: &str,
) -> Result<Vec<Model>, AppError> {
    let cafes = CafeEntity::find()
        .filter(Column::Location.eq(location))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(cafes)
}

/// Выбрать случайное кафе (равномерно по всем записям).
/// Читается одна строка: случайное смещение в пределах COUNT(*).
pub async fn get_random(db: &DatabaseConnection) -> Result<Model, AppError> {
    let total = CafeEntity::find().count(db).await?;
    if total == 0 {
        return Err(AppError::NotFound(NO_CAFES.into()));
    }

    let offset = rand::thread_rng().gen_range(0..total);
    CafeEntity::find()
        .order_by_asc(Column::Id)
        .offset(offset)
        .one(db)
        .await?
        // Строку могли удалить между COUNT и выборкой
        .ok_or_else(|| AppError::NotFound(NO_CAFES.into()))
}

/// Обновить цену кофе. Остальные поля не меняются.
pub async fn update_price(
    db: &DatabaseConnection,
    id: i32,
    new_price: Option<String>,
) -> Result<(), AppError> {
    let record = get_by_id(db, id).await?;

    let mut model: ActiveModel = record.into();
    model.coffee_price = Set(new_price);
    let updated = model.update(db).await?;

    tracing::info!(
        "Цена кофе обновлена: {} -> {:?}",
        updated.name,
        updated.coffee_price
    );
    Ok(())
}

/// Удалить кафе по id.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let record = get_by_id(db, id).await?;
    let name = record.name.clone();

    let model: ActiveModel = record.into();
    model.delete(db).await?;

    tracing::info!("Кафе удалено: {name} (id: {id})");
    Ok(())
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| {
        AppError::ConstraintViolation(format!("Missing required field: {field}."))
    })
}
