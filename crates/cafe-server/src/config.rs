//! Конфигурация сервиса кафе.

/// Секрет удаления по умолчанию, если `--api-key` не задан.
pub const DEFAULT_API_KEY: &str = "1928401";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:5000")
    pub listen: String,

    /// URL подключения к БД (sqlite)
    pub db_url: String,

    /// Общий секрет для DELETE /deletecafe/{id}
    pub api_key: String,
}

/// Сравнить предъявленный ключ с настроенным секретом за постоянное время.
pub fn verify_api_key(provided: Option<&str>, expected: &str) -> bool {
    use subtle::ConstantTimeEq;

    let Some(provided) = provided else {
        return false;
    };
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
