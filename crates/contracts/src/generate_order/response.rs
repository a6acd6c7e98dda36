use serde::{Deserialize, Serialize};

/// Тело ответа при ошибке генерации.
///
/// Успешный ответ — бинарный .docx, структуры для него нет.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
