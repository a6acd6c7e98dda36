use contracts::generate_order::{ErrorResponse, OrderRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Сообщение по умолчанию, если тело ошибки не удалось разобрать
const FALLBACK_ERROR: &str = "Ошибка при генерации документа";

/// POST /generate
///
/// Успех — байты .docx; любая ошибка (транспорт, статус, тело) —
/// готовый текст для уведомления.
pub async fn generate(request: &OrderRequest) -> Result<Vec<u8>, String> {
    let response = Request::post(&api_url("/generate"))
        .json(request)
        .map_err(|e| format!("Не удалось сериализовать запрос: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Не удалось отправить запрос: {}", e))?;

    if !response.ok() {
        // Сервер отвечает JSON {"error": "..."}; при любом другом теле
        // показываем общее сообщение
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => FALLBACK_ERROR.to_string(),
        };
        return Err(message);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Не удалось прочитать ответ: {}", e))
}
