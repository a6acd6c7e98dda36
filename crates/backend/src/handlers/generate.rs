use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use contracts::generate_order::{ErrorResponse, OrderRequest};

use crate::docx;
use crate::shared::config;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// POST /generate
///
/// Успех — тело ответа целиком .docx; любая ошибка — JSON `{"error": "..."}`.
pub async fn generate(
    Json(req): Json<OrderRequest>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if let Err(message) = req.validate() {
        return Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })));
    }

    let org = &config::get().organization;
    let bytes = docx::render_order(&req, org).map_err(|e| {
        tracing::error!("Ошибка при генерации приказа №{}: {e}", req.order_number);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Ошибка при генерации документа: {e}"),
            }),
        )
    })?;

    let filename = attachment_filename(&req.order_number);
    tracing::info!(
        "Сгенерирован приказ №{} ({} пунктов, {} байт)",
        req.order_number,
        req.punkts.len(),
        bytes.len()
    );

    // Кириллическое имя файла — по RFC 5987
    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&filename)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Имя файла вложения: "/" в номере приказа заменяется на "-"
pub fn attachment_filename(order_number: &str) -> String {
    format!("Приказ_ПОЛАТИ_{}.docx", order_number.replace('/', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::generate_order::OrderPunkt;

    fn request(punkts: Vec<OrderPunkt>) -> OrderRequest {
        OrderRequest {
            day: "22".into(),
            month: "октября".into(),
            year: "2025".into(),
            order_number: "12/34".into(),
            order_title: "О назначении ответственных".into(),
            preamble: "В целях обеспечения охраны труда".into(),
            punkts,
            fios: vec![],
        }
    }

    #[test]
    fn test_attachment_filename() {
        assert_eq!(attachment_filename("12/34"), "Приказ_ПОЛАТИ_12-34.docx");
        assert_eq!(attachment_filename("7"), "Приказ_ПОЛАТИ_7.docx");
        assert_eq!(attachment_filename("1/2/3"), "Приказ_ПОЛАТИ_1-2-3.docx");
    }

    #[tokio::test]
    async fn test_empty_punkts_rejected_with_json_error() {
        let result = generate(Json(request(vec![]))).await;
        let (status, Json(body)) = result.err().expect("validation must fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("хотя бы один пункт"));

        // Форма тела — контракт для клиента
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn test_success_returns_docx_attachment() {
        let punkts = vec![OrderPunkt {
            number: 1,
            text: "Назначить Иванова И.И. ответственным.".into(),
        }];
        let response = generate(Json(request(punkts))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), DOCX_MIME);
        let disposition = headers
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment; filename*=UTF-8''"));
        assert!(disposition.contains("12-34.docx"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
