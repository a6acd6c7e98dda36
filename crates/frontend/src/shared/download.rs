/// Скачивание сгенерированного приказа (бинарный ответ сервера) как файла
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Имя скачиваемого файла: "/" в номере приказа заменяется на "-"
pub fn order_filename(order_number: &str) -> String {
    format!("Приказ_ПОЛАТИ_{}.docx", order_number.replace('/', "-"))
}

/// Инициирует скачивание байтов документа под заданным именем
pub fn save_docx(bytes: &[u8], filename: &str) -> Result<(), String> {
    let blob = create_docx_blob(bytes)?;
    download_blob(&blob, filename)
}

/// Создает Blob с байтами документа
fn create_docx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(DOCX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    // Освобождаем URL
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_filename() {
        assert_eq!(order_filename("12/34"), "Приказ_ПОЛАТИ_12-34.docx");
        assert_eq!(order_filename("105"), "Приказ_ПОЛАТИ_105.docx");
        assert_eq!(order_filename("1/2/3"), "Приказ_ПОЛАТИ_1-2-3.docx");
    }
}
