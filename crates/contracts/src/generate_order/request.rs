use serde::{Deserialize, Serialize};

/// Запрос на генерацию приказа.
///
/// Имена полей на проводе — camelCase (`orderNumber`, `orderTitle`),
/// исторический формат клиента.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// День месяца, как введён в форме (без приведения типа)
    pub day: String,

    /// Название месяца в родительном падеже ("октября")
    pub month: String,

    /// Год, как введён в форме
    pub year: String,

    /// Номер приказа (может содержать "/", например "12/34")
    pub order_number: String,

    /// Название приказа
    pub order_title: String,

    /// Преамбула (текст до "ПРИКАЗЫВАЮ:")
    pub preamble: String,

    /// Пункты приказа, нумерация 1..k в порядке отправки
    pub punkts: Vec<OrderPunkt>,

    /// ФИО для блока ознакомления (может быть пустым)
    pub fios: Vec<String>,
}

/// Один пункт приказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPunkt {
    pub number: u32,
    pub text: String,
}

impl OrderRequest {
    /// Единственное бизнес-правило: приказ без пунктов не генерируется.
    pub fn validate(&self) -> Result<(), String> {
        if self.punkts.is_empty() {
            return Err("Необходимо добавить хотя бы один пункт приказа".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OrderRequest {
        OrderRequest {
            day: "22".into(),
            month: "октября".into(),
            year: "2025".into(),
            order_number: "12/34".into(),
            order_title: "О назначении ответственных".into(),
            preamble: "В целях обеспечения охраны труда".into(),
            punkts: vec![OrderPunkt {
                number: 1,
                text: "Назначить Иванова И.И. ответственным".into(),
            }],
            fios: vec!["Иванов И.И.".into()],
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("orderNumber").is_some());
        assert!(json.get("orderTitle").is_some());
        assert!(json.get("order_number").is_none());
        assert_eq!(json["punkts"][0]["number"], 1);
    }

    #[test]
    fn validate_rejects_empty_punkts() {
        let mut req = sample();
        req.punkts.clear();
        assert!(req.validate().is_err());
        assert!(sample().validate().is_ok());
    }
}
