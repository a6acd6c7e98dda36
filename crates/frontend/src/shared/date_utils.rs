//! Подстановка текущей даты в поля формы.
//!
//! Дата приказа пишется словами ("22 октября 2025"), поэтому месяц
//! рендерится в родительном падеже по фиксированной таблице.

use chrono::{Datelike, Utc};

/// Названия месяцев в родительном падеже, индекс 0 — январь
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Название месяца по нулевому индексу; вне диапазона — пустая строка
pub fn month_name(month_index: usize) -> &'static str {
    MONTHS.get(month_index).copied().unwrap_or("")
}

/// Текущая дата для предзаполнения формы: (день, месяц словом, год)
pub fn current_date_fields() -> (String, String, String) {
    let today = Utc::now().date_naive();
    (
        today.day().to_string(),
        month_name(today.month0() as usize).to_string(),
        today.year().to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(0), "января");
        assert_eq!(month_name(9), "октября");
        assert_eq!(month_name(11), "декабря");
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(12), "");
    }

    #[test]
    fn test_current_date_fields_shape() {
        let (day, month, year) = current_date_fields();
        assert!(day.parse::<u32>().is_ok());
        assert!(MONTHS.contains(&month.as_str()));
        assert_eq!(year.len(), 4);
    }
}
