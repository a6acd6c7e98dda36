//! ViewModel формы приказа.
//!
//! Владеет обоими редактируемыми списками (пункты и ФИО) вместе с их
//! счетчиками идентификаторов и состоянием отправки. Идентификаторы
//! монотонно растут и не переиспользуются; отображаемый номер пункта —
//! позиция в списке, поэтому после любого удаления нумерация сплошная.

use contracts::generate_order::{OrderPunkt, OrderRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::date_utils;
use crate::shared::download;
use crate::shared::notification::NotificationService;

/// Элемент редактируемого списка; текст живет в собственном сигнале,
/// чтобы пересборка списка не теряла ввод
#[derive(Debug, Clone, Copy)]
pub struct ListItem {
    pub id: usize,
    pub text: RwSignal<String>,
}

#[derive(Clone, Copy)]
pub struct OrderFormVm {
    // === Скалярные поля формы ===
    pub day: RwSignal<String>,
    pub month: RwSignal<String>,
    pub year: RwSignal<String>,
    pub order_number: RwSignal<String>,
    pub order_title: RwSignal<String>,
    pub preamble: RwSignal<String>,

    // === Редактируемые списки ===
    pub punkts: RwSignal<Vec<ListItem>>,
    pub fios: RwSignal<Vec<ListItem>>,
    next_punkt_id: RwSignal<usize>,
    next_fio_id: RwSignal<usize>,

    // === UI state ===
    pub submitting: RwSignal<bool>,
}

impl OrderFormVm {
    /// Начальное состояние формы: два пункта, одно ФИО, текущая дата
    pub fn new() -> Self {
        let vm = Self {
            day: RwSignal::new(String::new()),
            month: RwSignal::new(String::new()),
            year: RwSignal::new(String::new()),
            order_number: RwSignal::new(String::new()),
            order_title: RwSignal::new(String::new()),
            preamble: RwSignal::new(String::new()),
            punkts: RwSignal::new(Vec::new()),
            fios: RwSignal::new(Vec::new()),
            next_punkt_id: RwSignal::new(0),
            next_fio_id: RwSignal::new(0),
            submitting: RwSignal::new(false),
        };

        vm.add_punkt();
        vm.add_punkt();
        vm.add_fio();

        let (day, month, year) = date_utils::current_date_fields();
        vm.day.set(day);
        vm.month.set(month);
        vm.year.set(year);

        vm
    }

    fn next_id(counter: RwSignal<usize>) -> usize {
        let id = counter.get_untracked() + 1;
        counter.set(id);
        id
    }

    pub fn add_punkt(&self) {
        let id = Self::next_id(self.next_punkt_id);
        self.punkts.update(|items| {
            items.push(ListItem {
                id,
                text: RwSignal::new(String::new()),
            })
        });
    }

    /// Удаление несуществующего id — молчаливый no-op
    pub fn remove_punkt(&self, id: usize) {
        self.punkts.update(|items| items.retain(|item| item.id != id));
    }

    pub fn add_fio(&self) {
        let id = Self::next_id(self.next_fio_id);
        self.fios.update(|items| {
            items.push(ListItem {
                id,
                text: RwSignal::new(String::new()),
            })
        });
    }

    pub fn remove_fio(&self, id: usize) {
        self.fios.update(|items| items.retain(|item| item.id != id));
    }

    fn texts(items: &RwSignal<Vec<ListItem>>) -> Vec<String> {
        items
            .get_untracked()
            .iter()
            .map(|item| item.text.get_untracked())
            .collect()
    }

    /// Снимок формы для отправки
    pub fn collect_request(&self) -> OrderRequest {
        OrderRequest {
            day: self.day.get_untracked(),
            month: self.month.get_untracked(),
            year: self.year.get_untracked(),
            order_number: self.order_number.get_untracked(),
            order_title: self.order_title.get_untracked(),
            preamble: self.preamble.get_untracked(),
            punkts: collect_punkts(&Self::texts(&self.punkts)),
            fios: collect_fios(&Self::texts(&self.fios)),
        }
    }

    /// Отправка формы.
    ///
    /// Кнопка блокируется синхронно, до какой-либо асинхронной работы,
    /// и разблокируется на любом исходе — успех, валидация, ошибка сети.
    pub fn submit(&self, notices: NotificationService) {
        if self.submitting.get_untracked() {
            return;
        }
        self.submitting.set(true);

        let request = self.collect_request();

        // Единственная проверка на клиенте: нужен хотя бы один пункт
        if request.punkts.is_empty() {
            notices.error("Добавьте хотя бы один пункт приказа!");
            self.submitting.set(false);
            return;
        }

        let this = *self;
        spawn_local(async move {
            let result = api::generate(&request).await.and_then(|bytes| {
                let filename = download::order_filename(&request.order_number);
                download::save_docx(&bytes, &filename)
            });

            match result {
                Ok(()) => notices.success("✅ Приказ успешно сгенерирован и скачан!"),
                Err(message) => {
                    log::error!("Ошибка генерации приказа: {}", message);
                    notices.error(format!("❌ Ошибка: {}", message));
                }
            }

            // Возврат кнопки в исходное состояние на любом исходе
            this.submitting.set(false);
        });
    }
}

impl Default for OrderFormVm {
    fn default() -> Self {
        Self::new()
    }
}

/// Пункты для отправки: пробелы обрезаются, пустые выбрасываются,
/// номера присваиваются заново 1..k в порядке следования
pub fn collect_punkts(texts: &[String]) -> Vec<OrderPunkt> {
    texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(index, text)| OrderPunkt {
            number: index as u32 + 1,
            text: text.to_string(),
        })
        .collect()
}

/// ФИО для отправки: пробелы обрезаются, пустые выбрасываются
pub fn collect_fios(texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_punkts_trims_filters_and_renumbers() {
        let punkts = collect_punkts(&strings(&["  ", "Do X", "", "  Do Y  "]));
        assert_eq!(punkts.len(), 2);
        assert_eq!(punkts[0].number, 1);
        assert_eq!(punkts[0].text, "Do X");
        assert_eq!(punkts[1].number, 2);
        assert_eq!(punkts[1].text, "Do Y");
    }

    #[test]
    fn test_collect_fios_drops_empty() {
        let fios = collect_fios(&strings(&["", "Ivanov I.I.", "   "]));
        assert_eq!(fios, vec!["Ivanov I.I.".to_string()]);
    }

    #[test]
    fn test_initial_state() {
        let vm = OrderFormVm::new();
        assert_eq!(vm.punkts.get_untracked().len(), 2);
        assert_eq!(vm.fios.get_untracked().len(), 1);
        assert!(!vm.day.get_untracked().is_empty());
        assert!(!vm.month.get_untracked().is_empty());
        assert!(!vm.year.get_untracked().is_empty());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let vm = OrderFormVm::new();
        let max_id = vm
            .punkts
            .get_untracked()
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap();

        for item in vm.punkts.get_untracked() {
            vm.remove_punkt(item.id);
        }
        assert!(vm.punkts.get_untracked().is_empty());

        vm.add_punkt();
        let new_id = vm.punkts.get_untracked()[0].id;
        assert!(new_id > max_id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let vm = OrderFormVm::new();
        vm.remove_punkt(999);
        vm.remove_fio(999);
        assert_eq!(vm.punkts.get_untracked().len(), 2);
        assert_eq!(vm.fios.get_untracked().len(), 1);
    }

    #[test]
    fn test_removal_keeps_order_of_survivors() {
        let vm = OrderFormVm::new();
        vm.add_punkt();
        let ids: Vec<_> = vm.punkts.get_untracked().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        vm.remove_punkt(ids[1]);
        let survivors: Vec<_> = vm.punkts.get_untracked().iter().map(|i| i.id).collect();
        // Нумерация в UI позиционная: выжившие получают номера 1..N
        assert_eq!(survivors, vec![1, 3]);
    }

    #[test]
    fn test_collect_request_snapshot() {
        let vm = OrderFormVm::new();
        vm.order_number.set("12/34".into());
        vm.order_title.set("О назначении".into());

        let items = vm.punkts.get_untracked();
        items[0].text.set("  ".into());
        items[1].text.set("Do X".into());
        vm.fios.get_untracked()[0].text.set(" Ivanov I.I. ".into());

        let request = vm.collect_request();
        assert_eq!(request.order_number, "12/34");
        assert_eq!(request.punkts.len(), 1);
        assert_eq!(request.punkts[0].number, 1);
        assert_eq!(request.punkts[0].text, "Do X");
        assert_eq!(request.fios, vec!["Ivanov I.I.".to_string()]);
    }
}
