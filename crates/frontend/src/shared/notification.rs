//! Всплывающие уведомления с автоскрытием.
//!
//! Сервис кладется в context в `App`; компоненты получают его через
//! `use_notifications()` и зовут `notify`/`success`/`error`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время показа уведомления
pub const HIDE_DELAY_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notice>>,
    // Номер поколения: таймер скрытия срабатывает только для своего
    // уведомления, более новое он не трогает
    generation: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Показывает уведомление и скрывает его через `HIDE_DELAY_MS`
    /// с момента этого вызова
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let seq = self.generation.get_untracked() + 1;
        self.generation.set(seq);
        self.current.set(Some(Notice {
            message: message.into(),
            kind,
        }));

        let current = self.current;
        let generation = self.generation;
        spawn_local(async move {
            TimeoutFuture::new(HIDE_DELAY_MS).await;
            if generation.get_untracked() == seq {
                current.set(None);
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn current(&self) -> RwSignal<Option<Notice>> {
        self.current
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Сервис уведомлений из context
pub fn use_notifications() -> NotificationService {
    expect_context::<NotificationService>()
}

/// Контейнер уведомления; рендерится один раз в `App`
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        {move || {
            service.current().get().map(|notice| {
                view! {
                    <div class=format!("notification {} show", notice.kind.css_class())>
                        {notice.message}
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_css_class() {
        assert_eq!(NotificationKind::Info.css_class(), "info");
        assert_eq!(NotificationKind::Success.css_class(), "success");
        assert_eq!(NotificationKind::Error.css_class(), "error");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
