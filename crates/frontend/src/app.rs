use leptos::prelude::*;

use crate::order_form::view::OrderFormPage;
use crate::shared::notification::{NotificationHost, NotificationService};

#[component]
pub fn App() -> impl IntoView {
    // Сервис уведомлений доступен всему приложению через context
    provide_context(NotificationService::new());

    view! {
        <OrderFormPage />
        <NotificationHost />
    }
}
