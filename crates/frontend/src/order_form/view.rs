use leptos::prelude::*;

use super::view_model::OrderFormVm;
use crate::shared::notification::use_notifications;

/// Страница формы приказа
#[component]
pub fn OrderFormPage() -> impl IntoView {
    let vm = OrderFormVm::new();
    let notices = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(notices);
    };

    view! {
        <div class="container" style="max-width: 800px; margin: 20px auto; padding: 0 16px;">
            <h1>"Генератор приказов ПОЛАТИ"</h1>

            <form on:submit=on_submit>
                // Дата приказа
                <div class="form-row" style="display: flex; gap: 12px; margin: 20px 0;">
                    <div class="form-group">
                        <label for="day">"День"</label>
                        <input
                            type="text"
                            id="day"
                            prop:value=move || vm.day.get()
                            on:input=move |ev| vm.day.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="month">"Месяц"</label>
                        <input
                            type="text"
                            id="month"
                            prop:value=move || vm.month.get()
                            on:input=move |ev| vm.month.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="year">"Год"</label>
                        <input
                            type="text"
                            id="year"
                            prop:value=move || vm.year.get()
                            on:input=move |ev| vm.year.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group" style="margin: 20px 0;">
                    <label for="orderNumber">"Номер приказа*"</label>
                    <input
                        type="text"
                        id="orderNumber"
                        required=true
                        placeholder="12/34"
                        prop:value=move || vm.order_number.get()
                        on:input=move |ev| vm.order_number.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group" style="margin: 20px 0;">
                    <label for="orderTitle">"Название приказа*"</label>
                    <input
                        type="text"
                        id="orderTitle"
                        required=true
                        placeholder="О назначении ответственных за охрану труда"
                        prop:value=move || vm.order_title.get()
                        on:input=move |ev| vm.order_title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group" style="margin: 20px 0;">
                    <label for="preamble">"Преамбула*"</label>
                    <textarea
                        id="preamble"
                        required=true
                        placeholder="В целях обеспечения требований охраны труда"
                        prop:value=move || vm.preamble.get()
                        on:input=move |ev| vm.preamble.set(event_target_value(&ev))
                    ></textarea>
                </div>

                // Пункты приказа: нумерация позиционная, после удаления
                // заголовки пересчитываются сами
                <h2>"Пункты приказа"</h2>
                <div class="punkt-list">
                    {move || {
                        vm.punkts
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <div class="punkt-group" style="position: relative; margin: 12px 0; padding: 12px; border: 1px solid #ccc; border-radius: 8px;">
                                        <button
                                            type="button"
                                            class="remove-btn"
                                            style="position: absolute; top: 8px; right: 8px;"
                                            on:click=move |_| vm.remove_punkt(item.id)
                                        >
                                            "✖ Удалить"
                                        </button>
                                        <h3>{format!("Пункт {}", index + 1)}</h3>
                                        <textarea
                                            required=true
                                            placeholder="Назначить Иванова И.И. ответственным за охрану труда с 22 октября 2025 года."
                                            prop:value=move || item.text.get()
                                            on:input=move |ev| item.text.set(event_target_value(&ev))
                                        ></textarea>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button type="button" on:click=move |_| vm.add_punkt()>
                    "+ Добавить пункт"
                </button>

                // ФИО для блока ознакомления: без нумерации
                <h2>"С приказом ознакомлены (ФИО)"</h2>
                <div class="fio-list">
                    {move || {
                        vm.fios
                            .get()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <div class="fio-item" style="display: flex; gap: 8px; margin: 8px 0;">
                                        <input
                                            type="text"
                                            placeholder="Иванов И.И."
                                            prop:value=move || item.text.get()
                                            on:input=move |ev| item.text.set(event_target_value(&ev))
                                        />
                                        <button type="button" on:click=move |_| vm.remove_fio(item.id)>
                                            "✖"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <button type="button" on:click=move |_| vm.add_fio()>
                    "+ Добавить ФИО"
                </button>

                <div style="margin: 24px 0;">
                    <button
                        type="submit"
                        id="generateBtn"
                        style="padding: 10px 20px; font-size: 16px;"
                        prop:disabled=move || vm.submitting.get()
                    >
                        <span style:display=move || {
                            if vm.submitting.get() { "none" } else { "inline" }
                        }>"Сгенерировать приказ"</span>
                        <span style:display=move || {
                            if vm.submitting.get() { "inline" } else { "none" }
                        }>"⏳ Генерация..."</span>
                    </button>
                </div>
            </form>
        </div>
    }
}
