use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::{use_app_context, use_store};
use crate::state::{Toast, ToastEvent, ToastKind};

#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let ctx = use_app_context();
    let toasts = use_store(&ctx.state.toasts);

    let on_dismiss = {
        let store = ctx.state.toasts.clone();
        Callback::from(move |id: u32| store.dispatch(ToastEvent::Dismiss(id)))
    };

    html! {
        <div class="toast-container">
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-cierre; el timeout se cancela si el toast se cierra antes
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(CONFIG.toast_duration_ms, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let id = props.toast.id;
    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast toast-success", "✅"),
        ToastKind::Error => ("toast toast-error", "❌"),
    };

    html! {
        <div {class} onclick={props.on_dismiss.reform(move |_: MouseEvent| id)}>
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{props.toast.message.clone()}</span>
        </div>
    }
}
