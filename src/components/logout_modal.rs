use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutModalProps {
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(LogoutModal)]
pub fn logout_modal(props: &LogoutModalProps) -> Html {
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close = props.on_close.reform(|_: MouseEvent| ());
    let confirm = props.on_confirm.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal logout-modal" onclick={stop}>
                <h2>{"Logout"}</h2>
                <p>{"Are you sure you want to log out?"}</p>
                <div class="modal-actions">
                    <button type="button" class="btn-secondary" onclick={close}>{"Cancel"}</button>
                    <button type="button" class="btn-danger" onclick={confirm}>{"Logout"}</button>
                </div>
            </div>
        </div>
    }
}
