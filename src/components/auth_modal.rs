use yew::prelude::*;

use super::form_field::{field_error, FormField};
use crate::hooks::use_auth;
use crate::models::{FormErrors, LoginRequest, RegisterData};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum AuthTab {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthModalProps {
    pub on_close: Callback<()>,
}

/// Modal de login / registro
#[function_component(AuthModal)]
pub fn auth_modal(props: &AuthModalProps) -> Html {
    let auth = use_auth();
    let tab = use_state(|| AuthTab::Login);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FormErrors::default);

    let set = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |value: String| field.set(value))
    };

    let switch_tab = {
        let tab = tab.clone();
        let errors = errors.clone();
        Callback::from(move |next: AuthTab| {
            errors.set(FormErrors::default());
            tab.set(next);
        })
    };

    let on_submit = {
        let tab = tab.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let login = auth.login.clone();
        let register = auth.register.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match *tab {
                AuthTab::Login => {
                    let request = LoginRequest {
                        email: (*email).trim().to_string(),
                        password: (*password).clone(),
                    };
                    match request.validate() {
                        Ok(()) => {
                            errors.set(FormErrors::default());
                            login.emit((request, on_close.clone()));
                        }
                        Err(found) => errors.set(found),
                    }
                }
                AuthTab::Register => {
                    let data = RegisterData {
                        username: (*username).trim().to_string(),
                        email: (*email).trim().to_string(),
                        password: (*password).clone(),
                    };
                    match data.validate() {
                        Ok(()) => {
                            errors.set(FormErrors::default());
                            // Registro correcto: pasar a login con el email ya puesto
                            let to_login = {
                                let tab = tab.clone();
                                let password = password.clone();
                                Callback::from(move |_: ()| {
                                    password.set(String::new());
                                    tab.set(AuthTab::Login);
                                })
                            };
                            register.emit((data, to_login));
                        }
                        Err(found) => errors.set(found),
                    }
                }
            }
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close = props.on_close.reform(|_: MouseEvent| ());
    let loading = auth.state.is_loading();
    let (title, submit_text) = match *tab {
        AuthTab::Login => ("Login", "Login"),
        AuthTab::Register => ("Register", "Create account"),
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal auth-modal" onclick={stop}>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button type="button" class="btn-close" onclick={close}>{"✕"}</button>
                </div>

                <div class="auth-tabs">
                    <button
                        type="button"
                        class={classes!("tab", (*tab == AuthTab::Login).then_some("active"))}
                        onclick={switch_tab.reform(|_| AuthTab::Login)}
                    >
                        {"Login"}
                    </button>
                    <button
                        type="button"
                        class={classes!("tab", (*tab == AuthTab::Register).then_some("active"))}
                        onclick={switch_tab.reform(|_| AuthTab::Register)}
                    >
                        {"Register"}
                    </button>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    if *tab == AuthTab::Register {
                        <FormField
                            label="Username"
                            name="username"
                            value={(*username).clone()}
                            on_input={set(&username)}
                            error={field_error(&errors, "username")}
                        />
                    }
                    <FormField
                        label="Email"
                        name="email"
                        input_type="email"
                        value={(*email).clone()}
                        on_input={set(&email)}
                        error={field_error(&errors, "email")}
                    />
                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        value={(*password).clone()}
                        on_input={set(&password)}
                        error={field_error(&errors, "password")}
                    />
                    if let Some(error) = &auth.state.error {
                        <p class="form-error">{error.clone()}</p>
                    }
                    <button type="submit" class="btn-primary" disabled={loading}>
                        { if loading { "Please wait..." } else { submit_text } }
                    </button>
                </form>
            </div>
        </div>
    }
}
