use yew::prelude::*;

use super::app::Page;
use super::ProductEditor;
use crate::hooks::{use_auth, use_products};
use crate::models::FormMode;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_open_auth: Callback<()>,
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let auth = use_auth();
    let products = use_products();

    let Some(user) = auth.state.user.as_ref() else {
        return html! {
            <section class="home home-guest">
                <h1>{"Product Dashboard"}</h1>
                <p>{"Log in to manage your products."}</p>
                <button type="button" class="btn-primary" onclick={props.on_open_auth.reform(|_| ())}>
                    {"Go To Login Page"}
                </button>
            </section>
        };
    };

    html! {
        <section class="home">
            <h1>{format!("Welcome back, {}!", user.display_name())}</h1>
            <div class="card">
                <h2>{"Create a new product"}</h2>
                <ProductEditor
                    mode={FormMode::Create}
                    loading={products.creation.loading}
                    error={products.creation.error.clone().map(AttrValue::from)}
                    on_submit={products.create.clone()}
                />
            </div>
            <button
                type="button"
                class="btn-secondary"
                onclick={props.on_navigate.reform(|_| Page::Products)}
            >
                {"View Products"}
            </button>
        </section>
    }
}
