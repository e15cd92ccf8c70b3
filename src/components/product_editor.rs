use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::form_field::{field_error, FormField};
use crate::models::{FormErrors, FormMode, Product, ProductForm, ProductPayload};

#[derive(Properties, PartialEq)]
pub struct ProductEditorProps {
    pub mode: FormMode,
    /// Snapshot del producto al abrir el diálogo de edición
    #[prop_or_default]
    pub initial: Option<Product>,
    #[prop_or_default]
    pub image_base_url: AttrValue,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// (datos validados, callback si el servidor acepta)
    pub on_submit: Callback<(ProductPayload, Callback<()>)>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

/// Formulario de producto para crear y editar
#[function_component(ProductEditor)]
pub fn product_editor(props: &ProductEditorProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial.as_ref().map(ProductForm::from_product).unwrap_or_default())
    };
    let errors = use_state(FormErrors::default);
    let file_ref = use_node_ref();

    let set = |apply: fn(&mut ProductForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_files = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let mut next = (*form).clone();
            next.images = selected_files(&input);
            log::debug!("🖼️ {} imágenes seleccionadas", next.images.len());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let file_ref = file_ref.clone();
        let mode = props.mode;
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate(mode) {
                Ok(payload) => {
                    errors.set(FormErrors::default());
                    // Al crear, el formulario se vacía si el servidor lo acepta
                    let reset = {
                        let form = form.clone();
                        let file_ref = file_ref.clone();
                        Callback::from(move |_: ()| {
                            if mode == FormMode::Create {
                                form.set(ProductForm::default());
                                if let Some(input) = file_ref.cast::<HtmlInputElement>() {
                                    input.set_value("");
                                }
                            }
                        })
                    };
                    on_submit.emit((payload, reset));
                }
                Err(found) => {
                    log::warn!("⚠️ Formulario inválido: {} campos", found.len());
                    errors.set(found);
                }
            }
        })
    };

    let current_images = props
        .initial
        .as_ref()
        .map(|p| p.image_urls(&props.image_base_url))
        .unwrap_or_default();
    let submit_text = match (props.mode, props.loading) {
        (_, true) => "Saving...",
        (FormMode::Create, false) => "Create Product",
        (FormMode::Edit, false) => "Update Product",
    };

    html! {
        <form class="product-form" onsubmit={on_submit}>
            <FormField
                label="Product name"
                name="productname"
                value={form.productname.clone()}
                on_input={set(|f, v| f.productname = v)}
                error={field_error(&errors, "productname")}
            />
            <FormField
                label="Description"
                name="description"
                multiline=true
                value={form.description.clone()}
                on_input={set(|f, v| f.description = v)}
                error={field_error(&errors, "description")}
            />
            <FormField
                label="Price"
                name="price"
                input_type="number"
                value={form.price.clone()}
                on_input={set(|f, v| f.price = v)}
                error={field_error(&errors, "price")}
            />
            <FormField
                label="Stock"
                name="stock"
                input_type="number"
                value={form.stock.clone()}
                on_input={set(|f, v| f.stock = v)}
                error={field_error(&errors, "stock")}
            />

            <div class={classes!("form-group", errors.get("images").map(|_| "has-error"))}>
                <label for="images">{"Images"}</label>
                if !current_images.is_empty() {
                    <div class="current-images">
                        { for current_images.iter().map(|url| html! {
                            <img class="thumbnail" src={url.clone()} alt="product" />
                        }) }
                    </div>
                }
                <input
                    type="file"
                    id="images"
                    name="images"
                    accept="image/*"
                    multiple=true
                    ref={file_ref}
                    onchange={on_files}
                />
                if let Some(error) = errors.get("images") {
                    <span class="field-error">{error.to_string()}</span>
                }
            </div>

            if let Some(error) = &props.error {
                <p class="form-error">{error.clone()}</p>
            }

            <div class="form-actions">
                if let Some(on_cancel) = &props.on_cancel {
                    <button type="button" class="btn-secondary" onclick={on_cancel.reform(|_| ())}>
                        {"Cancel"}
                    </button>
                }
                <button type="submit" class="btn-primary" disabled={props.loading}>{submit_text}</button>
            </div>
        </form>
    }
}

fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
