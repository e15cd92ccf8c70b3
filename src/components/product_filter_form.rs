use yew::prelude::*;

use super::form_field::FormField;
use crate::models::FilterCriteria;

#[derive(Properties, PartialEq)]
pub struct ProductFilterFormProps {
    pub on_filter: Callback<FilterCriteria>,
    pub on_reset: Callback<()>,
}

#[function_component(ProductFilterForm)]
pub fn product_filter_form(props: &ProductFilterFormProps) -> Html {
    let productname = use_state(String::new);
    let created_date = use_state(String::new);
    let stock = use_state(String::new);
    let error = use_state(|| None::<String>);

    let set = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |value: String| field.set(value))
    };

    let on_submit = {
        let productname = productname.clone();
        let created_date = created_date.clone();
        let stock = stock.clone();
        let error = error.clone();
        let on_filter = props.on_filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let criteria = FilterCriteria::from_form(&productname, &created_date, &stock);
            match criteria.validate() {
                Ok(()) => {
                    error.set(None);
                    log::info!("🔍 Aplicando filtro: {:?}", criteria.to_query());
                    on_filter.emit(criteria);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        })
    };

    let on_reset = {
        let productname = productname.clone();
        let created_date = created_date.clone();
        let stock = stock.clone();
        let error = error.clone();
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| {
            productname.set(String::new());
            created_date.set(String::new());
            stock.set(String::new());
            error.set(None);
            on_reset.emit(());
        })
    };

    html! {
        <form class="filter-form" onsubmit={on_submit}>
            <FormField
                label="Name"
                name="filter-productname"
                value={(*productname).clone()}
                on_input={set(&productname)}
            />
            <FormField
                label="Created on"
                name="filter-created-date"
                input_type="date"
                value={(*created_date).clone()}
                on_input={set(&created_date)}
            />
            <FormField
                label="Stock"
                name="filter-stock"
                input_type="number"
                value={(*stock).clone()}
                on_input={set(&stock)}
            />
            if let Some(message) = &*error {
                <p class="form-error">{message.clone()}</p>
            }
            <div class="form-actions">
                <button type="button" class="btn-secondary" onclick={on_reset}>{"Reset"}</button>
                <button type="submit" class="btn-primary">{"Filter"}</button>
            </div>
        </form>
    }
}
