use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub multiline: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Campo de formulario con label y error por campo
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let oninput_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let oninput_textarea = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(textarea.value());
        })
    };

    let class = if props.error.is_some() { "form-group has-error" } else { "form-group" };

    html! {
        <div {class}>
            <label for={props.name.clone()}>{props.label.clone()}</label>
            if props.multiline {
                <textarea
                    id={props.name.clone()}
                    name={props.name.clone()}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    oninput={oninput_textarea}
                />
            } else {
                <input
                    type={props.input_type.clone()}
                    id={props.name.clone()}
                    name={props.name.clone()}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    oninput={oninput_input}
                />
            }
            if let Some(error) = &props.error {
                <span class="field-error">{error.clone()}</span>
            }
        </div>
    }
}

/// Error de un campo como prop
pub fn field_error(errors: &crate::models::FormErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|e| AttrValue::from(e.to_string()))
}
