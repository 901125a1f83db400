use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use crate::content::SelectOption;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub children: Children,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div class="form-field">
            <label class="field-label">{&props.label}</label>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    pub placeholder: AttrValue,
    pub options: Vec<SelectOption>,
}

/// Native select with a disabled placeholder shown until the visitor picks something.
#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <Field label={props.label.clone()}>
            <select class="field-input" name={props.name.clone()}>
                <option value="" disabled=true selected=true>{&props.placeholder}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={option.value.clone()}>{&option.label}</option>
                }) }
            </select>
        </Field>
    }
}
