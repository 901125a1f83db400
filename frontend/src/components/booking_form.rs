use log::debug;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

use super::fields::{Field, SelectField};
use crate::content::SelectOption;

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub goals: Vec<SelectOption>,
    pub times: Vec<SelectOption>,
    pub phone_hint: AttrValue,
}

/// Contact-section request form. Requests are taken by phone, so nothing is sent anywhere.
#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("booking request form submitted, no handler attached");
    });

    html! {
        <form class="booking-form" {onsubmit}>
            <div class="form-row">
                <Field label="Name">
                    <input class="field-input" name="name" placeholder="Your name" />
                </Field>
                <Field label="Phone">
                    <input class="field-input" name="phone" type="tel" placeholder={props.phone_hint.clone()} />
                </Field>
            </div>
            <Field label="Email">
                <input class="field-input" name="email" type="email" placeholder="your@email.com" />
            </Field>
            <div class="form-row">
                <SelectField label="Goal" name="goal" placeholder="Select goal" options={props.goals.clone()} />
                <SelectField label="Preferred Time" name="time" placeholder="Select time" options={props.times.clone()} />
            </div>
            <Field label="Message">
                <textarea class="field-input field-textarea" name="message" placeholder="Tell us about your fitness goals..." />
            </Field>
            <button type="submit" class="btn btn-primary btn-block">{"REQUEST BOOKING"}</button>
        </form>
    }
}
