use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew::virtual_dom::AttrValue;
use yew_hooks::prelude::*;

use super::fields::{Field, SelectField};
use crate::content::SelectOption;

#[derive(Properties, PartialEq)]
pub struct BookingDialogProps {
    pub open: bool,
    pub days: Vec<SelectOption>,
    pub phone_hint: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(BookingDialog)]
pub fn booking_dialog(props: &BookingDialogProps) -> Html {
    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the panel must not reach the overlay.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!("free trial booking confirmed");
            on_close.emit(());
        })
    };

    html! {
        <div class="dialog-overlay" onclick={close.clone()}>
            <div class="dialog-panel" role="dialog" aria-modal="true" aria-labelledby="booking-title" onclick={keep_open}>
                <button class="dialog-close" aria-label="Close" onclick={close}>{"✕"}</button>
                <div class="dialog-header">
                    <h2 id="booking-title" class="dialog-title">
                        <img src="/assets/dragon-logo.png" alt="Logo" class="dialog-logo" />
                        {"BOOK FREE TRIAL"}
                    </h2>
                    <p class="dialog-description">
                        {"Fill in your details and we'll contact you to confirm your session."}
                    </p>
                </div>
                <form class="dialog-form" {onsubmit}>
                    <Field label="Name">
                        <input class="field-input" name="name" placeholder="Your name" />
                    </Field>
                    <Field label="Phone">
                        <input class="field-input" name="phone" type="tel" placeholder={props.phone_hint.clone()} />
                    </Field>
                    <SelectField label="Preferred Day" name="day" placeholder="Select day" options={props.days.clone()} />
                    <button type="submit" class="btn btn-primary btn-block">{"CONFIRM BOOKING"}</button>
                </form>
            </div>
        </div>
    }
}
