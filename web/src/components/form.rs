//! Form fields with inline validation messages.

use leptos::prelude::*;
use lib_core::ValidationErrors;
use shared::dto::registration::SelectOption;

/// One `String` field of a draft held in a signal.
pub struct Field<T: 'static> {
    draft: RwSignal<T>,
    get: fn(&T) -> &str,
    set: fn(&mut T, String),
}

impl<T: 'static> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Field<T> {}

impl<T> Field<T>
where
    T: Send + Sync + 'static,
{
    pub fn new(draft: RwSignal<T>, get: fn(&T) -> &str, set: fn(&mut T, String)) -> Self {
        Self { draft, get, set }
    }

    pub fn value(&self) -> Signal<String> {
        let field = *self;
        Signal::derive(move || field.draft.with(|draft| (field.get)(draft).to_string()))
    }

    pub fn on_input(&self) -> Callback<String> {
        let field = *self;
        Callback::new(move |value: String| field.draft.update(|draft| (field.set)(draft, value)))
    }
}

/// Message for `field` from the last failed submit, if any.
pub fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|errors| errors.get(field).map(str::to_string)))
}

/// `(value, label)` pairs for a select.
pub fn options<T: SelectOption>() -> Vec<(&'static str, &'static str)> {
    T::ALL.iter().map(|option| (option.value(), option.label())).collect()
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <input
                id=name
                name=name
                type=input_type
                placeholder=placeholder
                class:invalid=move || error.with(Option::is_some)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <textarea
                id=name
                name=name
                rows="5"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "Select an option")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            <select
                id=name
                name=name
                class:invalid=move || error.with(Option::is_some)
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.with(String::is_empty)>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option value=option_value selected=move || value.with(|v| v.as_str() == option_value)>
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>
    }
}
