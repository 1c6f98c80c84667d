//! Поля форм отзыва и обратной связи, связанные с `RwSignal<String>`

use leptos::prelude::*;

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Однострочное поле
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    /// "text" (default), "email", "tel"
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] maxlength: Option<u32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label_text(label, required)}</label>
            <input
                id=id
                name=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                required=required
                maxlength=maxlength
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Многострочное поле; при `maxlength` под ним выводится счётчик символов
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] maxlength: Option<u32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let counter = maxlength.map(|max| {
        view! {
            <div class="char-counter">
                {move || format!("{}/{}", value.with(|v| v.chars().count()), max)}
            </div>
        }
    });

    view! {
        <div class="form-group">
            <label for=id>{label_text(label, required)}</label>
            <textarea
                id=id
                name=id
                placeholder=placeholder
                required=required
                rows=rows.unwrap_or(5)
                maxlength=maxlength
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {counter}
        </div>
    }
}

/// Выпадающий список; `options` это пары (value, label), пустое значение = "не выбрано"
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label_text(label, required)}</label>
            <select
                id=id
                name=id
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(code, text)| {
                        view! {
                            <option value=code selected=move || value.get() == code>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_label_gets_marker() {
        assert_eq!(label_text("Your Name", true), "Your Name *");
        assert_eq!(label_text("Email", false), "Email");
    }
}
