use crate::shared::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_review::draft::REVIEW_MAX_CHARS;
use contracts::domain::a001_review::ReviewDraft;
use contracts::enums::ServiceType;
use leptos::prelude::*;

const RATING_HINTS: [&str; 6] = [
    "Click to rate",
    "Poor",
    "Fair",
    "Good",
    "Very Good",
    "Excellent",
];

/// Подпись под звёздами: наведённая оценка важнее выбранной
fn rating_hint(selected: u8, hovered: u8) -> &'static str {
    let shown = if hovered > 0 { hovered } else { selected };
    RATING_HINTS
        .get(usize::from(shown))
        .copied()
        .unwrap_or(RATING_HINTS[0])
}

/// Выбор оценки с предпросмотром при наведении
#[component]
fn StarPicker(rating: RwSignal<u8>) -> impl IntoView {
    let hovered = RwSignal::new(0u8);
    let lit = move |value: u8| {
        let shown = match hovered.get() {
            0 => rating.get(),
            h => h,
        };
        value <= shown
    };

    view! {
        <div class="star-rating-input" on:mouseleave=move |_| hovered.set(0)>
            {(1u8..=5)
                .map(|value| {
                    view! {
                        <button
                            type="button"
                            class="star-rating-input__star"
                            class:active=move || lit(value)
                            aria-label=format!("{} star", value)
                            on:mouseenter=move |_| hovered.set(value)
                            on:click=move |_| rating.set(value)
                        >
                            {icon("star")}
                        </button>
                    }
                })
                .collect_view()}
            <span class="star-rating-input__hint">
                {move || rating_hint(rating.get(), hovered.get())}
            </span>
        </div>
    }
}

/// Модальная форма "Write a Review".
///
/// Монтируется заново при каждом открытии, поэтому поля всегда пустые.
/// При ошибке отправки остаётся открытой с введённым текстом.
#[component]
pub fn WriteReviewForm(
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<ReviewDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let rating = RwSignal::new(0u8);
    let service = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    let service_options: Vec<(&'static str, &'static str)> = ServiceType::all()
        .into_iter()
        .map(|s| (s.code(), s.display_name()))
        .collect();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ReviewDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            rating: rating.get_untracked(),
            title: title.get_untracked(),
            body: body.get_untracked(),
            service_type: ServiceType::from_code(&service.get_untracked()),
        };
        on_submit.run(draft);
    };

    view! {
        <ModalFrame
            title={"Write a Review".to_string()}
            on_close=on_close
            modal_class={"review-modal".to_string()}
        >
            <form class="review-form" novalidate=true on:submit=handle_submit>
                <div class="form-row">
                    <TextField id="reviewName" label="Your Name" value=name required=true placeholder="Enter your name" />
                    <TextField id="reviewEmail" label="Email" value=email input_type="email" required=true placeholder="you@example.com" />
                </div>
                <div class="form-row">
                    <TextField id="reviewPhone" label="Phone" value=phone input_type="tel" required=true maxlength=10 placeholder="10-digit mobile number" />
                    <SelectField
                        id="reviewService"
                        label="Service Type"
                        value=service
                        options=service_options
                        placeholder="Select a service"
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label>"Your Rating *"</label>
                    <StarPicker rating=rating />
                </div>
                <TextField id="reviewTitle" label="Review Title" value=title required=true placeholder="Summarize your experience" />
                <TextAreaField
                    id="reviewText"
                    label="Your Review"
                    value=body
                    required=true
                    rows=5
                    maxlength={REVIEW_MAX_CHARS as u32}
                    placeholder="Tell us about the work we did for you"
                />
                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() {
                            view! { {icon("loader")} " Submitting..." }.into_any()
                        } else {
                            view! { {icon("pen")} " Submit Review" }.into_any()
                        }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_hint_prefers_hover() {
        assert_eq!(rating_hint(0, 0), "Click to rate");
        assert_eq!(rating_hint(3, 0), "Good");
        assert_eq!(rating_hint(3, 5), "Excellent");
        assert_eq!(rating_hint(9, 0), "Click to rate");
    }
}
