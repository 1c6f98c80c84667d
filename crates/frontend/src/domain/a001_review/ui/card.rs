use crate::shared::date_utils::format_review_date;
use crate::shared::icons::icon;
use crate::shared::stars::StarRow;
use contracts::domain::a001_review::{Review, ReviewId};
use leptos::prelude::*;

/// Карточка отзыва. Текст попадает в DOM только текстовыми узлами.
#[component]
pub fn ReviewCard(
    review: Review,
    /// Отзыв уже отмечен полезным в этой сессии
    #[prop(into)]
    marked: Signal<bool>,
    on_helpful: Callback<ReviewId>,
) -> impl IntoView {
    let id = review.id;
    let rating = f64::from(review.rating);
    let helpful = review.helpful;

    view! {
        <article class="review-card" data-review-id=id.to_string()>
            <header class="review-card__header">
                <div class="review-card__avatar">{icon("user")}</div>
                <div class="review-card__author">
                    <h4 class="review-card__name">
                        {review.name.clone()}
                        {review.verified.then(|| view! {
                            <span class="review-card__verified" title="Verified Customer">
                                {icon("check-circle")}
                                " Verified"
                            </span>
                        })}
                    </h4>
                    <div class="review-card__rating">
                        <StarRow rating=rating />
                        <span class="review-card__rating-number">{format!("{:.1}", rating)}</span>
                    </div>
                </div>
                <time class="review-card__date">{format_review_date(&review.date)}</time>
            </header>

            <h5 class="review-card__title">{review.title.clone()}</h5>
            <p class="review-card__text">{review.body.clone()}</p>

            <footer class="review-card__footer">
                <span class="review-card__service">
                    {icon("tag")}
                    {review.service_type.display_name()}
                </span>
                <button
                    class="review-card__helpful"
                    class:is-marked=move || marked.get()
                    disabled=move || marked.get()
                    on:click=move |_| on_helpful.run(id)
                >
                    {icon("thumbs-up")}
                    {format!(" Helpful ({})", helpful)}
                </button>
            </footer>
        </article>
    }
}
