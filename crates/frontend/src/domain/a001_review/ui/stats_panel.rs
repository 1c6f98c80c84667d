use crate::shared::stars::StarRow;
use contracts::domain::a001_review::RatingStats;
use contracts::enums::StarRating;
use leptos::prelude::*;

/// Общая оценка и распределение по звёздам
#[component]
pub fn StatsPanel(#[prop(into)] stats: Signal<Option<RatingStats>>) -> impl IntoView {
    let current = move || stats.get().unwrap_or_default();
    let average = Signal::derive(move || current().average_rating);

    view! {
        <div class="reviews-stats">
            <div class="reviews-stats__overall">
                <div class="reviews-stats__average">{move || current().average_label()}</div>
                <StarRow rating=average />
                <div class="reviews-stats__total">
                    {move || format!("Based on {} reviews", current().total_reviews)}
                </div>
            </div>
            <div class="reviews-stats__breakdown">
                {StarRating::descending()
                    .into_iter()
                    .map(|rating| {
                        let count = move || current().rating_breakdown.count(rating);
                        let width = move || {
                            format!("width: {:.0}%;", current().rating_breakdown.percentage(rating))
                        };
                        view! {
                            <div class="rating-bar">
                                <span class="rating-bar__label">{format!("{}★", rating.value())}</span>
                                <div class="rating-bar__track">
                                    <div class="rating-bar__fill" style=width></div>
                                </div>
                                <span class="rating-bar__count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
