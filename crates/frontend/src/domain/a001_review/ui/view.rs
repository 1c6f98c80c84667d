use super::card::ReviewCard;
use super::filter_bar::FilterBar;
use super::sink::FeedSignals;
use super::stats_panel::StatsPanel;
use super::write_form::WriteReviewForm;
use crate::domain::a001_review::controller::FeedCommand;
use crate::domain::a001_review::SiteFeedController;
use crate::shared::config::site_config;
use crate::shared::icons::icon;
use crate::shared::viewport::{window_width, Debouncer};
use contracts::domain::a001_review::{ReviewDraft, ReviewId};
use contracts::enums::RatingFilter;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Секция "Customer Reviews": статистика, фильтр, лента, форма отзыва
#[component]
pub fn ReviewsSection(
    controller: StoredValue<SiteFeedController, LocalStorage>,
    signals: FeedSignals,
) -> impl IntoView {
    let dispatch = move |command: FeedCommand| {
        let ctrl = controller.get_value();
        spawn_local(async move { ctrl.dispatch(command).await });
    };

    dispatch(FeedCommand::LoadInitial);

    let debouncer = Debouncer::new();
    let delay = site_config().reviews.resize_debounce_ms;
    let resize = window_event_listener(ev::resize, move |_| {
        debouncer.schedule(delay, move || dispatch(FeedCommand::Resize(window_width())));
    });
    on_cleanup(move || resize.remove());

    let on_filter = Callback::new(move |filter: RatingFilter| dispatch(FeedCommand::SetFilter(filter)));
    let on_helpful = Callback::new(move |id: ReviewId| dispatch(FeedCommand::MarkHelpful(id)));
    let open_form = move |_| signals.form_open.set(true);
    let close_form = Callback::new(move |_: ()| signals.form_open.set(false));

    let on_submit = Callback::new(move |draft: ReviewDraft| dispatch(FeedCommand::Submit(draft)));

    let feed = signals.feed;
    let submitting = Signal::derive(move || feed.with(|f| f.submitting));
    let active_filter = Signal::derive(move || feed.with(|f| f.filter));
    let first_page_loading = move || feed.with(|f| f.loading_first_page);
    let is_empty = move || feed.with(|f| f.reviews.is_empty() && !f.loading_first_page);

    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Customer Reviews"</h2>
                    <p class="section-subtitle">"What our customers say about our craftsmanship"</p>
                </div>

                <div class="reviews-summary">
                    <StatsPanel stats=signals.stats />
                    <button class="btn btn-primary write-review-btn" on:click=open_form>
                        {icon("pen")}
                        " Write a Review"
                    </button>
                </div>

                <FilterBar active=active_filter on_select=on_filter />

                <div class="reviews-grid">
                    <Show when=first_page_loading>
                        <div class="reviews-loading">
                            {icon("loader")}
                            <p>"Loading reviews..."</p>
                        </div>
                    </Show>
                    <Show when=is_empty>
                        <div class="no-reviews">
                            {icon("comments")}
                            <h3>"No reviews yet"</h3>
                            <p>"Be the first to share your experience!"</p>
                            <button class="btn btn-primary" on:click=open_form>
                                "Write First Review"
                            </button>
                        </div>
                    </Show>
                    <For
                        each={move || feed.with(|f| if f.loading_first_page { Vec::new() } else { f.reviews.clone() })}
                        key=|review| (review.id, review.helpful)
                        children=move |review| {
                            let id = review.id;
                            let marked = Signal::derive(move || feed.with(|f| f.is_helpful_marked(id)));
                            view! { <ReviewCard review=review marked=marked on_helpful=on_helpful /> }
                        }
                    />
                </div>

                <Show when=move || feed.with(|f| f.has_more && !f.loading_first_page)>
                    <div class="load-more-container">
                        <button
                            class="btn btn-outline load-more-btn"
                            disabled=move || feed.with(|f| f.loading_more)
                            on:click=move |_| dispatch(FeedCommand::LoadMore)
                        >
                            {move || if feed.with(|f| f.loading_more) {
                                view! { {icon("loader")} " Loading..." }.into_any()
                            } else {
                                view! { {icon("refresh")} " Load More Reviews" }.into_any()
                            }}
                        </button>
                    </div>
                </Show>
            </div>

            <Show when=move || signals.form_open.get()>
                <WriteReviewForm submitting=submitting on_submit=on_submit on_close=close_form />
            </Show>
        </section>
    }
}
