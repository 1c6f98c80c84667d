use contracts::enums::RatingFilter;
use leptos::prelude::*;

#[component]
pub fn FilterBar(
    #[prop(into)] active: Signal<RatingFilter>,
    on_select: Callback<RatingFilter>,
) -> impl IntoView {
    view! {
        <div class="review-filters" role="group" aria-label="Filter reviews by rating">
            {RatingFilter::all_options()
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || active.get() == filter
                            data-rating=filter.query_value()
                            on:click=move |_| {
                                if active.get_untracked() != filter {
                                    on_select.run(filter);
                                }
                            }
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
