use crate::layout::header::follow_anchor;
use crate::layout::header::header::NAV_LINKS;
use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::enums::ServiceType;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <h3>"WoodCraft Carpentry Works"</h3>
                    <p>"Custom furniture, doors, windows and repairs, built by hand since 1998."</p>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .map(|&(id, label)| {
                                let href = format!("#{id}");
                                view! {
                                    <li>
                                        <a href=href.clone() on:click=move |ev| follow_anchor(&ev, &href)>{label}</a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-services">
                    <h4>"Services"</h4>
                    <ul>
                        {ServiceType::all()
                            .into_iter()
                            .map(|s| view! { <li>{s.display_name()}</li> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <p>{icon("phone")} " +91 98765 43210"</p>
                    <p>{icon("mail")} " info@woodcraft.example"</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} WoodCraft Carpentry Works. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
