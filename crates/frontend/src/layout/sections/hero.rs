use crate::layout::header::follow_anchor;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">"Handcrafted Woodwork for Your Home"</h1>
                    <p class="hero-subtitle">
                        "Custom furniture, doors, windows and restoration by experienced carpenters."
                    </p>
                    <div class="hero-actions">
                        <a href="#products" class="btn btn-primary" on:click=move |ev| follow_anchor(&ev, "#products")>
                            {icon("box")}
                            " Our Products"
                        </a>
                        <a href="#contact" class="btn btn-outline" on:click=move |ev| follow_anchor(&ev, "#contact")>
                            {icon("phone")}
                            " Get a Quote"
                        </a>
                    </div>
                    <div class="hero-stats">
                        <div class="stat-item"><strong>"25+"</strong><span>"Years of Experience"</span></div>
                        <div class="stat-item"><strong>"1500+"</strong><span>"Projects Completed"</span></div>
                        <div class="stat-item"><strong>"100%"</strong><span>"Solid Wood"</span></div>
                    </div>
                </div>
                <div class="hero-image">
                    <img src="image/hero.jpeg" alt="Carpenter at work" />
                </div>
            </div>
        </section>
    }
}
