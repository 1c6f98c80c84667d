use crate::shared::icons::icon;
use contracts::enums::ServiceType;
use leptos::prelude::*;

fn service_blurb(service: ServiceType) -> &'static str {
    match service {
        ServiceType::CustomFurniture => "Beds, wardrobes, dining sets and more, built to your measurements.",
        ServiceType::DoorsWindows => "Solid wood doors, frames and windows made and fitted on site.",
        ServiceType::RepairRestoration => "Repairs, polishing and restoration of old and antique pieces.",
        ServiceType::Commercial => "Office interiors, shop counters and fit-outs for businesses.",
        ServiceType::Other => "Anything else in wood: ask us and we will quote it.",
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-subtitle">"From a single shelf to a complete interior"</p>
                </div>
                <div class="services-grid">
                    {ServiceType::all()
                        .into_iter()
                        .map(|service| view! {
                            <div class="service-card">
                                <div class="service-icon">{icon("tag")}</div>
                                <h3>{service.display_name()}</h3>
                                <p>{service_blurb(service)}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
