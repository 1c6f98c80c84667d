use crate::layout::global_context::use_site;
use crate::shared::config::site_config;
use crate::shared::form_fields::{SelectField, TextAreaField, TextField};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, Notifier};
use contracts::domain::a003_contact::{ContactRequest, ContactSubject};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const SENT: &str = "Thank you for your message! We'll get back to you within 24 hours.";

#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    fn request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            subject: ContactSubject::from_code(&self.subject.get_untracked()),
            message: self.message.get_untracked(),
        }
    }

    fn reset(&self) {
        for field in [self.name, self.phone, self.email, self.subject, self.message] {
            field.set(String::new());
        }
    }
}

/// Секция "Contact Us". Отправка имитируется задержкой, бэкенда у формы нет.
#[component]
pub fn ContactSection() -> impl IntoView {
    let site = use_site();
    let notifications = use_notifications();
    let fields = ContactFields::new();
    let sending = RwSignal::new(false);

    // "Get Quote" из карточки изделия
    Effect::new(move |_| {
        if let Some(prefill) = site.contact_prefill.get() {
            fields.subject.set(prefill.subject.code().to_string());
            fields.message.set(prefill.message);
            site.contact_prefill.set(None);
        }
    });

    let subject_options: Vec<(&'static str, &'static str)> = ContactSubject::all()
        .into_iter()
        .map(|s| (s.code(), s.display_name()))
        .collect();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let request = fields.request().normalized();
        if let Err(e) = request.validate() {
            notifications.error(&e.to_string());
            return;
        }

        sending.set(true);
        spawn_local(async move {
            TimeoutFuture::new(site_config().contact.send_delay_ms).await;
            log::info!(
                "contact request from {} ({})",
                request.name,
                request.subject.map(|s| s.code()).unwrap_or("-")
            );
            fields.reset();
            sending.set(false);
            notifications.success(SENT);
        });
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-subtitle">"Tell us about your project and we'll get back to you"</p>
                </div>
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="info-card">
                            {icon("phone")}
                            <div>
                                <h4>"Call Us"</h4>
                                <p>"+91 98765 43210"</p>
                            </div>
                        </div>
                        <div class="info-card">
                            {icon("mail")}
                            <div>
                                <h4>"Email"</h4>
                                <p>"info@woodcraft.example"</p>
                            </div>
                        </div>
                        <div class="info-card">
                            {icon("map-pin")}
                            <div>
                                <h4>"Workshop"</h4>
                                <p>"Industrial Area, Phase 2"</p>
                            </div>
                        </div>
                    </div>

                    <form id="contactForm" class="contact-form" novalidate=true on:submit=handle_submit>
                        <div class="form-row">
                            <TextField id="contactName" label="Your Name" value=fields.name required=true disabled=sending />
                            <TextField id="contactPhone" label="Phone Number" value=fields.phone input_type="tel" required=true maxlength=10 disabled=sending />
                        </div>
                        <div class="form-row">
                            <TextField id="contactEmail" label="Email Address" value=fields.email input_type="email" disabled=sending />
                            <SelectField
                                id="contactSubject"
                                label="Subject"
                                value=fields.subject
                                options=subject_options
                                placeholder="Select a subject"
                                required=true
                                disabled=sending
                            />
                        </div>
                        <TextAreaField id="contactMessage" label="Message" value=fields.message required=true rows=5 disabled=sending />
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || sending.get()>
                            {move || if sending.get() {
                                view! { {icon("loader")} " Sending..." }.into_any()
                            } else {
                                view! { {icon("mail")} " Send Message" }.into_any()
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
