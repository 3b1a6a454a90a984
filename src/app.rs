use std::rc::Rc;

use console_error_panic_hook::set_once as set_panic_hook;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::content::{
    certificate_by_src, ABOUT_HEADING, ABOUT_STATS, ABOUT_STORY, CERTIFICATES,
    CERTIFICATIONS_HEADING, CONTACT_HEADING, EXPERIENCE, EXPERIENCE_HEADING, FORM_NOTE,
    HERO_BADGES, INQUIRY_OPTIONS, INQUIRY_PLACEHOLDER, NAV_LINKS, OWNER_LOCATION, OWNER_NAME,
    OWNER_PHONE, OWNER_PHONE_URI, OWNER_PORTRAIT, OWNER_TAGLINE, PROJECTS, PROJECTS_HEADING,
    SERVICES, SKILLS_HEADING, SKILL_GROUPS, SOCIAL_LINKS,
};
use crate::dispatch;
use crate::presentation::PresentationCore;
use crate::trackers::{SectionObserver, ViewportTracker};
use elfolio_core::{FormField, CHAT_LINK, MAIL_RECIPIENT};

#[derive(Properties)]
pub(crate) struct AppProps {
    pub core: Rc<PresentationCore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

#[function_component(App)]
pub(crate) fn app(props: &AppProps) -> Html {
    let core = props.core.clone();
    let page = use_state(|| core.snapshot());
    {
        let core = core.clone();
        let page = page.clone();
        use_effect_with((), move |_| {
            let core_for_cb = core.clone();
            let subscription = core.subscribe(Rc::new(move || {
                page.set(core_for_cb.snapshot());
            }));
            move || drop(subscription)
        });
    }
    {
        let core = core.clone();
        use_effect_with((), move |_| {
            let tracker = ViewportTracker::install(&core);
            let observer = SectionObserver::connect(&core);
            move || {
                drop(tracker);
                drop(observer);
            }
        });
    }
    let page_value = (*page).clone();

    let particles: Html = core
        .particles()
        .iter()
        .map(|spec| {
            let style = format!(
                "left: {}%; animation-delay: {}s; animation-duration: {}s;",
                spec.x_percent, spec.delay_s, spec.duration_s
            );
            let class = format!("matrix-char {}", spec.style);
            html! {
                <div key={spec.id} class={class} style={style}>{ spec.glyph }</div>
            }
        })
        .collect();

    let scroll_y = page_value.scroll_y;
    let orb_float_style = format!(
        "left: {}%; top: {}%;",
        20.0 + (scroll_y * 0.001).sin() * 10.0,
        30.0 + (scroll_y * 0.002).cos() * 15.0
    );
    let orb_spin_style = format!(
        "right: {}%; top: {}%;",
        15.0 + (scroll_y * 0.0015).cos() * 20.0,
        60.0 + (scroll_y * 0.001).sin() * 10.0
    );
    let orb_pulse_style = format!(
        "left: {}%; bottom: {}%;",
        70.0 + (scroll_y * 0.003).sin() * 25.0,
        40.0 + (scroll_y * 0.002).cos() * 20.0
    );

    let section_class = |region: &str| {
        if page_value.visibility.contains(region) {
            "page-section section-visible"
        } else {
            "page-section"
        }
    };

    let nav_links: Html = NAV_LINKS
        .iter()
        .map(|link| {
            html! {
                <a class="nav-link" href={link.anchor}>{ link.label }</a>
            }
        })
        .collect();

    let hero_badges: Html = HERO_BADGES
        .iter()
        .map(|badge| html! { <span class="badge">{ *badge }</span> })
        .collect();

    let about_story: Html = ABOUT_STORY
        .iter()
        .map(|paragraph| html! { <p class="story">{ *paragraph }</p> })
        .collect();

    let about_stats: Html = ABOUT_STATS
        .iter()
        .map(|stat| {
            html! {
                <div class="card stat-card">
                    <div class="stat-value">{ stat.value }</div>
                    <div class="stat-label">{ stat.label }</div>
                </div>
            }
        })
        .collect();

    let project_cards: Html = PROJECTS
        .iter()
        .map(|project| {
            let stack: Html = project
                .stack
                .iter()
                .map(|item| html! { <span class="badge">{ *item }</span> })
                .collect();
            let highlights: Html = project
                .highlights
                .iter()
                .map(|item| html! { <li>{ *item }</li> })
                .collect();
            let action = match project.source {
                Some(url) => html! {
                    <a
                        class="button solid"
                        href={url}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { "View Source Code" }
                    </a>
                },
                None => html! {
                    <button class="button outline" type="button">{ "View Project" }</button>
                },
            };
            html! {
                <article class="card project-card">
                    <h3>{ project.title }</h3>
                    <p>{ project.summary }</p>
                    <div class="badge-row">{ stack }</div>
                    <ul class="highlight-list">{ highlights }</ul>
                    { action }
                </article>
            }
        })
        .collect();

    let achievements: Html = EXPERIENCE
        .achievements
        .iter()
        .map(|item| html! { <li>{ *item }</li> })
        .collect();
    let applied_skills: Html = EXPERIENCE
        .applied_skills
        .iter()
        .map(|skill| html! { <span class="badge">{ *skill }</span> })
        .collect();

    let skill_cards: Html = SKILL_GROUPS
        .iter()
        .map(|group| {
            let items: Html = group
                .items
                .iter()
                .map(|item| html! { <span class="badge wide">{ *item }</span> })
                .collect();
            html! {
                <article class="card skill-card">
                    <div class="skill-icon">{ group.icon }</div>
                    <h3>{ group.title }</h3>
                    <div class="badge-column">{ items }</div>
                </article>
            }
        })
        .collect();

    let certificate_cards: Html = CERTIFICATES
        .iter()
        .map(|entry| {
            let on_preview = {
                let core = core.clone();
                let src = entry.src;
                Callback::from(move |_: MouseEvent| core.open_preview(src.to_string()))
            };
            let tags: Html = entry
                .tags
                .iter()
                .map(|tag| html! { <span class="badge">{ *tag }</span> })
                .collect();
            html! {
                <article class="card certificate-card">
                    <div class="certificate-thumb" onclick={on_preview}>
                        <img src={entry.src} alt={entry.title} />
                    </div>
                    <h3>{ entry.title }</h3>
                    <p>{ entry.summary }</p>
                    <div class="badge-row">{ tags }</div>
                    <a class="button solid" href={entry.src} download={entry.download_name}>
                        { "Download Certificate" }
                    </a>
                </article>
            }
        })
        .collect();

    let services: Html = SERVICES
        .iter()
        .map(|service| html! { <li>{ *service }</li> })
        .collect();

    let social_links: Html = SOCIAL_LINKS
        .iter()
        .map(|link| {
            html! {
                <a
                    class="button outline small"
                    href={link.url}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    { link.label }
                </a>
            }
        })
        .collect();

    let inquiry_value = page_value.form.field(FormField::InquiryType).to_string();
    let inquiry_options: Html = std::iter::once(html! {
        <option value="" selected={inquiry_value.is_empty()}>{ INQUIRY_PLACEHOLDER }</option>
    })
    .chain(INQUIRY_OPTIONS.iter().map(|option| {
        html! {
            <option value={*option} selected={inquiry_value == *option}>{ *option }</option>
        }
    }))
    .collect();

    let on_name_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            core.set_form_field(FormField::Name, input.value());
        })
    };
    let on_email_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            core.set_form_field(FormField::Email, input.value());
        })
    };
    let on_company_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            core.set_form_field(FormField::Company, input.value());
        })
    };
    let on_inquiry_change = {
        let core = core.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            core.set_form_field(FormField::InquiryType, select.value());
        })
    };
    let on_message_input = {
        let core = core.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            core.set_form_field(FormField::Message, area.value());
        })
    };
    let on_submit = {
        let core = core.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatch::submit_contact(&core.form());
        })
    };

    let on_preview_close = {
        let core = core.clone();
        Callback::from(move |_: MouseEvent| core.close_preview())
    };
    let keep_preview_open = Callback::from(|event: MouseEvent| event.stop_propagation());
    let preview_overlay = if let Some(src) = page_value.preview.clone() {
        let alt = certificate_by_src(&src)
            .map(|entry| entry.title)
            .unwrap_or("Certificate Preview");
        html! {
            <div class="preview-backdrop" onclick={on_preview_close.clone()}>
                <div class="preview-frame" onclick={keep_preview_open}>
                    <img src={src} alt={alt} />
                    <button
                        class="preview-close"
                        type="button"
                        onclick={on_preview_close}
                    >
                        { "✕" }
                    </button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="page-root">
            <div class="matrix-rain" aria-hidden="true">{ particles }</div>
            <div class="parallax-layer" aria-hidden="true">
                <div class="orb orb-float" style={orb_float_style}></div>
                <div class="orb orb-spin" style={orb_spin_style}></div>
                <div class="orb orb-pulse" style={orb_pulse_style}></div>
            </div>

            <nav class="top-nav">
                <div class="nav-inner">
                    <div class="brand">{ OWNER_NAME }</div>
                    <div class="nav-links">{ nav_links }</div>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-inner">
                    <div class="portrait-ring">
                        <img src={OWNER_PORTRAIT} alt={OWNER_NAME} />
                    </div>
                    <h1>{ OWNER_NAME }</h1>
                    <p class="tagline">{ OWNER_TAGLINE }</p>
                    <div class="badge-row centered">{ hero_badges }</div>
                    <div class="hero-actions">
                        <a class="button solid" href="#contact">{ "Get In Touch" }</a>
                        <a class="button outline" href="#about">{ "Learn More" }</a>
                    </div>
                </div>
            </header>

            <section id="about" data-animate="" class={section_class("about")}>
                <div class="section-inner">
                    <h2>{ ABOUT_HEADING.title }</h2>
                    <p class="blurb">{ ABOUT_HEADING.blurb }</p>
                    <div class="split">
                        <div>
                            { about_story }
                            <div class="stat-grid">{ about_stats }</div>
                        </div>
                        <div class="card portrait-card">
                            <img src={OWNER_PORTRAIT} alt={OWNER_NAME} />
                        </div>
                    </div>
                </div>
            </section>

            <section class="page-section">
                <div class="section-inner">
                    <h2>{ PROJECTS_HEADING.title }</h2>
                    <p class="blurb">{ PROJECTS_HEADING.blurb }</p>
                    <div class="card-grid two">{ project_cards }</div>
                </div>
            </section>

            <section id="experience" data-animate="" class={section_class("experience")}>
                <div class="section-inner">
                    <h2>{ EXPERIENCE_HEADING.title }</h2>
                    <p class="blurb">{ EXPERIENCE_HEADING.blurb }</p>
                    <article class="card experience-card">
                        <div class="experience-head">
                            <div>
                                <h3>{ EXPERIENCE.role }</h3>
                                <p class="organization">{ EXPERIENCE.organization }</p>
                                <p class="setting">{ EXPERIENCE.setting }</p>
                            </div>
                            <div class="period">{ EXPERIENCE.period }</div>
                        </div>
                        <h4>{ "Key Achievements" }</h4>
                        <ul class="highlight-list">{ achievements }</ul>
                        <h4>{ "Core Skills Applied" }</h4>
                        <div class="badge-row">{ applied_skills }</div>
                    </article>
                </div>
            </section>

            <section id="skills" data-animate="" class={section_class("skills")}>
                <div class="section-inner">
                    <h2>{ SKILLS_HEADING.title }</h2>
                    <p class="blurb">{ SKILLS_HEADING.blurb }</p>
                    <div class="card-grid five">{ skill_cards }</div>
                </div>
            </section>

            <section id="certifications" data-animate="" class={section_class("certifications")}>
                <div class="section-inner">
                    <h2>{ CERTIFICATIONS_HEADING.title }</h2>
                    <p class="blurb">{ CERTIFICATIONS_HEADING.blurb }</p>
                    <div class="card-grid two">{ certificate_cards }</div>
                </div>
            </section>

            { preview_overlay }

            <section id="contact" data-animate="" class={section_class("contact")}>
                <div class="section-inner">
                    <h2>{ CONTACT_HEADING.title }</h2>
                    <p class="blurb">{ CONTACT_HEADING.blurb }</p>
                    <div class="split">
                        <div class="contact-info">
                            <h3>{ "Get In Touch" }</h3>
                            <div class="info-row">
                                <span class="info-icon">{ "📧" }</span>
                                <div>
                                    <p class="info-label">{ "Email" }</p>
                                    <p class="info-value">{ MAIL_RECIPIENT }</p>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon">{ "📱" }</span>
                                <div>
                                    <p class="info-label">{ "Phone" }</p>
                                    <p class="info-value">{ OWNER_PHONE }</p>
                                </div>
                            </div>
                            <div class="info-row">
                                <span class="info-icon">{ "🌍" }</span>
                                <div>
                                    <p class="info-label">{ "Location" }</p>
                                    <p class="info-value">{ OWNER_LOCATION }</p>
                                </div>
                            </div>
                            <h4>{ "Services Offered" }</h4>
                            <ul class="service-list">{ services }</ul>
                            <div class="contact-actions">
                                <a
                                    class="button solid"
                                    href={CHAT_LINK}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    { "💬 WhatsApp" }
                                </a>
                                <a class="button outline" href={OWNER_PHONE_URI}>
                                    { "📞 Schedule a Call" }
                                </a>
                            </div>
                        </div>
                        <div class="card form-card">
                            <h3>{ "Send a Message" }</h3>
                            <form onsubmit={on_submit}>
                                <div class="field-row">
                                    <div class="field">
                                        <label for="name">{ "Name *" }</label>
                                        <input
                                            id="name"
                                            name="name"
                                            type="text"
                                            required=true
                                            value={page_value.form.field(FormField::Name).to_string()}
                                            oninput={on_name_input}
                                        />
                                    </div>
                                    <div class="field">
                                        <label for="email">{ "Email *" }</label>
                                        <input
                                            id="email"
                                            name="email"
                                            type="email"
                                            required=true
                                            value={page_value.form.field(FormField::Email).to_string()}
                                            oninput={on_email_input}
                                        />
                                    </div>
                                </div>
                                <div class="field">
                                    <label for="company">{ "Company" }</label>
                                    <input
                                        id="company"
                                        name="company"
                                        type="text"
                                        value={page_value.form.field(FormField::Company).to_string()}
                                        oninput={on_company_input}
                                    />
                                </div>
                                <div class="field">
                                    <label for="inquiryType">{ "Inquiry Type" }</label>
                                    <select
                                        id="inquiryType"
                                        name="inquiryType"
                                        onchange={on_inquiry_change}
                                    >
                                        { inquiry_options }
                                    </select>
                                </div>
                                <div class="field">
                                    <label for="message">{ "Message *" }</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows="4"
                                        required=true
                                        value={page_value.form.field(FormField::Message).to_string()}
                                        oninput={on_message_input}
                                    >
                                    </textarea>
                                </div>
                                <button class="button solid full" type="submit">
                                    { "Send Message" }
                                </button>
                                <p class="form-note">{ FORM_NOTE }</p>
                            </form>
                        </div>
                    </div>
                    <div class="social-row">
                        <h4>{ "Connect With Me" }</h4>
                        <div class="badge-row centered">{ social_links }</div>
                    </div>
                </div>
            </section>
        </div>
    }
}

pub(crate) fn run() {
    set_panic_hook();
    let core = PresentationCore::new();
    yew::Renderer::<App>::with_props(AppProps { core }).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use js_sys::Date;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn mount(root_id: &str) -> (web_sys::Element, Rc<PresentationCore>) {
        set_panic_hook();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(root_id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        let core = PresentationCore::with_seed(7);
        let _app_handle = yew::Renderer::<App>::with_root_and_props(
            root.clone(),
            AppProps { core: core.clone() },
        )
        .render();
        let start = Date::now();
        loop {
            if root.query_selector("#contact").ok().flatten().is_some() {
                break;
            }
            if Date::now() - start > 5000.0 {
                panic!("sections not rendered after 5s");
            }
            TimeoutFuture::new(10).await;
        }
        (root, core)
    }

    #[wasm_bindgen_test(async)]
    async fn app_renders_every_tracked_section() {
        let (root, core) = mount("app-sections-root").await;
        for region in ["about", "experience", "skills", "certifications", "contact"] {
            let section = root
                .query_selector(&format!("#{region}"))
                .ok()
                .flatten()
                .unwrap_or_else(|| panic!("missing section {region}"));
            assert_eq!(section.get_attribute("data-animate").as_deref(), Some(""));
        }
        let rain = root
            .query_selector_all(".matrix-char")
            .expect("query rain layer");
        assert_eq!(rain.length() as usize, core.particles().len());
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn visibility_mark_toggles_the_section_class() {
        let (root, core) = mount("app-visibility-root").await;
        core.mark_section_visible("about");
        let start = Date::now();
        loop {
            let about = root
                .query_selector("#about")
                .ok()
                .flatten()
                .expect("about section");
            if about.class_name().contains("section-visible") {
                break;
            }
            if Date::now() - start > 5000.0 {
                panic!("section class not applied after 5s");
            }
            TimeoutFuture::new(10).await;
        }
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn preview_overlay_follows_core_state() {
        let (root, core) = mount("app-preview-root").await;
        assert!(root.query_selector(".preview-backdrop").ok().flatten().is_none());
        core.open_preview("/iosh-certificate.jpg".to_string());
        let start = Date::now();
        loop {
            if root.query_selector(".preview-backdrop").ok().flatten().is_some() {
                break;
            }
            if Date::now() - start > 5000.0 {
                panic!("preview overlay not shown after 5s");
            }
            TimeoutFuture::new(10).await;
        }
        core.close_preview();
        let start = Date::now();
        loop {
            if root.query_selector(".preview-backdrop").ok().flatten().is_none() {
                break;
            }
            if Date::now() - start > 5000.0 {
                panic!("preview overlay not removed after 5s");
            }
            TimeoutFuture::new(10).await;
        }
        root.remove();
    }
}
