use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::components::chat_button::{ButtonStyle, ChatButton, WhatsAppIcon, CHAT_BUTTON_STYLES};
use crate::components::reveal::{stagger, Motion, Reveal, Trigger, REVEAL_STYLES};
use crate::components::video_embed::{VideoEmbed, VIDEO_STYLES};
use crate::config;
use crate::contact::Inquiry;
use crate::content::{BENEFITS, EXPECTATIONS, SOLUTIONS};

const NAV_LINKS: [&str; 6] = ["Products", "Use cases", "Integrations", "Company", "Resources", "Pricing"];

const IN_VIEW: Trigger = Trigger::InView { amount: 0.1 };
const IN_VIEW_WIDE: Trigger = Trigger::InView { amount: 0.3 };

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <Reveal tag="nav" motion={Motion::SlideDown} trigger={Trigger::Mount} class="top-nav">
            <div class="nav-logo">
                <img src={config::LOGO_URL} alt={config::BRAND} />
            </div>
            <div class="nav-links">
                { for NAV_LINKS.iter().map(|label| html! {
                    <a href="#" class="nav-link">{ *label }</a>
                }) }
            </div>
            <div class="nav-actions">
                <ChatButton
                    inquiry={Inquiry::General}
                    label="Chat with your account manager"
                    class="nav-cta"
                />
            </div>
        </Reveal>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <Reveal motion={Motion::SlideUp} trigger={Trigger::Mount} delay_ms={stagger(0)} tag="h1" class="hero-title">
                        <span class="hero-title-lead">{"Unlock Seamless Global Creator Payouts:"}</span>
                        {" "}
                        <span class="accent">{"Brainlabs x Payouts.com"}</span>
                    </Reveal>
                    <Reveal motion={Motion::SlideUp} trigger={Trigger::Mount} delay_ms={stagger(1)} tag="p" class="hero-subtitle">
                        {"Automate Tax Compliance, Financial Reconciliation, and Scalable Growth for Your Global Creator Network."}
                    </Reveal>
                    <Reveal motion={Motion::SlideUp} trigger={Trigger::Mount} delay_ms={stagger(2)} class="hero-actions">
                        <ChatButton inquiry={Inquiry::Demo} label="Chat about demo options" />
                        <ChatButton inquiry={Inquiry::Pricing} label="Chat about pricing" variant={ButtonStyle::Outline} />
                    </Reveal>
                </div>
                <Reveal motion={Motion::ScaleUp} trigger={Trigger::Mount} class="hero-media">
                    <div class="hero-media-shadow"></div>
                    <div class="hero-media-frame">
                        <VideoEmbed />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Introduction)]
pub fn introduction() -> Html {
    html! {
        <Reveal tag="section" motion={Motion::Fade} trigger={IN_VIEW_WIDE} class="intro">
            <p>
                {"As a global leader in digital marketing, Brainlabs understands the importance of efficient and reliable creator payments. Payouts.com offers a transformative solution, designed to integrate seamlessly with your existing workflows, eliminating manual effort, reducing costs, and empowering your global creator network to thrive."}
            </p>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <Reveal tag="h2" motion={Motion::SlideUp} trigger={IN_VIEW} delay_ms={stagger(0)}>
                { props.title.to_string() }
            </Reveal>
            <Reveal motion={Motion::SlideUp} trigger={IN_VIEW} delay_ms={stagger(1)} class="section-rule" />
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <Reveal tag="p" motion={Motion::SlideUp} trigger={IN_VIEW} delay_ms={stagger(2)} class="section-subtitle">
                            { subtitle.to_string() }
                        </Reveal>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    html! {
        <section class="section">
            <SectionHeading title="Key Benefits" />
            <div class="benefit-grid">
                { for BENEFITS.iter().map(|benefit| html! {
                    <Reveal motion={Motion::SlideUp} trigger={IN_VIEW} class="card benefit-card">
                        <div class="benefit-icon">
                            <span>{ benefit.icon }</span>
                        </div>
                        <h3>{ benefit.title }</h3>
                        <p>{ benefit.description }</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <section class="section-band">
            <div class="section">
                <SectionHeading title="Solution Details" />
                <div class="solution-grid">
                    { for SOLUTIONS.iter().map(|solution| html! {
                        <Reveal motion={Motion::ScaleUp} trigger={IN_VIEW} class="card solution-card">
                            <h3>{ solution.title }</h3>
                            <ul>
                                { for solution.points.iter().map(|point| html! {
                                    <li>
                                        <span class="bullet">{"•"}</span>
                                        <p>{ *point }</p>
                                    </li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Expectations)]
pub fn expectations() -> Html {
    html! {
        <section class="section">
            <SectionHeading
                title="What Brainlabs Can Expect"
                subtitle={AttrValue::Static("Our platform transforms payment processes, giving you more time to focus on growth")}
            />
            <div class="expectation-grid">
                { for EXPECTATIONS.iter().map(|expectation| html! {
                    <Reveal motion={Motion::Fade} trigger={IN_VIEW} class="card expectation-card">
                        <div class="expectation-icon">
                            <span>{ expectation.icon }</span>
                        </div>
                        <h3>{ expectation.title }</h3>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <Reveal tag="section" motion={Motion::Fade} trigger={IN_VIEW_WIDE} class="cta-band">
            <div class="cta-content">
                <h2>{"Ready to Transform Your Creator Payouts?"}</h2>
                <p>{"Contact us today to learn how Payouts.com can revolutionize your global creator payout process!"}</p>
                <div class="cta-actions">
                    <ChatButton
                        inquiry={Inquiry::Transformation}
                        label="Chat with your account manager"
                        icon_size={24}
                        class="cta-button"
                    />
                    <ChatButton
                        inquiry={Inquiry::Quote}
                        label="Get a personalized quote"
                        variant={ButtonStyle::OutlineDark}
                        icon_size={24}
                        class="cta-button"
                    />
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-top">
                <img src={config::LOGO_URL} alt={config::BRAND} class="footer-logo" />
                <div class="footer-social">
                    <a href={Inquiry::General.link()} target="_blank" rel="noopener noreferrer" class="footer-icon-link">
                        <WhatsAppIcon size={24} />
                        <span class="footer-icon-label">{"Chat on WhatsApp"}</span>
                    </a>
                    <a href="#" class="footer-icon-link" aria-label="LinkedIn">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                            <rect width="4" height="12" x="2" y="9"></rect>
                            <circle cx="4" cy="4" r="2"></circle>
                        </svg>
                    </a>
                    <a href="#" class="footer-icon-link" aria-label="Twitter">
                        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none"
                            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"></path>
                        </svg>
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <div class="footer-copyright">
                    { format!("© {} {}. All rights reserved.", year, config::BRAND) }
                </div>
                <div class="footer-legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href={Inquiry::Question.link()} target="_blank" rel="noopener noreferrer">{"Contact Us"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="landing-page">
            <NavBar />
            <Hero />
            <Introduction />
            <Benefits />
            <Solutions />
            <Expectations />
            <CallToAction />
            <Footer />
            <style>{ REVEAL_STYLES }</style>
            <style>{ CHAT_BUTTON_STYLES }</style>
            <style>{ VIDEO_STYLES }</style>
            <style>{ LANDING_STYLES }</style>
        </div>
    }
}

const LANDING_STYLES: &str = r#"
:root {
    --primary: #14112b;
    --primary-rgb: 20, 17, 43;
    --accent: #d4f36b;
    --accent-rgb: 212, 243, 107;
    --accent-hover: #c5e85a;
    --cream: #f9f6ed;
}

.landing-page {
    min-height: 100vh;
    background: var(--primary);
    color: #ffffff;
    overflow-x: hidden;
}

.accent {
    color: var(--accent);
}

.top-nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
}

.nav-logo img {
    height: 2rem;
}

.nav-links {
    display: none;
    gap: 1.5rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.nav-link {
    color: #ffffff;
    text-decoration: none;
    transition: color 0.3s ease;
}

.nav-link:hover {
    color: var(--accent);
}

.nav-cta {
    display: none;
}

.nav-cta .chat-button {
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
}

.hero {
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem 1.5rem;
}

.hero-grid {
    display: grid;
    gap: 2.5rem;
    align-items: center;
}

.hero-copy {
    order: 2;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.2;
    margin-bottom: 1.5rem;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.8);
    line-height: 1.6;
    margin-bottom: 2rem;
}

.hero-actions {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.hero-media {
    order: 1;
    position: relative;
    border-radius: 0.75rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.hero-media-shadow {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.2);
    backdrop-filter: blur(4px);
    border-radius: 0.75rem;
    transform: translate(-1rem, 1rem);
    z-index: 0;
}

.hero-media-frame {
    position: relative;
    z-index: 10;
    border-radius: 0.75rem;
    overflow: hidden;
}

.intro {
    max-width: 56rem;
    margin: 0 auto;
    padding: 4rem 1.5rem;
    text-align: center;
}

.intro p {
    font-size: 1.25rem;
    line-height: 1.7;
    color: rgba(255, 255, 255, 0.9);
}

.section {
    max-width: 80rem;
    margin: 0 auto;
    padding: 4rem 1.5rem;
}

.section-band {
    background: rgba(255, 255, 255, 0.05);
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h2 {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.section-rule {
    width: 6rem;
    height: 0.375rem;
    margin: 0 auto;
    background: var(--accent);
    border-radius: 9999px;
}

.section-subtitle {
    max-width: 48rem;
    margin: 1.5rem auto 0;
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.8);
}

.card {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    padding: 2rem;
}

.benefit-grid {
    display: grid;
    gap: 2rem;
}

.benefit-card:hover {
    transform: translateY(-5px);
    border-color: rgba(var(--accent-rgb), 0.3);
}

.benefit-icon {
    width: 3.5rem;
    height: 3.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1.5rem;
    background: rgba(var(--accent-rgb), 0.1);
    border-radius: 0.75rem;
    font-size: 1.875rem;
}

.benefit-card h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.benefit-card p {
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.6;
}

.solution-grid {
    display: grid;
    gap: 2.5rem;
}

.solution-card h3 {
    font-size: 1.5rem;
    font-weight: 600;
    margin-bottom: 1.5rem;
    color: var(--accent);
}

.solution-card ul {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.solution-card li {
    display: flex;
    align-items: flex-start;
}

.solution-card li p {
    margin: 0;
    color: rgba(255, 255, 255, 0.8);
}

.bullet {
    color: var(--accent);
    margin-right: 0.75rem;
}

.expectation-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.expectation-card {
    padding: 1.5rem;
    border-radius: 0.75rem;
    text-align: center;
}

.expectation-card:hover {
    border-color: rgba(var(--accent-rgb), 0.3);
}

.expectation-icon {
    width: 3rem;
    height: 3rem;
    margin: 0 auto 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(var(--accent-rgb), 0.1);
    border-radius: 9999px;
    font-size: 1.5rem;
}

.expectation-card h3 {
    font-weight: 500;
    font-size: 1rem;
}

.cta-band {
    padding: 4rem 1.5rem;
    background: var(--cream);
}

.cta-content {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
    color: var(--primary);
}

.cta-content h2 {
    font-size: 1.875rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
}

.cta-content p {
    max-width: 42rem;
    margin: 0 auto 2.5rem;
    font-size: 1.25rem;
    color: rgba(var(--primary-rgb), 0.8);
}

.cta-actions {
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 1rem;
}

.cta-button .chat-button {
    padding: 0.75rem 2rem;
    font-size: 1.125rem;
}

.footer {
    max-width: 80rem;
    margin: 0 auto;
    padding: 3rem 1.5rem;
}

.footer-top {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 2.5rem;
}

.footer-logo {
    height: 2rem;
    margin-bottom: 1.5rem;
}

.footer-social {
    display: flex;
    gap: 1.5rem;
}

.footer-icon-link {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
    transition: color 0.3s ease;
}

.footer-icon-link svg {
    width: 1.25rem;
    height: 1.25rem;
}

.footer-icon-link:hover {
    color: var(--accent);
}

.footer-icon-label {
    display: none;
}

.footer-bottom {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    padding-top: 2.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.footer-copyright {
    margin-bottom: 1rem;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
}

.footer-legal {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem 1.5rem;
}

.footer-legal a {
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.5);
    text-decoration: none;
    transition: color 0.3s ease;
}

.footer-legal a:hover {
    color: var(--accent);
}

@media (min-width: 640px) {
    .hero-actions,
    .cta-actions {
        flex-direction: row;
    }
}

@media (min-width: 768px) {
    .nav-links,
    .nav-cta,
    .footer-icon-label {
        display: flex;
    }

    .hero {
        padding: 6rem 1.5rem;
    }

    .hero-grid,
    .benefit-grid,
    .solution-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .expectation-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .hero-copy {
        order: 1;
    }

    .hero-media {
        order: 2;
    }

    .hero-title {
        font-size: 3rem;
    }

    .section,
    .cta-band {
        padding: 6rem 1.5rem;
    }

    .section-heading h2,
    .cta-content h2 {
        font-size: 2.25rem;
    }

    .footer-top,
    .footer-bottom {
        flex-direction: row;
    }

    .footer-logo,
    .footer-copyright {
        margin-bottom: 0;
    }
}

@media (min-width: 1024px) {
    .top-nav,
    .hero,
    .section,
    .intro,
    .cta-band,
    .footer {
        padding-left: 5rem;
        padding-right: 5rem;
    }

    .hero-title {
        font-size: 3.75rem;
    }

    .benefit-grid {
        grid-template-columns: repeat(3, 1fr);
    }

    .expectation-grid {
        grid-template-columns: repeat(5, 1fr);
    }
}
"#;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    async fn render<C>() -> String
    where
        C: BaseComponent,
        C::Properties: Default,
    {
        LocalSet::new()
            .run_until(LocalServerRenderer::<C>::new().hydratable(false).render())
            .await
    }

    // Text nodes are html-escaped; anchor on the part of each title before any `&` or `'`.
    fn anchor(title: &str) -> &str {
        title.split(['&', '\'']).next().unwrap_or(title)
    }

    fn assert_in_order(html: &str, titles: &[&str]) {
        let mut last = 0;
        for title in titles {
            let found = html[last..]
                .find(anchor(title))
                .unwrap_or_else(|| panic!("{title:?} missing or out of order"));
            last += found + anchor(title).len();
        }
    }

    #[tokio::test]
    async fn benefits_render_one_tile_per_entry_in_order() {
        let html = render::<Benefits>().await;
        assert_eq!(html.matches("benefit-card").count(), BENEFITS.len());
        let titles: Vec<&str> = BENEFITS.iter().map(|b| b.title).collect();
        assert_in_order(&html, &titles);
    }

    #[tokio::test]
    async fn solutions_render_one_tile_per_entry_in_order() {
        let html = render::<Solutions>().await;
        assert_eq!(html.matches("solution-card").count(), SOLUTIONS.len());
        let titles: Vec<&str> = SOLUTIONS.iter().map(|s| s.title).collect();
        assert_in_order(&html, &titles);
        let points: usize = SOLUTIONS.iter().map(|s| s.points.len()).sum();
        assert_eq!(html.matches("<li>").count(), points);
    }

    #[tokio::test]
    async fn expectations_render_one_tile_per_entry_in_order() {
        let html = render::<Expectations>().await;
        assert_eq!(html.matches("expectation-card").count(), EXPECTATIONS.len());
        let titles: Vec<&str> = EXPECTATIONS.iter().map(|e| e.title).collect();
        assert_in_order(&html, &titles);
    }

    #[tokio::test]
    async fn hero_starts_with_spinner_and_hidden_video() {
        let html = render::<Hero>().await;
        assert!(html.contains("video-placeholder"));
        assert!(html.contains("video-spinner"));
        assert!(!html.contains("is-loaded"));
        assert!(html.contains("player.vimeo.com/video/1060857995"));
    }

    #[tokio::test]
    async fn chat_links_open_in_new_tab_without_referrer() {
        let html = render::<CallToAction>().await;
        assert_eq!(html.matches("https://wa.me/972545480039?text=").count(), 2);
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let html = render::<Footer>().await;
        let year = Utc::now().year().to_string();
        assert!(html.contains(&format!("© {} Payouts.com. All rights reserved.", year)));
    }

    #[tokio::test]
    async fn reveal_content_starts_hidden() {
        let html = render::<Introduction>().await;
        assert!(html.contains("reveal--fade"));
        assert!(!html.contains("is-visible"));
    }
}
