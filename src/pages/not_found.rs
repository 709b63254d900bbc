use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat_button::CHAT_BUTTON_STYLES;
use crate::components::reveal::{Motion, Reveal, Trigger, REVEAL_STYLES};
use crate::Route;

pub fn missing_route_message(path: &str) -> String {
    format!("404 Error: User attempted to access non-existent route: {}", path)
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |path: &String| {
            error!("{}", missing_route_message(path));
            || ()
        },
        path,
    );

    html! {
        <div class="not-found">
            <Reveal motion={Motion::SlideUp} trigger={Trigger::Mount} class="not-found-card">
                <h1>{"404"}</h1>
                <p class="not-found-title">{"Page not found"}</p>
                <p class="not-found-text">
                    {"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."}
                </p>
                <Link<Route> to={Route::Home} classes="forward-link">
                    <button class="chat-button chat-button--solid">{"Back to Homepage"}</button>
                </Link<Route>>
            </Reveal>
            <style>{ REVEAL_STYLES }</style>
            <style>{ CHAT_BUTTON_STYLES }</style>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: #14112b;
                    --primary: #14112b;
                    --accent: #d4f36b;
                    --accent-hover: #c5e85a;
                }
                .not-found-card {
                    max-width: 28rem;
                    text-align: center;
                }
                .not-found-card h1 {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .not-found-title {
                    font-size: 1.5rem;
                    color: #ffffff;
                    margin-bottom: 2rem;
                }
                .not-found-text {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 2rem;
                }
                .not-found .forward-link {
                    text-decoration: none;
                }
                .not-found .chat-button {
                    width: auto;
                    margin: 0 auto;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_carries_the_exact_path() {
        let path = "/pricing/../weird path?x=1&y=2";
        let message = missing_route_message(path);
        assert!(message.ends_with(": /pricing/../weird path?x=1&y=2"));
        assert!(message.starts_with("404 Error"));
    }
}
