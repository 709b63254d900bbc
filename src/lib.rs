use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod components {
    pub mod chat_button;
    pub mod reveal;
    pub mod video_embed;
}
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_the_landing_page() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        for path in ["/pricing", "/does/not/exist", "/404"] {
            assert_eq!(Route::recognize(path), Some(Route::NotFound), "{path}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod rendering {
        use super::*;
        use tokio::task::LocalSet;
        use yew::LocalServerRenderer;
        use yew_router::history::{AnyHistory, History, MemoryHistory};

        #[derive(Properties, PartialEq)]
        struct RoutedProps {
            history: AnyHistory,
        }

        #[function_component]
        fn Routed(props: &RoutedProps) -> Html {
            html! {
                <Router history={props.history.clone()}>
                    <Switch<Route> render={switch} />
                </Router>
            }
        }

        async fn render_at(path: &str) -> String {
            let history = MemoryHistory::new();
            history.push(path.to_string());
            let props = RoutedProps {
                history: AnyHistory::from(history),
            };
            LocalSet::new()
                .run_until(
                    LocalServerRenderer::<Routed>::with_props(props)
                        .hydratable(false)
                        .render(),
                )
                .await
        }

        #[tokio::test]
        async fn undefined_route_renders_not_found_view() {
            let html = render_at("/no/such/page").await;
            assert!(html.contains("Page not found"));
            assert!(html.contains("Back to Homepage"));
            assert!(html.contains("href=\"/\""));
            assert!(!html.contains("Key Benefits"));
        }

        #[tokio::test]
        async fn root_renders_landing_page() {
            let html = render_at("/").await;
            assert!(html.contains("Key Benefits"));
            assert!(html.contains("Solution Details"));
            assert!(html.contains("What Brainlabs Can Expect"));
            assert!(!html.contains("Page not found"));
        }
    }
}
