use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config;
use crate::error::{self, DomError};

/// Whether the embedded player has reported that it finished loading.
/// Starts out `false` and only ever flips to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub loaded: bool,
}

pub enum PlayerAction {
    Loaded,
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PlayerAction::Loaded if self.loaded => self,
            PlayerAction::Loaded => Rc::new(PlayerState { loaded: true }),
        }
    }
}

/// A `load` listener registered on an element. Must be detached on teardown.
struct LoadListener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl LoadListener {
    fn attach(target: Element, on_load: impl Fn() + 'static) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |_: Event| on_load()) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }

    fn detach(self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("load", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove video load listener: {}", DomError::from(err));
        }
    }
}

/// Appends the player companion script to `<head>` unless it is already there.
/// Returns whether a new script element was inserted.
pub fn ensure_player_script(src: &str) -> Result<bool, DomError> {
    let document = error::document()?;
    if document.query_selector(&format!("script[src=\"{}\"]", src))?.is_some() {
        return Ok(false);
    }
    let script = document.create_element("script")?;
    script.set_attribute("src", src)?;
    script.set_attribute("async", "")?;
    document.head().ok_or(DomError::NoHead)?.append_child(&script)?;
    Ok(true)
}

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    #[prop_or(AttrValue::Static(config::VIDEO_URL))]
    pub src: AttrValue,
    #[prop_or(AttrValue::Static(config::VIDEO_TITLE))]
    pub title: AttrValue,
    /// Emitted once, when the player first reports it has loaded.
    #[prop_or_default]
    pub on_loaded: Option<Callback<()>>,
}

#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    let player = use_reducer(PlayerState::default);
    let iframe_ref = use_node_ref();

    use_mount(|| match ensure_player_script(config::PLAYER_SCRIPT_URL) {
        Ok(true) => debug!("Injected player script"),
        Ok(false) => {}
        Err(err) => warn!("Could not load player script: {}", err),
    });

    {
        let iframe_ref = iframe_ref.clone();
        let dispatcher = player.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = iframe_ref
                    .cast::<Element>()
                    .ok_or(DomError::Detached)
                    .and_then(|iframe| {
                        LoadListener::attach(iframe, move || dispatcher.dispatch(PlayerAction::Loaded))
                    });
                let listener = match listener {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        warn!("Video load indicator disabled: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(listener) = listener {
                        listener.detach();
                    }
                }
            },
            (),
        );
    }

    {
        let on_loaded = props.on_loaded.clone();
        use_effect_with_deps(
            move |loaded| {
                if *loaded {
                    debug!("Hero video loaded");
                    if let Some(on_loaded) = on_loaded {
                        on_loaded.emit(());
                    }
                }
                || ()
            },
            player.loaded,
        );
    }

    html! {
        <div class="video-frame">
            <iframe
                ref={iframe_ref}
                src={props.src.clone()}
                frameborder="0"
                allow="autoplay; fullscreen; picture-in-picture; clipboard-write; encrypted-media"
                title={props.title.clone()}
                class={classes!("video-iframe", player.loaded.then_some("is-loaded"))}
            ></iframe>
            {
                if !player.loaded {
                    html! {
                        <div class="video-placeholder">
                            <div class="video-spinner"></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

pub const VIDEO_STYLES: &str = r#"
.video-frame {
    position: relative;
    padding: 56.25% 0 0 0;
    border-radius: 12px;
    overflow: hidden;
}
.video-iframe {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    border: 0;
    border-radius: 12px;
    opacity: 0;
    transition: opacity 0.7s ease;
}
.video-iframe.is-loaded {
    opacity: 1;
}
.video-placeholder {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(var(--primary-rgb), 0.8);
    border-radius: 12px;
}
.video-spinner {
    width: 3rem;
    height: 3rem;
    border: 4px solid rgba(var(--accent-rgb), 0.3);
    border-top-color: var(--accent);
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;
