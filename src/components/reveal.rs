use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;

/// Delay before the first child of a staggered group starts moving.
pub const STAGGER_BASE_MS: u32 = 200;
pub const STAGGER_STEP_MS: u32 = 100;

// Give the browser one frame to paint the hidden state so the transition runs.
const MOUNT_TICK_MS: u32 = 16;

pub fn stagger(index: usize) -> u32 {
    STAGGER_BASE_MS + STAGGER_STEP_MS * index as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Fade,
    SlideUp,
    SlideDown,
    ScaleUp,
}

impl Motion {
    pub fn class(self) -> &'static str {
        match self {
            Motion::Fade => "reveal--fade",
            Motion::SlideUp => "reveal--slide-up",
            Motion::SlideDown => "reveal--slide-down",
            Motion::ScaleUp => "reveal--scale-up",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    Mount,
    /// Fires once when `amount` (0.0..=1.0) of the element is inside the viewport.
    InView { amount: f64 },
}

/// Watches one element and emits once it scrolls into view.
/// Dropping the watch disconnects the observer.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    pub fn new(element: &Element, amount: f64, on_visible: Callback<()>) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if intersecting {
                observer.disconnect();
                on_visible.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(amount.clamp(0.0, 1.0)));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Motion::Fade)]
    pub motion: Motion,
    #[prop_or(Trigger::InView { amount: 0.1 })]
    pub trigger: Trigger,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(AttrValue::Static("div"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let visible = use_state(|| false);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |trigger| {
                let mut timeout = None;
                let mut watch = None;
                match *trigger {
                    Trigger::Mount => {
                        timeout = Some(Timeout::new(MOUNT_TICK_MS, move || visible.set(true)));
                    }
                    Trigger::InView { amount } => match node.cast::<Element>() {
                        Some(element) => {
                            let on_visible = {
                                let visible = visible.clone();
                                Callback::from(move |_| visible.set(true))
                            };
                            match ViewportWatch::new(&element, amount, on_visible) {
                                Ok(w) => watch = Some(w),
                                Err(err) => {
                                    warn!("Showing content without scroll animation: {}", err);
                                    visible.set(true);
                                }
                            }
                        }
                        None => visible.set(true),
                    },
                }

                move || {
                    drop(timeout);
                    drop(watch);
                }
            },
            props.trigger,
        );
    }

    let class = classes!(
        "reveal",
        props.motion.class(),
        (*visible).then_some("is-visible"),
        props.class.clone()
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <@{props.tag.to_string()} ref={node} {class} {style}>
            { for props.children.iter() }
        </@>
    }
}

pub const REVEAL_STYLES: &str = r#"
.reveal {
    will-change: opacity, transform;
    transition: opacity 0.6s ease-out, transform 0.6s cubic-bezier(0.34, 1.3, 0.64, 1);
}
.reveal--fade {
    opacity: 0;
    transition: opacity 0.8s ease-out;
}
.reveal--slide-up {
    opacity: 0;
    transform: translateY(20px);
}
.reveal--slide-down {
    opacity: 0;
    transform: translateY(-50px);
    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
}
.reveal--scale-up {
    opacity: 0;
    transform: scale(0.9);
}
.reveal.is-visible {
    opacity: 1;
    transform: none;
}
@media (prefers-reduced-motion: reduce) {
    .reveal {
        transition: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_matches_container_timing() {
        assert_eq!(stagger(0), 200);
        assert_eq!(stagger(1), 300);
        assert_eq!(stagger(5), 700);
    }

    #[test]
    fn every_motion_has_a_style_rule() {
        for motion in [Motion::Fade, Motion::SlideUp, Motion::SlideDown, Motion::ScaleUp] {
            assert!(REVEAL_STYLES.contains(&format!(".{} {{", motion.class())));
        }
    }
}
