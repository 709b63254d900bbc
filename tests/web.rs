//! Browser tests: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use wasm_bindgen_test::*;
use web_sys::{Element, Event};
use yew::prelude::*;

use payouts_landing::components::video_embed::{ensure_player_script, VideoEmbed, VideoEmbedProps};
use payouts_landing::config;

wasm_bindgen_test_configure!(run_in_browser);

const SETTLE: Duration = Duration::from_millis(50);

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn counting_props(loads: &Rc<Cell<u32>>) -> VideoEmbedProps {
    let loads = loads.clone();
    VideoEmbedProps {
        src: AttrValue::from("about:blank"),
        title: AttrValue::from("test video"),
        on_loaded: Some(Callback::from(move |_| loads.set(loads.get() + 1))),
    }
}

fn fire_load(target: &Element) {
    target.dispatch_event(&Event::new("load").unwrap()).unwrap();
}

#[wasm_bindgen_test]
async fn load_event_replaces_spinner_with_video() {
    let root = mount_point();
    let loads = Rc::new(Cell::new(0));
    let _app = yew::Renderer::<VideoEmbed>::with_root_and_props(root.clone(), counting_props(&loads)).render();
    sleep(SETTLE).await;

    let iframe = root.query_selector("iframe").unwrap().unwrap();
    fire_load(&iframe);
    fire_load(&iframe);
    sleep(SETTLE).await;

    assert!(root.query_selector(".video-placeholder").unwrap().is_none());
    assert!(iframe.class_name().contains("is-loaded"));
    assert_eq!(loads.get(), 1);
}

#[wasm_bindgen_test]
async fn unmounted_embed_ignores_late_load_events() {
    let root = mount_point();
    let loads = Rc::new(Cell::new(0));
    let app = yew::Renderer::<VideoEmbed>::with_root_and_props(root.clone(), counting_props(&loads)).render();
    sleep(SETTLE).await;

    let iframe = root.query_selector("iframe").unwrap().unwrap();
    let before = loads.get();
    app.destroy();
    sleep(SETTLE).await;

    fire_load(&iframe);
    sleep(SETTLE).await;

    assert_eq!(loads.get(), before);
    assert!(root.query_selector("iframe").unwrap().is_none());
}

#[wasm_bindgen_test]
fn player_script_is_only_injected_once() {
    ensure_player_script(config::PLAYER_SCRIPT_URL).unwrap();
    assert!(!ensure_player_script(config::PLAYER_SCRIPT_URL).unwrap());

    let document = web_sys::window().unwrap().document().unwrap();
    let selector = format!("script[src=\"{}\"]", config::PLAYER_SCRIPT_URL);
    assert!(document.query_selector(&selector).unwrap().is_some());
}
