//! Cloudflare Turnstile widget for the login form.
//!
//! Only rendered when `TURNSTILE_SITE_KEY` was set at build time. The
//! widget script calls back into a global function, which forwards the
//! token to the form.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use yew::prelude::*;

const CALLBACK_NAME: &str = "onTurnstileToken";
const SCRIPT_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/api.js";

pub fn site_key() -> Option<&'static str> {
    option_env!("TURNSTILE_SITE_KEY").filter(|key| !key.is_empty())
}

#[derive(Properties, PartialEq)]
pub struct TurnstileProps {
    pub site_key: AttrValue,
    pub on_token: Callback<String>,
}

pub struct Turnstile {
    _callback: Option<Closure<dyn FnMut(JsValue)>>,
}

impl Component for Turnstile {
    type Message = ();
    type Properties = TurnstileProps;

    fn create(ctx: &Context<Self>) -> Self {
        let on_token = ctx.props().on_token.clone();
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |token: JsValue| {
            on_token.emit(token.as_string().unwrap_or_default());
        });
        let registered = web_sys::window().is_some_and(|window| {
            js_sys::Reflect::set(&window, &JsValue::from_str(CALLBACK_NAME), callback.as_ref())
                .is_ok()
        });
        load_script();
        Self {
            _callback: registered.then_some(callback),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div
                class="cf-turnstile"
                data-sitekey={ctx.props().site_key.clone()}
                data-callback={CALLBACK_NAME}
            />
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(CALLBACK_NAME));
        }
    }
}

fn load_script() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.query_selector(&format!("script[src='{SCRIPT_URL}']")).ok().flatten().is_some() {
        return;
    }
    if let (Ok(script), Some(head)) = (document.create_element("script"), document.head()) {
        let _ = script.set_attribute("src", SCRIPT_URL);
        let _ = script.set_attribute("async", "");
        let _ = script.set_attribute("defer", "");
        let _ = head.append_child(&script);
    }
}
