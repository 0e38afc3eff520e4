//! Transient notifications injected straight into `<body>`.
//!
//! Toasts are fire-and-forget: any update handler can raise one without the
//! component owning a slot for it. Each removes itself after three seconds.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(56, 94, 29, 0.95)",
            ToastKind::Error => "rgba(185, 28, 28, 0.95)",
        }
    }
}

pub fn show_success(message: &str) {
    show(message, ToastKind::Success);
}

pub fn show_error(message: &str) {
    show(message, ToastKind::Error);
}

fn show(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    // Text, not HTML: messages may echo backend input.
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "6px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
