use crate::app::App;

mod api;
mod app;
mod components;
mod pages;
mod storage;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
