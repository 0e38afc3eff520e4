use common::store::StoreEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::storage::{client_store, WindowListener};

#[derive(Properties, PartialEq)]
pub struct MobileTabBarProps {
    pub path: String,
}

pub enum Msg {
    CartChanged,
}

/// Bottom tab bar for small screens.
pub struct MobileTabBar {
    cart_count: u32,
    _cart_listener: WindowListener,
}

const TABS: [(Route, &str); 5] = [
    (Route::Catalog, "Catálogo"),
    (Route::Favorites, "Favoritos"),
    (Route::Cart, "Carrinho"),
    (Route::Orders, "Pedidos"),
    (Route::Profile, "Perfil"),
];

impl Component for MobileTabBar {
    type Message = Msg;
    type Properties = MobileTabBarProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            cart_count: client_store().cart().item_count(),
            _cart_listener: WindowListener::store(
                StoreEvent::CartUpdated,
                ctx.link().callback(|_| Msg::CartChanged),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CartChanged => {
                self.cart_count = client_store().cart().item_count();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let path = &ctx.props().path;
        html! {
            <nav class="mobile-tab-bar">
                { for TABS.iter().map(|(route, label)| {
                    let class = if route.to_path() == *path { "tab active" } else { "tab" };
                    html! {
                        <Link<Route> to={route.clone()} classes={class}>
                            { *label }
                            if *route == Route::Cart && self.cart_count > 0 {
                                <span class="badge">{ self.cart_count }</span>
                            }
                        </Link<Route>>
                    }
                }) }
            </nav>
        }
    }
}
