use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::storage::client_store;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub path: String,
}

pub enum Msg {
    Logout,
}

/// Left navigation column shown to logged-in users on wide screens.
pub struct Sidebar;

const PARTNER_LINKS: [(Route, &str); 5] = [
    (Route::Catalog, "Catálogo"),
    (Route::Orders, "Pedidos"),
    (Route::Favorites, "Favoritos"),
    (Route::Cart, "Carrinho"),
    (Route::Profile, "Perfil"),
];

const ADMIN_LINKS: [(Route, &str); 6] = [
    (Route::Admin, "Dashboard"),
    (Route::AdminUsers, "Usuários"),
    (Route::AdminProducts, "Produtos"),
    (Route::AdminOrders, "Pedidos"),
    (Route::AdminMessages, "Mensagens"),
    (Route::AdminPromos, "Banners"),
];

impl Component for Sidebar {
    type Message = Msg;
    type Properties = SidebarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Logout => {
                client_store().session().logout();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let path = &ctx.props().path;
        let is_admin = client_store()
            .session()
            .current()
            .is_some_and(|session| session.is_admin());
        let links: &[(Route, &str)] = if is_admin { &ADMIN_LINKS } else { &PARTNER_LINKS };

        html! {
            <aside class="sidebar">
                <img class="sidebar-logo" src="/images/logo.png" alt="Recicla Ebenezer" />
                <nav>
                    { for links.iter().map(|(route, label)| {
                        let class = if route.to_path() == *path { "sidebar-link active" } else { "sidebar-link" };
                        html! {
                            <Link<Route> to={route.clone()} classes={class}>{ *label }</Link<Route>>
                        }
                    }) }
                </nav>
                <button class="sidebar-link sidebar-logout" onclick={ctx.link().callback(|_| Msg::Logout)}>
                    { "Sair" }
                </button>
            </aside>
        }
    }
}
