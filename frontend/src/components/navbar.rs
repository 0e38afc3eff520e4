//! Top navigation bar.
//!
//! Partners see the cart and favorites shortcuts; admins also get the back
//! office links and an unread-messages badge that is refreshed every 30
//! seconds while the bar is mounted.

use common::routes;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::storage::{client_store, WindowListener};
use common::store::StoreEvent;

const UNREAD_POLL_MS: u32 = 30_000;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub path: String,
}

pub enum Msg {
    CartChanged,
    PollUnread,
    Unread(u64),
    OpenTrash,
    Logout,
}

pub struct Navbar {
    cart_count: u32,
    unread: u64,
    is_admin: bool,
    logged_in: bool,
    poll: Option<Interval>,
    _cart_listener: WindowListener,
}

impl Navbar {
    /// Re-reads the session and starts or stops the unread poll to match.
    fn sync_session(&mut self, ctx: &Context<Self>) {
        let session = client_store().session().current();
        self.logged_in = session.is_some();
        self.is_admin = session.as_ref().is_some_and(|session| session.is_admin());
        self.cart_count = client_store().cart().item_count();

        if self.is_admin && self.poll.is_none() {
            ctx.link().send_message(Msg::PollUnread);
            let link = ctx.link().clone();
            self.poll = Some(Interval::new(UNREAD_POLL_MS, move || {
                link.send_message(Msg::PollUnread)
            }));
        } else if !self.is_admin {
            self.poll = None;
            self.unread = 0;
        }
    }

    fn link_class(&self, ctx: &Context<Self>, target: &str) -> &'static str {
        if ctx.props().path == target {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut navbar = Self {
            cart_count: 0,
            unread: 0,
            is_admin: false,
            logged_in: false,
            poll: None,
            _cart_listener: WindowListener::store(
                StoreEvent::CartUpdated,
                ctx.link().callback(|_| Msg::CartChanged),
            ),
        };
        navbar.sync_session(ctx);
        navbar
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.sync_session(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CartChanged => {
                self.cart_count = client_store().cart().item_count();
                true
            }
            Msg::PollUnread => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Ok(count) = api::messages::unread_count().await {
                        link.send_message(Msg::Unread(count));
                    }
                });
                false
            }
            Msg::Unread(count) => {
                let changed = self.unread != count;
                self.unread = count;
                changed
            }
            Msg::OpenTrash => {
                if let Some(navigator) = ctx.link().navigator() {
                    let _ = navigator.push_with_query(&Route::AdminOrders, &[("trash", "true")]);
                }
                false
            }
            Msg::Logout => {
                client_store().session().logout();
                self.sync_session(ctx);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <header class="navbar">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <img src="/images/logo.png" alt="Recicla Ebenezer" />
                </Link<Route>>
                <nav class="navbar-links">
                    if !self.logged_in {
                        <Link<Route> to={Route::Login} classes="nav-link">{ "Catálogo" }</Link<Route>>
                        <Link<Route> to={Route::Login} classes="btn btn-light">{ "Entrar" }</Link<Route>>
                    } else {
                        <Link<Route> to={Route::Favorites} classes="nav-icon">{ "♥" }</Link<Route>>
                        <Link<Route> to={Route::Cart} classes="nav-icon">
                            { "🛒" }
                            if self.cart_count > 0 {
                                <span class="badge">{ self.cart_count }</span>
                            }
                        </Link<Route>>
                        if self.is_admin {
                            <Link<Route> to={Route::AdminOrders} classes={self.link_class(ctx, routes::ADMIN_ORDERS)}>{ "Pedidos" }</Link<Route>>
                            <Link<Route> to={Route::AdminPromos} classes={self.link_class(ctx, routes::ADMIN_PROMOS)}>{ "Banners" }</Link<Route>>
                            <Link<Route> to={Route::Admin} classes={self.link_class(ctx, routes::ADMIN)}>{ "Dashboard" }</Link<Route>>
                            <Link<Route> to={Route::AdminMessages} classes={self.link_class(ctx, routes::ADMIN_MESSAGES)}>
                                { "Mensagens" }
                                if self.unread > 0 {
                                    <span class="badge badge-alert">{ self.unread }</span>
                                }
                            </Link<Route>>
                            <button class="nav-link" title="Lixeira de pedidos" onclick={link.callback(|_| Msg::OpenTrash)}>{ "Lixeira" }</button>
                        }
                        <Link<Route> to={Route::Profile} classes="nav-link">{ "Perfil" }</Link<Route>>
                        <button class="btn btn-light" onclick={link.callback(|_| Msg::Logout)}>{ "Sair" }</button>
                    }
                </nav>
            </header>
        }
    }
}
