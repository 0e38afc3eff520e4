//! Router and page chrome.
//!
//! `Shell` lives inside the router so it can follow location changes and
//! decide, per path, which of the navbar, sidebar and mobile tab bar to draw.
//! Every page goes through the session gate before it renders.

use common::routes::{self, Gate};
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;

use crate::components::mobile_tab_bar::MobileTabBar;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::admin_dashboard::AdminDashboard;
use crate::pages::admin_messages::AdminMessages;
use crate::pages::admin_orders::AdminOrders;
use crate::pages::admin_products::AdminProducts;
use crate::pages::admin_promos::AdminPromos;
use crate::pages::admin_users::AdminUsers;
use crate::pages::cart::CartPage;
use crate::pages::catalog::Catalog;
use crate::pages::favorites::FavoritesPage;
use crate::pages::home::Home;
use crate::pages::login::Login;
use crate::pages::orders::OrdersPage;
use crate::pages::product_detail::ProductDetail;
use crate::pages::profile::Profile;
use crate::storage::client_store;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/catalogo")]
    Catalog,
    #[at("/produto/:id")]
    Product { id: String },
    #[at("/carrinho")]
    Cart,
    #[at("/pedidos")]
    Orders,
    #[at("/favoritos")]
    Favorites,
    #[at("/perfil")]
    Profile,
    #[at("/admin")]
    Admin,
    #[at("/admin/produtos")]
    AdminProducts,
    #[at("/admin/pedidos")]
    AdminOrders,
    #[at("/admin/usuarios")]
    AdminUsers,
    #[at("/admin/promos")]
    AdminPromos,
    #[at("/admin/mensagens")]
    AdminMessages,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for one of the fixed paths in [`common::routes`].
    pub fn from_path(path: &str) -> Route {
        Route::recognize(path).unwrap_or(Route::Home)
    }
}

fn switch(route: Route) -> Html {
    let session = client_store().session().current();
    let access = routes::access_for(&route.to_path());
    if let Gate::Redirect(target) = routes::guard(access, session.as_ref()) {
        return html! { <Redirect<Route> to={Route::from_path(target)} /> };
    }

    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Catalog => html! { <Catalog /> },
        Route::Product { id } => html! { <ProductDetail {id} /> },
        Route::Cart => html! { <CartPage /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Profile => html! { <Profile /> },
        Route::Admin => html! { <AdminDashboard /> },
        Route::AdminProducts => html! { <AdminProducts /> },
        Route::AdminOrders => html! { <AdminOrders /> },
        Route::AdminUsers => html! { <AdminUsers /> },
        Route::AdminPromos => html! { <AdminPromos /> },
        Route::AdminMessages => html! { <AdminMessages /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        }
    }
}

pub struct Shell {
    _location_handle: Option<LocationHandle>,
}

pub enum ShellMsg {
    LocationChanged,
}

impl Component for Shell {
    type Message = ShellMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_: Location| ShellMsg::LocationChanged));
        Self { _location_handle: handle }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ShellMsg::LocationChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let path = ctx
            .link()
            .location()
            .map(|location| location.path().to_string())
            .unwrap_or_else(|| routes::HOME.to_string());
        let logged_in = client_store().session().current().is_some();

        html! {
            <div class="app-shell">
                if routes::shows_navbar(&path) {
                    <Navbar path={path.clone()} />
                }
                <div class="app-body">
                    if routes::shows_sidebar(&path, logged_in) {
                        <Sidebar path={path.clone()} />
                    }
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                if routes::shows_tab_bar(&path, logged_in) {
                    <MobileTabBar path={path.clone()} />
                }
            </div>
        }
    }
}
