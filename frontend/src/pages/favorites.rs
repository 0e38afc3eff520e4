use common::format::brl;
use common::model::product::Product;
use common::store::StoreEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::toast::show_success;
use crate::components::top_search_bar::TopSearchBar;
use crate::storage::{client_store, WindowListener};

pub enum Msg {
    FavoritesChanged,
    Remove(Product),
    AddToCart(Product),
}

/// Products the user marked, read straight from local storage.
pub struct FavoritesPage {
    favorites: Vec<Product>,
    _favorites_listener: WindowListener,
}

impl Component for FavoritesPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            favorites: client_store().favorites().list(),
            _favorites_listener: WindowListener::store(
                StoreEvent::FavoritesUpdated,
                ctx.link().callback(|_| Msg::FavoritesChanged),
            ),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FavoritesChanged => {
                self.favorites = client_store().favorites().list();
                true
            }
            Msg::Remove(product) => {
                client_store().favorites().toggle(&product);
                false
            }
            Msg::AddToCart(product) => {
                if client_store().cart().add(&product, 1).is_ok() {
                    show_success(&format!("{} adicionado ao carrinho", product.name));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <TopSearchBar with_logo=true hide_search=true />
                <div class="container-page">
                    <h1>{ "Favoritos" }</h1>
                    if self.favorites.is_empty() {
                        <div class="empty-state">
                            <h2>{ "Nenhum favorito ainda" }</h2>
                            <p class="muted">{ "Toque no coração de um produto para guardá-lo aqui." }</p>
                            <Link<Route> to={Route::Catalog} classes="btn btn-primary">{ "Ir para o Catálogo" }</Link<Route>>
                        </div>
                    } else {
                        <div class="product-grid">
                            { for self.favorites.iter().map(|product| {
                                let (remove, add) = (product.clone(), product.clone());
                                html! {
                                    <div class="card card-product">
                                        <Link<Route> to={Route::Product { id: product.id.clone() }} classes="card-product-image">
                                            <img src={product.primary_image()} alt={product.name.clone()} loading="lazy" />
                                        </Link<Route>>
                                        <div class="card-product-body">
                                            <span class="card-product-name">{ &product.name }</span>
                                            <strong class="price">{ brl(product.price) }</strong>
                                            <button class="btn btn-primary" onclick={link.callback(move |_| Msg::AddToCart(add.clone()))}>
                                                { "Adicionar ao carrinho" }
                                            </button>
                                            <button class="btn btn-outline" onclick={link.callback(move |_| Msg::Remove(remove.clone()))}>
                                                { "Remover" }
                                            </button>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                </div>
            </>
        }
    }
}
