//! Product catalog with filters.
//!
//! Filters are only sent when the user submits the search form or clears
//! them; typing does not refetch.

use common::format::brl;
use common::model::product::Product;
use common::requests::ProductQuery;
use common::store::StoreEvent;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::toast::{show_error, show_success};
use crate::components::top_banner::TopBanner;
use crate::components::top_search_bar::TopSearchBar;
use crate::storage::{client_store, WindowListener};

const LOAD_FAILED: &str = "Erro ao carregar produtos. Tente novamente.";

#[derive(Clone, Copy)]
pub enum Filter {
    Search,
    Category,
    MinPrice,
    MaxPrice,
}

pub enum Msg {
    Fetch,
    Loaded(Vec<Product>),
    Failed(String),
    Categories(Vec<String>),
    SetFilter(Filter, String),
    ToggleFilters,
    ClearFilters,
    AddToCart(Product),
    ToggleFavorite(Product),
    FavoritesChanged,
}

pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    query: ProductQuery,
    show_filters: bool,
    loading: bool,
    error: Option<String>,
    favorites: Vec<String>,
    _favorites_listener: WindowListener,
}

impl Catalog {
    fn read_favorites() -> Vec<String> {
        client_store()
            .favorites()
            .list()
            .into_iter()
            .map(|product| product.id)
            .collect()
    }

    fn product_card(&self, ctx: &Context<Self>, product: &Product) -> Html {
        let link = ctx.link();
        let favorite = self.favorites.contains(&product.id);
        let add = product.clone();
        let toggle = product.clone();

        html! {
            <div class="card card-product">
                <Link<Route> to={Route::Product { id: product.id.clone() }} classes="card-product-image">
                    <img src={product.primary_image()} alt={product.name.clone()} loading="lazy" />
                </Link<Route>>
                <button
                    class={classes!("favorite-toggle", favorite.then_some("active"))}
                    aria-label="Favoritar"
                    onclick={link.callback(move |_| Msg::ToggleFavorite(toggle.clone()))}
                >
                    { if favorite { "♥" } else { "♡" } }
                </button>
                <div class="card-product-body">
                    if !product.brand.is_empty() {
                        <span class="muted">{ &product.brand }</span>
                    }
                    <Link<Route> to={Route::Product { id: product.id.clone() }} classes="card-product-name">
                        { &product.name }
                    </Link<Route>>
                    <strong class="price">{ brl(product.price) }</strong>
                    if product.in_stock() {
                        <span class="stock">{ format!("{} em estoque", product.stock) }</span>
                    } else {
                        <span class="stock out">{ "Sem estoque" }</span>
                    }
                    <button class="btn btn-primary" onclick={link.callback(move |_| Msg::AddToCart(add.clone()))}>
                        { "Adicionar ao carrinho" }
                    </button>
                </div>
            </div>
        }
    }

    fn filters_panel(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_category = link.callback(|event: Event| {
            let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
            Msg::SetFilter(Filter::Category, select.value())
        });
        let price_input = |filter: Filter| {
            link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::SetFilter(filter, input.value())
            })
        };

        html! {
            <div class="card filters">
                <select class="input" onchange={on_category}>
                    <option value="" selected={self.query.category.is_empty()}>{ "Todas as categorias" }</option>
                    { for self.categories.iter().map(|category| html! {
                        <option value={category.clone()} selected={*category == self.query.category}>{ category }</option>
                    }) }
                </select>
                <input class="input" type="number" min="0" placeholder="Preço mínimo"
                    value={self.query.min_price.clone()} oninput={price_input(Filter::MinPrice)} />
                <input class="input" type="number" min="0" placeholder="Preço máximo"
                    value={self.query.max_price.clone()} oninput={price_input(Filter::MaxPrice)} />
                <button class="btn btn-primary" onclick={link.callback(|_| Msg::Fetch)}>{ "Aplicar" }</button>
                <button class="btn btn-outline" onclick={link.callback(|_| Msg::ClearFilters)}>{ "Limpar filtros" }</button>
            </div>
        }
    }
}

impl Component for Catalog {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::products::categories().await {
                Ok(categories) => link.send_message(Msg::Categories(categories)),
                Err(err) => error!(format!("Erro ao buscar categorias: {err}")),
            }
        });
        ctx.link().send_message(Msg::Fetch);

        Self {
            products: Vec::new(),
            categories: Vec::new(),
            query: ProductQuery::default(),
            show_filters: false,
            loading: true,
            error: None,
            favorites: Self::read_favorites(),
            _favorites_listener: WindowListener::store(
                StoreEvent::FavoritesUpdated,
                ctx.link().callback(|_| Msg::FavoritesChanged),
            ),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                self.loading = true;
                self.error = None;
                let query = self.query.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::products::list(&query).await {
                        Ok(products) => link.send_message(Msg::Loaded(products)),
                        Err(_) => link.send_message(Msg::Failed(LOAD_FAILED.to_string())),
                    }
                });
            }
            Msg::Loaded(products) => {
                self.loading = false;
                self.products = products;
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Msg::Categories(categories) => self.categories = categories,
            Msg::SetFilter(filter, value) => match filter {
                Filter::Search => self.query.search = value,
                Filter::Category => self.query.category = value,
                Filter::MinPrice => self.query.min_price = value,
                Filter::MaxPrice => self.query.max_price = value,
            },
            Msg::ToggleFilters => self.show_filters = !self.show_filters,
            Msg::ClearFilters => {
                self.query = ProductQuery::default();
                ctx.link().send_message(Msg::Fetch);
            }
            Msg::AddToCart(product) => match client_store().cart().add(&product, 1) {
                Ok(_) => show_success(&format!("{} adicionado ao carrinho", product.name)),
                Err(err) => show_error(&err.to_string()),
            },
            Msg::ToggleFavorite(product) => {
                client_store().favorites().toggle(&product);
            }
            Msg::FavoritesChanged => self.favorites = Self::read_favorites(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                <TopSearchBar
                    with_logo=true
                    value={self.query.search.clone()}
                    on_change={link.callback(|value| Msg::SetFilter(Filter::Search, value))}
                    on_submit={link.callback(|_| Msg::Fetch)}
                />
                <div class="container-page">
                    <TopBanner />
                    <div class="catalog-header">
                        <h1>{ "Catálogo" }</h1>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::ToggleFilters)}>
                            { if self.show_filters { "Ocultar filtros" } else { "Filtros" } }
                        </button>
                    </div>
                    if self.show_filters {
                        { self.filters_panel(ctx) }
                    }
                    if let Some(error) = &self.error {
                        <p class="alert alert-error">{ error }</p>
                    }
                    if self.loading {
                        <div class="spinner" />
                    } else if self.products.is_empty() {
                        <div class="empty-state">
                            <p>{ "Nenhum produto encontrado." }</p>
                        </div>
                    } else {
                        <div class="product-grid">
                            { for self.products.iter().map(|product| self.product_card(ctx, product)) }
                        </div>
                    }
                </div>
            </>
        }
    }
}
