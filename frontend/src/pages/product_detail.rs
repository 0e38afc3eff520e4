use common::format::brl;
use common::model::product::Product;
use common::store::StoreEvent;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::toast::{show_error, show_success};
use crate::storage::{client_store, WindowListener};

const LOAD_FAILED: &str = "Erro ao carregar produto. Tente novamente.";

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: String,
}

pub enum Msg {
    Fetch,
    Loaded(Product),
    Failed(String),
    SelectImage(usize),
    Decrement,
    Increment,
    SetQuantity(String),
    AddToCart,
    ToggleFavorite,
    FavoritesChanged,
}

pub struct ProductDetail {
    product: Option<Product>,
    loading: bool,
    error: Option<String>,
    quantity: u32,
    selected_image: usize,
    favorite: bool,
    _favorites_listener: WindowListener,
}

impl ProductDetail {
    fn is_favorite(id: &str) -> bool {
        client_store().favorites().contains(id)
    }

    fn not_found(&self) -> Html {
        html! {
            <div class="container-page empty-state">
                <h2>{ "Produto não encontrado" }</h2>
                if let Some(error) = &self.error {
                    <p class="muted">{ error }</p>
                }
                <Link<Route> to={Route::Catalog} classes="btn btn-primary">{ "Voltar ao Catálogo" }</Link<Route>>
            </div>
        }
    }

    fn gallery(&self, ctx: &Context<Self>, product: &Product) -> Html {
        let images = product.gallery();
        let current = images
            .get(self.selected_image)
            .or_else(|| images.first())
            .cloned()
            .unwrap_or_else(|| product.primary_image());

        html! {
            <div class="product-gallery">
                <div class="product-gallery-main">
                    <img src={current} alt={product.name.clone()} />
                </div>
                if images.len() > 1 {
                    <div class="product-gallery-thumbs">
                        { for images.iter().enumerate().map(|(index, src)| html! {
                            <button
                                class={classes!("thumb", (index == self.selected_image).then_some("active"))}
                                onclick={ctx.link().callback(move |_| Msg::SelectImage(index))}
                            >
                                <img src={src.clone()} alt="" />
                            </button>
                        }) }
                    </div>
                }
            </div>
        }
    }

    fn purchase_panel(&self, ctx: &Context<Self>, product: &Product) -> Html {
        let link = ctx.link();
        let panel_class = classes!(
            "card",
            "purchase-panel",
            product.purchase_panel_style.as_deref().unwrap_or("highlight").to_string(),
        );
        let on_quantity = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            Msg::SetQuantity(input.value())
        });

        html! {
            <div class={panel_class}>
                <strong class="price">{ brl(product.price) }</strong>
                if product.in_stock() {
                    <span class="stock">{ format!("{} em estoque", product.stock) }</span>
                } else {
                    <span class="stock out">{ "Sem estoque" }</span>
                }
                <div class="quantity-selector">
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Decrement)}>{ "−" }</button>
                    <input class="input" type="number" min="1" value={self.quantity.to_string()} oninput={on_quantity} />
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Increment)}>{ "+" }</button>
                </div>
                <button class="btn btn-primary btn-block" onclick={link.callback(|_| Msg::AddToCart)}>
                    { "Adicionar ao carrinho" }
                </button>
                <button class="btn btn-outline btn-block" onclick={link.callback(|_| Msg::ToggleFavorite)}>
                    { if self.favorite { "♥ Remover dos favoritos" } else { "♡ Adicionar aos favoritos" } }
                </button>
            </div>
        }
    }

    fn specifications(product: &Product) -> Html {
        let mut rows = Vec::new();
        if !product.brand.is_empty() {
            rows.push(("Marca".to_string(), product.brand.clone()));
        }
        if !product.sku.is_empty() {
            rows.push(("Código".to_string(), product.sku.clone()));
        }
        rows.extend(product.specification_rows());
        if rows.is_empty() {
            return html! {};
        }

        html! {
            <div class="card">
                <h3>{ "Ficha técnica" }</h3>
                <table class="spec-table">
                    { for rows.into_iter().map(|(label, value)| html! {
                        <tr><th>{ label }</th><td>{ value }</td></tr>
                    }) }
                </table>
            </div>
        }
    }
}

impl Component for ProductDetail {
    type Message = Msg;
    type Properties = ProductDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            product: None,
            loading: true,
            error: None,
            quantity: 1,
            selected_image: 0,
            favorite: Self::is_favorite(&ctx.props().id),
            _favorites_listener: WindowListener::store(
                StoreEvent::FavoritesUpdated,
                ctx.link().callback(|_| Msg::FavoritesChanged),
            ),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().id != old_props.id {
            self.quantity = 1;
            self.selected_image = 0;
            self.favorite = Self::is_favorite(&ctx.props().id);
            ctx.link().send_message(Msg::Fetch);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                self.loading = true;
                self.error = None;
                let id = ctx.props().id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::products::find(&id).await {
                        Ok(product) => link.send_message(Msg::Loaded(product)),
                        Err(_) => link.send_message(Msg::Failed(LOAD_FAILED.to_string())),
                    }
                });
            }
            Msg::Loaded(product) => {
                self.loading = false;
                self.product = Some(product);
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.product = None;
                self.error = Some(message);
            }
            Msg::SelectImage(index) => self.selected_image = index,
            Msg::Decrement => self.quantity = self.quantity.saturating_sub(1).max(1),
            Msg::Increment => self.quantity += 1,
            Msg::SetQuantity(raw) => self.quantity = raw.trim().parse::<u32>().unwrap_or(1).max(1),
            Msg::AddToCart => {
                let Some(product) = &self.product else {
                    return false;
                };
                match client_store().cart().add(product, self.quantity) {
                    Ok(_) => show_success("Produto adicionado ao carrinho"),
                    Err(err) => show_error(&err.to_string()),
                }
                return false;
            }
            Msg::ToggleFavorite => {
                if let Some(product) = &self.product {
                    self.favorite = client_store().favorites().toggle(product);
                }
            }
            Msg::FavoritesChanged => self.favorite = Self::is_favorite(&ctx.props().id),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <div class="container-page"><div class="spinner" /></div> };
        }
        let Some(product) = &self.product else {
            return self.not_found();
        };

        html! {
            <div class="container-page product-detail">
                <Link<Route> to={Route::Catalog} classes="back-link">{ "← Voltar ao catálogo" }</Link<Route>>
                <div class="product-detail-grid">
                    { self.gallery(ctx, product) }
                    <div class="product-info">
                        if !product.category.is_empty() {
                            <span class="tag">{ &product.category }</span>
                        }
                        <h1>{ &product.name }</h1>
                        if !product.description.is_empty() {
                            <p class="description">{ &product.description }</p>
                        }
                        { self.purchase_panel(ctx, product) }
                    </div>
                </div>
                { Self::specifications(product) }
            </div>
        }
    }
}
