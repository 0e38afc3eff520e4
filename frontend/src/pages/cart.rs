//! Shopping cart and checkout.

use common::format::brl_plain;
use common::store::cart::CartItem;
use common::store::StoreEvent;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::{show_error, show_success};
use crate::components::top_search_bar::TopSearchBar;
use crate::storage::{client_store, WindowListener};

const CHECKOUT_FAILED: &str = "Erro ao finalizar pedido. Tente novamente.";
const CHECKOUT_OK: &str = "Pedido realizado com sucesso! Você receberá uma notificação quando for processado.";

pub enum Msg {
    CartChanged,
    Decrement(String),
    Increment(String),
    Remove(String),
    AskClear,
    CancelClear,
    Clear,
    SetNote(String),
    Checkout,
    CheckoutDone,
    CheckoutFailed,
}

pub struct CartPage {
    items: Vec<CartItem>,
    note: String,
    loading: bool,
    confirm_clear: bool,
    _cart_listener: WindowListener,
}

impl CartPage {
    fn quantity_of(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    fn line(&self, ctx: &Context<Self>, item: &CartItem) -> Html {
        let link = ctx.link();
        let (dec, inc, rm) = (item.product.id.clone(), item.product.id.clone(), item.product.id.clone());
        let image = item
            .product
            .image
            .clone()
            .filter(|src| !src.is_empty())
            .unwrap_or_else(|| item.product.primary_image());

        html! {
            <div class="cart-line">
                <img src={image} alt={item.product.name.clone()} />
                <div class="cart-line-info">
                    <Link<Route> to={Route::Product { id: item.product.id.clone() }}>{ &item.product.name }</Link<Route>>
                    if !item.product.sku.is_empty() {
                        <span class="muted">{ format!("SKU: {}", item.product.sku) }</span>
                    }
                    <span>{ brl_plain(item.product.price) }</span>
                </div>
                <div class="quantity-selector">
                    <button class="btn btn-outline" disabled={item.quantity <= 1}
                        onclick={link.callback(move |_| Msg::Decrement(dec.clone()))}>{ "−" }</button>
                    <span>{ item.quantity }</span>
                    <button class="btn btn-outline"
                        onclick={link.callback(move |_| Msg::Increment(inc.clone()))}>{ "+" }</button>
                </div>
                <strong>{ brl_plain(item.subtotal()) }</strong>
                <button class="btn-icon danger" aria-label="Remover"
                    onclick={link.callback(move |_| Msg::Remove(rm.clone()))}>{ "🗑" }</button>
            </div>
        }
    }
}

impl Component for CartPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            items: client_store().cart().items(),
            note: String::new(),
            loading: false,
            confirm_clear: false,
            _cart_listener: WindowListener::store(
                StoreEvent::CartUpdated,
                ctx.link().callback(|_| Msg::CartChanged),
            ),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let store = client_store();
        match msg {
            Msg::CartChanged => self.items = store.cart().items(),
            Msg::Decrement(id) => {
                let quantity = self.quantity_of(&id);
                if quantity > 1 {
                    let _ = store.cart().update_quantity(&id, quantity - 1);
                }
                return false;
            }
            Msg::Increment(id) => {
                let quantity = self.quantity_of(&id);
                let _ = store.cart().update_quantity(&id, quantity + 1);
                return false;
            }
            Msg::Remove(id) => {
                store.cart().remove(&id);
                return false;
            }
            Msg::AskClear => self.confirm_clear = true,
            Msg::CancelClear => self.confirm_clear = false,
            Msg::Clear => {
                self.confirm_clear = false;
                store.cart().clear();
                show_success("Carrinho esvaziado.");
            }
            Msg::SetNote(note) => self.note = note,
            Msg::Checkout => {
                let Some(order) = store.cart().checkout_order(&self.note) else {
                    return false;
                };
                if self.loading {
                    return false;
                }
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::orders::create(&order).await {
                        Ok(_) => link.send_message(Msg::CheckoutDone),
                        Err(_) => link.send_message(Msg::CheckoutFailed),
                    }
                });
            }
            Msg::CheckoutDone => {
                self.loading = false;
                store.cart().clear();
                show_success(CHECKOUT_OK);
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Orders);
                }
            }
            Msg::CheckoutFailed => {
                self.loading = false;
                show_error(CHECKOUT_FAILED);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.items.is_empty() {
            return html! {
                <>
                    <TopSearchBar with_logo=true hide_search=true />
                    <div class="container-page empty-state">
                        <h2>{ "Seu carrinho está vazio" }</h2>
                        <p class="muted">{ "Adicione produtos do catálogo para começar seu pedido" }</p>
                        <Link<Route> to={Route::Catalog} classes="btn btn-primary">{ "Ir para o Catálogo" }</Link<Route>>
                    </div>
                </>
            };
        }

        let on_note = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
            Msg::SetNote(input.value())
        });
        let total = common::store::cart::total(&self.items);
        let units: u32 = self.items.iter().map(|item| item.quantity).sum();

        html! {
            <>
                <TopSearchBar with_logo=true hide_search=true />
                <div class="container-page cart-page">
                    <div class="cart-header">
                        <h1>{ "Carrinho" }</h1>
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::AskClear)}>{ "Esvaziar carrinho" }</button>
                    </div>
                    <div class="cart-grid">
                        <div class="card">
                            { for self.items.iter().map(|item| self.line(ctx, item)) }
                        </div>
                        <div class="card cart-summary">
                            <h2>{ "Resumo do pedido" }</h2>
                            <p>{ format!("{units} item(ns)") }</p>
                            <label class="label" for="order-note">{ "Observações" }</label>
                            <textarea id="order-note" class="input" value={self.note.clone()} oninput={on_note}
                                placeholder="Alguma observação sobre o pedido?" />
                            <div class="cart-total">
                                <span>{ "Total" }</span>
                                <strong>{ brl_plain(total) }</strong>
                            </div>
                            <button class="btn btn-primary btn-block" disabled={self.loading}
                                onclick={link.callback(|_| Msg::Checkout)}>
                                { if self.loading { "Enviando..." } else { "Finalizar pedido" } }
                            </button>
                        </div>
                    </div>
                </div>
                <ConfirmDialog
                    open={self.confirm_clear}
                    title="Esvaziar carrinho?"
                    message="Todos os itens serão removidos."
                    confirm_label="Esvaziar"
                    on_confirm={link.callback(|_| Msg::Clear)}
                    on_cancel={link.callback(|_| Msg::CancelClear)}
                />
            </>
        }
    }
}
