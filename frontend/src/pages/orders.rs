use std::collections::HashSet;

use common::format::{brl, date_time};
use common::model::order::{Order, StatusCounts};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::order_items::{order_items, status_badge};
use crate::components::top_search_bar::TopSearchBar;

const LOAD_FAILED: &str = "Erro ao carregar pedidos.";

pub enum Msg {
    Loaded(Vec<Order>),
    Failed(String),
    Toggle(String),
}

/// The partner's own orders.
pub struct OrdersPage {
    orders: Vec<Order>,
    expanded: HashSet<String>,
    loading: bool,
    error: Option<String>,
}

impl Component for OrdersPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::orders::mine().await {
                Ok(orders) => link.send_message(Msg::Loaded(orders)),
                Err(err) => link.send_message(Msg::Failed(err.user_message(LOAD_FAILED))),
            }
        });
        Self {
            orders: Vec::new(),
            expanded: HashSet::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(orders) => {
                self.loading = false;
                self.orders = orders;
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Msg::Toggle(id) => {
                if !self.expanded.remove(&id) {
                    self.expanded.insert(id);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = if self.loading {
            html! { <div class="spinner" /> }
        } else if let Some(error) = &self.error {
            html! { <p class="alert alert-error">{ error }</p> }
        } else if self.orders.is_empty() {
            html! {
                <div class="empty-state">
                    <h2>{ "Nenhum pedido ainda" }</h2>
                    <p class="muted">{ "Seus pedidos aparecerão aqui depois da finalização do carrinho." }</p>
                    <Link<Route> to={Route::Catalog} classes="btn btn-primary">{ "Ir para o Catálogo" }</Link<Route>>
                </div>
            }
        } else {
            let counts = StatusCounts::tally(&self.orders);
            html! {
                <>
                    <div class="order-list">
                        { for self.orders.iter().map(|order| self.order_card(ctx, order)) }
                    </div>
                    <div class="card">
                        <h2>{ "Resumo Geral" }</h2>
                        <div class="stats-row">
                            <div><strong>{ self.orders.len() }</strong><span>{ "Total" }</span></div>
                            <div><strong>{ counts.pending }</strong><span>{ "Pendentes" }</span></div>
                            <div><strong>{ counts.confirmed }</strong><span>{ "Confirmados" }</span></div>
                            <div><strong>{ counts.rejected }</strong><span>{ "Rejeitados" }</span></div>
                        </div>
                    </div>
                </>
            }
        };

        html! {
            <>
                <TopSearchBar with_logo=true hide_search=true />
                <div class="container-page">
                    <h1>{ "Meus Pedidos" }</h1>
                    { body }
                </div>
            </>
        }
    }
}

impl OrdersPage {
    fn order_card(&self, ctx: &Context<Self>, order: &Order) -> Html {
        let expanded = self.expanded.contains(&order.id);
        let id = order.id.clone();
        let created = order.created_at.as_ref().map(date_time).unwrap_or_default();

        html! {
            <div class="card order-card">
                <button class="order-card-header" onclick={ctx.link().callback(move |_| Msg::Toggle(id.clone()))}>
                    <div>
                        <strong>{ format!("Pedido #{}", order.short_ref()) }</strong>
                        <span class="muted">{ created }</span>
                    </div>
                    { status_badge(order) }
                    <strong>{ brl(order.total_amount) }</strong>
                    <span>{ if expanded { "▲" } else { "▼" } }</span>
                </button>
                if expanded {
                    <div class="order-card-body">
                        { order_items(order) }
                        if let Some(note) = order.notes.as_deref().filter(|note| !note.is_empty()) {
                            <div class="note">
                                <strong>{ "Sua observação" }</strong>
                                <p>{ note }</p>
                            </div>
                        }
                        if let Some(note) = order.admin_notes.as_deref().filter(|note| !note.is_empty()) {
                            <div class="note note-admin">
                                <strong>{ "Resposta da Recicla Ebenezer" }</strong>
                                <p>{ note }</p>
                            </div>
                        }
                    </div>
                }
            </div>
        }
    }
}
