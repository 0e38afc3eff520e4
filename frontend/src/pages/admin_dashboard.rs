use common::format::{brl, date_time, decimal_input};
use common::model::dashboard::{DashboardStats, Trend};
use common::model::settings::MetalPrices;
use common::requests::metal_prices_from_inputs;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::formula_workbook::FormulaWorkbook;
use crate::components::toast::{show_error, show_success};

const PRICES_SAVED: &str = "Preços atualizados com sucesso!";
const PRICES_FAILED: &str = "Erro ao salvar preços.";

pub enum Metal {
    Platinum,
    Palladium,
    Rhodium,
}

pub enum Msg {
    StatsLoaded(DashboardStats),
    StatsFailed,
    PricesLoaded(MetalPrices),
    SetPrice(Metal, String),
    SavePrices,
    PricesSaved,
    PricesFailed,
}

#[derive(Default)]
struct PriceInputs {
    platinum: String,
    palladium: String,
    rhodium: String,
}

pub struct AdminDashboard {
    stats: DashboardStats,
    prices: PriceInputs,
    loading: bool,
    saving_prices: bool,
}

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::dashboard::stats().await {
                Ok(stats) => link.send_message(Msg::StatsLoaded(stats)),
                Err(_) => link.send_message(Msg::StatsFailed),
            }
            if let Ok(prices) = api::settings::metal_pricing().await {
                link.send_message(Msg::PricesLoaded(prices));
            }
        });
        Self {
            stats: DashboardStats::default(),
            prices: PriceInputs::default(),
            loading: true,
            saving_prices: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StatsLoaded(stats) => {
                self.stats = stats;
                self.loading = false;
            }
            // An empty board is still usable for prices and formulas.
            Msg::StatsFailed => self.loading = false,
            Msg::PricesLoaded(prices) => {
                self.prices = PriceInputs {
                    platinum: decimal_input(prices.platinum),
                    palladium: decimal_input(prices.palladium),
                    rhodium: decimal_input(prices.rhodium),
                };
            }
            Msg::SetPrice(metal, value) => match metal {
                Metal::Platinum => self.prices.platinum = value,
                Metal::Palladium => self.prices.palladium = value,
                Metal::Rhodium => self.prices.rhodium = value,
            },
            Msg::SavePrices => {
                if self.saving_prices {
                    return false;
                }
                self.saving_prices = true;
                let prices = metal_prices_from_inputs(&self.prices.platinum, &self.prices.palladium, &self.prices.rhodium);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::settings::update_metal_pricing(&prices).await {
                        Ok(_) => link.send_message(Msg::PricesSaved),
                        Err(_) => link.send_message(Msg::PricesFailed),
                    }
                });
            }
            Msg::PricesSaved => {
                self.saving_prices = false;
                show_success(PRICES_SAVED);
            }
            Msg::PricesFailed => {
                self.saving_prices = false;
                show_error(PRICES_FAILED);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="container-page loading-panel">
                    <div class="spinner" />
                    <p><strong>{ "Carregando dados do painel" }</strong></p>
                    <p class="muted">{ "Estamos preparando os insights mais recentes para você." }</p>
                </div>
            };
        }
        html! {
            <div class="container-page admin-dashboard">
                <header class="page-header">
                    <h1>{ "Painel Administrativo" }</h1>
                    <div class="actions">
                        <Link<Route> to={Route::AdminOrders} classes="btn btn-outline">{ "Ver pedidos" }</Link<Route>>
                        <Link<Route> to={Route::AdminProducts} classes="btn btn-primary">{ "Novo Produto" }</Link<Route>>
                    </div>
                </header>
                { self.kpis() }
                { self.cards() }
                <div class="dashboard-columns">
                    { self.recent_orders() }
                    { self.metal_prices(ctx) }
                </div>
                <div class="dashboard-columns">
                    { self.low_stock() }
                    { self.recent_messages() }
                </div>
                <section class="section">
                    <h2 class="section-title">{ "Fórmulas de preço" }</h2>
                    <FormulaWorkbook />
                </section>
            </div>
        }
    }
}

impl AdminDashboard {
    fn kpis(&self) -> Html {
        let stats = &self.stats;
        let (trend_class, trend_label) = match stats.trend() {
            Trend::Up => ("trend-up", "↑"),
            Trend::Stable => ("trend-stable", "→"),
            Trend::Down => ("trend-down", "↓"),
        };
        html! {
            <section class="section">
                <h2 class="section-title">{ "Métricas Operacionais" }</h2>
                <div class="kpi-grid">
                    <div class="kpi">
                        <span class="kpi-label">{ "Receita confirmada" }</span>
                        <strong>{ brl(stats.total_revenue) }</strong>
                    </div>
                    <div class="kpi">
                        <span class="kpi-label">{ "Ticket médio" }</span>
                        <strong>{ brl(stats.average_ticket()) }</strong>
                    </div>
                    <div class="kpi">
                        <span class="kpi-label">{ "Taxa de aprovação" }</span>
                        <strong>{ format!("{}%", stats.approval_rate()) }</strong>
                        <span class={classes!("trend", trend_class)}>{ trend_label }</span>
                    </div>
                    <div class="kpi">
                        <span class="kpi-label">{ "Receita pendente" }</span>
                        <strong>{ brl(stats.pending_revenue()) }</strong>
                    </div>
                </div>
            </section>
        }
    }

    fn cards(&self) -> Html {
        let stats = &self.stats;
        let pending_badge = if stats.pending_orders > 5 { "Alto" } else { "Normal" };
        html! {
            <div class="stat-grid">
                <Link<Route> to={Route::AdminOrders} classes="stat-card">
                    <span class="stat-title">{ "Total de Pedidos" }</span>
                    <strong>{ stats.total_orders }</strong>
                </Link<Route>>
                <Link<Route> to={Route::AdminOrders} classes="stat-card">
                    <span class="stat-title">{ "Pedidos Pendentes" }</span>
                    <strong>{ stats.pending_orders }</strong>
                    <span class="badge">{ pending_badge }</span>
                </Link<Route>>
                <Link<Route> to={Route::AdminProducts} classes="stat-card">
                    <span class="stat-title">{ "Produtos" }</span>
                    <strong>{ stats.total_products }</strong>
                </Link<Route>>
                <Link<Route> to={Route::AdminUsers} classes="stat-card">
                    <span class="stat-title">{ "Parceiros" }</span>
                    <strong>{ stats.partner_users }</strong>
                </Link<Route>>
                <Link<Route> to={Route::AdminMessages} classes="stat-card">
                    <span class="stat-title">{ "Mensagens" }</span>
                    <strong>{ stats.unread_messages }</strong>
                    if stats.unread_messages > 0 {
                        <span class="badge badge-info">{ "Novo" }</span>
                    }
                </Link<Route>>
            </div>
        }
    }

    fn recent_orders(&self) -> Html {
        html! {
            <section class="card">
                <h2 class="section-title">{ "Pedidos Recentes" }</h2>
                if self.stats.recent_orders.is_empty() {
                    <p class="muted">{ "Nenhum pedido recente." }</p>
                } else {
                    <ul class="recent-list">
                        { for self.stats.recent_orders.iter().map(|order| {
                            let customer = order.user.as_ref().map(|user| user.name.clone()).unwrap_or_else(|| "Usuário".to_string());
                            html! {
                                <li>
                                    <div>
                                        <strong>{ customer }</strong>
                                        <span class="muted">
                                            { format!("{} itens · {}", order.items_count, order.created_at.as_ref().map(date_time).unwrap_or_default()) }
                                        </span>
                                    </div>
                                    <span class={classes!("badge", order.status.badge_class())}>{ order.status.label().to_string() }</span>
                                    <strong>{ brl(order.total_amount) }</strong>
                                </li>
                            }
                        }) }
                    </ul>
                }
                <Link<Route> to={Route::AdminOrders} classes="link">{ "Ver todos" }</Link<Route>>
            </section>
        }
    }

    fn metal_prices(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input = |label: &'static str, value: &str, metal: fn() -> Metal| {
            let oninput = link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::SetPrice(metal(), input.value())
            });
            html! {
                <label class="label">
                    { label }{ " " }<span class="muted">{ "(R$/kg)" }</span>
                    <input class="input" inputmode="decimal" value={value.to_string()} {oninput} />
                </label>
            }
        };
        html! {
            <section class="card">
                <h2 class="section-title">{ "Preços de Metais" }</h2>
                <p class="muted">{ "Atualização das cotações usadas no cálculo dos produtos." }</p>
                { input("Platina", &self.prices.platinum, || Metal::Platinum) }
                { input("Paládio", &self.prices.palladium, || Metal::Palladium) }
                { input("Ródio", &self.prices.rhodium, || Metal::Rhodium) }
                <button class="btn btn-primary" disabled={self.saving_prices} onclick={link.callback(|_| Msg::SavePrices)}>
                    { if self.saving_prices { "Salvando..." } else { "Salvar preços" } }
                </button>
            </section>
        }
    }

    fn low_stock(&self) -> Html {
        html! {
            <section class="card">
                <h2 class="section-title">{ "Alertas de Estoque" }</h2>
                if self.stats.low_stock_products.is_empty() {
                    <p class="muted">{ "Nenhum produto com estoque baixo." }</p>
                } else {
                    <ul class="recent-list">
                        { for self.stats.low_stock_products.iter().map(|product| {
                            let sku = if product.sku.is_empty() { "N/A" } else { product.sku.as_str() };
                            html! {
                                <li>
                                    <div>
                                        <strong>{ &product.name }</strong>
                                        <span class="muted">{ format!("SKU: {sku} • {}", product.category) }</span>
                                    </div>
                                    <span class="badge badge-warning">{ format!("{} un.", product.stock) }</span>
                                </li>
                            }
                        }) }
                    </ul>
                }
            </section>
        }
    }

    fn recent_messages(&self) -> Html {
        html! {
            <section class="card">
                <h2 class="section-title">{ "Mensagens Recentes" }</h2>
                if self.stats.recent_messages.is_empty() {
                    <p class="muted">{ "Nenhuma mensagem recente." }</p>
                } else {
                    <ul class="recent-list">
                        { for self.stats.recent_messages.iter().map(|message| {
                            let sender = message.sender.as_ref().map(|user| user.name.clone()).unwrap_or_else(|| "Usuário".to_string());
                            html! {
                                <li class={classes!((!message.is_read).then_some("unread"))}>
                                    <div>
                                        <strong>{ sender }</strong>
                                        <span class="muted">{ message.created_at.as_ref().map(date_time).unwrap_or_default() }</span>
                                    </div>
                                    <p>{ &message.content }</p>
                                </li>
                            }
                        }) }
                    </ul>
                }
                <Link<Route> to={Route::AdminMessages} classes="link">{ "Ver todas" }</Link<Route>>
            </section>
        }
    }
}
