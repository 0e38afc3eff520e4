//! Order desk: every order, status decisions and the trash.
//!
//! The trash panel follows the `?trash=true` query flag, so the navbar
//! shortcut and the panel's own open/close buttons go through the router.

use common::format::{brl, date, date_time};
use common::model::order::{Order, OrderStatus, StatusCounts};
use common::routes::query_param;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::history::Location;
use yew_router::prelude::*;
use yew_router::scope_ext::LocationHandle;

use crate::api;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::order_items::{order_items, status_badge};
use crate::components::toast::{show_error, show_success};

#[derive(Clone, Copy, PartialEq)]
pub enum Action {
    View,
    Confirm,
    Reject,
}

/// Destructive step waiting for confirmation.
#[derive(Clone, Copy, PartialEq)]
pub enum Pending {
    Trash,
    HardDelete,
}

pub enum Msg {
    Load,
    Loaded(Vec<Order>),
    LoadTrash,
    TrashLoaded(Vec<Order>),
    LocationChanged,
    OpenTrash,
    CloseTrash,
    Open(Order, Action),
    Refreshed(Order),
    CloseModal,
    SetNote(String),
    ApplyStatus,
    Ask(Pending, Order),
    CancelAsk,
    Proceed,
    Restore(Order),
    Done(&'static str),
    Failed(String),
}

pub struct AdminOrders {
    orders: Vec<Order>,
    trash: Vec<Order>,
    loading: bool,
    trash_open: bool,
    selected: Option<(Order, Action)>,
    admin_note: String,
    processing: bool,
    pending: Option<(Pending, Order)>,
    _location_handle: Option<LocationHandle>,
}

fn trash_flag(ctx: &Context<AdminOrders>) -> bool {
    ctx.link()
        .location()
        .map(|location| matches!(query_param(location.query_str(), "trash"), Some("true" | "1")))
        .unwrap_or(false)
}

impl Component for AdminOrders {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_: Location| Msg::LocationChanged));
        let trash_open = trash_flag(ctx);
        ctx.link().send_message(Msg::Load);
        if trash_open {
            ctx.link().send_message(Msg::LoadTrash);
        }
        Self {
            orders: Vec::new(),
            trash: Vec::new(),
            loading: true,
            trash_open,
            selected: None,
            admin_note: String::new(),
            processing: false,
            pending: None,
            _location_handle: handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    // Listing errors leave the empty state in place.
                    let orders = api::orders::list().await.unwrap_or_default();
                    link.send_message(Msg::Loaded(orders));
                });
                return false;
            }
            Msg::Loaded(orders) => {
                self.orders = orders;
                self.loading = false;
            }
            Msg::LoadTrash => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::orders::trash().await {
                        Ok(trash) => link.send_message(Msg::TrashLoaded(trash)),
                        Err(err) => link.send_message(Msg::Failed(err.user_message("Erro ao carregar lixeira."))),
                    }
                });
                return false;
            }
            Msg::TrashLoaded(trash) => self.trash = trash,
            Msg::LocationChanged => {
                let open = trash_flag(ctx);
                if open && !self.trash_open {
                    ctx.link().send_message(Msg::LoadTrash);
                }
                self.trash_open = open;
            }
            Msg::OpenTrash => {
                if let Some(navigator) = ctx.link().navigator() {
                    let _ = navigator.replace_with_query(&Route::AdminOrders, &[("trash", "true")]);
                }
                return false;
            }
            Msg::CloseTrash => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.replace(&Route::AdminOrders);
                }
                return false;
            }
            Msg::Open(order, action) => {
                // The listing may be stale; the modal shows the current record.
                let id = order.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Ok(fresh) = api::orders::find(&id).await {
                        link.send_message(Msg::Refreshed(fresh));
                    }
                });
                self.selected = Some((order, action));
                self.admin_note.clear();
            }
            Msg::Refreshed(fresh) => match &mut self.selected {
                Some((order, _)) if order.id == fresh.id => *order = fresh,
                _ => return false,
            },
            Msg::CloseModal => {
                self.selected = None;
                self.admin_note.clear();
            }
            Msg::SetNote(note) => {
                self.admin_note = note;
                return false;
            }
            Msg::ApplyStatus => {
                let Some((order, action)) = self.selected.clone() else {
                    return false;
                };
                let (status, done) = match action {
                    Action::Confirm => (OrderStatus::Confirmed, "Pedido confirmado com sucesso!"),
                    Action::Reject => (OrderStatus::Rejected, "Pedido rejeitado."),
                    Action::View => return false,
                };
                self.processing = true;
                let note = self.admin_note.trim().to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::orders::update_status(&order.id, status, &note).await {
                        Ok(_) => link.send_message(Msg::Done(done)),
                        Err(err) => link.send_message(Msg::Failed(err.user_message("Erro ao atualizar pedido."))),
                    }
                });
            }
            Msg::Ask(kind, order) => self.pending = Some((kind, order)),
            Msg::CancelAsk => self.pending = None,
            Msg::Proceed => {
                let Some((kind, order)) = self.pending.take() else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match kind {
                        Pending::Trash => api::orders::move_to_trash(&order.id)
                            .await
                            .map(|_| "Pedido movido para a lixeira.")
                            .map_err(|err| err.user_message("Erro ao mover para lixeira.")),
                        Pending::HardDelete => api::orders::hard_delete(&order.id)
                            .await
                            .map(|_| "Pedido excluído definitivamente.")
                            .map_err(|err| err.user_message("Erro ao excluir definitivamente.")),
                    };
                    match result {
                        Ok(done) => link.send_message(Msg::Done(done)),
                        Err(message) => link.send_message(Msg::Failed(message)),
                    }
                });
            }
            Msg::Restore(order) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::orders::restore(&order.id).await {
                        Ok(_) => link.send_message(Msg::Done("Pedido restaurado.")),
                        Err(err) => link.send_message(Msg::Failed(err.user_message("Erro ao restaurar pedido."))),
                    }
                });
                return false;
            }
            Msg::Done(message) => {
                self.processing = false;
                self.selected = None;
                show_success(message);
                ctx.link().send_message(Msg::Load);
                if self.trash_open {
                    ctx.link().send_message(Msg::LoadTrash);
                }
            }
            Msg::Failed(message) => {
                self.processing = false;
                show_error(&message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <div class="container-page"><div class="spinner" /></div> };
        }
        let counts = StatusCounts::tally(&self.orders);
        let (ask_title, ask_message, ask_label) = match self.pending.as_ref().map(|(kind, _)| *kind) {
            Some(Pending::HardDelete) => (
                "Excluir definitivamente",
                "Excluir definitivamente este pedido? Esta ação não pode ser desfeita.",
                "Excluir",
            ),
            _ => ("Mover para lixeira", "Mover este pedido para a lixeira?", "Mover"),
        };

        html! {
            <div class="container-page">
                <header class="page-header">
                    <h1>{ "Gerenciar Pedidos" }</h1>
                    <button class="btn btn-outline" title="Abrir lixeira" onclick={link.callback(|_| Msg::OpenTrash)}>
                        { "Lixeira" }
                    </button>
                </header>
                <div class="stat-grid">
                    <div class="stat-card"><span class="stat-title">{ "Pendentes" }</span><strong>{ counts.pending }</strong></div>
                    <div class="stat-card"><span class="stat-title">{ "Confirmados" }</span><strong>{ counts.confirmed }</strong></div>
                    <div class="stat-card"><span class="stat-title">{ "Rejeitados" }</span><strong>{ counts.rejected }</strong></div>
                </div>
                if self.orders.is_empty() {
                    <div class="empty-state">
                        <h2>{ "Nenhum pedido registrado" }</h2>
                        <p class="muted">{ "Os pedidos dos parceiros aparecerão aqui" }</p>
                    </div>
                } else {
                    { self.table(ctx) }
                }
                if let Some((order, action)) = &self.selected {
                    { self.order_modal(ctx, order, *action) }
                }
                if self.trash_open {
                    { self.trash_panel(ctx) }
                }
                <ConfirmDialog
                    open={self.pending.is_some()}
                    title={ask_title}
                    message={ask_message}
                    confirm_label={ask_label}
                    on_confirm={link.callback(|_| Msg::Proceed)}
                    on_cancel={link.callback(|_| Msg::CancelAsk)}
                />
            </div>
        }
    }
}

fn customer(order: &Order) -> (String, String) {
    match &order.user {
        Some(user) => (
            user.name.clone(),
            user.company.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "Razão social não informada".to_string()),
        ),
        None => ("Cliente removido".to_string(), String::new()),
    }
}

impl AdminOrders {
    fn table(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{ "ID" }</th>
                        <th>{ "Cliente" }</th>
                        <th>{ "Data" }</th>
                        <th>{ "Itens" }</th>
                        <th>{ "Total" }</th>
                        <th>{ "Status" }</th>
                        <th>{ "Ações" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for self.orders.iter().map(|order| {
                        let (name, company) = customer(order);
                        let (view, confirm, reject, trash) = (order.clone(), order.clone(), order.clone(), order.clone());
                        html! {
                            <tr>
                                <td>{ format!("#{}", order.short_ref()) }</td>
                                <td>
                                    <strong>{ name }</strong>
                                    <span class="muted">{ company }</span>
                                </td>
                                <td>{ order.created_at.as_ref().map(date).unwrap_or_default() }</td>
                                <td>{ order.item_count() }</td>
                                <td>{ brl(order.total_amount) }</td>
                                <td>{ status_badge(order) }</td>
                                <td class="actions">
                                    <button class="btn-icon" title="Ver detalhes" onclick={link.callback(move |_| Msg::Open(view.clone(), Action::View))}>{ "👁" }</button>
                                    if order.status == OrderStatus::Pending {
                                        <button class="btn-icon success" title="Confirmar" onclick={link.callback(move |_| Msg::Open(confirm.clone(), Action::Confirm))}>{ "✓" }</button>
                                        <button class="btn-icon danger" title="Rejeitar" onclick={link.callback(move |_| Msg::Open(reject.clone(), Action::Reject))}>{ "✕" }</button>
                                    }
                                    <button class="btn-icon" title="Mover para lixeira" onclick={link.callback(move |_| Msg::Ask(Pending::Trash, trash.clone()))}>{ "🗑" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }

    fn order_modal(&self, ctx: &Context<Self>, order: &Order, action: Action) -> Html {
        let link = ctx.link();
        let (name, company) = customer(order);
        let deciding = action != Action::View && order.status == OrderStatus::Pending;
        let (note_label, placeholder, submit, submit_class) = if action == Action::Confirm {
            (
                "Mensagem de Confirmação:",
                "Ex: Pedido confirmado! Entraremos em contato em breve.",
                "Confirmar Pedido",
                "btn btn-success",
            )
        } else {
            ("Motivo da Rejeição:", "Ex: Produto fora de estoque no momento.", "Rejeitar Pedido", "btn btn-danger")
        };
        let on_note = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
            Msg::SetNote(input.value())
        });

        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <header class="modal-header">
                        <h2>{ format!("Pedido #{}", order.short_ref()) }</h2>
                        <button class="modal-close" aria-label="Fechar" onclick={link.callback(|_| Msg::CloseModal)}>{ "×" }</button>
                    </header>
                    <p><strong>{ "Cliente: " }</strong>{ format!("{name} · {company}") }</p>
                    <p class="muted">{ order.created_at.as_ref().map(date_time).unwrap_or_default() }</p>
                    <h3>{ "Itens:" }</h3>
                    { order_items(order) }
                    if let Some(note) = order.notes.as_deref().filter(|note| !note.trim().is_empty()) {
                        <div class="note">
                            <strong>{ "Observações do Cliente:" }</strong>
                            <p>{ note }</p>
                        </div>
                    }
                    if let Some(note) = order.admin_notes.as_deref().filter(|note| !note.trim().is_empty()) {
                        <div class={classes!("note", order.status.badge_class())}>
                            <strong>{ "Sua Resposta:" }</strong>
                            <p>{ note }</p>
                        </div>
                    }
                    <p class="summary-total">{ "Total: " }<strong>{ brl(order.total_amount) }</strong></p>
                    if deciding {
                        <label class="label">{ note_label }
                            <textarea class="input" rows="3" placeholder={placeholder} value={self.admin_note.clone()} oninput={on_note} />
                        </label>
                        <div class="form-actions">
                            <button class={submit_class} disabled={self.processing} onclick={link.callback(|_| Msg::ApplyStatus)}>
                                { if self.processing { "Processando..." } else { submit } }
                            </button>
                            <button class="btn btn-outline" onclick={link.callback(|_| Msg::CloseModal)}>{ "Cancelar" }</button>
                        </div>
                    } else {
                        <button class="btn btn-outline" onclick={link.callback(|_| Msg::CloseModal)}>{ "Fechar" }</button>
                    }
                </div>
            </div>
        }
    }

    fn trash_panel(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="modal-backdrop">
                <div class="modal modal-wide">
                    <header class="modal-header">
                        <h2>{ "Lixeira" }</h2>
                        <button class="modal-close" aria-label="Fechar" onclick={link.callback(|_| Msg::CloseTrash)}>{ "×" }</button>
                    </header>
                    if self.trash.is_empty() {
                        <div class="empty-state">
                            <p>{ "Nenhum pedido na lixeira." }</p>
                            <p class="muted">{ "Pedidos excluídos aparecerão aqui." }</p>
                        </div>
                    } else {
                        { for self.trash.iter().map(|order| {
                            let (name, company) = customer(order);
                            let (restore, delete) = (order.clone(), order.clone());
                            html! {
                                <div class="card trash-card">
                                    <div class="trash-card-head">
                                        <span>{ "Pedido " }<strong>{ format!("#{}", order.short_ref()) }</strong></span>
                                        <span class="muted">{ order.deleted_at.as_ref().map(date_time).unwrap_or_default() }</span>
                                    </div>
                                    <p>{ "Cliente " }<strong>{ name }</strong>{ format!(" · {company}") }</p>
                                    <p>{ format!("Itens {} · Total {}", order.item_count(), brl(order.total_amount)) }</p>
                                    if let Some(note) = order.notes.as_deref().filter(|note| !note.trim().is_empty()) {
                                        <p><strong>{ "Nota do cliente: " }</strong>{ note }</p>
                                    }
                                    <p><strong>{ "Status atual: " }</strong>{ status_badge(order) }</p>
                                    <div class="form-actions">
                                        <button class="btn btn-outline" onclick={link.callback(move |_| Msg::Restore(restore.clone()))}>{ "Restaurar" }</button>
                                        <button class="btn btn-danger" onclick={link.callback(move |_| Msg::Ask(Pending::HardDelete, delete.clone()))}>{ "Excluir definitivamente" }</button>
                                    </div>
                                </div>
                            }
                        }) }
                    }
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::CloseTrash)}>{ "Fechar" }</button>
                </div>
            </div>
        }
    }
}
