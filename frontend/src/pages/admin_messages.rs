use common::format::{brl, date_time};
use common::model::message::{unread_count, Message, ReadFilter};
use common::model::order::OrderStatus;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::{show_error, show_success};

pub enum Msg {
    Load,
    Loaded(Vec<Message>),
    LoadFailed,
    Filter(ReadFilter),
    MarkRead(String),
    SetOrderStatus(String, OrderStatus),
    AskDelete(Message),
    CancelDelete,
    Delete,
    Deleted,
    Failed(String),
}

pub struct AdminMessages {
    messages: Vec<Message>,
    loading: bool,
    filter: ReadFilter,
    pending_delete: Option<Message>,
    deleting: bool,
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

impl Component for AdminMessages {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            messages: Vec::new(),
            loading: true,
            filter: ReadFilter::All,
            pending_delete: None,
            deleting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::messages::list().await {
                        Ok(messages) => link.send_message(Msg::Loaded(messages)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    }
                });
                return false;
            }
            Msg::Loaded(messages) => {
                self.messages = messages;
                self.loading = false;
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_error("Erro ao carregar mensagens.");
            }
            Msg::Filter(filter) => self.filter = filter,
            Msg::MarkRead(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::messages::mark_read(&id).await {
                        Ok(_) => link.send_message(Msg::Load),
                        Err(_) => link.send_message(Msg::Failed("Erro ao marcar mensagem como lida.".into())),
                    }
                });
                return false;
            }
            Msg::SetOrderStatus(order_id, status) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let label = status.label().to_lowercase();
                    let note = format!("Status alterado para {label}");
                    match api::orders::update_status(&order_id, status, &note).await {
                        Ok(_) => {
                            show_success(&format!("Pedido marcado como {label}."));
                            link.send_message(Msg::Load);
                        }
                        Err(_) => link.send_message(Msg::Failed("Falha ao atualizar status do pedido.".into())),
                    }
                });
                return false;
            }
            Msg::AskDelete(message) => self.pending_delete = Some(message),
            Msg::CancelDelete => {
                if !self.deleting {
                    self.pending_delete = None;
                }
            }
            Msg::Delete => {
                let Some(message) = self.pending_delete.clone() else {
                    return false;
                };
                self.deleting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::messages::delete(&message.id).await {
                        Ok(_) => link.send_message(Msg::Deleted),
                        Err(_) => link.send_message(Msg::Failed("Erro ao excluir mensagem.".into())),
                    }
                });
            }
            Msg::Deleted => {
                self.deleting = false;
                self.pending_delete = None;
                show_success("Mensagem excluída com sucesso!");
                ctx.link().send_message(Msg::Load);
            }
            Msg::Failed(message) => {
                self.deleting = false;
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
        let unread = unread_count(&self.messages);
        let shown: Vec<&Message> = self.messages.iter().filter(|message| self.filter.matches(message)).collect();
        let tab = |filter: ReadFilter, label: String| {
            html! {
                <button class={classes!("tab", (self.filter == filter).then_some("active"))}
                    onclick={link.callback(move |_| Msg::Filter(filter))}>{ label }</button>
            }
        };
        let empty_hint = match self.filter {
            ReadFilter::All => "Ainda não há mensagens no sistema",
            ReadFilter::Unread => "Não há mensagens não lidas",
            ReadFilter::Read => "Não há mensagens lidas",
        };

        html! {
            <div class="container-page">
                <header class="page-header">
                    <div class="page-header-title">
                        <Link<Route> to={Route::Admin} classes="btn-icon">{ "←" }</Link<Route>>
                        <div>
                            <h1>{ "Mensagens" }</h1>
                            <p class="muted">
                                if unread > 0 {
                                    { format!("{} não {}", plural(unread, "mensagem", "mensagens"), if unread == 1 { "lida" } else { "lidas" }) }
                                } else {
                                    { "Todas as mensagens foram lidas" }
                                }
                            </p>
                        </div>
                    </div>
                </header>
                <div class="tabs">
                    { tab(ReadFilter::All, format!("Todas ({})", self.messages.len())) }
                    { tab(ReadFilter::Unread, format!("Não Lidas ({unread})")) }
                    { tab(ReadFilter::Read, format!("Lidas ({})", self.messages.len() - unread)) }
                </div>
                if shown.is_empty() {
                    <div class="empty-state">
                        <h2>{ "Nenhuma mensagem" }</h2>
                        <p class="muted">{ empty_hint }</p>
                    </div>
                } else {
                    <div class="message-list">
                        { for shown.into_iter().map(|message| self.message_card(ctx, message)) }
                    </div>
                }
                <ConfirmDialog
                    open={self.pending_delete.is_some()}
                    title="Excluir mensagem"
                    message="Tem certeza que deseja excluir esta mensagem?"
                    confirm_label={if self.deleting { "Excluindo..." } else { "Sim, excluir" }}
                    on_confirm={link.callback(|_| Msg::Delete)}
                    on_cancel={link.callback(|_| Msg::CancelDelete)}
                />
            </div>
        }
    }
}

impl AdminMessages {
    fn message_card(&self, ctx: &Context<Self>, message: &Message) -> Html {
        let link = ctx.link();
        let (sender, email) = message
            .sender
            .as_ref()
            .map(|user| (user.name.clone(), user.email.clone()))
            .unwrap_or_else(|| ("Usuário removido".to_string(), String::new()));
        let id = message.id.clone();
        let doomed = message.clone();

        html! {
            <article class={classes!("card", "message-card", (!message.is_read).then_some("unread"))}>
                <header class="message-head">
                    <strong>{ sender }</strong>
                    if !email.is_empty() {
                        <span class="muted">{ "•" }{ email }</span>
                    }
                    <span class="muted">{ "•" }{ message.created_at.as_ref().map(date_time).unwrap_or_default() }</span>
                </header>
                <p class="message-content">{ &message.content }</p>
                if let Some(order) = &message.order {
                    <div class="message-order">
                        <span>{ format!("Pedido #{} · {}", order.short_ref(), brl(order.total_amount)) }</span>
                        <span class={classes!("badge", order.status.badge_class())}>{ order.status.label().to_string() }</span>
                        if order.status != OrderStatus::Pending {
                            <button class="btn btn-outline btn-sm" title="Marcar como pendente"
                                onclick={
                                    let order_id = order.id.clone();
                                    link.callback(move |_| Msg::SetOrderStatus(order_id.clone(), OrderStatus::Pending))
                                }>{ "Pendente" }</button>
                        }
                        if order.status != OrderStatus::Confirmed {
                            <button class="btn btn-success btn-sm" title="Confirmar pedido"
                                onclick={
                                    let order_id = order.id.clone();
                                    link.callback(move |_| Msg::SetOrderStatus(order_id.clone(), OrderStatus::Confirmed))
                                }>{ "Confirmar" }</button>
                        }
                    </div>
                }
                <footer class="actions">
                    if !message.is_read {
                        <button class="btn-icon" title="Marcar como lida"
                            onclick={link.callback(move |_| Msg::MarkRead(id.clone()))}>{ "✓" }</button>
                    }
                    <button class="btn-icon danger" title="Excluir"
                        onclick={link.callback(move |_| Msg::AskDelete(doomed.clone()))}>{ "🗑" }</button>
                </footer>
            </article>
        }
    }
}
