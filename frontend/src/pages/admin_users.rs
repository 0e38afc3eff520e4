use common::format::date_or_dash;
use common::model::user::{Role, User, UserFilter};
use common::requests::{RegisterRequest, UserUpdate};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::{show_error, show_success};
use crate::components::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

const SAVE_FAILED: &str = "Não conseguimos salvar as alterações. Tente novamente.";
const PASSWORD_REQUIRED: &str = "Informe uma senha para criar o usuário.";
const DELETE_FAILED: &str = "Não foi possível excluir o usuário. Tente novamente.";
const STATUS_FAILED: &str = "Não foi possível alterar o status do usuário.";

#[derive(Default, Clone)]
struct UserForm {
    name: String,
    email: String,
    password: String,
    company: String,
    phone: String,
    role: Role,
}

impl UserForm {
    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            password: String::new(),
            company: user.company.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            role: user.role,
        }
    }
}

pub enum Field {
    Name,
    Email,
    Password,
    Company,
    Phone,
}

pub enum Msg {
    Load,
    Loaded(Vec<User>),
    Search(String),
    FilterRole(Option<Role>),
    New,
    Edit(User),
    Fetched(User),
    Close,
    Set(Field, String),
    SetRole(Role),
    Submit,
    Saved(&'static str),
    Failed(String),
    ToggleActive(User),
    AskDelete(User),
    CancelDelete,
    Delete,
    Deleted(String),
}

pub struct AdminUsers {
    users: Vec<User>,
    loading: bool,
    filter: UserFilter,
    form: UserForm,
    editing: Option<String>,
    saving: bool,
    pending_delete: Option<User>,
    deleting: bool,
    sheet_ref: NodeRef,
}

impl Component for AdminUsers {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            users: Vec::new(),
            loading: true,
            filter: UserFilter::default(),
            form: UserForm::default(),
            editing: None,
            saving: false,
            pending_delete: None,
            deleting: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let users = api::users::list().await.unwrap_or_default();
                    link.send_message(Msg::Loaded(users));
                });
                return false;
            }
            Msg::Loaded(users) => {
                self.users = users;
                self.loading = false;
            }
            Msg::Search(term) => self.filter.term = term,
            Msg::FilterRole(role) => self.filter.role = role,
            Msg::New => {
                self.editing = None;
                self.form = UserForm::default();
                open_top_sheet(&self.sheet_ref);
            }
            Msg::Edit(user) => {
                let id = user.id.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    if let Ok(fresh) = api::users::find(&id).await {
                        link.send_message(Msg::Fetched(fresh));
                    }
                });
                self.editing = Some(user.id.clone());
                self.form = UserForm::from_user(&user);
                open_top_sheet(&self.sheet_ref);
            }
            Msg::Fetched(user) => {
                if self.editing.as_deref() != Some(user.id.as_str()) {
                    return false;
                }
                let password = std::mem::take(&mut self.form.password);
                self.form = UserForm { password, ..UserForm::from_user(&user) };
            }
            Msg::Close => {
                close_top_sheet(&self.sheet_ref);
                self.editing = None;
                return false;
            }
            Msg::Set(field, value) => {
                let form = &mut self.form;
                match field {
                    Field::Name => form.name = value,
                    Field::Email => form.email = value,
                    Field::Password => form.password = value,
                    Field::Company => form.company = value,
                    Field::Phone => form.phone = value,
                }
            }
            Msg::SetRole(role) => self.form.role = role,
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                let form = self.form.clone();
                if self.editing.is_none() && form.password.is_empty() {
                    show_error(PASSWORD_REQUIRED);
                    return false;
                }
                self.saving = true;
                let editing = self.editing.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match editing {
                        Some(id) => {
                            let update = UserUpdate::new(&form.name, &form.email, &form.password, &form.company, &form.phone, form.role);
                            api::users::update(&id, &update).await.map(|_| "As informações foram salvas com sucesso.")
                        }
                        None => {
                            let request = RegisterRequest {
                                name: form.name,
                                email: form.email,
                                password: form.password,
                                company: form.company,
                                phone: form.phone,
                                role: form.role,
                            };
                            api::auth::register(&request).await.map(|_| "O novo usuário foi cadastrado com sucesso.")
                        }
                    };
                    match result {
                        Ok(message) => link.send_message(Msg::Saved(message)),
                        Err(err) => link.send_message(Msg::Failed(err.user_message(SAVE_FAILED))),
                    }
                });
            }
            Msg::Saved(message) => {
                self.saving = false;
                show_success(message);
                ctx.link().send_message_batch(vec![Msg::Close, Msg::Load]);
            }
            Msg::Failed(message) => {
                self.saving = false;
                self.deleting = false;
                show_error(&message);
            }
            Msg::ToggleActive(user) => {
                let activate = !user.is_active;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::users::set_active(&user.id, activate).await {
                        Ok(_) => {
                            show_success(if activate { "Usuário ativado" } else { "Usuário desativado" });
                            link.send_message(Msg::Load);
                        }
                        Err(err) => link.send_message(Msg::Failed(err.user_message(STATUS_FAILED))),
                    }
                });
                return false;
            }
            Msg::AskDelete(user) => self.pending_delete = Some(user),
            Msg::CancelDelete => {
                if !self.deleting {
                    self.pending_delete = None;
                }
            }
            Msg::Delete => {
                let Some(user) = self.pending_delete.clone() else {
                    return false;
                };
                self.deleting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::users::delete(&user.id).await {
                        Ok(_) => link.send_message(Msg::Deleted(user.name)),
                        Err(err) => link.send_message(Msg::Failed(err.user_message(DELETE_FAILED))),
                    }
                });
            }
            Msg::Deleted(name) => {
                self.deleting = false;
                self.pending_delete = None;
                let who = if name.is_empty() { "O usuário".to_string() } else { name };
                show_success(&format!("{who} foi removido da base."));
                ctx.link().send_message(Msg::Load);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <div class="container-page"><div class="spinner" /></div> };
        }
        let on_search = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            Msg::Search(input.value())
        });
        let on_role = link.callback(|event: Event| {
            let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
            Msg::FilterRole(match select.value().as_str() {
                "admin" => Some(Role::Admin),
                "partner" => Some(Role::Partner),
                _ => None,
            })
        });
        let title = if self.editing.is_some() { "Editar Usuário" } else { "Novo Usuário" };
        let delete_message = self
            .pending_delete
            .as_ref()
            .map(|user| format!("Excluir {}? Esta ação não pode ser desfeita.", user.name))
            .unwrap_or_default();

        html! {
            <div class="container-page">
                <header class="page-header">
                    <div class="page-header-title">
                        <Link<Route> to={Route::Admin} classes="btn-icon">{ "←" }</Link<Route>>
                        <h1>{ "Gerenciar Usuários" }</h1>
                    </div>
                    <button class="btn btn-primary" onclick={link.callback(|_| Msg::New)}>{ "Novo Usuário" }</button>
                </header>
                <div class="toolbar">
                    <input class="input" placeholder="Buscar por nome, e-mail ou empresa"
                        value={self.filter.term.clone()} oninput={on_search} />
                    <label class="label inline">{ "Tipo:" }
                        <select class="input" onchange={on_role}>
                            <option value="todos" selected={self.filter.role.is_none()}>{ "Todos" }</option>
                            <option value="partner" selected={self.filter.role == Some(Role::Partner)}>{ "Parceiros" }</option>
                            <option value="admin" selected={self.filter.role == Some(Role::Admin)}>{ "Admins" }</option>
                        </select>
                    </label>
                </div>
                { self.table(ctx) }
                <TopSheet node_ref={self.sheet_ref.clone()} title={title}>
                    { self.form_view(ctx) }
                </TopSheet>
                <ConfirmDialog
                    open={self.pending_delete.is_some()}
                    title="Excluir usuário"
                    message={delete_message}
                    confirm_label={if self.deleting { "Excluindo..." } else { "Sim, excluir" }}
                    on_confirm={link.callback(|_| Msg::Delete)}
                    on_cancel={link.callback(|_| Msg::CancelDelete)}
                />
            </div>
        }
    }
}

impl AdminUsers {
    fn table(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let shown = self.filter.apply(&self.users);
        if shown.is_empty() {
            return html! { <p class="empty-state">{ "Nenhum usuário encontrado." }</p> };
        }
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th>{ "Nome" }</th>
                        <th>{ "Email" }</th>
                        <th>{ "Empresa" }</th>
                        <th>{ "Telefone" }</th>
                        <th>{ "Tipo" }</th>
                        <th>{ "Data de Cadastro" }</th>
                        <th>{ "Ações" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for shown.into_iter().map(|user| {
                        let (edit, toggle, delete) = (user.clone(), user.clone(), user.clone());
                        let role = if user.is_admin() { "Admin" } else { "Parceiro" };
                        html! {
                            <tr class={classes!((!user.is_active).then_some("inactive"))}>
                                <td>{ &user.name }</td>
                                <td>{ &user.email }</td>
                                <td>{ user.company.clone().unwrap_or_default() }</td>
                                <td>{ user.phone.clone().unwrap_or_default() }</td>
                                <td><span class={classes!("badge", user.is_admin().then_some("badge-info"))}>{ role }</span></td>
                                <td>{ date_or_dash(user.created_at.as_ref()) }</td>
                                <td class="actions">
                                    <button class={classes!("badge", if user.is_active { "status-confirmed" } else { "status-rejected" })}
                                        title={if user.is_active { "Desativar usuário" } else { "Ativar usuário" }}
                                        onclick={link.callback(move |_| Msg::ToggleActive(toggle.clone()))}>
                                        { if user.is_active { "Ativo" } else { "Inativo" } }
                                    </button>
                                    <button class="btn-icon" title="Editar" onclick={link.callback(move |_| Msg::Edit(edit.clone()))}>{ "✎" }</button>
                                    <button class="btn-icon danger" title="Excluir usuário" onclick={link.callback(move |_| Msg::AskDelete(delete.clone()))}>{ "🗑" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        }
    }

    fn form_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = &self.form;
        let text = |field: fn() -> Field| {
            link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::Set(field(), input.value())
            })
        };
        let on_role = link.callback(|event: Event| {
            let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
            Msg::SetRole(if select.value() == "admin" { Role::Admin } else { Role::Partner })
        });
        let on_submit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let password_hint = if self.editing.is_some() { "Deixe em branco para não alterar" } else { "Senha do usuário" };

        html! {
            <form class="form-grid" onsubmit={on_submit}>
                <label class="label">{ "Nome Completo *" }
                    <input class="input" required=true value={form.name.clone()} oninput={text(|| Field::Name)} />
                </label>
                <label class="label">{ "Email *" }
                    <input class="input" type="email" required=true value={form.email.clone()} oninput={text(|| Field::Email)} />
                </label>
                <label class="label">{ "Senha" }
                    <input class="input" type="password" placeholder={password_hint} value={form.password.clone()}
                        oninput={text(|| Field::Password)} autocomplete="new-password" />
                </label>
                <label class="label">{ "Tipo de usuário" }
                    <select class="input" onchange={on_role}>
                        <option value="partner" selected={form.role == Role::Partner}>{ "Parceiro" }</option>
                        <option value="admin" selected={form.role == Role::Admin}>{ "Administrador" }</option>
                    </select>
                </label>
                <label class="label">{ "Empresa" }
                    <input class="input" value={form.company.clone()} oninput={text(|| Field::Company)} />
                </label>
                <label class="label">{ "Telefone" }
                    <input class="input" placeholder="(11) 99999-9999" value={form.phone.clone()} oninput={text(|| Field::Phone)} />
                </label>
                <div class="form-actions span-2">
                    <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::Close)}>{ "Cancelar" }</button>
                    <button type="submit" class="btn btn-primary" disabled={self.saving}>
                        { if self.editing.is_some() { "Atualizar" } else { "Criar" } }
                    </button>
                </div>
            </form>
        }
    }
}
