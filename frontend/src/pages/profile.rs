//! The signed-in user's own account page.

use common::format::{avatar_color, brl, date_or_dash, initials, phone_mask};
use common::model::order::Order;
use common::model::user::User;
use common::requests::ProfileUpdate;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::order_items::status_badge;
use crate::components::toast::{show_error, show_success};
use crate::components::top_search_bar::TopSearchBar;
use crate::storage::client_store;

const LOAD_FAILED: &str = "Erro ao carregar perfil.";
const SAVE_FAILED: &str = "Erro ao atualizar perfil.";
const SAVED: &str = "Perfil atualizado com sucesso!";
const UPLOAD_FAILED: &str = "Erro ao enviar a foto.";

#[derive(Default, Clone, PartialEq)]
struct ProfileForm {
    name: String,
    email: String,
    company: String,
    phone: String,
    avatar_url: String,
}

impl ProfileForm {
    fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            company: user.company.clone().unwrap_or_default(),
            phone: phone_mask(user.phone.as_deref().unwrap_or_default()),
            avatar_url: user.avatar_url.clone().unwrap_or_default(),
        }
    }
}

pub enum Field {
    Name,
    Email,
    Company,
    Phone,
}

pub enum Msg {
    Loaded(User, Vec<Order>),
    LoadFailed,
    Set(Field, String),
    PickAvatar(web_sys::File),
    AvatarUploaded(String),
    UploadFailed,
    ToggleAvatar,
    Submit,
    Saved(User),
    SaveFailed(String),
}

pub struct Profile {
    user: Option<User>,
    orders: Vec<Order>,
    form: ProfileForm,
    loading: bool,
    saving: bool,
    uploading: bool,
    avatar_open: bool,
    error: Option<String>,
}

impl Component for Profile {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let profile = api::auth::profile().await;
            let orders = api::orders::mine().await;
            match (profile, orders) {
                (Ok(user), Ok(orders)) => link.send_message(Msg::Loaded(user, orders)),
                (Ok(user), Err(_)) => link.send_message(Msg::Loaded(user, Vec::new())),
                _ => link.send_message(Msg::LoadFailed),
            }
        });
        Self {
            user: None,
            orders: Vec::new(),
            form: ProfileForm::default(),
            loading: true,
            saving: false,
            uploading: false,
            avatar_open: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(user, orders) => {
                self.form = ProfileForm::from_user(&user);
                self.user = Some(user);
                self.orders = orders;
                self.loading = false;
            }
            Msg::LoadFailed => {
                self.loading = false;
                self.error = Some(LOAD_FAILED.to_string());
            }
            Msg::Set(field, value) => match field {
                Field::Name => self.form.name = value,
                Field::Email => self.form.email = value,
                Field::Company => self.form.company = value,
                Field::Phone => self.form.phone = phone_mask(&value),
            },
            Msg::PickAvatar(file) => {
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::uploads::image(&file).await {
                        Ok(url) => link.send_message(Msg::AvatarUploaded(url)),
                        Err(_) => link.send_message(Msg::UploadFailed),
                    }
                });
            }
            Msg::AvatarUploaded(url) => {
                self.uploading = false;
                self.form.avatar_url = url;
            }
            Msg::UploadFailed => {
                self.uploading = false;
                show_error(UPLOAD_FAILED);
            }
            Msg::ToggleAvatar => self.avatar_open = !self.avatar_open,
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                self.saving = true;
                self.error = None;
                let form = &self.form;
                let update = ProfileUpdate::new(&form.name, &form.email, &form.company, &form.phone, &form.avatar_url);
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::auth::update_profile(&update).await {
                        Ok(user) => link.send_message(Msg::Saved(user)),
                        Err(err) => link.send_message(Msg::SaveFailed(err.user_message(SAVE_FAILED))),
                    }
                });
            }
            Msg::Saved(user) => {
                self.saving = false;
                client_store().session().update_user(&user);
                let merged = client_store().session().user().unwrap_or(user);
                let phone = merged.phone.clone().filter(|p| !p.is_empty()).unwrap_or_else(|| self.form.phone.clone());
                self.form = ProfileForm { phone: phone_mask(&phone), ..ProfileForm::from_user(&merged) };
                self.user = Some(merged);
                show_success(SAVED);
            }
            Msg::SaveFailed(message) => {
                self.saving = false;
                self.error = Some(message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="container-page"><div class="spinner" /></div>
            };
        }
        html! {
            <>
                <TopSearchBar with_logo=true hide_search=true />
                <div class="container-page narrow">
                    <h1>{ "Meu Perfil" }</h1>
                    if let Some(error) = &self.error {
                        <p class="alert alert-error">{ error }</p>
                    }
                    { self.account_card(ctx) }
                    { self.orders_card() }
                </div>
                if self.avatar_open {
                    { self.avatar_modal(ctx) }
                }
            </>
        }
    }
}

impl Profile {
    fn avatar(&self, ctx: &Context<Self>) -> Html {
        let seed = if self.form.name.is_empty() { &self.form.email } else { &self.form.name };
        let style = format!("background-color: {}", avatar_color(seed));
        let on_file = ctx.link().batch_callback(|event: Event| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            input.files().and_then(|files| files.get(0)).map(Msg::PickAvatar)
        });
        html! {
            <div class="avatar-block">
                <button type="button" class="avatar avatar-lg" {style} onclick={ctx.link().callback(|_| Msg::ToggleAvatar)}>
                    if self.form.avatar_url.is_empty() {
                        { initials(seed) }
                    } else {
                        <img src={self.form.avatar_url.clone()} alt="Avatar" />
                    }
                </button>
                <label class="btn btn-outline btn-sm">
                    { if self.uploading { "Enviando..." } else { "Alterar foto" } }
                    <input type="file" accept="image/*" hidden=true onchange={on_file} disabled={self.uploading} />
                </label>
            </div>
        }
    }

    fn avatar_modal(&self, ctx: &Context<Self>) -> Html {
        let close = ctx.link().callback(|_| Msg::ToggleAvatar);
        let on_key = ctx.link().batch_callback(|event: KeyboardEvent| {
            (event.key() == "Escape").then_some(Msg::ToggleAvatar)
        });
        html! {
            <div class="modal-backdrop" onclick={close.clone()} onkeydown={on_key} tabindex="0">
                <div class="modal modal-sm" onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}>
                    <button class="modal-close" aria-label="Fechar" onclick={close}>{ "×" }</button>
                    if self.form.avatar_url.is_empty() {
                        <div class="avatar avatar-xl">{ initials(&self.form.name) }</div>
                    } else {
                        <img class="avatar-preview" src={self.form.avatar_url.clone()} alt="Avatar" />
                    }
                </div>
            </div>
        }
    }

    fn account_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let field = |kind: fn() -> Field| {
            link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::Set(kind(), input.value())
            })
        };
        let on_submit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let role = self.user.as_ref().map(|user| user.role.label()).unwrap_or_default();
        let since = date_or_dash(self.user.as_ref().and_then(|user| user.created_at.as_ref()));

        html! {
            <div class="card">
                { self.avatar(ctx) }
                <form class="form-grid" onsubmit={on_submit}>
                    <label class="label" for="name">{ "Nome" }</label>
                    <input id="name" class="input" required=true value={self.form.name.clone()} oninput={field(|| Field::Name)} />

                    <label class="label" for="email">{ "E-mail" }</label>
                    <input id="email" class="input" type="email" required=true value={self.form.email.clone()} oninput={field(|| Field::Email)} />

                    <label class="label" for="company">{ "Empresa" }</label>
                    <input id="company" class="input" value={self.form.company.clone()} oninput={field(|| Field::Company)} />

                    <label class="label" for="phone">{ "Telefone" }</label>
                    <input id="phone" class="input" placeholder="(11) 99999-9999" value={self.form.phone.clone()} oninput={field(|| Field::Phone)} />

                    <button type="submit" class="btn btn-primary" disabled={self.saving}>
                        { if self.saving { "Salvando..." } else { "Salvar alterações" } }
                    </button>
                </form>
                <dl class="account-info">
                    <dt>{ "Tipo de Conta:" }</dt>
                    <dd>{ role }</dd>
                    <dt>{ "Membro desde:" }</dt>
                    <dd>{ since }</dd>
                </dl>
            </div>
        }
    }

    fn orders_card(&self) -> Html {
        let total: f64 = self.orders.iter().map(|order| order.total_amount).sum();
        html! {
            <div class="card">
                <h2>{ "Minhas compras" }</h2>
                if self.orders.is_empty() {
                    <p class="muted">{ "Nenhum pedido realizado ainda." }</p>
                } else {
                    <ul class="order-summary-list">
                        { for self.orders.iter().map(|order| html! {
                            <li>
                                <span>{ format!("#{}", order.short_ref()) }</span>
                                <span class="muted">{ date_or_dash(order.created_at.as_ref()) }</span>
                                { status_badge(order) }
                                <strong>{ brl(order.total_amount) }</strong>
                            </li>
                        }) }
                    </ul>
                    <p class="summary-total">{ "Total: " }<strong>{ brl(total) }</strong></p>
                }
            </div>
        }
    }
}
