use common::requests::LoginRequest;
use common::routes::landing_for;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::turnstile::{site_key, Turnstile};
use crate::storage::client_store;

const LOGIN_FAILED: &str = "Erro ao fazer login. Verifique suas credenciais.";
const CAPTCHA_MISSING: &str = "Por favor, confirme que é humano antes de entrar.";

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    TogglePassword,
    CaptchaToken(String),
    Submit,
    Failed(String),
}

pub struct Login {
    email: String,
    password: String,
    show_password: bool,
    captcha_token: String,
    error: Option<String>,
    loading: bool,
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: client_store().session().last_email(),
            password: String::new(),
            show_password: false,
            captcha_token: String::new(),
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => self.email = email,
            Msg::SetPassword(password) => self.password = password,
            Msg::TogglePassword => self.show_password = !self.show_password,
            Msg::CaptchaToken(token) => {
                self.captcha_token = token;
                self.error = None;
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                if site_key().is_some() && self.captcha_token.is_empty() {
                    self.error = Some(CAPTCHA_MISSING.to_string());
                    return true;
                }
                self.error = None;
                self.loading = true;

                let request = LoginRequest {
                    email: self.email.trim().to_string(),
                    password: self.password.clone(),
                    turnstile_token: Some(self.captcha_token.clone()).filter(|token| !token.is_empty()),
                };
                let link = ctx.link().clone();
                let navigator = ctx.link().navigator();
                spawn_local(async move {
                    match api::auth::login(&request).await {
                        Ok(auth) => {
                            client_store().session().login(&auth.token, &auth.user);
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::from_path(landing_for(auth.user.role)));
                            }
                        }
                        Err(err) => link.send_message(Msg::Failed(err.user_message(LOGIN_FAILED))),
                    }
                });
            }
            Msg::Failed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_submit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let on_email = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            Msg::SetEmail(input.value())
        });
        let on_password = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            Msg::SetPassword(input.value())
        });

        html! {
            <div class="login-page">
                <div class="login-art">
                    <Link<Route> to={Route::Home} classes="login-back">{ "← Voltar" }</Link<Route>>
                </div>
                <div class="login-panel">
                    <img class="login-logo" src="/images/logo.png" alt="Recicla Ebenezer" />
                    <h1>{ "Área do parceiro" }</h1>
                    <form onsubmit={on_submit}>
                        <label class="label" for="email">{ "E-mail" }</label>
                        <input id="email" class="input" type="email" required=true
                            value={self.email.clone()} oninput={on_email} autocomplete="username" />

                        <label class="label" for="password">{ "Senha" }</label>
                        <div class="password-field">
                            <input id="password" class="input" required=true
                                type={if self.show_password { "text" } else { "password" }}
                                value={self.password.clone()} oninput={on_password}
                                autocomplete="current-password" />
                            <button type="button" class="password-toggle" onclick={link.callback(|_| Msg::TogglePassword)}>
                                { if self.show_password { "Ocultar" } else { "Mostrar" } }
                            </button>
                        </div>

                        if let Some(key) = site_key() {
                            <Turnstile site_key={key} on_token={link.callback(Msg::CaptchaToken)} />
                        }
                        if let Some(error) = &self.error {
                            <p class="alert alert-error">{ error }</p>
                        }
                        <button type="submit" class="btn btn-primary btn-block" disabled={self.loading}>
                            { if self.loading { "Entrando..." } else { "Entrar" } }
                        </button>
                    </form>
                </div>
            </div>
        }
    }
}
