//! Catalog banner management.
//!
//! Fields of an existing banner are saved one at a time when the input
//! loses focus; the list is reloaded after every write.

use common::model::promo::Promo;
use common::requests::{PromoDraft, PromoPayload};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::{show_error, show_success};

const IMAGE_REQUIRED: &str = "Envie ao menos uma imagem (desktop ou mobile)";
const UPLOAD_FAILED: &str = "Erro ao enviar imagem.";
const SAVE_FAILED: &str = "Erro ao salvar banner.";

#[derive(Clone, Copy, PartialEq)]
pub enum Screen {
    Desktop,
    Mobile,
}

impl Screen {
    fn target(self) -> &'static str {
        match self {
            Screen::Desktop => "desktop",
            Screen::Mobile => "mobile",
        }
    }
}

pub enum DraftField {
    Title,
    Subtitle,
    Link,
    Order,
}

pub enum Msg {
    Load,
    Loaded(Vec<Promo>),
    Tab(Screen),
    SetDraft(DraftField, String),
    SetDraftActive(bool),
    UploadDraft(Vec<web_sys::File>),
    DraftUploaded(Vec<String>),
    DropDesktop(usize),
    Create,
    Created(usize),
    Patch(String, PromoPayload),
    UploadImage(String, web_sys::File),
    AskDelete(Promo),
    CancelDelete,
    Delete,
    Reloaded(&'static str),
    Failed(String),
}

pub struct AdminPromos {
    items: Vec<Promo>,
    tab: Screen,
    draft: PromoDraft,
    uploading: bool,
    creating: bool,
    pending_delete: Option<Promo>,
}

impl Component for AdminPromos {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            items: Vec::new(),
            tab: Screen::Desktop,
            draft: PromoDraft::empty(),
            uploading: false,
            creating: false,
            pending_delete: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::promos::all().await {
                        Ok(items) => link.send_message(Msg::Loaded(items)),
                        Err(err) => link.send_message(Msg::Failed(err.user_message("Erro ao carregar banners."))),
                    }
                });
                return false;
            }
            Msg::Loaded(items) => self.items = items,
            Msg::Tab(screen) => self.tab = screen,
            Msg::SetDraft(field, value) => match field {
                DraftField::Title => self.draft.title = value,
                DraftField::Subtitle => self.draft.subtitle = value,
                DraftField::Link => self.draft.link_url = value,
                DraftField::Order => self.draft.order = value,
            },
            Msg::SetDraftActive(active) => self.draft.active = active,
            Msg::UploadDraft(files) => {
                if files.is_empty() {
                    return false;
                }
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let mut urls = Vec::with_capacity(files.len());
                    for file in &files {
                        match api::uploads::image(file).await {
                            Ok(url) => urls.push(url),
                            Err(_) => {
                                link.send_message(Msg::Failed(UPLOAD_FAILED.to_string()));
                                break;
                            }
                        }
                    }
                    link.send_message(Msg::DraftUploaded(urls));
                });
            }
            Msg::DraftUploaded(urls) => {
                self.uploading = false;
                match self.tab {
                    Screen::Desktop => self.draft.image_desktop_urls.extend(urls),
                    Screen::Mobile => {
                        if let Some(url) = urls.into_iter().last() {
                            self.draft.image_mobile_url = url;
                        }
                    }
                }
            }
            Msg::DropDesktop(index) => {
                if index < self.draft.image_desktop_urls.len() {
                    self.draft.image_desktop_urls.remove(index);
                }
            }
            Msg::Create => {
                let Some(payloads) = self.draft.to_payloads() else {
                    show_error(IMAGE_REQUIRED);
                    return false;
                };
                self.creating = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let mut created = 0;
                    for payload in &payloads {
                        match api::promos::create(payload).await {
                            Ok(_) => created += 1,
                            Err(err) => {
                                link.send_message(Msg::Failed(err.user_message(SAVE_FAILED)));
                                break;
                            }
                        }
                    }
                    link.send_message(Msg::Created(created));
                });
            }
            Msg::Created(count) => {
                self.creating = false;
                if count > 0 {
                    self.draft = PromoDraft::empty();
                    show_success(if count == 1 { "Banner criado." } else { "Banners criados." });
                }
                ctx.link().send_message(Msg::Load);
            }
            Msg::Patch(id, patch) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::promos::update(&id, &patch).await {
                        Ok(_) => link.send_message(Msg::Reloaded("Banner atualizado.")),
                        Err(err) => link.send_message(Msg::Failed(err.user_message(SAVE_FAILED))),
                    }
                });
                return false;
            }
            Msg::UploadImage(id, file) => {
                self.uploading = true;
                let target = self.tab.target();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::promos::upload_image(&id, &file, target).await {
                        Ok(_) => link.send_message(Msg::Reloaded("Imagem atualizada.")),
                        Err(err) => link.send_message(Msg::Failed(err.user_message(UPLOAD_FAILED))),
                    }
                });
            }
            Msg::AskDelete(promo) => self.pending_delete = Some(promo),
            Msg::CancelDelete => self.pending_delete = None,
            Msg::Delete => {
                let Some(promo) = self.pending_delete.take() else {
                    return false;
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::promos::delete(&promo.id).await {
                        Ok(_) => link.send_message(Msg::Reloaded("Banner removido.")),
                        Err(err) => link.send_message(Msg::Failed(err.user_message("Erro ao remover banner."))),
                    }
                });
            }
            Msg::Reloaded(message) => {
                self.uploading = false;
                show_success(message);
                ctx.link().send_message(Msg::Load);
            }
            Msg::Failed(message) => {
                self.uploading = false;
                self.creating = false;
                show_error(&message);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="container-page">
                <h1>{ "Banners do Catálogo" }</h1>
                <div class="tabs">
                    <button class={classes!("tab", (self.tab == Screen::Desktop).then_some("active"))}
                        onclick={link.callback(|_| Msg::Tab(Screen::Desktop))}>{ "PC" }</button>
                    <button class={classes!("tab", (self.tab == Screen::Mobile).then_some("active"))}
                        onclick={link.callback(|_| Msg::Tab(Screen::Mobile))}>{ "Mobile" }</button>
                </div>
                { self.draft_card(ctx) }
                <section class="card">
                    <h2>{ "Banners" }</h2>
                    if self.items.is_empty() {
                        <p class="muted">{ "Nenhum banner cadastrado." }</p>
                    }
                    { for self.items.iter().map(|promo| self.banner_row(ctx, promo)) }
                </section>
                <ConfirmDialog
                    open={self.pending_delete.is_some()}
                    title="Remover banner?"
                    message="O banner deixará de aparecer no catálogo."
                    confirm_label="Remover"
                    on_confirm={link.callback(|_| Msg::Delete)}
                    on_cancel={link.callback(|_| Msg::CancelDelete)}
                />
            </div>
        }
    }
}

fn picked_files(event: &Event) -> Vec<web_sys::File> {
    let input: web_sys::HtmlInputElement = event.target_unchecked_into();
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|index| list.get(index)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

impl AdminPromos {
    fn draft_card(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &self.draft;
        let text = |field: fn() -> DraftField| {
            link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::SetDraft(field(), input.value())
            })
        };
        let on_files = link.callback(|event: Event| Msg::UploadDraft(picked_files(&event)));
        let on_active = link.callback(|event: Event| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            Msg::SetDraftActive(input.checked())
        });

        html! {
            <section class="card">
                <h2>{ "Novo Banner" }</h2>
                <div class="form-grid">
                    <div>
                        if self.tab == Screen::Desktop {
                            <label class="label">{ "Imagem (Desktop)" }</label>
                            <input type="file" accept="image/*" multiple=true onchange={on_files} />
                            if !draft.image_desktop_urls.is_empty() {
                                <div class="image-strip">
                                    { for draft.image_desktop_urls.iter().enumerate().map(|(index, src)| html! {
                                        <div class="image-tile">
                                            <img src={src.clone()} alt={format!("preview-{index}")} />
                                            <button type="button" class="btn-icon danger"
                                                onclick={link.callback(move |_| Msg::DropDesktop(index))}>{ "✕" }</button>
                                        </div>
                                    }) }
                                </div>
                            }
                        } else {
                            <label class="label">{ "Imagem (Mobile)" }</label>
                            <input type="file" accept="image/*" onchange={on_files} />
                            if !draft.image_mobile_url.is_empty() {
                                <img class="banner-preview" src={draft.image_mobile_url.clone()} alt="preview-mobile" />
                            }
                        }
                        if self.uploading {
                            <span class="muted">{ "Enviando..." }</span>
                        }
                    </div>
                    <div class="stack">
                        <input class="input" placeholder="Título (opcional)" value={draft.title.clone()} oninput={text(|| DraftField::Title)} />
                        <input class="input" placeholder="Subtítulo (opcional)" value={draft.subtitle.clone()} oninput={text(|| DraftField::Subtitle)} />
                        <input class="input" placeholder="Link (opcional)" value={draft.link_url.clone()} oninput={text(|| DraftField::Link)} />
                        <input class="input" type="number" placeholder="Ordem (0 primeiro)" value={draft.order.clone()} oninput={text(|| DraftField::Order)} />
                        <label class="checkbox">
                            <input type="checkbox" checked={draft.active} onchange={on_active} />
                            { "Ativo" }
                        </label>
                        <button class="btn btn-primary" disabled={self.uploading || self.creating} onclick={link.callback(|_| Msg::Create)}>
                            { "Adicionar" }
                        </button>
                    </div>
                </div>
            </section>
        }
    }

    fn banner_row(&self, ctx: &Context<Self>, promo: &Promo) -> Html {
        let link = ctx.link();
        let id = promo.id.clone();
        let patch = |build: fn(String) -> PromoPayload| {
            let id = id.clone();
            link.callback(move |event: Event| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::Patch(id.clone(), build(input.value()))
            })
        };
        let on_active = {
            let id = id.clone();
            link.callback(move |event: Event| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::Patch(id.clone(), PromoPayload { active: Some(input.checked()), ..PromoPayload::default() })
            })
        };
        let on_image = {
            let id = id.clone();
            link.batch_callback(move |event: Event| {
                picked_files(&event).into_iter().next().map(|file| Msg::UploadImage(id.clone(), file))
            })
        };
        let (label, src) = match self.tab {
            Screen::Desktop => ("Desktop", promo.desktop_src().to_string()),
            Screen::Mobile => ("Mobile", promo.mobile_src().to_string()),
        };
        let doomed = promo.clone();

        html! {
            <div class="banner-row">
                <div class="banner-row-image">
                    <label class="label">{ label }</label>
                    <img src={src} alt={promo.title.clone()} />
                    <input type="file" accept="image/*" disabled={self.uploading} onchange={on_image} />
                </div>
                <div class="form-grid">
                    <input class="input" placeholder="Título" value={promo.title.clone()}
                        onchange={patch(|title| PromoPayload { title: Some(title), ..PromoPayload::default() })} />
                    <input class="input" placeholder="Subtítulo" value={promo.subtitle.clone()}
                        onchange={patch(|subtitle| PromoPayload { subtitle: Some(subtitle), ..PromoPayload::default() })} />
                    <input class="input" placeholder="Link" value={promo.link_url.clone()}
                        onchange={patch(|link_url| PromoPayload { link_url: Some(link_url), ..PromoPayload::default() })} />
                    <input class="input" type="number" placeholder="Ordem" value={promo.order.to_string()}
                        onchange={patch(|order| PromoPayload { order: Some(order.trim().parse().unwrap_or(0)), ..PromoPayload::default() })} />
                    <label class="checkbox">
                        <input type="checkbox" checked={promo.active} onchange={on_active} />
                        { "Ativo" }
                    </label>
                </div>
                <button class="btn-link danger" onclick={link.callback(move |_| Msg::AskDelete(doomed.clone()))}>{ "Remover" }</button>
            </div>
        }
    }
}
