use common::format::brl;
use common::model::product::Product;
use common::requests::{upload_path, ProductForm, ProductQuery};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::app::Route;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::{show_error, show_success};
use crate::components::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

const SAVE_FAILED: &str = "Erro ao salvar produto. Tente novamente.";
const DELETE_FAILED: &str = "Erro ao excluir produto. Tente novamente.";
const UPLOAD_OK: &str = "Imagem enviada com sucesso";
const UPLOAD_FAILED: &str = "Erro ao enviar imagem. Tente novamente.";
const RECALC_OK: &str = "Preços recalculados a partir das cotações atuais.";
const RECALC_FAILED: &str = "Erro ao recalcular preços.";

/// Technical sheet entries offered as dedicated inputs.
const NAMED_SPECS: [(&str, &str); 6] = [
    ("Modelo", "Ex.: XYZ-200"),
    ("Código", "Ex.: COD-001"),
    ("Peso", "Ex.: 1,250 kg"),
    ("Platina", "Ex.: 0,250 g"),
    ("Paládio", "Ex.: 0,120 g"),
    ("Ródio", "Ex.: 0,030 g"),
];

pub enum Field {
    Name,
    Description,
    Brand,
    Price,
    Stock,
    Category,
    Sku,
    PanelStyle,
}

pub enum Msg {
    Load,
    Loaded(Vec<Product>),
    New,
    Edit(Product),
    Close,
    Set(Field, String),
    SetSpec(String, String),
    EditSpec(usize, bool, String),
    SetNewSpec(bool, String),
    AddSpec,
    RemoveSpec(usize),
    Upload(web_sys::File),
    Uploaded(String),
    UploadFailed,
    RemoveImage(usize),
    Cover(usize),
    Submit,
    Saved(&'static str),
    SaveFailed(String),
    AskDelete(Product),
    CancelDelete,
    Delete,
    Deleted,
    DeleteFailed,
    Recalculate,
    Recalculated(bool),
}

pub struct AdminProducts {
    products: Vec<Product>,
    loading: bool,
    form: ProductForm,
    editing: Option<String>,
    new_spec: (String, String),
    uploading: bool,
    saving: bool,
    pending_delete: Option<Product>,
    deleting: bool,
    recalculating: bool,
    sheet_ref: NodeRef,
}

impl Component for AdminProducts {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            products: Vec::new(),
            loading: true,
            form: ProductForm::default(),
            editing: None,
            new_spec: Default::default(),
            uploading: false,
            saving: false,
            pending_delete: None,
            deleting: false,
            recalculating: false,
            sheet_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    // A failed listing shows the empty state.
                    let products = api::products::list(&ProductQuery::default()).await.unwrap_or_default();
                    link.send_message(Msg::Loaded(products));
                });
                return false;
            }
            Msg::Loaded(products) => {
                self.products = products;
                self.loading = false;
            }
            Msg::New => {
                self.editing = None;
                self.form = ProductForm::default();
                self.new_spec = Default::default();
                open_top_sheet(&self.sheet_ref);
            }
            Msg::Edit(product) => {
                self.editing = Some(product.id.clone());
                self.form = ProductForm::from_product(&product);
                self.new_spec = Default::default();
                open_top_sheet(&self.sheet_ref);
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
                    Field::Description => form.description = value,
                    Field::Brand => form.brand = value,
                    Field::Price => form.price = value,
                    Field::Stock => form.stock = value,
                    Field::Category => form.category = value,
                    Field::Sku => form.sku = value,
                    Field::PanelStyle => form.purchase_panel_style = value,
                }
            }
            Msg::SetSpec(key, value) => self.form.set_spec(&key, value),
            Msg::EditSpec(index, is_key, text) => {
                if let Some(entry) = self.form.specifications.get_mut(index) {
                    if is_key {
                        entry.0 = text;
                    } else {
                        entry.1 = text;
                    }
                }
            }
            Msg::SetNewSpec(is_key, text) => {
                if is_key {
                    self.new_spec.0 = text;
                } else {
                    self.new_spec.1 = text;
                }
            }
            Msg::AddSpec => {
                if self.form.push_spec(&self.new_spec.0, &self.new_spec.1) {
                    self.new_spec = Default::default();
                }
            }
            Msg::RemoveSpec(index) => {
                if index < self.form.specifications.len() {
                    self.form.specifications.remove(index);
                }
            }
            Msg::Upload(file) => {
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::uploads::image(&file).await {
                        Ok(url) => link.send_message(Msg::Uploaded(upload_path(&url))),
                        Err(_) => link.send_message(Msg::UploadFailed),
                    }
                });
            }
            Msg::Uploaded(path) => {
                self.uploading = false;
                self.form.images.push(path);
                show_success(UPLOAD_OK);
            }
            Msg::UploadFailed => {
                self.uploading = false;
                show_error(UPLOAD_FAILED);
            }
            Msg::RemoveImage(index) => {
                if index < self.form.images.len() {
                    let image = self.form.images.remove(index);
                    // Only pictures uploaded during this edit are safe to drop from disk.
                    let stored = self.editing.as_ref().and_then(|id| self.products.iter().find(|p| &p.id == id));
                    let kept_elsewhere = stored.is_some_and(|product| product.images.contains(&image));
                    if let (false, Some(filename)) = (kept_elsewhere, image.strip_prefix("/uploads/")) {
                        let filename = filename.to_string();
                        spawn_local(async move {
                            let _ = api::uploads::delete(&filename).await;
                        });
                    }
                }
            }
            Msg::Cover(index) => self.form.set_cover(index),
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                self.saving = true;
                let payload = self.form.to_payload();
                let editing = self.editing.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = match &editing {
                        Some(id) => api::products::update(id, &payload).await.map(|_| "Produto atualizado com sucesso!"),
                        None => api::products::create(&payload).await.map(|_| "Produto criado com sucesso!"),
                    };
                    match result {
                        Ok(message) => link.send_message(Msg::Saved(message)),
                        Err(err) => link.send_message(Msg::SaveFailed(err.user_message(SAVE_FAILED))),
                    }
                });
            }
            Msg::Saved(message) => {
                self.saving = false;
                show_success(message);
                ctx.link().send_message_batch(vec![Msg::Close, Msg::Load]);
            }
            Msg::SaveFailed(message) => {
                self.saving = false;
                show_error(&message);
            }
            Msg::AskDelete(product) => self.pending_delete = Some(product),
            Msg::CancelDelete => {
                if !self.deleting {
                    self.pending_delete = None;
                }
            }
            Msg::Delete => {
                let Some(product) = self.pending_delete.clone() else {
                    return false;
                };
                self.deleting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::products::delete(&product.id).await {
                        Ok(_) => link.send_message(Msg::Deleted),
                        Err(_) => link.send_message(Msg::DeleteFailed),
                    }
                });
            }
            Msg::Deleted => {
                self.deleting = false;
                self.pending_delete = None;
                show_success("Produto excluído com sucesso!");
                ctx.link().send_message(Msg::Load);
            }
            Msg::DeleteFailed => {
                self.deleting = false;
                show_error(DELETE_FAILED);
            }
            Msg::Recalculate => {
                if self.recalculating {
                    return false;
                }
                self.recalculating = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let done = api::products::recalculate_metals().await.is_ok();
                    link.send_message(Msg::Recalculated(done));
                });
            }
            Msg::Recalculated(done) => {
                self.recalculating = false;
                if done {
                    show_success(RECALC_OK);
                    ctx.link().send_message(Msg::Load);
                } else {
                    show_error(RECALC_FAILED);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let title = if self.editing.is_some() { "Editar Produto" } else { "Novo Produto" };
        let delete_message = self
            .pending_delete
            .as_ref()
            .map(|product| format!("Tem certeza que deseja excluir \"{}\"? Esta ação não pode ser desfeita.", product.name))
            .unwrap_or_default();

        html! {
            <div class="container-page">
                <header class="page-header">
                    <div class="page-header-title">
                        <Link<Route> to={Route::Admin} classes="btn-icon">{ "←" }</Link<Route>>
                        <h1>{ "Gerenciar Produtos" }</h1>
                    </div>
                    <div class="actions">
                        <button class="btn btn-outline" disabled={self.recalculating} onclick={link.callback(|_| Msg::Recalculate)}>
                            { if self.recalculating { "Recalculando..." } else { "Recalcular preços" } }
                        </button>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::New)}>{ "Novo Produto" }</button>
                    </div>
                </header>
                if self.loading {
                    <div class="spinner" />
                } else {
                    { self.table(ctx) }
                }
                <TopSheet node_ref={self.sheet_ref.clone()} title={title}>
                    { self.form_view(ctx) }
                </TopSheet>
                <ConfirmDialog
                    open={self.pending_delete.is_some()}
                    title="Excluir produto"
                    message={delete_message}
                    confirm_label={if self.deleting { "Excluindo..." } else { "Excluir" }}
                    on_confirm={link.callback(|_| Msg::Delete)}
                    on_cancel={link.callback(|_| Msg::CancelDelete)}
                />
            </div>
        }
    }
}

impl AdminProducts {
    fn table(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.products.is_empty() {
            return html! { <p class="empty-state">{ "Nenhum produto cadastrado." }</p> };
        }
        html! {
            <table class="table">
                <thead>
                    <tr>
                        <th />
                        <th>{ "Nome" }</th>
                        <th>{ "Preço" }</th>
                        <th>{ "Estoque" }</th>
                        <th>{ "Categoria" }</th>
                        <th>{ "Ações" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for self.products.iter().map(|product| {
                        let (edit, delete) = (product.clone(), product.clone());
                        html! {
                            <tr>
                                <td><img class="thumb" src={product.primary_image()} alt="" /></td>
                                <td>
                                    <strong>{ &product.name }</strong>
                                    if !product.sku.is_empty() {
                                        <span class="muted">{ format!(" · {}", product.sku) }</span>
                                    }
                                </td>
                                <td>{ brl(product.price) }</td>
                                <td class={classes!((!product.in_stock()).then_some("danger"))}>{ product.stock }</td>
                                <td>{ &product.category }</td>
                                <td class="actions">
                                    <button class="btn-icon" aria-label="Editar" onclick={link.callback(move |_| Msg::Edit(edit.clone()))}>{ "✎" }</button>
                                    <button class="btn-icon danger" aria-label="Excluir" onclick={link.callback(move |_| Msg::AskDelete(delete.clone()))}>{ "🗑" }</button>
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
        let on_description = link.callback(|event: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
            Msg::Set(Field::Description, input.value())
        });
        let on_style = link.callback(|event: Event| {
            let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
            Msg::Set(Field::PanelStyle, select.value())
        });
        let on_submit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="form-grid" onsubmit={on_submit}>
                <label class="label">{ "Nome" }
                    <input class="input" required=true value={form.name.clone()} oninput={text(|| Field::Name)} />
                </label>
                <label class="label">{ "Marca" }
                    <input class="input" value={form.brand.clone()} oninput={text(|| Field::Brand)} />
                </label>
                <label class="label">{ "Categoria" }
                    <input class="input" required=true value={form.category.clone()} oninput={text(|| Field::Category)} />
                </label>
                <label class="label">{ "SKU" }
                    <input class="input" value={form.sku.clone()} oninput={text(|| Field::Sku)} />
                </label>
                <label class="label">{ "Estoque" }
                    <input class="input" type="number" min="0" value={form.stock.clone()} oninput={text(|| Field::Stock)} />
                </label>
                <label class="label">{ "Preço (R$)" }
                    <input class="input" inputmode="decimal" placeholder="Ex.: 210,00" value={form.price.clone()} oninput={text(|| Field::Price)} />
                </label>
                <label class="label span-2">{ "Descrição" }
                    <textarea class="input" rows="4" value={form.description.clone()} oninput={on_description} />
                </label>
                <label class="label">{ "Painel de compra" }
                    <select class="input" onchange={on_style}>
                        <option value="highlight" selected={form.purchase_panel_style != "minimal"}>{ "Destaque" }</option>
                        <option value="minimal" selected={form.purchase_panel_style == "minimal"}>{ "Simples" }</option>
                    </select>
                </label>
                { self.images_view(ctx) }
                { self.specs_view(ctx) }
                <div class="form-actions span-2">
                    <button type="button" class="btn btn-outline" onclick={link.callback(|_| Msg::Close)}>{ "Cancelar" }</button>
                    <button type="submit" class="btn btn-primary" disabled={self.saving}>
                        { if self.saving { "Salvando..." } else { "Salvar" } }
                    </button>
                </div>
            </form>
        }
    }

    fn images_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_file = link.batch_callback(|event: Event| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            input.set_value("");
            file.map(Msg::Upload)
        });
        html! {
            <fieldset class="span-2">
                <legend>{ "Imagens" }</legend>
                <label class="btn btn-outline btn-sm">
                    { if self.uploading { "Enviando..." } else { "Enviar imagem" } }
                    <input type="file" accept="image/*" hidden=true disabled={self.uploading} onchange={on_file} />
                </label>
                if self.form.images.is_empty() {
                    <p class="muted">{ "Nenhuma imagem enviada ainda." }</p>
                } else {
                    <div class="image-strip">
                        { for self.form.images.iter().enumerate().map(|(index, src)| html! {
                            <div class={classes!("image-tile", (index == 0).then_some("cover"))}>
                                <img src={src.clone()} alt="" />
                                if index > 0 {
                                    <button type="button" class="btn-link" onclick={link.callback(move |_| Msg::Cover(index))}>{ "Capa" }</button>
                                }
                                <button type="button" class="btn-icon danger" aria-label="Remover" onclick={link.callback(move |_| Msg::RemoveImage(index))}>{ "×" }</button>
                            </div>
                        }) }
                    </div>
                }
            </fieldset>
        }
    }

    fn specs_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let extra: Vec<(usize, &(String, String))> = self
            .form
            .specifications
            .iter()
            .enumerate()
            .filter(|(_, (key, _))| !NAMED_SPECS.iter().any(|(name, _)| name == key))
            .collect();
        let new_spec = |is_key: bool| {
            link.callback(move |event: InputEvent| {
                let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                Msg::SetNewSpec(is_key, input.value())
            })
        };

        html! {
            <fieldset class="span-2">
                <legend>{ "Ficha Técnica" }</legend>
                <div class="form-grid">
                    { for NAMED_SPECS.iter().map(|(key, placeholder)| {
                        let key = key.to_string();
                        let value = self.form.spec_value(&key).to_string();
                        let label = key.clone();
                        let oninput = link.callback(move |event: InputEvent| {
                            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                            Msg::SetSpec(key.clone(), input.value())
                        });
                        html! {
                            <label class="label">{ label }
                                <input class="input" placeholder={*placeholder} {value} {oninput} />
                            </label>
                        }
                    }) }
                </div>
                { for extra.into_iter().map(|(index, (key, value))| {
                    let on_key = link.callback(move |event: InputEvent| {
                        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                        Msg::EditSpec(index, true, input.value())
                    });
                    let on_value = link.callback(move |event: InputEvent| {
                        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
                        Msg::EditSpec(index, false, input.value())
                    });
                    html! {
                        <div class="spec-row">
                            <input class="input" value={key.clone()} oninput={on_key} />
                            <input class="input" value={value.clone()} oninput={on_value} />
                            <button type="button" class="btn-icon danger" onclick={link.callback(move |_| Msg::RemoveSpec(index))}>{ "×" }</button>
                        </div>
                    }
                }) }
                <div class="spec-row">
                    <input class="input" placeholder="Característica" value={self.new_spec.0.clone()} oninput={new_spec(true)} />
                    <input class="input" placeholder="Valor" value={self.new_spec.1.clone()} oninput={new_spec(false)} />
                    <button type="button" class="btn btn-outline btn-sm" onclick={link.callback(|_| Msg::AddSpec)}>{ "Adicionar" }</button>
                </div>
            </fieldset>
        }
    }
}
