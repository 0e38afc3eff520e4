use yew::platform::spawn_local;
use yew::prelude::*;

use common::sheet::SheetEditor;

use crate::api;

use super::messages::Msg;
use super::state::FormulaWorkbook;

const LOAD_FAILED: &str = "Não foi possível carregar a planilha.";
const SAVE_FAILED: &str = "Erro ao salvar alterações.";
const SAVE_OK: &str = "Planilha atualizada com sucesso.";

pub fn update(component: &mut FormulaWorkbook, ctx: &Context<FormulaWorkbook>, msg: Msg) -> bool {
    match msg {
        Msg::Load(name) => {
            component.loading = true;
            component.error = None;
            component.success = None;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::formulas::sheet(name.as_deref()).await {
                    Ok(sheet) => link.send_message(Msg::Loaded(sheet)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.user_message(LOAD_FAILED))),
                }
            });
            true
        }
        Msg::Loaded(sheet) => {
            component.loading = false;
            match component.editor.as_mut() {
                Some(editor) => editor.replace(sheet),
                None => component.editor = Some(SheetEditor::new(sheet)),
            }
            true
        }
        Msg::LoadFailed(message) => {
            component.loading = false;
            component.error = Some(message);
            true
        }
        Msg::SelectSheet(name) => {
            if component.sheet_name().as_deref() == Some(name.as_str()) {
                return false;
            }
            ctx.link().send_message(Msg::Load(Some(name)));
            false
        }
        Msg::Reload => {
            ctx.link().send_message(Msg::Load(component.sheet_name()));
            false
        }
        Msg::Edit { address, value } => {
            if let Some(editor) = component.editor.as_mut() {
                editor.edit(&address, &value);
            }
            component.success = None;
            true
        }
        Msg::Save => {
            if !component.can_save() {
                return false;
            }
            let Some(editor) = component.editor.as_ref() else {
                return false;
            };
            let sheet_name = editor.sheet().sheet_name.clone();
            let updates = editor.build_updates();
            component.saving = true;
            component.error = None;
            component.success = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::formulas::update(&sheet_name, updates).await {
                    Ok(sheet) => link.send_message(Msg::Saved(sheet)),
                    Err(err) => link.send_message(Msg::SaveFailed(err.user_message(SAVE_FAILED))),
                }
            });
            true
        }
        Msg::Saved(sheet) => {
            component.saving = false;
            component.success = Some(sheet.message.clone().unwrap_or_else(|| SAVE_OK.to_string()));
            match component.editor.as_mut() {
                Some(editor) => editor.replace(sheet),
                None => component.editor = Some(SheetEditor::new(sheet)),
            }
            true
        }
        Msg::SaveFailed(message) => {
            component.saving = false;
            component.error = Some(message);
            true
        }
    }
}
