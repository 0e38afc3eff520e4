use common::model::formula::{Cell, CellKind};
use common::sheet::{column_letter, SheetEditor};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FormulaWorkbook;

pub fn view(component: &FormulaWorkbook, ctx: &Context<FormulaWorkbook>) -> Html {
    let link = ctx.link();
    let Some(editor) = component.editor.as_ref() else {
        return html! {
            <div class="card workbook">
                if component.loading {
                    <div class="spinner" />
                }
                if let Some(error) = &component.error {
                    <p class="alert alert-error">{ error }</p>
                    <button class="btn btn-outline" onclick={link.callback(|_| Msg::Load(None))}>{ "Tentar novamente" }</button>
                }
            </div>
        };
    };

    html! {
        <div class="card workbook">
            { build_toolbar(component, editor, link) }
            if let Some(error) = &component.error {
                <p class="alert alert-error">{ error }</p>
            }
            if let Some(success) = &component.success {
                <p class="alert alert-success">{ success }</p>
            }
            { build_grid(editor, link) }
        </div>
    }
}

fn build_toolbar(component: &FormulaWorkbook, editor: &SheetEditor, link: &Scope<FormulaWorkbook>) -> Html {
    let sheet = editor.sheet();
    let on_select = link.callback(|event: Event| {
        let select: web_sys::HtmlSelectElement = event.target_unchecked_into();
        Msg::SelectSheet(select.value())
    });

    html! {
        <div class="workbook-toolbar">
            <h2>{ "Planilha de formação de preços" }</h2>
            <select onchange={on_select} disabled={component.loading}>
                { for sheet.available_sheets.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == sheet.sheet_name}>{ name }</option>
                }) }
            </select>
            <button class="btn btn-outline" disabled={component.loading} onclick={link.callback(|_| Msg::Reload)}>
                { "Recarregar" }
            </button>
            <button class="btn btn-primary" disabled={!component.can_save()} onclick={link.callback(|_| Msg::Save)}>
                { if component.saving { "Salvando..." } else { "Salvar alterações" } }
            </button>
            if editor.has_drafts() {
                <span class="workbook-drafts">{ format!("{} alteração(ões) pendente(s)", editor.draft_count()) }</span>
            }
        </div>
    }
}

fn build_grid(editor: &SheetEditor, link: &Scope<FormulaWorkbook>) -> Html {
    let sheet = editor.sheet();
    if sheet.grid.is_empty() {
        return html! { <p class="muted">{ "Planilha vazia." }</p> };
    }
    let first_row = sheet.first_row_number();
    let first_column = sheet.range.map(|range| range.s.c as usize).unwrap_or(0);

    html! {
        <div class="workbook-grid">
            <table>
                <thead>
                    <tr>
                        <th />
                        { for (0..sheet.column_count()).map(|offset| html! {
                            <th>{ column_letter(first_column + offset) }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for sheet.grid.iter().enumerate().map(|(offset, row)| html! {
                        <tr>
                            <th>{ first_row + offset as u32 }</th>
                            { for row.iter().map(|cell| build_cell(editor, cell, link)) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn build_cell(editor: &SheetEditor, cell: &Cell, link: &Scope<FormulaWorkbook>) -> Html {
    if !cell.editable {
        let text = cell.display.clone().unwrap_or_else(|| cell.baseline());
        return html! { <td class="cell readonly" title={cell.address.clone()}>{ text }</td> };
    }

    let address = cell.address.clone();
    let on_input = link.callback(move |event: InputEvent| {
        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
        Msg::Edit { address: address.clone(), value: input.value() }
    });
    let class = classes!(
        "cell",
        "editable",
        (cell.kind == CellKind::Numeric).then_some("numeric"),
        editor.is_dirty(&cell.address).then_some("dirty"),
    );

    html! {
        <td class={class} title={cell.address.clone()}>
            <input type="text" value={editor.shown_value(cell)} oninput={on_input} />
        </td>
    }
}
