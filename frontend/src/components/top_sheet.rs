//! Sliding sheet used for the admin edit forms.
//!
//! The sheet is always mounted; `open_top_sheet` / `close_top_sheet` only
//! toggle its `show` class, so form state survives between openings.

use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-card">
                    if !props.title.is_empty() {
                        <h2 class="top-sheet-title">{ &props.title }</h2>
                    }
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle(top_sheet_ref, false);
}

fn toggle(top_sheet_ref: &NodeRef, show: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let classes = top_sheet.class_list();
        let _ = if show { classes.add_1("show") } else { classes.remove_1("show") };
    }
}
