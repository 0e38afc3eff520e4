//! Editable view of the pricing spreadsheet kept by the backend.
//!
//! The component is split the same way as the other larger widgets:
//! - `state`: the component struct, wrapping a [`common::sheet::SheetEditor`].
//! - `messages`: the `Msg` enum.
//! - `update`: fetch / edit / save transitions.
//! - `view`: the sheet picker, the grid and the action bar.
//!
//! The default sheet is fetched on first render.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::FormulaWorkbook;

impl Component for FormulaWorkbook {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        FormulaWorkbook::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load(None));
        }
    }
}
