use yew::prelude::*;

/// Modal yes/no prompt placed in front of destructive actions.
#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub message: AttrValue,
    #[prop_or(AttrValue::from("Confirmar"))]
    pub confirm_label: AttrValue,
    #[prop_or(true)]
    pub danger: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

pub struct ConfirmDialog;

impl Component for ConfirmDialog {
    type Message = ();
    type Properties = ConfirmDialogProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
        let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());
        let confirm_class = if props.danger { "btn btn-danger" } else { "btn btn-primary" };

        html! {
            <div class="dialog-backdrop">
                <div class="dialog" role="dialog">
                    <h3>{ &props.title }</h3>
                    if !props.message.is_empty() {
                        <p>{ &props.message }</p>
                    }
                    <div class="dialog-actions">
                        <button class="btn btn-outline" onclick={on_cancel}>{ "Cancelar" }</button>
                        <button class={confirm_class} onclick={on_confirm}>{ &props.confirm_label }</button>
                    </div>
                </div>
            </div>
        }
    }
}
