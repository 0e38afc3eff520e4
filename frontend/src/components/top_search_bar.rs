use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopSearchBarProps {
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub with_logo: bool,
    #[prop_or_default]
    pub hide_search: bool,
}

/// Green header strip with the catalog search box.
pub struct TopSearchBar;

impl Component for TopSearchBar {
    type Message = ();
    type Properties = TopSearchBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_submit = {
            let submit = props.on_submit.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                submit.emit(());
            })
        };
        let on_input = props.on_change.reform(|event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            input.value()
        });

        html! {
            <div class="top-search-bar">
                <form onsubmit={on_submit}>
                    if props.with_logo {
                        <img class="top-search-logo" src="/images/logo.png" alt="Recicla Ebenezer" />
                    }
                    if !props.hide_search {
                        <div class="top-search-field">
                            <input
                                type="text"
                                placeholder="Buscar no catálogo"
                                value={props.value.clone()}
                                oninput={on_input}
                            />
                            <button type="submit" aria-label="Buscar">{ "🔍" }</button>
                        </div>
                    }
                </form>
            </div>
        }
    }
}
