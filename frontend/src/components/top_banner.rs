//! Banner carousel for the catalog and home pages.
//!
//! Starts from the cached list so it paints immediately, then swaps in the
//! public listing once it arrives. A failed fetch keeps the cached banners.

use common::model::promo::{carousel, Promo};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::storage::client_store;

pub enum Msg {
    Loaded(Vec<Promo>),
    Previous,
    Next,
    Select(usize),
}

pub struct TopBanner {
    promos: Vec<Promo>,
    index: usize,
}

impl Component for TopBanner {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            if let Ok(promos) = api::promos::public().await {
                link.send_message(Msg::Loaded(carousel(promos)));
            }
        });
        Self {
            promos: client_store().banners().cached(),
            index: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let count = self.promos.len();
        match msg {
            Msg::Loaded(promos) => {
                client_store().banners().replace(&promos);
                self.promos = promos;
                self.index = 0;
            }
            Msg::Previous if count > 0 => self.index = (self.index + count - 1) % count,
            Msg::Next if count > 0 => self.index = (self.index + 1) % count,
            Msg::Select(index) if index < count => self.index = index,
            _ => return false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(item) = self.promos.get(self.index) else {
            return html! {};
        };
        let link = ctx.link();
        let title = if item.title.is_empty() { "Banner".to_string() } else { item.title.clone() };

        html! {
            <div class="top-banner">
                <a href={item.link().to_string()} class="top-banner-link">
                    <picture>
                        if !item.mobile_src().is_empty() {
                            <source media="(max-width: 767px)" srcset={item.mobile_src().to_string()} />
                        }
                        <img src={item.desktop_src().to_string()} alt={title} />
                    </picture>
                </a>
                if self.promos.len() > 1 {
                    <button class="top-banner-prev" aria-label="Anterior" onclick={link.callback(|_| Msg::Previous)}>{ "‹" }</button>
                    <button class="top-banner-next" aria-label="Próximo" onclick={link.callback(|_| Msg::Next)}>{ "›" }</button>
                    <div class="top-banner-dots">
                        { for (0..self.promos.len()).map(|index| {
                            let class = if index == self.index { "dot active" } else { "dot" };
                            html! {
                                <button
                                    class={class}
                                    aria-label={format!("Ir para banner {}", index + 1)}
                                    onclick={link.callback(move |_| Msg::Select(index))}
                                />
                            }
                        }) }
                    </div>
                }
            </div>
        }
    }
}
