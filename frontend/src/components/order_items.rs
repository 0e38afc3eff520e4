use common::format::brl;
use common::model::order::Order;
use yew::prelude::*;

/// Line table shared by the partner and admin order views.
pub fn order_items(order: &Order) -> Html {
    html! {
        <table class="order-items">
            <thead>
                <tr>
                    <th />
                    <th>{ "Produto" }</th>
                    <th>{ "Qtd." }</th>
                    <th>{ "Preço" }</th>
                    <th>{ "Subtotal" }</th>
                </tr>
            </thead>
            <tbody>
                { for order.items.iter().map(|item| html! {
                    <tr>
                        <td><img class="thumb" src={item.image()} alt="" /></td>
                        <td>
                            { item.display_name() }
                            <span class="muted">{ format!(" · SKU {}", item.display_sku()) }</span>
                        </td>
                        <td>{ item.quantity }</td>
                        <td>{ brl(item.price) }</td>
                        <td>{ brl(item.subtotal()) }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

pub fn status_badge(order: &Order) -> Html {
    html! {
        <span class={classes!("badge", order.status.badge_class())}>{ order.status.label().to_string() }</span>
    }
}
