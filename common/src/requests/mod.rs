//! Request and response bodies of the REST endpoints the client calls.
//!
//! Field names follow the backend's camelCase convention. Optional fields
//! are left out of the JSON when empty so partial updates do not clobber
//! server-side values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::format::{digits_only, parse_decimal};
use crate::model::formula::CellUpdate;
use crate::model::order::OrderStatus;
use crate::model::product::{value_text, Product};
use crate::model::user::{Role, User};

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn text(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnstile_token: Option<String>,
}

/// Body of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub phone: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Digits only; the mask is a display concern.
    pub phone: String,
    pub avatar_url: String,
}

impl ProfileUpdate {
    pub fn new(name: &str, email: &str, company: &str, masked_phone: &str, avatar_url: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            phone: digits_only(masked_phone),
            avatar_url: avatar_url.to_string(),
        }
    }
}

/// Admin edit of a user. A blank password is left out so the stored one
/// is kept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub company: String,
    pub phone: String,
    pub role: Role,
}

impl UserUpdate {
    pub fn new(name: &str, email: &str, password: &str, company: &str, phone: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: Some(password.to_string()).filter(|p| !p.is_empty()),
            company: company.to_string(),
            phone: phone.to_string(),
            role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
    pub admin_note: String,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    #[serde(default)]
    pub unread_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(alias = "imageUrl")]
    pub url: String,
}

/// Catalog filters. Only non-empty fields become query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
}

impl ProductQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("search", &self.search),
            ("category", &self.category),
            ("minPrice", &self.min_price),
            ("maxPrice", &self.max_price),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| (key, value.trim().to_string()))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }
}

/// Line of a new order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product: String,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
    pub brand: String,
    pub sku: String,
}

/// Body of `POST /orders`, built from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
    pub total_amount: f64,
    pub customer_note: String,
}

/// Path under which an uploaded picture is stored: absolute URLs lose
/// their origin and relative ones gain a leading slash.
pub fn upload_path(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) {
        return match rest.find('/') {
            Some(slash) => rest[slash..].to_string(),
            None => "/".to_string(),
        };
    }
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub sku: String,
    pub images: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub purchase_panel_style: String,
}

/// Raw text of the admin product form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub sku: String,
    pub images: Vec<String>,
    pub specifications: Vec<(String, String)>,
    pub purchase_panel_style: String,
}

impl ProductForm {
    /// Form prefilled from a stored product, for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            price: if product.price > 0.0 { format!("{:.2}", product.price) } else { String::new() },
            stock: product.stock.to_string(),
            category: product.category.clone(),
            sku: product.sku.clone(),
            images: product.images.clone(),
            specifications: product
                .specifications
                .iter()
                .map(|(key, value)| (key.clone(), value_text(value)))
                .collect(),
            purchase_panel_style: product.purchase_panel_style.clone().unwrap_or_else(|| "highlight".to_string()),
        }
    }

    pub fn spec_value(&self, key: &str) -> &str {
        self.specifications
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    /// Sets a named specification, appending it when missing.
    pub fn set_spec(&mut self, key: &str, value: String) {
        match self.specifications.iter_mut().find(|(name, _)| name == key) {
            Some(entry) => entry.1 = value,
            None => self.specifications.push((key.to_string(), value)),
        }
    }

    /// Appends a free-form specification. Both halves must be non-blank.
    pub fn push_spec(&mut self, key: &str, value: &str) -> bool {
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return false;
        }
        self.specifications.push((key.to_string(), value.to_string()));
        true
    }

    /// Moves the picture at `index` to the front of the gallery.
    pub fn set_cover(&mut self, index: usize) {
        if index < self.images.len() {
            let image = self.images.remove(index);
            self.images.insert(0, image);
        }
    }

    pub fn to_payload(&self) -> ProductPayload {
        let specifications = self
            .specifications
            .iter()
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        let style = self.purchase_panel_style.trim();
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            brand: self.brand.clone(),
            price: parse_decimal(&self.price),
            stock: self.stock.trim().parse().unwrap_or(0),
            category: self.category.clone(),
            sku: self.sku.clone(),
            images: self.images.clone(),
            specifications,
            purchase_panel_style: if style.is_empty() { "highlight".to_string() } else { style.to_string() },
        }
    }
}

/// Body of `POST /promos` and, partially, of `PUT /promos/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_desktop_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_mobile_url: Option<String>,
}

/// The "new banner" form of the admin promos page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromoDraft {
    pub title: String,
    pub subtitle: String,
    pub link_url: String,
    pub order: String,
    pub active: bool,
    pub image_url: String,
    pub image_desktop_urls: Vec<String>,
    pub image_mobile_url: String,
}

impl PromoDraft {
    pub fn empty() -> Self {
        Self { active: true, ..Self::default() }
    }

    /// Banners to create from this draft: one per desktop picture when any
    /// were uploaded, otherwise a single mobile or legacy banner. `None`
    /// when no picture was uploaded at all.
    pub fn to_payloads(&self) -> Option<Vec<PromoPayload>> {
        let common = PromoPayload {
            title: Some(self.title.clone()),
            subtitle: Some(self.subtitle.clone()),
            link_url: Some(self.link_url.clone()),
            order: Some(self.order.trim().parse().unwrap_or(0)),
            active: Some(self.active),
            ..PromoPayload::default()
        };
        let desktop: Vec<&String> = self.image_desktop_urls.iter().filter(|url| !url.is_empty()).collect();
        if !desktop.is_empty() {
            return Some(
                desktop
                    .into_iter()
                    .map(|url| PromoPayload { image_desktop_url: Some(url.clone()), ..common.clone() })
                    .collect(),
            );
        }
        if !self.image_mobile_url.is_empty() {
            return Some(vec![PromoPayload { image_mobile_url: Some(self.image_mobile_url.clone()), ..common }]);
        }
        if !self.image_url.is_empty() {
            return Some(vec![PromoPayload { image_url: Some(self.image_url.clone()), ..common }]);
        }
        None
    }
}

/// Body of `PUT /formulas`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetUpdateRequest {
    pub sheet_name: String,
    pub updates: Vec<CellUpdate>,
}

/// Body of `PUT /settings/metal-pricing` built from the dashboard inputs.
pub fn metal_prices_from_inputs(platinum: &str, palladium: &str, rhodium: &str) -> crate::model::settings::MetalPrices {
    crate::model::settings::MetalPrices {
        platinum: parse_decimal(platinum),
        palladium: parse_decimal(palladium),
        rhodium: parse_decimal(rhodium),
    }
}

/// Arbitrary JSON object, for endpoints whose answer the client ignores.
pub type Ignored = Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_query_skips_blank_filters() {
        let query = ProductQuery {
            search: " motor ".into(),
            max_price: "100".into(),
            ..ProductQuery::default()
        };
        assert_eq!(
            query.to_pairs(),
            vec![("search", "motor".to_string()), ("maxPrice", "100".to_string())]
        );
        assert!(ProductQuery::default().is_empty());
    }

    #[test]
    fn user_update_omits_blank_password() {
        let update = UserUpdate::new("Ana", "a@x.com", "", "ACME", "11999990000", Role::Partner);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "partner");
    }

    #[test]
    fn product_form_parses_locale_numbers_and_drops_blank_spec_keys() {
        let form = ProductForm {
            name: "Motor".into(),
            price: "1.234,56".into(),
            stock: "7".into(),
            specifications: vec![(" Peso ".into(), " 3kg ".into()), ("  ".into(), "x".into())],
            ..ProductForm::default()
        };
        let payload = form.to_payload();
        assert_eq!(payload.price, 1234.56);
        assert_eq!(payload.stock, 7);
        assert_eq!(payload.specifications.len(), 1);
        assert_eq!(payload.specifications["Peso"], "3kg");
        assert_eq!(payload.purchase_panel_style, "highlight");
    }

    #[test]
    fn product_form_edits_named_specs_and_cover() {
        let mut form = ProductForm {
            images: vec!["/a.jpg".into(), "/b.jpg".into(), "/c.jpg".into()],
            ..ProductForm::default()
        };
        form.set_spec("Peso", "1,250 kg".into());
        form.set_spec("Peso", "2 kg".into());
        assert_eq!(form.spec_value("Peso"), "2 kg");
        assert_eq!(form.spec_value("Modelo"), "");
        assert!(!form.push_spec("Cor", "  "));
        assert!(form.push_spec(" Cor ", "azul"));
        assert_eq!(form.specifications.len(), 2);

        form.set_cover(2);
        assert_eq!(form.images, vec!["/c.jpg", "/a.jpg", "/b.jpg"]);
        form.set_cover(9);
        assert_eq!(form.images[0], "/c.jpg");
    }

    #[test]
    fn product_form_prefills_from_product() {
        let product: Product = serde_json::from_str(
            r#"{"_id":"p1","name":"Sonda","price":210,"stock":3,"specifications":{"Peso":1.5}}"#,
        )
        .unwrap();
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "210.00");
        assert_eq!(form.stock, "3");
        assert_eq!(form.spec_value("Peso"), "1.5");
        assert_eq!(form.purchase_panel_style, "highlight");
    }

    #[test]
    fn upload_path_strips_origin() {
        assert_eq!(upload_path("http://localhost:5000/uploads/a.jpg"), "/uploads/a.jpg");
        assert_eq!(upload_path("uploads/a.jpg"), "/uploads/a.jpg");
        assert_eq!(upload_path("/uploads/a.jpg"), "/uploads/a.jpg");
    }

    #[test]
    fn promo_draft_creates_one_banner_per_desktop_image() {
        let draft = PromoDraft {
            title: "Promo".into(),
            order: "3".into(),
            image_desktop_urls: vec!["/u/1.jpg".into(), "/u/2.jpg".into()],
            image_mobile_url: "/u/m.jpg".into(),
            ..PromoDraft::empty()
        };
        let payloads = draft.to_payloads().unwrap();
        assert_eq!(payloads.len(), 2);
        assert_eq!(payloads[1].image_desktop_url.as_deref(), Some("/u/2.jpg"));
        assert_eq!(payloads[0].order, Some(3));
        assert_eq!(payloads[0].image_mobile_url, None);
    }

    #[test]
    fn promo_draft_requires_an_image() {
        assert_eq!(PromoDraft::empty().to_payloads(), None);
        let mobile = PromoDraft { image_mobile_url: "/m.jpg".into(), ..PromoDraft::empty() };
        let payloads = mobile.to_payloads().unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].image_mobile_url.as_deref(), Some("/m.jpg"));
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Estoque insuficiente","error":"x"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Estoque insuficiente"));
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"SKU duplicado"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("SKU duplicado"));
        assert_eq!(ApiErrorBody::default().text(), None);
    }
}
