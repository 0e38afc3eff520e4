use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Image shown when a product has no picture of its own and no category
/// fallback applies.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Category pictures used before falling back to the placeholder.
const CATEGORY_FALLBACKS: &[(&str, &str)] = &[
    ("Motores", "/images/slide1.jpg"),
    ("Correntes", "/images/slide2.jpg"),
    ("Rolamentos", "/images/slide3.jpg"),
    ("Polias", "/images/slide4.jpg"),
    ("Correias", "/images/slide2.jpg"),
    ("Acoplamentos", "/images/slide1.jpg"),
];

/// A catalog product.
///
/// Cart lines and favorites keep a shallow copy of this record in local
/// storage, so it must round-trip through JSON without losing the fields
/// the views read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "super::null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "super::lenient_int")]
    pub stock: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub specifications: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_panel_style: Option<String>,
}

impl Product {
    /// Picture to show for this product: the first gallery image, then the
    /// legacy single image, then a category picture, then the placeholder.
    pub fn primary_image(&self) -> String {
        if let Some(first) = self.images.iter().find(|src| !src.is_empty()) {
            return first.clone();
        }
        if let Some(image) = self.image.as_ref().filter(|src| !src.is_empty()) {
            return image.clone();
        }
        let category = self.category.trim();
        CATEGORY_FALLBACKS
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, src)| src.to_string())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
    }

    /// Gallery shown on the detail page. Never empty.
    pub fn gallery(&self) -> Vec<String> {
        let images: Vec<String> = self
            .images
            .iter()
            .filter(|src| !src.is_empty())
            .cloned()
            .collect();
        if images.is_empty() {
            vec![self.primary_image()]
        } else {
            images
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Specifications rendered as display strings, in key order.
    pub fn specification_rows(&self) -> Vec<(String, String)> {
        self.specifications
            .iter()
            .map(|(key, value)| (key.clone(), value_text(value)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

/// Text of a loosely-typed JSON scalar, the way it would be shown in a cell.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(images: Vec<&str>, image: Option<&str>, category: &str) -> Product {
        Product {
            id: "p1".into(),
            images: images.into_iter().map(String::from).collect(),
            image: image.map(String::from),
            category: category.into(),
            ..Product::default()
        }
    }

    #[test]
    fn primary_image_prefers_gallery() {
        let p = product(vec!["/a.jpg", "/b.jpg"], Some("/legacy.jpg"), "Motores");
        assert_eq!(p.primary_image(), "/a.jpg");
    }

    #[test]
    fn primary_image_falls_back_to_legacy_then_category() {
        assert_eq!(
            product(vec![], Some("/legacy.jpg"), "Motores").primary_image(),
            "/legacy.jpg"
        );
        assert_eq!(
            product(vec![], None, " Polias ").primary_image(),
            "/images/slide4.jpg"
        );
        assert_eq!(
            product(vec![], None, "Sucata").primary_image(),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn specification_rows_skip_empty_values() {
        let mut p = Product::default();
        p.specifications
            .insert("Peso".into(), Value::String("2 kg".into()));
        p.specifications.insert("Voltagem".into(), Value::from(220));
        p.specifications.insert("Cor".into(), Value::Null);
        assert_eq!(
            p.specification_rows(),
            vec![
                ("Peso".to_string(), "2 kg".to_string()),
                ("Voltagem".to_string(), "220".to_string()),
            ]
        );
    }

    #[test]
    fn stored_copy_round_trips() {
        let json = r#"{"_id":"p9","name":"Motor WEG","price":149.9,"images":["/m.jpg"]}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        let back: Product = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(p, back);
        assert_eq!(back.id, "p9");
    }

    #[test]
    fn listing_survives_null_fields_and_fractional_stock() {
        let json = r#"[
            {"_id":"p1","name":"Sonda","brand":"Bosch","price":10,"stock":3},
            {"_id":"p2","name":"Catalisador","brand":null,"description":null,"category":null,
             "sku":null,"images":null,"specifications":null,"price":null,"stock":2.5}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].brand, "Bosch");
        assert_eq!(products[0].stock, 3);

        let loose = &products[1];
        assert_eq!(loose.brand, "");
        assert_eq!(loose.sku, "");
        assert!(loose.images.is_empty());
        assert!(loose.specifications.is_empty());
        assert_eq!(loose.price, 0.0);
        assert_eq!(loose.stock, 2);
        assert_eq!(loose.primary_image(), PLACEHOLDER_IMAGE);
    }
}
