use serde::{Deserialize, Serialize};

/// A promotional banner. Desktop and mobile pictures are configured
/// separately; `image_url` is the older single-picture field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Promo {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub link_url: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub order: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_desktop_url: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_mobile_url: String,
}

impl Promo {
    /// Fills the desktop and mobile pictures from the legacy field when they
    /// are missing.
    pub fn normalized(mut self) -> Self {
        if self.image_desktop_url.is_empty() {
            self.image_desktop_url = self.image_url.clone();
        }
        if self.image_mobile_url.is_empty() {
            self.image_mobile_url = self.image_url.clone();
        }
        self
    }

    pub fn desktop_src(&self) -> &str {
        if self.image_desktop_url.is_empty() {
            &self.image_url
        } else {
            &self.image_desktop_url
        }
    }

    pub fn mobile_src(&self) -> &str {
        if self.image_mobile_url.is_empty() {
            &self.image_url
        } else {
            &self.image_mobile_url
        }
    }

    pub fn link(&self) -> &str {
        if self.link_url.is_empty() { "#" } else { &self.link_url }
    }
}

/// Active banners from the public listing, normalized and ordered for the
/// carousel.
pub fn carousel(promos: Vec<Promo>) -> Vec<Promo> {
    let mut active: Vec<Promo> = promos
        .into_iter()
        .filter(|promo| promo.active)
        .map(Promo::normalized)
        .collect();
    active.sort_by_key(|promo| promo.order);
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_keeps_active_and_fills_legacy_images() {
        let promos = vec![
            Promo { id: "b".into(), order: 2, active: true, image_url: "/old.jpg".into(), ..Promo::default() },
            Promo { id: "a".into(), order: 1, active: true, image_desktop_url: "/d.jpg".into(), ..Promo::default() },
            Promo { id: "c".into(), order: 0, active: false, image_url: "/x.jpg".into(), ..Promo::default() },
        ];
        let shown = carousel(promos);
        assert_eq!(shown.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(shown[1].image_desktop_url, "/old.jpg");
        assert_eq!(shown[1].image_mobile_url, "/old.jpg");
        assert_eq!(shown[0].mobile_src(), "");
        assert_eq!(shown[0].link(), "#");
    }

    #[test]
    fn null_urls_read_as_empty() {
        let promos: Vec<Promo> = serde_json::from_str(
            r#"[{"_id":"a","title":null,"subtitle":null,"linkUrl":null,"order":null,"active":true,
                 "imageUrl":null,"imageDesktopUrl":"/d.jpg","imageMobileUrl":null}]"#,
        )
        .unwrap();
        assert_eq!(promos[0].title, "");
        assert_eq!(promos[0].order, 0);
        assert_eq!(promos[0].image_desktop_url, "/d.jpg");
        assert_eq!(promos[0].image_mobile_url, "");
    }
}
