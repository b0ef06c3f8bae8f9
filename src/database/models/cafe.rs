use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// One row of the `cafe` table. Serializes to the flat CafeJSON wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// A cafe that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Raw field map accepted by `POST /add`. Field names are the public form names,
/// not the column names (`loc` -> `location`, `sockets` -> `has_sockets`, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("NOT NULL constraint failed: cafe.{0}")]
pub struct MissingField(pub &'static str);

/// Any present, non-empty value is true. `"false"` and `"0"` are true as well;
/// existing clients depend on it.
pub fn form_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl TryFrom<CafeForm> for NewCafe {
    type Error = MissingField;

    fn try_from(form: CafeForm) -> Result<Self, Self::Error> {
        let has_sockets = form_flag(form.sockets.as_deref());
        let has_toilet = form_flag(form.toilet.as_deref());
        let has_wifi = form_flag(form.wifi.as_deref());
        let can_take_calls = form_flag(form.calls.as_deref());

        Ok(NewCafe {
            name: form.name.ok_or(MissingField("name"))?,
            map_url: form.map_url.ok_or(MissingField("map_url"))?,
            img_url: form.img_url.ok_or(MissingField("img_url"))?,
            location: form.loc.ok_or(MissingField("location"))?,
            seats: form.seats.ok_or(MissingField("seats"))?,
            has_toilet,
            has_wifi,
            has_sockets,
            can_take_calls,
            coffee_price: form.coffee_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> CafeForm {
        CafeForm {
            name: Some("Science Gallery London".to_string()),
            map_url: Some("https://g.page/scigallerylon".to_string()),
            img_url: Some("https://example.com/sgl.jpg".to_string()),
            loc: Some("London Bridge".to_string()),
            sockets: Some("1".to_string()),
            toilet: Some("1".to_string()),
            wifi: None,
            calls: Some(String::new()),
            seats: Some("50+".to_string()),
            coffee_price: Some("£2.40".to_string()),
        }
    }

    #[test]
    fn form_flag_is_loose() {
        assert!(!form_flag(None));
        assert!(!form_flag(Some("")));
        assert!(form_flag(Some("true")));
        assert!(form_flag(Some("false")));
        assert!(form_flag(Some("0")));
    }

    #[test]
    fn form_maps_to_columns() {
        let cafe = NewCafe::try_from(full_form()).unwrap();
        assert_eq!(cafe.location, "London Bridge");
        assert!(cafe.has_sockets);
        assert!(cafe.has_toilet);
        assert!(!cafe.has_wifi);
        assert!(!cafe.can_take_calls);
        assert_eq!(cafe.coffee_price.as_deref(), Some("£2.40"));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let form = CafeForm { loc: None, ..full_form() };
        let err = NewCafe::try_from(form).unwrap_err();
        assert_eq!(err, MissingField("location"));
        assert_eq!(err.to_string(), "NOT NULL constraint failed: cafe.location");
    }

    #[test]
    fn coffee_price_is_optional() {
        let form = CafeForm { coffee_price: None, ..full_form() };
        assert_eq!(NewCafe::try_from(form).unwrap().coffee_price, None);
    }

    #[test]
    fn serializes_flat_with_null_price() {
        let cafe = Cafe {
            id: 7,
            name: "Mare Street Market".to_string(),
            map_url: "https://goo.gl/maps/1".to_string(),
            img_url: "https://example.com/msm.jpg".to_string(),
            location: "Hackney".to_string(),
            seats: "50+".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: false,
            coffee_price: None,
        };
        let value = serde_json::to_value(&cafe).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["has_toilet"], true);
        assert_eq!(value["can_take_calls"], false);
        assert!(value["coffee_price"].is_null());
        assert_eq!(value.as_object().unwrap().len(), 11);
    }
}
