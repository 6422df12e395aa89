// core/src/models/menu_item.rs

use super::{require_non_negative, require_text};
use crate::error::{JustoError, JustoResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  pub rating: f64,
  pub restaurant_id: Uuid,
  pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub rating: f64,
  pub restaurant_id: Uuid,
  #[serde(default = "default_available")]
  pub available: bool,
}

fn default_available() -> bool {
  true
}

impl NewMenuItem {
  pub fn validate(&self) -> JustoResult<()> {
    let mut errors = Vec::new();
    require_text(&mut errors, &self.name, "name");
    require_text(&mut errors, &self.description, "description");
    require_text(&mut errors, &self.category, "category");
    require_non_negative(&mut errors, self.price, "price");
    if errors.is_empty() {
      Ok(())
    } else {
      Err(JustoError::Validation(errors))
    }
  }

  pub fn into_item(self, id: Uuid) -> MenuItem {
    MenuItem {
      id,
      name: self.name,
      description: self.description,
      price: self.price,
      category: self.category,
      image: self.image,
      rating: self.rating,
      restaurant_id: self.restaurant_id,
      available: self.available,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub price: Option<f64>,
  pub category: Option<String>,
  pub image: Option<String>,
  pub rating: Option<f64>,
  pub restaurant_id: Option<Uuid>,
  pub available: Option<bool>,
}

impl MenuItemPatch {
  pub fn apply(self, item: &mut MenuItem) -> JustoResult<()> {
    let mut errors = Vec::new();
    if let Some(name) = &self.name {
      require_text(&mut errors, name, "name");
    }
    if let Some(price) = self.price {
      require_non_negative(&mut errors, price, "price");
    }
    if !errors.is_empty() {
      return Err(JustoError::Validation(errors));
    }

    if let Some(v) = self.name {
      item.name = v;
    }
    if let Some(v) = self.description {
      item.description = v;
    }
    if let Some(v) = self.price {
      item.price = v;
    }
    if let Some(v) = self.category {
      item.category = v;
    }
    if let Some(v) = self.image {
      item.image = Some(v);
    }
    if let Some(v) = self.rating {
      item.rating = v;
    }
    if let Some(v) = self.restaurant_id {
      item.restaurant_id = v;
    }
    if let Some(v) = self.available {
      item.available = v;
    }
    Ok(())
  }
}
