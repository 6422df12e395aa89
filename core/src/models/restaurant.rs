// core/src/models/restaurant.rs

use super::{require_non_negative, require_text};
use crate::error::{JustoError, JustoResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
  pub id: Uuid,
  pub name: String,
  pub description: String,
  pub rating: f64,
  /// Minutes from confirmation to the door.
  pub delivery_time: u32,
  pub delivery_fee: f64,
  #[serde(default)]
  pub cuisine: Vec<String>,
  pub is_open: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

impl Restaurant {
  /// Case-insensitive substring match on the name or any cuisine tag.
  pub fn matches(&self, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
      return true;
    }
    self.name.to_lowercase().contains(&term) || self.cuisine.iter().any(|c| c.to_lowercase().contains(&term))
  }
}

/// Body of a restaurant create request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurant {
  pub name: String,
  pub description: String,
  #[serde(default)]
  pub rating: f64,
  pub delivery_time: u32,
  pub delivery_fee: f64,
  #[serde(default)]
  pub cuisine: Vec<String>,
  #[serde(default = "default_open")]
  pub is_open: bool,
  #[serde(default)]
  pub image: Option<String>,
}

fn default_open() -> bool {
  true
}

impl NewRestaurant {
  pub fn validate(&self) -> JustoResult<()> {
    let mut errors = Vec::new();
    require_text(&mut errors, &self.name, "name");
    require_text(&mut errors, &self.description, "description");
    require_non_negative(&mut errors, self.delivery_fee, "deliveryFee");
    require_non_negative(&mut errors, self.rating, "rating");
    if errors.is_empty() {
      Ok(())
    } else {
      Err(JustoError::Validation(errors))
    }
  }

  pub fn into_restaurant(self, id: Uuid) -> Restaurant {
    Restaurant {
      id,
      name: self.name,
      description: self.description,
      rating: self.rating,
      delivery_time: self.delivery_time,
      delivery_fee: self.delivery_fee,
      cuisine: self.cuisine,
      is_open: self.is_open,
      image: self.image,
    }
  }
}

/// Partial update; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPatch {
  pub name: Option<String>,
  pub description: Option<String>,
  pub rating: Option<f64>,
  pub delivery_time: Option<u32>,
  pub delivery_fee: Option<f64>,
  pub cuisine: Option<Vec<String>>,
  pub is_open: Option<bool>,
  pub image: Option<String>,
}

impl RestaurantPatch {
  pub fn apply(self, restaurant: &mut Restaurant) -> JustoResult<()> {
    let mut errors = Vec::new();
    if let Some(name) = &self.name {
      require_text(&mut errors, name, "name");
    }
    if let Some(fee) = self.delivery_fee {
      require_non_negative(&mut errors, fee, "deliveryFee");
    }
    if !errors.is_empty() {
      return Err(JustoError::Validation(errors));
    }

    if let Some(v) = self.name {
      restaurant.name = v;
    }
    if let Some(v) = self.description {
      restaurant.description = v;
    }
    if let Some(v) = self.rating {
      restaurant.rating = v;
    }
    if let Some(v) = self.delivery_time {
      restaurant.delivery_time = v;
    }
    if let Some(v) = self.delivery_fee {
      restaurant.delivery_fee = v;
    }
    if let Some(v) = self.cuisine {
      restaurant.cuisine = v;
    }
    if let Some(v) = self.is_open {
      restaurant.is_open = v;
    }
    if let Some(v) = self.image {
      restaurant.image = Some(v);
    }
    Ok(())
  }
}
