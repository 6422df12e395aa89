// core/src/seed.rs

//! Demo reference data. Ids are fixed so a restaurant login can name its
//! establishment across restarts.

use crate::models::{MenuItem, Restaurant};
use uuid::Uuid;

pub const ANDRES_CARNE_DE_RES: Uuid = Uuid::from_u128(0x0001);
pub const HARRYS_PIZZA: Uuid = Uuid::from_u128(0x0002);
pub const ROSTIPOLLO: Uuid = Uuid::from_u128(0x0003);
pub const FRISBY: Uuid = Uuid::from_u128(0x0004);
pub const CARREFOUR_FOOD_COURT: Uuid = Uuid::from_u128(0x0005);
pub const JUSTO_Y_BUENO: Uuid = Uuid::from_u128(0x0006);

fn restaurant(
  id: Uuid,
  name: &str,
  description: &str,
  rating: f64,
  delivery_time: u32,
  delivery_fee: f64,
  cuisine: &[&str],
) -> Restaurant {
  Restaurant {
    id,
    name: name.to_string(),
    description: description.to_string(),
    rating,
    delivery_time,
    delivery_fee,
    cuisine: cuisine.iter().map(|c| c.to_string()).collect(),
    is_open: true,
    image: None,
  }
}

pub fn restaurants() -> Vec<Restaurant> {
  vec![
    restaurant(
      ANDRES_CARNE_DE_RES,
      "Andrés Carne de Res",
      "Colombian grill house",
      4.8,
      45,
      3.5,
      &["Colombian", "Grill"],
    ),
    restaurant(HARRYS_PIZZA, "Harry's Pizza", "Wood-fired pizza", 4.5, 30, 2.5, &["Pizza", "Italian"]),
    restaurant(ROSTIPOLLO, "Rostipollo", "Rotisserie chicken", 4.3, 25, 2.0, &["Chicken"]),
    restaurant(FRISBY, "Frisby", "Fried chicken and sides", 4.4, 25, 2.0, &["Chicken", "Fast food"]),
    restaurant(
      CARREFOUR_FOOD_COURT,
      "Carrefour Food Court",
      "A bit of everything",
      4.0,
      35,
      1.5,
      &["Varied"],
    ),
    restaurant(
      JUSTO_Y_BUENO,
      "Justo & Bueno",
      "Neighbourhood market kitchen",
      4.2,
      20,
      1.0,
      &["Colombian", "Market"],
    ),
  ]
}

fn item(seq: u128, restaurant_id: Uuid, name: &str, price: f64, category: &str, available: bool) -> MenuItem {
  MenuItem {
    id: Uuid::from_u128(0x0100 + seq),
    name: name.to_string(),
    description: format!("{} from the house menu", name),
    price,
    category: category.to_string(),
    image: None,
    rating: 4.5,
    restaurant_id,
    available,
  }
}

pub fn menu_items() -> Vec<MenuItem> {
  vec![
    item(1, ANDRES_CARNE_DE_RES, "Carne Asada Especial", 18.9, "Mains", true),
    item(2, ANDRES_CARNE_DE_RES, "Costillas BBQ", 16.5, "Mains", true),
    item(3, ANDRES_CARNE_DE_RES, "Arepa con Queso", 4.5, "Sides", true),
    item(4, HARRYS_PIZZA, "Pizza Hawaiana", 12.0, "Pizza", false),
    item(5, HARRYS_PIZZA, "Pizza Margarita", 10.0, "Pizza", true),
    item(6, ROSTIPOLLO, "Medio Pollo Asado", 9.5, "Mains", true),
    item(7, FRISBY, "Combo Frisby", 8.75, "Combos", true),
    item(8, CARREFOUR_FOOD_COURT, "Wrap de Pollo", 6.25, "Wraps", true),
    item(9, JUSTO_Y_BUENO, "Bandeja Paisa", 11.0, "Mains", true),
    item(10, JUSTO_Y_BUENO, "Limonada de Coco", 3.0, "Drinks", true),
  ]
}
