// core/src/marketplace.rs

//! The demo storefront as one owned object: catalog, ledger and session
//! together, mutated synchronously by whoever owns it.

use crate::catalog::Catalog;
use crate::checkout::{Cart, CheckoutRequest};
use crate::dashboard::{Dashboard, Snapshot};
use crate::error::{JustoError, JustoResult};
use crate::ledger::{Ledger, OrderFilter};
use crate::models::{Address, MenuItem, Order, OrderStatus, PaymentMethod, Role, User};
use crate::session::Session;
use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct Marketplace {
  catalog: Catalog,
  ledger: Ledger,
  session: Session,
}

impl Marketplace {
  pub fn new(catalog: Catalog) -> Self {
    Self {
      catalog,
      ledger: Ledger::new(),
      session: Session::new(),
    }
  }

  /// Marketplace over the seeded demo catalog.
  pub fn demo() -> Self {
    Self::new(Catalog::seeded())
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn ledger(&self) -> &Ledger {
    &self.ledger
  }

  pub fn login(&mut self, email: &str, role: Role, restaurant_id: Option<Uuid>) -> JustoResult<User> {
    if let Some(id) = restaurant_id {
      self.catalog.get_restaurant(id)?;
    }
    self.session.login(email, role, restaurant_id).cloned()
  }

  pub fn logout(&mut self) -> Option<User> {
    self.session.logout()
  }

  pub fn current_user(&self) -> Option<&User> {
    self.session.current()
  }

  /// Places an order for the signed-in user.
  pub fn place_order(&mut self, cart: Cart, address: Address, payment_method: PaymentMethod) -> JustoResult<Order> {
    let customer_id = self.session.require_user()?.id;
    let restaurant = self.catalog.get_restaurant(cart.restaurant_id())?;
    let request = CheckoutRequest {
      customer_id,
      cart,
      address,
      payment_method,
    };
    self.ledger.create_order(restaurant, &request, Utc::now())
  }

  /// Orders of the signed-in customer, newest first.
  pub fn my_orders(&self) -> JustoResult<Vec<&Order>> {
    let user = self.session.require_user()?;
    Ok(self.ledger.list(OrderFilter::Customer(user.id)))
  }

  pub fn update_status(&mut self, order_id: Uuid, status: OrderStatus) -> JustoResult<Order> {
    self.session.require_user()?;
    self.ledger.set_status(order_id, status)
  }

  pub fn rate_order(&mut self, order_id: Uuid, rating: u8, feedback: Option<String>) -> JustoResult<Order> {
    self.session.require_user()?;
    self.ledger.rate(order_id, rating, feedback)
  }

  pub fn set_prep_time(&mut self, order_id: Uuid, minutes: u32) -> JustoResult<Order> {
    self.session.require_user()?;
    self.ledger.set_prep_time(order_id, minutes)
  }

  /// Inventory switch for restaurant staff and admins.
  pub fn toggle_availability(&mut self, item_id: Uuid) -> JustoResult<MenuItem> {
    let user = self.session.require_user()?;
    let item = self.catalog.get_menu_item(item_id)?;
    let allowed = user.role == Role::Admin || user.affiliation() == Some(item.restaurant_id);
    if !allowed {
      return Err(JustoError::Unauthorized(
        "only the restaurant's staff can change its inventory".to_string(),
      ));
    }
    self.catalog.toggle_availability(item_id)
  }

  /// Dashboard for the signed-in user's role.
  pub fn dashboard(&self) -> JustoResult<Dashboard> {
    let user = self.session.require_user()?;
    Dashboard::for_user(
      user,
      Snapshot {
        restaurants: self.catalog.list_restaurants(),
        menu_items: self.catalog.menu_items(),
        orders: self.ledger.orders(),
      },
    )
  }
}
