// server/src/flows/checkout_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::CheckoutCtxData;
use crate::repositories::{menu, restaurants};
use chrono::Utc;
use justo::checkout::{self, CheckoutRequest};
use justo::{Flow, FlowControl, FlowRegistry, JustoError, Shared};
use tracing::{event, info, Level};

/// Registers the checkout flow: resolve the restaurant, price the cart against
/// its current menu, then record the order in the ledger.
pub fn register_checkout_flow(registry: &FlowRegistry<AppError>) {
  let mut flow = Flow::<CheckoutCtxData, AppError>::new(
    "checkout",
    &[
      ("load_restaurant", false, None),
      ("build_cart", false, None),
      ("record_order", false, None),
    ],
  );

  flow.on("load_restaurant", |ctx: Shared<CheckoutCtxData>| async move {
    let (restaurant_id, store) = {
      let guard = ctx.read();
      (guard.restaurant_id, guard.app_state.store.clone())
    };
    let restaurant = restaurants::get(store.as_ref(), restaurant_id).await?;
    event!(Level::DEBUG, restaurant = %restaurant.name, "Restaurant resolved for checkout.");
    ctx.write().restaurant = Some(restaurant);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow.on("build_cart", |ctx: Shared<CheckoutCtxData>| async move {
    let (restaurant_id, lines, address, store) = {
      let guard = ctx.read();
      (
        guard.restaurant_id,
        guard.lines.clone(),
        guard.address.clone(),
        guard.app_state.store.clone(),
      )
    };
    let menu_items = menu::list_for_restaurant(store.as_ref(), restaurant_id).await?;
    let cart = match checkout::build_cart(restaurant_id, &lines, &menu_items) {
      Ok(cart) => cart,
      // Address problems are reported alongside bad cart lines.
      Err(JustoError::Validation(cart_errors)) => {
        let mut errors = checkout::validate_address(&address);
        errors.extend(cart_errors);
        return Err(AppError::Validation(errors));
      }
      Err(other) => return Err(other.into()),
    };
    event!(Level::DEBUG, lines = cart.lines().len(), subtotal = cart.subtotal(), "Cart priced.");
    ctx.write().cart = Some(cart);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  flow.on("record_order", |ctx: Shared<CheckoutCtxData>| async move {
    let order = {
      let guard = ctx.read();
      let restaurant = guard
        .restaurant
        .as_ref()
        .ok_or_else(|| AppError::Internal("restaurant missing before order creation".to_string()))?;
      let cart = guard
        .cart
        .clone()
        .ok_or_else(|| AppError::Internal("cart missing before order creation".to_string()))?;
      let request = CheckoutRequest {
        customer_id: guard.customer_id,
        cart,
        address: guard.address.clone(),
        payment_method: guard.payment_method,
      };
      // Counting and inserting under one write lock keeps queue numbers unique.
      let mut ledger = guard.app_state.ledger.write();
      let order = ledger.create_order(restaurant, &request, Utc::now())?;
      order
    };

    info!(order_id = %order.id, queue_number = ?order.queue_number, "Checkout recorded order.");
    ctx.write().order = Some(order);
    Ok::<_, AppError>(FlowControl::Continue)
  });

  registry.register(flow);
  tracing::info!("Checkout flow registered.");
}
