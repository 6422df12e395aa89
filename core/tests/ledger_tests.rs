// tests/ledger_tests.rs
mod common;

use common::*;
use justo::models::{OrderStatus, PaymentMethod};
use justo::{Cart, CheckoutRequest, JustoError, Ledger, OrderFilter, OrderQuery};
use uuid::Uuid;

#[test]
fn order_total_includes_delivery_fee() {
  setup_tracing();
  let pizzeria = restaurant("Harry's Pizza", 2.50);
  let margarita = menu_item(&pizzeria, "Pizza Margarita", 10.00);
  let mut ledger = Ledger::new();

  let order = ledger
    .create_order(&pizzeria, &request_for(Uuid::new_v4(), &[(&margarita, 2)]), fixed_now())
    .unwrap();

  assert!((order.total_amount - 22.50).abs() < 1e-9);
  assert_eq!(order.status, OrderStatus::Confirmed);
  assert_eq!(order.queue_number, Some(1));
  assert_eq!(order.restaurant_name, "Harry's Pizza");
  assert_eq!(order.items.len(), 1);
  assert_eq!(order.items[0].quantity, 2);
  assert_eq!(
    order.estimated_delivery_time,
    Some(fixed_now() + chrono::Duration::minutes(30))
  );
  assert_eq!(ledger.len(), 1);
}

#[test]
fn queue_numbers_count_per_restaurant() {
  setup_tracing();
  let first = restaurant("Frisby", 1.0);
  let second = restaurant("Rostipollo", 1.5);
  let wings = menu_item(&first, "Alitas", 8.0);
  let chicken = menu_item(&second, "Pollo Asado", 12.0);
  let mut ledger = Ledger::new();
  let customer = Uuid::new_v4();

  let a = ledger.create_order(&first, &request_for(customer, &[(&wings, 1)]), fixed_now()).unwrap();
  let b = ledger.create_order(&second, &request_for(customer, &[(&chicken, 1)]), fixed_now()).unwrap();
  let c = ledger.create_order(&first, &request_for(customer, &[(&wings, 3)]), fixed_now()).unwrap();

  assert_eq!(a.queue_number, Some(1));
  assert_eq!(b.queue_number, Some(1));
  assert_eq!(c.queue_number, Some(2));
  // Newest first.
  assert_eq!(ledger.orders()[0].id, c.id);
  assert_eq!(ledger.list(OrderFilter::Restaurant(first.id)).len(), 2);
}

#[test]
fn invalid_checkout_reports_every_problem_and_records_nothing() {
  setup_tracing();
  let pizzeria = restaurant("Harry's Pizza", 2.50);
  let mut ledger = Ledger::new();
  let mut request = CheckoutRequest {
    customer_id: Uuid::new_v4(),
    cart: Cart::new(pizzeria.id),
    address: address(),
    payment_method: PaymentMethod::Cash,
  };
  request.address.street = "   ".to_string();
  request.address.zip = String::new();

  match ledger.create_order(&pizzeria, &request, fixed_now()) {
    Err(JustoError::Validation(errors)) => {
      assert!(errors.contains(&"street address is required".to_string()));
      assert!(errors.contains(&"postal code is required".to_string()));
      assert!(errors.contains(&"cart is empty".to_string()));
      assert!(!errors.contains(&"city is required".to_string()));
    }
    other => panic!("expected validation error, got {:?}", other),
  }
  assert!(ledger.is_empty());
}

#[test]
fn cart_for_another_restaurant_is_rejected() {
  setup_tracing();
  let pizzeria = restaurant("Harry's Pizza", 2.50);
  let other = restaurant("Frisby", 1.0);
  let wings = menu_item(&other, "Alitas", 8.0);
  let mut ledger = Ledger::new();

  let result = ledger.create_order(&pizzeria, &request_for(Uuid::new_v4(), &[(&wings, 1)]), fixed_now());
  assert!(matches!(result, Err(JustoError::Validation(_))));
  assert!(ledger.is_empty());
}

#[test]
fn rating_marks_delivered_and_overwrites() {
  setup_tracing();
  let pizzeria = restaurant("Harry's Pizza", 2.50);
  let margarita = menu_item(&pizzeria, "Pizza Margarita", 10.00);
  let mut ledger = Ledger::new();
  let order = ledger
    .create_order(&pizzeria, &request_for(Uuid::new_v4(), &[(&margarita, 1)]), fixed_now())
    .unwrap();

  let rated = ledger.rate(order.id, 4, Some("tasty".to_string())).unwrap();
  assert_eq!(rated.status, OrderStatus::Delivered);
  assert_eq!(rated.rating, Some(4));

  let rerated = ledger.rate(order.id, 5, None).unwrap();
  assert_eq!(rerated.rating, Some(5));
  assert_eq!(rerated.feedback, None);
  assert_eq!(ledger.get(order.id).unwrap().rating, Some(5));

  assert!(matches!(ledger.rate(order.id, 0, None), Err(JustoError::Validation(_))));
  assert!(matches!(ledger.rate(order.id, 6, None), Err(JustoError::Validation(_))));
  assert_eq!(ledger.get(order.id).unwrap().rating, Some(5));
}

#[test]
fn status_and_prep_time_updates() {
  setup_tracing();
  let pizzeria = restaurant("Harry's Pizza", 2.50);
  let margarita = menu_item(&pizzeria, "Pizza Margarita", 10.00);
  let mut ledger = Ledger::new();
  let order = ledger
    .create_order(&pizzeria, &request_for(Uuid::new_v4(), &[(&margarita, 1)]), fixed_now())
    .unwrap();

  // Any status may follow any other.
  ledger.set_status(order.id, OrderStatus::Delivered).unwrap();
  let back = ledger.set_status(order.id, OrderStatus::Pending).unwrap();
  assert_eq!(back.status, OrderStatus::Pending);

  let prepped = ledger.set_prep_time(order.id, 25).unwrap();
  assert_eq!(prepped.prep_time, Some(25));

  let missing = Uuid::new_v4();
  assert!(matches!(
    ledger.set_status(missing, OrderStatus::Ready),
    Err(JustoError::NotFound { entity: "Order", .. })
  ));
  assert!(matches!(ledger.get(missing), Err(JustoError::NotFound { .. })));
}

#[test]
fn order_query_accepts_at_most_one_filter() {
  let customer = Uuid::new_v4();
  let filter = OrderFilter::try_from(OrderQuery {
    customer_id: Some(customer),
    ..Default::default()
  })
  .unwrap();
  assert_eq!(filter, OrderFilter::Customer(customer));

  assert_eq!(OrderFilter::try_from(OrderQuery::default()).unwrap(), OrderFilter::All);

  let both = OrderQuery {
    customer_id: Some(customer),
    status: Some(OrderStatus::Ready),
    ..Default::default()
  };
  assert!(matches!(OrderFilter::try_from(both), Err(JustoError::Validation(_))));
}
