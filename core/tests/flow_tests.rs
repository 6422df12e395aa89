// tests/flow_tests.rs
mod common;

use common::*;
use justo::flow::SkipCondition;
use justo::{Flow, FlowControl, FlowError, FlowOutcome, FlowRegistry, Shared};
use serial_test::serial;
use std::sync::Arc;

fn three_step_flow() -> Flow<TestContext, TestError> {
  let mut flow = Flow::new("three", &[("one", false, None), ("two", false, None), ("three", false, None)]);
  flow.on("one", recording_handler("one", "1"));
  flow.on("two", recording_handler("two", "2"));
  flow.on("three", recording_handler("three", "3"));
  flow
}

#[tokio::test]
#[serial]
async fn steps_run_in_declared_order() {
  setup_tracing();
  let flow = three_step_flow();
  let ctx = Shared::new(TestContext::default());

  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  let guard = ctx.read();
  assert_eq!(guard.trail, "123");
  assert_eq!(guard.steps_executed, vec!["one", "two", "three"]);
}

#[tokio::test]
#[serial]
async fn stop_halts_remaining_steps() {
  setup_tracing();
  let flow = three_step_flow();
  let ctx = Shared::new(TestContext {
    should_stop_at: Some("two".to_string()),
    ..Default::default()
  });

  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Stopped);
  assert_eq!(ctx.read().trail, "12");
}

#[tokio::test]
#[serial]
async fn handler_error_aborts_and_propagates() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("failing", &[("good", false, None), ("bad", false, None), ("never", false, None)]);
  flow.on("good", recording_handler("good", "g"));
  flow.on("bad", |_ctx: Shared<TestContext>| async move {
    Err::<FlowControl, _>(TestError::Handler("boom".to_string()))
  });
  flow.on("never", recording_handler("never", "n"));

  let ctx = Shared::new(TestContext::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();
  assert_eq!(err, TestError::Handler("boom".to_string()));
  assert_eq!(ctx.read().trail, "g");
}

#[tokio::test]
#[serial]
async fn skip_condition_and_optional_steps_are_passed_over() {
  setup_tracing();
  let skip_once_counted: SkipCondition<TestContext> = Arc::new(|ctx: Shared<TestContext>| ctx.read().counter > 0);
  let mut flow = Flow::<TestContext, TestError>::new(
    "skipping",
    &[
      ("first", false, None),
      ("skipped", false, Some(skip_once_counted)),
      ("optional_without_handler", true, None),
      ("last", false, None),
    ],
  );
  flow.on("first", recording_handler("first", "f"));
  flow.on("skipped", recording_handler("skipped", "s"));
  flow.on("last", recording_handler("last", "l"));

  let ctx = Shared::new(TestContext::default());
  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().trail, "fl");
}

#[tokio::test]
#[serial]
async fn required_step_without_handler_fails() {
  setup_tracing();
  let flow = Flow::<TestContext, TestError>::new("incomplete", &[("missing", false, None)]);
  match flow.run(Shared::new(TestContext::default())).await {
    Err(TestError::Flow(msg)) => {
      assert!(msg.contains("HandlerMissing"));
      assert!(msg.contains("missing"));
    }
    other => panic!("expected HandlerMissing, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn steps_can_be_inserted_after_existing_ones() {
  setup_tracing();
  let mut flow = three_step_flow();
  flow.insert_after("one", "one_and_a_half", false).unwrap();
  flow.on("one_and_a_half", recording_handler("one_and_a_half", "+"));
  assert!(matches!(
    flow.insert_after("nope", "x", false),
    Err(FlowError::StepNotFound { .. })
  ));
  assert!(matches!(
    flow.insert_after("two", "three", false),
    Err(FlowError::DuplicateStep { .. })
  ));

  let ctx = Shared::new(TestContext::default());
  flow.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().trail, "1+23");
}

#[derive(Debug, Default)]
struct OtherContext {
  touched: bool,
}

#[tokio::test]
#[serial]
async fn registry_dispatches_by_context_type() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  registry.register(three_step_flow());

  let mut other = Flow::<OtherContext, TestError>::new("other", &[("touch", false, None)]);
  other.on("touch", |ctx: Shared<OtherContext>| async move {
    ctx.write().touched = true;
    Ok(FlowControl::Continue)
  });
  registry.register(other);

  let ctx = Shared::new(TestContext::default());
  assert_eq!(registry.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().counter, 3);

  let other_ctx = Shared::new(OtherContext::default());
  registry.run(other_ctx.clone()).await.unwrap();
  assert!(other_ctx.read().touched);
}

#[tokio::test]
#[serial]
async fn registry_rejects_unregistered_context() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  assert!(!registry.is_registered::<TestContext>());
  match registry.run(Shared::new(TestContext::default())).await {
    Err(TestError::Flow(msg)) => assert!(msg.contains("NotRegistered")),
    other => panic!("expected NotRegistered, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn opaque_handler_failures_surface_as_flow_errors() {
  setup_tracing();
  let registry = FlowRegistry::new();
  let mut flow = Flow::<OtherContext, FlowError>::new("opaque", &[("fails", false, None)]);
  flow.on("fails", |_ctx: Shared<OtherContext>| async move {
    let parsed: u32 = "not a number".parse().map_err(anyhow::Error::from)?;
    Ok::<_, FlowError>(if parsed > 0 { FlowControl::Continue } else { FlowControl::Stop })
  });
  registry.register(flow);

  match registry.run(Shared::new(OtherContext::default())).await {
    Err(FlowError::Handler { source }) => assert!(source.to_string().contains("invalid digit")),
    other => panic!("expected handler error, got {:?}", other.map(|_| ())),
  }
}
