//! Binder behavior against mocked resolver and codec selector

use bytes::Bytes;
use mockall::mock;
use mockall::predicate::*;
use rstest::*;
use tagbind_codec::{CodecSelector, NegotiatedCodec};
use tagbind_http::{BodyError, Request, Response};
use tagbind_macros::Bind;
use tagbind_params::{BindError, Binder, RawValue, SourceResolver};
use tracing_subscriber::EnvFilter;

mock! {
	pub Resolver {}

	impl SourceResolver for Resolver {
		fn header(&self, req: &Request, key: &str) -> RawValue;
		fn query(&self, req: &Request, key: &str) -> RawValue;
		fn path(&self, req: &Request, key: &str) -> RawValue;
		fn body(&self, req: &Request) -> Result<Bytes, BodyError>;
	}
}

mock! {
	pub Selector {}

	impl CodecSelector for Selector {
		fn for_request(&self, req: &Request) -> NegotiatedCodec;
		fn for_request_body(&self, req: &Request) -> NegotiatedCodec;
		fn for_response(&self, resp: &Response) -> NegotiatedCodec;
	}
}

#[derive(Debug, Default, serde::Deserialize, PartialEq)]
struct Item {
	sku: String,
}

#[derive(Debug, Default, Bind)]
struct Order {
	#[bind(header = "x-tenant")]
	tenant: String,
	#[bind(query = "count")]
	count: u32,
	#[bind(body)]
	item: Item,
}

#[fixture]
fn request() -> Request {
	Request::builder().build().unwrap()
}

#[fixture]
fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new("tagbind_params=trace"))
		.with_test_writer()
		.try_init();
}

#[rstest]
fn test_each_tag_is_resolved_once(request: Request, #[from(init_tracing)] _guard: ()) {
	let mut resolver = MockResolver::new();
	resolver
		.expect_header()
		.with(always(), eq("x-tenant"))
		.times(1)
		.returning(|_, _| RawValue::Text("acme".into()));
	resolver
		.expect_query()
		.with(always(), eq("count"))
		.times(1)
		.returning(|_, _| RawValue::Text("3".into()));
	resolver.expect_path().never();
	resolver
		.expect_body()
		.times(1)
		.returning(|_| Ok(Bytes::from_static(b"<Item><sku>A-1</sku></Item>")));

	let mut selector = MockSelector::new();
	selector
		.expect_for_request_body()
		.times(1)
		.returning(|_| NegotiatedCodec::xml());
	selector.expect_for_request().never();

	let binder = Binder::with_parts(resolver, selector);
	let mut order = Order::default();
	binder.fill(&request, &mut order).unwrap();

	assert_eq!(order.tenant, "acme");
	assert_eq!(order.count, 3);
	assert_eq!(order.item, Item { sku: "A-1".into() });
}

#[rstest]
fn test_first_failure_stops_binding(request: Request, #[from(init_tracing)] _guard: ()) {
	let mut resolver = MockResolver::new();
	resolver
		.expect_header()
		.returning(|_, _| RawValue::Text("acme".into()));
	resolver
		.expect_query()
		.returning(|_, _| RawValue::Text("-1".into()));
	resolver.expect_body().never();

	let mut selector = MockSelector::new();
	selector.expect_for_request_body().never();

	let binder = Binder::with_parts(resolver, selector);
	let mut order = Order::default();
	let err = binder.fill(&request, &mut order).unwrap_err();

	assert!(matches!(err, BindError::Parse { field: "count", .. }));
	assert_eq!(order.tenant, "acme");
}

#[rstest]
fn test_absent_values_skip_coercion(request: Request) {
	let mut resolver = MockResolver::new();
	resolver.expect_header().returning(|_, _| RawValue::Absent);
	resolver.expect_query().returning(|_, _| RawValue::Absent);
	resolver
		.expect_body()
		.returning(|_| Ok(Bytes::from_static(br#"{"sku":"B"}"#)));

	let mut selector = MockSelector::new();
	selector
		.expect_for_request_body()
		.returning(|_| NegotiatedCodec::json());

	let mut order = Order {
		tenant: "keep".into(),
		count: 9,
		item: Item::default(),
	};
	Binder::with_parts(resolver, selector)
		.fill(&request, &mut order)
		.unwrap();

	assert_eq!(order.tenant, "keep");
	assert_eq!(order.count, 9);
	assert_eq!(order.item.sku, "B");
}

#[rstest]
fn test_transport_error_skips_codec_selection(request: Request) {
	let mut resolver = MockResolver::new();
	resolver.expect_header().returning(|_, _| RawValue::Absent);
	resolver.expect_query().returning(|_, _| RawValue::Absent);
	resolver
		.expect_body()
		.returning(|_| Err(BodyError::Io(std::io::ErrorKind::UnexpectedEof.into())));

	let mut selector = MockSelector::new();
	selector.expect_for_request_body().never();

	let err = Binder::with_parts(resolver, selector)
		.fill(&request, &mut Order::default())
		.unwrap_err();
	assert!(matches!(
		err,
		BindError::Transport {
			field: "item",
			source: BodyError::Io(_)
		}
	));
}
