use std::sync::Arc;
use tagbind_macros::Bind;

#[derive(Bind)]
struct Unusual {
	#[bind(header = "a")]
	list: Vec<u8>,
	#[bind(header = "b")]
	callback: fn(),
	#[bind(query = "c")]
	pair: (f64, f64),
	#[bind(query = "d")]
	shared: Arc<String>,
	#[bind(path = "e")]
	maybe: Option<u32>,
}

fn main() {
	let _ = Unusual {
		list: Vec::new(),
		callback: main,
		pair: (0.0, 0.0),
		shared: Arc::new(String::new()),
		maybe: None,
	};
}
