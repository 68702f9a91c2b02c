use serde::de::DeserializeOwned;
use tagbind_macros::Bind;

#[derive(Bind)]
struct Envelope<T: DeserializeOwned> {
	#[bind(header = "x-version")]
	version: u16,
	#[bind(body)]
	body: T,
}

#[derive(Bind)]
struct Keywords {
	#[bind(query = "type")]
	r#type: String,
}

fn main() {
	let _ = Envelope::<std::collections::HashMap<String, i32>> {
		version: 1,
		body: Default::default(),
	};
	let _ = Keywords { r#type: String::new() };
}
