use serde::Deserialize;
use tagbind_macros::Bind;
use tagbind_params::Bind as _;

#[derive(Deserialize)]
struct Payload {
	name: String,
}

#[derive(Bind)]
struct Request {
	#[bind(header = "x-id")]
	id: i64,
	#[bind(query = "verbose")]
	verbose: bool,
	#[bind(path = "slug")]
	slug: String,
	#[bind(body)]
	payload: Option<Box<Payload>>,
	untagged: u8,
}

fn main() {
	let mut request = Request {
		id: 0,
		verbose: false,
		slug: String::new(),
		payload: None,
		untagged: 0,
	};
	assert_eq!(request.fields().len(), 4);
	let _ = (request.untagged, request.payload.map(|p| p.name));
}
