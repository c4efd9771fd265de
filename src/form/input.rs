use std::collections::HashMap;

/// Decoded form payload: external field names mapped to value lists.
#[derive(Debug, Clone, Default)]
pub struct FormMap {
	entries: HashMap<String, Vec<String>>,
}

impl FormMap {
	/// Empty form map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one value under a key, preserving arrival order per key.
	pub fn append(&mut self, key: &str, value: &str) {
		self.entries.entry(key.to_owned()).or_default().push(value.to_owned());
	}

	/// All values bound to a key, in arrival order.
	pub fn values(&self, key: &str) -> Option<&[String]> {
		self.entries.get(key).map(Vec::as_slice)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map holds no keys at all.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Decode an `application/x-www-form-urlencoded` payload or query string.
	///
	/// Percent sequences and `+` decode per the URL standard. Repeated keys
	/// accumulate their values in arrival order. A bare `key` with no `=`
	/// decodes to one empty-string value.
	pub fn parse_urlencoded(raw: &str) -> Self {
		let mut map = Self::new();
		for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
			map.append(&key, &value);
		}
		map
	}
}

#[cfg(test)]
mod tests {
	use super::FormMap;

	#[test]
	fn repeated_keys_keep_arrival_order() {
		let map = FormMap::parse_urlencoded("tag=red&tag=green&tag=blue&name=box");
		assert_eq!(map.len(), 2);

		let tags = map.values("tag").expect("tag present");
		assert_eq!(tags, ["red", "green", "blue"]);

		let names = map.values("name").expect("name present");
		assert_eq!(names, ["box"]);
	}

	#[test]
	fn percent_and_plus_sequences_decode() {
		let map = FormMap::parse_urlencoded("note=hello+world&path=a%2Fb%20c");
		assert_eq!(map.values("note").expect("note present"), ["hello world"]);
		assert_eq!(map.values("path").expect("path present"), ["a/b c"]);
	}

	#[test]
	fn bare_key_decodes_to_empty_value() {
		let map = FormMap::parse_urlencoded("flag&name=x");
		assert_eq!(map.values("flag").expect("flag present"), [""]);
	}

	#[test]
	fn missing_key_yields_none() {
		let mut map = FormMap::new();
		assert!(map.is_empty());
		map.append("a", "1");
		assert!(map.values("b").is_none());
		assert!(!map.is_empty());
	}
}
