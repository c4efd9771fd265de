#![allow(missing_docs)]

use formbind::form::{
	BindError, FieldShape, FormMap, IntWidth, Kind, RecordShape, Scalar, Schema, Slot, bind_new_record, bind_record,
};

fn order_schema() -> Schema {
	Schema::new(vec![
		RecordShape::new(
			"Order",
			vec![
				FieldShape::new("id", Kind::Uint(IntWidth::W64)),
				FieldShape::new("note", Kind::Opt(Box::new(Kind::Str))),
				FieldShape::new("qty", Kind::Seq(Box::new(Kind::Uint(IntWidth::W16)))),
				FieldShape::new("customer", Kind::Record(1)),
			],
		),
		RecordShape::new(
			"Customer",
			vec![FieldShape::new("name", Kind::Str), FieldShape::new("vip", Kind::Bool)],
		),
	])
	.expect("schema builds")
}

#[test]
fn percent_encoded_form_binds_through_nested_records() {
	let schema = order_schema();
	let form = FormMap::parse_urlencoded("id=88&note=hello+there&qty=1&qty=2&name=Ann%20B&vip=t");

	let order = bind_new_record(&schema, "Order", &form).expect("bind succeeds");

	let Some(Slot::Scalar(Scalar::U64(id))) = order.field(&schema, "id") else {
		panic!("expected id slot");
	};
	assert_eq!(*id, 88);

	let Some(Slot::Opt(Some(Scalar::Str(note)))) = order.field(&schema, "note") else {
		panic!("expected present note");
	};
	assert_eq!(note.as_ref(), "hello there");

	let Some(Slot::Seq(qty)) = order.field(&schema, "qty") else {
		panic!("expected qty sequence");
	};
	assert_eq!(qty.len(), 2);
	assert!(matches!(qty[0], Scalar::U64(1)));
	assert!(matches!(qty[1], Scalar::U64(2)));

	let Some(Slot::Record(customer)) = order.field(&schema, "customer") else {
		panic!("expected customer record");
	};
	let Some(Slot::Scalar(Scalar::Str(name))) = customer.field(&schema, "name") else {
		panic!("expected customer name");
	};
	assert_eq!(name.as_ref(), "Ann B");
	assert!(matches!(customer.field(&schema, "vip"), Some(Slot::Scalar(Scalar::Bool(true)))));
}

#[test]
fn rebinding_touches_only_matched_fields() {
	let schema = order_schema();
	let mut order = bind_new_record(&schema, "Order", &FormMap::parse_urlencoded("id=5&note=first&qty=9"))
		.expect("first bind succeeds");

	bind_record(&schema, &mut order, &FormMap::parse_urlencoded("id=6")).expect("second bind succeeds");

	assert!(matches!(order.field(&schema, "id"), Some(Slot::Scalar(Scalar::U64(6)))));
	assert!(matches!(
		order.field(&schema, "note"),
		Some(Slot::Opt(Some(Scalar::Str(note)))) if note.as_ref() == "first"
	));
	assert!(matches!(order.field(&schema, "qty"), Some(Slot::Seq(qty)) if qty.len() == 1));
}

#[test]
fn failure_surfaces_partial_state_without_rollback() {
	let schema = order_schema();
	let mut order = bind_new_record(&schema, "Order", &FormMap::new()).expect("zeroed bind succeeds");

	let form = FormMap::parse_urlencoded("id=3&name=Zed&vip=maybe");
	let err = bind_record(&schema, &mut order, &form).expect_err("bad vip should fail");

	let BindError::Conversion { record, field, value, .. } = err else {
		panic!("expected conversion error");
	};
	assert_eq!(record, "Customer");
	assert_eq!(field, "vip");
	assert_eq!(value, "maybe");

	assert!(matches!(order.field(&schema, "id"), Some(Slot::Scalar(Scalar::U64(3)))));
	let Some(Slot::Record(customer)) = order.field(&schema, "customer") else {
		panic!("expected customer record");
	};
	assert!(matches!(
		customer.field(&schema, "name"),
		Some(Slot::Scalar(Scalar::Str(name))) if name.as_ref() == "Zed"
	));
	assert!(matches!(customer.field(&schema, "vip"), Some(Slot::Scalar(Scalar::Bool(false)))));
}
