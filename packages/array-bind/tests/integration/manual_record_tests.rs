//! Records registered by hand instead of through `array_record!`.

use array_bind::record::{assign_scalar, ArrayRecord, FieldDescriptor, FieldType};
use array_bind::types::{FieldKind, ScalarKind, ScalarValue};
use array_bind::{parse, BindError, Mapper, RecordRegistry};
use ntest::timeout;

use super::helpers::Sample;

#[derive(Debug, Default, PartialEq)]
struct Trade {
    symbol: String,
    qty: u32,
    price: f64,
    venue: String,
}

impl ArrayRecord for Trade {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::tagged("symbol", FieldKind::Scalar(ScalarKind::String), "[0]"),
        FieldDescriptor::tagged("qty", FieldKind::Scalar(ScalarKind::U32), "[2]"),
        FieldDescriptor::tagged("price", FieldKind::Scalar(ScalarKind::F64), "[1]"),
        FieldDescriptor::untagged("venue", FieldKind::Scalar(ScalarKind::String)),
    ];

    fn assign(&mut self, field: &'static str, value: ScalarValue) -> Result<(), BindError> {
        match field {
            "symbol" => assign_scalar(&mut self.symbol, field, value),
            "qty" => assign_scalar(&mut self.qty, field, value),
            "price" => assign_scalar(&mut self.price, field, value),
            _ => Err(BindError::UnknownField { field }),
        }
    }
}

#[derive(Debug, Default)]
struct Boxed {
    value: Box<i32>,
}

impl ArrayRecord for Boxed {
    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::tagged(
        "value",
        <Box<i32> as FieldType>::KIND,
        "[0]",
    )];

    fn assign(&mut self, field: &'static str, value: ScalarValue) -> Result<(), BindError> {
        match field {
            "value" => assign_scalar(&mut self.value, field, value),
            _ => Err(BindError::UnknownField { field }),
        }
    }
}

/// Carries an unannotated optional field.
#[derive(Debug, Default)]
struct WithOptional {
    id: u32,
    cached: Option<String>,
}

impl ArrayRecord for WithOptional {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::tagged("id", FieldKind::Scalar(ScalarKind::U32), "[0]"),
        FieldDescriptor::untagged("cached", <Option<String> as FieldType>::KIND),
    ];

    fn assign(&mut self, field: &'static str, value: ScalarValue) -> Result<(), BindError> {
        match field {
            "id" => assign_scalar(&mut self.id, field, value),
            _ => Err(BindError::UnknownField { field }),
        }
    }
}

/// Declares `level` as a u8 slot but stores it into a string.
#[derive(Debug, Default)]
struct Miswired {
    name: String,
    level: String,
}

impl ArrayRecord for Miswired {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::tagged("name", FieldKind::Scalar(ScalarKind::String), "[0]"),
        FieldDescriptor::tagged("level", FieldKind::Scalar(ScalarKind::U8), "[1]"),
    ];

    fn assign(&mut self, field: &'static str, value: ScalarValue) -> Result<(), BindError> {
        match field {
            "name" => assign_scalar(&mut self.name, field, value),
            "level" => assign_scalar(&mut self.level, field, value),
            _ => Err(BindError::UnknownField { field }),
        }
    }
}

#[timeout(1000)]
#[test]
fn test_manual_record_out_of_order_indices() -> anyhow::Result<()> {
    let mut trade = Trade::default();
    parse(&["ACME", "12.5", "300"], &mut trade)?;
    assert_eq!(
        trade,
        Trade {
            symbol: "ACME".to_string(),
            qty: 300,
            price: 12.5,
            venue: String::new(),
        }
    );
    Ok(())
}

#[timeout(1000)]
#[test]
fn test_reference_field_rejected() {
    let mut boxed = Boxed::default();
    assert_eq!(
        parse(&["1"], &mut boxed),
        Err(BindError::UnsupportedFieldType {
            field: "value",
            kind: FieldKind::Reference,
        })
    );
    assert_eq!(*boxed.value, 0);
}

#[timeout(1000)]
#[test]
fn test_unannotated_optional_field_rejected() {
    let mut record = WithOptional::default();
    assert_eq!(
        parse(&["9"], &mut record),
        Err(BindError::UnsupportedFieldType {
            field: "cached",
            kind: FieldKind::Reference,
        })
    );
    assert_eq!(record.id, 0);
    assert!(record.cached.is_none());
}

#[timeout(1000)]
#[test]
fn test_miswired_record_fails_mid_commit() {
    let mut record = Miswired::default();
    assert_eq!(
        parse(&["x", "7"], &mut record),
        Err(BindError::TypeMismatch {
            field: "level",
            expected: FieldKind::Scalar(ScalarKind::String),
            got: ScalarKind::U8,
        })
    );
    // Conversion succeeded for both fields, so commit started before the hook rejected.
    assert_eq!(record.name, "x");
    assert_eq!(record.level, "");
}

#[timeout(1000)]
#[test]
fn test_miswired_record_conversion_failure_leaves_target_untouched() {
    let mut record = Miswired::default();
    assert!(matches!(
        parse(&["x", "not-a-level"], &mut record),
        Err(BindError::Parse { field: "level", .. })
    ));
    assert_eq!(record.name, "");
}

#[timeout(1000)]
#[test]
fn test_registry_dispatches_by_type() -> anyhow::Result<()> {
    let registry = RecordRegistry::new();
    registry.register::<Trade>()?;
    registry.register::<Sample>()?;

    let mapper = Mapper::default();
    let mut trade = Trade::default();
    let mut sample = Sample::default();
    mapper.parse_dyn(&["XYZ", "1.25", "7"], &mut trade, &registry)?;
    mapper.parse_dyn(&["first", "2", "false"], &mut sample, &registry)?;

    assert_eq!(trade.qty, 7);
    assert_eq!(sample.c, 2);
    Ok(())
}

#[timeout(1000)]
#[test]
fn test_registry_rejects_non_record_target() {
    let registry = RecordRegistry::new();
    registry.register::<Trade>().unwrap();

    let mut target = String::from("not a record");
    let err = Mapper::default()
        .parse_dyn(&["x"], &mut target, &registry)
        .unwrap_err();
    assert!(matches!(err, BindError::NotARecord { .. }));
    assert_eq!(target, "not a record");
}
