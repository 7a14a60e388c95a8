//! End-to-end behavior of declared enum types: declaration, lookup, bulk
//! queries, predicates, serialization and the process-wide table cache.

use enumeta::{declare_enum, ConstInit, Enum, EnumError, EnumValue};

declare_enum! {
    /// Numbered constants with CJK labels.
    pub enum Sample {
        One = [1, "一"],
        Two = [2, "二"],
        Three = [3, "三"],
    }
}

declare_enum! {
    /// Scalar-form constants: the value doubles as the label.
    pub enum Other {
        Haha = "hh",
        Bibi = "bb",
    }
}

/// Manually registered type, without the macro.
struct Status;

impl Enum for Status {
    const NAME: &'static str = "Status";

    fn constants() -> Vec<(&'static str, ConstInit)> {
        vec![
            ("Active", ConstInit::labeled(1, "active")),
            ("Disabled", ConstInit::labeled(0, "disabled")),
        ]
    }
}

#[test]
fn test_member_facets() {
    let one = Sample::get("One").unwrap();
    assert_eq!(one.key(), "One");
    assert_eq!(one.value(), EnumValue::Int(1));
    assert_eq!(one.label(), "一");
}

#[test]
fn test_scalar_constants_reuse_value_as_label() {
    let haha = Other::get("Haha").unwrap();
    assert_eq!(haha.value(), EnumValue::Str("hh"));
    assert_eq!(haha.label(), "hh");
}

#[test]
fn test_bulk_lists_preserve_declaration_order() {
    assert_eq!(Sample::keys(), vec!["One", "Two", "Three"]);
    assert_eq!(
        Sample::values(),
        vec![EnumValue::Int(1), EnumValue::Int(2), EnumValue::Int(3)]
    );
    assert_eq!(Sample::labels(), vec!["一", "二", "三"]);
    assert_eq!(Sample::keys().len(), Sample::values().len());
    assert_eq!(Sample::keys().len(), Sample::labels().len());
}

#[test]
fn test_value_label_maps_are_inverse() {
    assert_eq!(Sample::value_to_label(&EnumValue::Int(1)), Some("一"));
    assert_eq!(Sample::label_to_value("一"), Some(EnumValue::Int(1)));
    for value in Sample::values() {
        let label = Sample::value_to_label(&value).unwrap();
        assert_eq!(Sample::label_to_value(label), Some(value));
    }
    assert_eq!(
        Sample::value_label_pairs(),
        vec![
            (EnumValue::Int(1), "一"),
            (EnumValue::Int(2), "二"),
            (EnumValue::Int(3), "三"),
        ]
    );
}

#[test]
fn test_unknown_constant_is_an_error() {
    let err = Sample::get("doesNotExist").unwrap_err();
    assert_eq!(
        err,
        EnumError::UnknownConstant {
            constant: "doesNotExist".to_string(),
            enum_name: "Sample",
        }
    );
}

#[test]
fn test_searches_report_absence_without_error() {
    assert!(Sample::from_value(&EnumValue::Int(888)).is_none());
    assert!(Sample::from_key("doesNotExist").is_none());
    assert!(Sample::from_label("八").is_none());

    let two = Sample::from_value(&EnumValue::Int(2)).unwrap();
    assert_eq!(two.key(), "Two");
    let three = Sample::from_label("三").unwrap();
    assert_eq!(three.value(), EnumValue::Int(3));
}

#[test]
fn test_validity_checks_match_bulk_lists() {
    for key in Sample::keys() {
        assert!(Sample::is_valid_key(key));
    }
    for value in Sample::values() {
        assert!(Sample::is_valid_value(&value));
    }
    for label in Sample::labels() {
        assert!(Sample::is_valid_label(label));
    }
    assert!(!Sample::is_valid_key("Four"));
    assert!(!Sample::is_valid_value(&EnumValue::Int(4)));
    assert!(!Sample::is_valid_label("四"));
}

#[test]
fn test_predicates() {
    let one = Sample::One();
    assert!(one.is("One").unwrap());
    assert!(!one.is("Two").unwrap());
    assert!(matches!(
        one.is("doesNotExist"),
        Err(EnumError::UnknownConstant { .. })
    ));

    assert!(Sample::key_equals("One", &EnumValue::Int(1)).unwrap());
    assert!(!Sample::key_equals("One", &EnumValue::Int(2)).unwrap());
    assert!(Sample::key_equals("doesNotExist", &EnumValue::Int(1)).is_err());
}

#[test]
fn test_generated_factories_match_lookups() {
    assert_eq!(Sample::One(), Sample::get("One").unwrap());
    assert_eq!(Sample::Two(), Sample::from_value(&EnumValue::Int(2)).unwrap());
    assert_eq!(Other::Bibi().label(), "bb");
}

#[test]
fn test_member_value_equality() {
    let a = Sample::get("One").unwrap();
    let b = Sample::One();
    let c = a;
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, Sample::Two());
}

#[test]
fn test_json_projection() {
    let one = Sample::get("One").unwrap();
    assert_eq!(
        serde_json::to_value(one).unwrap(),
        serde_json::json!({"key": "One", "value": 1, "label": "一"})
    );
    // Field order is key, value, label; the int payload stays a number
    assert_eq!(
        serde_json::to_string(&one.record()).unwrap(),
        "{\"key\":\"One\",\"value\":1,\"label\":\"一\"}"
    );

    let haha = Other::get("Haha").unwrap();
    assert_eq!(
        serde_json::to_value(haha).unwrap(),
        serde_json::json!({"key": "Haha", "value": "hh", "label": "hh"})
    );
}

#[test]
fn test_records_projection() {
    let records = Sample::records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].key, "Two");
    assert_eq!(records[1].value, EnumValue::Int(2));
    assert_eq!(records[1].label, "二");
    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        serde_json::json!([
            {"key": "One", "value": 1, "label": "一"},
            {"key": "Two", "value": 2, "label": "二"},
            {"key": "Three", "value": 3, "label": "三"},
        ])
    );
}

#[test]
fn test_manual_registration() {
    assert_eq!(Status::keys(), vec!["Active", "Disabled"]);
    let active = Status::get("Active").unwrap();
    assert_eq!(active.value(), EnumValue::Int(1));
    assert_eq!(active.label(), "active");
    assert_eq!(format!("{:?}", active), "Status::Active");
    assert_eq!(format!("{}", active), "active");
}

#[test]
fn test_table_built_once_across_threads() {
    use std::sync::{Arc, Barrier};

    // Dedicated type: other tests must not have built its table already,
    // so the racing threads all hit the first-access path together.
    declare_enum! {
        enum Contended {
            A = [1, "a"],
            B = [2, "b"],
        }
    }

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                let table = Contended::table();
                assert_eq!(table.len(), 2);
                table as *const _ as usize
            })
        })
        .collect();
    let tables: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(tables.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(Contended::A().label(), "a");
    assert_eq!(Contended::B().value(), EnumValue::Int(2));
}
