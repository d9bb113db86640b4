use serde_json::json;
use text_selection::{
    is_selection_shape, lift_selection, lift_selection_with, LiftConfig, PlainSelection, Position,
    Selection, SelectionDirection, SelectionError,
};

#[test]
fn test_shape_accepts_all_numeric_fields() {
    let value = json!({
        "selectionStartLineNumber": 3,
        "selectionStartColumn": 1,
        "positionLineNumber": 1,
        "positionColumn": 4
    });
    assert!(is_selection_shape(&value));
}

#[test]
fn test_shape_ignores_value_range() {
    // Numeric is enough; bounds and integrality are not checked
    let value = json!({
        "selectionStartLineNumber": -3,
        "selectionStartColumn": 0,
        "positionLineNumber": 1.5,
        "positionColumn": 1e20
    });
    assert!(is_selection_shape(&value));
}

#[test]
fn test_shape_ignores_extra_fields() {
    let value = json!({
        "selectionStartLineNumber": 1,
        "selectionStartColumn": 1,
        "positionLineNumber": 1,
        "positionColumn": 1,
        "startLineNumber": 1
    });
    assert!(is_selection_shape(&value));
}

#[test]
fn test_shape_rejects_missing_field() {
    let fields = [
        "selectionStartLineNumber",
        "selectionStartColumn",
        "positionLineNumber",
        "positionColumn",
    ];

    for missing in fields {
        let mut value = json!({
            "selectionStartLineNumber": 1,
            "selectionStartColumn": 1,
            "positionLineNumber": 1,
            "positionColumn": 1
        });
        value.as_object_mut().unwrap().remove(missing);
        assert!(!is_selection_shape(&value), "missing {missing}");
    }
}

#[test]
fn test_shape_rejects_non_numbers() {
    let value = json!({
        "selectionStartLineNumber": "1",
        "selectionStartColumn": 1,
        "positionLineNumber": 1,
        "positionColumn": 1
    });
    assert!(!is_selection_shape(&value));

    let value = json!({
        "selectionStartLineNumber": 1,
        "selectionStartColumn": 1,
        "positionLineNumber": null,
        "positionColumn": 1
    });
    assert!(!is_selection_shape(&value));

    assert!(!is_selection_shape(&json!(null)));
    assert!(!is_selection_shape(&json!([1, 1, 1, 1])));
}

#[test]
fn test_lift() {
    let value = json!({
        "selectionStartLineNumber": 3,
        "selectionStartColumn": 1,
        "positionLineNumber": 1,
        "positionColumn": 4
    });

    let selection = lift_selection(&value).unwrap();
    assert_eq!(selection.anchor(), Position::new(3, 1));
    assert_eq!(selection.caret(), Position::new(1, 4));
    assert_eq!(selection.direction(), SelectionDirection::Rtl);
    assert_eq!(selection, Selection::new(3, 1, 1, 4));
}

#[test]
fn test_lift_errors() {
    assert_eq!(lift_selection(&json!(7)), Err(SelectionError::NotAnObject));

    let missing = json!({
        "selectionStartLineNumber": 1,
        "selectionStartColumn": 1,
        "positionLineNumber": 1
    });
    assert_eq!(
        lift_selection(&missing),
        Err(SelectionError::MissingField("positionColumn"))
    );

    let fractional = json!({
        "selectionStartLineNumber": 1,
        "selectionStartColumn": 1.5,
        "positionLineNumber": 1,
        "positionColumn": 1
    });
    assert_eq!(
        lift_selection(&fractional),
        Err(SelectionError::NotAnInteger {
            field: "selectionStartColumn",
            value: 1.5
        })
    );

    let too_big = json!({
        "selectionStartLineNumber": 1,
        "selectionStartColumn": 1,
        "positionLineNumber": 5_000_000_000u64,
        "positionColumn": 1
    });
    assert!(matches!(
        lift_selection(&too_big),
        Err(SelectionError::OutOfRange { field: "positionLineNumber", .. })
    ));
}

#[test]
fn test_lift_zero_coordinates() {
    let value = json!({
        "selectionStartLineNumber": 0,
        "selectionStartColumn": 0,
        "positionLineNumber": 2,
        "positionColumn": 1
    });

    assert_eq!(
        lift_selection(&value),
        Err(SelectionError::InvalidCoordinate { line: 0, column: 0 })
    );

    let lifted = lift_selection_with(&value, &LiftConfig::lenient()).unwrap();
    assert_eq!(lifted.anchor(), Position { line: 0, column: 0 });
    assert_eq!(lifted.direction(), SelectionDirection::Ltr);
}

#[test]
fn test_lift_from_plain_selection() {
    let plain = PlainSelection::new(2, 2, 2, 8);
    let selection = Selection::lift(&plain).unwrap();
    assert_eq!(PlainSelection::from(selection), plain);

    assert!(Selection::lift(&PlainSelection::new(1, 0, 1, 1)).is_err());
}

#[test]
fn test_plain_selection_wire_form() {
    let plain = PlainSelection::new(1, 2, 3, 4);
    let value = serde_json::to_value(plain).unwrap();

    assert!(is_selection_shape(&value));
    assert_eq!(lift_selection(&value).unwrap(), Selection::new(1, 2, 3, 4));
}
