use coderhub_core::{validate, FieldName, FieldSet};

fn valid_fields() -> FieldSet {
    FieldSet {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Hola".to_string(),
        message: "Quiero un presupuesto".to_string(),
        consent: true,
    }
}

#[test]
fn all_valid_fields_pass() {
    let result = validate(&valid_fields());
    assert!(result.all_valid());
    assert!(result.invalid_fields().is_empty());
    for field in FieldName::ALL {
        assert!(result.is_valid(field), "{} should be valid", field.as_str());
    }
}

#[test]
fn each_failing_condition_flags_only_its_field() {
    let cases: [(FieldName, fn(&mut FieldSet)); 5] = [
        (FieldName::Name, |f| f.name = "   ".to_string()),
        (FieldName::Email, |f| f.email = "ada@example".to_string()),
        (FieldName::Subject, |f| f.subject = String::new()),
        (FieldName::Message, |f| f.message = "\t\n".to_string()),
        (FieldName::Consent, |f| f.consent = false),
    ];

    for (field, break_field) in cases {
        let mut fields = valid_fields();
        break_field(&mut fields);
        let result = validate(&fields);
        assert!(!result.all_valid());
        assert_eq!(result.invalid_fields(), vec![field]);
    }
}

#[test]
fn every_failure_is_reported_in_one_pass() {
    let result = validate(&FieldSet::default());
    assert_eq!(result.invalid_fields(), FieldName::ALL.to_vec());
}

#[test]
fn blank_email_is_invalid_even_before_shape_check() {
    let mut fields = valid_fields();
    fields.email = "  ".to_string();
    assert!(!validate(&fields).is_valid(FieldName::Email));
}

#[test]
fn name_with_inner_whitespace_is_valid() {
    let mut fields = valid_fields();
    fields.name = "  Ada Lovelace  ".to_string();
    assert!(validate(&fields).is_valid(FieldName::Name));
}

#[test]
fn result_serializes_field_map() {
    let mut fields = valid_fields();
    fields.consent = false;
    let json = serde_json::to_value(validate(&fields)).expect("serialize result");
    assert_eq!(json["fields"]["name"], true);
    assert_eq!(json["fields"]["consent"], false);
}

#[test]
fn byte_order_mark_alone_is_blank() {
    let mut fields = valid_fields();
    fields.name = "\u{FEFF}".to_string();
    fields.email = "a\u{FEFF}@b.c".to_string();
    let result = validate(&fields);
    assert!(!result.is_valid(FieldName::Name));
    assert!(!result.is_valid(FieldName::Email));
    assert_eq!(result.invalid_fields(), vec![FieldName::Name, FieldName::Email]);
}
