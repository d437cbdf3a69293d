use timeblock::model::FormInput;

fn filled_form() -> FormInput {
    FormInput {
        year: "2024".to_string(),
        month: "5".to_string(),
        day: "10".to_string(),
        start_hour: "9".to_string(),
        end_hour: "10".to_string(),
        name: "Standup".to_string(),
        frequency: "3".to_string(),
    }
}

#[test]
fn test_parses_valid_fields() {
    let form = filled_form();
    assert_eq!(form.date().unwrap(), (2024, 5, 10));
    assert_eq!(form.hours().unwrap(), (9, 10));
    assert_eq!(form.start_hour().unwrap(), 9);
    assert_eq!(form.frequency().unwrap(), 3);
    assert_eq!(form.name(), "Standup");
}

#[test]
fn test_negative_numbers_parse() {
    let mut form = filled_form();
    form.frequency = "-1".to_string();
    assert_eq!(form.frequency().unwrap(), -1);
}

#[test]
fn test_non_numeric_field_fails_with_label() {
    let mut form = filled_form();
    form.month = "May".to_string();

    let err = form.date().unwrap_err().to_string();
    assert!(err.contains("Month"), "error should name the field: {}", err);
    assert!(err.contains("May"), "error should echo the input: {}", err);
}

#[test]
fn test_empty_field_fails() {
    let mut form = filled_form();
    form.start_hour = String::new();
    assert!(form.hours().is_err());
}

#[test]
fn test_name_passes_through_verbatim() {
    let mut form = filled_form();
    form.name = "  Lunch with Sam  ".to_string();
    assert_eq!(form.name(), "  Lunch with Sam  ");
}

#[test]
fn test_indexed_access_matches_fields() {
    let mut form = filled_form();
    assert_eq!(form.get(0), "2024");
    assert_eq!(form.get(5), "Standup");

    form.get_mut(5).push('!');
    assert_eq!(form.name(), "Standup!");
}
