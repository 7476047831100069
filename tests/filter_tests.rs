use serde_json::{json, Value};
use title_proper::{filters, title_proper, Filter, TitleProper};

#[test]
fn test_crate_root_reexports() {
    assert_eq!(title_proper("the two towers"), "The Two Towers");
    assert!(filters::lookup("title-proper").is_some());
    let filter: &dyn Filter = &TitleProper;
    assert_eq!(filter.name(), "title-proper");
}

#[test]
fn test_title_proper_spec_example() {
    assert_eq!(
        title_proper("the lord of the rings"),
        "The Lord of the Rings"
    );
}

#[test]
fn test_minor_words_stay_lowercase() {
    assert_eq!(title_proper("a sample title"), "A Sample Title");
    assert_eq!(
        title_proper("the quick brown fox jumps over the lazy dog"),
        "The Quick Brown Fox Jumps Over the Lazy Dog"
    );
}

#[test]
fn test_empty_string_is_identity() {
    assert_eq!(title_proper(""), "");
    assert_eq!(TitleProper.apply(json!("")), json!(""));
}

#[test]
fn test_non_string_values_are_identity() {
    let filter = TitleProper;
    assert_eq!(filter.apply(Value::Null), Value::Null);
    assert_eq!(filter.apply(json!(42)), json!(42));
    assert_eq!(filter.apply(json!(29.99)), json!(29.99));
    assert_eq!(filter.apply(json!(false)), json!(false));
    assert_eq!(
        filter.apply(json!(["the hobbit", "the silmarillion"])),
        json!(["the hobbit", "the silmarillion"])
    );
    assert_eq!(
        filter.apply(json!({"title": "the hobbit"})),
        json!({"title": "the hobbit"})
    );
}

#[test]
fn test_idempotence_on_title_cased_input() {
    let once = title_proper("the lord of the rings");
    let twice = title_proper(&once);
    assert_eq!(once, twice);

    let filter = TitleProper;
    let value = filter.apply(json!("a sample title"));
    assert_eq!(filter.apply(value.clone()), value);
}

#[test]
fn test_registry_resolves_filter_by_name() {
    let filter = filters::lookup("title-proper").expect("filter should be registered");
    assert_eq!(
        filter.apply(json!("the fellowship of the ring")),
        json!("The Fellowship of the Ring")
    );
}

#[test]
fn test_registry_rejects_unknown_name() {
    assert!(filters::lookup("titleProper").is_none());
    assert!(filters::lookup("upper").is_none());
}
