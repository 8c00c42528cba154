//! XML response bodies checked through the string assertion API.

use matcha::{should_match_xml, Captures, Expectation, FieldSpec, SchemaDescriptor};
use serde_json::json;

fn object(fields: Vec<FieldSpec>) -> SchemaDescriptor {
    SchemaDescriptor::object(fields)
}

fn string_field() -> SchemaDescriptor {
    object(vec![FieldSpec::new("StringField", SchemaDescriptor::string())])
}

fn result(fields: Vec<FieldSpec>) -> SchemaDescriptor {
    object(vec![FieldSpec::new("Result", object(fields))])
}

fn check(body: &str, schema: &SchemaDescriptor) -> String {
    should_match_xml(body.as_bytes(), Expectation::new(schema))
}

#[test]
fn invalid_xml_reports_a_decode_failure() {
    assert_eq!(
        check("<a>", &string_field()),
        "Was not possible to decode XML response. XML data:\n<a>"
    );
}

#[test]
fn absent_element_is_reported() {
    assert!(check("<hello></hello>", &string_field())
        .starts_with("No field 'string_field' found in response"));
}

#[test]
fn sibling_top_level_elements_are_ignored() {
    let body = "<string_field>some string</string_field><another_field>10</another_field>";
    assert_eq!(check(body, &string_field()), "");
}

#[test]
fn string_elements() {
    assert_eq!(check("<string_field>some string</string_field>", &string_field()), "");
    assert!(check("<string_field>5</string_field>", &string_field())
        .starts_with("Expected 'string_field' to be: 'string' (but was: 'float64')!"));
}

#[test]
fn number_elements() {
    let schema = object(vec![FieldSpec::new("NumberField", SchemaDescriptor::number())]);
    assert_eq!(check("<number_field>25.2</number_field>", &schema), "");
    assert!(check("<number_field>fifty</number_field>", &schema)
        .starts_with("Expected 'number_field' to be: 'float64' (but was: 'string')!"));
}

#[test]
fn bool_elements() {
    let schema = object(vec![FieldSpec::new("BooleanField", SchemaDescriptor::bool())]);
    assert_eq!(check("<boolean_field>true</boolean_field>", &schema), "");
    assert!(check("<boolean_field>yes</boolean_field>", &schema)
        .starts_with("Expected 'boolean_field' to be: 'bool' (but was: 'string')!"));
}

#[test]
fn repeated_elements_form_an_array() {
    let schema = result(vec![FieldSpec::new(
        "ArrayField",
        SchemaDescriptor::array(SchemaDescriptor::string()),
    )]);
    assert_eq!(
        check(
            "<result><array_field>one</array_field><array_field>two</array_field></result>",
            &schema
        ),
        ""
    );
    assert!(check(
        "<result><array_field>one</array_field><array_field>2</array_field></result>",
        &schema
    )
    .starts_with("Expected 'array_field array values' to be: 'string' (but was: 'float64')!"));
}

#[test]
fn a_single_element_is_not_an_array() {
    let schema = result(vec![FieldSpec::new(
        "ArrayField",
        SchemaDescriptor::array(SchemaDescriptor::string()),
    )]);
    assert!(check("<result><array_field>one</array_field></result>", &schema)
        .starts_with("Was expecting an array for field: array_field"));
}

#[test]
fn repeated_elements_of_objects() {
    let schema = result(vec![FieldSpec::new(
        "ArrayField",
        SchemaDescriptor::array(object(vec![FieldSpec::new(
            "NumberField",
            SchemaDescriptor::number(),
        )])),
    )]);
    let good = "<result>\
                <array_field><number_field>1</number_field></array_field>\
                <array_field><number_field>2</number_field></array_field>\
                </result>";
    assert_eq!(check(good, &schema), "");

    let scalars = "<result><array_field>one</array_field><array_field>two</array_field></result>";
    assert!(check(scalars, &schema)
        .starts_with("Was expecting an object for field: array_field array values"));
}

#[test]
fn complex_document() {
    let schema = result(vec![
        FieldSpec::new(
            "Class",
            SchemaDescriptor::array(object(vec![
                FieldSpec::new("ClassCode", SchemaDescriptor::string()),
                FieldSpec::new("ClassId", SchemaDescriptor::number()),
                FieldSpec::new(
                    "Subclass",
                    object(vec![FieldSpec::new("SubclassCode", SchemaDescriptor::string())]),
                ),
            ])),
        ),
        FieldSpec::new("EventId", SchemaDescriptor::string()),
    ]);
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
    <city_desc>London</city_desc>
    <class>
        <class_code>concerts</class_code>
        <class_id>2</class_id>
        <is_main_class>yes</is_main_class>
        <subclass>
            <is_main_subclass>yes</is_main_subclass>
            <subclass_code>rock</subclass_code>
            <subclass_desc>Rock &amp; Pop</subclass_desc>
        </subclass>
    </class>
    <class>
        <class_code>package</class_code>
        <class_id>7</class_id>
        <is_main_class>no</is_main_class>
        <subclass>
            <is_main_subclass>no</is_main_subclass>
            <subclass_code>misc</subclass_code>
            <subclass_desc>Misc packages</subclass_desc>
        </subclass>
    </class>
    <country_code>uk</country_code>
    <country_desc>United Kingdom</country_desc>
    <event_id>9ZO</event_id>
</result>"#;
    assert_eq!(check(body, &schema), "");
}

#[test]
fn xml_key_override() {
    let schema = object(vec![
        FieldSpec::new("StringField", SchemaDescriptor::string()).with_xml_key("string_t")
    ]);
    assert_eq!(check("<string_t>some string</string_t>", &schema), "");
}

#[test]
fn json_key_override_does_not_apply_to_xml() {
    let schema = object(vec![
        FieldSpec::new("StringField", SchemaDescriptor::string()).with_json_key("stringField")
    ]);
    assert_eq!(check("<string_field>some string</string_field>", &schema), "");
}

#[test]
fn captured_values() {
    let schema = result(vec![
        FieldSpec::new("NumberField", SchemaDescriptor::number()).with_capture("captured_number"),
        FieldSpec::new("StringField", SchemaDescriptor::string()).with_capture(""),
    ]);
    let mut captures = Captures::new();
    let message = should_match_xml(
        b"<result><string_field>I've been captured!</string_field>\
          <number_field>16</number_field></result>",
        Expectation::new(&schema).capture_into(&mut captures),
    );
    assert_eq!(message, "");
    assert_eq!(captures["captured_number"], json!(16));
    assert_eq!(captures["string_field"], json!("I've been captured!"));
}

#[test]
fn url_pattern() {
    let schema = object(vec![
        FieldSpec::new("URL", SchemaDescriptor::string()).with_pattern("https://.*")
    ]);
    assert_eq!(check("<url>https://www.google.com</url>", &schema), "");
    assert!(check("<url>https:www.google.com</url>", &schema)
        .starts_with("URL: 'https:www.google.com' does not match expected pattern: https://.*"));
}

#[test]
fn attributes_are_prefixed_fields() {
    let schema = object(vec![FieldSpec::new(
        "Event",
        object(vec![
            FieldSpec::new("Id", SchemaDescriptor::number()).with_xml_key("-id"),
            FieldSpec::new("Name", SchemaDescriptor::string()),
        ]),
    )]);
    assert_eq!(check(r#"<event id="42"><name>Gig</name></event>"#, &schema), "");
}
