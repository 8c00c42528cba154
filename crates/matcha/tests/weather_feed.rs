//! A recorded weather API response checked against a schema declared in
//! YAML, the way a service test suite would use matcha.

use std::thread;

use matcha::{should_match_json, Captures, DiscrepancyKind, Expectation, SchemaDescriptor};
use serde_json::json;

const WEATHER_SCHEMA: &str = r#"
type: object
fields:
  - name: Query
    type: object
    fields:
      - { name: Count, type: number, json: count }
      - { name: Created, type: string, json: created, pattern: "^\\d{4}-\\d{2}-\\d{2}T" }
      - { name: Lang, type: string, json: lang }
      - name: Results
        type: object
        fields:
          - name: Channel
            type: object
            fields:
              - name: Item
                type: object
                fields:
                  - name: Condition
                    type: object
                    fields:
                      - { name: Code, type: string }
                      - { name: Date, type: string }
                      - { name: Temp, type: string, capture: temperature }
                      - { name: Text, type: string, capture: "" }
"#;

const WEATHER_RESPONSE: &str = r#"
{
    "query": {
        "count": 1,
        "created": "2016-09-06T17:56:20Z",
        "lang": "en-GB",
        "results": {
            "channel": {
                "item": {
                    "condition": {
                        "code": "34",
                        "date": "Tue, 06 Sep 2016 10:00 AM PDT",
                        "temp": "72",
                        "text": "Mostly Sunny"
                    }
                }
            }
        }
    }
}
"#;

fn schema() -> SchemaDescriptor {
    matcha_schema::from_yaml_str(WEATHER_SCHEMA).unwrap()
}

#[test]
fn recorded_response_has_the_expected_shape() {
    let schema = schema();
    let mut captures = Captures::new();
    let message = should_match_json(
        WEATHER_RESPONSE.as_bytes(),
        Expectation::new(&schema).capture_into(&mut captures),
    );
    assert_eq!(message, "");
    assert_eq!(captures["temperature"], json!("72"));
    assert_eq!(captures["text"], json!("Mostly Sunny"));
}

#[test]
fn drifted_response_lists_every_change() {
    let drifted = WEATHER_RESPONSE
        .replace(r#""count": 1"#, r#""count": "1""#)
        .replace(r#""lang": "en-GB","#, "")
        .replace(r#""temp": "72""#, r#""temp": 72"#);
    let schema = schema();
    let verdict = Expectation::new(&schema).check_json(drifted.as_bytes()).unwrap();

    let kinds: Vec<DiscrepancyKind> = verdict.discrepancies().iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            DiscrepancyKind::TypeMismatch,
            DiscrepancyKind::MissingField,
            DiscrepancyKind::TypeMismatch,
        ]
    );
    assert!(verdict.into_message().ends_with(&format!("JSON data:\n{drifted}")));
}

#[test]
fn one_schema_is_shared_across_threads() {
    let schema = schema();
    let schema = &schema;
    let bodies = [
        WEATHER_RESPONSE.to_string(),
        WEATHER_RESPONSE.replace(r#""temp": "72""#, r#""temp": 72"#),
    ];

    let messages: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = bodies
            .iter()
            .map(|body| {
                scope.spawn(move || should_match_json(body.as_bytes(), Expectation::new(schema)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(messages[0], "");
    assert!(messages[1].starts_with("Expected 'temp' to be: 'string' (but was: 'float64')!"));
}
