use serde_json::{Number, json};

use deck_analyst::domain::{Analysis, AnalysisSchemaError, REQUIRED_FIELDS};

fn complete_object() -> serde_json::Value {
    json!({
        "company_name": "Acme Robotics",
        "problem": "Warehouses waste time on manual picking.",
        "solution": "Autonomous picking arms.",
        "market_size": "$40B",
        "business_model": "Robots as a service",
        "team_info": "Ex-Boston Dynamics founders",
        "funding_ask": "$3.5M",
        "revenue_projection": "$12M ARR by 2027"
    })
}

fn with_funding_ask(value: serde_json::Value) -> String {
    let mut object = complete_object();
    object["funding_ask"] = value;
    object.to_string()
}

#[test]
fn given_complete_object_when_validating_then_all_fields_are_kept() {
    let analysis = Analysis::from_model_output(&complete_object().to_string()).unwrap();

    assert_eq!(analysis.company_name, "Acme Robotics");
    assert_eq!(analysis.market_size, "$40B");
    assert_eq!(analysis.funding_ask, Some(Number::from(3_500_000)));
}

#[test]
fn given_fenced_json_when_validating_then_fence_is_ignored() {
    let raw = format!("```json\n{}\n```", complete_object());

    let analysis = Analysis::from_model_output(&raw).unwrap();

    assert_eq!(analysis.company_name, "Acme Robotics");
}

#[test]
fn given_extra_keys_when_validating_then_they_are_dropped() {
    let mut object = complete_object();
    object["confidence"] = json!(0.9);

    let analysis = Analysis::from_model_output(&object.to_string()).unwrap();
    let serialized = serde_json::to_value(&analysis).unwrap();

    assert!(serialized.get("confidence").is_none());
    assert_eq!(serialized.as_object().unwrap().len(), REQUIRED_FIELDS.len());
}

#[test]
fn given_blank_output_when_validating_then_empty_error() {
    assert_eq!(
        Analysis::from_model_output("  \n "),
        Err(AnalysisSchemaError::Empty)
    );
    assert_eq!(
        Analysis::from_model_output("```json\n```"),
        Err(AnalysisSchemaError::Empty)
    );
}

#[test]
fn given_prose_when_validating_then_invalid_json_error() {
    let result = Analysis::from_model_output("I could not read this deck.");

    assert!(matches!(result, Err(AnalysisSchemaError::InvalidJson(_))));
}

#[test]
fn given_json_array_when_validating_then_not_an_object_error() {
    let result = Analysis::from_model_output("[1, 2, 3]");

    assert_eq!(result, Err(AnalysisSchemaError::NotAnObject));
}

#[test]
fn given_missing_keys_when_validating_then_every_missing_key_is_named() {
    let mut object = complete_object();
    let map = object.as_object_mut().unwrap();
    map.remove("problem");
    map.remove("revenue_projection");

    let result = Analysis::from_model_output(&object.to_string());

    assert_eq!(
        result,
        Err(AnalysisSchemaError::MissingKeys(vec![
            "problem".to_string(),
            "revenue_projection".to_string()
        ]))
    );
}

#[test]
fn given_numeric_funding_ask_when_validating_then_number_is_kept_as_written() {
    let analysis = Analysis::from_model_output(&with_funding_ask(json!(2000000))).unwrap();

    assert_eq!(analysis.funding_ask, Some(Number::from(2_000_000)));
    let serialized = serde_json::to_string(&analysis).unwrap();
    assert!(serialized.contains(r#""funding_ask":2000000,"#));

    let fractional = Analysis::from_model_output(&with_funding_ask(json!(1.25))).unwrap();
    assert_eq!(fractional.funding_ask, Number::from_f64(1.25));
}

#[test]
fn given_single_textual_amount_when_validating_then_coerced_to_whole_number() {
    let cases = [
        ("$2,000,000", 2_000_000),
        ("2M", 2_000_000),
        ("USD 750k", 750_000),
        ("  1.2 million ", 1_200_000),
        ("$1bn", 1_000_000_000),
        ("£250 thousand", 250_000),
    ];

    for (text, expected) in cases {
        let analysis = Analysis::from_model_output(&with_funding_ask(json!(text))).unwrap();
        assert_eq!(analysis.funding_ask, Some(Number::from(expected)), "input: {text}");
    }
}

#[test]
fn given_funding_text_that_is_not_one_amount_when_validating_then_rejected() {
    for text in [
        "$2-3M",
        "$2 - 3 million",
        "Series A (2025): $4M",
        "EUR 1.2 Mio",
        "Raising 1.2 million in seed",
    ] {
        let result = Analysis::from_model_output(&with_funding_ask(json!(text)));
        assert_eq!(
            result,
            Err(AnalysisSchemaError::InvalidFundingAsk(text.to_string())),
            "input: {text}"
        );
    }
}

#[test]
fn given_unstated_funding_ask_when_validating_then_none() {
    for value in [json!(null), json!("Not mentioned"), json!("N/A")] {
        let analysis = Analysis::from_model_output(&with_funding_ask(value)).unwrap();
        assert_eq!(analysis.funding_ask, None);
    }
}

#[test]
fn given_non_scalar_funding_ask_when_validating_then_invalid_funding_error() {
    for value in [json!(true), json!([2000000]), json!({"amount": 2})] {
        let result = Analysis::from_model_output(&with_funding_ask(value));
        assert!(matches!(
            result,
            Err(AnalysisSchemaError::InvalidFundingAsk(_))
        ));
    }
}
