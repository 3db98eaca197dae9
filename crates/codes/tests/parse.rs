//! Integration tests for flow-statistic code parsing.

use peakweight_codes::{AepToken, CodeError, FlowStatisticCode, Method, parse};

#[test]
fn every_method_prefix_parses() {
    let cases = [
        ("PK1AEP", Method::BasinCharacteristics),
        ("BCPK1AEP", Method::BasinCharacteristics),
        ("ACPK1AEP", Method::ActiveChannel),
        ("BWPK1AEP", Method::BankfullWidth),
        ("BFPK1AEP", Method::BankfullWidth),
        ("RSPK1AEP", Method::RemoteSensing),
    ];
    for (code, expected) in cases {
        let (method, aep) = parse(code).unwrap();
        assert_eq!(method, expected, "code {code}");
        assert_eq!(aep.as_str(), "Q1", "code {code}");
    }
}

#[test]
fn published_aeps_extract() {
    let cases = [
        ("PK66_7AEP", "Q66.7"),
        ("PK50AEP", "Q50"),
        ("PK42_9AEP", "Q42.9"),
        ("PK20AEP", "Q20"),
        ("PK10AEP", "Q10"),
        ("PK4AEP", "Q4"),
        ("PK2AEP", "Q2"),
        ("PK1AEP", "Q1"),
        ("PK0_5AEP", "Q0.5"),
        ("PK0_2AEP", "Q0.2"),
    ];
    for (code, expected) in cases {
        let (_, aep) = parse(code).unwrap();
        assert_eq!(aep.as_str(), expected);
        let table_form: AepToken = expected.parse().unwrap();
        assert_eq!(aep, table_form);
    }
}

#[test]
fn invalid_method_is_rejected() {
    let result = parse("QQPK1AEP");
    assert!(matches!(
        result,
        Err(CodeError::InvalidMethod { ref token, .. }) if token == "QQ"
    ));
}

#[test]
fn lower_case_prefix_is_rejected() {
    assert!(matches!(
        parse("acPK1AEP"),
        Err(CodeError::InvalidMethod { .. })
    ));
}

#[test]
fn code_without_digits_is_malformed() {
    assert!(matches!(
        parse("ACPKAEP"),
        Err(CodeError::MalformedCode { .. })
    ));
}

#[test]
fn parse_normalises_bare_peak_prefix() {
    let (method, aep) = peakweight_codes::parse("PK0_2AEP").unwrap();
    assert_eq!(method, Method::BasinCharacteristics);
    assert_eq!(aep.as_str(), "Q0.2");

    let full = FlowStatisticCode::parse("PK0_2AEP").unwrap();
    assert_eq!((full.method(), full.aep()), (method, &aep));
    assert_eq!(full.to_string(), "PK0_2AEP");
}
