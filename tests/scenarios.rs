use approx::assert_relative_eq;
use esi_scorer::criteria::from_pairs;
use esi_scorer::{
    assess_location, evaluate_location, evaluate_location_with, validate_criteria, Assessment,
    BufferedSink, ErrorKind, HardCriteria, SoftCriteria, SoftWeights,
};

fn soft_abcd() -> SoftCriteria {
    from_pairs([("a", 0.9), ("b", 0.6), ("c", 0.3), ("d", 0.7)])
}

fn weights_abcd() -> SoftWeights {
    from_pairs([("a", 0.3), ("b", 0.4), ("c", 0.2), ("d", 0.1)])
}

#[test]
fn scenario_a_weighted_score() {
    let _ = env_logger::builder().is_test(true).try_init();
    let hard = from_pairs([("ok", true)]);

    let score = evaluate_location(&hard, &soft_abcd(), &weights_abcd());
    assert_relative_eq!(score, 0.64, epsilon = 1e-9);
    assert_eq!(validate_criteria(&hard, &soft_abcd(), &weights_abcd()), None);
}

#[test]
fn scenario_b_weights_out_of_tolerance() {
    let hard = from_pairs([("ok", true)]);
    let mut weights = weights_abcd();
    weights.insert("a".to_string(), 0.5);

    let sink = BufferedSink::new();
    assert_eq!(evaluate_location_with(&sink, &hard, &soft_abcd(), &weights), 0.0);

    let message = validate_criteria(&hard, &soft_abcd(), &weights).unwrap();
    assert!(message.contains("current sum: 1.20"), "{}", message);
    assert_eq!(sink.drain().len(), 1);
}

#[test]
fn scenario_c_hard_exclusion() {
    let hard = from_pairs([("zone_ok", false)]);
    assert_eq!(evaluate_location(&hard, &soft_abcd(), &weights_abcd()), 0.0);
}

#[test]
fn scenario_d_out_of_range_value() {
    let soft = from_pairs([("a", 1.5)]);
    let weights = from_pairs([("a", 1.0)]);

    let message = validate_criteria(&HardCriteria::new(), &soft, &weights).unwrap();
    assert!(message.contains("a: 1.5"), "{}", message);
    assert_eq!(evaluate_location(&HardCriteria::new(), &soft, &weights), 0.0);
}

#[test]
fn scenario_e_key_mismatch() {
    let soft = from_pairs([("a", 0.5)]);
    let weights = from_pairs([("b", 1.0)]);

    let message = validate_criteria(&HardCriteria::new(), &soft, &weights).unwrap();
    assert_eq!(message, "Missing weights for criteria: {a}");

    // Once `a` has a weight the extraneous `b` surfaces
    let weights = from_pairs([("a", 0.5), ("b", 0.5)]);
    let message = validate_criteria(&HardCriteria::new(), &soft, &weights).unwrap();
    assert_eq!(message, "Weights specified for non-existent criteria: {b}");
}

#[test]
fn invalid_input_distinguishable_from_exclusion() {
    let hard = from_pairs([("zone_ok", false)]);
    let soft = from_pairs([("a", 0.5)]);
    let weights = from_pairs([("b", 1.0)]);

    match assess_location(&hard, &soft, &weights) {
        Assessment::Invalid { error } => assert_eq!(error.kind(), ErrorKind::SchemaMismatch),
        other => panic!("expected invalid input, got {:?}", other),
    }
    match assess_location(&hard, &soft_abcd(), &weights_abcd()) {
        Assessment::Excluded { criterion } => assert_eq!(criterion, "zone_ok"),
        other => panic!("expected exclusion, got {:?}", other),
    }
}

#[test]
fn empty_soft_criteria_cannot_be_scored() {
    let hard = from_pairs([("ok", true)]);
    let assessment = assess_location(&hard, &SoftCriteria::new(), &SoftWeights::new());

    assert!(assessment.is_invalid());
    assert_eq!(assessment.score(), 0.0);
}
