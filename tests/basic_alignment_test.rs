//! Basic alignment functionality test
//! Simple validation that the public pipeline works end to end

use medalign::alignment::{edit_distance, needleman_wunsch, EditCosts, ScoringScheme};
use medalign::{compute, EditOp, MedConfig};

#[test]
fn test_basic_needleman_wunsch() {
    println!("🧬 Testing basic Needleman-Wunsch alignment...");

    // Test perfect match
    let source: Vec<char> = "ACGTACGT".chars().collect();
    let scoring = ScoringScheme::default();

    let alignment = needleman_wunsch(&source, &source, &scoring, '-');

    println!("Perfect match result:");
    println!("  Score: {}", alignment.score);
    println!("  CIGAR: {}", alignment.pair.cigar_string());

    assert_eq!(alignment.score, 8, "8 matches × 1 = 8");
    assert_eq!(alignment.pair.cigar_string(), "8=");

    // Test with mismatch
    let target: Vec<char> = "ACTTACGT".chars().collect(); // One mismatch at position 2
    let alignment2 = needleman_wunsch(&source, &target, &scoring, '-');

    println!("\nOne mismatch result:");
    println!("  Score: {}", alignment2.score);
    println!("  CIGAR: {}", alignment2.pair.cigar_string());

    assert!(alignment2.score < alignment.score,
           "Mismatch should have lower score: {} vs {}", alignment2.score, alignment.score);
    assert_eq!(alignment2.pair.cigar_string(), "2=1X5=");

    println!("✅ Basic Needleman-Wunsch test passed!");
}

#[test]
fn test_scoring_defaults() {
    println!("🎯 Testing default costs and weights...");

    let costs = EditCosts::default();
    assert_eq!((costs.insert, costs.delete, costs.substitute), (1, 1, 2));
    println!("✅ Default edit costs: {:?}", costs);

    let scoring = ScoringScheme::default();
    assert_eq!((scoring.match_score, scoring.mismatch_score, scoring.gap), (1, -1, -1));
    println!("✅ Default scoring scheme: {:?}", scoring);
}

#[test]
fn test_distance_vs_pipeline() {
    println!("⚖️  Testing edit_distance against the full pipeline...");

    let source: Vec<char> = "intention".chars().collect();
    let target: Vec<char> = "execution".chars().collect();

    let direct = edit_distance(&source, &target, &EditCosts::default());
    let result = compute("intention", "execution", &MedConfig::default())
        .expect("default configuration is valid");

    println!("Direct distance: {}, pipeline distance: {}", direct, result.distance);
    assert_eq!(direct, result.distance);
    assert_eq!(direct, 8);

    let edits = result.transformation.edit_count();
    println!("Transformation uses {} edits over {} steps", edits, result.transformation.steps.len());
    assert_eq!(
        edits + result.transformation.count(EditOp::None),
        result.transformation.steps.len()
    );

    println!("✅ Pipeline agrees with direct computation!");
}
