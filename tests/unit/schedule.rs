use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-6, "{a} != {b}");
}

#[test]
fn scales_to_target_preserving_ratios() {
    let out = schedule(&[5.0, 10.0, 15.0], 60.0).unwrap();
    assert_close(out[0], 10.0);
    assert_close(out[1], 20.0);
    assert_close(out[2], 30.0);
    assert_close(out.iter().sum::<f64>(), 60.0);
}

#[test]
fn sum_matches_target_for_awkward_inputs() {
    let nominal = [3.3, 7.7, 0.1, 12.9];
    let target = 47.123;
    let out = schedule(&nominal, target).unwrap();
    assert_close(out.iter().sum::<f64>(), target);

    // Pairwise ratios preserved.
    for i in 0..nominal.len() {
        for j in 0..nominal.len() {
            if nominal[j] > 0.0 {
                assert_close(out[i] / out[j], nominal[i] / nominal[j]);
            }
        }
    }
}

#[test]
fn shrinks_when_audio_is_shorter() {
    let out = schedule(&[10.0, 10.0], 5.0).unwrap();
    assert_close(out[0], 2.5);
    assert_close(out[1], 2.5);
}

#[test]
fn zero_duration_slide_is_allowed_within_positive_deck() {
    let out = schedule(&[0.0, 10.0], 30.0).unwrap();
    assert_close(out[0], 0.0);
    assert_close(out[1], 30.0);
}

#[test]
fn degenerate_inputs_error_instead_of_nan() {
    assert!(matches!(
        schedule(&[], 10.0),
        Err(DeckcastError::Scheduling(_))
    ));
    assert!(matches!(
        schedule(&[0.0, 0.0], 10.0),
        Err(DeckcastError::Scheduling(_))
    ));
    assert!(matches!(
        schedule(&[5.0], 0.0),
        Err(DeckcastError::Scheduling(_))
    ));
    assert!(matches!(
        schedule(&[5.0], -1.0),
        Err(DeckcastError::Scheduling(_))
    ));
    assert!(matches!(
        schedule(&[f64::NAN], 10.0),
        Err(DeckcastError::Scheduling(_))
    ));
    assert!(matches!(
        schedule(&[-1.0, 5.0], 10.0),
        Err(DeckcastError::Scheduling(_))
    ));
}
