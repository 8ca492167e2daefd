// tests/core.rs
use num_bigint::BigUint;
use train_probability::{
    Bindings, ConditionError, EngineConfig, EngineError, InputError, TrainProbabilityEngine,
    TrainingDistribution, compute,
};

fn engine() -> TrainProbabilityEngine {
    TrainProbabilityEngine::default()
}

/* ──────────────────────────────────────────────────────────────────────────
1) End-to-end probabilities
────────────────────────────────────────────────────────────────────────── */

#[test]
fn all_three_points_on_one_stat() {
    let p = compute(&[0, 0, 0, 0, 0], 1, "a>=3").unwrap();
    assert_eq!(p, 1.0 / 125.0);
    assert!((p - 0.008).abs() < 1e-15);
}

#[test]
fn already_satisfied_stays_satisfied() {
    let p = compute(&[3, 0, 0, 0, 0], 2, "a>=3").unwrap();
    assert_eq!(p, 1.0);
}

#[test]
fn at_least_one_point_exact_ratio() {
    // 1 - (4/5)^3 = 61/125
    let prob = engine().evaluate(&[0, 0, 0, 0, 0], 1, "a >= 1").unwrap();
    assert_eq!(prob.favorable, BigUint::from(61u32));
    assert_eq!(prob.outcomes, BigUint::from(125u32));
    assert_eq!(prob.points, 3);
    assert_eq!(prob.value(), 61.0 / 125.0);
}

#[test]
fn two_stats_summed_over_two_levels() {
    let prob = engine().evaluate(&[3, 3, 0, 0, 0], 4, "CON + POW >= 10").unwrap();
    assert_eq!(prob.favorable, BigUint::from(2800u32));
    assert_eq!(prob.outcomes, BigUint::from(15_625u32));
}

#[test]
fn equality_between_stats() {
    let prob = engine().evaluate(&[0, 0, 0, 0, 0], 2, "loc == vel").unwrap();
    assert_eq!(prob.favorable, BigUint::from(3989u32));
    assert_eq!(prob.outcomes, BigUint::from(15_625u32));
}

#[test]
fn tautology_is_exactly_one() {
    let cases: [(&[i64], i64); 4] = [
        (&[0, 0, 0, 0, 0], 0),
        (&[0, 0, 0, 0, 0], 4),
        (&[5, 1, 0, 3, 0], 5),
        (&[12, 9, 6, 3, 0], 14),
    ];
    for (dist, target) in cases {
        assert_eq!(compute(dist, target, "a>=0").unwrap(), 1.0, "{dist:?} -> {target}");
    }
}

#[test]
fn impossible_condition_is_zero() {
    let prob = engine().evaluate(&[0, 0, 0, 0, 0], 2, "a < 0").unwrap();
    assert!(prob.is_impossible());
    assert_eq!(prob.value(), 0.0);
    assert_eq!(prob.one_in(), None);
}

#[test]
fn one_in_n_form() {
    let prob = engine().evaluate(&[0, 0, 0, 0, 0], 1, "CON >= 3").unwrap();
    assert_eq!(prob.one_in(), Some(125.0));
    assert!(!prob.is_certain());
}

#[test]
fn both_vocabularies_agree() {
    let batting = compute(&[3, 0, 3, 0, 3], 5, "con >= 4 and EYE < 6").unwrap();
    let pitching = compute(&[3, 0, 3, 0, 3], 5, "LOC >= 4 and sta < 6").unwrap();
    let canonical = compute(&[3, 0, 3, 0, 3], 5, "a >= 4 and c < 6").unwrap();
    assert_eq!(batting, canonical);
    assert_eq!(pitching, canonical);
}

/* ──────────────────────────────────────────────────────────────────────────
2) No points left: a single deterministic outcome
────────────────────────────────────────────────────────────────────────── */

#[test]
fn zero_points_checks_current_line() {
    let e = engine();
    let yes = e.evaluate(&[3, 3, 0, 0, 0], 2, "a == 3 and b == 3").unwrap();
    assert_eq!(yes.points, 0);
    assert!(yes.is_certain());
    assert_eq!(yes.value(), 1.0);

    assert_eq!(compute(&[3, 3, 0, 0, 0], 2, "a > 3").unwrap(), 0.0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Levels and horizon
────────────────────────────────────────────────────────────────────────── */

#[test]
fn first_level_shifts_the_scale() {
    let one_based = TrainProbabilityEngine::new(EngineConfig::default().with_first_level(1));
    assert_eq!(one_based.compute(&[0, 0, 0, 0, 0], 2, "a>=3").unwrap(), 1.0 / 125.0);
    assert!(matches!(
        one_based.compute(&[0, 0, 0, 0, 0], 0, "a>=3"),
        Err(EngineError::InvalidInput(InputError::TargetBelowCurrent { target: 0, current: 1 }))
    ));
}

#[test]
fn horizon_bounds_are_inclusive() {
    let e = engine();
    let dist = TrainingDistribution::try_from(&[3i64, 0, 0, 0, 0][..]).unwrap();
    assert_eq!(e.points_remaining(&dist, 1), Ok(0));
    assert_eq!(e.points_remaining(&dist, 21), Ok(60));
    assert_eq!(
        e.points_remaining(&dist, 22),
        Err(InputError::BeyondHorizon { target: 22, current: 1, horizon: 20 })
    );
}

#[test]
fn extreme_targets_are_rejected_not_wrapped() {
    let e = engine();
    let dist = TrainingDistribution::try_from(&[3i64, 0, 0, 0, 0][..]).unwrap();
    assert_eq!(
        e.points_remaining(&dist, i64::MIN),
        Err(InputError::TargetBelowCurrent { target: i64::MIN, current: 1 })
    );
    assert_eq!(
        e.points_remaining(&dist, i64::MAX),
        Err(InputError::BeyondHorizon { target: i64::MAX, current: 1, horizon: 20 })
    );
    assert_eq!(
        compute(&[3, 0, 0, 0, 0], i64::MIN, "a>=0"),
        Err(EngineError::InvalidInput(InputError::TargetBelowCurrent {
            target: i64::MIN,
            current: 1
        }))
    );
}

#[test]
fn full_horizon_tautology_covers_every_sequence() {
    let prob = engine().evaluate(&[3, 0, 0, 0, 0], 21, "a>=0").unwrap();
    assert_eq!(prob.points, 60);
    assert_eq!(prob.outcomes, BigUint::from(5u8).pow(60));
    assert_eq!(prob.favorable, prob.outcomes);
    assert!(prob.is_certain());
    assert_eq!(prob.value(), 1.0);
}

#[test]
fn full_horizon_condition_and_complement_partition_the_space() {
    let e = engine();
    let yes = e.evaluate(&[0, 0, 0, 0, 0], 20, "a >= 15 and b < 10").unwrap();
    let no = e.evaluate(&[0, 0, 0, 0, 0], 20, "not (a >= 15 and b < 10)").unwrap();
    assert_eq!(yes.points, 60);
    assert!(!yes.is_impossible() && !yes.is_certain());
    assert_eq!(&yes.favorable + &no.favorable, BigUint::from(5u8).pow(60));
    assert!((yes.value() + no.value() - 1.0).abs() < 1e-12);
}

#[test]
fn horizon_is_configurable() {
    let short = TrainProbabilityEngine::new(EngineConfig::default().with_horizon(2));
    assert!(short.compute(&[0, 0, 0, 0, 0], 2, "a >= 1").is_ok());
    assert!(matches!(
        short.compute(&[0, 0, 0, 0, 0], 3, "a >= 1"),
        Err(EngineError::InvalidInput(InputError::BeyondHorizon { horizon: 2, .. }))
    ));
}

/* ──────────────────────────────────────────────────────────────────────────
4) Failure modes
────────────────────────────────────────────────────────────────────────── */

#[test]
fn malformed_distributions() {
    assert_eq!(
        compute(&[0, 0, 0, 0], 1, "a>=0"),
        Err(EngineError::InvalidInput(InputError::WrongLength { expected: 5, found: 4 }))
    );
    assert_eq!(
        compute(&[0, 0, -3, 3, 0], 1, "a>=0"),
        Err(EngineError::InvalidInput(InputError::NegativeStat { index: 2, value: -3 }))
    );
    assert_eq!(
        compute(&[1, 0, 0, 0, 0], 1, "a>=0"),
        Err(EngineError::InvalidInput(InputError::NotMultipleOfLevel { sum: 1, per_level: 3 }))
    );
    assert_eq!(
        compute(&[6, 0, 0, 0, 0], 1, "a>=0"),
        Err(EngineError::InvalidInput(InputError::TargetBelowCurrent { target: 1, current: 2 }))
    );
}

#[test]
fn malformed_conditions() {
    assert!(matches!(
        compute(&[0, 0, 0, 0, 0], 1, "a >="),
        Err(EngineError::InvalidCondition(ConditionError::UnexpectedEnd { .. }))
    ));
    assert!(matches!(
        compute(&[0, 0, 0, 0, 0], 1, "hp > 3"),
        Err(EngineError::InvalidCondition(ConditionError::UnknownVariable { .. }))
    ));
    assert_eq!(
        compute(&[0, 0, 0, 0, 0], 1, "   "),
        Err(EngineError::InvalidCondition(ConditionError::Empty))
    );
}

#[test]
fn division_by_zero_surfaces_during_enumeration() {
    assert_eq!(
        compute(&[0, 0, 0, 0, 0], 1, "a / b > 1"),
        Err(EngineError::InvalidCondition(ConditionError::DivisionByZero))
    );
}

#[test]
fn partition_cap_refuses_instead_of_truncating() {
    let capped = TrainProbabilityEngine::new(EngineConfig::default().with_max_partitions(10));
    let err = capped.compute(&[0, 0, 0, 0, 0], 1, "a >= 1").unwrap_err();
    assert_eq!(err, EngineError::ComputationLimitExceeded { partitions: 35, limit: 10 });
    assert!(!err.is_retryable());

    // zero points never enumerates, so the cap does not apply
    assert!(capped.compute(&[0, 0, 0, 0, 0], 0, "a >= 1").is_ok());
}

#[test]
fn default_cap_follows_horizon() {
    assert_eq!(EngineConfig::default().partition_limit(), 635_376);
    assert_eq!(EngineConfig::default().with_horizon(1).partition_limit(), 35);
}

/* ──────────────────────────────────────────────────────────────────────────
5) Custom conditions through the trait seam
────────────────────────────────────────────────────────────────────────── */

#[test]
fn closure_conditions() {
    let dist = TrainingDistribution::try_from(&[0i64, 0, 0, 0, 0][..]).unwrap();
    let at_least_one = |s: &Bindings| s.0[0] >= 1;
    let prob = engine().evaluate_with(&dist, 1, &at_least_one).unwrap();
    assert_eq!(prob.favorable, BigUint::from(61u32));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() {
    let seq = engine();
    let par = TrainProbabilityEngine::new(EngineConfig::default().with_parallel(true));
    for cond in ["a >= 4 and b <= 3", "CON + POW > EYE * 2", "not (fb == brk)"] {
        let a = seq.evaluate(&[3, 0, 6, 0, 3], 8, cond).unwrap();
        let b = par.evaluate(&[3, 0, 6, 0, 3], 8, cond).unwrap();
        assert_eq!(a, b, "{cond}");
    }
}
