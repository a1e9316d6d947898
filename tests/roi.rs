use wafer_prepay_roi::finance::{prepay_roi, PrepayRoiInput, FLEXIBILITY_MARGIN_FACTOR};

const EPS: f64 = 1e-9;

#[test]
fn reference_scenario_matches_expected_metrics() {
    let res = prepay_roi(PrepayRoiInput::default());
    assert!((res.base_cost - 240_000_000.0).abs() < EPS);
    assert!((res.prepayment_amount - 24_000_000.0).abs() < EPS);
    assert!((res.cost_savings - 12_000_000.0).abs() < EPS);
    assert!((res.flexibility_value - 14_400_000.0).abs() < EPS);
    assert!((res.base_roi_pct.expect("roi defined") - 50.0).abs() < EPS);
    assert!((res.total_roi_pct.expect("roi defined") - 110.0).abs() < EPS);
}

#[test]
fn base_cost_is_demand_times_unit_cost() {
    let res = prepay_roi(PrepayRoiInput {
        annual_wafer_demand: 12_345.0,
        wafer_cost: 6_789.0,
        ..PrepayRoiInput::default()
    });
    assert!((res.base_cost - 12_345.0 * 6_789.0).abs() < EPS);
}

#[test]
fn margin_factor_is_fixed_at_020() {
    assert!((FLEXIBILITY_MARGIN_FACTOR - 0.20).abs() < EPS);
    let res = prepay_roi(PrepayRoiInput {
        flexibility_band_pct: 100.0,
        ..PrepayRoiInput::default()
    });
    // 밴드 100%일 때 유연성 가치는 기준 비용의 정확히 20%.
    assert!((res.flexibility_value - res.base_cost * 0.20).abs() < EPS);
}

#[test]
fn zero_discount_and_band_give_zero_roi() {
    let res = prepay_roi(PrepayRoiInput {
        price_discount_pct: 0.0,
        flexibility_band_pct: 0.0,
        ..PrepayRoiInput::default()
    });
    assert_eq!(res.cost_savings, 0.0);
    assert_eq!(res.flexibility_value, 0.0);
    assert_eq!(res.base_roi_pct, Some(0.0));
    assert_eq!(res.total_roi_pct, Some(0.0));
}

#[test]
fn zero_prepayment_reports_roi_undefined() {
    let res = prepay_roi(PrepayRoiInput {
        prepayment_pct: 0.0,
        ..PrepayRoiInput::default()
    });
    assert_eq!(res.prepayment_amount, 0.0);
    assert!(res.cost_savings > 0.0);
    assert_eq!(res.base_roi_pct, None);
    assert_eq!(res.total_roi_pct, None);
}

#[test]
fn negative_prepayment_still_computes_through() {
    // 분모가 0이 아니면 부호와 무관하게 산식을 그대로 통과시킨다.
    let res = prepay_roi(PrepayRoiInput {
        prepayment_pct: -10.0,
        ..PrepayRoiInput::default()
    });
    assert!(res.prepayment_amount < 0.0);
    assert!((res.base_roi_pct.expect("roi defined") + 50.0).abs() < EPS);
}

#[test]
fn total_roi_never_below_base_roi_for_nonnegative_flex() {
    for band in [0.0, 5.0, 30.0, 100.0] {
        let res = prepay_roi(PrepayRoiInput {
            flexibility_band_pct: band,
            ..PrepayRoiInput::default()
        });
        assert!(res.total_roi_pct.expect("roi defined") >= res.base_roi_pct.expect("roi defined"));
    }
}

#[test]
fn doubling_demand_doubles_money_but_not_roi() {
    let base = prepay_roi(PrepayRoiInput::default());
    let doubled = prepay_roi(PrepayRoiInput {
        annual_wafer_demand: 60_000.0,
        ..PrepayRoiInput::default()
    });
    assert!((doubled.base_cost - base.base_cost * 2.0).abs() < EPS);
    assert!((doubled.prepayment_amount - base.prepayment_amount * 2.0).abs() < EPS);
    assert!((doubled.cost_savings - base.cost_savings * 2.0).abs() < EPS);
    assert!((doubled.flexibility_value - base.flexibility_value * 2.0).abs() < EPS);
    assert!((doubled.base_roi_pct.unwrap() - base.base_roi_pct.unwrap()).abs() < EPS);
    assert!((doubled.total_roi_pct.unwrap() - base.total_roi_pct.unwrap()).abs() < EPS);
}

#[test]
fn compute_is_deterministic() {
    let input = PrepayRoiInput {
        annual_wafer_demand: 17_250.5,
        wafer_cost: 9_999.9,
        prepayment_pct: 12.5,
        price_discount_pct: 3.3,
        flexibility_band_pct: 22.0,
    };
    let a = prepay_roi(input.clone());
    let b = prepay_roi(input);
    assert_eq!(a.base_cost.to_bits(), b.base_cost.to_bits());
    assert_eq!(a.prepayment_amount.to_bits(), b.prepayment_amount.to_bits());
    assert_eq!(a.cost_savings.to_bits(), b.cost_savings.to_bits());
    assert_eq!(a.flexibility_value.to_bits(), b.flexibility_value.to_bits());
    assert_eq!(
        a.base_roi_pct.map(f64::to_bits),
        b.base_roi_pct.map(f64::to_bits)
    );
    assert_eq!(
        a.total_roi_pct.map(f64::to_bits),
        b.total_roi_pct.map(f64::to_bits)
    );
}

#[test]
fn fractional_inputs_are_accepted_unvalidated() {
    let res = prepay_roi(PrepayRoiInput {
        annual_wafer_demand: 0.5,
        wafer_cost: 1.25,
        prepayment_pct: 0.1,
        price_discount_pct: 150.0, // 범위를 벗어나도 거부하지 않는다
        flexibility_band_pct: 0.0,
    });
    assert!((res.base_cost - 0.625).abs() < EPS);
    assert!((res.cost_savings - 0.9375).abs() < EPS);
    assert!(res.base_roi_pct.is_some());
}
