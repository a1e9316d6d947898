/// 유연성 밴드의 금액 노출에 곱하는 업계 마진 계수. 협상 모델 고정값이므로
/// 사용자 설정으로 노출하지 않는다.
pub const FLEXIBILITY_MARGIN_FACTOR: f64 = 0.20;

/// 선급금 ROI 계산 입력.
#[derive(Debug, Clone)]
pub struct PrepayRoiInput {
    /// 연간 웨이퍼 수요 [장/년]
    pub annual_wafer_demand: f64,
    /// 웨이퍼 단가 [원/장]
    pub wafer_cost: f64,
    /// 선급금 비율 (%)
    pub prepayment_pct: f64,
    /// 선급 할인율 (%)
    pub price_discount_pct: f64,
    /// 물량 유연성 밴드 (%)
    pub flexibility_band_pct: f64,
}

impl Default for PrepayRoiInput {
    fn default() -> Self {
        Self {
            annual_wafer_demand: 30_000.0,
            wafer_cost: 8_000.0,
            prepayment_pct: 10.0,
            price_discount_pct: 5.0,
            flexibility_band_pct: 30.0,
        }
    }
}

/// 선급금 ROI 계산 결과.
#[derive(Debug, Clone)]
pub struct PrepayRoiResult {
    /// 연간 기준 조달 비용 [원]
    pub base_cost: f64,
    /// 선급금 [원]
    pub prepayment_amount: f64,
    /// 할인 절감액 [원/년]
    pub cost_savings: f64,
    /// 유연성 옵션 가치 [원/년]
    pub flexibility_value: f64,
    /// 할인만 반영한 ROI (%). 선급금이 0이면 정의되지 않는다.
    pub base_roi_pct: Option<f64>,
    /// 할인 + 유연성 가치 ROI (%). 선급금이 0이면 정의되지 않는다.
    pub total_roi_pct: Option<f64>,
}

/// 다섯 개의 협상 변수로부터 여섯 개의 재무 지표를 계산한다.
///
/// 입력 범위를 검증하지 않는다. 음수/0/소수 모두 그대로 산식에 통과시키며,
/// 유일한 특수 처리는 선급금 0일 때 ROI를 `None`으로 보고하는 것뿐이다.
pub fn prepay_roi(input: PrepayRoiInput) -> PrepayRoiResult {
    let base_cost = input.annual_wafer_demand * input.wafer_cost;
    let prepayment_amount = base_cost * (input.prepayment_pct / 100.0);
    let cost_savings = base_cost * (input.price_discount_pct / 100.0);
    let flexibility_value =
        base_cost * (input.flexibility_band_pct / 100.0) * FLEXIBILITY_MARGIN_FACTOR;
    let (base_roi_pct, total_roi_pct) = if prepayment_amount != 0.0 {
        (
            Some(cost_savings / prepayment_amount * 100.0),
            Some((cost_savings + flexibility_value) / prepayment_amount * 100.0),
        )
    } else {
        (None, None)
    };
    PrepayRoiResult {
        base_cost,
        prepayment_amount,
        cost_savings,
        flexibility_value,
        base_roi_pct,
        total_roi_pct,
    }
}
