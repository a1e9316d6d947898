//! CLI/GUI가 공유하는 표시 포맷. 금액은 백만 단위 소수 1자리, 비율은 소수 1자리.

/// 금액을 백만 단위로 환산해 "240.0M" 형태로 돌려준다.
pub fn millions(amount: f64) -> String {
    format!("{:.1}M", amount / 1_000_000.0)
}

/// 비율을 소수 1자리 퍼센트 문자열로 돌려준다.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// ROI 값을 표시한다. 정의되지 않으면(선급금 0) placeholder를 그대로 쓴다.
pub fn roi_or(value: Option<f64>, placeholder: &str) -> String {
    match value {
        Some(v) => percent(v),
        None => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millions_one_decimal() {
        assert_eq!(millions(240_000_000.0), "240.0M");
        assert_eq!(millions(14_400_000.0), "14.4M");
        assert_eq!(millions(0.0), "0.0M");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(percent(50.0), "50.0%");
        assert_eq!(percent(110.0), "110.0%");
    }

    #[test]
    fn undefined_roi_uses_placeholder() {
        assert_eq!(roi_or(None, "N/A"), "N/A");
        assert_eq!(roi_or(Some(12.34), "N/A"), "12.3%");
    }
}
