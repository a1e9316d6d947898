use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATOR: &str = "main_menu.calculator";
    pub const MAIN_MENU_GUIDE: &str = "main_menu.guide";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calculator.heading";
    pub const CALC_NOTE_DEFAULTS: &str = "calculator.note_defaults";
    pub const PROMPT_ANNUAL_DEMAND: &str = "prompt.annual_demand";
    pub const PROMPT_WAFER_COST: &str = "prompt.wafer_cost";
    pub const PROMPT_PREPAYMENT_PCT: &str = "prompt.prepayment_pct";
    pub const PROMPT_DISCOUNT_PCT: &str = "prompt.discount_pct";
    pub const PROMPT_FLEX_BAND_PCT: &str = "prompt.flex_band_pct";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_BASE_COST: &str = "result.base_cost";
    pub const RESULT_PREPAYMENT_AMOUNT: &str = "result.prepayment_amount";
    pub const RESULT_COST_SAVINGS: &str = "result.cost_savings";
    pub const RESULT_FLEXIBILITY_VALUE: &str = "result.flexibility_value";
    pub const RESULT_BASE_ROI: &str = "result.base_roi";
    pub const RESULT_TOTAL_ROI: &str = "result.total_roi";
    pub const RESULT_ROI_UNDEFINED: &str = "result.roi_undefined";

    pub const GUIDE_HEADING: &str = "guide.heading";
    pub const GUIDE_FORMULA_BASE_COST: &str = "guide.formula.base_cost";
    pub const GUIDE_FORMULA_PREPAYMENT: &str = "guide.formula.prepayment";
    pub const GUIDE_FORMULA_SAVINGS: &str = "guide.formula.savings";
    pub const GUIDE_FORMULA_FLEX: &str = "guide.formula.flex";
    pub const GUIDE_FORMULA_BASE_ROI: &str = "guide.formula.base_roi";
    pub const GUIDE_FORMULA_TOTAL_ROI: &str = "guide.formula.total_roi";
    pub const GUIDE_RATIONALE_1: &str = "guide.rationale.1";
    pub const GUIDE_RATIONALE_2: &str = "guide.rationale.2";
    pub const GUIDE_RATIONALE_3: &str = "guide.rationale.3";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Wafer Prepay ROI Calculator ===",
        MAIN_MENU_CALCULATOR => "1) ROI 계산기",
        MAIN_MENU_GUIDE => "2) 산식/배경 설명",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALC_HEADING => "\n-- 선급금 ROI 계산 --",
        CALC_NOTE_DEFAULTS => "참고: 값을 비워두고 엔터를 치면 괄호 안 기본값을 사용합니다.",
        PROMPT_ANNUAL_DEMAND => "연간 웨이퍼 수요 [장/년]",
        PROMPT_WAFER_COST => "웨이퍼 단가 [원/장]",
        PROMPT_PREPAYMENT_PCT => "선급금 비율 [%]",
        PROMPT_DISCOUNT_PCT => "선급 할인율 [%]",
        PROMPT_FLEX_BAND_PCT => "유연성 밴드 [%]",
        RESULT_HEADING => "\n-- 계산 결과 --",
        RESULT_BASE_COST => "기준 조달 비용:",
        RESULT_PREPAYMENT_AMOUNT => "선급금:",
        RESULT_COST_SAVINGS => "할인 절감액:",
        RESULT_FLEXIBILITY_VALUE => "유연성 가치:",
        RESULT_BASE_ROI => "기본 ROI:",
        RESULT_TOTAL_ROI => "종합 ROI:",
        RESULT_ROI_UNDEFINED => "정의되지 않음 (선급금 0)",
        GUIDE_HEADING => "\n-- 산식/배경 설명 --",
        GUIDE_FORMULA_BASE_COST => "기준 조달 비용 = 연간 수요 × 웨이퍼 단가",
        GUIDE_FORMULA_PREPAYMENT => "선급금 = 기준 비용 × (선급금 비율 / 100)",
        GUIDE_FORMULA_SAVINGS => "할인 절감액 = 기준 비용 × (할인율 / 100)",
        GUIDE_FORMULA_FLEX => "유연성 가치 = 기준 비용 × (밴드 / 100) × 0.20 (업계 마진 계수)",
        GUIDE_FORMULA_BASE_ROI => "기본 ROI = 절감액 / 선급금 × 100",
        GUIDE_FORMULA_TOTAL_ROI => "종합 ROI = (절감액 + 유연성 가치) / 선급금 × 100",
        GUIDE_RATIONALE_1 => {
            "선급금은 공급사의 캐파 투자 리스크를 분담하는 대가로 단가 할인을 끌어낸다."
        }
        GUIDE_RATIONALE_2 => {
            "유연성 밴드는 수요 변동 시 위약 없이 물량을 조정할 수 있는 옵션이며, 마진 계수 0.20으로 금액화한다."
        }
        GUIDE_RATIONALE_3 => {
            "종합 ROI가 기본 ROI보다 크게 나오는 폭이 곧 유연성 조항의 협상 가치다."
        }
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Wafer Prepay ROI Calculator ===",
        MAIN_MENU_CALCULATOR => "1) ROI calculator",
        MAIN_MENU_GUIDE => "2) Formula / rationale guide",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- Prepayment ROI calculation --",
        CALC_NOTE_DEFAULTS => "Note: press enter on an empty line to keep the default in parentheses.",
        PROMPT_ANNUAL_DEMAND => "Annual wafer demand [wafers/yr]",
        PROMPT_WAFER_COST => "Wafer cost [KRW/wafer]",
        PROMPT_PREPAYMENT_PCT => "Prepayment [%]",
        PROMPT_DISCOUNT_PCT => "Price discount [%]",
        PROMPT_FLEX_BAND_PCT => "Flexibility band [%]",
        RESULT_HEADING => "\n-- Results --",
        RESULT_BASE_COST => "Base cost:",
        RESULT_PREPAYMENT_AMOUNT => "Prepayment amount:",
        RESULT_COST_SAVINGS => "Cost savings:",
        RESULT_FLEXIBILITY_VALUE => "Flexibility value:",
        RESULT_BASE_ROI => "Base ROI:",
        RESULT_TOTAL_ROI => "Total ROI:",
        RESULT_ROI_UNDEFINED => "undefined (prepayment is 0)",
        GUIDE_HEADING => "\n-- Formula / rationale guide --",
        GUIDE_FORMULA_BASE_COST => "Base cost = annual demand × wafer cost",
        GUIDE_FORMULA_PREPAYMENT => "Prepayment amount = base cost × (prepayment / 100)",
        GUIDE_FORMULA_SAVINGS => "Cost savings = base cost × (discount / 100)",
        GUIDE_FORMULA_FLEX => "Flexibility value = base cost × (band / 100) × 0.20 (industry margin factor)",
        GUIDE_FORMULA_BASE_ROI => "Base ROI = savings / prepayment × 100",
        GUIDE_FORMULA_TOTAL_ROI => "Total ROI = (savings + flexibility value) / prepayment × 100",
        GUIDE_RATIONALE_1 => "Prepaying shares the supplier's capacity-investment risk and buys a unit-price discount in return.",
        GUIDE_RATIONALE_2 => "The flexibility band is an option to move volume without penalty; it is monetized with the 0.20 margin factor.",
        GUIDE_RATIONALE_3 => "The gap between total and base ROI is the negotiating value of the flexibility clause.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko-kr", Some("en-us")), "ko-kr");
    }

    #[test]
    fn auto_falls_back_to_config() {
        assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
    }

    #[test]
    fn english_translator_serves_english_strings() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::RESULT_BASE_ROI), "Base ROI:");
        assert_eq!(tr.language(), Language::En);
    }
}
