use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::finance::{prepay_roi, PrepayRoiInput, PrepayRoiResult};
use crate::format;
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculator,
    Guide,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATOR));
    println!("{}", tr.t(keys::MAIN_MENU_GUIDE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculator),
            "2" => return Ok(MenuChoice::Guide),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// ROI 계산 메뉴를 처리한다. 다섯 입력을 받아 여섯 지표를 출력한다.
pub fn handle_calculator(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::CALC_NOTE_DEFAULTS));
    let defaults = PrepayRoiInput::default();
    let input = PrepayRoiInput {
        annual_wafer_demand: read_f64_default(
            tr,
            tr.t(keys::PROMPT_ANNUAL_DEMAND),
            defaults.annual_wafer_demand,
        )?,
        wafer_cost: read_f64_default(tr, tr.t(keys::PROMPT_WAFER_COST), defaults.wafer_cost)?,
        prepayment_pct: read_f64_default(
            tr,
            tr.t(keys::PROMPT_PREPAYMENT_PCT),
            defaults.prepayment_pct,
        )?,
        price_discount_pct: read_f64_default(
            tr,
            tr.t(keys::PROMPT_DISCOUNT_PCT),
            defaults.price_discount_pct,
        )?,
        flexibility_band_pct: read_f64_default(
            tr,
            tr.t(keys::PROMPT_FLEX_BAND_PCT),
            defaults.flexibility_band_pct,
        )?,
    };
    print_results(tr, &prepay_roi(input));
    Ok(())
}

/// 산식/배경 설명 메뉴를 처리한다.
pub fn handle_guide(tr: &Translator) {
    println!("{}", tr.t(keys::GUIDE_HEADING));
    println!("{}", tr.t(keys::GUIDE_FORMULA_BASE_COST));
    println!("{}", tr.t(keys::GUIDE_FORMULA_PREPAYMENT));
    println!("{}", tr.t(keys::GUIDE_FORMULA_SAVINGS));
    println!("{}", tr.t(keys::GUIDE_FORMULA_FLEX));
    println!("{}", tr.t(keys::GUIDE_FORMULA_BASE_ROI));
    println!("{}", tr.t(keys::GUIDE_FORMULA_TOTAL_ROI));
    println!();
    println!("{}", tr.t(keys::GUIDE_RATIONALE_1));
    println!("{}", tr.t(keys::GUIDE_RATIONALE_2));
    println!("{}", tr.t(keys::GUIDE_RATIONALE_3));
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &mut Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let code = match sel.trim() {
        "1" => "ko-kr",
        "2" => "en-us",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.language = code.to_string();
    *tr = Translator::new_with_pack(code, cfg.language_pack_dir.as_deref());
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn print_results(tr: &Translator, result: &PrepayRoiResult) {
    let undefined = tr.t(keys::RESULT_ROI_UNDEFINED);
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{} {}",
        tr.t(keys::RESULT_BASE_COST),
        format::millions(result.base_cost)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_PREPAYMENT_AMOUNT),
        format::millions(result.prepayment_amount)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_COST_SAVINGS),
        format::millions(result.cost_savings)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_FLEXIBILITY_VALUE),
        format::millions(result.flexibility_value)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_BASE_ROI),
        format::roi_or(result.base_roi_pct, undefined)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_TOTAL_ROI),
        format::roi_or(result.total_roi_pct, undefined)
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 숫자를 읽되 빈 입력이면 기본값을 돌려준다.
fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} ({default}): "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
