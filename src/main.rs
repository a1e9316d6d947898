use clap::Parser;

use wafer_prepay_roi::{app, config, i18n};

/// 웨이퍼 선급금 ROI 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "wafer_prepay_roi_cli", about = "Wafer prepayment ROI calculator (CLI)")]
struct Cli {
    /// 언어 코드 (auto/en-us/ko-kr/ko/en)
    #[arg(short = 'L', long = "lang", default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let resolved = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = i18n::Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref());
    app::run(&mut cfg, &mut tr)?;
    Ok(())
}
