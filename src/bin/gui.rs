#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use wafer_prepay_roi::{
    config,
    finance::{prepay_roi, PrepayRoiInput},
    format, i18n,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Wafer Prepay ROI Calculator",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

fn legend_toggle(ui: &mut egui::Ui, title: &str, body: &str, state: &mut bool) {
    ui.horizontal(|ui| {
        ui.checkbox(state, title);
    });
    if *state {
        ui.add(egui::Label::new(egui::RichText::new(body)).wrap(true));
    }
}

/// 결과 지표 하나를 카드 형태로 표시한다.
fn metric_card(ui: &mut egui::Ui, label: &str, value: &str, tip: &str) {
    egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_min_width(150.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).small());
                ui.label(egui::RichText::new(value).strong().size(18.0));
            });
        })
        .response
        .on_hover_text(tip);
}

/// 가로 막대 비교 차트. 막대 길이는 절대값 최대치 기준으로 정규화한다.
fn bar_chart(ui: &mut egui::Ui, bars: &[(String, f64, egui::Color32)], fmt: &dyn Fn(f64) -> String) {
    let width = ui.available_width().min(480.0);
    let row_h = 24.0;
    let label_w = 160.0;
    let value_w = 80.0;
    let (rect, _resp) = ui.allocate_exact_size(
        egui::vec2(width, row_h * bars.len() as f32),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let max = bars.iter().map(|b| b.1.abs()).fold(0.0_f64, f64::max);
    let track_w = (width - label_w - value_w).max(40.0);
    let text_color = ui.visuals().text_color();
    let strong_color = ui.visuals().strong_text_color();
    for (idx, (label, value, color)) in bars.iter().enumerate() {
        let y = rect.top() + row_h * idx as f32;
        let frac = if max > 0.0 {
            (value.abs() / max) as f32
        } else {
            0.0
        };
        painter.text(
            egui::pos2(rect.left(), y + row_h * 0.5),
            egui::Align2::LEFT_CENTER,
            label,
            egui::FontId::proportional(13.0),
            text_color,
        );
        let bar = egui::Rect::from_min_size(
            egui::pos2(rect.left() + label_w, y + 5.0),
            egui::vec2(track_w * frac, row_h - 10.0),
        );
        painter.rect_filled(bar, egui::Rounding::same(2.0), *color);
        painter.text(
            egui::pos2(rect.left() + label_w + track_w + 8.0, y + row_h * 0.5),
            egui::Align2::LEFT_CENTER,
            fmt(*value),
            egui::FontId::proportional(13.0),
            strong_color,
        );
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    apply_initial_view_size: bool,
    // 해설 토글
    show_guide_formulas: bool,
    show_guide_rationale: bool,
    // 계산기 입력
    annual_wafer_demand: f64,
    wafer_cost: f64,
    prepayment_pct: f64,
    price_discount_pct: f64,
    flexibility_band_pct: f64,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    theme: ThemeChoice,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculator,
    Guide,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 한글 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 ttf/ttc
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR-Regular.ttf"] {
        let asset_path = Path::new(cand);
        if asset_path.exists() {
            let bytes =
                fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Korean font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let defaults = PrepayRoiInput::default();
        Self {
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Calculator,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            apply_initial_view_size: true,
            show_guide_formulas: true,
            show_guide_rationale: true,
            annual_wafer_demand: defaults.annual_wafer_demand,
            wafer_cost: defaults.wafer_cost,
            prepayment_pct: defaults.prepayment_pct,
            price_discount_pct: defaults.price_discount_pct,
            flexibility_band_pct: defaults.flexibility_band_pct,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            theme: ThemeChoice::System,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 현재 화면의 입력 필드를 엔진 입력으로 모은다.
    fn current_input(&self) -> PrepayRoiInput {
        PrepayRoiInput {
            annual_wafer_demand: self.annual_wafer_demand,
            wafer_cost: self.wafer_cost,
            prepayment_pct: self.prepayment_pct,
            price_discount_pct: self.price_discount_pct,
            flexibility_band_pct: self.flexibility_band_pct,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Calculator, txt("gui.tab.calculator", "ROI Calculator")),
            (Tab::Guide, txt("gui.tab.guide", "How it works")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch tab"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.calc.heading", "Prepayment ROI"),
            &txt(
                "gui.calc.tip",
                "Estimate the return of prepaying a wafer supply agreement.",
            ),
        );
        ui.add_space(8.0);

        label_with_tip(
            ui,
            &txt("gui.calc.inputs_label", "Negotiation inputs"),
            &txt(
                "gui.calc.inputs_tip",
                "All five inputs feed the calculation; results update as you type.",
            ),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("roi_inputs")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.calc.input.demand", "Annual wafer demand"),
                        &txt(
                            "gui.calc.input.demand_tip",
                            "Wafers procured per year (typical 10,000-50,000)",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.annual_wafer_demand).speed(500.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.calc.input.wafer_cost", "Wafer cost"),
                        &txt(
                            "gui.calc.input.wafer_cost_tip",
                            "Price per wafer in currency units (typical 6,000-25,000)",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.wafer_cost).speed(100.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.calc.input.prepayment", "Prepayment %"),
                        &txt(
                            "gui.calc.input.prepayment_tip",
                            "Share of the annual cost paid upfront",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.prepayment_pct).speed(0.5));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.calc.input.discount", "Price discount %"),
                        &txt(
                            "gui.calc.input.discount_tip",
                            "Unit-price discount granted for prepaying",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.price_discount_pct).speed(0.5));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.calc.input.flex_band", "Flexibility band %"),
                        &txt(
                            "gui.calc.input.flex_band_tip",
                            "Allowed volume variation without penalty",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.flexibility_band_pct).speed(1.0));
                    ui.end_row();
                });
        });
        ui.add_space(10.0);

        // 즉시 모드이므로 입력이 바뀐 프레임마다 엔진이 새로 계산된다.
        let result = prepay_roi(self.current_input());
        let undefined = txt("gui.calc.roi_undefined", "undefined");
        let undefined_tip = txt(
            "gui.calc.roi_undefined_tip",
            "Prepayment is 0, so the return ratio has no denominator.",
        );

        ui.label(txt("gui.calc.results_label", "Derived metrics"));
        egui::Grid::new("roi_results")
            .num_columns(3)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                metric_card(
                    ui,
                    &txt("gui.calc.result.base_cost", "Base cost"),
                    &format::millions(result.base_cost),
                    &txt(
                        "gui.calc.result.base_cost_tip",
                        "Annual demand × wafer cost, before any discount",
                    ),
                );
                metric_card(
                    ui,
                    &txt("gui.calc.result.prepayment_amount", "Prepayment amount"),
                    &format::millions(result.prepayment_amount),
                    &txt(
                        "gui.calc.result.prepayment_amount_tip",
                        "Cash paid upfront: base cost × prepayment %",
                    ),
                );
                metric_card(
                    ui,
                    &txt("gui.calc.result.cost_savings", "Cost savings"),
                    &format::millions(result.cost_savings),
                    &txt(
                        "gui.calc.result.cost_savings_tip",
                        "Annual discount earned: base cost × discount %",
                    ),
                );
                ui.end_row();
                metric_card(
                    ui,
                    &txt("gui.calc.result.flexibility_value", "Flexibility value"),
                    &format::millions(result.flexibility_value),
                    &txt(
                        "gui.calc.result.flexibility_value_tip",
                        "Monetized volume option: base cost × band % × 0.20",
                    ),
                );
                metric_card(
                    ui,
                    &txt("gui.calc.result.base_roi", "Base ROI"),
                    &format::roi_or(result.base_roi_pct, &undefined),
                    &if result.base_roi_pct.is_some() {
                        txt("gui.calc.result.base_roi_tip", "Savings ÷ prepayment × 100")
                    } else {
                        undefined_tip.clone()
                    },
                );
                metric_card(
                    ui,
                    &txt("gui.calc.result.total_roi", "Total ROI"),
                    &format::roi_or(result.total_roi_pct, &undefined),
                    &if result.total_roi_pct.is_some() {
                        txt(
                            "gui.calc.result.total_roi_tip",
                            "(Savings + flexibility value) ÷ prepayment × 100",
                        )
                    } else {
                        undefined_tip.clone()
                    },
                );
                ui.end_row();
            });
        ui.add_space(12.0);

        label_with_tip(
            ui,
            &txt("gui.calc.chart_money", "Cash comparison (millions)"),
            &txt(
                "gui.calc.chart_money_tip",
                "Prepayment outlay vs. the annual benefits it buys.",
            ),
        );
        bar_chart(
            ui,
            &[
                (
                    txt("gui.calc.result.prepayment_amount", "Prepayment amount"),
                    result.prepayment_amount,
                    egui::Color32::from_rgb(0xd0, 0x7a, 0x3c),
                ),
                (
                    txt("gui.calc.result.cost_savings", "Cost savings"),
                    result.cost_savings,
                    egui::Color32::from_rgb(0x4c, 0x9f, 0x70),
                ),
                (
                    txt("gui.calc.result.flexibility_value", "Flexibility value"),
                    result.flexibility_value,
                    egui::Color32::from_rgb(0x4a, 0x7f, 0xc1),
                ),
            ],
            &|v| format::millions(v),
        );
        ui.add_space(10.0);

        label_with_tip(
            ui,
            &txt("gui.calc.chart_roi", "ROI comparison"),
            &txt(
                "gui.calc.chart_roi_tip",
                "Base ROI counts the discount only; total ROI adds the flexibility value.",
            ),
        );
        match (result.base_roi_pct, result.total_roi_pct) {
            (Some(base), Some(total)) => {
                bar_chart(
                    ui,
                    &[
                        (
                            txt("gui.calc.result.base_roi", "Base ROI"),
                            base,
                            egui::Color32::from_rgb(0x8a, 0x8a, 0x8a),
                        ),
                        (
                            txt("gui.calc.result.total_roi", "Total ROI"),
                            total,
                            egui::Color32::from_rgb(0x4c, 0x9f, 0x70),
                        ),
                    ],
                    &|v| format::percent(v),
                );
            }
            _ => {
                ui.label(egui::RichText::new(undefined).italics())
                    .on_hover_text(undefined_tip);
            }
        }
    }

    fn ui_guide(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.guide.heading", "How the model works"),
            &txt("gui.guide.tip", "Formulas and the business rationale behind them."),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            legend_toggle(
                ui,
                &txt("gui.guide.formulas_title", "Formulas"),
                &txt(
                    "gui.guide.formulas_body",
                    "Base cost = annual demand × wafer cost\n\
                     Prepayment amount = base cost × (prepayment / 100)\n\
                     Cost savings = base cost × (discount / 100)\n\
                     Flexibility value = base cost × (band / 100) × 0.20\n\
                     Base ROI = savings / prepayment × 100\n\
                     Total ROI = (savings + flexibility value) / prepayment × 100",
                ),
                &mut self.show_guide_formulas,
            );
            ui.add_space(6.0);
            legend_toggle(
                ui,
                &txt("gui.guide.rationale_title", "Business rationale"),
                &txt(
                    "gui.guide.rationale_body",
                    "Prepaying shares the supplier's capacity-investment risk and buys a \
                     unit-price discount in return.\nThe flexibility band is an option to move \
                     volume without penalty; the fixed 0.20 margin factor turns it into money.\n\
                     The gap between total and base ROI is the negotiating value of the \
                     flexibility clause.\nWhen prepayment is 0 there is nothing at risk, so both \
                     ROI ratios are reported as undefined.",
                ),
                &mut self.show_guide_rationale,
            );
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(860.0, 640.0)));
            self.apply_initial_view_size = false;
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        match self.theme {
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
            ThemeChoice::System => {}
        }

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Wafer Prepay ROI Calculator"));
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.theme", "Theme"));
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.theme, ThemeChoice::System, "System");
                        ui.selectable_value(&mut self.theme, ThemeChoice::Light, "Light");
                        ui.selectable_value(&mut self.theme, ThemeChoice::Dark, "Dark");
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_pick", "Browse...")).clicked() {
                            if let Some(path) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = path.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply font")).clicked() {
                            match load_custom_font(ctx, &self.custom_font_path) {
                                Ok(()) => self.font_load_error = None,
                                Err(e) => self.font_load_error = Some(e),
                            }
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(
                                &mut self.lang_input,
                                "en-us".into(),
                                "English (US)",
                            );
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline ROI calculator for wafer-supply prepayment negotiations",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.hint",
                        "Metrics recompute on every input change; money is shown in millions, \
                         ratios to one decimal.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Guide => self.ui_guide(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_from_reference_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.annual_wafer_demand, 30_000.0);
        assert_eq!(app.wafer_cost, 8_000.0);
        assert_eq!(app.prepayment_pct, 10.0);
        assert_eq!(app.price_discount_pct, 5.0);
        assert_eq!(app.flexibility_band_pct, 30.0);
        assert!(matches!(app.tab, Tab::Calculator));
    }

    #[test]
    fn current_input_maps_fields_one_to_one() {
        let mut app = GuiApp::new(config::Config::default());
        app.annual_wafer_demand = 60_000.0;
        app.prepayment_pct = 20.0;
        let input = app.current_input();
        assert_eq!(input.annual_wafer_demand, 60_000.0);
        assert_eq!(input.prepayment_pct, 20.0);
        assert_eq!(input.wafer_cost, 8_000.0);
    }

    #[test]
    fn reference_defaults_give_expected_roi() {
        let app = GuiApp::new(config::Config::default());
        let res = prepay_roi(app.current_input());
        assert!((res.base_roi_pct.unwrap() - 50.0).abs() < 1e-9);
        assert!((res.total_roi_pct.unwrap() - 110.0).abs() < 1e-9);
    }
}
