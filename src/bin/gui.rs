#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use salary_inflation::{
    app,
    chart::ChartBounds,
    config::{self, ThemeChoice},
    format,
    inflation::{
        parse_monthly_amount, CalculationResult, ChartPoint, RateTable, RateTableError, YearBound,
        YearRange,
    },
    logging, share,
};
use std::{fs, path::Path};

/// 월급 입력 증감 단위.
const SALARY_STEP: f64 = 1000.0;
const LOSS_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

fn main() -> Result<(), eframe::Error> {
    logging::init();
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed; using defaults");
        config::Config::default()
    });
    let table = match load_table(&app_cfg) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Ошибка: {e}");
            std::process::exit(1);
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(480.0, 720.0))
        .with_min_inner_size(egui::vec2(380.0, 420.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Калькулятор инфляции ЗП",
        native,
        Box::new(move |cc| {
            let mut gui = GuiApp::new(app_cfg, table);
            if let Some(path) = gui.config.custom_font_path.clone() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, &path) {
                    tracing::warn!(error = %e, "custom font not applied");
                    gui.font_load_error = Some(e);
                }
            }
            Box::new(gui)
        }),
    )
}

/// 설정의 표를 읽고, 실패하면 내장 표로 물러난다.
fn load_table(cfg: &config::Config) -> Result<RateTable, RateTableError> {
    cfg.rate_table().or_else(|e| {
        tracing::warn!(error = %e, "rate table override failed; using bundled table");
        RateTable::bundled()
    })
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 바이너리 폰트 바이트를 egui에 등록한다. 기본 폰트에 없는 ₽ 등을 위해 쓴다.
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

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Файл шрифта не найден: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Не удалось прочитать шрифт: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 테마 변형별 egui Visuals. System은 첫 프레임에 잡아 둔 시스템 값을 쓴다.
fn theme_visuals(theme: ThemeChoice, system: &egui::Visuals) -> egui::Visuals {
    match theme {
        ThemeChoice::System => system.clone(),
        ThemeChoice::Light => egui::Visuals::light(),
        ThemeChoice::Dark => egui::Visuals::dark(),
        ThemeChoice::SoftBlue => {
            let mut v = egui::Visuals::light();
            v.panel_fill = egui::Color32::from_rgb(236, 242, 250);
            v.window_fill = egui::Color32::from_rgb(244, 248, 253);
            v.extreme_bg_color = egui::Color32::from_rgb(250, 252, 255);
            v.selection.bg_fill = egui::Color32::from_rgb(96, 140, 200);
            v.hyperlink_color = egui::Color32::from_rgb(40, 90, 170);
            v
        }
    }
}

struct GuiApp {
    config: config::Config,
    table: RateTable,
    years: Vec<i32>,
    salary_input: String,
    range: YearRange,
    // 설정
    theme: ThemeChoice,
    ui_scale: f32,
    show_chart: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    save_status: Option<String>,
    show_settings_modal: bool,
    show_help_modal: bool,
    system_visuals: Option<egui::Visuals>,
    style_dirty: bool,
}

impl GuiApp {
    fn new(config: config::Config, table: RateTable) -> Self {
        let years = table.years();
        let range = YearRange::full(&table);
        Self {
            theme: config.theme,
            ui_scale: config.clamped_ui_scale(),
            show_chart: config.show_chart,
            custom_font_path: config.custom_font_path.clone().unwrap_or_default(),
            config,
            table,
            years,
            salary_input: String::new(),
            range,
            font_load_error: None,
            save_status: None,
            show_settings_modal: false,
            show_help_modal: false,
            system_visuals: None,
            style_dirty: true,
        }
    }

    /// 연도 선택. 반대쪽 끝을 넘으면 반대쪽이 따라온다.
    fn set_year(&mut self, bound: YearBound, year: i32) {
        self.range = self.range.apply_edit(bound, year);
    }

    /// 월급을 `delta`만큼 올리거나 내린다. 0 아래로는 내려가지 않는다.
    fn step_salary(&mut self, delta: f64) {
        let current = parse_monthly_amount(&self.salary_input).unwrap_or(0.0);
        let next = (current + delta).max(0.0);
        self.salary_input = format!("{}", next.round() as i64);
    }

    fn result(&self) -> Option<CalculationResult> {
        app::evaluate(&self.table, &self.salary_input, self.range)
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        let system = self
            .system_visuals
            .get_or_insert_with(|| ctx.style().visuals.clone())
            .clone();
        ctx.set_visuals(theme_visuals(self.theme, &system));
        ctx.set_pixels_per_point(self.ui_scale);
        self.style_dirty = false;
    }

    fn save_settings(&mut self) {
        self.config.theme = self.theme;
        self.config.ui_scale = self.ui_scale;
        self.config.show_chart = self.show_chart;
        self.config.custom_font_path = if self.custom_font_path.trim().is_empty() {
            None
        } else {
            Some(self.custom_font_path.trim().to_string())
        };
        self.save_status = Some(match self.config.save() {
            Ok(()) => "Сохранено.".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "settings not saved");
                format!("Ошибка сохранения: {e}")
            }
        });
    }

    fn year_combo(&mut self, ui: &mut egui::Ui, id: &str, bound: YearBound) {
        let current = match bound {
            YearBound::From => self.range.from,
            YearBound::To => self.range.to,
        };
        let mut picked = None;
        egui::ComboBox::from_id_source(id)
            .selected_text(current.to_string())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for &year in &self.years {
                    if ui.selectable_label(year == current, year.to_string()).clicked() {
                        picked = Some(year);
                    }
                }
            });
        if let Some(year) = picked {
            self.set_year(bound, year);
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        ui.label("Зарплата в месяц");
        ui.horizontal(|ui| {
            let width = (ui.available_width() - 70.0).max(80.0);
            ui.add(
                egui::TextEdit::singleline(&mut self.salary_input)
                    .hint_text("100 000")
                    .desired_width(width),
            );
            if ui.small_button("−").on_hover_text("−1000").clicked() {
                self.step_salary(-SALARY_STEP);
            }
            if ui.small_button("+").on_hover_text("+1000").clicked() {
                self.step_salary(SALARY_STEP);
            }
        });
        ui.add_space(8.0);
        ui.columns(2, |cols| {
            cols[0].label("С какого года");
            self.year_combo(&mut cols[0], "year_from", YearBound::From);
            cols[1].label("По какой год");
            self.year_combo(&mut cols[1], "year_to", YearBound::To);
        });
    }

    fn ui_summary(&self, ui: &mut egui::Ui, result: &CalculationResult) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label("Общая инфляция за период");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(format::format_percent(result.total_inflation_percent));
                });
            });
            ui.small(format::format_year_span(result.year_from, result.year_to));
            ui.separator();
            summary_row(ui, "Годовая зарплата", &format::format_money(result.annual_amount));
            ui.separator();
            ui.horizontal(|ui| {
                ui.label("📉 Потеря покупательной способности");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format::format_money(result.purchasing_power_loss))
                            .color(LOSS_COLOR)
                            .size(18.0)
                            .strong(),
                    );
                });
            });
            summary_row(
                ui,
                "Реальная покупательная способность",
                &format::format_money(result.real_value),
            );
            let missing = result.uncovered_year_count(&self.table);
            if missing > 0 {
                ui.add_space(4.0);
                ui.small(format!(
                    "Нет данных за {} г. из {}: они учтены как 0%.",
                    missing,
                    result.year_count()
                ));
            }
        });
    }

    fn ui_share(&self, ui: &mut egui::Ui, result: &CalculationResult) {
        let link = share::share_link(&self.config.share_service_url, result, &self.config.page_url);
        ui.hyperlink_to("Поделиться в Telegram", link);
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new("Настройки")
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Тема");
                ui.horizontal(|ui| {
                    for (label, theme) in [
                        ("Системная", ThemeChoice::System),
                        ("Светлая", ThemeChoice::Light),
                        ("Тёмная", ThemeChoice::Dark),
                        ("Голубая", ThemeChoice::SoftBlue),
                    ] {
                        if ui.selectable_value(&mut self.theme, theme, label).changed() {
                            self.style_dirty = true;
                        }
                    }
                });
                ui.separator();
                ui.label("Масштаб интерфейса");
                if ui
                    .add(egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x"))
                    .changed()
                {
                    self.style_dirty = true;
                }
                ui.checkbox(&mut self.show_chart, "Показывать график");
                ui.separator();
                ui.label("Шрифт (.ttf/.otf)");
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.custom_font_path);
                    if ui.button("Обзор…").clicked() {
                        if let Some(path) = FileDialog::new()
                            .add_filter("Font", &["ttf", "otf", "ttc"])
                            .pick_file()
                        {
                            self.custom_font_path = path.display().to_string();
                        }
                    }
                    if ui.button("Применить").clicked() {
                        self.font_load_error = load_custom_font(ctx, &self.custom_font_path).err();
                    }
                });
                if let Some(err) = &self.font_load_error {
                    ui.colored_label(LOSS_COLOR, err);
                }
                ui.separator();
                if ui.button("Сохранить настройки").clicked() {
                    self.save_settings();
                }
                if let Some(msg) = &self.save_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
    }

    fn ui_help(&mut self, ctx: &egui::Context) {
        let (first, last) = (self.table.min_year(), self.table.max_year());
        egui::Window::new("О программе")
            .collapsible(false)
            .resizable(true)
            .open(&mut self.show_help_modal)
            .show(ctx, |ui| {
                ui.label("Годовая зарплата делится на накопленный индекс цен за выбранные годы.");
                ui.label("Индекс = произведение (1 + инфляция/100) по годам, по порядку.");
                ui.label(format!("Данные об инфляции: {first} — {last}."));
                ui.label("Годы без данных считаются годами без инфляции.");
            });
    }
}

fn summary_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong());
        });
    });
}

/// 연도별 실질 가치 면적 차트를 그린다.
fn area_chart(ui: &mut egui::Ui, points: &[ChartPoint]) {
    let Some(bounds) = ChartBounds::from_points(points) else {
        return;
    };
    let desired = egui::vec2(ui.available_width(), 180.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let plot = egui::Rect::from_min_max(
        rect.min + egui::vec2(6.0, 6.0),
        rect.max - egui::vec2(6.0, 18.0),
    );
    let to_screen = |p: &ChartPoint| {
        let (x, y) = bounds.normalize(p);
        egui::pos2(plot.left() + x * plot.width(), plot.bottom() - y * plot.height())
    };

    let accent = ui.visuals().selection.bg_fill;
    let fill = accent.linear_multiply(0.3);
    let screen: Vec<egui::Pos2> = points.iter().map(to_screen).collect();
    for w in screen.windows(2) {
        let quad = vec![
            w[0],
            w[1],
            egui::pos2(w[1].x, plot.bottom()),
            egui::pos2(w[0].x, plot.bottom()),
        ];
        painter.add(egui::Shape::convex_polygon(quad, fill, egui::Stroke::NONE));
    }
    if screen.len() == 1 {
        painter.circle_filled(screen[0], 3.0, accent);
    } else {
        painter.add(egui::Shape::line(screen.clone(), egui::Stroke::new(2.0, accent)));
    }
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        ui.visuals().widgets.noninteractive.bg_stroke,
    );

    let label_color = ui.visuals().weak_text_color();
    for year in bounds.tick_years(6) {
        let (x, _) = bounds.normalize(&ChartPoint { year, value: 0.0 });
        painter.text(
            egui::pos2(plot.left() + x * plot.width(), rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            year.to_string(),
            egui::FontId::proportional(11.0),
            label_color,
        );
    }

    if let Some(pos) = response.hover_pos() {
        let x = ((pos.x - plot.left()) / plot.width()).clamp(0.0, 1.0);
        if let Some(i) = bounds.nearest_index(points, x) {
            painter.circle_filled(screen[i], 4.0, accent);
            response.on_hover_text(format!(
                "{}: {}",
                points[i].year,
                format::format_money(points[i].value)
            ));
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.style_dirty {
            self.apply_style(ctx);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("💰 Калькулятор инфляции ЗП");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("?").on_hover_text("О программе").clicked() {
                        self.show_help_modal = true;
                    }
                    if ui.button("⚙").on_hover_text("Настройки").clicked() {
                        self.show_settings_modal = true;
                    }
                });
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        if self.show_help_modal {
            self.ui_help(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_form(ui);
                    // 월급이 없거나 0 이하이면 요약 패널을 그리지 않는다.
                    if let Some(result) = self.result() {
                        ui.add_space(12.0);
                        self.ui_summary(ui, &result);
                        if self.show_chart {
                            ui.add_space(8.0);
                            area_chart(ui, &result.series(&self.table));
                        }
                        ui.add_space(8.0);
                        self.ui_share(ui, &result);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), RateTable::bundled().unwrap())
    }

    #[test]
    fn starts_with_full_range_and_no_result() {
        let gui = app();
        assert_eq!(gui.range.from, gui.table.min_year());
        assert_eq!(gui.range.to, gui.table.max_year());
        assert!(gui.result().is_none());
    }

    #[test]
    fn from_above_to_pulls_to_up() {
        let mut gui = app();
        gui.set_year(YearBound::To, 2010);
        gui.set_year(YearBound::From, 2015);
        assert_eq!(gui.range, YearRange { from: 2015, to: 2015 });
    }

    #[test]
    fn to_below_from_pulls_from_down() {
        let mut gui = app();
        gui.set_year(YearBound::From, 2015);
        gui.set_year(YearBound::To, 2012);
        assert_eq!(gui.range, YearRange { from: 2012, to: 2012 });
    }

    #[test]
    fn salary_steps_by_thousand_and_stops_at_zero() {
        let mut gui = app();
        gui.step_salary(SALARY_STEP);
        assert_eq!(gui.salary_input, "1000");
        gui.salary_input = "100 000".into();
        gui.step_salary(SALARY_STEP);
        assert_eq!(gui.salary_input, "101000");
        gui.salary_input = "500".into();
        gui.step_salary(-SALARY_STEP);
        assert_eq!(gui.salary_input, "0");
        assert!(gui.result().is_none());
    }

    #[test]
    fn result_appears_once_salary_is_entered() {
        let mut gui = app();
        gui.salary_input = "100000".into();
        gui.set_year(YearBound::From, 2023);
        gui.set_year(YearBound::To, 2023);
        let r = gui.result().unwrap();
        assert!((r.total_inflation_percent - 7.4).abs() < 1e-9);
    }

    #[test]
    fn theme_variants_pick_matching_mode() {
        let system = egui::Visuals::dark();
        assert!(!theme_visuals(ThemeChoice::Light, &system).dark_mode);
        assert!(theme_visuals(ThemeChoice::Dark, &system).dark_mode);
        assert!(theme_visuals(ThemeChoice::System, &system).dark_mode);
        let soft = theme_visuals(ThemeChoice::SoftBlue, &system);
        assert!(!soft.dark_mode);
        assert_eq!(soft.panel_fill, egui::Color32::from_rgb(236, 242, 250));
    }
}
