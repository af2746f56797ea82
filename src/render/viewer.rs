//! Native chart window
//!
//! Opens an eframe window with the payoff line, a dashed zero line and
//! break-even markers. `render` returns once the window is closed.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use super::{ChartRenderer, PayoffChart};
use crate::config::ViewerConfig;
use crate::core::{PayoffError, PayoffResult};

/// Renders charts in a native window
pub struct EguiViewer {
    config: ViewerConfig,
}

impl EguiViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }
}

impl Default for EguiViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ChartRenderer for EguiViewer {
    fn render(&mut self, chart: &PayoffChart) -> PayoffResult<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.config.size)
                .with_title(chart.title.clone()),
            run_and_return: true,
            ..Default::default()
        };

        tracing::debug!("Opening payoff chart with {} points", chart.curve.len());

        let app = PayoffApp {
            chart: chart.clone(),
            show_break_evens: self.config.show_break_evens,
        };

        eframe::run_native(&chart.title, options, Box::new(move |_cc| Box::new(app)))
            .map_err(|e| PayoffError::render(e.to_string()))
    }
}

struct PayoffApp {
    chart: PayoffChart,
    show_break_evens: bool,
}

impl eframe::App for PayoffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("portfolio").show(ctx, |ui| {
            ui.heading("Portfolio");
            ui.separator();
            for line in &self.chart.positions {
                ui.label(line);
            }

            ui.separator();
            ui.heading("Summary");
            for line in self.chart.summary() {
                ui.label(line);
            }

            ui.separator();
            ui.checkbox(&mut self.show_break_evens, "Show break-evens");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.chart.title);

            let points = self.chart.curve.points();

            Plot::new("payoff")
                .x_axis_label(self.chart.x_label.clone())
                .y_axis_label(self.chart.y_label.clone())
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    // Zero P/L reference
                    plot_ui.hline(
                        HLine::new(0.0)
                            .color(egui::Color32::GRAY)
                            .width(1.0)
                            .style(LineStyle::Dashed { length: 5.0 }),
                    );

                    if self.show_break_evens {
                        for &price in &self.chart.break_evens {
                            plot_ui.vline(
                                VLine::new(price)
                                    .name(format!("BE {:.2}", price))
                                    .color(egui::Color32::YELLOW)
                                    .width(1.0)
                                    .style(LineStyle::Dotted { spacing: 4.0 }),
                            );
                        }
                    }

                    plot_ui.line(
                        Line::new(PlotPoints::new(points))
                            .name(&self.chart.series_name)
                            .color(egui::Color32::LIGHT_BLUE)
                            .width(2.0),
                    );
                });
        });
    }
}
