use chrono::Local;
use eframe::{self, egui};
use egui::ViewportBuilder;
use log::info;

use crate::export;
use crate::pagination::{self, DEFAULT_PAGE_SIZE};
use crate::persistence::SnapshotStore;
use crate::search;
use crate::store::ItemStore;
use crate::summary::{self, SummaryStats};

/// The single-screen ledger UI. All derived state (filtered view, page
/// slice, summary numbers) is recomputed from the store every frame.
pub struct LedgerApp {
    store: ItemStore,
    stock_input: String,
    price_input: String,
    error: String,
    search_term: String,
    current_page: usize, // 1-based
}

impl LedgerApp {
    pub fn new() -> Self {
        Self {
            store: ItemStore::open(SnapshotStore::new()),
            stock_input: String::new(),
            price_input: String::new(),
            error: String::new(),
            search_term: String::new(),
            current_page: 1,
        }
    }

    fn try_add(&mut self) {
        match self.store.add(&self.stock_input, &self.price_input) {
            Ok(item) => {
                info!("Added {}", item.name);
                self.stock_input.clear();
                self.price_input.clear();
                self.error.clear();
            }
            Err(e) => {
                self.error = e.to_string();
            }
        }
    }

    fn show_input_form(&mut self, ui: &mut egui::Ui) {
        let mut add_requested = false;

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Stock Quantity:");
                let stock_response = ui.add(
                    egui::TextEdit::singleline(&mut self.stock_input)
                        .desired_width(120.0)
                        .hint_text("Enter quantity"),
                );
                if stock_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    add_requested = true;
                }

                ui.label("Unit Price:");
                let price_response = ui.add(
                    egui::TextEdit::singleline(&mut self.price_input)
                        .desired_width(120.0)
                        .hint_text("Enter price"),
                );
                if price_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    add_requested = true;
                }

                if ui.button("Add Item").clicked() {
                    add_requested = true;
                }
            });

            if !self.error.is_empty() {
                ui.colored_label(egui::Color32::RED, self.error.as_str());
            }
        });

        if add_requested {
            self.try_add();
        }
    }

    fn show_search_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_term)
                    .desired_width(250.0)
                    .hint_text("Name, quantity, price or total..."),
            );
            if response.changed() {
                // New filter, back to the first page
                self.current_page = 1;
            }
            if ui.button("Clear").clicked() {
                self.search_term.clear();
                self.current_page = 1;
            }
        });
    }

    fn show_item_table(&mut self, ui: &mut egui::Ui) {
        let filtered = search::apply(self.store.items(), &self.search_term);

        // The paginator expects an in-range page, so clamp here
        let total_pages = pagination::total_pages(filtered.len(), DEFAULT_PAGE_SIZE);
        self.current_page = self.current_page.clamp(1, total_pages);
        let (page_items, _) = pagination::slice(&filtered, DEFAULT_PAGE_SIZE, self.current_page);

        if filtered.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                if self.store.is_empty() {
                    ui.label("No items added yet.");
                    ui.weak("Start by entering stock and price values.");
                } else {
                    ui.label("No items match your search.");
                }
            });
            return;
        }

        let start = (self.current_page - 1) * DEFAULT_PAGE_SIZE;
        ui.label(format!(
            "{} - {} of {} items",
            start + 1,
            start + page_items.len(),
            filtered.len()
        ));
        ui.add_space(5.0);

        // Collect the remove action and apply it after the grid
        let mut remove_id: Option<i64> = None;

        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 60.0)
            .show(ui, |ui| {
                egui::Grid::new("ledger_items")
                    .num_columns(5)
                    .spacing([20.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Name");
                        ui.strong("Quantity");
                        ui.strong("Price");
                        ui.strong("Total Value");
                        ui.strong("");
                        ui.end_row();

                        for item in page_items {
                            ui.label(&item.name);
                            ui.label(item.stock.to_string());
                            ui.label(format!("${:.2}", item.price));
                            ui.label(format!("${:.2}", item.total));
                            if ui.small_button("✕").clicked() {
                                remove_id = Some(item.id);
                            }
                            ui.end_row();
                        }
                    });
            });

        ui.add_space(5.0);
        ui.strong(format!(
            "Total Inventory Value: ${:.2}",
            self.store.total_value()
        ));

        if let Some(id) = remove_id {
            self.store.remove(id);
        }

        if total_pages > 1 {
            ui.add_space(5.0);
            self.show_pagination_controls(ui, total_pages);
        }
    }

    fn show_pagination_controls(&mut self, ui: &mut egui::Ui, total_pages: usize) {
        ui.horizontal(|ui| {
            if ui.button("⏮ First").clicked() && self.current_page > 1 {
                self.current_page = 1;
            }
            if ui.button("⏪ Previous").clicked() && self.current_page > 1 {
                self.current_page -= 1;
            }
            ui.label(format!("Page {} of {}", self.current_page, total_pages));
            if ui.button("Next ⏩").clicked() && self.current_page < total_pages {
                self.current_page += 1;
            }
            if ui.button("Last ⏭").clicked() && self.current_page < total_pages {
                self.current_page = total_pages;
            }
        });
    }

    fn show_summary_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Inventory Summary");
        ui.add_space(10.0);

        let stats = SummaryStats::compute(self.store.items());
        ui.horizontal(|ui| {
            ui.label("Total Items:");
            ui.strong(stats.item_count.to_string());
        });
        ui.horizontal(|ui| {
            ui.label("Total Value:");
            ui.strong(format!("${:.2}", stats.total_value));
        });
        ui.horizontal(|ui| {
            ui.label("Average Price:");
            ui.strong(format!("${:.2}", stats.average_price));
        });

        ui.add_space(15.0);
        ui.label("Value Distribution");
        for (item, share) in summary::top_share(self.store.items(), 3) {
            ui.horizontal(|ui| {
                ui.label(&item.name);
                ui.strong(format!("${:.2}", item.total));
            });
            ui.add(egui::ProgressBar::new((share / 100.0) as f32).show_percentage());
        }

        ui.add_space(20.0);
        ui.label("Quick Actions");
        if ui.button("Export Data").clicked() {
            self.export_csv();
        }
        if ui.button("Save Report").clicked() {
            self.export_html_report();
        }
    }

    /// CSV export of the full, unfiltered ledger
    fn export_csv(&self) {
        let date = Local::now().date_naive();
        let dialog = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(export::csv_export_filename(date));

        if let Some(path) = dialog.save_file() {
            let data = export::to_csv(self.store.items());
            match std::fs::write(&path, data) {
                Ok(()) => info!("Exported CSV to {}", path.display()),
                Err(e) => log::warn!("Failed to write CSV export: {}", e),
            }
        }
    }

    /// HTML report of the full, unfiltered ledger
    fn export_html_report(&self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(export::html_report_filename(Local::now().date_naive()));

        if let Some(path) = dialog.save_file() {
            let report = export::to_html_report(self.store.items(), Local::now());
            match std::fs::write(&path, report) {
                Ok(()) => info!("Saved report to {}", path.display()),
                Err(e) => log::warn!("Failed to write HTML report: {}", e),
            }
        }
    }
}

impl Default for LedgerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for LedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.store.is_empty() {
            egui::SidePanel::right("summary_panel")
                .min_width(220.0)
                .show(ctx, |ui| {
                    self.show_summary_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Inventory Calculator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(Local::now().format("%b %e").to_string());
                });
            });
            ui.add_space(10.0);

            self.show_input_form(ui);
            ui.add_space(10.0);

            self.show_search_controls(ui);
            ui.add_space(10.0);

            self.show_item_table(ui);
        });
    }
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Ledger",
        options,
        Box::new(|_cc| Ok(Box::new(LedgerApp::new()))),
    )
}
