use eframe::egui::{self, Ui};

use crate::config::DashboardConfig;
use crate::quotes::exchange::TargetCurrency;
use crate::quotes::fetch::JsonFetcher;
use crate::quotes::price::CryptoSymbol;
use crate::state::CryptoState;

use super::widgets::error_label;

pub fn show(ui: &mut Ui, crypto: &mut CryptoState, config: &DashboardConfig, fetcher: &dyn JsonFetcher) {
    ui.heading("Currency Monitoring");
    ui.label("Find the latest crypto price updates");

    // ---- Price ----
    egui::ComboBox::from_label("Choose a cryptocurrency")
        .selected_text(crypto.symbol.name())
        .show_ui(ui, |ui: &mut Ui| {
            for symbol in CryptoSymbol::ALL {
                ui.selectable_value(&mut crypto.symbol, symbol, symbol.name());
            }
        });

    crypto.refresh_price(fetcher, config);
    match &crypto.price {
        Some(Ok(quote)) => {
            ui.label(quote.message());
        }
        Some(Err(e)) => error_label(ui, e),
        None => {}
    }

    // ---- Converter ----
    ui.separator();
    ui.heading("Currency Converter");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Choose a currency");
        for currency in TargetCurrency::ALL {
            ui.radio_value(&mut crypto.currency, currency, currency.code());
        }
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter cost to be converted");
        let response = ui.add(
            egui::DragValue::new(&mut crypto.value)
                .speed(1.0)
                .max_decimals(2)
                .update_while_editing(false),
        );
        if response.drag_stopped() || response.lost_focus() {
            crypto.commit_value();
        }
    });

    crypto.refresh_conversion(fetcher, config);
    match &crypto.conversion {
        Some(Ok(conversion)) => {
            ui.strong(conversion.currency.title());
            ui.label(conversion.message());
            egui::CollapsingHeader::new("Exchange-rate response")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    egui::Grid::new("quotes_grid").striped(true).show(ui, |ui: &mut Ui| {
                        for (pair, rate) in &conversion.table.quotes {
                            ui.label(pair);
                            ui.label(rate.to_string());
                            ui.end_row();
                        }
                    });
                });
        }
        Some(Err(e)) => error_label(ui, e),
        None => {}
    }
}
