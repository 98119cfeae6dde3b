use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use eframe::egui;

use crate::app::session::Session;
use crate::config::AppConfig;
use crate::core::format;
use crate::core::model::QueryRequest;
use crate::core::ports::QueryExecutor;
use crate::utils::error::TesterError;

/// Single-window controller. Each submission spawns one ephemeral worker
/// thread; its sole result comes back over an mpsc channel that the update
/// loop drains on the UI thread.
pub struct RequestTesterApp<E: QueryExecutor + 'static> {
    session: Session,
    executor: Arc<E>,
    pending: Option<Receiver<String>>,
}

impl<E: QueryExecutor + 'static> RequestTesterApp<E> {
    pub fn new(config: &AppConfig, executor: E) -> Self {
        Self {
            session: Session::new(config),
            executor: Arc::new(executor),
            pending: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Validates the form and, if it passes, hands the request to a worker.
    /// No-op while a request is already in flight.
    pub fn submit(&mut self, ctx: &egui::Context) {
        if self.session.is_busy() {
            return;
        }
        if let Some(request) = self.session.begin_submit() {
            self.dispatch(request, ctx);
        }
    }

    fn dispatch(&mut self, request: QueryRequest, ctx: &egui::Context) {
        tracing::info!("Sending request to {}", request.target_url);

        let (tx, rx) = mpsc::channel();
        self.pending = Some(rx);

        let executor = Arc::clone(&self.executor);
        let ctx = ctx.clone();
        thread::spawn(move || {
            let panel = match executor.execute(&request) {
                Ok(response) => {
                    tracing::info!("Request completed with status {}", response.status_code);
                    format::render_response(&response)
                }
                Err(e) => {
                    tracing::warn!("Request failed ({}): {}", e.category(), e);
                    format::render_error(&e)
                }
            };
            // 窗口關閉後 channel 已斷開，結果直接丟棄
            let _ = tx.send(panel);
            ctx.request_repaint();
        });
    }

    /// Drains at most one worker result per frame on the UI thread.
    pub fn poll_worker(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(panel) => {
                self.pending = None;
                self.session.finish(panel);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // worker panicked before sending anything
                let e = TesterError::Unknown("后台线程异常退出".to_string());
                tracing::error!("❌ Worker thread died ({}): {}", e.category(), e);
                self.pending = None;
                self.session.finish(format::render_error(&e));
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("服务配置").strong());
            egui::Grid::new("service_config").num_columns(2).show(ui, |ui| {
                ui.label("服务地址:");
                ui.add(egui::TextEdit::singleline(&mut self.session.url_input).desired_width(360.0));
                ui.end_row();

                ui.label("参数字段名:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.session.field_name_input)
                        .desired_width(160.0),
                );
                ui.end_row();
            });
        });

        ui.horizontal(|ui| {
            ui.label("参数值:");
            ui.add(
                egui::TextEdit::singleline(&mut self.session.field_value_input)
                    .desired_width(240.0),
            );
        });
    }

    fn show_result(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label(egui::RichText::new("响应结果").strong());
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let mut panel = self.session.result.as_str();
                    ui.add(
                        egui::TextEdit::multiline(&mut panel)
                            .desired_width(f32::INFINITY)
                            .desired_rows(8),
                    );
                });
        });
    }

    fn show_warning_modal(&mut self, ctx: &egui::Context) {
        let Some(warning) = self.session.warning.clone() else {
            return;
        };
        let modal = egui::Modal::new(egui::Id::new("form_warning")).show(ctx, |ui| {
            ui.label(&warning);
            ui.separator();
            if ui.button("确定").clicked() {
                self.session.dismiss_warning();
            }
        });
        if modal.should_close() {
            self.session.dismiss_warning();
        }
    }
}

impl<E: QueryExecutor + 'static> eframe::App for RequestTesterApp<E> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.session.status).color(egui::Color32::GRAY));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_form(ui);

            ui.add_space(4.0);
            let submit = ui.add_enabled(!self.session.is_busy(), egui::Button::new("🔍 发送请求"));
            if submit.clicked() {
                self.submit(ctx);
            }
            ui.add_space(4.0);

            self.show_result(ui);
        });

        self.show_warning_modal(ctx);
    }
}
