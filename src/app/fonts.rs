use std::sync::Arc;

use eframe::egui;

// egui 內建字體沒有 CJK 字形，按平台慣用路徑找一個系統字體掛上
const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
];

/// Best effort: the window still opens without a match, with placeholder
/// glyphs for the Chinese labels.
pub fn install_cjk_fallback(ctx: &egui::Context) {
    for path in FALLBACK_FONT_PATHS {
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        let mut fonts = egui::FontDefinitions::default();
        fonts.font_data.insert(
            "cjk-fallback".to_owned(),
            Arc::new(egui::FontData::from_owned(bytes)),
        );
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .push("cjk-fallback".to_owned());
        fonts
            .families
            .entry(egui::FontFamily::Monospace)
            .or_default()
            .push("cjk-fallback".to_owned());
        ctx.set_fonts(fonts);
        tracing::debug!("Loaded CJK fallback font from {}", path);
        return;
    }
    tracing::warn!("No CJK font found on this system; labels may not render");
}
