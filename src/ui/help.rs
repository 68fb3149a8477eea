//! Seitenpanel mit Bedienungsanleitung.

/// Rendert die einklappbare Anleitung im rechten Seitenpanel.
pub fn render_help_panel(ctx: &egui::Context) {
    egui::SidePanel::right("help_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Anleitung")
                .default_open(true)
                .show(ui, |ui| {
                    ui.label("Linksklick: Kontrollpunkt anhängen");
                    ui.label("Punkt ziehen: Kontrollpunkt verschieben");
                    ui.label("Rechtsklick: letzten Punkt entfernen");
                    ui.label("Slider: Parameter t zwischen 0 und 1");
                    ui.separator();
                    ui.label("R: alle Punkte entfernen");
                    ui.label("B: Bézier-Kurve ein-/ausblenden");
                    ui.label("Entf / Backspace: letzten Punkt entfernen");
                    ui.separator();
                    ui.label(
                        egui::RichText::new(
                            "Grün: Kontrollpolygon, Orange/Grau: Zwischenstufen, \
                             Gelb: Kurvenpunkt, Schwarz: Kurve",
                        )
                        .small(),
                    );
                });
        });
}
