use qk_app::SECTIONS;

pub fn show(ui: &mut egui::Ui) {
    for section in SECTIONS {
        ui.heading(section.title);
        ui.label(section.body);
        ui.add_space(6.0);
    }
}
