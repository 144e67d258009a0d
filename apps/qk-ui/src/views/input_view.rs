use qk_project::schema::ParameterFile;

/// Parameter inputs. Returns true when any value changed.
pub fn show(ui: &mut egui::Ui, params: &mut ParameterFile) -> bool {
    ui.heading("User Inputs");
    ui.separator();

    let mut changed = false;
    egui::Grid::new("inputs_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let rows: [(&str, &mut f64, f64); 7] = [
                ("Length of the structure (m)", &mut params.length_m, 1.0),
                ("Wave speed (m/s)", &mut params.wave_speed_mps, 0.1),
                ("Stiffness (N/m)", &mut params.stiffness_n_per_m, 0.1),
                ("Mass (kg)", &mut params.mass_kg, 0.1),
                ("Frequency of the wave (Hz)", &mut params.frequency_hz, 0.1),
                ("Time (s)", &mut params.duration_s, 0.5),
                ("Damping ratio", &mut params.damping_ratio, 0.01),
            ];
            for (label, value, speed) in rows {
                ui.label(label);
                changed |= ui
                    .add(egui::DragValue::new(value).speed(speed).max_decimals(4))
                    .changed();
                ui.end_row();
            }

            ui.label("Samples");
            changed |= ui
                .add(egui::DragValue::new(&mut params.samples).range(2..=100_000))
                .changed();
            ui.end_row();
        });

    ui.separator();
    if ui.button("Reset to defaults").clicked() {
        *params = ParameterFile::default();
        changed = true;
    }

    changed
}
