// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Operator sign-in prompt.

/// Result of the sign-in prompt.
pub enum LoginAction {
    None,
    Submit,
    Back,
}

/// Display the centred password prompt.
///
/// Editing the password clears a previous failure message.
pub fn show(ctx: &egui::Context, password: &mut String, failed: &mut bool) -> LoginAction {
    let mut action = LoginAction::None;

    egui::Window::new("Director Access")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.set_width(300.0);
            ui.add_space(6.0);

            let response = ui.add(
                egui::TextEdit::singleline(password)
                    .password(true)
                    .hint_text("Enter Password")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                *failed = false;
            }
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if *failed {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), "Incorrect password.");
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Enter").clicked() || entered {
                    action = LoginAction::Submit;
                }
                if ui.button("Back to site").clicked() {
                    action = LoginAction::Back;
                }
            });
        });

    action
}
