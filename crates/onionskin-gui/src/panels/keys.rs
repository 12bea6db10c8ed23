use crate::app::OnionskinApp;

/// Global keys, handled before any panel gets a chance to consume them.
pub fn handle(ctx: &egui::Context, app: &mut OnionskinApp) {
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.shell.handle_escape();
    }
    if ctx.input(|i| i.key_pressed(egui::Key::Slash)) {
        app.shell.handle_slash(ctx.wants_keyboard_input());
    }
    if ctx.input_mut(|i| i.consume_shortcut(&super::COMPARE_SHORTCUT)) {
        super::compare::toggle(app);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&super::OPEN_SHORTCUT)) {
        super::compare::open_overlay_file(app);
    }
}
