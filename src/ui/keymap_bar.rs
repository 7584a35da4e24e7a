//! Keymap help bar UI component.

use crate::app::ViewMode;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, view_mode: ViewMode, colors: &ThemeColors) {
    let keymap_text = format!(
        "q:quit | h/l:temperature | j/k:shear | H/L/J/K:big steps | Tab:view ({}) | r:reset | e:export | c:copy | T:theme",
        view_mode.name()
    );

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
