use super::*;

fn env_of(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn override_wins_over_term() {
    let env = env_of(&[("NBGO_COLOR_SUPPORT", "16"), ("TERM", "xterm-256color")]);
    assert_eq!(color_support_from(env), TerminalColorSupport::Ansi16);
}

#[test]
fn detects_from_colorterm_and_term() {
    assert_eq!(
        color_support_from(env_of(&[("COLORTERM", "truecolor")])),
        TerminalColorSupport::TrueColor
    );
    assert_eq!(
        color_support_from(env_of(&[("TERM", "screen-256color")])),
        TerminalColorSupport::Ansi256
    );
    assert_eq!(
        color_support_from(env_of(&[("TERM", "vt100")])),
        TerminalColorSupport::Ansi16
    );
}

#[test]
fn default_theme_uses_indexed_accent() {
    let theme = UiTheme::default();
    assert_eq!(theme.accent_fg, Color::Indexed(39));
    assert_eq!(theme.desc_style().fg, Some(Color::Indexed(242)));
}
