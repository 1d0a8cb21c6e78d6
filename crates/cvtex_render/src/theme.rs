//! Symbolic icon and color lookup tables.
//!
//! Configurations refer to icons and colors by symbolic name; the tables
//! below map those names to fontawesome5 commands and to color identifiers
//! defined in the document preamble. Unrecognized names resolve to the
//! fallback entries rather than failing the run.

/// Fallback icon command for unrecognized icon names.
pub const FALLBACK_ICON: &str = "\\faStar";

/// Fallback color identifier for unrecognized color names.
pub const FALLBACK_COLOR: &str = "accentblue";

/// Symbolic icon name to fontawesome5 command.
const ICONS: &[(&str, &str)] = &[
    ("Users", "\\faUsers"),
    ("Layers", "\\faLayerGroup"),
    ("Activity", "\\faChartLine"),
    ("Code", "\\faCode"),
    ("Crown", "\\faCrown"),
    ("CheckSquare", "\\faCheckSquare"),
    ("Package", "\\faBoxOpen"),
    ("Palette", "\\faPalette"),
    ("Zap", "\\faBolt"),
    ("Database", "\\faDatabase"),
    ("Network", "\\faNetworkWired"),
    ("Server", "\\faServer"),
    ("Settings", "\\faCogs"),
    ("Cog", "\\faCog"),
    ("Box", "\\faBox"),
    ("Calendar", "\\faCalendarAlt"),
    ("Tasks", "\\faTasks"),
    ("GraduationCap", "\\faGraduationCap"),
    ("Heart", "\\faHeart"),
    ("PlayCircle", "\\faPlayCircle"),
    ("Home", "\\faHome"),
];

/// Symbolic color name to preamble-defined color identifier.
const COLORS: &[(&str, &str)] = &[
    ("blue", "accentblue"),
    ("green", "accentgreen"),
    ("purple", "accentpurple"),
    ("orange", "accentorange"),
    ("cyan", "accentcyan"),
    ("red", "accentred"),
    ("yellow", "accentyellow"),
    ("pink", "accentpink"),
    ("gray", "textgray"),
];

/// Resolve a symbolic icon name to its fontawesome5 command.
pub fn icon_command(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, command)| *command)
        .unwrap_or(FALLBACK_ICON)
}

/// Resolve a symbolic color name to a defined color identifier.
pub fn color_token(name: &str) -> &'static str {
    COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, token)| *token)
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon() {
        assert_eq!(icon_command("Users"), "\\faUsers");
        assert_eq!(icon_command("GraduationCap"), "\\faGraduationCap");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_command("Teapot"), FALLBACK_ICON);
        assert_eq!(icon_command(""), FALLBACK_ICON);
    }

    #[test]
    fn test_known_color() {
        assert_eq!(color_token("green"), "accentgreen");
        assert_eq!(color_token("gray"), "textgray");
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(color_token("chartreuse"), FALLBACK_COLOR);
    }
}
