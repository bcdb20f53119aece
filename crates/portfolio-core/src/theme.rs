//! Theme palettes.
//!
//! Three named palettes, each mapping to the primary/secondary/dark
//! color variables the stylesheet consumes. Lookup of an unknown name
//! returns `None` and the caller leaves the current theme untouched.

/// Theme name applied when no preference is stored
pub const DEFAULT_THEME: &str = "blue";

/// One named theme palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub dark: &'static str,
}

pub const BLUE: Palette = Palette {
    name: "blue",
    primary: "#4d5cfe",
    secondary: "#2d3fe0",
    dark: "#1a2033",
};

pub const GREEN: Palette = Palette {
    name: "green",
    primary: "#28a745",
    secondary: "#218838",
    dark: "#1e2b22",
};

pub const PURPLE: Palette = Palette {
    name: "purple",
    primary: "#6f42c1",
    secondary: "#5e37a6",
    dark: "#2a1f33",
};

/// All palettes, in switcher display order
pub const PALETTES: [&Palette; 3] = [&BLUE, &GREEN, &PURPLE];

/// Look up a palette by name
pub fn lookup(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().copied().find(|p| p.name == name)
}

impl Palette {
    /// Render the `:root` variable override block for this palette
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{\n  --primary-color: {};\n  --secondary-color: {};\n  --dark-color: {};\n}}",
            self.primary, self.secondary, self.dark
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_purple_has_fixed_values() {
        let palette = lookup("purple").unwrap();
        assert_eq!(palette.primary, "#6f42c1");
        assert_eq!(palette.secondary, "#5e37a6");
        assert_eq!(palette.dark, "#2a1f33");
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(lookup("unknown").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_default_theme_resolves() {
        assert_eq!(lookup(DEFAULT_THEME), Some(&BLUE));
    }

    #[test]
    fn test_css_variables_block() {
        let css = GREEN.css_variables();
        assert!(css.contains("--primary-color: #28a745"));
        assert!(css.contains("--secondary-color: #218838"));
        assert!(css.contains("--dark-color: #1e2b22"));
    }
}
