//! Stylesheets and styling tool configs.

use kiln_core::domain::{Framework, Language, Styling};

use super::vite::VitePlugin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub extension: &'static str,
    pub content: &'static str,
}

const PLAIN_CSS: &str = "\
:root {
  font-family: system-ui, sans-serif;
  line-height: 1.5;
}

body {
  margin: 0;
  min-height: 100vh;
}
";

/// The global stylesheet for a styling choice. Preprocessors change the
/// extension; everything else is plain CSS.
pub fn global_stylesheet(styling: Option<Styling>) -> Stylesheet {
    match styling {
        Some(Styling::Tailwind) => Stylesheet {
            extension: "css",
            content: "@import \"tailwindcss\";\n",
        },
        Some(Styling::Scss) => Stylesheet {
            extension: "scss",
            content: "$font-stack: system-ui, sans-serif;\n\nbody {\n  margin: 0;\n  min-height: 100vh;\n  font-family: $font-stack;\n}\n",
        },
        Some(Styling::Less) => Stylesheet {
            extension: "less",
            content: "@font-stack: system-ui, sans-serif;\n\nbody {\n  margin: 0;\n  min-height: 100vh;\n  font-family: @font-stack;\n}\n",
        },
        _ => Stylesheet {
            extension: "css",
            content: PLAIN_CSS,
        },
    }
}

pub const CSS_MODULE: &str = "\
.app {
  display: grid;
  place-items: center;
  min-height: 100vh;
}
";

/// Vite plugin the styling choice needs, if any.
pub fn vite_plugin(styling: Option<Styling>) -> Option<VitePlugin> {
    match styling? {
        Styling::Tailwind => Some(VitePlugin::new(
            "import tailwindcss from '@tailwindcss/vite';",
            "tailwindcss()",
        )),
        Styling::UnoCss => Some(VitePlugin::new("import UnoCSS from 'unocss/vite';", "UnoCSS()")),
        _ => None,
    }
}

/// Side-effect import the entry module needs, if any.
pub fn entry_import(styling: Option<Styling>) -> Option<&'static str> {
    match styling? {
        Styling::UnoCss => Some("import 'virtual:uno.css';"),
        _ => None,
    }
}

/// Config files owned by the styling tool itself.
pub fn config_files(
    framework: Framework,
    language: Language,
    styling: Option<Styling>,
) -> Vec<(String, &'static str)> {
    match (styling, framework) {
        (Some(Styling::UnoCss), _) => vec![(
            format!("uno.config.{}", language.script_extension()),
            "import { defineConfig, presetWind3 } from 'unocss';\n\nexport default defineConfig({\n  presets: [presetWind3()],\n});\n",
        )],
        (Some(Styling::Tailwind), Framework::NextJs) => vec![(
            "postcss.config.mjs".to_string(),
            "const config = {\n  plugins: {\n    '@tailwindcss/postcss': {},\n  },\n};\n\nexport default config;\n",
        )],
        (Some(Styling::Tailwind), Framework::Angular) => vec![(
            ".postcssrc.json".to_string(),
            "{\n  \"plugins\": {\n    \"@tailwindcss/postcss\": {}\n  }\n}\n",
        )],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocessors_change_the_extension() {
        assert_eq!(global_stylesheet(Some(Styling::Scss)).extension, "scss");
        assert_eq!(global_stylesheet(Some(Styling::Less)).extension, "less");
        assert_eq!(global_stylesheet(None).extension, "css");
        assert_eq!(global_stylesheet(Some(Styling::Emotion)).content, PLAIN_CSS);
    }

    #[test]
    fn only_build_time_tools_get_a_vite_plugin() {
        assert!(vite_plugin(Some(Styling::Tailwind)).is_some());
        assert!(vite_plugin(Some(Styling::UnoCss)).is_some());
        assert!(vite_plugin(Some(Styling::StyledComponents)).is_none());
        assert!(vite_plugin(None).is_none());
    }

    #[test]
    fn tailwind_config_only_where_postcss_runs_it() {
        assert!(config_files(Framework::React, Language::TypeScript, Some(Styling::Tailwind)).is_empty());
        assert_eq!(
            config_files(Framework::NextJs, Language::TypeScript, Some(Styling::Tailwind))[0].0,
            "postcss.config.mjs"
        );
        assert_eq!(
            config_files(Framework::Vue, Language::JavaScript, Some(Styling::UnoCss))[0].0,
            "uno.config.js"
        );
    }
}
