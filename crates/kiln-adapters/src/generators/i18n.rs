//! i18n setup modules.

use kiln_core::domain::{Framework, I18n, Language};

/// Path and content of the i18n bootstrap file.
///
/// Most libraries get a module the entry imports for its side effects;
/// ngx-translate only needs a message catalogue served from `public/`.
pub fn setup_module(framework: Framework, language: Language, i18n: I18n) -> (String, String) {
    let ext = language.script_extension();
    match i18n {
        I18n::I18next => {
            let content = if matches!(framework, Framework::React | Framework::NextJs) {
                "import i18n from 'i18next';\nimport { initReactI18next } from 'react-i18next';\n\ni18n.use(initReactI18next).init({\n  lng: 'en',\n  fallbackLng: 'en',\n  resources: {\n    en: { translation: { welcome: 'Welcome' } },\n  },\n});\n\nexport default i18n;\n"
            } else {
                "import i18n from 'i18next';\n\ni18n.init({\n  lng: 'en',\n  fallbackLng: 'en',\n  resources: {\n    en: { translation: { welcome: 'Welcome' } },\n  },\n});\n\nexport default i18n;\n"
            };
            (format!("src/i18n.{ext}"), content.to_string())
        }
        I18n::VueI18n => (
            format!("src/i18n.{ext}"),
            "import { createI18n } from 'vue-i18n';\n\nexport const i18n = createI18n({\n  legacy: false,\n  locale: 'en',\n  fallbackLocale: 'en',\n  messages: {\n    en: { welcome: 'Welcome' },\n  },\n});\n".to_string(),
        ),
        I18n::SvelteI18n => {
            let dir = if framework == Framework::SvelteKit { "src/lib" } else { "src" };
            (
                format!("{dir}/i18n.{ext}"),
                "import { addMessages, init } from 'svelte-i18n';\n\naddMessages('en', { welcome: 'Welcome' });\n\ninit({\n  fallbackLocale: 'en',\n  initialLocale: 'en',\n});\n".to_string(),
            )
        }
        I18n::NgxTranslate => (
            "public/i18n/en.json".to_string(),
            "{\n  \"welcome\": \"Welcome\"\n}\n".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18next_binds_react_only_for_react_frameworks() {
        let (path, react) = setup_module(Framework::React, Language::TypeScript, I18n::I18next);
        let (_, solid) = setup_module(Framework::Solid, Language::TypeScript, I18n::I18next);

        assert_eq!(path, "src/i18n.ts");
        assert!(react.contains("initReactI18next"));
        assert!(!solid.contains("react-i18next"));
    }

    #[test]
    fn sveltekit_keeps_setup_in_lib() {
        let (path, _) = setup_module(Framework::SvelteKit, Language::JavaScript, I18n::SvelteI18n);
        assert_eq!(path, "src/lib/i18n.js");
    }
}
