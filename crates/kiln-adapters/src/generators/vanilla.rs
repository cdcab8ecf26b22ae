//! Plain Vite, no UI framework.

use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{index_html, js_string};
use super::styling::entry_import;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let ext = s.ext();

    s.script("dev", "vite");
    s.script("build", if ts { "tsc && vite build" } else { "vite build" });
    s.script("preview", "vite preview");
    s.vite_config(None)?;

    let entry = format!("src/main.{ext}");
    let html = index_html(s.name(), "app", &entry);
    s.file("index.html", html)?;

    let stylesheet = s.stylesheet("src/style")?;
    s.store()?;
    s.client()?;
    let i18n = s.i18n()?;

    let mut main = format!("import './{stylesheet}';\n");
    if let Some(import) = entry_import(s.config().styling()) {
        main.push_str(import);
        main.push('\n');
    }
    if i18n.is_some() {
        main.push_str("import './i18n';\n");
    }

    let app = if ts {
        "document.querySelector<HTMLDivElement>('#app')!"
    } else {
        "document.querySelector('#app')"
    };
    main.push_str(&format!(
        "\nconst app = {app};\n\nconst heading = document.createElement('h1');\nheading.textContent = {};\napp.append(heading);\n",
        js_string(s.name())
    ));
    s.file(entry, main)
}

#[cfg(test)]
mod tests {
    use kiln_core::application::Generator;
    use kiln_core::domain::{
        ArtifactSet, Framework, Language, ProjectConfig, StateManagement, Styling, find_framework,
    };

    use crate::generators::FrameworkGenerator;

    fn generate(config: &ProjectConfig) -> ArtifactSet {
        FrameworkGenerator::for_def(find_framework(Framework::Vanilla).unwrap())
            .generate(config)
            .unwrap()
    }

    #[test]
    fn uno_css_is_imported_by_the_entry() {
        let config = ProjectConfig::builder("site", Framework::Vanilla)
            .styling(Styling::UnoCss)
            .build();
        let set = generate(&config);

        assert!(set.content("src/main.ts").unwrap().contains("import 'virtual:uno.css';"));
        assert!(set.content("vite.config.ts").unwrap().contains("plugins: [UnoCSS()]"));
        assert!(set.contains_file("uno.config.ts"));
    }

    #[test]
    fn javascript_project_has_plain_vite_config() {
        let config = ProjectConfig::builder("site", Framework::Vanilla)
            .language(Language::JavaScript)
            .state_management(StateManagement::Nanostores)
            .build();
        let set = generate(&config);

        let vite = set.content("vite.config.js").unwrap();
        assert!(!vite.contains("plugins"));
        assert!(set.contains_file("src/shared/store/counter.js"));
        assert!(set.content("src/main.js").unwrap().contains("heading.textContent = \"site\";"));
    }
}
