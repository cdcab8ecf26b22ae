//! Astro, static output.

use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::js_string;
use super::styling::{entry_import, vite_plugin};

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();

    s.script("dev", "astro dev");
    s.script("build", if ts { "astro check && astro build" } else { "astro build" });
    s.script("preview", "astro preview");
    s.script("astro", "astro");

    let plugin = vite_plugin(s.config().styling());
    let mut astro_config = String::new();
    if !ts {
        astro_config.push_str("// @ts-check\n");
    }
    astro_config.push_str("import { defineConfig } from 'astro/config';\n");
    if let Some(plugin) = &plugin {
        astro_config.push_str(plugin.import);
        astro_config.push('\n');
    }
    astro_config.push_str("\n// https://astro.build/config\nexport default defineConfig({\n");
    if let Some(plugin) = &plugin {
        astro_config.push_str(&format!("  vite: {{\n    plugins: [{}],\n  }},\n", plugin.call));
    }
    astro_config.push_str("});\n");
    let config_name = if ts { "astro.config.ts" } else { "astro.config.mjs" };
    s.file(config_name, astro_config)?;

    let stylesheet = s.stylesheet("src/styles/global")?;
    s.store()?;
    s.client()?;

    let mut frontmatter = format!("import '../styles/{stylesheet}';\n");
    if let Some(import) = entry_import(s.config().styling()) {
        frontmatter.push_str(import);
        frontmatter.push('\n');
    }
    if ts {
        frontmatter.push_str("\ninterface Props {\n  title: string;\n}\n");
    }
    frontmatter.push_str("\nconst { title } = Astro.props;\n");
    s.file(
        "src/layouts/Layout.astro",
        format!(
            "---\n{frontmatter}---\n\n<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"UTF-8\" />\n    <meta name=\"viewport\" content=\"width=device-width\" />\n    <title>{{title}}</title>\n  </head>\n  <body>\n    <slot />\n  </body>\n</html>\n"
        ),
    )?;

    let title = js_string(s.name());
    s.file(
        "src/pages/index.astro",
        format!(
            "---\nimport Layout from '../layouts/Layout.astro';\n---\n\n<Layout title={{{title}}}>\n  <main class=\"app\">\n    <h1>{{{title}}}</h1>\n  </main>\n</Layout>\n"
        ),
    )
}
