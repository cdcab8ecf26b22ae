//! SvelteKit with the auto adapter.

use kiln_core::domain::DataFetching;
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::js_string;
use super::layout::Layout;
use super::styling::entry_import;
use super::vite::VitePlugin;

const SVELTE_CONFIG: &str = "\
import adapter from '@sveltejs/adapter-auto';
import { vitePreprocess } from '@sveltejs/vite-plugin-svelte';

/** @type {import('@sveltejs/kit').Config} */
const config = {
  preprocess: vitePreprocess(),
  kit: {
    adapter: adapter(),
  },
};

export default config;
";

const APP_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    %sveltekit.head%
  </head>
  <body data-sveltekit-preload-data="hover">
    <div style="display: contents">%sveltekit.body%</div>
  </body>
</html>
"#;

const APP_TYPES: &str = "\
// See https://svelte.dev/docs/kit/types#app.d.ts
declare global {
  namespace App {
    // interface Error {}
    // interface Locals {}
    // interface PageData {}
  }
}

export {};
";

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let lang = s.lang_attr();

    s.script("dev", "vite dev");
    s.script("build", "vite build");
    s.script("preview", "vite preview");
    s.script("prepare", "svelte-kit sync || echo ''");
    if ts {
        s.script(
            "check",
            "svelte-kit sync && svelte-check --tsconfig ./tsconfig.json",
        );
    }
    s.vite_config(Some(VitePlugin::new(
        "import { sveltekit } from '@sveltejs/kit/vite';",
        "sveltekit()",
    )))?;
    s.file("svelte.config.js", SVELTE_CONFIG)?;
    s.file("src/app.html", APP_HTML)?;
    if ts {
        s.file("src/app.d.ts", APP_TYPES)?;
    }

    let stylesheet = s.stylesheet("src/app")?;
    s.store()?;
    let client = s.client()?;
    let i18n = s.i18n()?;

    // +layout.svelte
    let mut imports = vec![format!("import '../{stylesheet}';")];
    imports.extend(entry_import(s.config().styling()).map(str::to_string));
    if i18n.is_some() {
        imports.push("import '$lib/i18n';".into());
    }
    let query = s.config().data_fetching() == Some(DataFetching::TanStackQuery);
    if let (true, Some(client)) = (query, &client) {
        imports.push("import { QueryClientProvider } from '@tanstack/svelte-query';".into());
        imports.push(format!(
            "import {{ queryClient }} from '{}';",
            Layout::import_module(s.layout().api, client.stem, "src/routes")
        ));
    }
    if ts {
        imports.push("import type { Snippet } from 'svelte';".into());
    }

    let mut layout = format!("<script{lang}>\n");
    for import in &imports {
        layout.push_str(&format!("  {import}\n"));
    }
    layout.push_str(if ts {
        "\n  let { children }: { children: Snippet } = $props();\n</script>\n\n"
    } else {
        "\n  let { children } = $props();\n</script>\n\n"
    });
    if query {
        layout.push_str("<QueryClientProvider client={queryClient}>\n  {@render children()}\n</QueryClientProvider>\n");
    } else {
        layout.push_str("{@render children()}\n");
    }
    s.file("src/routes/+layout.svelte", layout)?;

    let page = format!(
        "<script{lang}>\n  const title = {};\n</script>\n\n<main class=\"app\">\n  <h1>{{title}}</h1>\n  <p>Edit <code>src/routes/+page.svelte</code> and save to reload.</p>\n</main>\n",
        js_string(s.name())
    );
    s.file("src/routes/+page.svelte", page)
}

#[cfg(test)]
mod tests {
    use kiln_core::application::Generator;
    use kiln_core::domain::{
        ArtifactSet, Framework, I18n, Language, ProjectConfig, Styling, find_framework,
    };

    use super::*;
    use crate::generators::FrameworkGenerator;

    fn generate(config: &ProjectConfig) -> ArtifactSet {
        FrameworkGenerator::for_def(find_framework(Framework::SvelteKit).unwrap())
            .generate(config)
            .unwrap()
    }

    #[test]
    fn layout_wires_styles_i18n_and_query() {
        let config = ProjectConfig::builder("kit", Framework::SvelteKit)
            .styling(Styling::Tailwind)
            .data_fetching(DataFetching::TanStackQuery)
            .i18n(I18n::SvelteI18n)
            .build();
        let set = generate(&config);
        let layout = set.content("src/routes/+layout.svelte").unwrap();

        assert!(layout.contains("import '../app.css';"));
        assert!(layout.contains("import '$lib/i18n';"));
        assert!(layout.contains("from '../shared/api/query-client'"));
        assert!(layout.contains("{@render children()}"));
        assert!(set.contains_file("src/lib/i18n.ts"));
        assert!(set.content("vite.config.ts").unwrap().contains("plugins: [sveltekit(), tailwindcss()]"));
    }

    #[test]
    fn javascript_skips_type_declarations() {
        let config = ProjectConfig::builder("kit", Framework::SvelteKit)
            .language(Language::JavaScript)
            .build();
        let set = generate(&config);

        assert!(!set.contains_file("src/app.d.ts"));
        assert!(set.contains_file("vite.config.js"));
        assert!(set.contains_file("src/app.html"));
        assert!(set.content("src/routes/+page.svelte").unwrap().starts_with("<script>\n"));
    }
}
