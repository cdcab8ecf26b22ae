//! Svelte 5 on Vite, client-side only.

use kiln_core::domain::{DataFetching, Routing, Styling};
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{index_html, js_string};
use super::layout::Layout;
use super::styling::{CSS_MODULE, entry_import};
use super::vite::VitePlugin;

const SVELTE_CONFIG: &str = "\
import { vitePreprocess } from '@sveltejs/vite-plugin-svelte';

export default {
  preprocess: vitePreprocess(),
};
";

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let ext = s.ext();
    let lang = s.lang_attr();

    s.script("dev", "vite");
    s.script("build", "vite build");
    s.script("preview", "vite preview");
    if ts {
        s.script("check", "svelte-check --tsconfig ./tsconfig.json");
    }
    s.vite_config(Some(VitePlugin::new(
        "import { svelte } from '@sveltejs/vite-plugin-svelte';",
        "svelte()",
    )))?;
    s.file("svelte.config.js", SVELTE_CONFIG)?;

    let entry = format!("src/main.{ext}");
    let html = index_html(s.name(), "app", &entry);
    s.file("index.html", html)?;

    let stylesheet = s.stylesheet("src/app")?;
    s.store()?;
    let client = s.client()?;
    let i18n = s.i18n()?;

    let mut main = String::from("import { mount } from 'svelte';\n");
    if i18n.is_some() {
        main.push_str("import './i18n';\n");
    }
    main.push_str(&format!("import './{stylesheet}';\n"));
    if let Some(import) = entry_import(s.config().styling()) {
        main.push_str(import);
        main.push('\n');
    }
    let target = if ts {
        "document.getElementById('app')!"
    } else {
        "document.getElementById('app')"
    };
    main.push_str(&format!(
        "import App from './App.svelte';\n\nconst app = mount(App, {{\n  target: {target},\n}});\n\nexport default app;\n"
    ));
    s.file(entry, main)?;

    // App.svelte
    let routed = s.config().routing() == Some(Routing::SvelteSpaRouter);
    let css_modules = s.config().styling() == Some(Styling::CssModules);
    let mut imports = Vec::new();
    if routed {
        imports.push("import Router from 'svelte-spa-router';".to_string());
        imports.push("import Home from './routes/Home.svelte';".to_string());
        let home = format!(
            "<script{lang}>\n  const title = {};\n</script>\n\n<h1>{{title}}</h1>\n",
            js_string(s.name())
        );
        s.file("src/routes/Home.svelte", home)?;
    }
    let query = client.is_some() && s.config().data_fetching() == Some(DataFetching::TanStackQuery);
    if let (true, Some(client)) = (query, &client) {
        imports.push("import { QueryClientProvider } from '@tanstack/svelte-query';".into());
        imports.push(format!(
            "import {{ queryClient }} from '{}';",
            Layout::import_module(s.layout().api, client.stem, "src")
        ));
    }
    if css_modules {
        imports.push("import styles from './App.module.css';".into());
        s.file("src/App.module.css", CSS_MODULE)?;
    }

    let mut script = format!("<script{lang}>\n");
    for import in &imports {
        script.push_str(&format!("  {import}\n"));
    }
    if routed {
        script.push_str("\n  const routes = {\n    '/': Home,\n  };\n");
    } else {
        script.push_str(&format!("\n  const title = {};\n", js_string(s.name())));
    }
    script.push_str("</script>\n");

    let inner = if routed {
        "<Router {routes} />"
    } else {
        "<h1>{title}</h1>"
    };
    let class = if css_modules { "class={styles.app}" } else { "class=\"app\"" };
    let mut markup = format!("<main {class}>\n  {inner}\n</main>");
    if query {
        let indented: Vec<_> = markup.lines().map(|l| format!("  {l}")).collect();
        markup = format!(
            "<QueryClientProvider client={{queryClient}}>\n{}\n</QueryClientProvider>",
            indented.join("\n")
        );
    }
    s.file("src/App.svelte", format!("{script}\n{markup}\n"))
}
