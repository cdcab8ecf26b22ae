//! SolidJS on Vite.

use kiln_core::domain::{DataFetching, Routing, Styling};
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{index_html, js_string};
use super::layout::Layout;
use super::providers::{ProviderTree, Wrapper};
use super::react::tanstack_router;
use super::styling::{CSS_MODULE, entry_import};
use super::vite::VitePlugin;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let jsx = s.jsx();

    s.script("dev", "vite");
    s.script("build", "vite build");
    s.script("preview", "vite preview");
    s.vite_config(Some(VitePlugin::new(
        "import solid from 'vite-plugin-solid';",
        "solid()",
    )))?;

    let entry = format!("src/index.{jsx}");
    let html = index_html(s.name(), "root", &entry);
    s.file("index.html", html)?;

    let stylesheet = s.stylesheet("src/index")?;
    s.store()?;
    let client = s.client()?;
    let i18n = s.i18n()?;

    let mut tree = ProviderTree::default();
    match s.config().routing() {
        Some(Routing::SolidRouter) => {
            tree.imports
                .push("import { Route, Router } from '@solidjs/router';".into());
            tree.root = Some("<Router>\n  <Route path=\"/\" component={App} />\n</Router>".into());
        }
        Some(Routing::TanStackRouter) => {
            s.file(
                format!("src/router.{jsx}"),
                tanstack_router("@tanstack/solid-router", ts),
            )?;
            tree.imports
                .push("import { RouterProvider } from '@tanstack/solid-router';".into());
            tree.imports.push("import { router } from './router';".into());
            tree.root = Some("<RouterProvider router={router} />".into());
        }
        _ => {}
    }
    if let Some(client) = &client {
        if s.config().data_fetching() == Some(DataFetching::TanStackQuery) {
            tree.imports
                .push("import { QueryClientProvider } from '@tanstack/solid-query';".into());
            tree.imports.push(format!(
                "import {{ queryClient }} from '{}';",
                Layout::import_module(s.layout().api, client.stem, "src")
            ));
            tree.wrappers.push(Wrapper::new(
                "<QueryClientProvider client={queryClient}>",
                "</QueryClientProvider>",
            ));
        }
    }
    if i18n.is_some() {
        tree.imports.push("import './i18n';".into());
    }

    let css_modules = s.config().styling() == Some(Styling::CssModules);
    if css_modules {
        s.file("src/App.module.css", CSS_MODULE)?;
    }
    let app = app_component(s.name(), css_modules);
    s.file(format!("src/App.{jsx}"), app)?;

    let mut index = String::from("/* @refresh reload */\nimport { render } from 'solid-js/web';\n");
    for import in &tree.imports {
        index.push_str(import);
        index.push('\n');
    }
    // The TanStack router file imports App itself.
    if s.config().routing() != Some(Routing::TanStackRouter) {
        index.push_str("import App from './App';\n");
    }
    index.push_str(&format!("import './{stylesheet}';\n"));
    if let Some(import) = entry_import(s.config().styling()) {
        index.push_str(import);
        index.push('\n');
    }

    let root = if ts {
        "document.getElementById('root')!"
    } else {
        "document.getElementById('root')"
    };
    let view = indent_block(&tree.render("<App />", 0), 2);
    index.push_str(&format!("\nrender(\n  () => (\n{view}\n  ),\n  {root},\n);\n"));
    s.file(entry, index)
}

fn indent_block(block: &str, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    block
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn app_component(name: &str, css_modules: bool) -> String {
    let (import, class) = if css_modules {
        ("import styles from './App.module.css';\n\n", "class={styles.app}")
    } else {
        ("", "class=\"app\"")
    };
    format!(
        "{import}function App() {{\n  return (\n    <main {class}>\n      <h1>{{{}}}</h1>\n      <p>\n        Edit <code>src/App</code> and save to reload.\n      </p>\n    </main>\n  );\n}}\n\nexport default App;\n",
        js_string(name)
    )
}
