//! React on Vite.

use kiln_core::domain::{Routing, Styling};
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{index_html, js_string};
use super::providers::ProviderTree;
use super::styling::{CSS_MODULE, entry_import};
use super::vite::VitePlugin;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let jsx = s.jsx();

    s.script("dev", "vite");
    s.script("build", if ts { "tsc -b && vite build" } else { "vite build" });
    s.script("preview", "vite preview");
    s.vite_config(Some(VitePlugin::new(
        "import react from '@vitejs/plugin-react';",
        "react()",
    )))?;

    let entry = format!("src/main.{jsx}");
    let html = index_html(s.name(), "root", &entry);
    s.file("index.html", html)?;

    s.store()?;
    s.client()?;
    s.i18n()?;
    if s.config().routing() == Some(Routing::TanStackRouter) {
        s.file(
            format!("src/router.{jsx}"),
            tanstack_router("@tanstack/react-router", ts),
        )?;
    }

    let stylesheet = s.stylesheet("src/index")?;
    let css_modules = s.config().styling() == Some(Styling::CssModules);
    if css_modules {
        s.file("src/App.module.css", CSS_MODULE)?;
    }
    let app = app_component(s.name(), s.config().routing(), css_modules);
    s.file(format!("src/App.{jsx}"), app)?;

    let tree = ProviderTree::react(s.config(), s.layout(), "src");
    let main = main_module(&tree, &stylesheet, entry_import(s.config().styling()), ts);
    s.file(entry, main)
}

fn main_module(tree: &ProviderTree, stylesheet: &str, style_import: Option<&str>, ts: bool) -> String {
    let mut out = String::from(
        "import { StrictMode } from 'react';\nimport { createRoot } from 'react-dom/client';\n",
    );
    for import in &tree.imports {
        out.push_str(import);
        out.push('\n');
    }
    if tree.root.is_none() {
        out.push_str("import App from './App';\n");
    }
    out.push_str(&format!("import './{stylesheet}';\n"));
    if let Some(import) = style_import {
        out.push_str(import);
        out.push('\n');
    }
    out.push('\n');

    for line in &tree.setup {
        out.push_str(line);
        out.push('\n');
    }
    if !tree.setup.is_empty() {
        out.push('\n');
    }

    let root = if ts {
        "document.getElementById('root')!"
    } else {
        "document.getElementById('root')"
    };
    out.push_str(&format!("createRoot({root}).render(\n  <StrictMode>\n"));
    out.push_str(&tree.render("<App />", 2));
    out.push_str("\n  </StrictMode>,\n);\n");
    out
}

fn app_component(name: &str, routing: Option<Routing>, css_modules: bool) -> String {
    let mut out = String::new();
    if css_modules {
        out.push_str("import styles from './App.module.css';\n");
    }
    if routing == Some(Routing::ReactRouter) {
        out.push_str("import { Route, Routes } from 'react-router-dom';\n");
    }
    if !out.is_empty() {
        out.push('\n');
    }

    let class = if css_modules {
        "className={styles.app}"
    } else {
        "className=\"app\""
    };
    let title = format!("<h1>{{{}}}</h1>", js_string(name));
    let body = if routing == Some(Routing::ReactRouter) {
        format!("      <Routes>\n        <Route path=\"/\" element={{{title}}} />\n      </Routes>\n")
    } else {
        format!("      {title}\n      <p>\n        Edit <code>src/App</code> and save to reload.\n      </p>\n")
    };

    out.push_str(&format!(
        "function App() {{\n  return (\n    <main {class}>\n{body}    </main>\n  );\n}}\n\nexport default App;\n"
    ));
    out
}

/// `src/router.*` for TanStack Router; `package` picks the binding.
pub(super) fn tanstack_router(package: &str, ts: bool) -> String {
    let mut out = format!(
        "import {{ createRootRoute, createRoute, createRouter }} from '{package}';\nimport App from './App';\n\nconst rootRoute = createRootRoute();\n\nconst indexRoute = createRoute({{\n  getParentRoute: () => rootRoute,\n  path: '/',\n  component: App,\n}});\n\nexport const router = createRouter({{\n  routeTree: rootRoute.addChildren([indexRoute]),\n}});\n"
    );
    if ts {
        out.push_str(&format!(
            "\ndeclare module '{package}' {{\n  interface Register {{\n    router: typeof router;\n  }}\n}}\n"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use kiln_core::application::Generator;
    use kiln_core::domain::{
        DataFetching, Framework, Language, ProjectConfig, StateManagement, find_framework,
    };

    use super::*;
    use crate::generators::FrameworkGenerator;

    fn generate(config: &ProjectConfig) -> kiln_core::domain::ArtifactSet {
        FrameworkGenerator::for_def(find_framework(Framework::React).unwrap())
            .generate(config)
            .unwrap()
    }

    #[test]
    fn tailwind_router_query_project() {
        let config = ProjectConfig::builder("shop", Framework::React)
            .language(Language::TypeScript)
            .styling(Styling::Tailwind)
            .routing(Routing::ReactRouter)
            .data_fetching(DataFetching::TanStackQuery)
            .build();
        let set = generate(&config);

        let main = set.content("src/main.tsx").unwrap();
        let router = main.find("<BrowserRouter>").unwrap();
        let query = main.find("<QueryClientProvider client={queryClient}>").unwrap();
        let app = main.find("<App />").unwrap();
        assert!(router < query && query < app);
        assert!(main.contains("import './index.css';"));

        let vite = set.content("vite.config.ts").unwrap();
        assert!(vite.contains("plugins: [react(), tailwindcss()]"));
        assert_eq!(set.content("src/index.css"), Some("@import \"tailwindcss\";\n"));

        let manifest = set.content("package.json").unwrap();
        for package in ["react-router-dom", "@tanstack/react-query", "tailwindcss", "@tailwindcss/vite"] {
            assert!(manifest.contains(&format!("\"{package}\"")), "{package}");
        }
        assert!(set.contains_file("src/shared/api/query-client.ts"));
        assert!(set.contains_file("index.html"));
    }

    #[test]
    fn javascript_drops_the_non_null_assertion() {
        let config = ProjectConfig::builder("shop", Framework::React)
            .language(Language::JavaScript)
            .state_management(StateManagement::ReduxToolkit)
            .build();
        let set = generate(&config);

        let main = set.content("src/main.jsx").unwrap();
        assert!(main.contains("createRoot(document.getElementById('root')).render("));
        assert!(main.contains("<Provider store={store}>"));
        assert!(!set.contains_file("tsconfig.json"));
        assert!(set.contains_file("vite.config.js"));
    }

    #[test]
    fn css_modules_get_a_module_stylesheet() {
        let config = ProjectConfig::builder("shop", Framework::React)
            .styling(Styling::CssModules)
            .build();
        let set = generate(&config);

        assert_eq!(set.content("src/App.module.css"), Some(CSS_MODULE));
        assert!(set.content("src/App.tsx").unwrap().contains("className={styles.app}"));
    }

    #[test]
    fn tanstack_router_owns_the_root() {
        let config = ProjectConfig::builder("shop", Framework::React)
            .routing(Routing::TanStackRouter)
            .build();
        let set = generate(&config);

        let main = set.content("src/main.tsx").unwrap();
        assert!(main.contains("<RouterProvider router={router} />"));
        assert!(!main.contains("import App"));
        assert!(set.content("src/router.tsx").unwrap().contains("interface Register"));
    }
}
