//! Provider nesting for React-based entry points.
//!
//! Order, outermost first: router, Redux store, data-fetching client,
//! UI-library provider, then the root element. i18n is pulled in as a
//! side-effect import. TanStack Router renders the app itself, so with it
//! the innermost element is `<RouterProvider />` and the router wraps
//! nothing.

use kiln_core::domain::{
    DataFetching, ProjectConfig, Routing, StateManagement, UiLibrary,
};

use super::clients::client_module;
use super::layout::Layout;
use super::stores::store_module;

/// One JSX wrapper element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub open: String,
    pub close: String,
}

impl Wrapper {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Imports, setup statements and wrappers for one entry module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderTree {
    pub imports: Vec<String>,
    pub setup: Vec<String>,
    pub wrappers: Vec<Wrapper>,
    /// Replaces the default root element when set.
    pub root: Option<String>,
}

impl ProviderTree {
    /// Build the tree for `config`. `from_dir` is the directory of the file
    /// that will hold the tree; local imports are made relative to it.
    pub fn react(config: &ProjectConfig, layout: &Layout, from_dir: &str) -> Self {
        let framework = config.framework();
        let language = config.language();
        let mut tree = Self::default();

        match config.routing() {
            Some(Routing::ReactRouter) => {
                tree.imports
                    .push("import { BrowserRouter } from 'react-router-dom';".into());
                tree.wrappers
                    .push(Wrapper::new("<BrowserRouter>", "</BrowserRouter>"));
            }
            Some(Routing::TanStackRouter) => {
                tree.imports
                    .push("import { RouterProvider } from '@tanstack/react-router';".into());
                tree.imports.push(format!(
                    "import {{ router }} from '{}';",
                    Layout::import_module("src", "router", from_dir)
                ));
                tree.root = Some("<RouterProvider router={router} />".into());
            }
            _ => {}
        }

        if config.state_management() == Some(StateManagement::ReduxToolkit) {
            let store = store_module(framework, language, layout, StateManagement::ReduxToolkit);
            tree.imports.push("import { Provider } from 'react-redux';".into());
            tree.imports.push(format!(
                "import {{ store }} from '{}';",
                Layout::import_module(layout.store, store.stem, from_dir)
            ));
            tree.wrappers
                .push(Wrapper::new("<Provider store={store}>", "</Provider>"));
        }

        if let Some(data) = config.data_fetching() {
            let client = client_module(framework, language, layout, data);
            let client_import = format!(
                "import {{ {} }} from '{}';",
                client.export,
                Layout::import_module(layout.api, client.stem, from_dir)
            );
            match data {
                DataFetching::TanStackQuery => {
                    tree.imports
                        .push("import { QueryClientProvider } from '@tanstack/react-query';".into());
                    tree.imports.push(client_import);
                    tree.wrappers.push(Wrapper::new(
                        "<QueryClientProvider client={queryClient}>",
                        "</QueryClientProvider>",
                    ));
                }
                DataFetching::Swr => {
                    tree.imports.push("import { SWRConfig } from 'swr';".into());
                    tree.imports.push(client_import);
                    tree.wrappers
                        .push(Wrapper::new("<SWRConfig value={{ fetcher }}>", "</SWRConfig>"));
                }
                DataFetching::Apollo => {
                    tree.imports
                        .push("import { ApolloProvider } from '@apollo/client';".into());
                    tree.imports.push(client_import);
                    tree.wrappers.push(Wrapper::new(
                        "<ApolloProvider client={apolloClient}>",
                        "</ApolloProvider>",
                    ));
                }
                // A plain client; nothing to provide.
                DataFetching::Axios => {}
            }
        }

        match config.ui_library() {
            Some(UiLibrary::Mui) => {
                tree.imports.push(
                    "import { CssBaseline, ThemeProvider, createTheme } from '@mui/material';"
                        .into(),
                );
                tree.setup.push("const theme = createTheme();".into());
                tree.wrappers.push(Wrapper::new(
                    "<ThemeProvider theme={theme}>\n<CssBaseline />",
                    "</ThemeProvider>",
                ));
            }
            Some(UiLibrary::ChakraUi) => {
                tree.imports
                    .push("import { ChakraProvider, defaultSystem } from '@chakra-ui/react';".into());
                tree.wrappers.push(Wrapper::new(
                    "<ChakraProvider value={defaultSystem}>",
                    "</ChakraProvider>",
                ));
            }
            Some(UiLibrary::Mantine) => {
                tree.imports.push("import '@mantine/core/styles.css';".into());
                tree.imports
                    .push("import { MantineProvider } from '@mantine/core';".into());
                tree.wrappers
                    .push(Wrapper::new("<MantineProvider>", "</MantineProvider>"));
            }
            Some(UiLibrary::AntDesign) => {
                tree.imports.push("import { ConfigProvider } from 'antd';".into());
                tree.wrappers
                    .push(Wrapper::new("<ConfigProvider>", "</ConfigProvider>"));
            }
            _ => {}
        }

        if config.i18n().is_some() {
            tree.imports
                .push(format!("import '{}';", Layout::import_module("src", "i18n", from_dir)));
        }

        tree
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty() && self.root.is_none()
    }

    /// Render the nested JSX around `inner`, indented by `depth` levels.
    pub fn render(&self, inner: &str, depth: usize) -> String {
        let inner = self.root.as_deref().unwrap_or(inner);
        let mut lines = Vec::new();

        for (level, wrapper) in self.wrappers.iter().enumerate() {
            // Continuation lines (e.g. `<CssBaseline />`) sit one level in.
            for (n, line) in wrapper.open.lines().enumerate() {
                let extra = usize::from(n > 0);
                lines.push(format!("{}{line}", indent(depth + level + extra)));
            }
        }
        let pad = indent(depth + self.wrappers.len());
        for line in inner.lines() {
            lines.push(format!("{pad}{line}"));
        }
        for (level, wrapper) in self.wrappers.iter().enumerate().rev() {
            lines.push(format!("{}{}", indent(depth + level), wrapper.close));
        }
        lines.join("\n")
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::{Framework, I18n, Language};

    fn config() -> kiln_core::domain::ProjectConfigBuilder {
        ProjectConfig::builder("app", Framework::React).language(Language::TypeScript)
    }

    #[test]
    fn router_wraps_query_client_wraps_app() {
        let config = config()
            .routing(Routing::ReactRouter)
            .data_fetching(DataFetching::TanStackQuery)
            .build();
        let tree = ProviderTree::react(&config, &Layout::for_config(&config), "src");

        assert_eq!(
            tree.render("<App />", 2),
            "    <BrowserRouter>\n      <QueryClientProvider client={queryClient}>\n        <App />\n      </QueryClientProvider>\n    </BrowserRouter>"
        );
        assert!(tree
            .imports
            .contains(&"import { queryClient } from './shared/api/query-client';".to_string()));
    }

    #[test]
    fn full_stack_nests_in_contract_order() {
        let config = config()
            .routing(Routing::ReactRouter)
            .state_management(StateManagement::ReduxToolkit)
            .data_fetching(DataFetching::Swr)
            .ui_library(UiLibrary::ChakraUi)
            .i18n(I18n::I18next)
            .build();
        let tree = ProviderTree::react(&config, &Layout::for_config(&config), "src");
        let opens: Vec<_> = tree.wrappers.iter().map(|w| w.open.as_str()).collect();

        assert_eq!(
            opens,
            [
                "<BrowserRouter>",
                "<Provider store={store}>",
                "<SWRConfig value={{ fetcher }}>",
                "<ChakraProvider value={defaultSystem}>",
            ]
        );
        assert_eq!(tree.imports.last().unwrap(), "import './i18n';");
    }

    #[test]
    fn tanstack_router_becomes_the_root_element() {
        let config = config()
            .routing(Routing::TanStackRouter)
            .data_fetching(DataFetching::TanStackQuery)
            .build();
        let tree = ProviderTree::react(&config, &Layout::for_config(&config), "src");
        let out = tree.render("<App />", 0);

        assert!(!out.contains("<App />"));
        assert!(out.contains("  <RouterProvider router={router} />"));
        assert!(out.starts_with("<QueryClientProvider"));
    }

    #[test]
    fn imports_are_relative_to_the_holder() {
        let config = config().data_fetching(DataFetching::Apollo).i18n(I18n::I18next).build();
        let tree = ProviderTree::react(&config, &Layout::for_config(&config), "src/app");

        assert!(tree
            .imports
            .contains(&"import { apolloClient } from '../shared/api/apollo';".to_string()));
        assert!(tree.imports.contains(&"import '../i18n';".to_string()));
    }

    #[test]
    fn nothing_selected_means_no_wrappers() {
        let config = config().build();
        let tree = ProviderTree::react(&config, &Layout::for_config(&config), "src");
        assert!(tree.is_empty());
        assert_eq!(tree.render("<App />", 1), "  <App />");
    }
}
