//! Data-fetching client modules.

use kiln_core::domain::{DataFetching, Framework, Language};

use super::layout::Layout;

/// A generated client file: path, module stem and exported binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientModule {
    pub path: String,
    pub stem: &'static str,
    pub export: &'static str,
    pub content: String,
}

fn env_base_url(framework: Framework) -> &'static str {
    match framework {
        Framework::NextJs => "process.env.NEXT_PUBLIC_API_URL ?? '/api'",
        Framework::Astro => "import.meta.env.PUBLIC_API_URL ?? '/api'",
        _ => "import.meta.env.VITE_API_URL ?? '/api'",
    }
}

pub fn query_package(framework: Framework) -> &'static str {
    match framework {
        Framework::Vue => "@tanstack/vue-query",
        Framework::Svelte | Framework::SvelteKit => "@tanstack/svelte-query",
        Framework::Solid => "@tanstack/solid-query",
        _ => "@tanstack/react-query",
    }
}

pub fn client_module(
    framework: Framework,
    language: Language,
    layout: &Layout,
    data: DataFetching,
) -> ClientModule {
    let ts = language.is_typescript();
    let (stem, export, content) = match data {
        DataFetching::TanStackQuery => (
            "query-client",
            "queryClient",
            format!(
                "import {{ QueryClient }} from '{}';\n\nexport const queryClient = new QueryClient({{\n  defaultOptions: {{\n    queries: {{ staleTime: 60_000 }},\n  }},\n}});\n",
                query_package(framework)
            ),
        ),
        DataFetching::Swr => (
            "fetcher",
            "fetcher",
            if ts {
                "export async function fetcher<T>(url: string): Promise<T> {\n  const res = await fetch(url);\n  if (!res.ok) {\n    throw new Error(`Request failed: ${res.status}`);\n  }\n  return res.json() as Promise<T>;\n}\n".to_string()
            } else {
                "export async function fetcher(url) {\n  const res = await fetch(url);\n  if (!res.ok) {\n    throw new Error(`Request failed: ${res.status}`);\n  }\n  return res.json();\n}\n".to_string()
            },
        ),
        DataFetching::Axios => (
            "client",
            "api",
            format!(
                "import axios from 'axios';\n\nexport const api = axios.create({{\n  baseURL: {},\n  timeout: 10_000,\n}});\n",
                env_base_url(framework)
            ),
        ),
        DataFetching::Apollo => {
            // The React entry point of @apollo/client pulls in React.
            let package = if framework == Framework::Vue {
                "@apollo/client/core"
            } else {
                "@apollo/client"
            };
            (
                "apollo",
                "apolloClient",
                format!(
                    "import {{ ApolloClient, InMemoryCache }} from '{package}';\n\nexport const apolloClient = new ApolloClient({{\n  uri: '/graphql',\n  cache: new InMemoryCache(),\n}});\n"
                ),
            )
        }
    };

    ClientModule {
        path: format!("{}/{stem}.{}", layout.api, language.script_extension()),
        stem,
        export,
        content,
    }
}
