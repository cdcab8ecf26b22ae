//! Next.js with the App Router under `src/app`.

use kiln_core::domain::Styling;
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::js_string;
use super::providers::ProviderTree;
use super::styling::CSS_MODULE;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let jsx = s.jsx();

    s.script("dev", "next dev");
    s.script("build", "next build");
    s.script("start", "next start");

    let compiler = match s.config().styling() {
        Some(Styling::StyledComponents) => "  compiler: {\n    styledComponents: true,\n  },\n",
        Some(Styling::Emotion) => "  compiler: {\n    emotion: true,\n  },\n",
        _ => "",
    };
    if ts {
        s.file(
            "next.config.ts",
            format!("import type {{ NextConfig }} from 'next';\n\nconst nextConfig: NextConfig = {{\n{compiler}}};\n\nexport default nextConfig;\n"),
        )?;
    } else {
        s.file(
            "next.config.mjs",
            format!("/** @type {{import('next').NextConfig}} */\nconst nextConfig = {{\n{compiler}}};\n\nexport default nextConfig;\n"),
        )?;
    }

    let stylesheet = s.stylesheet("src/app/globals")?;
    s.store()?;
    s.client()?;
    s.i18n()?;

    let tree = ProviderTree::react(s.config(), s.layout(), "src/app");
    let has_providers = !tree.imports.is_empty();
    if has_providers {
        s.file(format!("src/app/providers.{jsx}"), providers_module(&tree, ts))?;
    }

    let children = if has_providers {
        "<Providers>{children}</Providers>"
    } else {
        "{children}"
    };
    let mut layout = String::new();
    if ts {
        layout.push_str("import type { Metadata } from 'next';\n");
    }
    if has_providers {
        layout.push_str("import Providers from './providers';\n");
    }
    layout.push_str(&format!("import './{stylesheet}';\n\n"));
    layout.push_str(&format!(
        "export const metadata{} = {{\n  title: {},\n  description: 'Generated by kiln',\n}};\n\n",
        if ts { ": Metadata" } else { "" },
        js_string(s.name())
    ));
    let props = if ts {
        "{\n  children,\n}: Readonly<{\n  children: React.ReactNode;\n}>"
    } else {
        "{ children }"
    };
    layout.push_str(&format!(
        "export default function RootLayout({props}) {{\n  return (\n    <html lang=\"en\">\n      <body>{children}</body>\n    </html>\n  );\n}}\n"
    ));
    s.file(format!("src/app/layout.{jsx}"), layout)?;

    let css_modules = s.config().styling() == Some(Styling::CssModules);
    let (import, class) = if css_modules {
        s.file("src/app/page.module.css", CSS_MODULE)?;
        ("import styles from './page.module.css';\n\n", "className={styles.app}")
    } else {
        ("", "className=\"app\"")
    };
    let page = format!(
        "{import}export default function Home() {{\n  return (\n    <main {class}>\n      <h1>{{{}}}</h1>\n      <p>\n        Edit <code>src/app/page</code> and save to reload.\n      </p>\n    </main>\n  );\n}}\n",
        js_string(s.name())
    );
    s.file(format!("src/app/page.{jsx}"), page)
}

fn providers_module(tree: &ProviderTree, ts: bool) -> String {
    let mut out = String::from("'use client';\n\n");
    if ts {
        out.push_str("import type { ReactNode } from 'react';\n");
    }
    for import in &tree.imports {
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

    let props = if ts {
        "{ children }: { children: ReactNode }"
    } else {
        "{ children }"
    };
    out.push_str(&format!(
        "export default function Providers({props}) {{\n  return (\n{}\n  );\n}}\n",
        tree.render("<>{children}</>", 2)
    ));
    out
}

#[cfg(test)]
mod tests {
    use kiln_core::application::Generator;
    use kiln_core::domain::{
        ArtifactSet, DataFetching, Framework, Language, ProjectConfig, Testing, UiLibrary,
        find_framework,
    };

    use super::*;
    use crate::generators::FrameworkGenerator;

    fn generate(config: &ProjectConfig) -> ArtifactSet {
        FrameworkGenerator::for_def(find_framework(Framework::NextJs).unwrap())
            .generate(config)
            .unwrap()
    }

    #[test]
    fn client_providers_live_in_their_own_module() {
        let config = ProjectConfig::builder("store", Framework::NextJs)
            .data_fetching(DataFetching::TanStackQuery)
            .ui_library(UiLibrary::Mui)
            .build();
        let set = generate(&config);

        let providers = set.content("src/app/providers.tsx").unwrap();
        assert!(providers.starts_with("'use client';"));
        assert!(providers.contains("from '../shared/api/query-client'"));
        assert!(providers.contains("const theme = createTheme();"));
        assert!(providers.find("<QueryClientProvider").unwrap() < providers.find("<ThemeProvider").unwrap());
        assert!(set.content("src/app/layout.tsx").unwrap().contains("<Providers>{children}</Providers>"));
    }

    #[test]
    fn bare_project_has_no_providers() {
        let config = ProjectConfig::builder("store", Framework::NextJs)
            .language(Language::JavaScript)
            .testing(Testing::Vitest)
            .build();
        let set = generate(&config);

        assert!(!set.contains_file("src/app/providers.jsx"));
        assert!(set.contains_file("next.config.mjs"));
        assert!(set.content("src/app/layout.jsx").unwrap().contains("<body>{children}</body>"));
        assert!(set.content("package.json").unwrap().contains("\"@vitejs/plugin-react\""));
    }

    #[test]
    fn css_in_js_turns_on_the_compiler() {
        let config = ProjectConfig::builder("store", Framework::NextJs)
            .styling(Styling::StyledComponents)
            .build();
        let set = generate(&config);
        assert!(set.content("next.config.ts").unwrap().contains("styledComponents: true"));
    }
}
