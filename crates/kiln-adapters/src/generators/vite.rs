//! Vite config composition.

/// One entry in `plugins: [...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VitePlugin {
    pub import: &'static str,
    pub call: &'static str,
}

impl VitePlugin {
    pub const fn new(import: &'static str, call: &'static str) -> Self {
        Self { import, call }
    }
}

/// Render `vite.config.*` with plugins in the given order.
///
/// With `vitest` set, `defineConfig` comes from `vitest/config` so the
/// `test` block type-checks.
pub fn render(plugins: &[VitePlugin], vitest: bool) -> String {
    let mut out = String::new();
    if vitest {
        out.push_str("import { defineConfig } from 'vitest/config';\n");
    } else {
        out.push_str("import { defineConfig } from 'vite';\n");
    }
    for plugin in plugins {
        out.push_str(plugin.import);
        out.push('\n');
    }

    out.push_str("\n// https://vite.dev/config/\nexport default defineConfig({\n");
    if !plugins.is_empty() {
        let calls: Vec<_> = plugins.iter().map(|p| p.call).collect();
        out.push_str(&format!("  plugins: [{}],\n", calls.join(", ")));
    }
    if vitest {
        out.push_str("  test: {\n    environment: 'jsdom',\n  },\n");
    }
    out.push_str("});\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugins_render_in_order() {
        let config = render(
            &[
                VitePlugin::new("import react from '@vitejs/plugin-react';", "react()"),
                VitePlugin::new("import tailwindcss from '@tailwindcss/vite';", "tailwindcss()"),
            ],
            false,
        );

        assert!(config.starts_with("import { defineConfig } from 'vite';\n"));
        assert!(config.contains("plugins: [react(), tailwindcss()],"));
        assert!(!config.contains("test:"));
    }

    #[test]
    fn vitest_switches_the_import_and_adds_a_test_block() {
        let config = render(&[], true);
        assert!(config.starts_with("import { defineConfig } from 'vitest/config';"));
        assert!(config.contains("environment: 'jsdom'"));
        assert!(!config.contains("plugins"));
    }
}
