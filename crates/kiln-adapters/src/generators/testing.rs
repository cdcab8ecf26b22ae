//! Test runner configs, scripts and a sample test.

use kiln_core::domain::{Framework, Language, Testing};

use super::common::dev_port;
use super::layout::Layout;

/// Everything one testing choice adds to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSetup {
    pub files: Vec<(String, String)>,
    pub scripts: Vec<(&'static str, &'static str)>,
    /// Vitest rides on the project's own `vite.config.*`.
    pub vite_test_block: bool,
}

/// Frameworks whose generator writes a `vite.config.*`.
fn has_vite_config(framework: Framework) -> bool {
    matches!(
        framework,
        Framework::React
            | Framework::Vue
            | Framework::Svelte
            | Framework::Solid
            | Framework::Vanilla
            | Framework::SvelteKit
    )
}

pub fn setup(
    framework: Framework,
    language: Language,
    layout: &Layout,
    testing: Option<Testing>,
) -> TestSetup {
    let ext = language.script_extension();
    let Some(testing) = testing else {
        return TestSetup::default();
    };

    match testing {
        Testing::Vitest => {
            let mut files = vec![(
                format!("{}/index.test.{ext}", layout.utils),
                unit_test(true),
            )];
            let vite_test_block = has_vite_config(framework);
            if !vite_test_block {
                files.push((vitest_config_name(language), vitest_config(framework)));
            }
            TestSetup {
                files,
                scripts: vec![("test", "vitest"), ("test:run", "vitest run")],
                vite_test_block,
            }
        }
        Testing::Jest => {
            let mut files = vec![
                (format!("{}/index.test.{ext}", layout.utils), unit_test(false)),
                ("jest.config.js".to_string(), jest_config(framework, language)),
            ];
            if framework == Framework::Angular {
                files.push((
                    "setup-jest.ts".to_string(),
                    "import { setupZoneTestEnv } from 'jest-preset-angular/setup-env/zone';\n\nsetupZoneTestEnv();\n"
                        .to_string(),
                ));
            }
            let script = if language.is_typescript() {
                "jest"
            } else {
                "node --experimental-vm-modules node_modules/jest/bin/jest.js"
            };
            TestSetup {
                files,
                scripts: vec![("test", script)],
                vite_test_block: false,
            }
        }
        Testing::Playwright => {
            let port = dev_port(framework);
            TestSetup {
                files: vec![
                    (
                        format!("playwright.config.{ext}"),
                        format!(
                            "import {{ defineConfig }} from '@playwright/test';\n\nexport default defineConfig({{\n  testDir: './e2e',\n  use: {{\n    baseURL: 'http://localhost:{port}',\n  }},\n  webServer: {{\n    command: 'npm run dev',\n    url: 'http://localhost:{port}',\n    reuseExistingServer: true,\n  }},\n}});\n"
                        ),
                    ),
                    (
                        format!("e2e/home.spec.{ext}"),
                        "import { expect, test } from '@playwright/test';\n\ntest('home page renders', async ({ page }) => {\n  await page.goto('/');\n  await expect(page.locator('body')).toBeVisible();\n});\n"
                            .to_string(),
                    ),
                ],
                scripts: vec![("test:e2e", "playwright test")],
                vite_test_block: false,
            }
        }
        Testing::Cypress => {
            let port = dev_port(framework);
            TestSetup {
                files: vec![
                    (
                        format!("cypress.config.{ext}"),
                        format!(
                            "import {{ defineConfig }} from 'cypress';\n\nexport default defineConfig({{\n  e2e: {{\n    baseUrl: 'http://localhost:{port}',\n    supportFile: false,\n  }},\n}});\n"
                        ),
                    ),
                    (
                        format!("cypress/e2e/home.cy.{ext}"),
                        "describe('home page', () => {\n  it('renders', () => {\n    cy.visit('/');\n    cy.get('body').should('be.visible');\n  });\n});\n"
                            .to_string(),
                    ),
                ],
                scripts: vec![("cy:open", "cypress open"), ("test:e2e", "cypress run")],
                vite_test_block: false,
            }
        }
    }
}

fn unit_test(vitest: bool) -> String {
    let import = if vitest {
        "import { describe, expect, it } from 'vitest';\n"
    } else {
        ""
    };
    format!(
        "{import}import {{ capitalize }} from './index';\n\ndescribe('capitalize', () => {{\n  it('upper-cases the first letter', () => {{\n    expect(capitalize('kiln')).toBe('Kiln');\n  }});\n}});\n"
    )
}

fn vitest_config_name(language: Language) -> String {
    match language {
        Language::TypeScript => "vitest.config.ts".to_string(),
        Language::JavaScript => "vitest.config.mjs".to_string(),
    }
}

fn vitest_config(framework: Framework) -> String {
    match framework {
        Framework::Astro => "/// <reference types=\"vitest\" />\nimport { getViteConfig } from 'astro/config';\n\nexport default getViteConfig({\n  test: {\n    environment: 'jsdom',\n  },\n});\n".to_string(),
        _ => "import react from '@vitejs/plugin-react';\nimport { defineConfig } from 'vitest/config';\n\nexport default defineConfig({\n  plugins: [react()],\n  test: {\n    environment: 'jsdom',\n  },\n});\n".to_string(),
    }
}

fn jest_config(framework: Framework, language: Language) -> String {
    if framework == Framework::Angular {
        return "export default {\n  preset: 'jest-preset-angular',\n  setupFilesAfterEnv: ['<rootDir>/setup-jest.ts'],\n};\n".to_string();
    }
    if language.is_typescript() {
        "export default {\n  preset: 'ts-jest',\n  testEnvironment: 'jsdom',\n};\n".to_string()
    } else {
        "export default {\n  testEnvironment: 'jsdom',\n  transform: {},\n};\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::ProjectConfig;

    fn layout() -> Layout {
        Layout::for_config(&ProjectConfig::builder("app", Framework::React).build())
    }

    #[test]
    fn vitest_on_vite_projects_uses_the_vite_config() {
        let setup = setup(Framework::React, Language::TypeScript, &layout(), Some(Testing::Vitest));

        assert!(setup.vite_test_block);
        assert_eq!(setup.files.len(), 1);
        assert_eq!(setup.files[0].0, "src/shared/utils/index.test.ts");
        assert!(setup.files[0].1.contains("from 'vitest'"));
    }

    #[test]
    fn vitest_on_next_gets_its_own_config() {
        let setup = setup(Framework::NextJs, Language::JavaScript, &layout(), Some(Testing::Vitest));

        assert!(!setup.vite_test_block);
        assert!(setup.files.iter().any(|(path, _)| path == "vitest.config.mjs"));
    }

    #[test]
    fn e2e_runners_target_the_framework_port() {
        let setup = setup(Framework::Astro, Language::TypeScript, &layout(), Some(Testing::Playwright));
        let (path, config) = &setup.files[0];

        assert_eq!(path, "playwright.config.ts");
        assert!(config.contains("http://localhost:4321"));
        assert_eq!(setup.scripts, [("test:e2e", "playwright test")]);
    }

    #[test]
    fn no_testing_adds_nothing() {
        assert_eq!(setup(Framework::Vue, Language::TypeScript, &layout(), None), TestSetup::default());
    }
}
