//! `tsconfig.json` and friends. Only TypeScript projects get any.

use serde_json::{Value, json};

use kiln_core::domain::{Framework, Language};

fn bundler_options() -> serde_json::Map<String, Value> {
    let Value::Object(map) = json!({
        "target": "ES2022",
        "useDefineForClassFields": true,
        "lib": ["ES2022", "DOM", "DOM.Iterable"],
        "module": "ESNext",
        "moduleResolution": "bundler",
        "skipLibCheck": true,
        "isolatedModules": true,
        "noEmit": true,
        "strict": true,
        "noUnusedLocals": true,
        "noUnusedParameters": true,
        "noFallthroughCasesInSwitch": true
    }) else {
        return serde_json::Map::new();
    };
    map
}

fn vite_app(extra: Value, include: &[&str]) -> Value {
    let mut options = bundler_options();
    if let Value::Object(extra) = extra {
        options.extend(extra);
    }
    json!({
        "compilerOptions": options,
        "include": include,
        "references": [{ "path": "./tsconfig.node.json" }]
    })
}

fn vite_node() -> Value {
    json!({
        "compilerOptions": {
            "composite": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "skipLibCheck": true,
            "allowSyntheticDefaultImports": true,
            "strict": true
        },
        "include": ["vite.config.ts"]
    })
}

/// JSON config files for `framework`, as `(path, value)` pairs.
pub fn configs(framework: Framework, language: Language) -> Vec<(&'static str, Value)> {
    if !language.is_typescript() {
        return Vec::new();
    }

    match framework {
        Framework::React => vec![
            ("tsconfig.json", vite_app(json!({ "jsx": "react-jsx" }), &["src"])),
            ("tsconfig.node.json", vite_node()),
        ],
        Framework::Vue => vec![
            (
                "tsconfig.json",
                vite_app(json!({ "jsx": "preserve" }), &["src/**/*.ts", "src/**/*.tsx", "src/**/*.vue"]),
            ),
            ("tsconfig.node.json", vite_node()),
        ],
        Framework::Solid => vec![
            (
                "tsconfig.json",
                vite_app(json!({ "jsx": "preserve", "jsxImportSource": "solid-js" }), &["src"]),
            ),
            ("tsconfig.node.json", vite_node()),
        ],
        Framework::Vanilla => vec![
            ("tsconfig.json", vite_app(json!({}), &["src"])),
            ("tsconfig.node.json", vite_node()),
        ],
        Framework::Svelte => vec![
            (
                "tsconfig.json",
                json!({
                    "extends": "@tsconfig/svelte/tsconfig.json",
                    "compilerOptions": {
                        "target": "ES2022",
                        "useDefineForClassFields": true,
                        "module": "ESNext",
                        "resolveJsonModule": true,
                        "allowJs": true,
                        "checkJs": true,
                        "isolatedModules": true,
                        "moduleDetection": "force"
                    },
                    "include": ["src/**/*.ts", "src/**/*.js", "src/**/*.svelte"],
                    "references": [{ "path": "./tsconfig.node.json" }]
                }),
            ),
            ("tsconfig.node.json", vite_node()),
        ],
        Framework::NextJs => vec![(
            "tsconfig.json",
            json!({
                "compilerOptions": {
                    "target": "ES2017",
                    "lib": ["dom", "dom.iterable", "esnext"],
                    "allowJs": true,
                    "skipLibCheck": true,
                    "strict": true,
                    "noEmit": true,
                    "esModuleInterop": true,
                    "module": "esnext",
                    "moduleResolution": "bundler",
                    "resolveJsonModule": true,
                    "isolatedModules": true,
                    "jsx": "preserve",
                    "incremental": true,
                    "plugins": [{ "name": "next" }],
                    "paths": { "@/*": ["./src/*"] }
                },
                "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
                "exclude": ["node_modules"]
            }),
        )],
        Framework::Astro => vec![(
            "tsconfig.json",
            json!({
                "extends": "astro/tsconfigs/strict",
                "include": [".astro/types.d.ts", "**/*"],
                "exclude": ["dist"]
            }),
        )],
        Framework::SvelteKit => vec![(
            "tsconfig.json",
            json!({
                "extends": "./.svelte-kit/tsconfig.json",
                "compilerOptions": {
                    "allowJs": true,
                    "checkJs": true,
                    "esModuleInterop": true,
                    "forceConsistentCasingInFileNames": true,
                    "resolveJsonModule": true,
                    "skipLibCheck": true,
                    "sourceMap": true,
                    "strict": true,
                    "moduleResolution": "bundler"
                }
            }),
        )],
        Framework::Angular => vec![
            (
                "tsconfig.json",
                json!({
                    "compileOnSave": false,
                    "compilerOptions": {
                        "strict": true,
                        "noImplicitOverride": true,
                        "noPropertyAccessFromIndexSignature": true,
                        "noImplicitReturns": true,
                        "noFallthroughCasesInSwitch": true,
                        "skipLibCheck": true,
                        "isolatedModules": true,
                        "experimentalDecorators": true,
                        "importHelpers": true,
                        "target": "ES2022",
                        "module": "preserve"
                    },
                    "angularCompilerOptions": {
                        "enableI18nLegacyMessageIdFormat": false,
                        "strictInjectionParameters": true,
                        "strictInputAccessModifiers": true,
                        "strictTemplates": true
                    },
                    "files": [],
                    "references": [{ "path": "./tsconfig.app.json" }]
                }),
            ),
            (
                "tsconfig.app.json",
                json!({
                    "extends": "./tsconfig.json",
                    "compilerOptions": {
                        "outDir": "./out-tsc/app",
                        "types": []
                    },
                    "include": ["src/**/*.ts"],
                    "exclude": ["src/**/*.spec.ts"]
                }),
            ),
        ],
    }
}

/// Ambient declaration file for Vite-served TypeScript projects.
pub fn vite_env(framework: Framework, language: Language) -> Option<&'static str> {
    if !language.is_typescript() {
        return None;
    }
    match framework {
        Framework::Svelte => Some("/// <reference types=\"svelte\" />\n/// <reference types=\"vite/client\" />\n"),
        Framework::React | Framework::Vue | Framework::Solid | Framework::Vanilla => {
            Some("/// <reference types=\"vite/client\" />\n")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn javascript_projects_get_no_tsconfig() {
        for framework in Framework::ALL {
            assert!(configs(*framework, Language::JavaScript).is_empty());
        }
    }

    #[test]
    fn every_typescript_project_has_a_root_tsconfig() {
        for framework in Framework::ALL {
            let files = configs(*framework, Language::TypeScript);
            assert_eq!(files[0].0, "tsconfig.json", "{framework:?}");
        }
    }

    #[test]
    fn react_uses_the_automatic_runtime() {
        let files = configs(Framework::React, Language::TypeScript);
        assert_eq!(files[0].1["compilerOptions"]["jsx"], "react-jsx");
        assert_eq!(files[0].1["compilerOptions"]["strict"], true);
        assert_eq!(files[1].0, "tsconfig.node.json");
    }

    #[test]
    fn solid_points_jsx_at_solid() {
        let files = configs(Framework::Solid, Language::TypeScript);
        assert_eq!(files[0].1["compilerOptions"]["jsxImportSource"], "solid-js");
    }
}
