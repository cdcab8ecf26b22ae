//! Files every framework shares: `index.html`, `README.md`, `.gitignore`.

use std::fmt::Write as _;

use kiln_core::domain::{Framework, Language, ProjectConfig, Structure};

/// Default dev-server port, used by e2e runner configs.
pub fn dev_port(framework: Framework) -> u16 {
    match framework {
        Framework::NextJs => 3000,
        Framework::Astro => 4321,
        Framework::Angular => 4200,
        _ => 5173,
    }
}

/// `value` as a double-quoted JavaScript string literal.
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Escape text for an HTML text node.
pub fn html_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Vite-style HTML entry. `mount_id` is the element the app mounts into.
pub fn index_html(title: &str, mount_id: &str, entry: &str) -> String {
    let title = html_text(title);
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body>
    <div id="{mount_id}"></div>
    <script type="module" src="/{entry}"></script>
  </body>
</html>
"#
    )
}

pub fn gitignore(framework: Framework) -> String {
    let mut out = String::from(
        "# dependencies\nnode_modules/\n\n# build output\ndist/\ncoverage/\n\n# env\n.env\n.env.*\n!.env.example\n\n# logs\n*.log\n\n# editor\n.DS_Store\n.idea/\n.vscode/*\n!.vscode/extensions.json\n",
    );

    let framework_dirs: &[&str] = match framework {
        Framework::NextJs => &[".next/", "out/", "next-env.d.ts"],
        Framework::Astro => &[".astro/"],
        Framework::SvelteKit => &[".svelte-kit/", "build/"],
        Framework::Angular => &[".angular/"],
        _ => &[],
    };
    if !framework_dirs.is_empty() {
        out.push_str("\n# framework\n");
        for dir in framework_dirs {
            out.push_str(dir);
            out.push('\n');
        }
    }

    out.push_str("\n# test artifacts\ntest-results/\nplaywright-report/\ncypress/videos/\ncypress/screenshots/\n");
    out
}

pub fn readme(config: &ProjectConfig, name: &str, scripts: &[&str]) -> String {
    let framework = config.framework();
    let mut out = format!(
        "# {name}\n\nA {} project ({}).\n\n## Getting started\n\n```sh\nnpm install\nnpm run dev\n```\n",
        framework.display_name(),
        match config.language() {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    );

    let _ = write!(out, "\nThe dev server listens on http://localhost:{}.\n", dev_port(framework));

    if !scripts.is_empty() {
        out.push_str("\n## Scripts\n\n");
        for script in scripts {
            let _ = writeln!(out, "- `npm run {script}`");
        }
    }

    let mut stack = Vec::new();
    let mut push = |label: &str, value: Option<String>| {
        if let Some(value) = value {
            stack.push(format!("- {label}: {value}"));
        }
    };
    push("Styling", config.styling().map(|v| v.to_string()));
    push("Routing", config.routing().map(|v| v.to_string()));
    push("State", config.state_management().map(|v| v.to_string()));
    push("Data fetching", config.data_fetching().map(|v| v.to_string()));
    push("Testing", config.testing().map(|v| v.to_string()));
    push("UI library", config.ui_library().map(|v| v.to_string()));
    push("Forms", config.form_management().map(|v| v.to_string()));
    push("Animation", config.animation().map(|v| v.to_string()));
    push("Icons", config.icons().map(|v| v.to_string()));
    push("Charts", config.data_viz().map(|v| v.to_string()));
    push("Utilities", config.utilities().map(|v| v.to_string()));
    push("i18n", config.i18n().map(|v| v.to_string()));

    if !stack.is_empty() {
        out.push_str("\n## Stack\n\n");
        out.push_str(&stack.join("\n"));
        out.push('\n');
    }

    out.push_str("\n## Layout\n\n");
    out.push_str(match config.structure() {
        Structure::FeatureBased => {
            "Feature-based: each feature lives in `src/features/<name>`, shared code in `src/shared`.\n"
        }
        Structure::LayerBased => {
            "Layer-based: code is grouped by kind under `src/components`, `src/services` and `src/utils`.\n"
        }
    });
    out
}
