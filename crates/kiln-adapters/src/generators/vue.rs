//! Vue 3 on Vite.

use kiln_core::domain::{DataFetching, Routing, Styling, UiLibrary};
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{index_html, js_string};
use super::layout::Layout;
use super::styling::entry_import;
use super::vite::VitePlugin;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    let ts = s.is_typescript();
    let ext = s.ext();

    s.script("dev", "vite");
    s.script("build", if ts { "vue-tsc -b && vite build" } else { "vite build" });
    s.script("preview", "vite preview");
    s.vite_config(Some(VitePlugin::new(
        "import vue from '@vitejs/plugin-vue';",
        "vue()",
    )))?;

    let entry = format!("src/main.{ext}");
    let html = index_html(s.name(), "app", &entry);
    s.file("index.html", html)?;

    let stylesheet = s.stylesheet("src/style")?;
    let store = s.store()?;
    let client = s.client()?;
    let i18n = s.i18n()?;

    let routed = s.config().routing() == Some(Routing::VueRouter);
    if routed {
        s.file(
            format!("src/router/index.{ext}"),
            "import { createRouter, createWebHistory } from 'vue-router';\nimport HomeView from '../views/HomeView.vue';\n\nexport default createRouter({\n  history: createWebHistory(),\n  routes: [{ path: '/', name: 'home', component: HomeView }],\n});\n",
        )?;
        let home = format!(
            "<template>\n  <h1>{{{{ title }}}}</h1>\n</template>\n\n<script setup{}>\nconst title = {};\n</script>\n",
            s.lang_attr(),
            js_string(s.name())
        );
        s.file("src/views/HomeView.vue", home)?;
    }

    let css_modules = s.config().styling() == Some(Styling::CssModules);
    let app = app_component(s.name(), s.lang_attr(), routed, css_modules);
    s.file("src/App.vue", app)?;

    // createApp(App) chain
    let mut imports = vec![
        "import { createApp } from 'vue';".to_string(),
        "import App from './App.vue';".to_string(),
    ];
    let mut uses = Vec::new();
    let mut provides = Vec::new();

    if routed {
        imports.push("import router from './router';".into());
        uses.push("router".to_string());
    }
    if store.is_some() {
        imports.push("import { createPinia } from 'pinia';".into());
        uses.push("createPinia()".into());
    }
    if let Some(client) = &client {
        let module = Layout::import_module(s.layout().api, client.stem, "src");
        match s.config().data_fetching() {
            Some(DataFetching::TanStackQuery) => {
                imports.push("import { VueQueryPlugin } from '@tanstack/vue-query';".into());
                imports.push(format!("import {{ queryClient }} from '{module}';"));
                uses.push("VueQueryPlugin, { queryClient }".into());
            }
            Some(DataFetching::Apollo) => {
                imports.push("import { DefaultApolloClient } from '@vue/apollo-composable';".into());
                imports.push(format!("import {{ apolloClient }} from '{module}';"));
                provides.push("DefaultApolloClient, apolloClient".to_string());
            }
            _ => {}
        }
    }
    match s.config().ui_library() {
        Some(UiLibrary::Vuetify) => {
            imports.push("import 'vuetify/styles';".into());
            imports.push("import { createVuetify } from 'vuetify';".into());
            imports.push("import * as components from 'vuetify/components';".into());
            imports.push("import * as directives from 'vuetify/directives';".into());
            uses.push("createVuetify({ components, directives })".into());
        }
        Some(UiLibrary::ElementPlus) => {
            imports.push("import ElementPlus from 'element-plus';".into());
            imports.push("import 'element-plus/dist/index.css';".into());
            uses.push("ElementPlus".into());
        }
        Some(UiLibrary::AntDesign) => {
            imports.push("import Antd from 'ant-design-vue';".into());
            imports.push("import 'ant-design-vue/dist/reset.css';".into());
            uses.push("Antd".into());
        }
        _ => {}
    }
    if i18n.is_some() {
        imports.push("import { i18n } from './i18n';".into());
        uses.push("i18n".into());
    }
    imports.push(format!("import './{stylesheet}';"));
    imports.extend(entry_import(s.config().styling()).map(str::to_string));

    let mut main = imports.join("\n");
    main.push_str("\n\nconst app = createApp(App);\n");
    for plugin in &uses {
        main.push_str(&format!("app.use({plugin});\n"));
    }
    for provide in &provides {
        main.push_str(&format!("app.provide({provide});\n"));
    }
    main.push_str("app.mount('#app');\n");
    s.file(entry, main)
}

fn app_component(name: &str, lang: &str, routed: bool, css_modules: bool) -> String {
    let class = if css_modules { ":class=\"$style.app\"" } else { "class=\"app\"" };
    let body = if routed {
        "    <RouterView />".to_string()
    } else {
        "    <h1>{{ title }}</h1>\n    <p>Edit <code>src/App.vue</code> and save to reload.</p>".to_string()
    };
    let script = if routed {
        format!("<script setup{lang}>\nimport {{ RouterView }} from 'vue-router';\n</script>\n")
    } else {
        format!("<script setup{lang}>\nconst title = {};\n</script>\n", js_string(name))
    };
    let style = if css_modules { "<style module>" } else { "<style scoped>" };

    format!(
        "{script}\n<template>\n  <main {class}>\n{body}\n  </main>\n</template>\n\n{style}\n.app {{\n  display: grid;\n  place-items: center;\n  min-height: 100vh;\n}}\n</style>\n"
    )
}
