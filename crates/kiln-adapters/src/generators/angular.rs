//! Standalone Angular with the application builder. TypeScript only.

use serde_json::json;

use kiln_core::domain::{I18n, Routing, StateManagement, Styling, UiLibrary};
use kiln_core::error::KilnResult;

use super::Scaffold;
use super::common::{html_text, js_string};
use super::layout::Layout;
use super::manifest::package_name;

pub(super) fn emit(s: &mut Scaffold<'_>) -> KilnResult<()> {
    s.script("ng", "ng");
    s.script("dev", "ng serve");
    s.script("build", "ng build");
    s.script("watch", "ng build --watch --configuration development");

    let stylesheet = s.stylesheet("src/styles")?;
    let style_language = match s.config().styling() {
        Some(Styling::Scss) => "scss",
        Some(Styling::Less) => "less",
        _ => "css",
    };

    let mut styles = Vec::new();
    if s.config().ui_library() == Some(UiLibrary::AngularMaterial) {
        styles.push("@angular/material/prebuilt-themes/azure-blue.css".to_string());
    }
    styles.push(format!("src/{stylesheet}"));

    let project = package_name(s.name());
    let workspace = json!({
        "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
        "version": 1,
        "newProjectRoot": "projects",
        "projects": {
            project.clone(): {
                "projectType": "application",
                "schematics": {
                    "@schematics/angular:component": { "style": style_language }
                },
                "root": "",
                "sourceRoot": "src",
                "prefix": "app",
                "architect": {
                    "build": {
                        "builder": "@angular/build:application",
                        "options": {
                            "browser": "src/main.ts",
                            "index": "src/index.html",
                            "tsConfig": "tsconfig.app.json",
                            "inlineStyleLanguage": style_language,
                            "assets": [{ "glob": "**/*", "input": "public" }],
                            "styles": styles
                        },
                        "configurations": {
                            "production": { "outputHashing": "all" },
                            "development": {
                                "optimization": false,
                                "extractLicenses": false,
                                "sourceMap": true
                            }
                        },
                        "defaultConfiguration": "production"
                    },
                    "serve": {
                        "builder": "@angular/build:dev-server",
                        "configurations": {
                            "production": { "buildTarget": format!("{project}:build:production") },
                            "development": { "buildTarget": format!("{project}:build:development") }
                        },
                        "defaultConfiguration": "development"
                    }
                }
            }
        }
    });
    s.json("angular.json", &workspace)?;

    let index = format!(
        "<!doctype html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>{}</title>\n    <base href=\"/\" />\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n  </head>\n  <body>\n    <app-root></app-root>\n  </body>\n</html>\n",
        html_text(s.name())
    );
    s.file("src/index.html", index)?;
    s.file(
        "src/main.ts",
        "import { bootstrapApplication } from '@angular/platform-browser';\nimport { AppComponent } from './app/app.component';\nimport { appConfig } from './app/app.config';\n\nbootstrapApplication(AppComponent, appConfig).catch((err) => console.error(err));\n",
    )?;

    let store = s.store()?;
    s.i18n()?;

    let routed = s.config().routing() == Some(Routing::AngularRouter);
    if routed {
        s.file(
            "src/app/app.routes.ts",
            "import { Routes } from '@angular/router';\n\nexport const routes: Routes = [];\n",
        )?;
    }

    // app.config.ts
    let mut imports = vec![
        "import { ApplicationConfig, provideZoneChangeDetection } from '@angular/core';".to_string(),
    ];
    let mut providers = vec!["provideZoneChangeDetection({ eventCoalescing: true })".to_string()];
    if routed {
        imports.push("import { provideRouter } from '@angular/router';".into());
        imports.push("import { routes } from './app.routes';".into());
        providers.push("provideRouter(routes)".into());
    }
    if let (Some(StateManagement::NgRx), Some(store)) = (s.config().state_management(), &store) {
        imports.push("import { provideStore } from '@ngrx/store';".into());
        imports.push(format!(
            "import {{ counterReducer }} from '{}';",
            Layout::import_module(s.layout().store, store.stem, "src/app")
        ));
        providers.push("provideStore({ counter: counterReducer })".into());
    }
    if s.config().i18n() == Some(I18n::NgxTranslate) {
        imports.push("import { provideHttpClient } from '@angular/common/http';".into());
        imports.push("import { provideTranslateService } from '@ngx-translate/core';".into());
        imports.push("import { provideTranslateHttpLoader } from '@ngx-translate/http-loader';".into());
        providers.push("provideHttpClient()".into());
        providers.push(
            "provideTranslateService({\n      loader: provideTranslateHttpLoader({ prefix: '/i18n/', suffix: '.json' }),\n      fallbackLang: 'en',\n    })"
                .into(),
        );
    }

    let mut config = imports.join("\n");
    config.push_str("\n\nexport const appConfig: ApplicationConfig = {\n  providers: [\n");
    for provider in &providers {
        config.push_str(&format!("    {provider},\n"));
    }
    config.push_str("  ],\n};\n");
    s.file("src/app/app.config.ts", config)?;

    let (component_import, component_imports, outlet) = if routed {
        (
            "import { RouterOutlet } from '@angular/router';\n",
            "[RouterOutlet]",
            "\n      <router-outlet />",
        )
    } else {
        ("", "[]", "")
    };
    let component = format!(
        "import {{ Component }} from '@angular/core';\n{component_import}\n@Component({{\n  selector: 'app-root',\n  imports: {component_imports},\n  template: `\n    <main class=\"app\">\n      <h1>{{{{ title }}}}</h1>{outlet}\n    </main>\n  `,\n}})\nexport class AppComponent {{\n  title = {};\n}}\n",
        js_string(s.name())
    );
    s.file("src/app/app.component.ts", component)
}

#[cfg(test)]
mod tests {
    use kiln_core::application::Generator;
    use kiln_core::domain::{ArtifactSet, Framework, ProjectConfig, Testing, find_framework};

    use super::*;
    use crate::generators::FrameworkGenerator;

    fn generate(config: &ProjectConfig) -> ArtifactSet {
        FrameworkGenerator::for_def(find_framework(Framework::Angular).unwrap())
            .generate(config)
            .unwrap()
    }

    #[test]
    fn providers_follow_the_selected_axes() {
        let config = ProjectConfig::builder("admin", Framework::Angular)
            .routing(Routing::AngularRouter)
            .state_management(StateManagement::NgRx)
            .i18n(I18n::NgxTranslate)
            .build();
        let set = generate(&config);
        let app_config = set.content("src/app/app.config.ts").unwrap();

        assert!(app_config.contains("provideRouter(routes),"));
        assert!(app_config.contains("from '../shared/store/counter.reducer'"));
        assert!(app_config.contains("provideStore({ counter: counterReducer }),"));
        assert!(app_config.contains("provideTranslateHttpLoader"));
        assert!(set.contains_file("public/i18n/en.json"));
        assert!(set.content("src/app/app.component.ts").unwrap().contains("<router-outlet />"));
    }

    #[test]
    fn workspace_file_points_at_the_stylesheet() {
        let config = ProjectConfig::builder("admin", Framework::Angular)
            .styling(Styling::Scss)
            .ui_library(UiLibrary::AngularMaterial)
            .testing(Testing::Jest)
            .build();
        let set = generate(&config);

        let workspace: serde_json::Value =
            serde_json::from_str(set.content("angular.json").unwrap()).unwrap();
        let build = &workspace["projects"]["admin"]["architect"]["build"]["options"];
        assert_eq!(build["inlineStyleLanguage"], "scss");
        assert_eq!(build["styles"][1], "src/styles.scss");
        assert!(set.contains_file("src/styles.scss"));
        assert!(set.contains_file("setup-jest.ts"));
        assert!(set.contains_file("tsconfig.app.json"));
    }
}
