//! Option → dependency fragments.
//!
//! Every selected option contributes one [`Fragment`]; an unset axis
//! contributes nothing. Package names are framework-aware where a
//! library ships per-framework bindings (`@tanstack/vue-query`,
//! `lucide-svelte`, ...).

use kiln_core::domain::{
    Animation, DataFetching, DataViz, FormManagement, Framework, I18n, Icons, Language,
    ProjectConfig, Routing, StateManagement, Styling, Testing, UiLibrary, Utilities,
};

/// Pinned semver ranges. One constant per package family so the same
/// package always carries the same range, whichever axis pulls it in.
pub mod versions {
    pub const VITE: &str = "^6.3.5";
    pub const TYPESCRIPT: &str = "~5.8.3";
    pub const TYPES_NODE: &str = "^22.15.29";

    pub const REACT: &str = "^19.1.0";
    pub const REACT_TYPES: &str = "^19.1.6";
    pub const PLUGIN_REACT: &str = "^4.5.1";
    pub const VUE: &str = "^3.5.16";
    pub const PLUGIN_VUE: &str = "^5.2.4";
    pub const VUE_TSC: &str = "^2.2.10";
    pub const SVELTE: &str = "^5.33.14";
    pub const PLUGIN_SVELTE: &str = "^5.0.3";
    pub const SVELTE_CHECK: &str = "^4.2.1";
    pub const TSCONFIG_SVELTE: &str = "^5.0.4";
    pub const SVELTEKIT: &str = "^2.21.2";
    pub const SVELTEKIT_ADAPTER: &str = "^6.0.1";
    pub const SOLID: &str = "^1.9.7";
    pub const PLUGIN_SOLID: &str = "^2.11.6";
    pub const ANGULAR: &str = "^20.0.0";
    pub const RXJS: &str = "~7.8.2";
    pub const TSLIB: &str = "^2.8.1";
    pub const ZONE: &str = "~0.15.1";
    pub const NEXT: &str = "^15.3.3";
    pub const ASTRO: &str = "^5.9.0";
    pub const ASTRO_CHECK: &str = "^0.9.4";

    pub const TAILWIND: &str = "^4.1.8";
    pub const POSTCSS: &str = "^8.5.4";
    pub const SASS: &str = "^1.89.1";
    pub const LESS: &str = "^4.3.0";
    pub const STYLED_COMPONENTS: &str = "^6.1.18";
    pub const EMOTION: &str = "^11.14.0";
    pub const UNOCSS: &str = "^66.1.3";

    pub const REACT_ROUTER: &str = "^7.6.2";
    pub const TANSTACK_ROUTER: &str = "^1.120.16";
    pub const VUE_ROUTER: &str = "^4.5.1";
    pub const SVELTE_SPA_ROUTER: &str = "^4.0.1";
    pub const SOLID_ROUTER: &str = "^0.15.3";

    pub const REDUX_TOOLKIT: &str = "^2.8.2";
    pub const REACT_REDUX: &str = "^9.2.0";
    pub const ZUSTAND: &str = "^5.0.5";
    pub const JOTAI: &str = "^2.12.5";
    pub const MOBX: &str = "^6.13.7";
    pub const MOBX_REACT: &str = "^4.1.0";
    pub const PINIA: &str = "^3.0.3";
    pub const NGRX: &str = "^19.2.1";
    pub const NANOSTORES: &str = "^1.0.1";
    pub const NANOSTORES_BINDING: &str = "^1.0.0";

    pub const TANSTACK_QUERY: &str = "^5.80.6";
    pub const SWR: &str = "^2.3.3";
    pub const AXIOS: &str = "^1.9.0";
    pub const APOLLO: &str = "^3.13.8";
    pub const VUE_APOLLO: &str = "^4.2.2";
    pub const GRAPHQL: &str = "^16.11.0";

    pub const VITEST: &str = "^3.2.2";
    pub const JSDOM: &str = "^26.1.0";
    pub const JEST: &str = "^29.7.0";
    pub const TS_JEST: &str = "^29.3.4";
    pub const JEST_TYPES: &str = "^29.5.14";
    pub const JEST_ANGULAR: &str = "^14.6.0";
    pub const TESTING_LIBRARY_REACT: &str = "^16.3.0";
    pub const TESTING_LIBRARY_DOM: &str = "^10.4.0";
    pub const JEST_DOM: &str = "^6.6.3";
    pub const VUE_TEST_UTILS: &str = "^2.4.6";
    pub const TESTING_LIBRARY_SVELTE: &str = "^5.2.8";
    pub const TESTING_LIBRARY_SOLID: &str = "^0.8.10";
    pub const PLAYWRIGHT: &str = "^1.52.0";
    pub const CYPRESS: &str = "^14.4.1";

    pub const MUI: &str = "^7.1.1";
    pub const CHAKRA: &str = "^3.20.0";
    pub const MANTINE: &str = "^8.0.2";
    pub const ANTD: &str = "^5.25.4";
    pub const ANTD_VUE: &str = "^4.2.6";
    pub const VUETIFY: &str = "^3.8.8";
    pub const ELEMENT_PLUS: &str = "^2.10.1";

    pub const REACT_HOOK_FORM: &str = "^7.57.0";
    pub const FORMIK: &str = "^2.4.6";
    pub const VEE_VALIDATE: &str = "^4.15.0";
    pub const FELTE: &str = "^1.3.0";
    pub const FELTE_SOLID: &str = "^1.2.13";

    pub const FRAMER_MOTION: &str = "^12.16.0";
    pub const GSAP: &str = "^3.13.0";
    pub const AUTO_ANIMATE: &str = "^0.8.2";

    pub const LUCIDE: &str = "^0.513.0";
    pub const REACT_ICONS: &str = "^5.5.0";
    pub const FONTAWESOME: &str = "^6.7.2";
    pub const FONTAWESOME_REACT: &str = "^0.2.2";
    pub const FONTAWESOME_VUE: &str = "^3.0.8";
    pub const FONTAWESOME_ANGULAR: &str = "^2.0.1";
    pub const ICONIFY: &str = "^6.0.0";
    pub const ICONIFY_VUE: &str = "^5.0.0";
    pub const ICONIFY_SVELTE: &str = "^5.0.0";
    pub const ICONIFY_ICON: &str = "^3.0.0";

    pub const RECHARTS: &str = "^2.15.3";
    pub const CHARTJS: &str = "^4.4.9";
    pub const REACT_CHARTJS: &str = "^5.3.0";
    pub const VUE_CHARTJS: &str = "^5.3.2";
    pub const D3: &str = "^7.9.0";
    pub const D3_TYPES: &str = "^7.4.3";
    pub const ECHARTS: &str = "^5.6.0";
    pub const ECHARTS_REACT: &str = "^3.0.2";
    pub const VUE_ECHARTS: &str = "^7.0.3";

    pub const LODASH: &str = "^4.17.21";
    pub const LODASH_TYPES: &str = "^4.17.12";
    pub const DATE_FNS: &str = "^4.1.0";
    pub const DAYJS: &str = "^1.11.13";
    pub const LUXON: &str = "^3.6.1";
    pub const LUXON_TYPES: &str = "^3.6.2";

    pub const I18NEXT: &str = "^25.2.1";
    pub const REACT_I18NEXT: &str = "^15.5.2";
    pub const VUE_I18N: &str = "^11.1.5";
    pub const SVELTE_I18N: &str = "^4.0.1";
    pub const NGX_TRANSLATE: &str = "^16.0.4";
}

use super::clients::query_package;
use versions as v;

pub type Package = (&'static str, &'static str);

/// Dependencies contributed by one option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub dependencies: Vec<Package>,
    pub dev_dependencies: Vec<Package>,
}

impl Fragment {
    pub fn deps(packages: &[Package]) -> Self {
        Self {
            dependencies: packages.to_vec(),
            dev_dependencies: Vec::new(),
        }
    }

    pub fn dev(packages: &[Package]) -> Self {
        Self {
            dependencies: Vec::new(),
            dev_dependencies: packages.to_vec(),
        }
    }

    pub fn and_dev(mut self, packages: &[Package]) -> Self {
        self.dev_dependencies.extend_from_slice(packages);
        self
    }

    /// Add TypeScript-only dev dependencies.
    fn and_types(self, language: Language, packages: &[Package]) -> Self {
        if language.is_typescript() {
            self.and_dev(packages)
        } else {
            self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

fn is_react_family(framework: Framework) -> bool {
    matches!(framework, Framework::React | Framework::NextJs)
}

fn is_svelte_family(framework: Framework) -> bool {
    matches!(framework, Framework::Svelte | Framework::SvelteKit)
}

/// The framework itself plus its build tooling.
pub fn framework(framework: Framework, language: Language) -> Fragment {
    let ts: &[Package] = &[("typescript", v::TYPESCRIPT)];
    match framework {
        Framework::React => Fragment::deps(&[("react", v::REACT), ("react-dom", v::REACT)])
            .and_dev(&[("vite", v::VITE), ("@vitejs/plugin-react", v::PLUGIN_REACT)])
            .and_types(language, ts)
            .and_types(
                language,
                &[("@types/react", v::REACT_TYPES), ("@types/react-dom", v::REACT_TYPES)],
            ),
        Framework::Vue => Fragment::deps(&[("vue", v::VUE)])
            .and_dev(&[("vite", v::VITE), ("@vitejs/plugin-vue", v::PLUGIN_VUE)])
            .and_types(language, ts)
            .and_types(language, &[("vue-tsc", v::VUE_TSC)]),
        Framework::Svelte => Fragment::dev(&[
            ("svelte", v::SVELTE),
            ("@sveltejs/vite-plugin-svelte", v::PLUGIN_SVELTE),
            ("vite", v::VITE),
        ])
        .and_types(language, ts)
        .and_types(
            language,
            &[
                ("svelte-check", v::SVELTE_CHECK),
                ("@tsconfig/svelte", v::TSCONFIG_SVELTE),
            ],
        ),
        Framework::Solid => Fragment::deps(&[("solid-js", v::SOLID)])
            .and_dev(&[("vite", v::VITE), ("vite-plugin-solid", v::PLUGIN_SOLID)])
            .and_types(language, ts),
        Framework::Angular => Fragment::deps(&[
            ("@angular/common", v::ANGULAR),
            ("@angular/compiler", v::ANGULAR),
            ("@angular/core", v::ANGULAR),
            ("@angular/platform-browser", v::ANGULAR),
            ("rxjs", v::RXJS),
            ("tslib", v::TSLIB),
            ("zone.js", v::ZONE),
        ])
        .and_dev(&[
            ("@angular/build", v::ANGULAR),
            ("@angular/cli", v::ANGULAR),
            ("@angular/compiler-cli", v::ANGULAR),
            ("typescript", v::TYPESCRIPT),
        ]),
        Framework::Vanilla => Fragment::dev(&[("vite", v::VITE)]).and_types(language, ts),
        Framework::NextJs => Fragment::deps(&[
            ("next", v::NEXT),
            ("react", v::REACT),
            ("react-dom", v::REACT),
        ])
        .and_types(language, ts)
        .and_types(
            language,
            &[
                ("@types/node", v::TYPES_NODE),
                ("@types/react", v::REACT_TYPES),
                ("@types/react-dom", v::REACT_TYPES),
            ],
        ),
        Framework::Astro => Fragment::deps(&[("astro", v::ASTRO)])
            .and_types(language, ts)
            .and_types(language, &[("@astrojs/check", v::ASTRO_CHECK)]),
        Framework::SvelteKit => Fragment::dev(&[
            ("@sveltejs/adapter-auto", v::SVELTEKIT_ADAPTER),
            ("@sveltejs/kit", v::SVELTEKIT),
            ("@sveltejs/vite-plugin-svelte", v::PLUGIN_SVELTE),
            ("svelte", v::SVELTE),
            ("vite", v::VITE),
        ])
        .and_types(language, ts)
        .and_types(language, &[("svelte-check", v::SVELTE_CHECK)]),
    }
}

pub fn styling(framework: Framework, styling: Styling) -> Fragment {
    match styling {
        Styling::Tailwind => match framework {
            // PostCSS pipelines
            Framework::NextJs | Framework::Angular => Fragment::deps(&[("tailwindcss", v::TAILWIND)])
                .and_dev(&[("@tailwindcss/postcss", v::TAILWIND), ("postcss", v::POSTCSS)]),
            _ => Fragment::deps(&[("tailwindcss", v::TAILWIND), ("@tailwindcss/vite", v::TAILWIND)]),
        },
        Styling::Scss => Fragment::dev(&[("sass", v::SASS)]),
        Styling::Less => Fragment::dev(&[("less", v::LESS)]),
        // Built into every supported bundler.
        Styling::CssModules => Fragment::default(),
        Styling::StyledComponents => Fragment::deps(&[("styled-components", v::STYLED_COMPONENTS)]),
        Styling::Emotion => Fragment::deps(&[
            ("@emotion/react", v::EMOTION),
            ("@emotion/styled", v::EMOTION),
        ]),
        Styling::UnoCss => Fragment::dev(&[("unocss", v::UNOCSS)]),
    }
}

pub fn routing(framework: Framework, routing: Routing) -> Fragment {
    match routing {
        Routing::ReactRouter => Fragment::deps(&[("react-router-dom", v::REACT_ROUTER)]),
        Routing::TanStackRouter if framework == Framework::Solid => {
            Fragment::deps(&[("@tanstack/solid-router", v::TANSTACK_ROUTER)])
        }
        Routing::TanStackRouter => Fragment::deps(&[("@tanstack/react-router", v::TANSTACK_ROUTER)]),
        Routing::VueRouter => Fragment::deps(&[("vue-router", v::VUE_ROUTER)]),
        Routing::SvelteSpaRouter => Fragment::deps(&[("svelte-spa-router", v::SVELTE_SPA_ROUTER)]),
        Routing::SolidRouter => Fragment::deps(&[("@solidjs/router", v::SOLID_ROUTER)]),
        Routing::AngularRouter => Fragment::deps(&[("@angular/router", v::ANGULAR)]),
    }
}

pub fn state_management(framework: Framework, state: StateManagement) -> Fragment {
    match state {
        StateManagement::ReduxToolkit => Fragment::deps(&[
            ("@reduxjs/toolkit", v::REDUX_TOOLKIT),
            ("react-redux", v::REACT_REDUX),
        ]),
        StateManagement::Zustand => Fragment::deps(&[("zustand", v::ZUSTAND)]),
        StateManagement::Jotai => Fragment::deps(&[("jotai", v::JOTAI)]),
        StateManagement::MobX => Fragment::deps(&[
            ("mobx", v::MOBX),
            ("mobx-react-lite", v::MOBX_REACT),
        ]),
        StateManagement::Pinia => Fragment::deps(&[("pinia", v::PINIA)]),
        StateManagement::NgRx => Fragment::deps(&[("@ngrx/store", v::NGRX)]),
        StateManagement::Nanostores => match framework {
            Framework::Solid => Fragment::deps(&[
                ("nanostores", v::NANOSTORES),
                ("@nanostores/solid", v::NANOSTORES_BINDING),
            ]),
            // Svelte's store contract and Astro islands read atoms directly.
            _ => Fragment::deps(&[("nanostores", v::NANOSTORES)]),
        },
    }
}

pub fn data_fetching(framework: Framework, data: DataFetching) -> Fragment {
    match data {
        DataFetching::TanStackQuery => {
            Fragment::deps(&[(query_package(framework), v::TANSTACK_QUERY)])
        }
        DataFetching::Swr => Fragment::deps(&[("swr", v::SWR)]),
        DataFetching::Axios => Fragment::deps(&[("axios", v::AXIOS)]),
        DataFetching::Apollo if framework == Framework::Vue => Fragment::deps(&[
            ("@apollo/client", v::APOLLO),
            ("@vue/apollo-composable", v::VUE_APOLLO),
            ("graphql", v::GRAPHQL),
        ]),
        DataFetching::Apollo => Fragment::deps(&[
            ("@apollo/client", v::APOLLO),
            ("graphql", v::GRAPHQL),
        ]),
    }
}

pub fn testing(framework: Framework, language: Language, testing: Testing) -> Fragment {
    match testing {
        Testing::Vitest => {
            let base = Fragment::dev(&[("vitest", v::VITEST), ("jsdom", v::JSDOM)]);
            let binding: &[Package] = match framework {
                Framework::React | Framework::NextJs => &[
                    ("@testing-library/dom", v::TESTING_LIBRARY_DOM),
                    ("@testing-library/jest-dom", v::JEST_DOM),
                    ("@testing-library/react", v::TESTING_LIBRARY_REACT),
                ],
                Framework::Vue => &[("@vue/test-utils", v::VUE_TEST_UTILS)],
                Framework::Svelte | Framework::SvelteKit => {
                    &[("@testing-library/svelte", v::TESTING_LIBRARY_SVELTE)]
                }
                Framework::Solid => &[("@solidjs/testing-library", v::TESTING_LIBRARY_SOLID)],
                _ => &[],
            };
            let base = base.and_dev(binding);
            // Next.js has no Vite config of its own to hang Vitest on.
            if framework == Framework::NextJs {
                base.and_dev(&[("@vitejs/plugin-react", v::PLUGIN_REACT)])
            } else {
                base
            }
        }
        Testing::Jest => {
            let base = Fragment::dev(&[("jest", v::JEST)]);
            if framework == Framework::Angular {
                return base.and_dev(&[
                    ("@types/jest", v::JEST_TYPES),
                    ("jest-preset-angular", v::JEST_ANGULAR),
                ]);
            }
            let base = base
                .and_dev(&[("jest-environment-jsdom", v::JEST)])
                .and_types(language, &[("@types/jest", v::JEST_TYPES), ("ts-jest", v::TS_JEST)]);
            if is_react_family(framework) {
                base.and_dev(&[
                    ("@testing-library/dom", v::TESTING_LIBRARY_DOM),
                    ("@testing-library/jest-dom", v::JEST_DOM),
                    ("@testing-library/react", v::TESTING_LIBRARY_REACT),
                ])
            } else {
                base
            }
        }
        Testing::Playwright => Fragment::dev(&[("@playwright/test", v::PLAYWRIGHT)]),
        Testing::Cypress => Fragment::dev(&[("cypress", v::CYPRESS)]),
    }
}

pub fn ui_library(ui: UiLibrary) -> Fragment {
    match ui {
        UiLibrary::Mui => Fragment::deps(&[
            ("@emotion/react", v::EMOTION),
            ("@emotion/styled", v::EMOTION),
            ("@mui/material", v::MUI),
        ]),
        UiLibrary::ChakraUi => Fragment::deps(&[
            ("@chakra-ui/react", v::CHAKRA),
            ("@emotion/react", v::EMOTION),
        ]),
        UiLibrary::Mantine => Fragment::deps(&[
            ("@mantine/core", v::MANTINE),
            ("@mantine/hooks", v::MANTINE),
        ]),
        UiLibrary::AntDesign => Fragment::deps(&[("antd", v::ANTD)]),
        UiLibrary::Vuetify => Fragment::deps(&[("vuetify", v::VUETIFY)]),
        UiLibrary::ElementPlus => Fragment::deps(&[("element-plus", v::ELEMENT_PLUS)]),
        UiLibrary::AngularMaterial => Fragment::deps(&[
            ("@angular/cdk", v::ANGULAR),
            ("@angular/material", v::ANGULAR),
        ]),
    }
}

/// Ant Design ships a separate package for Vue.
fn ui_library_for(framework: Framework, ui: UiLibrary) -> Fragment {
    match (framework, ui) {
        (Framework::Vue, UiLibrary::AntDesign) => Fragment::deps(&[("ant-design-vue", v::ANTD_VUE)]),
        _ => ui_library(ui),
    }
}

pub fn form_management(framework: Framework, forms: FormManagement) -> Fragment {
    match forms {
        FormManagement::ReactHookForm => Fragment::deps(&[("react-hook-form", v::REACT_HOOK_FORM)]),
        FormManagement::Formik => Fragment::deps(&[("formik", v::FORMIK)]),
        FormManagement::VeeValidate => Fragment::deps(&[("vee-validate", v::VEE_VALIDATE)]),
        FormManagement::Felte if framework == Framework::Solid => {
            Fragment::deps(&[("@felte/solid", v::FELTE_SOLID)])
        }
        FormManagement::Felte => Fragment::deps(&[("felte", v::FELTE)]),
    }
}

pub fn animation(animation: Animation) -> Fragment {
    match animation {
        Animation::FramerMotion => Fragment::deps(&[("framer-motion", v::FRAMER_MOTION)]),
        Animation::Gsap => Fragment::deps(&[("gsap", v::GSAP)]),
        Animation::AutoAnimate => Fragment::deps(&[("@formkit/auto-animate", v::AUTO_ANIMATE)]),
    }
}

pub fn icons(framework: Framework, icons: Icons) -> Fragment {
    match icons {
        Icons::Lucide => {
            let package = match framework {
                Framework::React | Framework::NextJs => "lucide-react",
                Framework::Vue => "lucide-vue-next",
                Framework::Svelte | Framework::SvelteKit => "lucide-svelte",
                Framework::Solid => "lucide-solid",
                Framework::Angular => "lucide-angular",
                Framework::Vanilla | Framework::Astro => "lucide",
            };
            Fragment::deps(&[(package, v::LUCIDE)])
        }
        Icons::ReactIcons => Fragment::deps(&[("react-icons", v::REACT_ICONS)]),
        Icons::FontAwesome => {
            let base = Fragment::deps(&[
                ("@fortawesome/fontawesome-svg-core", v::FONTAWESOME),
                ("@fortawesome/free-solid-svg-icons", v::FONTAWESOME),
            ]);
            let binding: &[Package] = match framework {
                Framework::Vue => &[("@fortawesome/vue-fontawesome", v::FONTAWESOME_VUE)],
                Framework::Angular => &[("@fortawesome/angular-fontawesome", v::FONTAWESOME_ANGULAR)],
                _ => &[("@fortawesome/react-fontawesome", v::FONTAWESOME_REACT)],
            };
            Fragment {
                dependencies: [base.dependencies, binding.to_vec()].concat(),
                dev_dependencies: Vec::new(),
            }
        }
        Icons::Iconify => match framework {
            Framework::React | Framework::NextJs => Fragment::deps(&[("@iconify/react", v::ICONIFY)]),
            Framework::Vue => Fragment::deps(&[("@iconify/vue", v::ICONIFY_VUE)]),
            fw if is_svelte_family(fw) => Fragment::deps(&[("@iconify/svelte", v::ICONIFY_SVELTE)]),
            _ => Fragment::deps(&[("iconify-icon", v::ICONIFY_ICON)]),
        },
    }
}

pub fn data_viz(framework: Framework, language: Language, viz: DataViz) -> Fragment {
    match viz {
        DataViz::Recharts => Fragment::deps(&[("recharts", v::RECHARTS)]),
        DataViz::ChartJs => match framework {
            fw if is_react_family(fw) => Fragment::deps(&[
                ("chart.js", v::CHARTJS),
                ("react-chartjs-2", v::REACT_CHARTJS),
            ]),
            Framework::Vue => Fragment::deps(&[("chart.js", v::CHARTJS), ("vue-chartjs", v::VUE_CHARTJS)]),
            _ => Fragment::deps(&[("chart.js", v::CHARTJS)]),
        },
        DataViz::D3 => Fragment::deps(&[("d3", v::D3)]).and_types(language, &[("@types/d3", v::D3_TYPES)]),
        DataViz::ECharts => match framework {
            fw if is_react_family(fw) => Fragment::deps(&[
                ("echarts", v::ECHARTS),
                ("echarts-for-react", v::ECHARTS_REACT),
            ]),
            Framework::Vue => Fragment::deps(&[("echarts", v::ECHARTS), ("vue-echarts", v::VUE_ECHARTS)]),
            _ => Fragment::deps(&[("echarts", v::ECHARTS)]),
        },
    }
}

pub fn utilities(language: Language, utilities: Utilities) -> Fragment {
    match utilities {
        Utilities::Lodash => Fragment::deps(&[("lodash-es", v::LODASH)])
            .and_types(language, &[("@types/lodash-es", v::LODASH_TYPES)]),
        Utilities::DateFns => Fragment::deps(&[("date-fns", v::DATE_FNS)]),
        Utilities::Dayjs => Fragment::deps(&[("dayjs", v::DAYJS)]),
        Utilities::Luxon => Fragment::deps(&[("luxon", v::LUXON)])
            .and_types(language, &[("@types/luxon", v::LUXON_TYPES)]),
    }
}

pub fn i18n(framework: Framework, i18n: I18n) -> Fragment {
    match i18n {
        I18n::I18next if is_react_family(framework) => Fragment::deps(&[
            ("i18next", v::I18NEXT),
            ("react-i18next", v::REACT_I18NEXT),
        ]),
        I18n::I18next => Fragment::deps(&[("i18next", v::I18NEXT)]),
        I18n::VueI18n => Fragment::deps(&[("vue-i18n", v::VUE_I18N)]),
        I18n::SvelteI18n => Fragment::deps(&[("svelte-i18n", v::SVELTE_I18N)]),
        I18n::NgxTranslate => Fragment::deps(&[
            ("@ngx-translate/core", v::NGX_TRANSLATE),
            ("@ngx-translate/http-loader", v::NGX_TRANSLATE),
        ]),
    }
}

/// Every fragment `config` implies, framework first, then axes in
/// capability-check order. Unset axes are skipped.
pub fn collect(config: &ProjectConfig) -> Vec<Fragment> {
    let fw = config.framework();
    let lang = config.language();

    let mut fragments = vec![framework(fw, lang)];
    fragments.extend(config.styling().map(|s| styling(fw, s)));
    fragments.extend(config.routing().map(|r| routing(fw, r)));
    fragments.extend(config.state_management().map(|s| state_management(fw, s)));
    fragments.extend(config.data_fetching().map(|d| data_fetching(fw, d)));
    fragments.extend(config.testing().map(|t| testing(fw, lang, t)));
    fragments.extend(config.ui_library().map(|u| ui_library_for(fw, u)));
    fragments.extend(config.form_management().map(|f| form_management(fw, f)));
    fragments.extend(config.animation().map(animation));
    fragments.extend(config.icons().map(|i| icons(fw, i)));
    fragments.extend(config.data_viz().map(|d| data_viz(fw, lang, d)));
    fragments.extend(config.utilities().map(|u| utilities(lang, u)));
    fragments.extend(config.i18n().map(|i| i18n(fw, i)));
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(packages: &[Package]) -> Vec<&'static str> {
        packages.iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn unset_axes_contribute_nothing() {
        let config = ProjectConfig::builder("app", Framework::Vanilla)
            .language(Language::JavaScript)
            .build();
        let fragments = collect(&config);

        assert_eq!(fragments.len(), 1);
        assert_eq!(names(&fragments[0].dev_dependencies), ["vite"]);
        assert!(fragments[0].dependencies.is_empty());
    }

    #[test]
    fn bindings_follow_the_framework() {
        let query = |fw| names(&data_fetching(fw, DataFetching::TanStackQuery).dependencies);
        assert_eq!(query(Framework::React), ["@tanstack/react-query"]);
        assert_eq!(query(Framework::Vue), ["@tanstack/vue-query"]);
        assert_eq!(query(Framework::SvelteKit), ["@tanstack/svelte-query"]);
        assert_eq!(query(Framework::Solid), ["@tanstack/solid-query"]);

        let lucide = |fw| names(&icons(fw, Icons::Lucide).dependencies);
        assert_eq!(lucide(Framework::Svelte), ["lucide-svelte"]);
        assert_eq!(lucide(Framework::Astro), ["lucide"]);
    }

    #[test]
    fn typescript_adds_type_packages_only_when_selected() {
        let ts = framework(Framework::React, Language::TypeScript);
        let js = framework(Framework::React, Language::JavaScript);

        assert!(names(&ts.dev_dependencies).contains(&"typescript"));
        assert!(names(&ts.dev_dependencies).contains(&"@types/react"));
        assert_eq!(names(&js.dev_dependencies), ["vite", "@vitejs/plugin-react"]);
    }

    #[test]
    fn tailwind_uses_postcss_where_there_is_no_vite() {
        let next = styling(Framework::NextJs, Styling::Tailwind);
        let react = styling(Framework::React, Styling::Tailwind);

        assert!(names(&next.dev_dependencies).contains(&"@tailwindcss/postcss"));
        assert_eq!(names(&react.dependencies), ["tailwindcss", "@tailwindcss/vite"]);
    }

    #[test]
    fn css_modules_need_no_package() {
        assert!(styling(Framework::React, Styling::CssModules).is_empty());
    }
}
