//! Framework capability table.
//!
//! Every framework is described exactly once by its [`FrameworkDef`]: which
//! family it belongs to, the package that identifies it in `package.json`,
//! the build config it owns, and which option values it accepts per axis.
//! The orchestrator and every generator consult this table; nothing else
//! encodes option compatibility.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `Framework` in `value_objects.rs`
//! 2. Add one [`FrameworkDef`] entry to [`CAPABILITY_TABLE`]
//! 3. Register a generator for it in `kiln-adapters`
//!
//! # "None" versus "not exposed"
//!
//! An optional axis in [`GeneratorCapability`] is `Option<&[T]>`.
//! `Some(list)` means the user may pick any listed value or nothing;
//! `None` means the framework has no such choice at all (Next.js owns its
//! router), so only "nothing" is accepted. The two cases fail with
//! different errors.

use crate::domain::config::ProjectConfig;
use crate::domain::error::DomainError;
use crate::domain::value_objects::{
    Animation, Axis, AxisValue, DataFetching, DataViz, FormManagement, Framework, I18n, Icons,
    Language, Routing, StateManagement, Styling, Testing, UiLibrary, Utilities,
};

// ── Definitions ──────────────────────────────────────────────────────────────

/// Whether a framework relies on a shared bundler config or owns its build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkFamily {
    /// Ships a bundler config (Vite, or `angular.json` for Angular).
    Core,
    /// Owns its build pipeline end to end.
    Meta,
}

impl FrameworkFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Meta => "meta",
        }
    }
}

/// Build config file name per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    pub javascript: &'static str,
    pub typescript: &'static str,
}

impl BuildConfig {
    const fn same(name: &'static str) -> Self {
        Self {
            javascript: name,
            typescript: name,
        }
    }

    const fn vite() -> Self {
        Self {
            javascript: "vite.config.js",
            typescript: "vite.config.ts",
        }
    }

    pub const fn file_name(&self, language: Language) -> &'static str {
        match language {
            Language::JavaScript => self.javascript,
            Language::TypeScript => self.typescript,
        }
    }
}

/// The option values one framework's generator can handle.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorCapability {
    pub languages: &'static [Language],
    pub styling: &'static [Styling],
    pub testing: &'static [Testing],
    pub routing: Option<&'static [Routing]>,
    pub state_management: Option<&'static [StateManagement]>,
    pub data_fetching: Option<&'static [DataFetching]>,
    pub ui_library: Option<&'static [UiLibrary]>,
    pub form_management: Option<&'static [FormManagement]>,
    pub animation: Option<&'static [Animation]>,
    pub icons: Option<&'static [Icons]>,
    pub data_viz: Option<&'static [DataViz]>,
    pub utilities: Option<&'static [Utilities]>,
    pub i18n: Option<&'static [I18n]>,
}

/// Everything the core needs to know about one framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDef {
    pub framework: Framework,
    pub family: FrameworkFamily,

    /// Dependency that must appear in `package.json`.
    pub package: &'static str,

    /// The config file that drives the build.
    pub build_config: BuildConfig,

    pub capability: GeneratorCapability,
}

// ── Shared value lists ───────────────────────────────────────────────────────

const BOTH_LANGUAGES: &[Language] = &[Language::TypeScript, Language::JavaScript];

const STYLESHEETS: &[Styling] = &[
    Styling::Tailwind,
    Styling::Scss,
    Styling::Less,
    Styling::CssModules,
    Styling::UnoCss,
];

const REACT_STYLING: &[Styling] = &[
    Styling::Tailwind,
    Styling::Scss,
    Styling::Less,
    Styling::CssModules,
    Styling::StyledComponents,
    Styling::Emotion,
    Styling::UnoCss,
];

const NEXT_STYLING: &[Styling] = &[
    Styling::Tailwind,
    Styling::Scss,
    Styling::CssModules,
    Styling::StyledComponents,
    Styling::Emotion,
];

const VITE_TESTING: &[Testing] = &[
    Testing::Vitest,
    Testing::Jest,
    Testing::Playwright,
    Testing::Cypress,
];

const REACT_STATE: &[StateManagement] = &[
    StateManagement::ReduxToolkit,
    StateManagement::Zustand,
    StateManagement::Jotai,
    StateManagement::MobX,
];

const REACT_DATA: &[DataFetching] = &[
    DataFetching::TanStackQuery,
    DataFetching::Swr,
    DataFetching::Axios,
    DataFetching::Apollo,
];

const REACT_UI: &[UiLibrary] = &[
    UiLibrary::Mui,
    UiLibrary::ChakraUi,
    UiLibrary::Mantine,
    UiLibrary::AntDesign,
];

const REACT_FORMS: &[FormManagement] = &[FormManagement::ReactHookForm, FormManagement::Formik];

const ALL_ANIMATION: &[Animation] = &[Animation::FramerMotion, Animation::Gsap, Animation::AutoAnimate];
const PLAIN_ANIMATION: &[Animation] = &[Animation::Gsap, Animation::AutoAnimate];

const ALL_ICONS: &[Icons] = &[Icons::Lucide, Icons::ReactIcons, Icons::FontAwesome, Icons::Iconify];
const PLAIN_ICONS: &[Icons] = &[Icons::Lucide, Icons::Iconify];

const ALL_CHARTS: &[DataViz] = &[DataViz::Recharts, DataViz::ChartJs, DataViz::D3, DataViz::ECharts];
const PLAIN_CHARTS: &[DataViz] = &[DataViz::ChartJs, DataViz::D3, DataViz::ECharts];

const ALL_UTILITIES: &[Utilities] = &[
    Utilities::Lodash,
    Utilities::DateFns,
    Utilities::Dayjs,
    Utilities::Luxon,
];

/// Single source of truth for framework capabilities.
pub static CAPABILITY_TABLE: &[FrameworkDef] = &[
    // ── Core family ──────────────────────────────────────────────────────────
    FrameworkDef {
        framework: Framework::React,
        family: FrameworkFamily::Core,
        package: "react",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: REACT_STYLING,
            testing: VITE_TESTING,
            routing: Some(&[Routing::ReactRouter, Routing::TanStackRouter]),
            state_management: Some(REACT_STATE),
            data_fetching: Some(REACT_DATA),
            ui_library: Some(REACT_UI),
            form_management: Some(REACT_FORMS),
            animation: Some(ALL_ANIMATION),
            icons: Some(ALL_ICONS),
            data_viz: Some(ALL_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::I18next]),
        },
    },
    FrameworkDef {
        framework: Framework::Vue,
        family: FrameworkFamily::Core,
        package: "vue",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: STYLESHEETS,
            testing: VITE_TESTING,
            routing: Some(&[Routing::VueRouter]),
            state_management: Some(&[StateManagement::Pinia]),
            data_fetching: Some(&[DataFetching::TanStackQuery, DataFetching::Axios, DataFetching::Apollo]),
            ui_library: Some(&[UiLibrary::Vuetify, UiLibrary::ElementPlus, UiLibrary::AntDesign]),
            form_management: Some(&[FormManagement::VeeValidate]),
            animation: Some(PLAIN_ANIMATION),
            icons: Some(&[Icons::Lucide, Icons::FontAwesome, Icons::Iconify]),
            data_viz: Some(PLAIN_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::VueI18n]),
        },
    },
    FrameworkDef {
        framework: Framework::Svelte,
        family: FrameworkFamily::Core,
        package: "svelte",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: STYLESHEETS,
            testing: VITE_TESTING,
            routing: Some(&[Routing::SvelteSpaRouter]),
            state_management: Some(&[StateManagement::Nanostores]),
            data_fetching: Some(&[DataFetching::TanStackQuery, DataFetching::Axios]),
            // Svelte component kits are not wired up
            ui_library: None,
            form_management: Some(&[FormManagement::Felte]),
            animation: Some(PLAIN_ANIMATION),
            icons: Some(PLAIN_ICONS),
            data_viz: Some(PLAIN_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::SvelteI18n]),
        },
    },
    FrameworkDef {
        framework: Framework::Solid,
        family: FrameworkFamily::Core,
        package: "solid-js",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: STYLESHEETS,
            testing: &[Testing::Vitest, Testing::Playwright, Testing::Cypress],
            routing: Some(&[Routing::SolidRouter, Routing::TanStackRouter]),
            state_management: Some(&[StateManagement::Zustand, StateManagement::Nanostores]),
            data_fetching: Some(&[DataFetching::TanStackQuery, DataFetching::Axios]),
            ui_library: None,
            form_management: Some(&[FormManagement::Felte]),
            animation: Some(PLAIN_ANIMATION),
            icons: Some(PLAIN_ICONS),
            data_viz: Some(PLAIN_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::I18next]),
        },
    },
    FrameworkDef {
        framework: Framework::Angular,
        family: FrameworkFamily::Core,
        package: "@angular/core",
        build_config: BuildConfig::same("angular.json"),
        capability: GeneratorCapability {
            languages: &[Language::TypeScript],
            styling: &[Styling::Tailwind, Styling::Scss, Styling::Less],
            testing: &[Testing::Jest, Testing::Playwright, Testing::Cypress],
            routing: Some(&[Routing::AngularRouter]),
            state_management: Some(&[StateManagement::NgRx]),
            // HttpClient and reactive forms ship with the framework
            data_fetching: None,
            ui_library: Some(&[UiLibrary::AngularMaterial]),
            form_management: None,
            animation: Some(&[Animation::Gsap]),
            icons: Some(&[Icons::Lucide, Icons::FontAwesome]),
            data_viz: Some(PLAIN_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::NgxTranslate]),
        },
    },
    FrameworkDef {
        framework: Framework::Vanilla,
        family: FrameworkFamily::Core,
        package: "vite",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: &[Styling::Tailwind, Styling::Scss, Styling::Less, Styling::UnoCss],
            testing: VITE_TESTING,
            routing: None,
            state_management: Some(&[StateManagement::Nanostores, StateManagement::Zustand]),
            data_fetching: Some(&[DataFetching::Axios]),
            ui_library: None,
            form_management: None,
            animation: Some(PLAIN_ANIMATION),
            icons: Some(PLAIN_ICONS),
            data_viz: Some(PLAIN_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::I18next]),
        },
    },
    // ── Meta family ──────────────────────────────────────────────────────────
    // File-based routing is built in, so none of these expose a router.
    FrameworkDef {
        framework: Framework::NextJs,
        family: FrameworkFamily::Meta,
        package: "next",
        build_config: BuildConfig {
            javascript: "next.config.mjs",
            typescript: "next.config.ts",
        },
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: NEXT_STYLING,
            testing: VITE_TESTING,
            routing: None,
            state_management: Some(REACT_STATE),
            data_fetching: Some(REACT_DATA),
            ui_library: Some(REACT_UI),
            form_management: Some(REACT_FORMS),
            animation: Some(ALL_ANIMATION),
            icons: Some(ALL_ICONS),
            data_viz: Some(ALL_CHARTS),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::I18next]),
        },
    },
    FrameworkDef {
        framework: Framework::Astro,
        family: FrameworkFamily::Meta,
        package: "astro",
        build_config: BuildConfig {
            javascript: "astro.config.mjs",
            typescript: "astro.config.ts",
        },
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: &[Styling::Tailwind, Styling::Scss, Styling::Less, Styling::UnoCss],
            testing: &[Testing::Vitest, Testing::Playwright, Testing::Cypress],
            routing: None,
            state_management: Some(&[StateManagement::Nanostores]),
            data_fetching: Some(&[DataFetching::Axios]),
            ui_library: None,
            form_management: None,
            animation: Some(&[Animation::Gsap]),
            icons: Some(PLAIN_ICONS),
            data_viz: Some(&[DataViz::ChartJs, DataViz::D3]),
            utilities: Some(ALL_UTILITIES),
            i18n: None,
        },
    },
    FrameworkDef {
        framework: Framework::SvelteKit,
        family: FrameworkFamily::Meta,
        package: "@sveltejs/kit",
        build_config: BuildConfig::vite(),
        capability: GeneratorCapability {
            languages: BOTH_LANGUAGES,
            styling: &[Styling::Tailwind, Styling::Scss, Styling::Less, Styling::UnoCss],
            testing: &[Testing::Vitest, Testing::Playwright],
            routing: None,
            state_management: Some(&[StateManagement::Nanostores]),
            data_fetching: Some(&[DataFetching::TanStackQuery, DataFetching::Axios]),
            ui_library: None,
            form_management: Some(&[FormManagement::Felte]),
            animation: Some(PLAIN_ANIMATION),
            icons: Some(PLAIN_ICONS),
            data_viz: Some(&[DataViz::ChartJs, DataViz::D3]),
            utilities: Some(ALL_UTILITIES),
            i18n: Some(&[I18n::SvelteI18n]),
        },
    },
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// Find the definition for a framework. O(n) over nine entries.
pub fn find_framework(framework: Framework) -> Option<&'static FrameworkDef> {
    CAPABILITY_TABLE.iter().find(|def| def.framework == framework)
}

/// Supported values of one axis, as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSupport {
    pub axis: Axis,
    /// `None` when the framework does not expose this axis.
    pub values: Option<Vec<&'static str>>,
}

fn names<T: AxisValue>(values: &[T]) -> Vec<&'static str> {
    values.iter().map(AxisValue::name).collect()
}

fn joined<T: AxisValue>(values: &[T]) -> String {
    let names = names(values);
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn check_listed<T: AxisValue>(
    framework: Framework,
    selected: T,
    supported: &[T],
) -> Result<(), DomainError> {
    if supported.contains(&selected) {
        return Ok(());
    }
    Err(DomainError::UnsupportedOption {
        framework: framework.to_string(),
        axis: T::AXIS.to_string(),
        value: selected.to_string(),
        supported: joined(supported),
    })
}

fn check_axis<T: AxisValue>(
    framework: Framework,
    selected: Option<T>,
    supported: Option<&[T]>,
) -> Result<(), DomainError> {
    match (selected, supported) {
        (None, _) => Ok(()),
        (Some(value), None) => Err(DomainError::AxisNotExposed {
            framework: framework.to_string(),
            axis: T::AXIS.to_string(),
            value: value.to_string(),
        }),
        (Some(value), Some(list)) => check_listed(framework, value, list),
    }
}

impl GeneratorCapability {
    /// Check every selected option of `config` against this capability.
    ///
    /// Axes are checked in a fixed order and the first violation is returned.
    pub fn check(&self, framework: Framework, config: &ProjectConfig) -> Result<(), DomainError> {
        check_listed(framework, config.language(), self.languages)?;
        check_axis(framework, config.styling(), Some(self.styling))?;
        check_axis(framework, config.routing(), self.routing)?;
        check_axis(framework, config.state_management(), self.state_management)?;
        check_axis(framework, config.data_fetching(), self.data_fetching)?;
        check_axis(framework, config.testing(), Some(self.testing))?;
        check_axis(framework, config.ui_library(), self.ui_library)?;
        check_axis(framework, config.form_management(), self.form_management)?;
        check_axis(framework, config.animation(), self.animation)?;
        check_axis(framework, config.icons(), self.icons)?;
        check_axis(framework, config.data_viz(), self.data_viz)?;
        check_axis(framework, config.utilities(), self.utilities)?;
        check_axis(framework, config.i18n(), self.i18n)
    }

    /// Per-axis support summary, in check order. Used by `kiln list`.
    pub fn describe(&self) -> Vec<AxisSupport> {
        fn entry<T: AxisValue>(values: Option<&[T]>) -> AxisSupport {
            AxisSupport {
                axis: T::AXIS,
                values: values.map(names),
            }
        }

        vec![
            entry(Some(self.languages)),
            entry(Some(self.styling)),
            entry(self.routing),
            entry(self.state_management),
            entry(self.data_fetching),
            entry(Some(self.testing)),
            entry(self.ui_library),
            entry(self.form_management),
            entry(self.animation),
            entry(self.icons),
            entry(self.data_viz),
            entry(self.utilities),
            entry(self.i18n),
        ]
    }
}

// ── Table integrity (checked in tests) ───────────────────────────────────────

fn assert_unique<T: AxisValue + std::fmt::Debug>(framework: Framework, values: &[T]) {
    for (i, value) in values.iter().enumerate() {
        assert!(
            !values[i + 1..].contains(value),
            "{framework:?}: {:?} lists {value:?} twice",
            T::AXIS
        );
    }
}

fn assert_optional_unique<T: AxisValue + std::fmt::Debug>(framework: Framework, values: Option<&[T]>) {
    if let Some(values) = values {
        assert!(
            !values.is_empty(),
            "{framework:?}: {:?} is exposed with no values; use None instead",
            T::AXIS
        );
        assert_unique(framework, values);
    }
}

/// Assert that the capability table is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_table_integrity() {
    for framework in Framework::ALL {
        let count = CAPABILITY_TABLE
            .iter()
            .filter(|def| def.framework == *framework)
            .count();
        assert_eq!(count, 1, "{framework:?} must have exactly one table entry");
    }

    for def in CAPABILITY_TABLE {
        let fw = def.framework;
        let cap = &def.capability;

        assert!(!def.package.is_empty(), "{fw:?} has no package");
        assert!(!cap.languages.is_empty(), "{fw:?} supports no language");
        assert!(!cap.styling.is_empty(), "{fw:?} lists no styling");
        assert!(!cap.testing.is_empty(), "{fw:?} lists no testing");

        assert_unique(fw, cap.languages);
        assert_unique(fw, cap.styling);
        assert_unique(fw, cap.testing);
        assert_optional_unique(fw, cap.routing);
        assert_optional_unique(fw, cap.state_management);
        assert_optional_unique(fw, cap.data_fetching);
        assert_optional_unique(fw, cap.ui_library);
        assert_optional_unique(fw, cap.form_management);
        assert_optional_unique(fw, cap.animation);
        assert_optional_unique(fw, cap.icons);
        assert_optional_unique(fw, cap.data_viz);
        assert_optional_unique(fw, cap.utilities);
        assert_optional_unique(fw, cap.i18n);

        if def.family == FrameworkFamily::Meta {
            assert!(
                cap.routing.is_none(),
                "{fw:?} owns its router and must not expose a routing axis"
            );
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn config(framework: Framework) -> crate::domain::config::ProjectConfigBuilder {
        ProjectConfig::builder("app", framework)
    }

    fn capability(framework: Framework) -> &'static GeneratorCapability {
        &find_framework(framework).unwrap().capability
    }

    #[test]
    fn table_is_internally_consistent() {
        assert_table_integrity();
    }

    #[test]
    fn every_framework_accepts_an_empty_selection() {
        for framework in Framework::ALL {
            let language = capability(*framework).languages[0];
            let cfg = config(*framework).language(language).build();
            assert!(
                capability(*framework).check(*framework, &cfg).is_ok(),
                "{framework:?} rejected a config with no options"
            );
        }
    }

    #[test]
    fn react_accepts_the_reference_stack() {
        let cfg = config(Framework::React)
            .styling(Styling::Tailwind)
            .routing(Routing::ReactRouter)
            .state_management(StateManagement::Zustand)
            .data_fetching(DataFetching::TanStackQuery)
            .build();
        assert!(capability(Framework::React).check(Framework::React, &cfg).is_ok());
    }

    #[test]
    fn vue_rejects_react_router_with_supported_list() {
        let cfg = config(Framework::Vue).routing(Routing::ReactRouter).build();
        let err = capability(Framework::Vue)
            .check(Framework::Vue, &cfg)
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::UnsupportedOption {
                framework: "vue".into(),
                axis: "routing".into(),
                value: "react-router".into(),
                supported: "vue-router".into(),
            }
        );
    }

    #[test]
    fn meta_frameworks_do_not_expose_routing() {
        for framework in [Framework::NextJs, Framework::Astro, Framework::SvelteKit] {
            let cfg = config(framework).routing(Routing::ReactRouter).build();
            let err = capability(framework).check(framework, &cfg).unwrap_err();
            assert!(
                matches!(err, DomainError::AxisNotExposed { ref axis, .. } if axis == "routing"),
                "{framework:?}: {err:?}"
            );
        }
    }

    #[test]
    fn angular_is_typescript_only() {
        let cfg = config(Framework::Angular)
            .language(Language::JavaScript)
            .build();
        let err = capability(Framework::Angular)
            .check(Framework::Angular, &cfg)
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedOption { ref axis, .. } if axis == "language"));
    }

    #[test]
    fn first_violation_in_axis_order_wins() {
        // Both styling and i18n are wrong; styling is checked first.
        let cfg = config(Framework::Angular)
            .styling(Styling::Emotion)
            .i18n(I18n::VueI18n)
            .build();
        let err = capability(Framework::Angular)
            .check(Framework::Angular, &cfg)
            .unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedOption { ref axis, .. } if axis == "styling"));
    }

    #[test]
    fn build_config_depends_on_language() {
        let next = find_framework(Framework::NextJs).unwrap();
        assert_eq!(next.build_config.file_name(Language::TypeScript), "next.config.ts");
        assert_eq!(next.build_config.file_name(Language::JavaScript), "next.config.mjs");

        let angular = find_framework(Framework::Angular).unwrap();
        assert_eq!(angular.build_config.file_name(Language::TypeScript), "angular.json");
    }

    #[test]
    fn describe_marks_hidden_axes() {
        let summary = capability(Framework::Astro).describe();
        let routing = summary.iter().find(|s| s.axis == Axis::Routing).unwrap();
        let styling = summary.iter().find(|s| s.axis == Axis::Styling).unwrap();

        assert_eq!(routing.values, None);
        assert!(styling.values.as_ref().unwrap().contains(&"tailwind"));
        assert_eq!(summary.len(), 13);
    }
}
