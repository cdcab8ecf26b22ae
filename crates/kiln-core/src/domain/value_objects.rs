//! Domain value objects: the option model.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO capability logic. Which framework accepts which option lives
//! in `capabilities.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the variant (with its canonical name) to the `option_enum!` block
//! 2. Add it to the relevant frameworks in `capabilities.rs`
//! 3. Give it a dependency fragment in `kiln-adapters`
//! 4. Done

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase and drop separators so `TanStack_Query`, `tanstack-query` and
/// `tanstackquery` all compare equal.
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $canonical:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $canonical)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Human-facing label of this option kind (used in errors).
            pub const LABEL: &'static str = $label;

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $canonical,)+
                }
            }

            /// Extra spellings accepted by `FromStr`.
            pub const fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($alias),*],)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = normalize_key(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        normalize_key(v.as_str()) == key
                            || v.aliases().iter().any(|a| normalize_key(a) == key)
                    })
                    .ok_or_else(|| DomainError::UnknownValue {
                        kind: $label,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One independently configurable dimension of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Language,
    Styling,
    Routing,
    StateManagement,
    DataFetching,
    Testing,
    UiLibrary,
    FormManagement,
    Animation,
    Icons,
    DataViz,
    Utilities,
    I18n,
}

impl Axis {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Styling => "styling",
            Self::Routing => "routing",
            Self::StateManagement => "state management",
            Self::DataFetching => "data fetching",
            Self::Testing => "testing",
            Self::UiLibrary => "ui library",
            Self::FormManagement => "form management",
            Self::Animation => "animation",
            Self::Icons => "icons",
            Self::DataViz => "data visualization",
            Self::Utilities => "utilities",
            Self::I18n => "i18n",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An option value that belongs to exactly one [`Axis`].
///
/// Lets the capability check walk every axis with one generic helper.
pub trait AxisValue: Copy + Eq + fmt::Display + 'static {
    const AXIS: Axis;

    fn name(&self) -> &'static str;
}

macro_rules! axis_value {
    ($($ty:ident => $axis:ident),+ $(,)?) => {
        $(
            impl AxisValue for $ty {
                const AXIS: Axis = Axis::$axis;

                fn name(&self) -> &'static str {
                    self.as_str()
                }
            }
        )+
    };
}

// ── Language ─────────────────────────────────────────────────────────────────

option_enum! {
    /// Source language of the generated project.
    Language("language") {
        JavaScript => "javascript" | "js",
        TypeScript => "typescript" | "ts",
    }
}

impl Language {
    /// Extension for plain script modules (`js` / `ts`).
    pub const fn script_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// Extension for JSX-flavoured modules (`jsx` / `tsx`).
    pub const fn jsx_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "jsx",
            Self::TypeScript => "tsx",
        }
    }

    pub const fn is_typescript(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

// ── Framework ─────────────────────────────────────────────────────────────────

option_enum! {
    /// The UI framework. Selects which generator handles the rest of the config.
    ///
    /// Adding a framework: add the variant here, add a `FrameworkDef` to
    /// `capabilities.rs`, then register a generator in `kiln-adapters`.
    Framework("framework") {
        React => "react",
        Vue => "vue" | "vue3",
        Svelte => "svelte",
        Solid => "solid" | "solidjs",
        Angular => "angular",
        Vanilla => "vanilla" | "none",
        NextJs => "nextjs" | "next",
        Astro => "astro",
        SvelteKit => "sveltekit" | "kit",
    }
}

/// How a component file is written for a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFormat {
    /// A framework-specific single-file component (`.vue`, `.svelte`, `.astro`).
    SingleFile(&'static str),
    /// JSX / TSX modules.
    Jsx,
    /// Plain script modules.
    Script,
}

impl Framework {
    /// The component-file format this framework uses.
    ///
    /// Intrinsic to the framework, so it lives here rather than in the
    /// capability table.
    pub const fn component_format(&self) -> ComponentFormat {
        match self {
            Self::Vue => ComponentFormat::SingleFile("vue"),
            Self::Svelte | Self::SvelteKit => ComponentFormat::SingleFile("svelte"),
            Self::Astro => ComponentFormat::SingleFile("astro"),
            Self::React | Self::Solid | Self::NextJs => ComponentFormat::Jsx,
            Self::Angular | Self::Vanilla => ComponentFormat::Script,
        }
    }

    /// File extension for component modules, as a pure function of
    /// `{framework, language}`.
    pub const fn component_extension(&self, language: Language) -> &'static str {
        match self.component_format() {
            ComponentFormat::SingleFile(ext) => ext,
            ComponentFormat::Jsx => language.jsx_extension(),
            ComponentFormat::Script => language.script_extension(),
        }
    }

    /// Display name used in generated prose (README, page titles).
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Svelte => "Svelte",
            Self::Solid => "Solid",
            Self::Angular => "Angular",
            Self::Vanilla => "Vanilla",
            Self::NextJs => "Next.js",
            Self::Astro => "Astro",
            Self::SvelteKit => "SvelteKit",
        }
    }
}

// ── Optional axes ─────────────────────────────────────────────────────────────

option_enum! {
    /// Styling approach. Plain CSS is expressed as "no styling option".
    Styling("styling") {
        Tailwind => "tailwind" | "tailwindcss",
        Scss => "scss" | "sass",
        Less => "less",
        CssModules => "css-modules",
        StyledComponents => "styled-components",
        Emotion => "emotion",
        UnoCss => "unocss",
    }
}

option_enum! {
    /// Client-side router.
    Routing("routing") {
        ReactRouter => "react-router" | "react-router-dom",
        TanStackRouter => "tanstack-router",
        VueRouter => "vue-router",
        SvelteSpaRouter => "svelte-spa-router",
        SolidRouter => "solid-router",
        AngularRouter => "angular-router",
    }
}

option_enum! {
    /// State management library.
    StateManagement("state management") {
        ReduxToolkit => "redux-toolkit" | "redux" | "rtk",
        Zustand => "zustand",
        Jotai => "jotai",
        MobX => "mobx",
        Pinia => "pinia",
        NgRx => "ngrx",
        Nanostores => "nanostores",
    }
}

option_enum! {
    /// Data fetching / server-state library.
    DataFetching("data fetching") {
        TanStackQuery => "tanstack-query" | "react-query",
        Swr => "swr",
        Axios => "axios",
        Apollo => "apollo" | "apollo-client",
    }
}

option_enum! {
    /// Testing framework.
    Testing("testing") {
        Vitest => "vitest",
        Jest => "jest",
        Playwright => "playwright",
        Cypress => "cypress",
    }
}

option_enum! {
    /// Component library.
    UiLibrary("ui library") {
        Mui => "mui" | "material-ui",
        ChakraUi => "chakra-ui" | "chakra",
        Mantine => "mantine",
        AntDesign => "ant-design" | "antd",
        Vuetify => "vuetify",
        ElementPlus => "element-plus",
        AngularMaterial => "angular-material",
    }
}

option_enum! {
    /// Form handling library.
    FormManagement("form management") {
        ReactHookForm => "react-hook-form",
        Formik => "formik",
        VeeValidate => "vee-validate",
        Felte => "felte",
    }
}

option_enum! {
    /// Animation library.
    Animation("animation") {
        FramerMotion => "framer-motion" | "motion",
        Gsap => "gsap",
        AutoAnimate => "auto-animate",
    }
}

option_enum! {
    /// Icon set.
    Icons("icons") {
        Lucide => "lucide",
        ReactIcons => "react-icons",
        FontAwesome => "fontawesome" | "font-awesome",
        Iconify => "iconify",
    }
}

option_enum! {
    /// Charting / data visualisation library.
    DataViz("data visualization") {
        Recharts => "recharts",
        ChartJs => "chartjs" | "chart.js",
        D3 => "d3",
        ECharts => "echarts",
    }
}

option_enum! {
    /// Date / general utility library.
    Utilities("utilities") {
        Lodash => "lodash",
        DateFns => "date-fns",
        Dayjs => "dayjs",
        Luxon => "luxon",
    }
}

option_enum! {
    /// Internationalisation library.
    I18n("i18n") {
        I18next => "i18next" | "react-i18next",
        VueI18n => "vue-i18n",
        SvelteI18n => "svelte-i18n",
        NgxTranslate => "ngx-translate",
    }
}

axis_value! {
    Language => Language,
    Styling => Styling,
    Routing => Routing,
    StateManagement => StateManagement,
    DataFetching => DataFetching,
    Testing => Testing,
    UiLibrary => UiLibrary,
    FormManagement => FormManagement,
    Animation => Animation,
    Icons => Icons,
    DataViz => DataViz,
    Utilities => Utilities,
    I18n => I18n,
}

// ── Structure ─────────────────────────────────────────────────────────────────

option_enum! {
    /// Source directory layout.
    Structure("structure") {
        FeatureBased => "feature-based" | "feature" | "features",
        LayerBased => "layer-based" | "layer" | "layers" | "layered",
    }
}

impl Default for Structure {
    fn default() -> Self {
        Self::FeatureBased
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

option_enum! {
    /// Package manager used for the optional install stage.
    ///
    /// Only selects the install invocation; never affects generated source.
    PackageManager("package manager") {
        Npm => "npm",
        Yarn => "yarn",
        Pnpm => "pnpm",
        Bun => "bun",
    }
}

impl PackageManager {
    /// Program name to spawn. npm, yarn and pnpm ship `.cmd` shims on Windows.
    pub fn program(&self) -> &'static str {
        match (self, cfg!(windows)) {
            (Self::Npm, true) => "npm.cmd",
            (Self::Yarn, true) => "yarn.cmd",
            (Self::Pnpm, true) => "pnpm.cmd",
            (Self::Npm, false) => "npm",
            (Self::Yarn, false) => "yarn",
            (Self::Pnpm, false) => "pnpm",
            (Self::Bun, _) => "bun",
        }
    }

    /// Arguments for a plain dependency install.
    pub const fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// The command a user would type to run a package script.
    pub fn run_command<'a>(&self, script: &'a str) -> RunCommand<'a> {
        RunCommand {
            manager: *self,
            script,
        }
    }
}

/// `npm run dev`, `yarn dev`, ... rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct RunCommand<'a> {
    manager: PackageManager,
    script: &'a str,
}

impl fmt::Display for RunCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.manager {
            PackageManager::Npm => write!(f, "npm run {}", self.script),
            PackageManager::Bun => write!(f, "bun run {}", self.script),
            PackageManager::Yarn | PackageManager::Pnpm => {
                write!(f, "{} {}", self.manager, self.script)
            }
        }
    }
}
