//! Starter store modules, one per state-management choice.

use kiln_core::domain::{Framework, Language, StateManagement};

use super::layout::Layout;

/// A generated store file and the module stem other files import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreModule {
    pub path: String,
    pub stem: &'static str,
    pub content: String,
}

pub fn store_module(
    framework: Framework,
    language: Language,
    layout: &Layout,
    state: StateManagement,
) -> StoreModule {
    let ts = language.is_typescript();
    let (stem, content) = match state {
        StateManagement::ReduxToolkit => ("index", redux(ts)),
        StateManagement::Zustand => ("counter", zustand(framework, ts)),
        StateManagement::Jotai => (
            "counter",
            "import { atom } from 'jotai';\n\nexport const countAtom = atom(0);\n".to_string(),
        ),
        StateManagement::MobX => ("counter", MOBX.to_string()),
        StateManagement::Pinia => ("counter", PINIA.to_string()),
        StateManagement::NgRx => ("counter.reducer", NGRX.to_string()),
        StateManagement::Nanostores => ("counter", NANOSTORES.to_string()),
    };

    StoreModule {
        path: format!("{}/{stem}.{}", layout.store, language.script_extension()),
        stem,
        content,
    }
}

fn redux(ts: bool) -> String {
    let mut out = String::from(
        "import { configureStore, createSlice } from '@reduxjs/toolkit';

const counterSlice = createSlice({
  name: 'counter',
  initialState: { value: 0 },
  reducers: {
    increment: (state) => {
      state.value += 1;
    },
  },
});

export const { increment } = counterSlice.actions;

export const store = configureStore({
  reducer: { counter: counterSlice.reducer },
});
",
    );
    if ts {
        out.push_str(
            "\nexport type RootState = ReturnType<typeof store.getState>;\nexport type AppDispatch = typeof store.dispatch;\n",
        );
    }
    out
}

fn zustand(framework: Framework, ts: bool) -> String {
    // React bindings only exist for React-based frameworks.
    let (import, factory, export) = match framework {
        Framework::React | Framework::NextJs => {
            ("import { create } from 'zustand';", "create", "useCounterStore")
        }
        _ => (
            "import { createStore } from 'zustand/vanilla';",
            "createStore",
            "counterStore",
        ),
    };

    let body = "(set) => ({\n  count: 0,\n  increment: () => set((state) => ({ count: state.count + 1 })),\n}));\n";
    if ts {
        format!(
            "{import}\n\ninterface CounterState {{\n  count: number;\n  increment: () => void;\n}}\n\nexport const {export} = {factory}<CounterState>()({body}"
        )
    } else {
        format!("{import}\n\nexport const {export} = {factory}({body}")
    }
}

const MOBX: &str = "import { makeAutoObservable } from 'mobx';

class CounterStore {
  count = 0;

  constructor() {
    makeAutoObservable(this);
  }

  increment() {
    this.count += 1;
  }
}

export const counterStore = new CounterStore();
";

const PINIA: &str = "import { defineStore } from 'pinia';

export const useCounterStore = defineStore('counter', {
  state: () => ({ count: 0 }),
  actions: {
    increment() {
      this.count += 1;
    },
  },
});
";

const NGRX: &str = "import { createAction, createReducer, on } from '@ngrx/store';

export const increment = createAction('[Counter] Increment');

export const counterReducer = createReducer(
  0,
  on(increment, (count) => count + 1),
);
";

const NANOSTORES: &str = "import { atom } from 'nanostores';

export const $count = atom(0);

export function increment() {
  $count.set($count.get() + 1);
}
";

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_core::domain::ProjectConfig;

    fn layout() -> Layout {
        Layout::for_config(
            &ProjectConfig::builder("app", Framework::React)
                .state_management(StateManagement::Zustand)
                .build(),
        )
    }

    #[test]
    fn zustand_binding_depends_on_framework() {
        let react = store_module(Framework::React, Language::TypeScript, &layout(), StateManagement::Zustand);
        let solid = store_module(Framework::Solid, Language::TypeScript, &layout(), StateManagement::Zustand);

        assert_eq!(react.path, "src/shared/store/counter.ts");
        assert!(react.content.contains("export const useCounterStore = create<CounterState>()"));
        assert!(solid.content.contains("from 'zustand/vanilla'"));
    }

    #[test]
    fn javascript_drops_type_annotations() {
        let redux = store_module(Framework::React, Language::JavaScript, &layout(), StateManagement::ReduxToolkit);
        let zustand = store_module(Framework::React, Language::JavaScript, &layout(), StateManagement::Zustand);

        assert_eq!(redux.path, "src/shared/store/index.js");
        assert!(!redux.content.contains("RootState"));
        assert!(!zustand.content.contains("interface"));
    }
}
