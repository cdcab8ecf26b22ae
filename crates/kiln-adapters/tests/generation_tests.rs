//! Generation through the built-in registry, materialised on a real disk.

use kiln_adapters::{LocalFilesystem, builtin_registry};
use kiln_core::domain::CAPABILITY_TABLE;
use kiln_core::prelude::*;
use walkdir::WalkDir;

#[test]
fn every_framework_writes_what_it_reports() {
    let temp = tempfile::tempdir().unwrap();
    let registry = builtin_registry();
    let service = SetupService::new(
        &registry,
        Box::new(LocalFilesystem::new()),
        PathPolicy::new(temp.path()),
    );

    for (i, def) in CAPABILITY_TABLE.iter().enumerate() {
        let config = ProjectConfig::builder(format!("app-{i}"), def.framework).build();
        let outcome = service.setup_project(&config, temp.path()).unwrap();

        let mut on_disk: Vec<_> = WalkDir::new(&outcome.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect();
        on_disk.sort();
        let mut reported = outcome.files.clone();
        reported.sort();
        assert_eq!(on_disk, reported, "{}", def.framework);

        let build_config = outcome.root.join(def.build_config.file_name(config.language()));
        assert!(build_config.is_file(), "{}", build_config.display());

        let validation = ValidationService::new(&registry, Box::new(LocalFilesystem::new()));
        let failed: Vec<_> = validation
            .validate_project(&outcome.root, &config)
            .into_iter()
            .filter(|r| !r.passed)
            .collect();
        assert!(failed.is_empty(), "{}: {failed:?}", def.framework);
    }
}

#[test]
fn feature_based_layout_is_materialised() {
    let temp = tempfile::tempdir().unwrap();
    let registry = builtin_registry();
    let service = SetupService::new(
        &registry,
        Box::new(LocalFilesystem::new()),
        PathPolicy::new(temp.path()),
    );

    let config = ProjectConfig::builder("dash", Framework::React)
        .state_management(StateManagement::Zustand)
        .data_fetching(DataFetching::Axios)
        .build();
    let outcome = service.setup_project(&config, temp.path()).unwrap();

    assert!(outcome.root.join("src/features").is_dir());
    assert!(outcome.root.join("src/shared").is_dir());
    assert!(outcome.root.join("README.md").is_file());
    assert!(outcome.root.join(".gitignore").is_file());
}

#[test]
fn scaffolding_into_an_existing_empty_directory_is_allowed() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("empty")).unwrap();
    let registry = builtin_registry();
    let service = SetupService::new(
        &registry,
        Box::new(LocalFilesystem::new()),
        PathPolicy::new(temp.path()),
    );

    let config = ProjectConfig::builder("empty", Framework::Vanilla).build();
    let outcome = service.setup_project(&config, temp.path()).unwrap();

    assert_eq!(outcome.project_name, "empty");
    assert!(outcome.root.join("package.json").is_file());
}
