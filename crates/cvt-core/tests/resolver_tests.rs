use std::fs;

use cvt_core::{ActorResolver, Configuration, ResolveError};

fn config_with(actor_dir: &std::path::Path, bundled: &std::path::Path) -> Configuration {
    Configuration::new(actor_dir.join("cache")).with_actor_config_dir(actor_dir)
                                                .with_bundled_actor_dir(bundled)
}

#[test]
fn configured_directory_takes_priority() {
    let configured = tempfile::tempdir().unwrap();
    let bundled = tempfile::tempdir().unwrap();
    fs::write(configured.path().join("cpachecker.yml"), "actor_name: cpachecker\n").unwrap();
    fs::write(bundled.path().join("cpachecker.yml"), "actor_name: cpachecker\n").unwrap();

    let cfg = config_with(configured.path(), bundled.path());
    let def = ActorResolver::new(&cfg).resolve("cpachecker").unwrap();
    assert_eq!(def.name(), "cpachecker");
    assert_eq!(def.render(), "cpachecker");
    assert_eq!(def.path().as_path(), Some(configured.path().join("cpachecker.yml").as_path()));
}

#[test]
fn falls_back_to_bundled_actors() {
    let configured = tempfile::tempdir().unwrap();
    let bundled = tempfile::tempdir().unwrap();
    fs::write(bundled.path().join("testcov.yml"), "actor_name: testcov\n").unwrap();

    let cfg = config_with(configured.path(), bundled.path());
    let def = ActorResolver::new(&cfg).resolve("testcov").unwrap();
    assert_eq!(def.path().as_path(), Some(bundled.path().join("testcov.yml").as_path()));
}

#[test]
fn unknown_actor_reports_every_searched_location() {
    let configured = tempfile::tempdir().unwrap();
    let bundled = tempfile::tempdir().unwrap();
    let cfg = config_with(configured.path(), bundled.path());

    let err = ActorResolver::new(&cfg).resolve("nope").unwrap_err();
    let ResolveError::NotFound { name, searched } = err;
    assert_eq!(name, "nope");
    assert_eq!(searched,
               vec![configured.path().join("nope.yml"), bundled.path().join("nope.yml")]);
}

#[test]
fn direct_yaml_path_uses_the_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = dir.path().join("uautomizer.yaml");
    fs::write(&yaml, "actor_name: uautomizer\n").unwrap();

    let cfg = Configuration::new(dir.path().join("cache"));
    let def = ActorResolver::new(&cfg).resolve(yaml.to_str().unwrap()).unwrap();
    assert_eq!(def.name(), "uautomizer");
}
