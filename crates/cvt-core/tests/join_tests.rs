use std::fs;

use cvt_core::model::{Artifact, ArtifactKind, PathInput, TestGoal, TestSuite};
use cvt_core::{JoinError, SequentialIds};

fn goal_file(dir: &std::path::Path, name: &str, body: &str) -> TestGoal {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    TestGoal::new(path.to_str().unwrap())
}

#[test]
fn absent_goal_is_the_join_identity() {
    let dir = tempfile::tempdir().unwrap();
    let ids = SequentialIds::new("j");
    let g = goal_file(dir.path(), "g.prp", "COVER EDGES\n");

    let left = TestGoal::absent().join(g.clone(), &ids).unwrap();
    assert_eq!(left.path(), g.path());
    let right = g.clone().join(TestGoal::absent(), &ids).unwrap();
    assert_eq!(right.path(), g.path());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn identical_goals_do_not_create_files() {
    let dir = tempfile::tempdir().unwrap();
    let ids = SequentialIds::new("j");
    let a = goal_file(dir.path(), "a.prp", "COVER EDGES\n");
    let b = goal_file(dir.path(), "b.prp", "COVER EDGES\n");
    assert_eq!(a, b);

    let joined = a.clone().join(b, &ids).unwrap();
    assert_eq!(joined.path(), a.path());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn differing_goals_are_concatenated_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let ids = SequentialIds::new("j");
    let a = goal_file(dir.path(), "a.prp", "first\n");
    let b = goal_file(dir.path(), "b.prp", "second\n");

    let joined = a.clone().join(b, &ids).unwrap();
    let out = dir.path().join("j-0.prp");
    assert_eq!(joined.path().as_path(), Some(out.as_path()));
    assert_eq!(fs::read_to_string(&out).unwrap(), "first\nsecond\n");
    assert_ne!(joined, a);
}

#[test]
fn absent_suite_adopts_the_other_path() {
    let dir = tempfile::tempdir().unwrap();
    let ids = SequentialIds::new("s");
    let other = TestSuite::new(dir.path().to_str().unwrap());

    let mut suite = TestSuite::absent();
    suite.join(&other, &ids).unwrap();
    assert_eq!(suite.path(), other.path());
}

#[test]
fn suite_join_nests_a_copy_of_the_other_tree() {
    let root = tempfile::tempdir().unwrap();
    let s1_dir = root.path().join("s1");
    let s2_dir = root.path().join("s2");
    fs::create_dir_all(s1_dir.join("old")).unwrap();
    fs::create_dir_all(s2_dir.join("nested")).unwrap();
    fs::write(s2_dir.join("test-1.xml"), "<test/>").unwrap();
    fs::write(s2_dir.join("nested").join("meta.xml"), "<meta/>").unwrap();

    let ids = SequentialIds::new("s");
    let mut s1 = TestSuite::new(s1_dir.to_str().unwrap());
    let s2 = TestSuite::new(s2_dir.to_str().unwrap());
    s1.join(&s2, &ids).unwrap();

    assert_eq!(s1.path().as_path(), Some(s1_dir.as_path()));
    let copied = s1_dir.join("s-0");
    assert_eq!(fs::read_to_string(copied.join("test-1.xml")).unwrap(), "<test/>");
    assert_eq!(fs::read_to_string(copied.join("nested").join("meta.xml")).unwrap(), "<meta/>");
    assert!(s1_dir.join("old").is_dir());
}

#[test]
fn absent_goals_equal_only_each_other() {
    let dir = tempfile::tempdir().unwrap();
    let present = goal_file(dir.path(), "g.prp", "COVER EDGES\n");

    assert_eq!(TestGoal::absent(), TestGoal::absent());
    assert_eq!(TestGoal::new(""), TestGoal::absent());
    assert_ne!(TestGoal::absent(), present);
    assert_ne!(present, TestGoal::absent());

    let absent = Artifact::construct(ArtifactKind::TestGoal, PathInput::Single("")).unwrap();
    let present = Artifact::TestGoal(present);
    assert_eq!(absent, Artifact::TestGoal(TestGoal::absent()));
    assert_ne!(absent, present);
    assert_ne!(present, absent);
}

#[test]
fn joining_an_absent_suite_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("test-1.xml"), "<test/>").unwrap();
    let ids = SequentialIds::new("s");
    let mut suite = TestSuite::new(dir.path().to_str().unwrap());
    let before = suite.clone();

    suite.join(&TestSuite::absent(), &ids).unwrap();
    assert_eq!(suite, before);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn joining_an_enclosing_suite_skips_the_copy_in_progress() {
    let root = tempfile::tempdir().unwrap();
    let outer = root.path().join("outer");
    let inner = outer.join("inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(outer.join("a.xml"), "<a/>").unwrap();
    fs::write(inner.join("b.xml"), "<b/>").unwrap();

    let ids = SequentialIds::new("s");
    let mut suite = TestSuite::new(inner.to_str().unwrap());
    suite.join(&TestSuite::new(outer.to_str().unwrap()), &ids).unwrap();

    let copy = inner.join("s-0");
    assert_eq!(fs::read_to_string(copy.join("a.xml")).unwrap(), "<a/>");
    assert_eq!(fs::read_to_string(copy.join("inner").join("b.xml")).unwrap(), "<b/>");
    assert!(!copy.join("inner").join("s-0").exists());
    assert_eq!(fs::read_dir(copy.join("inner")).unwrap().count(), 1);
}

#[test]
fn joining_a_suite_with_itself_copies_it_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("t.xml"), "<t/>").unwrap();
    let ids = SequentialIds::new("s");
    let mut suite = TestSuite::new(dir.path().to_str().unwrap());
    let same = suite.clone();

    suite.join(&same, &ids).unwrap();
    let copy = dir.path().join("s-0");
    assert_eq!(fs::read_to_string(copy.join("t.xml")).unwrap(), "<t/>");
    assert_eq!(fs::read_dir(&copy).unwrap().count(), 1);
}

#[test]
fn failed_suite_copy_leaves_no_partial_tree() {
    let root = tempfile::tempdir().unwrap();
    let own = root.path().join("own");
    fs::create_dir(&own).unwrap();
    let ids = SequentialIds::new("s");
    let mut suite = TestSuite::new(own.to_str().unwrap());

    let missing = TestSuite::new(root.path().join("missing").to_str().unwrap());
    assert!(matches!(suite.join(&missing, &ids), Err(JoinError::Io(_))));
    assert_eq!(fs::read_dir(&own).unwrap().count(), 0);
}

#[test]
fn goal_and_suite_do_not_join() {
    let ids = SequentialIds::new("x");
    let goal = Artifact::construct(ArtifactKind::TestGoal, PathInput::Single("g.prp")).unwrap();
    let suite = Artifact::construct(ArtifactKind::TestSuite, PathInput::Single("suite")).unwrap();
    match goal.join(suite, &ids) {
        Err(JoinError::TypeMismatch { left, right }) => {
            assert_eq!(left, ArtifactKind::TestGoal);
            assert_eq!(right, ArtifactKind::TestSuite);
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
}
