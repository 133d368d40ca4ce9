use hgen_exp::{DatasetPlan, Method};

#[test]
fn bundled_tree_plan_parses() {
    let plan = DatasetPlan::from_yaml_str(include_str!("../../../plans/tree_sperner.yaml")).unwrap();
    assert_eq!(plan.method, Method::FromTree);
    assert!(plan.flags.tree.sperner);
    assert_eq!(plan.instances_per_p, 25);
    plan.validate().unwrap();
}

#[test]
fn bundled_scratch_plan_uses_default_grid() {
    let plan =
        DatasetPlan::from_yaml_str(include_str!("../../../plans/scratch_default.yaml")).unwrap();
    assert_eq!(plan.method, Method::FromScratch);
    assert_eq!(plan.probabilities, DatasetPlan::default_grid());
    plan.validate().unwrap();
}

#[test]
fn malformed_plan_is_a_parse_error() {
    let err = DatasetPlan::from_yaml_str("method: from_forest\n").unwrap_err();
    assert_eq!(err.info().code, "plan-yaml");
}

#[test]
fn missing_plan_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DatasetPlan::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, hgen_core::HgenError::Io(_)));
}
