use std::fs;
use std::path::Path;

use shapes_catalog::{ApplyOutcome, CatalogWalker, apply, build_manifest, write_manifest};
use shapes_core::{DescriptiveName, Planner};

const HEART_CLUSTER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
  <!-- Double heart cluster, bold outline -->
  <polygon fill="none" points="50,90 10,40 90,40"/>
  <circle fill="none" cx="30" cy="30" r="20"/>
  <circle fill="none" cx="70" cy="30" r="20"/>
  <circle fill="none" cx="50" cy="10" r="5"/>
  <circle cx="20" cy="80" r="5"/>
  <circle cx="80" cy="80" r="5"/>
</svg>"#;

const MOUNTAIN_RANGE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <polygon points="0,100 20,40 40,100"/>
  <polygon points="20,100 45,20 70,100"/>
  <polygon points="50,100 70,50 90,100"/>
  <polygon points="60,100 85,30 100,100"/>
</svg>"#;

const PLAIN_WAVE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 50 Q 25 25 50 50"/></svg>"#;

const BROKEN_SPARKLE: &str = "<!-- Soft scattered sparkle --><svg><circle></svg";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn seed_catalog(root: &Path) {
    write(root, "hmh/hearts/heart_01.svg", HEART_CLUSTER);
    write(root, "hmh/mountains/mountain_01.svg", MOUNTAIN_RANGE);
    write(root, "hmh/waves/wave_01.svg", PLAIN_WAVE);
    write(root, "hmh/waves/wave_02.svg", PLAIN_WAVE);
    write(root, "ss/sparkles/sparkle_01.svg", BROKEN_SPARKLE);
    write(root, "ss/waves/wave_01.svg", PLAIN_WAVE);
}

fn walker(root: &Path) -> CatalogWalker {
    CatalogWalker::new(root, vec!["hmh".to_string(), "ss".to_string()])
}

#[tokio::test]
async fn test_preview_mapping() {
    let dir = tempfile::tempdir().unwrap();
    seed_catalog(dir.path());

    let assets = walker(dir.path()).load_assets().await.unwrap();
    let plan = Planner::new().plan(&assets);

    let mapping: Vec<(&str, &str, &str, &str)> = plan
        .records()
        .iter()
        .map(|r| {
            (
                r.brand.as_str(),
                r.category.label(),
                r.original_name.as_str(),
                r.new_name.as_str(),
            )
        })
        .collect();

    assert_eq!(
        mapping,
        vec![
            ("hmh", "hearts", "heart_01.svg", "double-bold-outline-heart.svg"),
            ("hmh", "mountains", "mountain_01.svg", "range-mountain.svg"),
            ("hmh", "waves", "wave_01.svg", "wave.svg"),
            ("hmh", "waves", "wave_02.svg", "wave-v2.svg"),
            ("ss", "sparkles", "sparkle_01.svg", "soft-scattered-sparkle.svg"),
            ("ss", "waves", "wave_01.svg", "wave.svg"),
        ]
    );

    // Preview touches nothing
    assert!(dir.path().join("hmh/waves/wave_01.svg").exists());
    assert!(!dir.path().join("hmh/waves/wave.svg").exists());
}

#[tokio::test]
async fn test_preview_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    seed_catalog(dir.path());

    let first = Planner::new().plan(&walker(dir.path()).load_assets().await.unwrap());
    let second = Planner::new().plan(&walker(dir.path()).load_assets().await.unwrap());

    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[tokio::test]
async fn test_generated_names_are_valid() {
    let dir = tempfile::tempdir().unwrap();
    seed_catalog(dir.path());

    let plan = Planner::new().plan(&walker(dir.path()).load_assets().await.unwrap());
    for record in plan.records() {
        let name = record.new_name.as_str();
        assert!(DescriptiveName::parse(name).is_ok(), "{name}");

        let stem = record.new_name.stem();
        let stem = match stem.rsplit_once("-v") {
            Some((head, n)) if n.chars().all(|c| c.is_ascii_digit()) => head,
            _ => stem,
        };
        assert!(stem.split('-').count() <= 4, "{name}");
    }
}

#[tokio::test]
async fn test_commit_then_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    seed_catalog(root);

    let walker = walker(root);
    let plan = Planner::new().plan(&walker.load_assets().await.unwrap());
    let report = apply(&plan).await;

    assert_eq!(report.renamed(), plan.len());
    assert!(report.is_clean());
    assert!(root.join("hmh/waves/wave.svg").exists());
    assert!(root.join("hmh/waves/wave-v2.svg").exists());
    assert!(root.join("ss/sparkles/soft-scattered-sparkle.svg").exists());

    let manifest = build_manifest(&walker.walk().unwrap());
    let manifest_path = root.join("manifest.json");
    write_manifest(&manifest_path, &manifest).await.unwrap();

    let written: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
    let files: Vec<&str> = written.iter().map(|e| e["file"].as_str().unwrap()).collect();
    assert_eq!(
        files,
        vec![
            "hmh/hearts/double-bold-outline-heart.svg",
            "hmh/mountains/range-mountain.svg",
            "hmh/waves/wave-v2.svg",
            "hmh/waves/wave.svg",
            "ss/sparkles/soft-scattered-sparkle.svg",
            "ss/waves/wave.svg",
        ]
    );
    assert_eq!(written[1]["name"], "range-mountain");
}

#[tokio::test]
async fn test_second_commit_never_clobbers() {
    let dir = tempfile::tempdir().unwrap();
    seed_catalog(dir.path());
    let walker = walker(dir.path());

    let plan = Planner::new().plan(&walker.load_assets().await.unwrap());
    apply(&plan).await;

    // wave-v2.svg now walks before wave.svg, so the two swap targets and both skip
    let replan = Planner::new().plan(&walker.load_assets().await.unwrap());
    let report = apply(&replan).await;

    assert_eq!(report.renamed(), 0);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.skipped(), 2);
    assert_eq!(report.unchanged(), replan.len() - 2);
    assert!(
        report
            .results
            .iter()
            .filter(|r| r.outcome.is_skip())
            .all(|r| r.outcome == ApplyOutcome::SkippedTargetExists)
    );
    assert!(dir.path().join("hmh/waves/wave.svg").exists());
    assert!(dir.path().join("hmh/waves/wave-v2.svg").exists());
}
