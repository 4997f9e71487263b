//! Integration tests for full generation runs

use relay_confgen::components::{
    stream_types, CONDITION_TYPES, METRICS_TYPES, PROCESSOR_TYPES, TRACER_TYPES,
};
use relay_confgen::core::generate::Generator;
use relay_confgen::core::transform::placeholder::Placeholder;
use relay_confgen::core::transform::{AliasMap, FilterLists};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).unwrap_or_else(|e| panic!("reading {rel}: {e}"))
}

#[test]
fn test_every_type_gets_a_file() {
    let temp_dir = TempDir::new().unwrap();
    Generator::new(temp_dir.path()).run().unwrap();

    for kind in stream_types() {
        assert!(temp_dir.path().join(format!("{kind}.yaml")).is_file(), "{kind}");
    }
    for (dir, types) in [
        ("processors", PROCESSOR_TYPES),
        ("conditions", CONDITION_TYPES),
        ("metrics", METRICS_TYPES),
        ("tracers", TRACER_TYPES),
    ] {
        for kind in types {
            let path = temp_dir.path().join(dir).join(format!("{kind}.yaml"));
            assert!(path.is_file(), "{}", path.display());
        }
    }
    assert!(temp_dir.path().join("env/default.yaml").is_file());
    assert!(temp_dir.path().join("env/README.md").is_file());
}

#[test]
fn test_second_run_skips_every_file() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(temp_dir.path());

    let first = generator.run().unwrap();
    let mtime = fs::metadata(temp_dir.path().join("env/README.md"))
        .unwrap()
        .modified()
        .unwrap();

    let second = generator.run().unwrap();
    assert!(second.generated.is_empty());
    assert_eq!(second.skipped.len(), first.total());

    let mtime_after = fs::metadata(temp_dir.path().join("env/README.md"))
        .unwrap()
        .modified()
        .unwrap();
    assert_eq!(mtime, mtime_after);
}

#[test]
fn test_changed_file_is_regenerated() {
    let temp_dir = TempDir::new().unwrap();
    let generator = Generator::new(temp_dir.path());
    generator.run().unwrap();

    let kafka = temp_dir.path().join("kafka.yaml");
    let original = fs::read(&kafka).unwrap();
    fs::write(&kafka, b"tampered").unwrap();

    let summary = generator.run().unwrap();
    assert_eq!(summary.generated, vec![kafka.clone()]);
    assert_eq!(fs::read(&kafka).unwrap(), original);
}

#[test]
fn test_env_config_placeholders_match_docs() {
    let temp_dir = TempDir::new().unwrap();
    Generator::new(temp_dir.path()).run().unwrap();

    let yaml = read(temp_dir.path(), "env/default.yaml");
    assert!(yaml.starts_with(
        "# RELAY LINT DISABLE\n# This file was auto generated by relay-confgen.\n"
    ));

    let docs = read(temp_dir.path(), "env/README.md");
    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(doc["input"]["type"].as_str(), Some("broker"));
    assert_eq!(doc["output"]["type"].as_str(), Some("broker"));

    let topic = doc["input"]["broker"]["inputs"][0]["kafka"]["topic"]
        .as_str()
        .unwrap();
    let placeholder = Placeholder::parse(topic).unwrap();
    assert_eq!(placeholder.path, "INPUT_KAFKA_TOPIC");
    assert_eq!(placeholder.default_value(), "relay_stream");
    assert!(docs.contains("INPUT_KAFKA_TOPIC"));

    let pattern = doc["output"]["broker"]["pattern"].as_str().unwrap();
    assert_eq!(pattern, "${OUTPUTS_PATTERN:greedy}");
}

#[test]
fn test_env_docs_priority_order() {
    let temp_dir = TempDir::new().unwrap();
    Generator::new(temp_dir.path()).run().unwrap();

    let docs = read(temp_dir.path(), "env/README.md");
    let input = docs.find("\n## INPUT\n").unwrap();
    let inputs = docs[input..].find("INPUTS ").unwrap();
    let input_type = docs[input..].find("INPUT_TYPE ").unwrap();
    let input_amqp = docs[input..].find("INPUT_AMQP_URL").unwrap();
    assert!(inputs < input_type);
    assert!(input_type < input_amqp);
}

#[test]
fn test_custom_filters_change_env_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut block = FilterLists::standard().block().to_vec();
    block.push("KAFKA".to_string());
    let lists = FilterLists::new(
        FilterLists::standard().preserve().to_vec(),
        block,
        AliasMap::standard(),
    );

    Generator::with_filters(temp_dir.path(), lists).run().unwrap();

    let docs = read(temp_dir.path(), "env/README.md");
    let contents = docs.find("## Contents").unwrap();
    assert!(!docs[contents..].contains("KAFKA"));
    // Per-type examples do not go through the filters
    assert!(temp_dir.path().join("kafka.yaml").is_file());
}

#[test]
fn test_condition_example_content() {
    let temp_dir = TempDir::new().unwrap();
    Generator::new(temp_dir.path()).run().unwrap();

    let yaml = read(temp_dir.path(), "conditions/text.yaml");
    assert!(yaml.starts_with("# This file was auto generated by relay-confgen.\n"));

    let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    let processor = &doc["pipeline"]["processors"][0];
    assert_eq!(processor["type"].as_str(), Some("filter_parts"));
    assert_eq!(processor["filter_parts"]["text"]["operator"].as_str(), Some("equals_cs"));
}
