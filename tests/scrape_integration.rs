//! Scrape pipeline integration tests
//!
//! End-to-end properties of fetch -> parse -> extract -> format:
//! sample counts, labeling, HA state encoding, sparse collection, and
//! partial extraction on malformed fields.

use namenode_exporter::collector::{InstanceLabels, JmxClient, NameNodeCollector};
use namenode_exporter::exporter::ExpositionFormatter;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fs_bean() -> Value {
    json!({
        "name": "Hadoop:service=NameNode,name=FSNamesystemState",
        "TotalLoad": 12.0,
        "MissingBlocks": 0.0,
        "CorruptBlocks": 1.0,
        "ExcessBlocks": 0.0,
        "BlocksTotal": 80000.0,
        "FilesTotal": 45000.0,
        "LastCheckpointTime": 1700000000000.0,
        "CapacityTotal": 8.0e12,
        "CapacityUsed": 3.0e12,
        "CapacityRemaining": 5.0e12,
        "CapacityUsedNonDFS": 1.0e10,
        "StaleDataNodes": 0.0,
        "NumLiveDataNodes": 5.0,
        "NumDeadDataNodes": 1.0,
        "VolumeFailuresTotal": 0.0,
        "EstimatedCapacityLostTotal": 0.0,
        "tag.HAState": "Active"
    })
}

fn jvm_bean() -> Value {
    json!({
        "name": "Hadoop:service=NameNode,name=JvmMetrics",
        "GcCount": 17.0,
        "GcTimeMillis": 350.0,
        "MemMaxM": 4096.0,
        "MemHeapUsedM": 512.0,
        "MemHeapMaxM": 2048.0,
        "MemNonHeapUsedM": 96.0,
        "MemNonHeapMaxM": 256.0
    })
}

async fn mock_jmx(beans: Vec<Value>) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jmx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "beans": beans })))
        .mount(&mock_server)
        .await;

    mock_server
}

fn collector_for(server: &MockServer) -> NameNodeCollector {
    let client = JmxClient::new(&format!("{}/jmx", server.uri()), 5000).unwrap();
    NameNodeCollector::new(client, InstanceLabels::new("c1", "h1"), "namenode")
}

#[tokio::test]
async fn test_fs_bean_yields_seventeen_labeled_samples() {
    let server = mock_jmx(vec![fs_bean()]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();

    assert_eq!(samples.len(), 17);
    for sample in &samples {
        let labels: Vec<(&str, &str)> = sample
            .labels
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(labels, vec![("cluster", "c1"), ("host", "h1")]);
    }
}

#[tokio::test]
async fn test_active_state_renders_documented_sample_line() {
    let server = mock_jmx(vec![fs_bean()]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();
    let output = ExpositionFormatter::new().format(&samples);

    assert!(output.contains(r#"namenode_HAState{cluster="c1",host="h1"} 1"#));
    assert!(output.contains(r#"namenode_TotalLoad{cluster="c1",host="h1"} 12"#));
    assert!(output.contains("# TYPE namenode_HAState gauge"));
}

#[tokio::test]
async fn test_standby_state_encoding_through_pipeline() {
    let mut bean = fs_bean();
    bean["tag.HAState"] = json!("STANDBY");
    let server = mock_jmx(vec![bean]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();
    let ha = samples.iter().find(|s| s.name == "namenode_HAState").unwrap();
    assert_eq!(ha.value, 4.0);
}

#[tokio::test]
async fn test_unknown_state_gets_sentinel() {
    let mut bean = fs_bean();
    bean["tag.HAState"] = json!("safemode");
    let server = mock_jmx(vec![bean]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();
    let ha = samples.iter().find(|s| s.name == "namenode_HAState").unwrap();
    assert_eq!(ha.value, -1.0);

    let output = ExpositionFormatter::new().format(&samples);
    assert!(output.contains(r#"namenode_HAState{cluster="c1",host="h1"} -1"#));
}

#[tokio::test]
async fn test_absent_fs_bean_emits_no_fs_series() {
    let server = mock_jmx(vec![jvm_bean()]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();

    assert_eq!(samples.len(), 7);
    assert!(!samples.iter().any(|s| s.name == "namenode_TotalLoad"));
    assert!(!samples.iter().any(|s| s.name == "namenode_HAState"));
}

#[tokio::test]
async fn test_wrong_typed_field_skips_one_sample() {
    let mut bean = jvm_bean();
    bean["MemHeapUsedM"] = json!("not-a-number");
    let server = mock_jmx(vec![bean]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();

    assert_eq!(samples.len(), 6);
    assert!(!samples.iter().any(|s| s.name == "namenode_MemHeapUsedM"));
    assert!(samples.iter().any(|s| s.name == "namenode_MemNonHeapUsedM"));
}

#[tokio::test]
async fn test_identical_documents_render_identical_output() {
    let server = mock_jmx(vec![fs_bean(), jvm_bean()]).await;
    let collector = collector_for(&server);

    let first = collector.collect().await.unwrap();
    let second = collector.collect().await.unwrap();

    let formatter = ExpositionFormatter::new();
    assert_eq!(formatter.format(&first), formatter.format(&second));
}

#[tokio::test]
async fn test_unrelated_beans_are_ignored() {
    let server = mock_jmx(vec![
        json!({"name": "java.lang:type=MemoryPool,name=Code Cache", "Usage": 1.0}),
        fs_bean(),
        json!({"name": "Hadoop:service=NameNode,name=RpcActivity", "RpcQueueTimeAvgTime": 0.2}),
    ])
    .await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();
    assert_eq!(samples.len(), 17);
}

#[tokio::test]
async fn test_full_document_sample_count() {
    let server = mock_jmx(vec![fs_bean(), jvm_bean()]).await;
    let collector = collector_for(&server);

    let samples = collector.collect().await.unwrap();
    assert_eq!(samples.len(), 24);
}
