use std::io::Write;
use std::process::Command;

fn netgraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_netgraph"))
}

fn net_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_listing_then_dfs_then_bfs() {
    let file = net_file("*Vertices 4\n*Edges\n1 2\n3 4\n");
    let output = netgraph().arg(file.path()).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "vertex 1:->2\n\
         vertex 2:->1\n\
         vertex 3:->4\n\
         vertex 4:->3\n\
         Depth-First Traversal starting from vertex 1:\n1 2 \n\
         Depth-First Traversal starting from vertex 3:\n3 4 \n\
         Breadth-First Traversal starting from vertex 1:\n1 2 \n\
         Breadth-First Traversal starting from vertex 3:\n3 4 \n"
    );
}

#[test]
fn json_output_uses_one_based_ids() {
    let file = net_file("*Vertices 3\n*Edges\n1 2\n2 3\n");
    let output = netgraph()
        .arg(file.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], 3);
    assert_eq!(json["adjacency"], serde_json::json!([[2], [1, 3], [2]]));
    assert_eq!(
        json["depth_first"],
        serde_json::json!([{ "root": 1, "vertices": [1, 2, 3] }])
    );
}

#[test]
fn missing_argument_exits_with_status_one() {
    let output = netgraph().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn extra_argument_exits_with_status_one() {
    let output = netgraph().args(["a.net", "b.net"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unreadable_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = netgraph().arg(dir.path().join("none.net")).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to import"));
    assert!(output.stdout.is_empty());
}

#[test]
fn vertex_limit_is_enforced() {
    let file = net_file("*Vertices 10\n*Edges\n");
    let output = netgraph()
        .arg(file.path())
        .args(["--max-vertices", "5"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
