use lloyd::{Cluster, Record};
use lloyd_datasets::{ClusterWriter, DatasetError, TextLoader};
use ndarray::array;
use std::fs;

fn cluster(records: Vec<Record<f64>>) -> Cluster<f64> {
    records.into_iter().collect()
}

#[test]
fn written_clusters_load_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let clusters = vec![
        cluster(vec![
            Record::new(array![0.1, -3.25], 4),
            Record::new(array![1e-7, 12.0], 1),
        ]),
        cluster(vec![Record::new(array![f64::MAX, 0.0], 0)]),
    ];

    let paths = ClusterWriter::default()
        .write_clusters(dir.path(), &clusters)
        .unwrap();
    assert_eq!(paths[0], dir.path().join("class1.data"));
    assert_eq!(paths[1], dir.path().join("class2.data"));

    let loader = TextLoader::default();
    for (path, cluster) in paths.iter().zip(&clusters) {
        let report = loader.load_file::<f64>(path).unwrap();
        assert!(report.rejected.is_empty());

        let expected: Vec<_> = cluster
            .sorted_by_original_index()
            .into_iter()
            .map(|r| r.values().to_owned())
            .collect();
        let loaded: Vec<_> = report.records.iter().map(|r| r.values().to_owned()).collect();
        assert_eq!(loaded, expected);
    }
}

#[test]
fn empty_clusters_produce_empty_files() {
    let dir = tempfile::tempdir().unwrap();
    let clusters = vec![Cluster::<f64>::new(), cluster(vec![Record::new(array![1.0], 0)])];

    let paths = ClusterWriter::new("out", "txt")
        .write_clusters(dir.path(), &clusters)
        .unwrap();

    assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "");
    assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "1.0");
    assert!(dir.path().join("out2.txt").exists());
}

#[test]
fn duplicate_lines_collapse_to_the_first_occurrence() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("points.data");
    fs::write(&input, "2 2\n1 1\n2 2\n2 2\n3 3").unwrap();

    let report = TextLoader::default().load_file::<f64>(&input).unwrap();
    let indices: Vec<_> = report
        .records
        .iter()
        .filter_map(|r| r.original_index())
        .collect();
    assert_eq!(indices, vec![0, 1, 4]);
    assert_eq!(report.duplicates, vec![2, 3]);
}

#[test]
fn wide_gaps_become_empty_fields() {
    let raw = format!("1    2\n3{}4\n5      6", " ".repeat(11));
    let report = TextLoader::default().load_str::<f64>(&raw);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line_number, 1);
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let res = TextLoader::default().load_file::<f64>(dir.path().join("nope.data"));
    assert!(matches!(res, Err(DatasetError::Read { .. })));
}

#[test]
fn writing_into_a_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let clusters = vec![cluster(vec![Record::new(array![1.0], 0)])];
    let res = ClusterWriter::default().write_clusters(dir.path().join("missing"), &clusters);
    assert!(matches!(res, Err(DatasetError::Write { .. })));
}
