extern crate city_network_plot;

use city_network_plot::driver::{collect_panels, make_rng};
use city_network_plot::{ParsePolicy, PlotError, VisualizationParameters};
use std::fs;
use std::path::Path;

fn write(base: &Path, name: &str, contents: &str) {
    let path = base.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

// Amsterdam is complete, Berlin lacks its edge file,
// Oslo lacks restaurants and keeps its files under POI/.
fn three_cities(base: &Path) {
    write(base, "RoadVerticesAMS.txt", "1 4.90 52.37\n2 4.91 52.38\n3 4.92 52.39\n");
    write(base, "RoadEdgesAMS.txt", "0 1 2\n1 2 3\n2 3 99\n");
    write(base, "POI/RestaurantsAMS.txt", "1 4.905 52.375\n");

    write(base, "RoadVerticesBER.txt", "1 13.40 52.52\n");
    write(base, "POI/RestaurantsBER.txt", "1 13.41 52.53\n");

    write(base, "POI/RoadVerticesOslo.txt", "10 10.75 59.91\n11 10.76 59.92\n");
    write(base, "POI/RoadEdgesOslo.txt", "0 10 11\n");
}

fn params(base: &Path) -> VisualizationParameters {
    VisualizationParameters {
        base_path: base.to_path_buf(),
        output_file: base.join("out.png"),
        show: false,
        ..VisualizationParameters::default()
    }
}

#[test]
fn missing_files_only_blank_their_own_panel() {
    let dir = tempfile::tempdir().unwrap();
    three_cities(dir.path());

    let panels = collect_panels(&params(dir.path()), &mut make_rng(Some(1))).unwrap();
    let codes: Vec<&str> = panels.iter().map(|p| p.city.code.as_str()).collect();
    assert_eq!(codes, ["AMS", "BER", "OSLO"]);

    let ams = panels[0].bundle.as_ref().unwrap();
    assert_eq!(ams.num_vertices(), 3);
    assert_eq!(ams.edges, vec![((4.90, 52.37), (4.91, 52.38)), ((4.91, 52.38), (4.92, 52.39))]);
    assert_eq!(ams.restaurants, vec![(4.905, 52.375)]);
    assert_eq!(ams.caption("Amsterdam"), "Amsterdam\n3 vertices, 2 edges, 1 restaurants");

    assert!(panels[1].bundle.is_none());

    let oslo = panels[2].bundle.as_ref().unwrap();
    assert_eq!(oslo.num_edges(), 1);
    assert!(oslo.restaurants.is_empty());
}

#[test]
fn sampled_view_respects_the_edge_budget() {
    let dir = tempfile::tempdir().unwrap();
    let vertices: String = (0..200)
        .map(|i| format!("{} {} 52.0\n", i, 4.0 + i as f64 * 0.001))
        .collect();
    let edges: String = (1..200).map(|i| format!("{} {} {}\n", i, i - 1, i)).collect();
    write(dir.path(), "RoadVerticesAMS.txt", &vertices);
    write(dir.path(), "RoadEdgesAMS.txt", &edges);

    let params = VisualizationParameters {
        max_edges: 25,
        seed: Some(3),
        ..params(dir.path())
    };
    let first = collect_panels(&params, &mut make_rng(params.seed)).unwrap();
    let second = collect_panels(&params, &mut make_rng(params.seed)).unwrap();

    let bundle = first[0].bundle.as_ref().unwrap();
    assert_eq!(bundle.num_edges(), 199);
    assert_eq!(bundle.sampled_edges.len(), 25);
    assert!(bundle.sampled_edges.iter().all(|e| bundle.edges.contains(e)));
    for (i, e) in bundle.sampled_edges.iter().enumerate() {
        assert!(!bundle.sampled_edges[i + 1..].contains(e));
    }
    assert_eq!(bundle.sampled_edges, second[0].bundle.as_ref().unwrap().sampled_edges);
}

#[test]
fn bad_number_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    three_cities(dir.path());
    write(dir.path(), "RoadEdgesBER.txt", "0 1 one\n");

    let result = collect_panels(&params(dir.path()), &mut make_rng(Some(1)));
    match result {
        Err(PlotError::Parse { line, field, value, .. }) => {
            assert_eq!((line, field, value.as_str()), (1, 2, "one"));
        }
        other => panic!("expected a parse error, got {:?}", other.map(|p| p.len())),
    }
}

#[test]
fn lenient_policy_keeps_the_run_alive() {
    let dir = tempfile::tempdir().unwrap();
    three_cities(dir.path());
    write(dir.path(), "RoadEdgesBER.txt", "0 1 one\n0 1 1\n");

    let params = VisualizationParameters {
        parse_policy: ParsePolicy::Lenient,
        ..params(dir.path())
    };
    let panels = collect_panels(&params, &mut make_rng(Some(1))).unwrap();
    let berlin = panels[1].bundle.as_ref().unwrap();
    assert_eq!(berlin.edges, vec![((13.40, 52.52), (13.40, 52.52))]);
    assert_eq!(berlin.num_restaurants(), 1);
}
