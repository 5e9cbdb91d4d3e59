use indoornav_core::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Two-storey wing: entrance, a corridor with one corner, a stair core
/// spanning three floors and a lab on the 2nd floor.
fn wing() -> BuildingGraph {
    let mut graph = BuildingGraph::new("East wing");
    let vertices = [
        Vertex::new("Entrance", VertexType::Door, 0.0, 0.0, 0),
        Vertex::new("c1", VertexType::Connection, 0.0, 0.0003, 0),
        Vertex::new("c2", VertexType::Connection, 0.0002, 0.0003, 0),
        Vertex::new("s0", VertexType::Stair, 0.0002, 0.0004, 0),
        Vertex::new("s1", VertexType::Stair, 0.0002, 0.0004, 1),
        Vertex::new("s2", VertexType::Stair, 0.0002, 0.0004, 2),
        Vertex::new("c3", VertexType::Connection, 0.0002, 0.0005, 2),
        Vertex::new("Lab door", VertexType::Door, 0.0001, 0.0005, 2),
        Vertex::new("Lab 201", VertexType::Room, 0.0001, 0.0006, 2),
    ];
    for vertex in vertices {
        graph.add_vertex(vertex).unwrap();
    }
    let edges = [
        ("Entrance", "c1", "ground corridor"),
        ("c1", "c2", "ground corridor"),
        ("c2", "s0", "stair access"),
        ("s0", "s1", "stair core"),
        ("s1", "s2", "stair core"),
        ("s2", "c3", "second corridor"),
        ("c3", "Lab door", "second corridor"),
        ("Lab door", "Lab 201", "lab"),
    ];
    for (a, b, name) in edges {
        graph.add_measured_edge(a, b, name).unwrap();
    }
    graph
}

fn directions(graph: &BuildingGraph, from: &str, to: &str) -> Directions {
    let route = shortest_path(graph, from, to).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    to_simple_instructions(graph, route.vertices(), &InstructionConfig::default(), &mut rng).unwrap()
}

fn names(graph: &BuildingGraph, path: &[VertexId]) -> Vec<String> {
    path.iter()
        .map(|&id| graph.vertex(id).unwrap().name().to_string())
        .collect()
}

#[test]
fn walks_up_one_stair_run() {
    let graph = wing();
    let directions = directions(&graph, "Entrance", "Lab 201");
    let maneuvers: Vec<Maneuver> = directions.instructions().iter().map(|i| i.maneuver).collect();

    assert_eq!(
        maneuvers,
        vec![
            Maneuver::Start {
                distance_m: Some(30)
            },
            Maneuver::Turn {
                direction: TurnDirection::Left,
                distance_m: 20
            },
            Maneuver::Vertical {
                kind: VertexType::Stair,
                turn: Some(TurnDirection::Right),
                direction: VerticalDirection::Up,
                floor: 2,
                then_walk_m: Some(10),
            },
            Maneuver::Turn {
                direction: TurnDirection::Right,
                distance_m: 10
            },
            Maneuver::Turn {
                direction: TurnDirection::Left,
                distance_m: 10
            },
            Maneuver::Arrive,
        ]
    );

    let texts = directions.texts();
    assert_eq!(texts[0], "Start at Entrance and walk 30 meters");
    assert_eq!(
        texts[2],
        "Turn right and take the stairs up to the 2nd floor, then walk 10 meters"
    );
    assert!(texts[3].ends_with(" through the door"));
    assert!(directions.instructions()[3].through_door);
    assert_eq!(texts[5], "You have arrived at Lab 201");

    assert_eq!(
        names(&graph, directions.path()),
        vec!["Entrance", "c1", "c2", "s2", "c3", "Lab door", "Lab 201"]
    );
}

#[test]
fn walks_down_to_the_ground_floor() {
    let graph = wing();
    let directions = directions(&graph, "Lab 201", "Entrance");

    let vertical: Vec<&Instruction> = directions
        .instructions()
        .iter()
        .filter(|i| matches!(i.maneuver, Maneuver::Vertical { .. }))
        .collect();
    assert_eq!(vertical.len(), 1);
    assert!(matches!(
        vertical[0].maneuver,
        Maneuver::Vertical {
            direction: VerticalDirection::Down,
            floor: 0,
            ..
        }
    ));
    assert!(vertical[0].text.contains("down to the Ground floor"));
}

#[test]
fn same_seed_same_wording() {
    let graph = wing();
    let first = directions(&graph, "Entrance", "Lab 201");
    let second = directions(&graph, "Entrance", "Lab 201");
    assert_eq!(first, second);
}

#[test]
fn trivial_routes() {
    let graph = wing();
    let mut rng = StdRng::seed_from_u64(1);
    let config = InstructionConfig::default();

    let lab = graph.vertex_id("Lab 201").unwrap();
    let door = graph.vertex_id("Lab door").unwrap();

    let here = to_simple_instructions(&graph, &[lab], &config, &mut rng).unwrap();
    assert_eq!(here.texts(), vec!["You are already at Lab 201"]);

    let next = to_simple_instructions(&graph, &[door, lab], &config, &mut rng).unwrap();
    assert_eq!(next.texts(), vec!["Lab 201 is right next to you"]);
    assert_eq!(next.path(), &[door, lab]);
}

#[test]
fn straight_corridor_is_start_and_arrival() {
    let mut graph = BuildingGraph::new("hall");
    for (i, lon) in [0.0, 0.0001, 0.0002, 0.0003].into_iter().enumerate() {
        graph
            .add_vertex(Vertex::new(format!("p{i}"), VertexType::Room, 0.0, lon, 0))
            .unwrap();
    }
    for i in 0..3 {
        graph
            .add_measured_edge(&format!("p{i}"), &format!("p{}", i + 1), "hall")
            .unwrap();
    }

    let directions = directions(&graph, "p0", "p3");
    assert_eq!(directions.path().len(), 2);
    assert_eq!(
        directions.texts(),
        vec!["Start at p0 and walk 30 meters", "You have arrived at p3"]
    );
}

#[test]
fn sub_meter_segments_are_skipped() {
    let mut graph = BuildingGraph::new("jog");
    let vertices = [
        Vertex::new("a", VertexType::Room, 0.0, 0.0, 0),
        Vertex::new("b", VertexType::Connection, 0.0, 0.0003, 0),
        // half a meter north of b
        Vertex::new("b'", VertexType::Connection, 0.000005, 0.0003, 0),
        Vertex::new("c", VertexType::Room, 0.000005, 0.0006, 0),
    ];
    for vertex in vertices {
        graph.add_vertex(vertex).unwrap();
    }
    graph.add_measured_edge("a", "b", "hall").unwrap();
    graph.add_measured_edge("b", "b'", "hall").unwrap();
    graph.add_measured_edge("b'", "c", "hall").unwrap();

    let directions = directions(&graph, "a", "c");
    let maneuvers: Vec<Maneuver> = directions.instructions().iter().map(|i| i.maneuver).collect();
    assert_eq!(
        maneuvers,
        vec![
            Maneuver::Start {
                distance_m: Some(30)
            },
            Maneuver::Turn {
                direction: TurnDirection::Right,
                distance_m: 30
            },
            Maneuver::Arrive,
        ]
    );
    assert_eq!(names(&graph, directions.path()), vec!["a", "b'", "c"]);
}

#[test]
fn elevator_runs_collapse_too() {
    let mut graph = BuildingGraph::new("tower");
    let vertices = [
        Vertex::new("Lobby", VertexType::Room, 0.0, 0.0, 0),
        Vertex::new("e0", VertexType::Elevator, 0.0, 0.0001, 0),
        Vertex::new("e1", VertexType::Elevator, 0.0, 0.0001, 1),
        Vertex::new("e3", VertexType::Elevator, 0.0, 0.0001, 3),
        Vertex::new("Roof bar", VertexType::Room, 0.0001, 0.0001, 3),
    ];
    for vertex in vertices {
        graph.add_vertex(vertex).unwrap();
    }
    graph.add_measured_edge("Lobby", "e0", "lobby").unwrap();
    graph.add_measured_edge("e0", "e1", "shaft").unwrap();
    graph.add_measured_edge("e1", "e3", "shaft").unwrap();
    graph.add_measured_edge("e3", "Roof bar", "bar").unwrap();

    let directions = directions(&graph, "Lobby", "Roof bar");
    let texts = directions.texts();
    assert_eq!(texts.len(), 3);
    assert_eq!(
        texts[1],
        "Take the elevator up to the 3rd floor, then walk 10 meters"
    );
}

#[test]
fn directions_export_to_geojson() {
    let graph = wing();
    let directions = directions(&graph, "Entrance", "Lab 201");
    let collection = directions.to_geojson(&graph).unwrap();
    assert_eq!(collection.features.len(), directions.instructions().len() + 1);

    let json = directions.to_geojson_string(&graph).unwrap();
    assert!(json.contains("FeatureCollection"));
    assert!(json.contains("Lab 201"));
}
