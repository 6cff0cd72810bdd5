use ringdraw_core::layout::{ring_layout, ring_sides, side_count};
use ringdraw_core::{Canvas, Error, Point, point};

fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn layout_returns_exactly_n_vertices_with_hub_at_center() {
    let canvas = Canvas::new(640.0, 480.0);
    for n in 1..=40 {
        let vertices = ring_layout(n, &canvas).expect("layout");
        assert_eq!(vertices.len(), n);
        let hub = vertices.last().expect("hub");
        assert_eq!(hub.position, canvas.center());
        assert_eq!(hub.label, n);
    }
}

#[test]
fn layout_ring_sides_account_for_every_non_hub_vertex() {
    let canvas = Canvas::new(400.0, 400.0);
    for n in 1..=60 {
        let total: usize = ring_sides(n, &canvas).iter().map(|s| s.count).sum();
        assert_eq!(total, n - 1, "n = {n}");
    }
}

#[test]
fn layout_full_sides_come_first() {
    let canvas = Canvas::new(400.0, 400.0);
    // n = 7: side_count = 2, remainder = 2.
    let sides = ring_sides(7, &canvas);
    assert_eq!(side_count(7), 2);
    assert_eq!(
        sides.map(|s| s.count),
        [2, 2, 1, 1],
        "first (n - 1) mod 4 sides are full"
    );
}

#[test]
fn layout_indices_and_labels_follow_placement_order() {
    let vertices = ring_layout(6, &Canvas::new(300.0, 300.0)).expect("layout");
    for (i, v) in vertices.iter().enumerate() {
        assert_eq!(v.index, i);
        assert_eq!(v.label, i + 1);
    }
}

#[test]
fn layout_four_vertices_on_square_canvas() {
    let vertices = ring_layout(4, &Canvas::new(400.0, 400.0)).expect("layout");
    assert_close(vertices[0].position, point(300.0, 100.0));
    assert_close(vertices[1].position, point(100.0, 100.0));
    assert_close(vertices[2].position, point(100.0, 300.0));
    assert_eq!(vertices[3].position, point(200.0, 200.0));
}

#[test]
fn layout_nine_vertices_walks_all_four_reduced_sides() {
    let vertices = ring_layout(9, &Canvas::new(400.0, 400.0)).expect("layout");
    let expected = [
        (350.0, 50.0),
        (200.0, 50.0),
        (50.0, 50.0),
        (50.0, 200.0),
        (50.0, 350.0),
        (200.0, 350.0),
        (350.0, 350.0),
        (350.0, 200.0),
        (200.0, 200.0),
    ];
    for (v, (x, y)) in vertices.iter().zip(expected) {
        assert_close(v.position, point(x, y));
    }
}

#[test]
fn layout_centres_horizontally_on_wide_canvas() {
    let vertices = ring_layout(4, &Canvas::new(800.0, 400.0)).expect("layout");
    assert_close(vertices[0].position, point(500.0, 100.0));
    assert_close(vertices[1].position, point(300.0, 100.0));
    assert_eq!(vertices[3].position, point(400.0, 200.0));
}

#[test]
fn layout_never_places_two_vertices_on_the_same_spot() {
    let canvas = Canvas::new(500.0, 500.0);
    for n in 2..=50 {
        let vertices = ring_layout(n, &canvas).expect("layout");
        for (i, a) in vertices.iter().enumerate() {
            for b in &vertices[i + 1..] {
                assert!(
                    (a.position - b.position).length() > 1e-6,
                    "n = {n}: vertices {} and {} coincide",
                    a.index,
                    b.index
                );
            }
        }
    }
}

#[test]
fn layout_is_deterministic() {
    let canvas = Canvas::new(512.0, 384.0);
    let a = ring_layout(17, &canvas).expect("layout");
    let b = ring_layout(17, &canvas).expect("layout");
    assert_eq!(a, b);
}

#[test]
fn layout_single_vertex_is_just_the_hub() {
    let vertices = ring_layout(1, &Canvas::new(100.0, 80.0)).expect("layout");
    assert_eq!(vertices.len(), 1);
    assert_eq!(vertices[0].position, point(50.0, 40.0));
    assert_eq!(vertices[0].label, 1);
}

#[test]
fn layout_rejects_empty_graph_and_bad_canvas() {
    assert!(matches!(
        ring_layout(0, &Canvas::new(100.0, 100.0)),
        Err(Error::EmptyLayout)
    ));
    assert!(matches!(
        ring_layout(3, &Canvas::new(0.0, 100.0)),
        Err(Error::InvalidCanvas { .. })
    ));
    assert!(matches!(
        ring_layout(3, &Canvas::new(100.0, f64::NAN)),
        Err(Error::InvalidCanvas { .. })
    ));
}
