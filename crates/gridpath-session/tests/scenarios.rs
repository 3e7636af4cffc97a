use gridpath_core::{GridConfig, Point};
use gridpath_search::{FrontierKind, SearchConfig};
use gridpath_session::{NO_PATH, PATH_FOUND, Paint, Press, Session};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn detour_paints_visited_and_path() {
    let mut s = Session::from_layout(
        "
        S.#..
        ..#..
        ....E
        ",
    )
    .unwrap();
    let report = s.run().unwrap().unwrap();
    let path = report.path().unwrap();
    assert_eq!(path.hops(), 6);
    assert_eq!(
        path.intermediate(),
        &[p(0, 1), p(0, 2), p(1, 2), p(2, 2), p(3, 2)]
    );
    // (3, 1) ties with the end at distance 6 and is finalized first
    assert_eq!(s.to_string(), "So#..\n*o#o.\n****E\nPath found!");
    assert_eq!(s.canvas().count(Paint::Visited), 3);
    assert_eq!(report.visited, 10);
}

#[test]
fn walled_in_start() {
    let mut s = Session::from_layout(
        "
        S#.
        ##.
        ..E
        ",
    )
    .unwrap();
    let report = s.run().unwrap().unwrap();
    assert!(!report.is_found());
    assert_eq!(report.visited, 1);
    assert_eq!(s.message(), NO_PATH);
    assert_eq!(s.to_string(), "S#.\n##.\n..E\nNo path found.");
}

#[test]
fn pointer_session() {
    let mut s = Session::new(GridConfig::new(5, 5));
    assert_eq!(s.press(p(0, 2)).unwrap(), Press::Start);
    assert_eq!(s.press(p(4, 2)).unwrap(), Press::End);

    // vertical wall with a gap at the bottom
    assert_eq!(s.press(p(2, 0)).unwrap(), Press::Barrier);
    for y in 1..4 {
        assert!(s.drag(p(2, y)));
    }
    s.release();
    assert_eq!(s.grid().barrier_count(), 4);

    let report = s.run().unwrap().unwrap();
    assert_eq!(s.message(), PATH_FOUND);
    let path = report.path().unwrap();
    assert_eq!(path.hops(), 8);
    assert!(path.contains(p(2, 4)));
    assert_eq!(s.search().distance_at(p(4, 2)), Some(8));

    // close the gap
    assert_eq!(s.press(p(2, 4)).unwrap(), Press::Barrier);
    s.release();
    let report = s.run().unwrap().unwrap();
    assert!(!report.is_found());
    assert_eq!(s.canvas().count(Paint::Path), 0);
    assert_eq!(s.search().distance_at(p(4, 2)), None);

    s.clear();
    assert_eq!(s.to_string(), ".....\n.....\n.....\n.....\n.....");
    assert_eq!(s.run().unwrap(), None);
}

#[test]
fn frontiers_render_identically() {
    let layout = "
        S...#.....
        .##.#.###.
        .#..#...#.
        .#.##.#.#.
        .#....#..E
    ";
    let mut scan = Session::from_layout(layout).unwrap();
    let mut heap = Session::from_layout_with_config(
        layout,
        SearchConfig {
            frontier: FrontierKind::Heap,
        },
    )
    .unwrap();
    heap.run().unwrap();
    scan.run().unwrap();
    assert_eq!(scan.to_string(), heap.to_string());
}
